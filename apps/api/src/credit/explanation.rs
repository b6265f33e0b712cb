//! Explanation builder — maps a score and profile to a category, risk level,
//! ordered key factors and a fixed set of improvement tips.

use serde::{Deserialize, Serialize};

use crate::credit::profile::ProfileRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreCategory {
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    Good,
    Fair,
    Poor,
}

impl ScoreCategory {
    pub fn from_score(score: u16) -> Self {
        match score {
            s if s >= 800 => ScoreCategory::Excellent,
            s if s >= 740 => ScoreCategory::VeryGood,
            s if s >= 670 => ScoreCategory::Good,
            s if s >= 580 => ScoreCategory::Fair,
            _ => ScoreCategory::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreCategory::Excellent => "Excellent",
            ScoreCategory::VeryGood => "Very Good",
            ScoreCategory::Good => "Good",
            ScoreCategory::Fair => "Fair",
            ScoreCategory::Poor => "Poor",
        }
    }

    /// Display colour used by the mobile client's score gauge.
    pub fn color(&self) -> &'static str {
        match self {
            ScoreCategory::Excellent => "green",
            ScoreCategory::VeryGood => "light_green",
            ScoreCategory::Good => "yellow",
            ScoreCategory::Fair => "orange",
            ScoreCategory::Poor => "red",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: u16) -> Self {
        if score > 700 {
            RiskLevel::Low
        } else if score > 600 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    pub score_category: ScoreCategory,
    pub category_color: &'static str,
    pub confidence: f64,
    pub risk_level: RiskLevel,
    pub key_factors: Vec<String>,
    pub improvement_tips: Vec<String>,
}

const TIPS_REBUILD: [&str; 3] = [
    "Focus on paying all bills on time",
    "Reduce credit card balances below 30% of limits",
    "Avoid opening new credit accounts for now",
];

const TIPS_STEADY: [&str; 3] = [
    "Continue maintaining good payment habits",
    "Consider paying down debt to improve utilization ratio",
    "Keep old accounts open to maintain credit history length",
];

const TIPS_MAINTAIN: [&str; 3] = [
    "Maintain your excellent credit habits",
    "Consider becoming an authorized user on family accounts",
    "Monitor your credit report regularly for accuracy",
];

pub fn explain(profile: &ProfileRecord, score: u16, confidence: f64) -> Explanation {
    let score_category = ScoreCategory::from_score(score);
    Explanation {
        score_category,
        category_color: score_category.color(),
        confidence: confidence.clamp(0.0, 1.0),
        risk_level: RiskLevel::from_score(score),
        key_factors: key_factors(profile),
        improvement_tips: improvement_tips(score),
    }
}

/// Most impactful first: income, then debt ratio, then utilization.
/// Only matching conditions are listed, so the result may be empty.
pub fn key_factors(profile: &ProfileRecord) -> Vec<String> {
    let mut factors = Vec::new();

    let income = profile.monthly_income;
    if income > 75_000.0 {
        factors.push("Strong income level");
    } else if income < 30_000.0 {
        factors.push("Low income may limit credit options");
    }

    let debt_ratio = profile.debt_to_income();
    if debt_ratio > 0.5 {
        factors.push("High debt-to-income ratio");
    } else if debt_ratio < 0.3 {
        factors.push("Healthy debt-to-income ratio");
    }

    let utilization = profile.credit_utilization;
    if utilization > 80.0 {
        factors.push("High credit utilization");
    } else if utilization < 10.0 {
        factors.push("Excellent credit utilization");
    }

    factors.into_iter().map(str::to_string).collect()
}

/// Always exactly three tips, chosen by score band.
pub fn improvement_tips(score: u16) -> Vec<String> {
    let tips = if score < 650 {
        TIPS_REBUILD
    } else if score < 750 {
        TIPS_STEADY
    } else {
        TIPS_MAINTAIN
    };
    tips.iter().map(|t| t.to_string()).collect()
}
