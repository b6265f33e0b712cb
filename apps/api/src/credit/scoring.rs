//! Credit scoring — pluggable, trait-based score source over a normalized profile.
//!
//! Default: `RuleBasedScorer` (additive thresholds, deterministic, no I/O).
//! `ScoreSourceKind::LearnedModel` is reserved for a trained model; no
//! implementation ships with the service.
//!
//! `AppState` holds an `Arc<dyn ScoreSource>`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::credit::profile::ProfileRecord;

pub const BASE_SCORE: i32 = 650;
pub const MIN_SCORE: u16 = 300;
pub const MAX_SCORE: u16 = 850;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorSentiment {
    Positive,
    Negative,
    Neutral,
}

impl FactorSentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            FactorSentiment::Positive => "positive",
            FactorSentiment::Negative => "negative",
            FactorSentiment::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSourceKind {
    RuleBased,
    /// Reserved for a trained model backend.
    #[allow(dead_code)]
    LearnedModel,
}

impl ScoreSourceKind {
    /// Fixed confidence reported by each backend.
    pub fn confidence(&self) -> f64 {
        match self {
            ScoreSourceKind::RuleBased => 0.75,
            ScoreSourceKind::LearnedModel => 0.9,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub score: u16,
    pub confidence: f64,
    pub factors: BTreeMap<String, FactorSentiment>,
    pub source: ScoreSourceKind,
}

impl ScoreResult {
    /// Factor sentiments as plain strings, for loosely-typed responses.
    pub fn breakdown(&self) -> BTreeMap<String, String> {
        self.factors
            .iter()
            .map(|(name, sentiment)| (name.clone(), sentiment.as_str().to_string()))
            .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Swap scoring backends without touching handlers.
pub trait ScoreSource: Send + Sync {
    fn kind(&self) -> ScoreSourceKind;

    fn score(&self, profile: &ProfileRecord) -> ScoreResult;
}

/// Threshold-based scorer. Pure and deterministic.
///
/// Algorithm, additive from 650:
/// 1. income: +50 above 100k, +30 above 75k, −40 below 30k
/// 2. debt-to-income: +40 below 0.3, −60 above 0.6
/// 3. utilization: +30 below 10%, −50 above 80%
/// 4. employment: +20 above 5 years, −30 below 2 years
/// 5. clamp to [300, 850]
pub struct RuleBasedScorer;

impl ScoreSource for RuleBasedScorer {
    fn kind(&self) -> ScoreSourceKind {
        ScoreSourceKind::RuleBased
    }

    fn score(&self, profile: &ProfileRecord) -> ScoreResult {
        compute_score(profile)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core rule-based algorithm
// ────────────────────────────────────────────────────────────────────────────

pub fn compute_score(profile: &ProfileRecord) -> ScoreResult {
    let raw = BASE_SCORE
        + income_adjustment(profile.monthly_income)
        + debt_ratio_adjustment(profile.debt_to_income())
        + utilization_adjustment(profile.credit_utilization)
        + employment_adjustment(profile.employment_years);

    ScoreResult {
        score: clamp_score(raw),
        confidence: ScoreSourceKind::RuleBased.confidence(),
        factors: factor_sentiments(profile),
        source: ScoreSourceKind::RuleBased,
    }
}

fn income_adjustment(income: f64) -> i32 {
    if income > 100_000.0 {
        50
    } else if income > 75_000.0 {
        30
    } else if income < 30_000.0 {
        -40
    } else {
        0
    }
}

fn debt_ratio_adjustment(ratio: f64) -> i32 {
    if ratio < 0.3 {
        40
    } else if ratio > 0.6 {
        -60
    } else {
        0
    }
}

fn utilization_adjustment(utilization: f64) -> i32 {
    if utilization < 10.0 {
        30
    } else if utilization > 80.0 {
        -50
    } else {
        0
    }
}

fn employment_adjustment(years: u32) -> i32 {
    if years > 5 {
        20
    } else if years < 2 {
        -30
    } else {
        0
    }
}

fn clamp_score(raw: i32) -> u16 {
    raw.clamp(MIN_SCORE as i32, MAX_SCORE as i32) as u16
}

/// Per-factor sentiment. These cutoffs differ from the scoring cutoffs above
/// (e.g. income 50k here vs 30k/75k/100k); do not align them.
pub fn factor_sentiments(profile: &ProfileRecord) -> BTreeMap<String, FactorSentiment> {
    let polarity = |good: bool| {
        if good {
            FactorSentiment::Positive
        } else {
            FactorSentiment::Negative
        }
    };

    let mut factors = BTreeMap::new();
    factors.insert(
        "income_level".to_string(),
        polarity(profile.monthly_income > 50_000.0),
    );
    factors.insert(
        "debt_ratio".to_string(),
        polarity(profile.debt_to_income() < 0.4),
    );
    factors.insert(
        "credit_utilization".to_string(),
        polarity(profile.credit_utilization < 30.0),
    );
    factors.insert(
        "employment_stability".to_string(),
        if profile.employment_years > 3 {
            FactorSentiment::Positive
        } else {
            FactorSentiment::Neutral
        },
    );
    factors
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
