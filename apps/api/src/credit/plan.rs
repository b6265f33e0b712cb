use serde::Serialize;

use crate::credit::explanation::ScoreCategory;
use crate::credit::profile::ProfileRecord;

/// Flat installment plan. Interest-bearing amortization is not modelled;
/// `suggested_emi` is simply principal spread evenly over the tenure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepaymentPlan {
    pub loan_amount: f64,
    pub tenure_months: u32,
    pub suggested_emi: f64,
    pub total_payable: f64,
    pub emi_to_income_ratio: f64,
    pub score_band: ScoreCategory,
}

pub fn generate_plan(profile: &ProfileRecord, score: u16) -> RepaymentPlan {
    // Tenure is >= 1 after normalize(); hand-built records may still carry 0.
    let tenure_months = profile.loan_tenure_months.max(1);
    let suggested_emi = round_to(profile.loan_amount / f64::from(tenure_months), 2);

    RepaymentPlan {
        loan_amount: profile.loan_amount,
        tenure_months,
        suggested_emi,
        total_payable: round_to(profile.loan_amount, 2),
        emi_to_income_ratio: round_to(suggested_emi / profile.monthly_income.max(1.0), 4),
        score_band: ScoreCategory::from_score(score),
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plan_is_flat_emi() {
        let plan = generate_plan(&ProfileRecord::default(), 690);
        assert_eq!(plan.loan_amount, 100_000.0);
        assert_eq!(plan.tenure_months, 60);
        assert_eq!(plan.suggested_emi, 1_666.67);
        assert_eq!(plan.emi_to_income_ratio, 0.0333);
        assert_eq!(plan.total_payable, 100_000.0);
        assert_eq!(plan.score_band, ScoreCategory::Good);
    }

    #[test]
    fn test_zero_tenure_record_does_not_divide_by_zero() {
        let record = ProfileRecord {
            loan_tenure_months: 0,
            loan_amount: 12_000.0,
            ..Default::default()
        };
        let plan = generate_plan(&record, 600);
        assert_eq!(plan.tenure_months, 1);
        assert_eq!(plan.suggested_emi, 12_000.0);
    }

    #[test]
    fn test_zero_income_ratio_uses_guard() {
        let record = ProfileRecord {
            monthly_income: 0.0,
            loan_amount: 6_000.0,
            loan_tenure_months: 12,
            ..Default::default()
        };
        let plan = generate_plan(&record, 500);
        assert_eq!(plan.suggested_emi, 500.0);
        assert_eq!(plan.emi_to_income_ratio, 500.0);
        assert_eq!(plan.total_payable, 6_000.0);
    }

    #[test]
    fn test_total_payable_ignores_emi_rounding() {
        let record = ProfileRecord {
            loan_amount: 10_000.0,
            loan_tenure_months: 3,
            ..Default::default()
        };
        let plan = generate_plan(&record, 650);
        assert_eq!(plan.suggested_emi, 3_333.33);
        assert_eq!(plan.total_payable, 10_000.0);
    }
}
