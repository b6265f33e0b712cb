//! Profile normalization: loosely-typed wire profile → canonical `ProfileRecord`.
//!
//! Defaults are filled here and nowhere else. Negative or out-of-range numbers
//! are rejected with a `Validation` error naming the field, so the scoring
//! stages never see a negative ratio.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::AppError;

pub const DEFAULT_AGE: u32 = 30;
pub const DEFAULT_MONTHLY_INCOME: f64 = 50_000.0;
pub const DEFAULT_CREDIT_SCORE: u32 = 650;
pub const DEFAULT_TOTAL_DEBT: f64 = 0.0;
pub const DEFAULT_EMPLOYMENT_YEARS: u32 = 5;
pub const DEFAULT_LOAN_AMOUNT: f64 = 100_000.0;
pub const DEFAULT_LOAN_TENURE_MONTHS: u32 = 60;
pub const DEFAULT_EXISTING_LOANS: u32 = 0;
pub const DEFAULT_CREDIT_UTILIZATION: f64 = 30.0;
pub const DEFAULT_PAYMENT_HISTORY: f64 = 85.0;

/// Incoming credit profile. Every field is optional; see `normalize`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreditProfile {
    pub age: Option<i64>,
    #[serde(alias = "income")]
    pub monthly_income: Option<f64>,
    pub current_credit_score: Option<i64>,
    pub total_debt: Option<f64>,
    pub employment_years: Option<i64>,
    pub loan_amount: Option<f64>,
    pub loan_tenure_months: Option<i64>,
    pub existing_loans_count: Option<i64>,
    pub credit_utilization: Option<f64>,
    pub payment_history_score: Option<f64>,
}

/// Canonical financial snapshot with every default applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileRecord {
    pub age: u32,
    pub monthly_income: f64,
    pub current_credit_score: u32,
    pub total_debt: f64,
    pub employment_years: u32,
    pub loan_amount: f64,
    pub loan_tenure_months: u32,
    pub existing_loans_count: u32,
    /// Percent, 0–100.
    pub credit_utilization: f64,
    /// Percent, 0–100.
    pub payment_history_score: f64,
}

impl Default for ProfileRecord {
    fn default() -> Self {
        Self {
            age: DEFAULT_AGE,
            monthly_income: DEFAULT_MONTHLY_INCOME,
            current_credit_score: DEFAULT_CREDIT_SCORE,
            total_debt: DEFAULT_TOTAL_DEBT,
            employment_years: DEFAULT_EMPLOYMENT_YEARS,
            loan_amount: DEFAULT_LOAN_AMOUNT,
            loan_tenure_months: DEFAULT_LOAN_TENURE_MONTHS,
            existing_loans_count: DEFAULT_EXISTING_LOANS,
            credit_utilization: DEFAULT_CREDIT_UTILIZATION,
            payment_history_score: DEFAULT_PAYMENT_HISTORY,
        }
    }
}

impl ProfileRecord {
    /// total_debt / max(monthly_income, 1). Never divides by zero.
    pub fn debt_to_income(&self) -> f64 {
        self.total_debt / self.monthly_income.max(1.0)
    }
}

impl CreditProfile {
    /// Reads a free-form JSON object. Unknown keys are ignored; `null` counts as absent.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self, AppError> {
        Ok(Self {
            age: read_integer(map, "age")?,
            monthly_income: match read_number(map, "monthly_income")? {
                Some(v) => Some(v),
                None => read_number(map, "income")?,
            },
            current_credit_score: read_integer(map, "current_credit_score")?,
            total_debt: read_number(map, "total_debt")?,
            employment_years: read_integer(map, "employment_years")?,
            loan_amount: read_number(map, "loan_amount")?,
            loan_tenure_months: read_integer(map, "loan_tenure_months")?,
            existing_loans_count: read_integer(map, "existing_loans_count")?,
            credit_utilization: read_number(map, "credit_utilization")?,
            payment_history_score: read_number(map, "payment_history_score")?,
        })
    }

    /// Applies defaults and validates ranges.
    pub fn normalize(&self) -> Result<ProfileRecord, AppError> {
        let defaults = ProfileRecord::default();

        let loan_tenure_months = non_negative_count(
            "loan_tenure_months",
            self.loan_tenure_months,
            defaults.loan_tenure_months,
        )?;
        if loan_tenure_months == 0 {
            return Err(AppError::Validation(
                "loan_tenure_months must be at least 1".to_string(),
            ));
        }

        Ok(ProfileRecord {
            age: non_negative_count("age", self.age, defaults.age)?,
            monthly_income: non_negative_amount(
                "monthly_income",
                self.monthly_income,
                defaults.monthly_income,
            )?,
            current_credit_score: non_negative_count(
                "current_credit_score",
                self.current_credit_score,
                defaults.current_credit_score,
            )?,
            total_debt: non_negative_amount("total_debt", self.total_debt, defaults.total_debt)?,
            employment_years: non_negative_count(
                "employment_years",
                self.employment_years,
                defaults.employment_years,
            )?,
            loan_amount: non_negative_amount("loan_amount", self.loan_amount, defaults.loan_amount)?,
            loan_tenure_months,
            existing_loans_count: non_negative_count(
                "existing_loans_count",
                self.existing_loans_count,
                defaults.existing_loans_count,
            )?,
            credit_utilization: percentage(
                "credit_utilization",
                self.credit_utilization,
                defaults.credit_utilization,
            )?,
            payment_history_score: percentage(
                "payment_history_score",
                self.payment_history_score,
                defaults.payment_history_score,
            )?,
        })
    }
}

fn read_number(map: &Map<String, Value>, key: &str) -> Result<Option<f64>, AppError> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| AppError::Validation(format!("{key} must be a finite number"))),
        Some(_) => Err(AppError::Validation(format!("{key} must be a number"))),
    }
}

fn read_integer(map: &Map<String, Value>, key: &str) -> Result<Option<i64>, AppError> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| AppError::Validation(format!("{key} must be a whole number"))),
        Some(_) => Err(AppError::Validation(format!("{key} must be a whole number"))),
    }
}

fn non_negative_amount(field: &str, value: Option<f64>, default: f64) -> Result<f64, AppError> {
    let value = value.unwrap_or(default);
    if !value.is_finite() {
        return Err(AppError::Validation(format!("{field} must be a finite number")));
    }
    if value < 0.0 {
        return Err(AppError::Validation(format!("{field} must be >= 0")));
    }
    Ok(value)
}

fn non_negative_count(field: &str, value: Option<i64>, default: u32) -> Result<u32, AppError> {
    match value {
        None => Ok(default),
        Some(v) if v < 0 => Err(AppError::Validation(format!("{field} must be >= 0"))),
        Some(v) => u32::try_from(v)
            .map_err(|_| AppError::Validation(format!("{field} is out of range"))),
    }
}

fn percentage(field: &str, value: Option<f64>, default: f64) -> Result<f64, AppError> {
    let value = non_negative_amount(field, value, default)?;
    if value > 100.0 {
        return Err(AppError::Validation(format!(
            "{field} must be between 0 and 100"
        )));
    }
    Ok(value)
}
