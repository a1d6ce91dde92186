use serde::{Deserialize, Serialize};

/// Rubric configuration describing the lending thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub min_credit_score: u16,
    pub max_dti_ratio: f64,
    pub max_loan_to_income_ratio: f64,
    pub max_delinquencies: u8,
    pub min_employment_years: f64,
    pub min_credit_history_years: f64,
    /// Risk score at or above which a fully passing application is approved
    /// outright rather than conditionally.
    pub approval_score_floor: f64,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            min_credit_score: 650,
            max_dti_ratio: 0.36,
            max_loan_to_income_ratio: 0.25,
            max_delinquencies: 2,
            min_employment_years: 1.0,
            min_credit_history_years: 2.0,
            approval_score_floor: 80.0,
        }
    }
}
