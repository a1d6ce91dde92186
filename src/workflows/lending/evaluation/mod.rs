mod config;
mod policy;
mod rules;

pub use config::EvaluationConfig;
pub use policy::LoanDecision;

use super::domain::{FinancialProfile, LoanApplication};
use super::intake::{validate_profile, InputValidationError};
use policy::decide_outcome;
use serde::{Deserialize, Serialize};

/// Stateless evaluator applying the rubric thresholds to an application.
///
/// The engine only ever reads [`FinancialProfile`]; the identity fields on
/// the application carry no access path into scoring.
pub struct EvaluationEngine {
    config: EvaluationConfig,
}

impl EvaluationEngine {
    pub fn new(config: EvaluationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Evaluate an application against the configured thresholds.
    ///
    /// Deterministic: repeated calls on the same input yield identical
    /// output. Invalid financials are rejected before any arithmetic runs.
    pub fn evaluate(
        &self,
        application: &LoanApplication,
    ) -> Result<EvaluationOutcome, InputValidationError> {
        self.evaluate_financials(&application.financials)
    }

    pub fn evaluate_financials(
        &self,
        profile: &FinancialProfile,
    ) -> Result<EvaluationOutcome, InputValidationError> {
        validate_profile(profile)?;

        let (breakdown, reasons) = rules::score_profile(profile, &self.config);
        let (decision, rationale) =
            decide_outcome(&breakdown, &reasons, self.config.approval_score_floor);

        Ok(EvaluationOutcome {
            decision,
            rationale,
            breakdown,
        })
    }
}

impl Default for EvaluationEngine {
    fn default() -> Self {
        Self::new(EvaluationConfig::default())
    }
}

/// Per-check pass/fail results plus the composite risk score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub credit_score_check: bool,
    pub dti_check: bool,
    pub income_ratio_check: bool,
    pub delinquencies_check: bool,
    pub employment_check: bool,
    pub credit_history_check: bool,
    pub risk_score: f64,
}

impl ScoreBreakdown {
    pub fn all_checks_passed(&self) -> bool {
        self.credit_score_check
            && self.dti_check
            && self.income_ratio_check
            && self.delinquencies_check
            && self.employment_check
            && self.credit_history_check
    }

    /// Checks in evaluation order, for rendering and audits.
    pub fn checks(&self) -> [(&'static str, bool); 6] {
        [
            ("credit_score_check", self.credit_score_check),
            ("dti_check", self.dti_check),
            ("income_ratio_check", self.income_ratio_check),
            ("delinquencies_check", self.delinquencies_check),
            ("employment_check", self.employment_check),
            ("credit_history_check", self.credit_history_check),
        ]
    }
}

/// Evaluation output describing the decision and its audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    pub decision: LoanDecision,
    pub rationale: String,
    pub breakdown: ScoreBreakdown,
}
