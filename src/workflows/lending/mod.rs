//! Loan application intake, evaluation, and bias probing.
//!
//! The evaluation rubric reads only the financial subset of an
//! application; identity fields are carried for audit display and are
//! exercised exclusively by the differential bias probe, which verifies
//! that they cannot influence outcomes.

pub mod domain;
pub mod extractor;
pub(crate) mod intake;
pub mod mitigation;
pub mod probe;

mod evaluation;

#[cfg(test)]
mod tests;

pub use domain::{ApplicantDetails, FinancialProfile, LoanApplication};
pub use evaluation::{
    EvaluationConfig, EvaluationEngine, EvaluationOutcome, LoanDecision, ScoreBreakdown,
};
pub use intake::{validate_profile, InputValidationError};
pub use mitigation::{mitigation_report, MitigationStrategy, Priority, CATALOG};
pub use probe::{
    analyze, default_subjects, render_bias_report, synthesize_prompt, BiasAnalysis, BiasProbe,
    ProbeArtifact, ProbeResult, ProbeSubject,
};
