use super::ScoreBreakdown;
use serde::{Deserialize, Serialize};

/// Adjudication outcome for an evaluated application.
///
/// Exactly three states; every consumer matches exhaustively so no
/// unrecognized outcome can leak through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoanDecision {
    Approved,
    Conditional,
    Rejected,
}

impl LoanDecision {
    pub const fn label(self) -> &'static str {
        match self {
            LoanDecision::Approved => "APPROVED",
            LoanDecision::Conditional => "CONDITIONAL",
            LoanDecision::Rejected => "REJECTED",
        }
    }
}

pub(crate) fn decide_outcome(
    breakdown: &ScoreBreakdown,
    reasons: &[String],
    approval_score_floor: f64,
) -> (LoanDecision, String) {
    if !breakdown.all_checks_passed() {
        return (
            LoanDecision::Rejected,
            format!("Application rejected. Reasons: {}", reasons.join("; ")),
        );
    }

    if breakdown.risk_score >= approval_score_floor {
        (
            LoanDecision::Approved,
            "Application meets all criteria. Approved.".to_string(),
        )
    } else {
        (
            LoanDecision::Conditional,
            format!(
                "Application meets basic criteria but risk score is {:.2}/100. \
                 Conditional approval recommended.",
                breakdown.risk_score
            ),
        )
    }
}
