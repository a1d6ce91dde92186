use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::BiasAnalysis;

const BANNER: &str =
    "================================================================================";
const RULE: &str =
    "--------------------------------------------------------------------------------";

/// Render the human-readable probe report.
pub fn render_bias_report(analysis: &BiasAnalysis) -> String {
    let mut lines = Vec::new();

    lines.push(BANNER.to_string());
    lines.push("BIAS TEST REPORT - Loan Approval System".to_string());
    lines.push(BANNER.to_string());
    lines.push(String::new());
    lines.push(format!("Test Group: {}", analysis.test_group));
    lines.push(String::new());
    lines.push("Financial Criteria (Same for All Tests):".to_string());
    let criteria = &analysis.financial_criteria;
    lines.push(format!("  credit_score: {}", criteria.credit_score));
    lines.push(format!("  annual_income: {}", criteria.annual_income));
    lines.push(format!("  loan_amount: {}", criteria.loan_amount));
    lines.push(format!("  dti_ratio: {}", criteria.debt_to_income_ratio));
    lines.push(format!(
        "  employment_years: {}",
        criteria.employment_length_years
    ));
    lines.push(format!("  delinquencies: {}", criteria.delinquencies_24m));
    lines.push(format!(
        "  credit_history_years: {}",
        criteria.credit_history_years
    ));
    lines.push(String::new());
    lines.push(RULE.to_string());
    lines.push("Test Results:".to_string());
    lines.push(RULE.to_string());

    for result in &analysis.results {
        lines.push(String::new());
        lines.push(format!(
            "Applicant: {} ({})",
            result.applicant_name, result.gender
        ));
        lines.push(format!("Decision: {}", result.decision.label()));
        lines.push(format!("Risk Score: {:.2}/100", result.risk_score));
        lines.push(format!("Rationale: {}", result.rationale));
    }

    lines.push(String::new());
    lines.push(RULE.to_string());
    lines.push("Bias Analysis:".to_string());
    lines.push(RULE.to_string());
    lines.push(format!(
        "Decisions Consistent: {}",
        yes_no(analysis.decisions_consistent)
    ));
    lines.push(format!(
        "Risk Scores Vary: {}",
        yes_no(analysis.risk_scores_vary)
    ));
    if analysis.risk_scores_vary {
        lines.push(format!(
            "Maximum Score Difference: {:.2} points",
            analysis.max_score_diff
        ));
    }
    lines.push(String::new());
    lines.push(format!(
        "BIAS DETECTED: {}",
        if analysis.bias_detected { "YES" } else { "NO" }
    ));

    if analysis.bias_detected {
        lines.push(String::new());
        lines.push("Bias Details:".to_string());
        for detail in &analysis.bias_details {
            lines.push(format!("  - {detail}"));
        }
    } else {
        lines.push(String::new());
        lines.push("No bias detected. System treats all applicants equally when financial".to_string());
        lines.push("criteria are identical, regardless of name or gender.".to_string());
    }

    lines.push(String::new());
    lines.push(BANNER.to_string());

    lines.join("\n")
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Persisted form of a probe run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeArtifact {
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub analysis: BiasAnalysis,
}

impl ProbeArtifact {
    pub fn new(analysis: BiasAnalysis) -> Self {
        Self {
            generated_at: Utc::now(),
            analysis,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
