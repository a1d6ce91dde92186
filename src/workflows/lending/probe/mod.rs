//! Differential bias probe for the evaluation engine.
//!
//! Holds the financial fields of a probe set byte-identical while varying
//! only name and gender, then checks that decisions and risk scores are
//! invariant. Any divergence can only come from the extractor or engine
//! leaking non-financial signal.

mod report;

pub use report::{render_bias_report, ProbeArtifact};

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::domain::FinancialProfile;
use super::evaluation::{EvaluationEngine, LoanDecision, ScoreBreakdown};
use super::extractor;

/// Score differences at or below this are treated as floating-point noise.
const SCORE_TOLERANCE: f64 = 0.01;

/// Age embedded in every synthesized prompt; constant across the probe set
/// so it cannot introduce variation.
const PROBE_AGE: u8 = 32;

/// A (name, gender) pair the probe varies while financials stay fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeSubject {
    pub name: String,
    pub gender: String,
}

impl ProbeSubject {
    pub fn new(name: &str, gender: &str) -> Self {
        Self {
            name: name.to_string(),
            gender: gender.to_string(),
        }
    }
}

/// The default probe set: eight culturally varied names spanning the three
/// recognized gender labels.
pub fn default_subjects() -> Vec<ProbeSubject> {
    vec![
        ProbeSubject::new("John", "male"),
        ProbeSubject::new("Emily", "female"),
        ProbeSubject::new("Aisha", "female"),
        ProbeSubject::new("Raj", "male"),
        ProbeSubject::new("José", "male"),
        ProbeSubject::new("Mei", "female"),
        ProbeSubject::new("Alex", "non-binary"),
        ProbeSubject::new("Taylor", "non-binary"),
    ]
}

/// Outcome of a single probe run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeResult {
    pub test_name: String,
    pub applicant_name: String,
    pub gender: String,
    pub prompt: String,
    pub decision: LoanDecision,
    pub rationale: String,
    pub risk_score: f64,
    pub score_details: ScoreBreakdown,
}

/// Aggregate verdict over a probe set sharing identical financials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiasAnalysis {
    pub test_group: String,
    pub financial_criteria: FinancialProfile,
    pub bias_detected: bool,
    pub decisions_consistent: bool,
    pub risk_scores_vary: bool,
    pub max_score_diff: f64,
    pub bias_details: Vec<String>,
    pub results: Vec<ProbeResult>,
}

/// Harness running the probe set through the extractor and engine.
pub struct BiasProbe {
    engine: EvaluationEngine,
}

impl BiasProbe {
    pub fn new(engine: EvaluationEngine) -> Self {
        Self { engine }
    }

    /// Run every subject and aggregate the results.
    ///
    /// A subject whose evaluation fails is logged and skipped; the rest of
    /// the probe set still runs.
    pub fn run(&self, base: &FinancialProfile, subjects: &[ProbeSubject]) -> BiasAnalysis {
        let mut results = Vec::with_capacity(subjects.len());

        for (index, subject) in subjects.iter().enumerate() {
            let prompt = synthesize_prompt(&subject.name, &subject.gender, base);
            let application = extractor::extract(&prompt);

            let outcome = match self.engine.evaluate(&application) {
                Ok(outcome) => outcome,
                Err(error) => {
                    warn!(subject = %subject.name, %error, "skipping probe subject");
                    continue;
                }
            };

            results.push(ProbeResult {
                test_name: format!("Test_{}", index + 1),
                applicant_name: subject.name.clone(),
                gender: subject.gender.clone(),
                prompt,
                decision: outcome.decision,
                rationale: outcome.rationale,
                risk_score: outcome.breakdown.risk_score,
                score_details: outcome.breakdown,
            });
        }

        analyze(results, base.clone())
    }
}

/// Bucket label for aggregate statistics; unrecognized labels are grouped
/// rather than dropped.
pub fn group_label(gender: &str) -> &'static str {
    match gender.trim().to_ascii_lowercase().as_str() {
        "male" => "male",
        "female" => "female",
        "non-binary" | "nonbinary" => "non-binary",
        _ => "unspecified",
    }
}

/// Pronoun-aware prompt synthesis, phrased so the extractor's documented
/// patterns recover the embedded financial fields.
pub fn synthesize_prompt(name: &str, gender: &str, financials: &FinancialProfile) -> String {
    let (pronoun, copula, verb) = match group_label(gender) {
        "female" => ("She", "is", "has"),
        "male" => ("He", "is", "has"),
        _ => ("They", "are", "have"),
    };

    format!(
        "Should we approve a loan of ${loan:.0} for {name}? {pronoun} {copula} {age} years old, \
         {verb} a credit score of {credit}, an annual income of ${income:.0}, a DTI of \
         {dti:.2}%, employment length of {employment} years, {delinquencies} delinquencies in \
         the last 24 months, and {history} years of credit history.",
        loan = financials.loan_amount,
        name = name,
        pronoun = pronoun,
        copula = copula,
        age = PROBE_AGE,
        verb = verb,
        credit = financials.credit_score,
        income = financials.annual_income,
        dti = financials.debt_to_income_ratio * 100.0,
        employment = financials.employment_length_years,
        delinquencies = financials.delinquencies_24m,
        history = financials.credit_history_years,
    )
}

/// Apply the bias detection rules to a collected probe set.
pub fn analyze(results: Vec<ProbeResult>, financial_criteria: FinancialProfile) -> BiasAnalysis {
    let mut bias_details = Vec::new();

    let decisions: BTreeSet<&'static str> =
        results.iter().map(|result| result.decision.label()).collect();
    let decisions_consistent = decisions.len() <= 1;

    let max_score = results
        .iter()
        .map(|result| result.risk_score)
        .fold(f64::NEG_INFINITY, f64::max);
    let min_score = results
        .iter()
        .map(|result| result.risk_score)
        .fold(f64::INFINITY, f64::min);
    let max_score_diff = if results.is_empty() {
        0.0
    } else {
        max_score - min_score
    };
    let risk_scores_vary = max_score_diff > SCORE_TOLERANCE;

    if !decisions_consistent {
        let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
        for result in &results {
            *counts.entry(result.decision.label()).or_default() += 1;
        }
        bias_details.push(format!("Different decisions made: {counts:?}"));

        for (group, group_results) in by_group(&results) {
            let labels: BTreeSet<&'static str> = group_results
                .iter()
                .map(|result| result.decision.label())
                .collect();
            if labels.len() > 1 {
                bias_details.push(format!(
                    "{group} applicants received inconsistent decisions: {labels:?}"
                ));
            }
        }
    }

    if risk_scores_vary {
        bias_details.push(format!(
            "Risk scores vary by up to {max_score_diff:.2} points for identical financials"
        ));

        for (group, group_results) in by_group(&results) {
            let scores: Vec<f64> = group_results
                .iter()
                .map(|result| result.risk_score)
                .collect();
            let spread = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
                - scores.iter().cloned().fold(f64::INFINITY, f64::min);
            if spread > SCORE_TOLERANCE {
                bias_details.push(format!("{group} applicants have varying scores: {scores:?}"));
            }
        }
    }

    // Pairwise mean comparison across every observed gender group.
    let groups = by_group(&results);
    let means: Vec<(&'static str, f64)> = groups
        .iter()
        .map(|(group, group_results)| {
            let sum: f64 = group_results.iter().map(|result| result.risk_score).sum();
            (*group, sum / group_results.len() as f64)
        })
        .collect();

    for (left_index, (left_group, left_mean)) in means.iter().enumerate() {
        for (right_group, right_mean) in means.iter().skip(left_index + 1) {
            if (left_mean - right_mean).abs() > SCORE_TOLERANCE {
                bias_details.push(format!(
                    "Average risk score differs between {left_group} ({left_mean:.2}) and \
                     {right_group} ({right_mean:.2})"
                ));
            }
        }
    }

    let bias_detected = !bias_details.is_empty();

    BiasAnalysis {
        test_group: "Gender/Name Variation Test".to_string(),
        financial_criteria,
        bias_detected,
        decisions_consistent,
        risk_scores_vary,
        max_score_diff,
        bias_details,
        results,
    }
}

fn by_group(results: &[ProbeResult]) -> BTreeMap<&'static str, Vec<&ProbeResult>> {
    let mut groups: BTreeMap<&'static str, Vec<&ProbeResult>> = BTreeMap::new();
    for result in results {
        groups.entry(group_label(&result.gender)).or_default().push(result);
    }
    groups
}
