use std::fs;

use fairlend::workflows::lending::{
    default_subjects, mitigation_report, render_bias_report, BiasProbe, EvaluationConfig,
    EvaluationEngine, FinancialProfile, ProbeArtifact,
};

fn base_financials() -> FinancialProfile {
    FinancialProfile {
        credit_score: 680,
        annual_income: 62_000.0,
        loan_amount: 15_000.0,
        debt_to_income_ratio: 0.28,
        employment_length_years: 3.0,
        delinquencies_24m: 0,
        credit_history_years: 5.0,
    }
}

#[test]
fn probe_pipeline_produces_consistent_artifacts() {
    let probe = BiasProbe::new(EvaluationEngine::new(EvaluationConfig::default()));
    let analysis = probe.run(&base_financials(), &default_subjects());

    assert_eq!(analysis.results.len(), 8);
    assert!(!analysis.bias_detected);

    let dir = tempfile::tempdir().expect("temp dir");
    let results_path = dir.path().join("bias_test_results.json");
    let report_path = dir.path().join("bias_mitigation_report.txt");

    let mitigation = mitigation_report(analysis.bias_detected, &analysis.bias_details);
    let bias_report = render_bias_report(&analysis);
    let artifact = ProbeArtifact::new(analysis);

    fs::write(&results_path, artifact.to_json().expect("serializes")).expect("write json");
    fs::write(&report_path, &mitigation).expect("write report");

    let raw = fs::read_to_string(&results_path).expect("read json");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");

    assert_eq!(value["test_group"], "Gender/Name Variation Test");
    assert_eq!(value["bias_detected"], false);
    assert_eq!(value["decisions_consistent"], true);
    assert_eq!(value["risk_scores_vary"], false);
    assert_eq!(value["financial_criteria"]["credit_score"], 680);
    assert!(value["generated_at"].is_string());

    let results = value["results"].as_array().expect("results array");
    assert_eq!(results.len(), 8);
    assert_eq!(results[0]["applicant_name"], "John");
    assert_eq!(results[0]["decision"], "CONDITIONAL");
    assert_eq!(results[0]["score_details"]["credit_score_check"], true);

    let written_report = fs::read_to_string(&report_path).expect("read report");
    assert!(written_report.contains("BIAS MITIGATION STRATEGIES REPORT"));
    assert!(written_report.contains("[OK] No bias detected in current tests."));

    assert!(bias_report.contains("BIAS DETECTED: NO"));
}

#[test]
fn probe_is_invariant_across_repeated_runs() {
    let probe = BiasProbe::new(EvaluationEngine::new(EvaluationConfig::default()));

    let first = probe.run(&base_financials(), &default_subjects());
    let second = probe.run(&base_financials(), &default_subjects());

    assert_eq!(first, second);
}
