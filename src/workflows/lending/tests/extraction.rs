use super::common::base_profile;
use crate::workflows::lending::extractor::{defaults, extract, unextractable_overrides};
use crate::workflows::lending::probe::synthesize_prompt;

#[test]
fn falls_back_to_defaults_on_unrelated_text() {
    let application = extract("tell me about the weather");

    assert_eq!(application.financials.credit_score, defaults::CREDIT_SCORE);
    assert_eq!(application.financials.annual_income, defaults::ANNUAL_INCOME);
    assert_eq!(application.financials.loan_amount, defaults::LOAN_AMOUNT);
    assert_eq!(
        application.financials.debt_to_income_ratio,
        defaults::DTI_RATIO
    );
    assert_eq!(application.applicant.applicant_name, None);
    assert_eq!(application.applicant.gender, None);
}

#[test]
fn extracts_credit_score_after_keyword() {
    assert_eq!(extract("credit score: 720").financials.credit_score, 720);
    assert_eq!(
        extract("has a credit score of 590").financials.credit_score,
        590
    );
    assert_eq!(extract("credit_score 711").financials.credit_score, 711);
}

#[test]
fn extracts_income_with_separators_and_k_suffix() {
    assert_eq!(extract("income: $62,500").financials.annual_income, 62_500.0);
    assert_eq!(extract("income of 85k").financials.annual_income, 85_000.0);
    assert_eq!(extract("annual income: 48000").financials.annual_income, 48_000.0);
}

#[test]
fn extracts_loan_amount() {
    assert_eq!(extract("loan: $10,000").financials.loan_amount, 10_000.0);
    assert_eq!(extract("a loan of 20K").financials.loan_amount, 20_000.0);
}

#[test]
fn dti_is_always_interpreted_as_percent() {
    assert_eq!(extract("dti: 28").financials.debt_to_income_ratio, 0.28);
    assert!(
        (extract("DTI of 31.5%").financials.debt_to_income_ratio - 0.315).abs() < 1e-12
    );
}

#[test]
fn extracts_one_or_two_capitalized_name_words() {
    assert_eq!(
        extract("approve this for Emily Carter today").applicant.applicant_name,
        Some("Emily Carter".to_string())
    );
    assert_eq!(
        extract("applicant: John").applicant.applicant_name,
        Some("John".to_string())
    );
}

#[test]
fn gender_inference_uses_word_boundaries_and_fixed_order() {
    assert_eq!(extract("she asked him").applicant.gender, Some("female".to_string()));
    assert_eq!(extract("he applied").applicant.gender, Some("male".to_string()));
    assert_eq!(
        extract("they applied yesterday").applicant.gender,
        Some("non-binary".to_string())
    );
    assert_eq!(
        extract("a nonbinary applicant").applicant.gender,
        Some("non-binary".to_string())
    );
    // "the" must not trigger the male bucket.
    assert_eq!(extract("the application").applicant.gender, None);
}

#[test]
fn names_overrides_the_patterns_never_recover() {
    assert!(unextractable_overrides(&base_profile()).is_empty());

    let mut profile = base_profile();
    profile.employment_length_years = 0.5;
    profile.delinquencies_24m = 1;
    assert_eq!(
        unextractable_overrides(&profile),
        vec!["employment_length_years", "delinquencies_24m"]
    );

    let mut profile = base_profile();
    profile.credit_history_years = 1.0;
    assert_eq!(
        unextractable_overrides(&profile),
        vec!["credit_history_years"]
    );
}

#[test]
fn synthesized_prompt_round_trips_financials() {
    let base = base_profile();
    let prompt = synthesize_prompt("John", "male", &base);
    let application = extract(&prompt);

    assert_eq!(application.financials.credit_score, base.credit_score);
    assert_eq!(application.financials.annual_income, base.annual_income);
    assert_eq!(application.financials.loan_amount, base.loan_amount);
    assert!(
        (application.financials.debt_to_income_ratio - base.debt_to_income_ratio).abs() < 1e-12
    );
    assert_eq!(application.applicant.applicant_name, Some("John".to_string()));
    assert_eq!(application.applicant.gender, Some("male".to_string()));
}

#[test]
fn synthesized_prompts_cover_all_gender_buckets() {
    let base = base_profile();

    let female = extract(&synthesize_prompt("Emily", "female", &base));
    assert_eq!(female.applicant.gender, Some("female".to_string()));

    let non_binary = extract(&synthesize_prompt("Taylor", "non-binary", &base));
    assert_eq!(non_binary.applicant.gender, Some("non-binary".to_string()));
}
