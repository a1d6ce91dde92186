use super::common::base_profile;
use crate::workflows::lending::{validate_profile, InputValidationError};

#[test]
fn accepts_valid_profile() {
    assert!(validate_profile(&base_profile()).is_ok());
}

#[test]
fn rejects_zero_income() {
    let mut profile = base_profile();
    profile.annual_income = 0.0;
    assert!(matches!(
        validate_profile(&profile),
        Err(InputValidationError::NonPositiveIncome(_))
    ));
}

#[test]
fn rejects_negative_income() {
    let mut profile = base_profile();
    profile.annual_income = -5_000.0;
    assert!(matches!(
        validate_profile(&profile),
        Err(InputValidationError::NonPositiveIncome(_))
    ));
}

#[test]
fn rejects_non_positive_loan_amount() {
    let mut profile = base_profile();
    profile.loan_amount = 0.0;
    assert!(matches!(
        validate_profile(&profile),
        Err(InputValidationError::NonPositiveLoanAmount(_))
    ));
}

#[test]
fn rejects_negative_ratio_fields() {
    let mut profile = base_profile();
    profile.debt_to_income_ratio = -0.1;
    assert!(matches!(
        validate_profile(&profile),
        Err(InputValidationError::NegativeField {
            field: "debt_to_income_ratio",
            ..
        })
    ));

    let mut profile = base_profile();
    profile.employment_length_years = -1.0;
    assert!(matches!(
        validate_profile(&profile),
        Err(InputValidationError::NegativeField {
            field: "employment_length_years",
            ..
        })
    ));
}

#[test]
fn rejects_non_finite_values() {
    let mut profile = base_profile();
    profile.annual_income = f64::NAN;
    assert!(matches!(
        validate_profile(&profile),
        Err(InputValidationError::NonFiniteField {
            field: "annual_income"
        })
    ));

    let mut profile = base_profile();
    profile.credit_history_years = f64::INFINITY;
    assert!(matches!(
        validate_profile(&profile),
        Err(InputValidationError::NonFiniteField {
            field: "credit_history_years"
        })
    ));
}
