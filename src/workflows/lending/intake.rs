use super::domain::FinancialProfile;

/// Validation errors raised before a profile reaches the evaluation rules.
///
/// The extractor never produces these (its defaults are valid by
/// construction); they guard direct record construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputValidationError {
    #[error("annual income must be positive, got {0}")]
    NonPositiveIncome(String),
    #[error("loan amount must be positive, got {0}")]
    NonPositiveLoanAmount(String),
    #[error("{field} must be non-negative, got {value}")]
    NegativeField { field: &'static str, value: String },
    #[error("{field} is not a finite number")]
    NonFiniteField { field: &'static str },
}

/// Reject profiles the scoring arithmetic cannot safely consume.
///
/// A zero income in particular must fail here rather than propagate as an
/// infinite loan-to-income ratio.
pub fn validate_profile(profile: &FinancialProfile) -> Result<(), InputValidationError> {
    check_finite("annual_income", profile.annual_income)?;
    check_finite("loan_amount", profile.loan_amount)?;
    check_finite("debt_to_income_ratio", profile.debt_to_income_ratio)?;
    check_finite("employment_length_years", profile.employment_length_years)?;
    check_finite("credit_history_years", profile.credit_history_years)?;

    if profile.annual_income <= 0.0 {
        return Err(InputValidationError::NonPositiveIncome(
            profile.annual_income.to_string(),
        ));
    }
    if profile.loan_amount <= 0.0 {
        return Err(InputValidationError::NonPositiveLoanAmount(
            profile.loan_amount.to_string(),
        ));
    }

    check_non_negative("debt_to_income_ratio", profile.debt_to_income_ratio)?;
    check_non_negative("employment_length_years", profile.employment_length_years)?;
    check_non_negative("credit_history_years", profile.credit_history_years)?;

    Ok(())
}

fn check_finite(field: &'static str, value: f64) -> Result<(), InputValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InputValidationError::NonFiniteField { field })
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), InputValidationError> {
    if value < 0.0 {
        return Err(InputValidationError::NegativeField {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}
