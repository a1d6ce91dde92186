use crate::workflows::lending::domain::{ApplicantDetails, FinancialProfile, LoanApplication};
use crate::workflows::lending::{EvaluationConfig, EvaluationEngine};

/// Matches the extractor defaults; scores 46.44, conditional.
pub(super) fn base_profile() -> FinancialProfile {
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

/// Maxes every score component; scores exactly 100, approved.
pub(super) fn strong_profile() -> FinancialProfile {
    FinancialProfile {
        credit_score: 950,
        annual_income: 100_000.0,
        loan_amount: 10_000.0,
        debt_to_income_ratio: 0.0,
        employment_length_years: 5.0,
        delinquencies_24m: 0,
        credit_history_years: 8.0,
    }
}

pub(super) fn engine() -> EvaluationEngine {
    EvaluationEngine::new(EvaluationConfig::default())
}

pub(super) fn application_with_identity(name: &str, gender: &str) -> LoanApplication {
    LoanApplication {
        financials: base_profile(),
        applicant: ApplicantDetails {
            applicant_name: Some(name.to_string()),
            gender: Some(gender.to_string()),
            ..ApplicantDetails::default()
        },
    }
}
