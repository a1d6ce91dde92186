use serde::{Deserialize, Serialize};

/// Financial attributes permitted in the decision rubric.
///
/// This is the only type the evaluation rules accept. Protected attributes
/// live on [`ApplicantDetails`] and have no access path into scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialProfile {
    pub credit_score: u16,
    pub annual_income: f64,
    pub loan_amount: f64,
    pub debt_to_income_ratio: f64,
    pub employment_length_years: f64,
    pub delinquencies_24m: u8,
    pub credit_history_years: f64,
}

/// Applicant identity fields captured during intake.
///
/// Stored for audit display only; none of these may influence a decision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicant_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub race: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ethnicity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
}

/// A submitted loan application: the financial subset plus optional
/// identity fields. Constructed once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanApplication {
    pub financials: FinancialProfile,
    #[serde(default)]
    pub applicant: ApplicantDetails,
}

impl LoanApplication {
    pub fn from_financials(financials: FinancialProfile) -> Self {
        Self {
            financials,
            applicant: ApplicantDetails::default(),
        }
    }
}
