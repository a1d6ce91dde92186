//! Best-effort extraction of a loan application from free text.
//!
//! This is a heuristic field scraper, not a parser: any field that is
//! missing or unparsable falls back to a documented default, and nothing
//! here ever fails. Its output feeds the same evaluation contract as a
//! directly constructed application; none of its guesses influence the
//! rubric itself.

use std::sync::LazyLock;

use regex::Regex;

use super::domain::{ApplicantDetails, FinancialProfile, LoanApplication};

/// Fallback values substituted when a field cannot be recovered.
pub mod defaults {
    pub const CREDIT_SCORE: u16 = 680;
    pub const ANNUAL_INCOME: f64 = 62_000.0;
    pub const LOAN_AMOUNT: f64 = 15_000.0;
    pub const DTI_RATIO: f64 = 0.28;
    pub const EMPLOYMENT_YEARS: f64 = 3.0;
    pub const DELINQUENCIES: u8 = 0;
    pub const CREDIT_HISTORY_YEARS: f64 = 5.0;
}

// Each pattern takes the first value following its keyword, tolerating a
// short run of filler characters ("of", "is", "$") between the two so that
// conversational phrasing still matches.
static CREDIT_SCORE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)credit[\s_]*score\b[^0-9]{0,24}?(\d+)").expect("valid credit score pattern")
});

static INCOME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bincome\b[^0-9$]{0,24}?\$?(\d+(?:,\d+)*(?:\.\d+)?)(k)?")
        .expect("valid income pattern")
});

static LOAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bloan\b[^0-9$]{0,24}?\$?(\d+(?:,\d+)*(?:\.\d+)?)(k)?")
        .expect("valid loan pattern")
});

static DTI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bdti\b[^0-9]{0,24}?(\d+(?:\.\d+)?)%?").expect("valid dti pattern")
});

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:for|applicant|name)[:\s]+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)")
        .expect("valid name pattern")
});

static FEMALE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(she|her|female|woman)\b").expect("valid pattern"));
static MALE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(he|him|male|man)\b").expect("valid pattern"));
static NON_BINARY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(they|them|non-binary|nonbinary)\b").expect("valid pattern")
});

/// Extract an application from free text. Never fails; see [`defaults`].
pub fn extract(text: &str) -> LoanApplication {
    let credit_score = CREDIT_SCORE_RE
        .captures(text)
        .and_then(|caps| caps[1].parse::<u16>().ok())
        .unwrap_or(defaults::CREDIT_SCORE);

    let annual_income = extract_amount(&INCOME_RE, text).unwrap_or(defaults::ANNUAL_INCOME);
    let loan_amount = extract_amount(&LOAN_RE, text).unwrap_or(defaults::LOAN_AMOUNT);

    // DTI values are quoted as percentages in prompts, so always scale down.
    let debt_to_income_ratio = DTI_RE
        .captures(text)
        .and_then(|caps| caps[1].parse::<f64>().ok())
        .map(|percent| percent / 100.0)
        .unwrap_or(defaults::DTI_RATIO);

    let applicant_name = NAME_RE
        .captures(text)
        .map(|caps| caps[1].to_string());

    let financials = FinancialProfile {
        credit_score,
        annual_income,
        loan_amount,
        debt_to_income_ratio,
        employment_length_years: defaults::EMPLOYMENT_YEARS,
        delinquencies_24m: defaults::DELINQUENCIES,
        credit_history_years: defaults::CREDIT_HISTORY_YEARS,
    };

    LoanApplication {
        financials,
        applicant: ApplicantDetails {
            applicant_name,
            gender: infer_gender(text).map(str::to_string),
            ..ApplicantDetails::default()
        },
    }
}

/// Names the fields the patterns never recover from text whose values in
/// `profile` differ from [`defaults`].
///
/// Employment length, delinquencies, and credit history always come back as
/// their defaults, so a profile that overrides them cannot round-trip
/// through a synthesized prompt; callers routing such a profile through
/// extraction should surface that to the operator.
pub fn unextractable_overrides(profile: &FinancialProfile) -> Vec<&'static str> {
    let mut fields = Vec::new();
    if profile.employment_length_years != defaults::EMPLOYMENT_YEARS {
        fields.push("employment_length_years");
    }
    if profile.delinquencies_24m != defaults::DELINQUENCIES {
        fields.push("delinquencies_24m");
    }
    if profile.credit_history_years != defaults::CREDIT_HISTORY_YEARS {
        fields.push("credit_history_years");
    }
    fields
}

/// Pronoun and gender-word inference, first match wins in this fixed order.
fn infer_gender(text: &str) -> Option<&'static str> {
    if FEMALE_RE.is_match(text) {
        Some("female")
    } else if MALE_RE.is_match(text) {
        Some("male")
    } else if NON_BINARY_RE.is_match(text) {
        Some("non-binary")
    } else {
        None
    }
}

fn extract_amount(pattern: &Regex, text: &str) -> Option<f64> {
    let caps = pattern.captures(text)?;
    let raw = caps[1].replace(',', "");
    let mut amount = raw.parse::<f64>().ok()?;
    if caps.get(2).is_some() {
        amount *= 1000.0;
    }
    Some(amount)
}
