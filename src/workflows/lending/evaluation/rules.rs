use super::config::EvaluationConfig;
use super::ScoreBreakdown;
use crate::workflows::lending::domain::FinancialProfile;

/// Run the six threshold checks and the weighted risk score.
///
/// Returns the breakdown together with one failure reason per failing
/// check, in check-evaluation order. A failing check contributes zero to
/// the risk score, never a negative amount.
pub(crate) fn score_profile(
    profile: &FinancialProfile,
    config: &EvaluationConfig,
) -> (ScoreBreakdown, Vec<String>) {
    let mut reasons = Vec::new();

    let credit_score_check = profile.credit_score >= config.min_credit_score;
    if !credit_score_check {
        reasons.push(format!(
            "Credit score {} below minimum {}",
            profile.credit_score, config.min_credit_score
        ));
    }

    let dti_check = profile.debt_to_income_ratio <= config.max_dti_ratio;
    if !dti_check {
        reasons.push(format!(
            "DTI ratio {:.2}% exceeds maximum {:.2}%",
            profile.debt_to_income_ratio * 100.0,
            config.max_dti_ratio * 100.0
        ));
    }

    // Safe: intake validation rejects non-positive income before this runs.
    let loan_to_income = profile.loan_amount / profile.annual_income;
    let income_ratio_check = loan_to_income <= config.max_loan_to_income_ratio;
    if !income_ratio_check {
        reasons.push(format!(
            "Loan amount {:.2}% of income exceeds maximum {:.2}%",
            loan_to_income * 100.0,
            config.max_loan_to_income_ratio * 100.0
        ));
    }

    let delinquencies_check = profile.delinquencies_24m <= config.max_delinquencies;
    if !delinquencies_check {
        reasons.push(format!(
            "Delinquencies {} exceed maximum {}",
            profile.delinquencies_24m, config.max_delinquencies
        ));
    }

    let employment_check = profile.employment_length_years >= config.min_employment_years;
    if !employment_check {
        reasons.push(format!(
            "Employment length {} years below minimum {}",
            profile.employment_length_years, config.min_employment_years
        ));
    }

    let credit_history_check = profile.credit_history_years >= config.min_credit_history_years;
    if !credit_history_check {
        reasons.push(format!(
            "Credit history {} years below minimum {}",
            profile.credit_history_years, config.min_credit_history_years
        ));
    }

    let mut breakdown = ScoreBreakdown {
        credit_score_check,
        dti_check,
        income_ratio_check,
        delinquencies_check,
        employment_check,
        credit_history_check,
        risk_score: 0.0,
    };
    breakdown.risk_score = risk_score(profile, &breakdown, config);

    (breakdown, reasons)
}

/// Weighted risk score in [0, 100]; higher means lower credit risk.
fn risk_score(
    profile: &FinancialProfile,
    breakdown: &ScoreBreakdown,
    config: &EvaluationConfig,
) -> f64 {
    let mut score = 0.0;

    // Credit score component (0-30 points)
    if breakdown.credit_score_check {
        let points =
            f64::from(profile.credit_score) - f64::from(config.min_credit_score);
        score += (points / 10.0).min(30.0);
    }

    // DTI component (0-20 points)
    if breakdown.dti_check {
        score += 20.0 * (1.0 - profile.debt_to_income_ratio / config.max_dti_ratio);
    }

    // Income stability component (0-15 points)
    if breakdown.employment_check {
        score += (profile.employment_length_years * 3.0).min(15.0);
    }

    // Payment history component (0-20 points)
    if breakdown.delinquencies_check {
        score += (20.0 - f64::from(profile.delinquencies_24m) * 5.0).max(0.0);
    }

    // Credit history component (0-15 points)
    if breakdown.credit_history_check {
        score += (profile.credit_history_years * 2.0).min(15.0);
    }

    score.clamp(0.0, 100.0)
}
