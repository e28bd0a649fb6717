use super::super::domain::LoanApplicationStatus;
use super::config::AssessmentPolicy;
use super::rules::AssessmentSignals;

/// Classify derived signals against the policy thresholds.
///
/// Exactly-at-threshold values resolve deterministically: a score equal to
/// the hard floor is not rejected, a ratio equal to the hard ceiling is not
/// rejected, and the approval comparisons are inclusive. Any combination that
/// clears the hard limits without meeting every approval condition falls
/// through to `Review`.
pub(crate) fn decide_outcome(
    signals: &AssessmentSignals,
    config: &AssessmentPolicy,
) -> LoanApplicationStatus {
    if signals.credit_score < config.minimum_credit_score {
        return LoanApplicationStatus::Rejected;
    }

    if signals.debt_to_income > config.maximum_debt_ratio {
        return LoanApplicationStatus::Rejected;
    }

    let confident_credit = signals.credit_score >= config.confident_credit_score;
    let safe_ratio = signals.debt_to_income <= config.safe_debt_ratio;
    let eligible_age =
        (config.eligible_age_min..=config.eligible_age_max).contains(&signals.age);

    if confident_credit && safe_ratio && eligible_age {
        LoanApplicationStatus::Approved
    } else {
        LoanApplicationStatus::Review
    }
}
