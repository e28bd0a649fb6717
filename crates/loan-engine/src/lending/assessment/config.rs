use serde::{Deserialize, Serialize};

/// Threshold configuration for the tri-state loan classification.
///
/// Hard limits (`minimum_credit_score`, `maximum_debt_ratio`) bound the
/// REJECTED region; confidence limits (`confident_credit_score`,
/// `safe_debt_ratio`, the eligible age band) bound the APPROVED region.
/// Everything between the two regions lands in REVIEW.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentPolicy {
    /// Scores strictly below this floor are rejected outright.
    pub minimum_credit_score: i32,
    /// Annualized expense-to-income ratios strictly above this ceiling are
    /// rejected outright.
    pub maximum_debt_ratio: f64,
    /// Scores at or above this threshold count toward automatic approval.
    pub confident_credit_score: i32,
    /// Ratios at or below this threshold count toward automatic approval.
    pub safe_debt_ratio: f64,
    /// Inclusive age band eligible for automatic approval.
    pub eligible_age_min: i32,
    pub eligible_age_max: i32,
}

impl Default for AssessmentPolicy {
    fn default() -> Self {
        Self {
            minimum_credit_score: 500,
            maximum_debt_ratio: 0.60,
            confident_credit_score: 800,
            safe_debt_ratio: 0.35,
            eligible_age_min: 25,
            eligible_age_max: 60,
        }
    }
}
