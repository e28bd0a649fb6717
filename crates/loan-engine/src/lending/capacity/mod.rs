mod config;

pub use config::CapacityPolicy;

use super::domain::EmploymentStatus;
use super::validation::{self, ValidationError};

/// Stateless estimator applying the capacity policy to borrower attributes.
/// Deterministic and free of I/O: identical inputs always produce the
/// identical estimate.
pub struct BorrowingCapacityCalculator {
    policy: CapacityPolicy,
}

impl BorrowingCapacityCalculator {
    pub fn new(policy: CapacityPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &CapacityPolicy {
        &self.policy
    }

    /// Estimate how much the applicant could plausibly borrow, rounded down
    /// to the nearest whole currency unit. Non-negative for all valid inputs.
    pub fn calculate(
        &self,
        age: i32,
        gross_income: i64,
        employment_status: EmploymentStatus,
    ) -> Result<i64, ValidationError> {
        validation::validate_age(age)?;
        validation::validate_gross_income(gross_income)?;

        let base = gross_income as f64 * self.policy.income_multiplier(employment_status);
        let estimate = base * self.policy.age_factor(age);
        Ok(estimate.floor() as i64)
    }
}
