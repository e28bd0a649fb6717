mod config;
mod policy;
mod rules;

pub use config::AssessmentPolicy;

use super::domain::{LoanApplication, LoanApplicationStatus};
use super::validation::{self, ValidationError};
use policy::decide_outcome;

/// Stateless classifier applying the assessment policy to a submitted
/// application. Pure and deterministic; persistence of the decision, if any,
/// belongs to the caller.
pub struct LoanAssessmentEngine {
    policy: AssessmentPolicy,
}

impl LoanAssessmentEngine {
    pub fn new(policy: AssessmentPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &AssessmentPolicy {
        &self.policy
    }

    pub fn assess(
        &self,
        application: &LoanApplication,
    ) -> Result<LoanApplicationStatus, ValidationError> {
        validation::validate_application(application)?;

        let signals = rules::derive_signals(application);
        Ok(decide_outcome(&signals, &self.policy))
    }
}
