//! Loan origination core: borrower registration, borrowing-capacity
//! estimation with append-only history, and tri-state loan assessment.
//!
//! Engines are stateless and side-effect-free; the only effects are the two
//! persistence-port calls (identity put, history append) behind the
//! [`FinancialDataWriter`] capability. Policy coefficients live in dedicated
//! configuration structs so every decision stays independently auditable.

pub mod assessment;
pub mod capacity;
pub mod domain;
pub mod keys;
pub mod recorder;
pub mod registry;
pub mod repository;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use assessment::{AssessmentPolicy, LoanAssessmentEngine};
pub use capacity::{BorrowingCapacityCalculator, CapacityPolicy};
pub use domain::{
    Borrower, BorrowingCapacityCalculation, CalculationId, EmploymentStatus, LoanApplication,
    LoanApplicationStatus,
};
pub use keys::{RecordKey, RecordSortKey, SortKeyError};
pub use recorder::CalculationRecorder;
pub use registry::{BorrowerRegistry, RegistrationOutcome};
pub use repository::{FinancialDataWriter, InternalError, PutOutcome};
pub use router::lending_router;
pub use service::{CapacityQuery, LendingService};
pub use validation::ValidationError;

/// Failure surface of the lending core: caller input violated a documented
/// constraint, or the financial data store let a write down. Nothing else.
#[derive(Debug, thiserror::Error)]
pub enum LendingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Internal(#[from] InternalError),
}
