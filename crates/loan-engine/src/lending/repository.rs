use super::domain::{Borrower, BorrowingCapacityCalculation};
use super::keys::RecordKey;

/// Result of a conditional put against the keyspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutOutcome {
    Created,
    AlreadyExists,
}

/// The persistence store failed. Adaptors construct these with an
/// operation-level message only; store-specific detail (endpoints, table
/// names, driver errors) stays behind the port and is logged there, not
/// surfaced.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct InternalError(String);

impl InternalError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Write capability onto the financial data store. One concrete adaptor per
/// target store; the core depends only on this trait, so any store offering
/// equivalent single-item put semantics can stand in.
pub trait FinancialDataWriter: Send + Sync {
    /// Create the item if the partition has no record under the key's sort
    /// string; otherwise leave the existing item untouched and report so.
    fn put_borrower(
        &self,
        key: &RecordKey,
        borrower: &Borrower,
    ) -> Result<PutOutcome, InternalError>;

    /// Append a history item under the composite key. The caller guarantees
    /// key uniqueness; the store needs no conditional-write logic.
    fn append_calculation(
        &self,
        key: &RecordKey,
        calculation: &BorrowingCapacityCalculation,
    ) -> Result<(), InternalError>;
}
