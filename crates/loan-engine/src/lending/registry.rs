use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use super::domain::Borrower;
use super::keys::RecordKey;
use super::repository::{FinancialDataWriter, PutOutcome};
use super::validation;
use super::LendingError;

/// Identity returned from a registration request. `created` distinguishes a
/// fresh record from a pre-existing one so the boundary can answer 201 vs 200.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationOutcome {
    pub email: String,
    pub created: bool,
}

/// Create-or-get identity management keyed on the borrower's email.
///
/// Registration is idempotent: concurrent attempts for the same email
/// converge on one durable record, the first writer wins, and later callers
/// observe "already existed". A differing borrower under an existing email is
/// never written over; email is an immutable natural key.
pub struct BorrowerRegistry<W> {
    writer: Arc<W>,
}

impl<W> BorrowerRegistry<W>
where
    W: FinancialDataWriter,
{
    pub fn new(writer: Arc<W>) -> Self {
        Self { writer }
    }

    /// At most one durable write per call.
    pub fn create_or_get(&self, borrower: &Borrower) -> Result<RegistrationOutcome, LendingError> {
        validation::validate_borrower(borrower)?;

        let key = RecordKey::borrower_profile(&borrower.email);
        let outcome = self.writer.put_borrower(&key, borrower)?;
        let created = matches!(outcome, PutOutcome::Created);

        info!(email = %borrower.email, created, "borrower registration resolved");

        Ok(RegistrationOutcome {
            email: borrower.email.clone(),
            created,
        })
    }
}
