use std::sync::Arc;

use super::domain::BorrowingCapacityCalculation;
use super::keys::RecordKey;
use super::repository::{FinancialDataWriter, InternalError};

/// Append-only history writer for capacity calculations.
///
/// Always appends: no read-before-write, no update of an existing item, no
/// retries, no state between calls. Uniqueness comes entirely from the
/// composite key (id + timestamp) built here; the written record is not read
/// back for confirmation.
pub struct CalculationRecorder<W> {
    writer: Arc<W>,
}

impl<W> CalculationRecorder<W>
where
    W: FinancialDataWriter,
{
    pub fn new(writer: Arc<W>) -> Self {
        Self { writer }
    }

    pub fn record(&self, calculation: &BorrowingCapacityCalculation) -> Result<(), InternalError> {
        let key = RecordKey::for_calculation(calculation);
        self.writer.append_calculation(&key, calculation)
    }
}
