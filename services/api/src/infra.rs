use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use loan_engine::lending::{
    AssessmentPolicy, Borrower, BorrowingCapacityCalculation, CapacityPolicy, FinancialDataWriter,
    InternalError, PutOutcome, RecordKey,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local stand-in for the financial data store, keyed the same way a
/// partition/sort store would be: identity puts are first-writer-wins, and
/// history appends accumulate per partition in arrival order.
#[derive(Default, Clone)]
pub(crate) struct InMemoryFinancialStore {
    borrowers: Arc<Mutex<HashMap<String, Borrower>>>,
    calculations: Arc<Mutex<HashMap<String, Vec<(String, BorrowingCapacityCalculation)>>>>,
}

impl InMemoryFinancialStore {
    pub(crate) fn history(&self, email: &str) -> Vec<BorrowingCapacityCalculation> {
        self.calculations
            .lock()
            .expect("calculation store mutex poisoned")
            .get(email)
            .map(|records| records.iter().map(|(_, record)| record.clone()).collect())
            .unwrap_or_default()
    }
}

impl FinancialDataWriter for InMemoryFinancialStore {
    fn put_borrower(
        &self,
        key: &RecordKey,
        borrower: &Borrower,
    ) -> Result<PutOutcome, InternalError> {
        let mut guard = self.borrowers.lock().expect("borrower store mutex poisoned");
        if guard.contains_key(&key.partition) {
            return Ok(PutOutcome::AlreadyExists);
        }
        guard.insert(key.partition.clone(), borrower.clone());
        Ok(PutOutcome::Created)
    }

    fn append_calculation(
        &self,
        key: &RecordKey,
        calculation: &BorrowingCapacityCalculation,
    ) -> Result<(), InternalError> {
        let mut guard = self
            .calculations
            .lock()
            .expect("calculation store mutex poisoned");
        let partition = guard.entry(key.partition.clone()).or_default();
        if partition.iter().any(|(sort, _)| sort == &key.sort) {
            return Err(InternalError::new(
                "financial data store rejected a duplicate history key",
            ));
        }
        partition.push((key.sort.clone(), calculation.clone()));
        Ok(())
    }
}

pub(crate) fn default_capacity_policy() -> CapacityPolicy {
    CapacityPolicy::default()
}

pub(crate) fn default_assessment_policy() -> AssessmentPolicy {
    AssessmentPolicy::default()
}
