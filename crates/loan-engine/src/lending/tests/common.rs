use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{TimeZone, Utc};
use serde_json::Value;

use crate::lending::assessment::{AssessmentPolicy, LoanAssessmentEngine};
use crate::lending::capacity::{BorrowingCapacityCalculator, CapacityPolicy};
use crate::lending::domain::{
    Borrower, BorrowingCapacityCalculation, CalculationId, EmploymentStatus, LoanApplication,
};
use crate::lending::keys::RecordKey;
use crate::lending::repository::{FinancialDataWriter, InternalError, PutOutcome};
use crate::lending::service::{CapacityQuery, LendingService};
use crate::lending::{lending_router, RegistrationOutcome};

pub(super) fn capacity_policy() -> CapacityPolicy {
    CapacityPolicy {
        full_time_multiplier: 5.0,
        part_time_multiplier: 4.0,
        self_employed_multiplier: 3.5,
        casual_multiplier: 3.0,
        taper_start_age: 55,
        taper_end_age: 75,
        taper_floor: 0.4,
    }
}

pub(super) fn assessment_policy() -> AssessmentPolicy {
    AssessmentPolicy {
        minimum_credit_score: 500,
        maximum_debt_ratio: 0.60,
        confident_credit_score: 800,
        safe_debt_ratio: 0.35,
        eligible_age_min: 25,
        eligible_age_max: 60,
    }
}

pub(super) fn calculator() -> BorrowingCapacityCalculator {
    BorrowingCapacityCalculator::new(capacity_policy())
}

pub(super) fn assessment_engine() -> LoanAssessmentEngine {
    LoanAssessmentEngine::new(assessment_policy())
}

pub(super) fn borrower() -> Borrower {
    Borrower {
        name: "Avery Quinn".to_string(),
        dob: "1990-01-01".to_string(),
        email: "avery@example.com".to_string(),
        credit_score: 720,
    }
}

pub(super) fn application(
    age: i32,
    gross_income: i64,
    credit_score: i32,
    monthly_expenses: i64,
) -> LoanApplication {
    LoanApplication {
        age,
        gross_income,
        employment_status: EmploymentStatus::FullTime,
        credit_score,
        monthly_expenses,
    }
}

pub(super) fn capacity_query() -> CapacityQuery {
    CapacityQuery {
        borrower_email: "avery@example.com".to_string(),
        age: 30,
        gross_income: 100_000,
        employment_status: EmploymentStatus::FullTime,
    }
}

pub(super) fn calculation(email: &str) -> BorrowingCapacityCalculation {
    BorrowingCapacityCalculation {
        id: CalculationId::generate(),
        borrower_email: email.to_string(),
        estimated_borrowing_capacity: 500_000,
        gross_annual_income: 100_000,
        employment_status: EmploymentStatus::FullTime,
        timestamp: Utc.with_ymd_and_hms(2024, 3, 14, 9, 26, 53).unwrap(),
    }
}

pub(super) fn build_service() -> (
    LendingService<MemoryFinancialStore>,
    Arc<MemoryFinancialStore>,
) {
    let store = Arc::new(MemoryFinancialStore::default());
    let service = LendingService::new(store.clone(), capacity_policy(), assessment_policy());
    (service, store)
}

pub(super) fn lending_router_with_service(
    service: LendingService<MemoryFinancialStore>,
) -> axum::Router {
    lending_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn assert_created(outcome: &RegistrationOutcome, email: &str) {
    assert_eq!(outcome.email, email);
    assert!(outcome.created);
}

/// In-memory double for the financial data store: first writer wins on
/// identity puts, per-partition append log for calculations.
#[derive(Default, Clone)]
pub(super) struct MemoryFinancialStore {
    borrowers: Arc<Mutex<HashMap<String, Borrower>>>,
    calculations: Arc<Mutex<HashMap<String, Vec<(String, BorrowingCapacityCalculation)>>>>,
}

impl MemoryFinancialStore {
    pub(super) fn stored_borrower(&self, email: &str) -> Option<Borrower> {
        self.borrowers
            .lock()
            .expect("borrower store mutex poisoned")
            .get(email)
            .cloned()
    }

    pub(super) fn borrower_count(&self) -> usize {
        self.borrowers
            .lock()
            .expect("borrower store mutex poisoned")
            .len()
    }

    /// History records for a partition, in insertion order.
    pub(super) fn history(&self, email: &str) -> Vec<BorrowingCapacityCalculation> {
        self.calculations
            .lock()
            .expect("calculation store mutex poisoned")
            .get(email)
            .map(|records| records.iter().map(|(_, record)| record.clone()).collect())
            .unwrap_or_default()
    }

    pub(super) fn sort_keys(&self, email: &str) -> Vec<String> {
        self.calculations
            .lock()
            .expect("calculation store mutex poisoned")
            .get(email)
            .map(|records| records.iter().map(|(sort, _)| sort.clone()).collect())
            .unwrap_or_default()
    }
}

impl FinancialDataWriter for MemoryFinancialStore {
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

/// Double standing in for a store that is down.
pub(super) struct UnavailableFinancialStore;

impl FinancialDataWriter for UnavailableFinancialStore {
    fn put_borrower(
        &self,
        _key: &RecordKey,
        _borrower: &Borrower,
    ) -> Result<PutOutcome, InternalError> {
        Err(InternalError::new(
            "failed to persist borrower profile to the financial data store",
        ))
    }

    fn append_calculation(
        &self,
        _key: &RecordKey,
        _calculation: &BorrowingCapacityCalculation,
    ) -> Result<(), InternalError> {
        Err(InternalError::new(
            "failed to append borrowing capacity calculation to the financial data store",
        ))
    }
}
