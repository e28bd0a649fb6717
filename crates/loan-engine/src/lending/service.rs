use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::assessment::{AssessmentPolicy, LoanAssessmentEngine};
use super::capacity::{BorrowingCapacityCalculator, CapacityPolicy};
use super::domain::{
    Borrower, BorrowingCapacityCalculation, CalculationId, EmploymentStatus, LoanApplication,
    LoanApplicationStatus,
};
use super::recorder::CalculationRecorder;
use super::registry::{BorrowerRegistry, RegistrationOutcome};
use super::repository::FinancialDataWriter;
use super::validation;
use super::LendingError;

/// Attributes of one capacity estimation request. The borrower email names
/// the history partition the resulting calculation is filed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityQuery {
    pub borrower_email: String,
    pub age: i32,
    pub gross_income: i64,
    pub employment_status: EmploymentStatus,
}

/// Facade composing the calculator, assessment engine, registry, and
/// recorder behind the HTTP boundary. Every method is an independent,
/// stateless unit of work; concurrent invocations never interfere.
pub struct LendingService<W> {
    calculator: BorrowingCapacityCalculator,
    assessor: LoanAssessmentEngine,
    registry: BorrowerRegistry<W>,
    recorder: CalculationRecorder<W>,
}

impl<W> LendingService<W>
where
    W: FinancialDataWriter,
{
    pub fn new(writer: Arc<W>, capacity: CapacityPolicy, assessment: AssessmentPolicy) -> Self {
        Self {
            calculator: BorrowingCapacityCalculator::new(capacity),
            assessor: LoanAssessmentEngine::new(assessment),
            registry: BorrowerRegistry::new(writer.clone()),
            recorder: CalculationRecorder::new(writer),
        }
    }

    /// Register a borrower identity, or return the existing one.
    pub fn register_borrower(
        &self,
        borrower: &Borrower,
    ) -> Result<RegistrationOutcome, LendingError> {
        self.registry.create_or_get(borrower)
    }

    /// Estimate borrowing capacity and append the result to the borrower's
    /// history. A failed append leaves no partial record; the write is a
    /// single atomic item.
    pub fn estimate_capacity(
        &self,
        query: &CapacityQuery,
    ) -> Result<BorrowingCapacityCalculation, LendingError> {
        validation::validate_email(&query.borrower_email)?;

        let estimated = self.calculator.calculate(
            query.age,
            query.gross_income,
            query.employment_status,
        )?;

        let calculation = BorrowingCapacityCalculation {
            id: CalculationId::generate(),
            borrower_email: query.borrower_email.clone(),
            estimated_borrowing_capacity: estimated,
            gross_annual_income: query.gross_income,
            employment_status: query.employment_status,
            timestamp: Utc::now(),
        };

        self.recorder.record(&calculation)?;

        info!(
            calculation_id = %calculation.id,
            estimated_borrowing_capacity = estimated,
            "capacity calculation recorded"
        );

        Ok(calculation)
    }

    /// Render the tri-state decision for a submitted application. No side
    /// effects; persisting the decision is the caller's concern.
    pub fn assess_application(
        &self,
        application: &LoanApplication,
    ) -> Result<LoanApplicationStatus, LendingError> {
        Ok(self.assessor.assess(application)?)
    }
}
