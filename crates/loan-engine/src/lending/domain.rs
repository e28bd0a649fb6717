use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::ValidationError;

/// A registered individual, keyed by email for the lifetime of the record.
/// There is no update operation; the first write wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Borrower {
    pub name: String,
    /// ISO-8601 calendar date, `YYYY-MM-DD`. Kept as the submitted string and
    /// validated structurally so boundary payloads round-trip unchanged.
    pub dob: String,
    pub email: String,
    pub credit_score: i32,
}

/// Employment categories recognized by the lending policy. Wire values are
/// SCREAMING_SNAKE, matching the public API contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentStatus {
    Casual,
    FullTime,
    PartTime,
    SelfEmployed,
}

impl EmploymentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            EmploymentStatus::Casual => "CASUAL",
            EmploymentStatus::FullTime => "FULL_TIME",
            EmploymentStatus::PartTime => "PART_TIME",
            EmploymentStatus::SelfEmployed => "SELF_EMPLOYED",
        }
    }
}

impl fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EmploymentStatus {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "CASUAL" => Ok(EmploymentStatus::Casual),
            "FULL_TIME" => Ok(EmploymentStatus::FullTime),
            "PART_TIME" => Ok(EmploymentStatus::PartTime),
            "SELF_EMPLOYED" => Ok(EmploymentStatus::SelfEmployed),
            other => Err(ValidationError::UnrecognizedEmploymentStatus(
                other.to_string(),
            )),
        }
    }
}

/// One-shot submission evaluated for a tri-state decision. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplication {
    pub age: i32,
    pub gross_income: i64,
    pub employment_status: EmploymentStatus,
    pub credit_score: i32,
    pub monthly_expenses: i64,
}

/// Tri-state outcome of a loan assessment. Borderline combinations resolve to
/// `Review`, never silently to an accept or reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoanApplicationStatus {
    Approved,
    Rejected,
    Review,
}

impl LoanApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            LoanApplicationStatus::Approved => "APPROVED",
            LoanApplicationStatus::Rejected => "REJECTED",
            LoanApplicationStatus::Review => "REVIEW",
        }
    }
}

/// Identifier wrapper for capacity calculations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalculationId(pub String);

impl CalculationId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for CalculationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A timestamped, append-only record of one capacity estimate for a borrower.
/// Filed under `(partition = borrower_email, sort = composite key)`; the sort
/// key combines id and timestamp so no calculation ever overwrites another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowingCapacityCalculation {
    pub id: CalculationId,
    pub borrower_email: String,
    pub estimated_borrowing_capacity: i64,
    pub gross_annual_income: i64,
    pub employment_status: EmploymentStatus,
    pub timestamp: DateTime<Utc>,
}
