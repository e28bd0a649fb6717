use chrono::NaiveDate;

use super::domain::{Borrower, LoanApplication};

/// Inclusive working-age band accepted by both engines. Applicants outside
/// this range cannot be priced against the earning-horizon model at all, so
/// the input is rejected rather than classified.
pub const MIN_WORKING_AGE: i32 = 18;
pub const MAX_WORKING_AGE: i32 = 75;

/// Credit scores live on a fixed 0..=1000 scale.
pub const MIN_CREDIT_SCORE: i32 = 0;
pub const MAX_CREDIT_SCORE: i32 = 1000;

/// Input violated a documented constraint. Always attributable to the caller;
/// the message is surfaced verbatim at the boundary and never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("grossIncome must not be negative, got {0}")]
    NegativeGrossIncome(i64),
    #[error("monthlyExpenses must not be negative, got {0}")]
    NegativeMonthlyExpenses(i64),
    #[error("age {age} is outside the supported working range {min}..={max}")]
    AgeOutOfRange { age: i32, min: i32, max: i32 },
    #[error("creditScore {0} is outside the supported range 0..=1000")]
    CreditScoreOutOfRange(i32),
    #[error("unrecognized employment status '{0}'")]
    UnrecognizedEmploymentStatus(String),
    #[error("borrower name must not be empty")]
    MissingName,
    #[error("'{0}' is not a plausible email address")]
    InvalidEmail(String),
    #[error("dob '{0}' must be a valid calendar date in YYYY-MM-DD format")]
    InvalidDateOfBirth(String),
}

pub(crate) fn validate_age(age: i32) -> Result<(), ValidationError> {
    if !(MIN_WORKING_AGE..=MAX_WORKING_AGE).contains(&age) {
        return Err(ValidationError::AgeOutOfRange {
            age,
            min: MIN_WORKING_AGE,
            max: MAX_WORKING_AGE,
        });
    }
    Ok(())
}

pub(crate) fn validate_gross_income(gross_income: i64) -> Result<(), ValidationError> {
    if gross_income < 0 {
        return Err(ValidationError::NegativeGrossIncome(gross_income));
    }
    Ok(())
}

pub(crate) fn validate_credit_score(credit_score: i32) -> Result<(), ValidationError> {
    if !(MIN_CREDIT_SCORE..=MAX_CREDIT_SCORE).contains(&credit_score) {
        return Err(ValidationError::CreditScoreOutOfRange(credit_score));
    }
    Ok(())
}

/// Shape checks shared by every loan application before classification.
pub fn validate_application(application: &LoanApplication) -> Result<(), ValidationError> {
    validate_age(application.age)?;
    validate_gross_income(application.gross_income)?;
    if application.monthly_expenses < 0 {
        return Err(ValidationError::NegativeMonthlyExpenses(
            application.monthly_expenses,
        ));
    }
    validate_credit_score(application.credit_score)
}

/// Field presence and pattern checks for a registration request.
pub fn validate_borrower(borrower: &Borrower) -> Result<(), ValidationError> {
    if borrower.name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    validate_email(&borrower.email)?;
    validate_dob(&borrower.dob)?;
    validate_credit_score(borrower.credit_score)
}

/// Structural email check. Full RFC conformance belongs to the boundary
/// schema layer; the core only refuses values that cannot act as a stable
/// partition key.
pub(crate) fn validate_email(email: &str) -> Result<(), ValidationError> {
    let plausible = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };

    if plausible {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail(email.to_string()))
    }
}

/// Accepts exactly `YYYY-MM-DD`, and only when it names a real calendar date.
pub(crate) fn validate_dob(dob: &str) -> Result<(), ValidationError> {
    let bytes = dob.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| matches!(i, 4 | 7) || b.is_ascii_digit());

    if !shaped || NaiveDate::parse_from_str(dob, "%Y-%m-%d").is_err() {
        return Err(ValidationError::InvalidDateOfBirth(dob.to_string()));
    }
    Ok(())
}
