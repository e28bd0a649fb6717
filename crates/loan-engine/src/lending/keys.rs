use chrono::{DateTime, SecondsFormat, Utc};

use super::domain::{BorrowingCapacityCalculation, CalculationId};

const BORROWER_PROFILE_TAG: &str = "BORROWER_PROFILE";
const CALCULATION_TAG: &str = "BORROWING_CAPACITY_CALCULATION";
const TIMESTAMP_TAG: &str = "TIMESTAMP";

/// Address of one item in the financial data store: a partition (the
/// borrower's email) and a type-discriminated composite sort string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordKey {
    pub partition: String,
    pub sort: String,
}

impl RecordKey {
    pub fn borrower_profile(email: &str) -> Self {
        Self {
            partition: email.to_string(),
            sort: RecordSortKey::BorrowerProfile.encode(),
        }
    }

    pub fn for_calculation(calculation: &BorrowingCapacityCalculation) -> Self {
        Self {
            partition: calculation.borrower_email.clone(),
            sort: RecordSortKey::Calculation {
                calculation_id: calculation.id.clone(),
                timestamp: calculation.timestamp,
            }
            .encode(),
        }
    }
}

/// Structured form of the sort string, with a stable documented encoding:
///
/// - identity records: `BORROWER_PROFILE`
/// - history records:  `BORROWING_CAPACITY_CALCULATION#<id>#TIMESTAMP#<rfc3339>`
///
/// Combining a fresh id with the emission instant makes the per-partition key
/// set injective across time, so appends never collide and never overwrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSortKey {
    BorrowerProfile,
    Calculation {
        calculation_id: CalculationId,
        timestamp: DateTime<Utc>,
    },
}

impl RecordSortKey {
    pub fn encode(&self) -> String {
        match self {
            RecordSortKey::BorrowerProfile => BORROWER_PROFILE_TAG.to_string(),
            RecordSortKey::Calculation {
                calculation_id,
                timestamp,
            } => format!(
                "{CALCULATION_TAG}#{calculation_id}#{TIMESTAMP_TAG}#{}",
                timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
            ),
        }
    }

    pub fn decode(raw: &str) -> Result<Self, SortKeyError> {
        if raw == BORROWER_PROFILE_TAG {
            return Ok(RecordSortKey::BorrowerProfile);
        }

        let mut parts = raw.splitn(4, '#');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(CALCULATION_TAG), Some(id), Some(TIMESTAMP_TAG), Some(stamp))
                if !id.is_empty() =>
            {
                let timestamp = DateTime::parse_from_rfc3339(stamp)
                    .map_err(|_| SortKeyError::InvalidTimestamp(stamp.to_string()))?
                    .with_timezone(&Utc);
                Ok(RecordSortKey::Calculation {
                    calculation_id: CalculationId(id.to_string()),
                    timestamp,
                })
            }
            _ => Err(SortKeyError::UnrecognizedFormat(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortKeyError {
    #[error("unrecognized sort key '{0}'")]
    UnrecognizedFormat(String),
    #[error("sort key timestamp '{0}' is not RFC 3339")]
    InvalidTimestamp(String),
}
