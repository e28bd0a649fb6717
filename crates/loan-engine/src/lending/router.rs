use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{Borrower, EmploymentStatus, LoanApplication};
use super::repository::FinancialDataWriter;
use super::service::{CapacityQuery, LendingService};
use super::LendingError;

/// Router builder exposing the three lending operations.
pub fn lending_router<W>(service: Arc<LendingService<W>>) -> Router
where
    W: FinancialDataWriter + 'static,
{
    Router::new()
        .route("/borrower", post(register_borrower_handler::<W>))
        .route("/borrowingCapacity", get(estimate_capacity_handler::<W>))
        .route("/loan", post(assess_loan_handler::<W>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CapacityParams {
    pub(crate) borrower_email: String,
    pub(crate) age: i32,
    pub(crate) gross_income: i64,
    /// Parsed by hand so an unrecognized value surfaces as a validation
    /// message rather than an opaque extractor rejection.
    pub(crate) employment_status: String,
}

pub(crate) async fn register_borrower_handler<W>(
    State(service): State<Arc<LendingService<W>>>,
    axum::Json(borrower): axum::Json<Borrower>,
) -> Response
where
    W: FinancialDataWriter + 'static,
{
    match service.register_borrower(&borrower) {
        Ok(outcome) => {
            let status = if outcome.created {
                StatusCode::CREATED
            } else {
                StatusCode::OK
            };
            (status, axum::Json(json!({ "email": outcome.email }))).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn estimate_capacity_handler<W>(
    State(service): State<Arc<LendingService<W>>>,
    Query(params): Query<CapacityParams>,
) -> Response
where
    W: FinancialDataWriter + 'static,
{
    let employment_status = match params.employment_status.parse::<EmploymentStatus>() {
        Ok(status) => status,
        Err(error) => return error_response(LendingError::Validation(error)),
    };

    let query = CapacityQuery {
        borrower_email: params.borrower_email,
        age: params.age,
        gross_income: params.gross_income,
        employment_status,
    };

    match service.estimate_capacity(&query) {
        Ok(calculation) => (
            StatusCode::OK,
            axum::Json(json!({
                "estimatedBorrowingCapacity": calculation.estimated_borrowing_capacity,
            })),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn assess_loan_handler<W>(
    State(service): State<Arc<LendingService<W>>>,
    axum::Json(application): axum::Json<LoanApplication>,
) -> Response
where
    W: FinancialDataWriter + 'static,
{
    match service.assess_application(&application) {
        Ok(status) => (
            StatusCode::OK,
            axum::Json(json!({ "loanApplicationStatus": status })),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: LendingError) -> Response {
    match error {
        LendingError::Validation(error) => {
            let payload = json!({ "message": error.to_string() });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        LendingError::Internal(error) => {
            let payload = json!({ "message": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
