//! JSON error responses.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use budgetbuddy_core::StoreError;
use budgetbuddy_core::auth::AccountError;
use budgetbuddy_core::budget::BudgetError;
use budgetbuddy_core::category::CategoryError;
use budgetbuddy_core::reports::ReportError;
use budgetbuddy_core::transaction::TransactionError;
use budgetbuddy_shared::AppError;
use serde::Serialize;
use tracing::error;

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// An `AppError` rendered as `{"error": CODE, "message": text}`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: &'a str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Store failures are logged here and never echoed to the caller.
        let message = if self.0.is_client_error() {
            self.0.message()
        } else {
            error!(error = %self.0, "Request failed");
            "An internal error occurred"
        };

        let body = Json(ErrorBody {
            error: self.0.error_code(),
            message,
        });
        (status, body).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

macro_rules! from_domain_error {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for ApiError {
                fn from(err: $ty) -> Self {
                    Self(err.into())
                }
            }
        )+
    };
}

from_domain_error!(
    AccountError,
    BudgetError,
    CategoryError,
    ReportError,
    StoreError,
    TransactionError,
);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(AppError::Validation(rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(AppError::Validation(rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self(AppError::Validation(rejection.body_text()))
    }
}
