//! Report error types.

use budgetbuddy_shared::{AppError, types::CycleMonthError};
use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Month query is malformed.
    #[error(transparent)]
    InvalidMonth(#[from] CycleMonthError),

    /// Year query is malformed.
    #[error("year must be a four-digit year, got '{0}'")]
    InvalidYear(String),

    /// Page or limit below 1.
    #[error("{field} must be at least 1")]
    InvalidPagination {
        /// Offending parameter.
        field: &'static str,
    },

    /// Store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::InvalidMonth(_)
            | ReportError::InvalidYear(_)
            | ReportError::InvalidPagination { .. } => Self::Validation(err.to_string()),
            ReportError::Store(e) => e.into(),
        }
    }
}
