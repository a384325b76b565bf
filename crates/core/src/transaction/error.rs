//! Transaction error types.

use budgetbuddy_shared::{
    AppError,
    types::{CategoryId, TransactionId, UserId},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::store::StoreError;

/// Transaction-related errors.
#[derive(Debug, Error)]
pub enum TransactionError {
    /// A required field was not supplied.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// User ID is not a valid identifier.
    #[error("Invalid user id: {0}")]
    InvalidUserId(UserId),

    /// Amount must be greater than zero.
    #[error("Amount must be greater than zero")]
    NonPositiveAmount,

    /// Amount has more decimal places than the store keeps.
    #[error("Amount must have at most {max} decimal places")]
    TooPrecise {
        /// Maximum scale.
        max: u32,
    },

    /// Amount exceeds what the store can hold.
    #[error("Amount must be at most {max}")]
    AmountTooLarge {
        /// Largest accepted amount.
        max: Decimal,
    },

    /// Note exceeds the column width.
    #[error("Note must be at most {max} characters")]
    NoteTooLong {
        /// Maximum length.
        max: usize,
    },

    /// Date range is inverted.
    #[error("Invalid date range: start {from} is after end {to}")]
    InvalidDateRange {
        /// Start date.
        from: NaiveDate,
        /// End date.
        to: NaiveDate,
    },

    /// Transaction not found (or owned by someone else).
    #[error("Transaction not found: {0}")]
    NotFound(TransactionId),

    /// Referenced category does not exist.
    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),

    /// Store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<TransactionError> for AppError {
    fn from(err: TransactionError) -> Self {
        match err {
            TransactionError::MissingField(_)
            | TransactionError::InvalidUserId(_)
            | TransactionError::NonPositiveAmount
            | TransactionError::TooPrecise { .. }
            | TransactionError::AmountTooLarge { .. }
            | TransactionError::NoteTooLong { .. }
            | TransactionError::InvalidDateRange { .. } => Self::Validation(err.to_string()),
            TransactionError::NotFound(_) | TransactionError::CategoryNotFound(_) => {
                Self::NotFound(err.to_string())
            }
            TransactionError::Store(e) => e.into(),
        }
    }
}
