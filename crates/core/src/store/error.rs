//! Store error types.

use budgetbuddy_shared::AppError;
use thiserror::Error;

/// Errors raised by a record store.
///
/// These pass through the service error enums unchanged.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique constraint rejected the write.
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    /// A foreign key rejected the write: the row is still referenced, or
    /// references a row that no longer exists.
    #[error("reference constraint violated: {0}")]
    ReferenceViolation(String),

    /// The backing store failed.
    #[error("store operation failed: {0}")]
    Backend(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UniqueViolation(msg) | StoreError::ReferenceViolation(msg) => {
                Self::Conflict(msg)
            }
            StoreError::Backend(msg) => Self::Database(msg),
        }
    }
}
