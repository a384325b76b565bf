//! Mapping from `SeaORM` errors to store errors.

use budgetbuddy_core::StoreError;
use sea_orm::{DbErr, SqlErr};
use tracing::error;

/// Converts a database error, recognising unique-index and foreign-key violations.
pub(crate) fn store_error(err: DbErr) -> StoreError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            return StoreError::UniqueViolation(detail);
        }
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            return StoreError::ReferenceViolation(detail);
        }
        _ => {}
    }
    error!(error = %err, "Database operation failed");
    StoreError::Backend(err.to_string())
}

/// A stored value that no longer parses into its domain type.
pub(crate) fn corrupt(table: &str, id: i64, detail: impl std::fmt::Display) -> StoreError {
    error!(table, id, %detail, "Stored row is malformed");
    StoreError::Backend(format!("malformed {table} row {id}: {detail}"))
}
