//! Category error types.

use budgetbuddy_shared::{AppError, types::CategoryId};
use thiserror::Error;

use crate::store::StoreError;

/// Category-related errors.
#[derive(Debug, Error)]
pub enum CategoryError {
    /// Name is missing or blank.
    #[error("Category name must not be empty")]
    EmptyName,

    /// Name exceeds the column width.
    #[error("Category name must be at most {max} characters")]
    NameTooLong {
        /// Maximum length.
        max: usize,
    },

    /// A category with this name already exists.
    #[error("Category '{0}' already exists")]
    Duplicate(String),

    /// Category not found.
    #[error("Category not found: {0}")]
    NotFound(CategoryId),

    /// Transactions or budgets still reference the category.
    #[error("Category {0} is still used by transactions or budgets")]
    InUse(CategoryId),

    /// Store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<CategoryError> for AppError {
    fn from(err: CategoryError) -> Self {
        match err {
            CategoryError::EmptyName | CategoryError::NameTooLong { .. } => {
                Self::Validation(err.to_string())
            }
            CategoryError::Duplicate(_) | CategoryError::InUse(_) => Self::Conflict(err.to_string()),
            CategoryError::NotFound(_) => Self::NotFound(err.to_string()),
            CategoryError::Store(e) => e.into(),
        }
    }
}
