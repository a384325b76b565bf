//! Budget error types.

use budgetbuddy_shared::{
    AppError,
    types::{BudgetId, CategoryId, CycleMonth, CycleMonthError, UserId},
};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::store::StoreError;

/// Budget-related errors.
#[derive(Debug, Error)]
pub enum BudgetError {
    /// A required field was not supplied.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// User ID is not a valid identifier.
    #[error("Invalid user id: {0}")]
    InvalidUserId(UserId),

    /// Budget amount must be greater than zero.
    #[error("Budget amount must be greater than zero")]
    NonPositiveAmount,

    /// Amount has more decimal places than the store keeps.
    #[error("Budget amount must have at most {max} decimal places")]
    TooPrecise {
        /// Maximum scale.
        max: u32,
    },

    /// Amount exceeds what the store can hold.
    #[error("Budget amount must be at most {max}")]
    AmountTooLarge {
        /// Largest accepted amount.
        max: Decimal,
    },

    /// Cycle month is malformed.
    #[error(transparent)]
    InvalidCycleMonth(#[from] CycleMonthError),

    /// Budget not found (or owned by someone else).
    #[error("Budget not found: {0}")]
    NotFound(BudgetId),

    /// Referenced category does not exist.
    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),

    /// A budget already exists for this category and month.
    #[error("Budget already exists for category {category_id} in {cycle_month}")]
    Duplicate {
        /// Category.
        category_id: CategoryId,
        /// Month.
        cycle_month: CycleMonth,
    },

    /// Store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<BudgetError> for AppError {
    fn from(err: BudgetError) -> Self {
        match err {
            BudgetError::MissingField(_)
            | BudgetError::InvalidUserId(_)
            | BudgetError::NonPositiveAmount
            | BudgetError::TooPrecise { .. }
            | BudgetError::AmountTooLarge { .. }
            | BudgetError::InvalidCycleMonth(_) => Self::Validation(err.to_string()),
            BudgetError::NotFound(_) | BudgetError::CategoryNotFound(_) => {
                Self::NotFound(err.to_string())
            }
            BudgetError::Duplicate { .. } => Self::Conflict(err.to_string()),
            BudgetError::Store(e) => e.into(),
        }
    }
}
