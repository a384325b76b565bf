//! Budget repository contracts.

use std::collections::HashMap;

use async_trait::async_trait;
use budgetbuddy_shared::types::{BudgetId, CategoryId, CycleMonth, UserId};
use rust_decimal::Decimal;

use super::types::{Budget, BudgetChanges, BudgetFilter, NewBudget, SpendingKey};
use crate::store::StoreError;

/// Storage operations for budgets, always scoped to one user.
#[async_trait]
pub trait BudgetStore: Send + Sync {
    /// The user's budgets matching `filter`, in insertion order.
    async fn find_by_user(
        &self,
        user_id: UserId,
        filter: &BudgetFilter,
    ) -> Result<Vec<Budget>, StoreError>;

    /// Finds a budget owned by `user_id`.
    async fn find_one(&self, id: BudgetId, user_id: UserId) -> Result<Option<Budget>, StoreError>;

    /// Finds the user's budget for a `(category, month)` slot.
    async fn find_by_key(
        &self,
        user_id: UserId,
        category_id: CategoryId,
        cycle_month: CycleMonth,
    ) -> Result<Option<Budget>, StoreError>;

    /// Inserts a budget; fails with `UniqueViolation` when the slot is taken.
    async fn insert(&self, budget: NewBudget) -> Result<Budget, StoreError>;

    /// Applies `changes` and refreshes `updated_at`; `None` if absent.
    ///
    /// Fails with `UniqueViolation` when the change collides with another budget.
    async fn update(
        &self,
        id: BudgetId,
        user_id: UserId,
        changes: BudgetChanges,
    ) -> Result<Option<Budget>, StoreError>;

    /// Deletes a budget, returning whether a row was removed.
    async fn delete(&self, id: BudgetId, user_id: UserId) -> Result<bool, StoreError>;
}

/// Spent amounts keyed by `(category, month)`.
///
/// Only expense transactions count. Keys without spending are absent.
#[async_trait]
pub trait SpendingLookup: Send + Sync {
    /// The user's spending, optionally limited to one month.
    async fn spending(
        &self,
        user_id: UserId,
        cycle_month: Option<CycleMonth>,
    ) -> Result<HashMap<SpendingKey, Decimal>, StoreError>;
}
