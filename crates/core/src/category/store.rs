//! Category repository contract.

use async_trait::async_trait;
use budgetbuddy_shared::types::CategoryId;

use super::types::{Category, NewCategory};
use crate::store::StoreError;

/// Storage operations for categories.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// All categories ordered by id.
    async fn list(&self) -> Result<Vec<Category>, StoreError>;

    /// Finds a category by id.
    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, StoreError>;

    /// Finds a category by name, ignoring case.
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, StoreError>;

    /// Inserts a category; fails with `UniqueViolation` on a duplicate name.
    async fn insert(&self, category: NewCategory) -> Result<Category, StoreError>;

    /// Deletes a category, returning whether a row was removed.
    async fn delete(&self, id: CategoryId) -> Result<bool, StoreError>;

    /// Whether any transaction or budget references the category.
    async fn is_referenced(&self, id: CategoryId) -> Result<bool, StoreError>;
}
