//! Category service: validation and dependency checks around the store.

use std::sync::Arc;

use budgetbuddy_shared::types::CategoryId;

use super::error::CategoryError;
use super::store::CategoryStore;
use super::types::{Category, CreateCategoryInput, NewCategory};
use crate::store::StoreError;

/// Longest accepted category name.
pub const MAX_NAME_LEN: usize = 255;

/// Category business logic.
#[derive(Clone)]
pub struct CategoryService {
    store: Arc<dyn CategoryStore>,
}

impl CategoryService {
    /// Creates a service over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn CategoryStore>) -> Self {
        Self { store }
    }

    /// Lists all categories ordered by id.
    pub async fn list(&self) -> Result<Vec<Category>, CategoryError> {
        Ok(self.store.list().await?)
    }

    /// Fetches one category.
    pub async fn get(&self, id: CategoryId) -> Result<Category, CategoryError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound(id))
    }

    /// Creates a category after trimming and validating its name.
    ///
    /// # Errors
    ///
    /// Returns `EmptyName`/`NameTooLong` for a bad name and `Duplicate` when the
    /// name is taken (ignoring case).
    pub async fn create(&self, input: CreateCategoryInput) -> Result<Category, CategoryError> {
        let new = Self::validate(input)?;

        if self.store.find_by_name(&new.name).await?.is_some() {
            return Err(CategoryError::Duplicate(new.name));
        }

        let name = new.name.clone();
        self.store.insert(new).await.map_err(|e| match e {
            StoreError::UniqueViolation(_) => CategoryError::Duplicate(name),
            other => CategoryError::Store(other),
        })
    }

    /// Deletes a category that nothing references any more.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if absent and `InUse` while transactions or budgets
    /// still point at it.
    pub async fn delete(&self, id: CategoryId) -> Result<(), CategoryError> {
        if self.store.find_by_id(id).await?.is_none() {
            return Err(CategoryError::NotFound(id));
        }
        if self.store.is_referenced(id).await? {
            return Err(CategoryError::InUse(id));
        }
        match self.store.delete(id).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(CategoryError::NotFound(id)),
            Err(StoreError::ReferenceViolation(_)) => Err(CategoryError::InUse(id)),
            Err(other) => Err(CategoryError::Store(other)),
        }
    }

    /// Validates raw input into a storable category.
    pub fn validate(input: CreateCategoryInput) -> Result<NewCategory, CategoryError> {
        let name = input.name.as_deref().map(str::trim).unwrap_or_default();
        if name.is_empty() {
            return Err(CategoryError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(CategoryError::NameTooLong { max: MAX_NAME_LEN });
        }

        let icon = input
            .icon
            .map(|icon| icon.trim().to_string())
            .filter(|icon| !icon.is_empty());

        Ok(NewCategory {
            name: name.to_string(),
            icon,
        })
    }
}
