//! Category repository for database operations.

use async_trait::async_trait;
use budgetbuddy_core::StoreError;
use budgetbuddy_core::category::{Category, CategoryStore, NewCategory};
use budgetbuddy_shared::types::CategoryId;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
    sea_query::{Expr, Func},
};

use super::error::store_error;
use crate::entities::{budgets, categories, transactions};

/// Category repository.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    db: DatabaseConnection,
}

impl CategoryRepository {
    /// Creates a new category repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<categories::Model> for Category {
    fn from(model: categories::Model) -> Self {
        Self {
            id: CategoryId::new(model.id),
            name: model.name,
            icon: model.icon,
        }
    }
}

#[async_trait]
impl CategoryStore for CategoryRepository {
    async fn list(&self) -> Result<Vec<Category>, StoreError> {
        let rows = categories::Entity::find()
            .order_by_asc(categories::Column::Id)
            .all(&self.db)
            .await
            .map_err(store_error)?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, StoreError> {
        categories::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
            .map(|row| row.map(Category::from))
            .map_err(store_error)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, StoreError> {
        categories::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(categories::Column::Name)))
                    .eq(name.to_lowercase()),
            )
            .one(&self.db)
            .await
            .map(|row| row.map(Category::from))
            .map_err(store_error)
    }

    async fn insert(&self, category: NewCategory) -> Result<Category, StoreError> {
        let row = categories::ActiveModel {
            id: NotSet,
            name: Set(category.name),
            icon: Set(category.icon),
        };

        row.insert(&self.db)
            .await
            .map(Category::from)
            .map_err(store_error)
    }

    async fn delete(&self, id: CategoryId) -> Result<bool, StoreError> {
        let result = categories::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await
            .map_err(store_error)?;
        Ok(result.rows_affected > 0)
    }

    async fn is_referenced(&self, id: CategoryId) -> Result<bool, StoreError> {
        let transactions = transactions::Entity::find()
            .filter(transactions::Column::CategoryId.eq(id.into_inner()))
            .count(&self.db)
            .await
            .map_err(store_error)?;
        if transactions > 0 {
            return Ok(true);
        }

        let budgets = budgets::Entity::find()
            .filter(budgets::Column::CategoryId.eq(id.into_inner()))
            .count(&self.db)
            .await
            .map_err(store_error)?;
        Ok(budgets > 0)
    }
}
