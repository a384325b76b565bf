//! User repository for database operations.

use async_trait::async_trait;
use budgetbuddy_core::StoreError;
use budgetbuddy_core::auth::{NewUser, User, UserStore};
use budgetbuddy_core::store::now;
use budgetbuddy_shared::types::UserId;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};

use super::error::store_error;
use crate::entities::users;

/// User repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: UserId::new(model.id),
            username: model.username,
            first_name: model.first_name,
            last_name: model.last_name,
            password_hash: model.password_hash,
            created_at: model.created_at,
            updated_at: model.updated_at,
            last_login: model.last_login,
        }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let rows = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .map_err(store_error)?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        users::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
            .map(|row| row.map(User::from))
            .map_err(store_error)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map(|row| row.map(User::from))
            .map_err(store_error)
    }

    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        let ts = now();
        let row = users::ActiveModel {
            id: NotSet,
            username: Set(user.username),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            password_hash: Set(user.password_hash),
            created_at: Set(ts),
            updated_at: Set(ts),
            last_login: Set(None),
        };

        row.insert(&self.db).await.map(User::from).map_err(store_error)
    }

    async fn record_login(
        &self,
        id: UserId,
        at: DateTime<Utc>,
    ) -> Result<Option<User>, StoreError> {
        let Some(model) = users::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
            .map_err(store_error)?
        else {
            return Ok(None);
        };

        let mut row: users::ActiveModel = model.into();
        row.last_login = Set(Some(at));
        row.update(&self.db)
            .await
            .map(|model| Some(User::from(model)))
            .map_err(store_error)
    }
}
