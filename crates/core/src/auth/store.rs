//! User repository contract.

use async_trait::async_trait;
use budgetbuddy_shared::types::UserId;
use chrono::{DateTime, Utc};

use super::types::{NewUser, User};
use crate::store::StoreError;

/// Storage operations for user accounts.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All users ordered by id.
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    /// Finds a user by id.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError>;

    /// Finds a user by exact username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Inserts a user; fails with `UniqueViolation` on a taken username.
    async fn insert(&self, user: NewUser) -> Result<User, StoreError>;

    /// Stamps `last_login`, returning the updated user.
    async fn record_login(
        &self,
        id: UserId,
        at: DateTime<Utc>,
    ) -> Result<Option<User>, StoreError>;
}
