//! Transaction repository contract.

use async_trait::async_trait;
use budgetbuddy_shared::types::{PageRequest, TransactionId, UserId};

use super::types::{NewTransaction, Transaction, TransactionChanges, TransactionFilter};
use crate::store::StoreError;

/// Storage operations for transactions, always scoped to one user.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// The user's transactions matching `filter`, newest `created_at` first
    /// (ties broken by id, descending).
    async fn find_by_user(
        &self,
        user_id: UserId,
        filter: &TransactionFilter,
    ) -> Result<Vec<Transaction>, StoreError>;

    /// One page of the user's transactions in the same order, plus the total count.
    async fn page_by_user(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> Result<(Vec<Transaction>, u64), StoreError>;

    /// Finds a transaction owned by `user_id`.
    async fn find_one(
        &self,
        id: TransactionId,
        user_id: UserId,
    ) -> Result<Option<Transaction>, StoreError>;

    /// Inserts a transaction, assigning id and timestamps.
    async fn insert(&self, transaction: NewTransaction) -> Result<Transaction, StoreError>;

    /// Applies `changes` to a transaction owned by `user_id`; `None` if absent.
    async fn update(
        &self,
        id: TransactionId,
        user_id: UserId,
        changes: TransactionChanges,
    ) -> Result<Option<Transaction>, StoreError>;

    /// Deletes a transaction owned by `user_id`, returning whether a row was removed.
    async fn delete(&self, id: TransactionId, user_id: UserId) -> Result<bool, StoreError>;
}
