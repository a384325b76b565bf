//! Transaction repository for database operations.

use async_trait::async_trait;
use budgetbuddy_core::StoreError;
use budgetbuddy_core::store::{now, touched_at};
use budgetbuddy_core::transaction::{
    NewTransaction, Transaction, TransactionChanges, TransactionFilter, TransactionKind,
    TransactionStore,
};
use budgetbuddy_shared::types::{CategoryId, PageRequest, TransactionId, UserId};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, Condition, DatabaseConnection,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, Set,
};

use super::error::{corrupt, store_error};
use crate::entities::transactions;

/// Transaction repository.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    db: DatabaseConnection,
}

impl TransactionRepository {
    /// Creates a new transaction repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// The user's rows, newest `created_at` first, ties by id.
    fn scoped(user_id: UserId) -> Select<transactions::Entity> {
        transactions::Entity::find()
            .filter(transactions::Column::UserId.eq(user_id.into_inner()))
            .order_by_desc(transactions::Column::CreatedAt)
            .order_by_desc(transactions::Column::Id)
    }

    async fn find_model(
        &self,
        id: TransactionId,
        user_id: UserId,
    ) -> Result<Option<transactions::Model>, StoreError> {
        transactions::Entity::find_by_id(id.into_inner())
            .filter(transactions::Column::UserId.eq(user_id.into_inner()))
            .one(&self.db)
            .await
            .map_err(store_error)
    }
}

/// Converts a row, rejecting an unknown `kind`.
fn to_domain(model: transactions::Model) -> Result<Transaction, StoreError> {
    let kind = TransactionKind::parse(&model.kind)
        .ok_or_else(|| corrupt("transactions", model.id, format!("kind '{}'", model.kind)))?;

    Ok(Transaction {
        id: TransactionId::new(model.id),
        user_id: UserId::new(model.user_id),
        category_id: CategoryId::new(model.category_id),
        kind,
        amount: model.amount,
        note: model.note,
        occurred_on: model.occurred_on,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

fn filter_condition(filter: &TransactionFilter) -> Condition {
    let mut condition = Condition::all();
    if let Some(kind) = filter.kind {
        condition = condition.add(transactions::Column::Kind.eq(kind.as_str()));
    }
    if let Some(category_id) = filter.category_id {
        condition = condition.add(transactions::Column::CategoryId.eq(category_id.into_inner()));
    }
    if let Some(from) = filter.from {
        condition = condition.add(transactions::Column::OccurredOn.gte(from));
    }
    if let Some(to) = filter.to {
        condition = condition.add(transactions::Column::OccurredOn.lte(to));
    }
    condition
}

#[async_trait]
impl TransactionStore for TransactionRepository {
    async fn find_by_user(
        &self,
        user_id: UserId,
        filter: &TransactionFilter,
    ) -> Result<Vec<Transaction>, StoreError> {
        Self::scoped(user_id)
            .filter(filter_condition(filter))
            .all(&self.db)
            .await
            .map_err(store_error)?
            .into_iter()
            .map(to_domain)
            .collect()
    }

    async fn page_by_user(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> Result<(Vec<Transaction>, u64), StoreError> {
        let total = Self::scoped(user_id)
            .count(&self.db)
            .await
            .map_err(store_error)?;

        let rows = Self::scoped(user_id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .map_err(store_error)?
            .into_iter()
            .map(to_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((rows, total))
    }

    async fn find_one(
        &self,
        id: TransactionId,
        user_id: UserId,
    ) -> Result<Option<Transaction>, StoreError> {
        self.find_model(id, user_id)
            .await?
            .map(to_domain)
            .transpose()
    }

    async fn insert(&self, transaction: NewTransaction) -> Result<Transaction, StoreError> {
        let ts = now();
        let row = transactions::ActiveModel {
            id: NotSet,
            user_id: Set(transaction.user_id.into_inner()),
            category_id: Set(transaction.category_id.into_inner()),
            kind: Set(transaction.kind.as_str().to_string()),
            amount: Set(transaction.amount),
            note: Set(transaction.note),
            occurred_on: Set(transaction.occurred_on),
            created_at: Set(ts),
            updated_at: Set(ts),
        };

        to_domain(row.insert(&self.db).await.map_err(store_error)?)
    }

    async fn update(
        &self,
        id: TransactionId,
        user_id: UserId,
        changes: TransactionChanges,
    ) -> Result<Option<Transaction>, StoreError> {
        let Some(model) = self.find_model(id, user_id).await? else {
            return Ok(None);
        };

        let updated_at = touched_at(model.updated_at);
        let mut row: transactions::ActiveModel = model.into();
        if let Some(category_id) = changes.category_id {
            row.category_id = Set(category_id.into_inner());
        }
        if let Some(kind) = changes.kind {
            row.kind = Set(kind.as_str().to_string());
        }
        if let Some(amount) = changes.amount {
            row.amount = Set(amount);
        }
        if let Some(note) = changes.note {
            row.note = Set(note);
        }
        if let Some(occurred_on) = changes.occurred_on {
            row.occurred_on = Set(occurred_on);
        }
        row.updated_at = Set(updated_at);

        to_domain(row.update(&self.db).await.map_err(store_error)?).map(Some)
    }

    async fn delete(&self, id: TransactionId, user_id: UserId) -> Result<bool, StoreError> {
        let result = transactions::Entity::delete_many()
            .filter(transactions::Column::Id.eq(id.into_inner()))
            .filter(transactions::Column::UserId.eq(user_id.into_inner()))
            .exec(&self.db)
            .await
            .map_err(store_error)?;
        Ok(result.rows_affected > 0)
    }
}
