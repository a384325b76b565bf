//! Budget repository and spending lookup.

use std::collections::HashMap;

use async_trait::async_trait;
use budgetbuddy_core::StoreError;
use budgetbuddy_core::budget::{
    Budget, BudgetChanges, BudgetFilter, BudgetStore, NewBudget, SpendingKey, SpendingLookup,
};
use budgetbuddy_core::store::{now, touched_at};
use budgetbuddy_core::transaction::TransactionKind;
use budgetbuddy_shared::types::{BudgetId, CategoryId, CycleMonth, UserId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use super::error::{corrupt, store_error};
use crate::entities::{budgets, transactions};

/// Budget repository.
///
/// The unique index on `(user_id, category_id, cycle_month)` backs the
/// service's duplicate check; a violation comes back as `UniqueViolation`.
#[derive(Debug, Clone)]
pub struct BudgetRepository {
    db: DatabaseConnection,
}

impl BudgetRepository {
    /// Creates a new budget repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(
        &self,
        id: BudgetId,
        user_id: UserId,
    ) -> Result<Option<budgets::Model>, StoreError> {
        budgets::Entity::find_by_id(id.into_inner())
            .filter(budgets::Column::UserId.eq(user_id.into_inner()))
            .one(&self.db)
            .await
            .map_err(store_error)
    }
}

/// Converts a row, rejecting a malformed `cycle_month`.
fn to_domain(model: budgets::Model) -> Result<Budget, StoreError> {
    let cycle_month: CycleMonth = model
        .cycle_month
        .parse()
        .map_err(|e| corrupt("budgets", model.id, e))?;

    Ok(Budget {
        id: BudgetId::new(model.id),
        user_id: UserId::new(model.user_id),
        category_id: CategoryId::new(model.category_id),
        cycle_month,
        budget_amount: model.budget_amount,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

#[async_trait]
impl BudgetStore for BudgetRepository {
    async fn find_by_user(
        &self,
        user_id: UserId,
        filter: &BudgetFilter,
    ) -> Result<Vec<Budget>, StoreError> {
        let mut query =
            budgets::Entity::find().filter(budgets::Column::UserId.eq(user_id.into_inner()));
        if let Some(cycle_month) = filter.cycle_month {
            query = query.filter(budgets::Column::CycleMonth.eq(cycle_month.to_string()));
        }
        if let Some(category_id) = filter.category_id {
            query = query.filter(budgets::Column::CategoryId.eq(category_id.into_inner()));
        }

        query
            .order_by_asc(budgets::Column::Id)
            .all(&self.db)
            .await
            .map_err(store_error)?
            .into_iter()
            .map(to_domain)
            .collect()
    }

    async fn find_one(&self, id: BudgetId, user_id: UserId) -> Result<Option<Budget>, StoreError> {
        self.find_model(id, user_id).await?.map(to_domain).transpose()
    }

    async fn find_by_key(
        &self,
        user_id: UserId,
        category_id: CategoryId,
        cycle_month: CycleMonth,
    ) -> Result<Option<Budget>, StoreError> {
        budgets::Entity::find()
            .filter(budgets::Column::UserId.eq(user_id.into_inner()))
            .filter(budgets::Column::CategoryId.eq(category_id.into_inner()))
            .filter(budgets::Column::CycleMonth.eq(cycle_month.to_string()))
            .one(&self.db)
            .await
            .map_err(store_error)?
            .map(to_domain)
            .transpose()
    }

    async fn insert(&self, budget: NewBudget) -> Result<Budget, StoreError> {
        let ts = now();
        let row = budgets::ActiveModel {
            id: NotSet,
            user_id: Set(budget.user_id.into_inner()),
            category_id: Set(budget.category_id.into_inner()),
            cycle_month: Set(budget.cycle_month.to_string()),
            budget_amount: Set(budget.budget_amount),
            created_at: Set(ts),
            updated_at: Set(ts),
        };

        to_domain(row.insert(&self.db).await.map_err(store_error)?)
    }

    async fn update(
        &self,
        id: BudgetId,
        user_id: UserId,
        changes: BudgetChanges,
    ) -> Result<Option<Budget>, StoreError> {
        let Some(model) = self.find_model(id, user_id).await? else {
            return Ok(None);
        };

        let updated_at = touched_at(model.updated_at);
        let mut row: budgets::ActiveModel = model.into();
        if let Some(category_id) = changes.category_id {
            row.category_id = Set(category_id.into_inner());
        }
        if let Some(cycle_month) = changes.cycle_month {
            row.cycle_month = Set(cycle_month.to_string());
        }
        if let Some(amount) = changes.budget_amount {
            row.budget_amount = Set(amount);
        }
        row.updated_at = Set(updated_at);

        to_domain(row.update(&self.db).await.map_err(store_error)?).map(Some)
    }

    async fn delete(&self, id: BudgetId, user_id: UserId) -> Result<bool, StoreError> {
        let result = budgets::Entity::delete_many()
            .filter(budgets::Column::Id.eq(id.into_inner()))
            .filter(budgets::Column::UserId.eq(user_id.into_inner()))
            .exec(&self.db)
            .await
            .map_err(store_error)?;
        Ok(result.rows_affected > 0)
    }
}

/// Spending lookup over the transactions table.
///
/// Fetches only the columns it needs and groups by `(category, month)` in
/// memory, since month extraction differs between PostgreSQL and SQLite.
#[derive(Debug, Clone)]
pub struct SpendingRepository {
    db: DatabaseConnection,
}

impl SpendingRepository {
    /// Creates a new spending lookup.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SpendingLookup for SpendingRepository {
    async fn spending(
        &self,
        user_id: UserId,
        cycle_month: Option<CycleMonth>,
    ) -> Result<HashMap<SpendingKey, Decimal>, StoreError> {
        let mut query = transactions::Entity::find()
            .select_only()
            .column(transactions::Column::CategoryId)
            .column(transactions::Column::OccurredOn)
            .column(transactions::Column::Amount)
            .filter(transactions::Column::UserId.eq(user_id.into_inner()))
            .filter(transactions::Column::Kind.eq(TransactionKind::Expense.as_str()));
        if let Some(month) = cycle_month {
            query = query
                .filter(transactions::Column::OccurredOn.gte(month.first_day()))
                .filter(transactions::Column::OccurredOn.lte(month.last_day()));
        }

        let rows: Vec<(i64, NaiveDate, Decimal)> = query
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(store_error)?;

        let mut totals: HashMap<SpendingKey, Decimal> = HashMap::new();
        for (category_id, occurred_on, amount) in rows {
            let key = SpendingKey {
                category_id: CategoryId::new(category_id),
                cycle_month: CycleMonth::from_date(occurred_on),
            };
            *totals.entry(key).or_default() += amount;
        }
        Ok(totals)
    }
}
