//! In-memory record store for tests and local demos.
//!
//! All tables live behind one `RwLock`; every write (including the
//! uniqueness checks that precede it) happens under a single write guard.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use budgetbuddy_shared::types::{
    BudgetId, CategoryId, CycleMonth, PageRequest, TransactionId, UserId,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use super::{StoreError, Stores, now, touched_at};
use crate::auth::{NewUser, User, UserStore};
use crate::budget::{
    Budget, BudgetChanges, BudgetFilter, BudgetStore, NewBudget, SpendingKey, SpendingLookup,
};
use crate::category::{Category, CategoryStore, DEFAULT_CATEGORIES, NewCategory};
use crate::transaction::{
    NewTransaction, Transaction, TransactionChanges, TransactionFilter, TransactionKind,
    TransactionStore,
};

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    categories: Vec<Category>,
    transactions: Vec<Transaction>,
    budgets: Vec<Budget>,
    last_user_id: i64,
    last_category_id: i64,
    last_transaction_id: i64,
    last_budget_id: i64,
}

impl Tables {
    fn category_in_use(&self, id: CategoryId) -> bool {
        self.transactions.iter().any(|t| t.category_id == id)
            || self.budgets.iter().any(|b| b.category_id == id)
    }
}

fn next_id(last: &mut i64) -> i64 {
    *last += 1;
    *last
}

/// Newest `created_at` first, then id descending.
fn newest_first(a: &Transaction, b: &Transaction) -> std::cmp::Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| b.id.cmp(&a.id))
}

/// Record store backed by vectors in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the default categories.
    #[must_use]
    pub fn with_default_categories() -> Self {
        let mut tables = Tables::default();
        for (name, icon) in DEFAULT_CATEGORIES {
            let id = CategoryId::new(next_id(&mut tables.last_category_id));
            tables.categories.push(Category {
                id,
                name: name.to_string(),
                icon: Some(icon.to_string()),
            });
        }
        Self {
            tables: RwLock::new(tables),
        }
    }

    /// Bundles this store as every repository the services need.
    #[must_use]
    pub fn stores(self: Arc<Self>) -> Stores {
        Stores {
            users: self.clone(),
            categories: self.clone(),
            transactions: self.clone(),
            budgets: self.clone(),
            spending: self,
        }
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.tables.read().await.users.clone())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.username == username).cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.username == user.username) {
            return Err(StoreError::UniqueViolation(format!(
                "username '{}' already exists",
                user.username
            )));
        }

        let ts = now();
        let user = User {
            id: UserId::new(next_id(&mut tables.last_user_id)),
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            password_hash: user.password_hash,
            created_at: ts,
            updated_at: ts,
            last_login: None,
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn record_login(
        &self,
        id: UserId,
        at: DateTime<Utc>,
    ) -> Result<Option<User>, StoreError> {
        let mut tables = self.tables.write().await;
        Ok(tables.users.iter_mut().find(|u| u.id == id).map(|user| {
            user.last_login = Some(at);
            user.clone()
        }))
    }
}

#[async_trait]
impl CategoryStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.tables.read().await.categories.clone())
    }

    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, StoreError> {
        let name = name.to_lowercase();
        let tables = self.tables.read().await;
        Ok(tables
            .categories
            .iter()
            .find(|c| c.name.to_lowercase() == name)
            .cloned())
    }

    async fn insert(&self, category: NewCategory) -> Result<Category, StoreError> {
        let mut tables = self.tables.write().await;
        let lowered = category.name.to_lowercase();
        if tables
            .categories
            .iter()
            .any(|c| c.name.to_lowercase() == lowered)
        {
            return Err(StoreError::UniqueViolation(format!(
                "category '{}' already exists",
                category.name
            )));
        }

        let category = Category {
            id: CategoryId::new(next_id(&mut tables.last_category_id)),
            name: category.name,
            icon: category.icon,
        };
        tables.categories.push(category.clone());
        Ok(category)
    }

    async fn delete(&self, id: CategoryId) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.category_in_use(id) {
            return Err(StoreError::ReferenceViolation(format!(
                "category {id} is referenced"
            )));
        }
        let before = tables.categories.len();
        tables.categories.retain(|c| c.id != id);
        Ok(tables.categories.len() < before)
    }

    async fn is_referenced(&self, id: CategoryId) -> Result<bool, StoreError> {
        Ok(self.tables.read().await.category_in_use(id))
    }
}

#[async_trait]
impl TransactionStore for MemoryStore {
    async fn find_by_user(
        &self,
        user_id: UserId,
        filter: &TransactionFilter,
    ) -> Result<Vec<Transaction>, StoreError> {
        let tables = self.tables.read().await;
        let mut rows: Vec<Transaction> = tables
            .transactions
            .iter()
            .filter(|t| t.user_id == user_id && filter.matches(t))
            .cloned()
            .collect();
        rows.sort_by(newest_first);
        Ok(rows)
    }

    async fn page_by_user(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> Result<(Vec<Transaction>, u64), StoreError> {
        let rows = TransactionStore::find_by_user(self, user_id, &TransactionFilter::default())
            .await?;
        let total = rows.len() as u64;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);
        Ok((rows.into_iter().skip(offset).take(limit).collect(), total))
    }

    async fn find_one(
        &self,
        id: TransactionId,
        user_id: UserId,
    ) -> Result<Option<Transaction>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .transactions
            .iter()
            .find(|t| t.id == id && t.user_id == user_id)
            .cloned())
    }

    async fn insert(&self, transaction: NewTransaction) -> Result<Transaction, StoreError> {
        let mut tables = self.tables.write().await;
        let ts = now();
        let transaction = Transaction {
            id: TransactionId::new(next_id(&mut tables.last_transaction_id)),
            user_id: transaction.user_id,
            category_id: transaction.category_id,
            kind: transaction.kind,
            amount: transaction.amount,
            note: transaction.note,
            occurred_on: transaction.occurred_on,
            created_at: ts,
            updated_at: ts,
        };
        tables.transactions.push(transaction.clone());
        Ok(transaction)
    }

    async fn update(
        &self,
        id: TransactionId,
        user_id: UserId,
        changes: TransactionChanges,
    ) -> Result<Option<Transaction>, StoreError> {
        let mut tables = self.tables.write().await;
        let Some(row) = tables
            .transactions
            .iter_mut()
            .find(|t| t.id == id && t.user_id == user_id)
        else {
            return Ok(None);
        };

        if let Some(category_id) = changes.category_id {
            row.category_id = category_id;
        }
        if let Some(kind) = changes.kind {
            row.kind = kind;
        }
        if let Some(amount) = changes.amount {
            row.amount = amount;
        }
        if let Some(note) = changes.note {
            row.note = note;
        }
        if let Some(occurred_on) = changes.occurred_on {
            row.occurred_on = occurred_on;
        }
        row.updated_at = touched_at(row.updated_at);
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: TransactionId, user_id: UserId) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        let before = tables.transactions.len();
        tables
            .transactions
            .retain(|t| !(t.id == id && t.user_id == user_id));
        Ok(tables.transactions.len() < before)
    }
}

#[async_trait]
impl BudgetStore for MemoryStore {
    async fn find_by_user(
        &self,
        user_id: UserId,
        filter: &BudgetFilter,
    ) -> Result<Vec<Budget>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .budgets
            .iter()
            .filter(|b| b.user_id == user_id && filter.matches(b))
            .cloned()
            .collect())
    }

    async fn find_one(&self, id: BudgetId, user_id: UserId) -> Result<Option<Budget>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .budgets
            .iter()
            .find(|b| b.id == id && b.user_id == user_id)
            .cloned())
    }

    async fn find_by_key(
        &self,
        user_id: UserId,
        category_id: CategoryId,
        cycle_month: CycleMonth,
    ) -> Result<Option<Budget>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .budgets
            .iter()
            .find(|b| {
                b.user_id == user_id && b.category_id == category_id && b.cycle_month == cycle_month
            })
            .cloned())
    }

    async fn insert(&self, budget: NewBudget) -> Result<Budget, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.budgets.iter().any(|b| {
            b.user_id == budget.user_id
                && b.category_id == budget.category_id
                && b.cycle_month == budget.cycle_month
        }) {
            return Err(budget_slot_taken(budget.category_id, budget.cycle_month));
        }

        let ts = now();
        let budget = Budget {
            id: BudgetId::new(next_id(&mut tables.last_budget_id)),
            user_id: budget.user_id,
            category_id: budget.category_id,
            cycle_month: budget.cycle_month,
            budget_amount: budget.budget_amount,
            created_at: ts,
            updated_at: ts,
        };
        tables.budgets.push(budget.clone());
        Ok(budget)
    }

    async fn update(
        &self,
        id: BudgetId,
        user_id: UserId,
        changes: BudgetChanges,
    ) -> Result<Option<Budget>, StoreError> {
        let mut tables = self.tables.write().await;
        let Some(index) = tables
            .budgets
            .iter()
            .position(|b| b.id == id && b.user_id == user_id)
        else {
            return Ok(None);
        };

        let mut target = tables.budgets[index].clone();
        changes.apply(&mut target);
        if tables.budgets.iter().any(|b| {
            b.id != id
                && b.user_id == user_id
                && b.category_id == target.category_id
                && b.cycle_month == target.cycle_month
        }) {
            return Err(budget_slot_taken(target.category_id, target.cycle_month));
        }

        target.updated_at = touched_at(target.updated_at);
        tables.budgets[index] = target.clone();
        Ok(Some(target))
    }

    async fn delete(&self, id: BudgetId, user_id: UserId) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        let before = tables.budgets.len();
        tables
            .budgets
            .retain(|b| !(b.id == id && b.user_id == user_id));
        Ok(tables.budgets.len() < before)
    }
}

fn budget_slot_taken(category_id: CategoryId, cycle_month: CycleMonth) -> StoreError {
    StoreError::UniqueViolation(format!(
        "budget for category {category_id} in {cycle_month} already exists"
    ))
}

#[async_trait]
impl SpendingLookup for MemoryStore {
    async fn spending(
        &self,
        user_id: UserId,
        cycle_month: Option<CycleMonth>,
    ) -> Result<HashMap<SpendingKey, Decimal>, StoreError> {
        let tables = self.tables.read().await;
        let mut totals: HashMap<SpendingKey, Decimal> = HashMap::new();

        for tx in tables
            .transactions
            .iter()
            .filter(|t| t.user_id == user_id && t.kind == TransactionKind::Expense)
        {
            let month = CycleMonth::from_date(tx.occurred_on);
            if cycle_month.is_some_and(|wanted| wanted != month) {
                continue;
            }
            *totals
                .entry(SpendingKey {
                    category_id: tx.category_id,
                    cycle_month: month,
                })
                .or_default() += tx.amount;
        }

        Ok(totals)
    }
}
