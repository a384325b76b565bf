//! Budget service: validation, uniqueness checks and spending aggregation.

use std::collections::HashMap;
use std::sync::Arc;

use budgetbuddy_shared::types::{BudgetId, CategoryId, CycleMonth, UserId};
use rust_decimal::Decimal;

use super::error::BudgetError;
use super::store::{BudgetStore, SpendingLookup};
use super::types::{
    Budget, BudgetChanges, BudgetFilter, BudgetOverview, BudgetWithSpending, CreateBudgetInput,
    NewBudget, SpendingKey, UpdateBudgetInput,
};
use crate::category::CategoryStore;
use crate::store::StoreError;
use crate::transaction::service::{AMOUNT_SCALE, MAX_AMOUNT};

/// Budget business logic.
#[derive(Clone)]
pub struct BudgetService {
    budgets: Arc<dyn BudgetStore>,
    categories: Arc<dyn CategoryStore>,
    spending: Arc<dyn SpendingLookup>,
}

impl BudgetService {
    /// Creates a service over the given stores.
    #[must_use]
    pub fn new(
        budgets: Arc<dyn BudgetStore>,
        categories: Arc<dyn CategoryStore>,
        spending: Arc<dyn SpendingLookup>,
    ) -> Self {
        Self {
            budgets,
            categories,
            spending,
        }
    }

    /// Lists the user's budgets matching `filter`, in insertion order.
    ///
    /// # Errors
    ///
    /// `InvalidUserId` when `user_id` is not positive.
    pub async fn list(
        &self,
        user_id: UserId,
        filter: BudgetFilter,
    ) -> Result<Vec<Budget>, BudgetError> {
        check_user(user_id)?;
        Ok(self.budgets.find_by_user(user_id, &filter).await?)
    }

    /// Fetches one of the user's budgets.
    ///
    /// A budget owned by someone else is reported as `NotFound`.
    pub async fn get(&self, id: BudgetId, user_id: UserId) -> Result<Budget, BudgetError> {
        check_user(user_id)?;
        self.budgets
            .find_one(id, user_id)
            .await?
            .ok_or(BudgetError::NotFound(id))
    }

    /// Creates a budget for a `(category, month)` slot.
    ///
    /// # Errors
    ///
    /// - `MissingField` when a field is absent
    /// - `NonPositiveAmount` / `InvalidCycleMonth` for bad values
    /// - `CategoryNotFound` for an unknown category
    /// - `Duplicate` when the user already budgets that slot
    pub async fn create(
        &self,
        user_id: UserId,
        input: CreateBudgetInput,
    ) -> Result<Budget, BudgetError> {
        check_user(user_id)?;
        let category_id = input
            .category_id
            .ok_or(BudgetError::MissingField("category_id"))?;
        let cycle_month: CycleMonth = input
            .cycle_month
            .as_deref()
            .ok_or(BudgetError::MissingField("cycle_month"))?
            .parse()?;
        let budget_amount = check_amount(
            input
                .budget_amount
                .ok_or(BudgetError::MissingField("budget_amount"))?,
        )?;

        self.ensure_category(category_id).await?;
        if self
            .budgets
            .find_by_key(user_id, category_id, cycle_month)
            .await?
            .is_some()
        {
            return Err(BudgetError::Duplicate {
                category_id,
                cycle_month,
            });
        }

        let new = NewBudget {
            user_id,
            category_id,
            cycle_month,
            budget_amount,
        };
        self.budgets
            .insert(new)
            .await
            .map_err(|e| duplicate_or_store(e, category_id, cycle_month))
    }

    /// Applies a partial update to one of the user's budgets.
    ///
    /// Uniqueness is re-checked against the resulting slot whenever the patch
    /// names a category or month.
    pub async fn update(
        &self,
        id: BudgetId,
        user_id: UserId,
        input: UpdateBudgetInput,
    ) -> Result<Budget, BudgetError> {
        check_user(user_id)?;
        let changes = BudgetChanges {
            category_id: input.category_id,
            cycle_month: input.cycle_month.as_deref().map(str::parse).transpose()?,
            budget_amount: input.budget_amount.map(check_amount).transpose()?,
        };

        let current = self.get(id, user_id).await?;
        let mut target = current.clone();
        changes.apply(&mut target);

        if changes.touches_key() {
            if let Some(category_id) = changes.category_id {
                self.ensure_category(category_id).await?;
            }
            let clash = self
                .budgets
                .find_by_key(user_id, target.category_id, target.cycle_month)
                .await?;
            if clash.is_some_and(|other| other.id != id) {
                return Err(BudgetError::Duplicate {
                    category_id: target.category_id,
                    cycle_month: target.cycle_month,
                });
            }
        }

        self.budgets
            .update(id, user_id, changes)
            .await
            .map_err(|e| duplicate_or_store(e, target.category_id, target.cycle_month))?
            .ok_or(BudgetError::NotFound(id))
    }

    /// Deletes one of the user's budgets, returning whether it existed.
    pub async fn delete(&self, id: BudgetId, user_id: UserId) -> Result<bool, BudgetError> {
        Ok(self.budgets.delete(id, user_id).await?)
    }

    /// The user's budgets for `cycle_month`, each with its spending.
    ///
    /// # Errors
    ///
    /// `InvalidCycleMonth` when `cycle_month` is not a `YYYY-MM` month.
    pub async fn with_spending(
        &self,
        user_id: UserId,
        cycle_month: &str,
    ) -> Result<Vec<BudgetWithSpending>, BudgetError> {
        let cycle_month: CycleMonth = cycle_month.parse()?;
        let budgets = self.list(user_id, BudgetFilter::month(cycle_month)).await?;
        let spending = self.spending.spending(user_id, Some(cycle_month)).await?;
        Ok(annotate(budgets, &spending))
    }

    /// Totals over every budget the user has, across all months.
    pub async fn overview(&self, user_id: UserId) -> Result<BudgetOverview, BudgetError> {
        let budgets = self.list(user_id, BudgetFilter::default()).await?;
        if budgets.is_empty() {
            return Ok(BudgetOverview::default());
        }
        let spending = self.spending.spending(user_id, None).await?;
        Ok(summarize(&annotate(budgets, &spending)))
    }

    async fn ensure_category(&self, category_id: CategoryId) -> Result<(), BudgetError> {
        match self.categories.find_by_id(category_id).await? {
            Some(_) => Ok(()),
            None => Err(BudgetError::CategoryNotFound(category_id)),
        }
    }
}

/// Joins budgets with spending by `(category, month)`; missing spending is zero.
#[must_use]
pub fn annotate(
    budgets: Vec<Budget>,
    spending: &HashMap<SpendingKey, Decimal>,
) -> Vec<BudgetWithSpending> {
    budgets
        .into_iter()
        .map(|budget| {
            let spent = spending
                .get(&budget.key())
                .copied()
                .unwrap_or(Decimal::ZERO);
            BudgetWithSpending::new(budget, spent)
        })
        .collect()
}

/// Sums annotated budgets into an overview.
#[must_use]
pub fn summarize(budgets: &[BudgetWithSpending]) -> BudgetOverview {
    let total_budget: Decimal = budgets.iter().map(|b| b.budget.budget_amount).sum();
    let total_spent: Decimal = budgets.iter().map(|b| b.spent_amount).sum();

    BudgetOverview {
        total_budget,
        total_spent,
        total_remaining: total_budget - total_spent,
        budget_count: budgets.len() as u64,
    }
}

impl BudgetWithSpending {
    /// Derives remaining amount and usage percentage from `spent_amount`.
    #[must_use]
    pub fn new(budget: Budget, spent_amount: Decimal) -> Self {
        let usage_percentage = if budget.budget_amount.is_zero() {
            Decimal::ZERO
        } else {
            spent_amount / budget.budget_amount * Decimal::ONE_HUNDRED
        };

        Self {
            remaining_amount: budget.budget_amount - spent_amount,
            usage_percentage,
            spent_amount,
            budget,
        }
    }
}

fn check_user(user_id: UserId) -> Result<(), BudgetError> {
    if user_id.is_valid() {
        Ok(())
    } else {
        Err(BudgetError::InvalidUserId(user_id))
    }
}

fn check_amount(amount: Decimal) -> Result<Decimal, BudgetError> {
    if amount <= Decimal::ZERO {
        return Err(BudgetError::NonPositiveAmount);
    }
    if amount.normalize().scale() > AMOUNT_SCALE {
        return Err(BudgetError::TooPrecise { max: AMOUNT_SCALE });
    }
    if amount > MAX_AMOUNT {
        return Err(BudgetError::AmountTooLarge { max: MAX_AMOUNT });
    }
    Ok(amount)
}

fn duplicate_or_store(
    err: StoreError,
    category_id: CategoryId,
    cycle_month: CycleMonth,
) -> BudgetError {
    match err {
        StoreError::UniqueViolation(_) => BudgetError::Duplicate {
            category_id,
            cycle_month,
        },
        StoreError::ReferenceViolation(_) => BudgetError::CategoryNotFound(category_id),
        other => BudgetError::Store(other),
    }
}
