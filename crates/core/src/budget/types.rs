//! Budget data types.

use budgetbuddy_shared::types::{BudgetId, CategoryId, CycleMonth, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::BudgetError;

/// A spending limit for one category in one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Budget ID.
    pub id: BudgetId,
    /// Owner.
    pub user_id: UserId,
    /// Budgeted category.
    pub category_id: CategoryId,
    /// Month the budget applies to.
    pub cycle_month: CycleMonth,
    /// Limit, always positive.
    pub budget_amount: Decimal,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    /// The `(category, month)` pair this budget covers.
    #[must_use]
    pub const fn key(&self) -> SpendingKey {
        SpendingKey {
            category_id: self.category_id,
            cycle_month: self.cycle_month,
        }
    }
}

/// Input for creating a budget, as received from the caller.
///
/// Every field is optional so that missing fields surface as validation
/// errors rather than deserialization failures.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBudgetInput {
    /// Budgeted category.
    pub category_id: Option<CategoryId>,
    /// Month as `YYYY-MM`.
    pub cycle_month: Option<String>,
    /// Limit, must be positive.
    pub budget_amount: Option<Decimal>,
}

/// Partial update; only present fields change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBudgetInput {
    /// New category.
    pub category_id: Option<CategoryId>,
    /// New month as `YYYY-MM`.
    pub cycle_month: Option<String>,
    /// New limit.
    pub budget_amount: Option<Decimal>,
}

/// A validated budget ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBudget {
    /// Owner.
    pub user_id: UserId,
    /// Budgeted category.
    pub category_id: CategoryId,
    /// Month.
    pub cycle_month: CycleMonth,
    /// Positive limit.
    pub budget_amount: Decimal,
}

/// Validated field changes handed to the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BudgetChanges {
    /// New category.
    pub category_id: Option<CategoryId>,
    /// New month.
    pub cycle_month: Option<CycleMonth>,
    /// New limit.
    pub budget_amount: Option<Decimal>,
}

impl BudgetChanges {
    /// Whether the change moves the budget to another `(category, month)` slot.
    #[must_use]
    pub const fn touches_key(&self) -> bool {
        self.category_id.is_some() || self.cycle_month.is_some()
    }

    /// Writes the present fields onto `budget`.
    pub fn apply(&self, budget: &mut Budget) {
        if let Some(category_id) = self.category_id {
            budget.category_id = category_id;
        }
        if let Some(cycle_month) = self.cycle_month {
            budget.cycle_month = cycle_month;
        }
        if let Some(amount) = self.budget_amount {
            budget.budget_amount = amount;
        }
    }
}

/// Equality filters for listing budgets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BudgetFilter {
    /// Only this month.
    pub cycle_month: Option<CycleMonth>,
    /// Only this category.
    pub category_id: Option<CategoryId>,
}

impl BudgetFilter {
    /// Builds a filter from raw query values.
    ///
    /// # Errors
    ///
    /// `InvalidCycleMonth` when `cycle_month` is not a `YYYY-MM` month.
    pub fn parse(
        cycle_month: Option<&str>,
        category_id: Option<CategoryId>,
    ) -> Result<Self, BudgetError> {
        Ok(Self {
            cycle_month: cycle_month.map(str::parse).transpose()?,
            category_id,
        })
    }

    /// Filter for a single month.
    #[must_use]
    pub const fn month(cycle_month: CycleMonth) -> Self {
        Self {
            cycle_month: Some(cycle_month),
            category_id: None,
        }
    }

    /// Whether `budget` passes every filter.
    #[must_use]
    pub fn matches(&self, budget: &Budget) -> bool {
        self.cycle_month.is_none_or(|m| budget.cycle_month == m)
            && self.category_id.is_none_or(|c| budget.category_id == c)
    }
}

/// Key under which spending is aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpendingKey {
    /// Category.
    pub category_id: CategoryId,
    /// Month.
    pub cycle_month: CycleMonth,
}

/// A budget annotated with what has been spent against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetWithSpending {
    /// The budget itself.
    #[serde(flatten)]
    pub budget: Budget,
    /// Expenses in the budget's category and month.
    pub spent_amount: Decimal,
    /// `budget_amount - spent_amount`; negative when overspent.
    pub remaining_amount: Decimal,
    /// `spent_amount / budget_amount * 100`, not clamped.
    pub usage_percentage: Decimal,
}

/// Totals across all of a user's budgets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BudgetOverview {
    /// Sum of budget amounts.
    pub total_budget: Decimal,
    /// Sum of spent amounts.
    pub total_spent: Decimal,
    /// `total_budget - total_spent`.
    pub total_remaining: Decimal,
    /// Number of budgets.
    pub budget_count: u64,
}

/// Variance status classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarianceStatus {
    /// Spent less than budgeted.
    Favorable,
    /// Spent more than budgeted.
    Unfavorable,
    /// Spent exactly the budget.
    OnBudget,
}
