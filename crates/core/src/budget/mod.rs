//! Monthly per-category budgets and spending aggregation.
//!
//! Budgets are listed, created and updated through `BudgetService`. Derived
//! figures (spent, remaining, usage percentage, overview totals) are computed
//! by the pure functions `annotate` and `summarize` over data fetched from the
//! store.

pub mod error;
pub mod service;
pub mod store;
pub mod types;
pub mod variance;


pub use error::BudgetError;
pub use service::{BudgetService, annotate, summarize};
pub use store::{BudgetStore, SpendingLookup};
pub use types::{
    Budget, BudgetChanges, BudgetFilter, BudgetOverview, BudgetWithSpending, CreateBudgetInput,
    NewBudget, SpendingKey, UpdateBudgetInput, VarianceStatus,
};
pub use variance::BudgetPerformance;
