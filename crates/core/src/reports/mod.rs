//! Financial reports over a user's transactions and budgets.
//!
//! This module provides:
//! - Period summaries (one month, or a year broken down by month)
//! - Income versus expense
//! - Expense breakdown by category with percentage shares
//! - The monthly close (totals plus budget performance)
//! - Paginated recent transactions

pub mod calc;
pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::ReportError;
pub use service::ReportService;
pub use types::*;
