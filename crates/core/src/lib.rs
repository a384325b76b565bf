//! Core business logic for BudgetBuddy.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Services reach the record store only through the repository traits declared
//! next to each domain module.
//!
//! # Modules
//!
//! - `budget` - Monthly budgets, spending aggregation and overview totals
//! - `reports` - Period summaries, category breakdowns and the monthly close
//! - `category` - Spending categories
//! - `transaction` - Income and expense records
//! - `auth` - User accounts and password hashing
//! - `store` - Store errors, the repository bundle and an in-memory store

pub mod auth;
pub mod budget;
pub mod category;
pub mod reports;
pub mod store;
pub mod transaction;

pub use store::{MemoryStore, StoreError, Stores};
