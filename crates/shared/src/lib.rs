//! Shared types, errors, and configuration for BudgetBuddy.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - The `YYYY-MM` cycle month used by budgets and reports
//! - Pagination types for list endpoints
//! - Application-wide error types
//! - Configuration management
//! - JWT access tokens

pub mod auth;
pub mod config;
pub mod error;
pub mod jwt;
pub mod types;

pub use auth::Claims;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use jwt::{JwtConfig, JwtError, JwtService};
