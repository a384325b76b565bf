//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions
//! - Repository implementations of the core store traits
//! - Database migrations

pub mod entities;
pub mod migration;
pub mod repositories;

use std::sync::Arc;
use std::time::Duration;

pub use migration::Migrator;
pub use repositories::{
    BudgetRepository, CategoryRepository, SpendingRepository, TransactionRepository,
    UserRepository,
};

use budgetbuddy_core::Stores;
use budgetbuddy_shared::config::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

/// Establishes a connection to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}

/// Connects with the pool limits from configuration.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect_with(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    Database::connect(options).await
}

/// Applies all pending migrations.
///
/// # Errors
///
/// Returns an error if a migration fails.
pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::up(db, None).await
}

/// Bundles the repositories over one connection pool.
#[must_use]
pub fn stores(db: &DatabaseConnection) -> Stores {
    Stores {
        users: Arc::new(UserRepository::new(db.clone())),
        categories: Arc::new(CategoryRepository::new(db.clone())),
        transactions: Arc::new(TransactionRepository::new(db.clone())),
        budgets: Arc::new(BudgetRepository::new(db.clone())),
        spending: Arc::new(SpendingRepository::new(db.clone())),
    }
}
