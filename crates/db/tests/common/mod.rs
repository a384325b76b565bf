//! Shared setup for repository integration tests.

#![allow(dead_code)]

use budgetbuddy_core::auth::{NewUser, User, UserStore};
use budgetbuddy_shared::types::CategoryId;
use budgetbuddy_db::UserRepository;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// A freshly migrated in-memory SQLite database.
///
/// A single pooled connection keeps every query on the same in-memory file.
pub async fn setup_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to open SQLite database");
    budgetbuddy_db::migrate(&db)
        .await
        .expect("Failed to run migrations");
    db
}

/// Registers a user with a placeholder hash.
pub async fn create_user(db: &DatabaseConnection, username: &str) -> User {
    UserRepository::new(db.clone())
        .insert(NewUser {
            username: username.to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            password_hash: "$argon2id$test_hash".to_string(),
        })
        .await
        .expect("Failed to create user")
}

/// Id of the seeded `food` category.
pub const FOOD: CategoryId = CategoryId(1);
/// Id of the seeded `transport` category.
pub const TRANSPORT: CategoryId = CategoryId(2);
/// Id of the seeded `salary` category.
pub const SALARY: CategoryId = CategoryId(9);
