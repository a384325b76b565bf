//! Repository implementations of the core store traits.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

mod error;

pub mod budget;
pub mod category;
pub mod transaction;
pub mod user;

pub use budget::{BudgetRepository, SpendingRepository};
pub use category::CategoryRepository;
pub use transaction::TransactionRepository;
pub use user::UserRepository;
