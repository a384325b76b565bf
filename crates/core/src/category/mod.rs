//! Spending categories shared by transactions and budgets.

pub mod error;
pub mod service;
pub mod store;
pub mod types;

pub use error::CategoryError;
pub use service::CategoryService;
pub use store::CategoryStore;
pub use types::{Category, CreateCategoryInput, DEFAULT_CATEGORIES, NewCategory};
