//! Income and expense transactions.

pub mod error;
pub mod service;
pub mod store;
pub mod types;

pub use error::TransactionError;
pub use service::TransactionService;
pub use store::TransactionStore;
pub use types::{
    CreateTransactionInput, NewTransaction, Transaction, TransactionChanges, TransactionFilter,
    TransactionKind, UpdateTransactionInput,
};
