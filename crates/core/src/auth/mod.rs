//! User accounts and password hashing.
//!
//! This module provides:
//! - Password hashing with Argon2id
//! - Registration and credential checks (`AccountService`)
//! - The `UserStore` repository contract

mod error;
mod password;
mod service;
mod store;
mod types;

pub use error::AccountError;
pub use password::{PasswordError, hash_password, verify_password};
pub use service::{AccountService, MIN_PASSWORD_LEN, MIN_USERNAME_LEN};
pub use store::UserStore;
pub use types::{NewUser, User};
