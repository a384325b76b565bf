//! Account error types.

use budgetbuddy_shared::{AppError, types::UserId};
use thiserror::Error;

use super::password::PasswordError;
use crate::store::StoreError;

/// Account-related errors.
#[derive(Debug, Error)]
pub enum AccountError {
    /// Username is too short or contains disallowed characters.
    #[error("Username must be at least {min} characters of letters, digits or underscores")]
    InvalidUsername {
        /// Minimum length.
        min: usize,
    },

    /// Password is too short.
    #[error("Password must be at least {min} characters")]
    PasswordTooShort {
        /// Minimum length.
        min: usize,
    },

    /// Username already registered.
    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    /// Unknown user or wrong password; the two are deliberately indistinguishable.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// User not found.
    #[error("User not found: {0}")]
    NotFound(UserId),

    /// Hashing failure.
    #[error(transparent)]
    Password(#[from] PasswordError),

    /// Store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::InvalidUsername { .. } | AccountError::PasswordTooShort { .. } => {
                Self::Validation(err.to_string())
            }
            AccountError::UsernameTaken(_) => Self::Conflict(err.to_string()),
            AccountError::InvalidCredentials => Self::Unauthorized(err.to_string()),
            AccountError::NotFound(_) => Self::NotFound(err.to_string()),
            AccountError::Password(e) => Self::Internal(e.to_string()),
            AccountError::Store(e) => e.into(),
        }
    }
}
