//! Account service: registration and credential checks.

use std::sync::Arc;

use budgetbuddy_shared::{auth::RegisterRequest, types::UserId};
use once_cell::sync::Lazy;
use regex::Regex;

use super::error::AccountError;
use super::password::{hash_password, verify_password};
use super::store::UserStore;
use super::types::{NewUser, User};
use crate::store::{StoreError, now};

/// Shortest accepted username.
pub const MIN_USERNAME_LEN: usize = 3;

/// Shortest accepted password.
pub const MIN_PASSWORD_LEN: usize = 6;

static USERNAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("valid username pattern"));

/// Account business logic.
#[derive(Clone)]
pub struct AccountService {
    users: Arc<dyn UserStore>,
}

impl AccountService {
    /// Creates a service over the given store.
    #[must_use]
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Registers a new account with a hashed password.
    ///
    /// # Errors
    ///
    /// Validation errors for a bad username or short password, `UsernameTaken`
    /// when the username exists.
    pub async fn register(&self, request: RegisterRequest) -> Result<User, AccountError> {
        let username = request.username.trim().to_string();
        validate_username(&username)?;
        validate_password(&request.password)?;

        if self.users.find_by_username(&username).await?.is_some() {
            return Err(AccountError::UsernameTaken(username));
        }

        let new = NewUser {
            username: username.clone(),
            first_name: request.first_name.trim().to_string(),
            last_name: request.last_name.trim().to_string(),
            password_hash: hash_password(&request.password)?,
        };

        self.users.insert(new).await.map_err(|e| match e {
            StoreError::UniqueViolation(_) => AccountError::UsernameTaken(username),
            other => AccountError::Store(other),
        })
    }

    /// Verifies credentials and stamps `last_login`.
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` for an unknown user or a wrong password alike.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, AccountError> {
        let user = self
            .users
            .find_by_username(username.trim())
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AccountError::InvalidCredentials);
        }

        self.users
            .record_login(user.id, now())
            .await?
            .ok_or(AccountError::InvalidCredentials)
    }

    /// Fetches one user.
    pub async fn get(&self, id: UserId) -> Result<User, AccountError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or(AccountError::NotFound(id))
    }

    /// Lists all users ordered by id.
    pub async fn list(&self) -> Result<Vec<User>, AccountError> {
        Ok(self.users.list().await?)
    }
}

/// Checks length and character set of a username.
pub(crate) fn validate_username(username: &str) -> Result<(), AccountError> {
    if username.chars().count() < MIN_USERNAME_LEN || !USERNAME_PATTERN.is_match(username) {
        return Err(AccountError::InvalidUsername {
            min: MIN_USERNAME_LEN,
        });
    }
    Ok(())
}

/// Raw length check only.
pub(crate) fn validate_password(password: &str) -> Result<(), AccountError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AccountError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}
