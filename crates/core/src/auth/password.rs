//! Password hashing with Argon2id (default parameters, PHC string output).

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, PasswordHash,
};
use thiserror::Error;

/// Errors that can occur during password operations.
#[derive(Debug, Error)]
pub enum PasswordError {
    /// Failed to hash password.
    #[error("failed to hash password: {0}")]
    HashError(String),

    /// Failed to verify password.
    #[error("failed to verify password: {0}")]
    VerifyError(String),

    /// Stored hash is not a PHC string.
    #[error("invalid password hash format")]
    InvalidHash,
}

/// Hashes a password with a fresh random salt.
///
/// # Example
///
/// ```
/// use budgetbuddy_core::auth::hash_password;
///
/// let hash = hash_password("s3cret_pw").unwrap();
/// assert!(hash.starts_with("$argon2id$"));
/// ```
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::HashError(e.to_string()))
}

/// Checks `password` against a stored hash.
///
/// A mismatch is `Ok(false)`; only a malformed hash or an internal failure is an error.
///
/// # Example
///
/// ```
/// use budgetbuddy_core::auth::{hash_password, verify_password};
///
/// let hash = hash_password("hunter22").unwrap();
/// assert!(verify_password("hunter22", &hash).unwrap());
/// assert!(!verify_password("hunter23", &hash).unwrap());
/// ```
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| PasswordError::InvalidHash)?;

    let argon2 = Argon2::default();

    match argon2.verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::VerifyError(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_argon2id_phc_string() {
        let hash = hash_password("budget_pw").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("budget_pw"));
    }

    #[test]
    fn test_verify_matches_only_original() {
        let hash = hash_password("budget_pw").unwrap();
        assert!(verify_password("budget_pw", &hash).unwrap());
        assert!(!verify_password("Budget_pw", &hash).unwrap());
    }

    #[test]
    fn test_salts_differ() {
        assert_ne!(
            hash_password("same").unwrap(),
            hash_password("same").unwrap()
        );
    }

    #[test]
    fn test_invalid_hash_format() {
        let result = verify_password("password", "plaintext");
        assert!(matches!(result, Err(PasswordError::InvalidHash)));
    }
}
