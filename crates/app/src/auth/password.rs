//! Account password hashing.
//!
//! Hashes are Argon2id PHC strings with a random per-password salt.

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{self, SaltString},
};
use rand::rngs::OsRng;
use thiserror::Error;

/// Shortest password accepted when one is set.
pub const MIN_PASSWORD_CHARS: usize = 8;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("password must be at least {MIN_PASSWORD_CHARS} characters")]
    TooShort,

    #[error("password hashing failed")]
    Hash(#[source] password_hash::Error),
}

/// Hash a new password for storage.
///
/// # Errors
///
/// Returns [`PasswordError::TooShort`] for passwords under [`MIN_PASSWORD_CHARS`] characters.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(PasswordError::TooShort);
    }

    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(PasswordError::Hash)?;

    Ok(hash.to_string())
}

/// Check `candidate` against a stored hash. A mismatch is `Ok(false)`.
///
/// # Errors
///
/// Returns [`PasswordError::Hash`] when the stored hash cannot be parsed.
pub fn verify_password(stored: &str, candidate: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(stored).map_err(PasswordError::Hash)?;

    match Argon2::default().verify_password(candidate.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(error) => Err(PasswordError::Hash(error)),
    }
}
