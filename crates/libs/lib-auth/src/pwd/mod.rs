//! # Password Hashing
//!
//! Password hashing and verification using Argon2.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Error)]
pub enum PwdError {
    #[error("Password must be at least {MIN_PASSWORD_LEN} characters long")]
    TooShort,

    #[error("Failed to hash password: {0}")]
    Hash(argon2::password_hash::Error),

    #[error("Failed to parse password hash: {0}")]
    InvalidHash(argon2::password_hash::Error),
}

/// Hash a password using the Argon2 algorithm.
pub fn hash_password(password: &str) -> Result<String, PwdError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(PwdError::TooShort);
    }

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(PwdError::Hash)?
        .to_string();

    Ok(password_hash)
}

/// Verify a plaintext password against an Argon2 hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PwdError> {
    let parsed_hash = PasswordHash::new(hash).map_err(PwdError::InvalidHash)?;

    let argon2 = Argon2::default();

    Ok(argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
