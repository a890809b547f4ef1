//! Password hashing and verification utilities
//!
//! Uses Argon2id for password hashing.

use std::sync::OnceLock;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use jobboard_core::DomainError;

use crate::error::AppError;

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a hash
///
/// # Errors
/// Returns an error if the stored hash is malformed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Argon2id hash of a throwaway password, built on first use
fn dummy_hash() -> Option<&'static str> {
    static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();
    DUMMY_HASH
        .get_or_init(|| hash_password("jobboard-unused-password").ok())
        .as_deref()
}

/// Spend the same Argon2 work as [`verify_password`] when there is no stored
/// hash to check against. Always returns `false`.
pub fn verify_dummy_password(password: &str) -> bool {
    if let Some(hash) = dummy_hash() {
        let _ = verify_password(password, hash);
    }
    false
}

/// Validate password strength
///
/// Returns `Ok(())` if the password meets requirements:
/// - At least 8 characters
/// - Contains at least one uppercase letter
/// - Contains at least one lowercase letter
/// - Contains at least one digit
///
/// # Errors
/// Returns `WeakPassword` naming the first unmet requirement
pub fn validate_password_strength(password: &str) -> Result<(), AppError> {
    let weak = |msg: &str| Err(DomainError::WeakPassword(msg.to_string()).into());

    if password.chars().count() < 8 {
        return weak("Password must be at least 8 characters long");
    }

    if !password.chars().any(char::is_uppercase) {
        return weak("Password must contain at least one uppercase letter");
    }

    if !password.chars().any(char::is_lowercase) {
        return weak("Password must contain at least one lowercase letter");
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return weak("Password must contain at least one digit");
    }

    Ok(())
}
