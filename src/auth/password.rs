//! # Password Hashing
//!
//! bcrypt hashing and verification. Both are deliberately slow, so they run on
//! Tokio's blocking thread pool instead of stalling a runtime worker.
//!
//! ## Hash format
//! `$2b$10$N9qo8uLOickgx2ZMRZoMye...`: algorithm version, cost factor, then a
//! 22-character salt followed by the hash. A fresh random salt is drawn for
//! every call to `hash_password`. `verify_password` re-derives with the salt and
//! cost stored in the hash and compares.
//!
//! bcrypt only reads the first 72 bytes of a password.

use crate::error::AppResult;
use secrecy::{ExposeSecret, SecretString};

/// Hash a password with a random salt at the given cost
///
/// # Errors
/// `AppError::Hashing` if the cost is outside 4..=31.
pub async fn hash_password(password: SecretString, cost: u32) -> AppResult<String> {
    let hash = tokio::task::spawn_blocking(move || {
        bcrypt::hash(password.expose_secret().as_bytes(), cost)
    })
    .await??;

    Ok(hash)
}

/// Check a password against a stored hash
///
/// Returns `Ok(false)` on mismatch.
///
/// # Errors
/// `AppError::Hashing` if `hash` is not a well-formed bcrypt hash.
pub async fn verify_password(password: SecretString, hash: String) -> AppResult<bool> {
    let matches = tokio::task::spawn_blocking(move || {
        bcrypt::verify(password.expose_secret().as_bytes(), &hash)
    })
    .await??;

    Ok(matches)
}
