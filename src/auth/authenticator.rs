//! # Credential Verification
//!
//! Turns a submitted username and password into an [`AuthOutcome`].
//!
//! ## Flow
//! 1. Look up the user by username (first match if the name is duplicated)
//! 2. No such user → `Failure(NoSuchUser)`
//! 3. Verify the password against the stored bcrypt hash
//! 4. Match → `Success(user)`, mismatch → `Failure(BadPassword)`
//!
//! The lookup always completes before hashing starts. Storage and hashing
//! errors are returned as `Err` and never folded into a failure outcome.

use crate::auth::password::verify_password;
use crate::db::{models::User, users};
use crate::error::AppResult;
use secrecy::SecretString;
use sqlx::SqlitePool;

/// Why a login attempt was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    NoSuchUser,
    BadPassword,
}

impl FailureReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureReason::NoSuchUser => "no-such-user",
            FailureReason::BadPassword => "bad-password",
        }
    }
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of checking a username/password pair
///
/// A rejected login is an ordinary value, not an error. The error case lives
/// in the surrounding `AppResult`.
#[derive(Debug)]
pub enum AuthOutcome {
    Success(User),
    Failure(FailureReason),
}

/// Verify a username and plaintext password against the credential store
pub async fn authenticate(
    pool: &SqlitePool,
    username: &str,
    password: SecretString,
) -> AppResult<AuthOutcome> {
    let Some(user) = users::find_by_username(pool, username).await? else {
        return Ok(AuthOutcome::Failure(FailureReason::NoSuchUser));
    };

    if verify_password(password, user.password_hash.clone()).await? {
        Ok(AuthOutcome::Success(user))
    } else {
        Ok(AuthOutcome::Failure(FailureReason::BadPassword))
    }
}
