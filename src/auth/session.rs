//! # Session Identity
//!
//! Binds an authenticated user to the client's session and resolves it back on
//! later requests.
//!
//! The session itself (opaque id in a cookie, record in the session store) is
//! managed by `tower-sessions`. This module only reads and writes one key in it:
//! the user id. Everything else about the user is re-read from the credential
//! store on every request.

use crate::auth::authenticator::AuthOutcome;
use crate::db::{models::User, users};
use crate::error::AppResult;
use sqlx::SqlitePool;
use tower_sessions::Session;

/// Session key holding the authenticated user's id
pub const USER_ID_KEY: &str = "user_id";

/// Whether a session currently carries an identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated,
}

/// Bind the outcome of a login attempt to the session
///
/// On success the session id is rotated before the user id is stored, so a
/// session id handed out before login can't be used to ride the new login.
/// On failure the session is left exactly as it was.
pub async fn login(session: &Session, outcome: &AuthOutcome) -> AppResult<SessionState> {
    match outcome {
        AuthOutcome::Success(user) => {
            session.cycle_id().await?;
            session.insert(USER_ID_KEY, &user.id).await?;
            tracing::debug!(user_id = %user.id, "session authenticated");
            Ok(SessionState::Authenticated)
        }
        AuthOutcome::Failure(reason) => {
            tracing::info!(%reason, "login rejected");
            Ok(SessionState::Anonymous)
        }
    }
}

/// Load the user this session belongs to, if any
///
/// `None` when the session holds no user id, or holds one whose record no
/// longer exists.
pub async fn resolve_current_identity(
    session: &Session,
    pool: &SqlitePool,
) -> AppResult<Option<User>> {
    let user_id: Option<String> = session.get(USER_ID_KEY).await?;

    match user_id {
        Some(id) => Ok(users::find_by_id(pool, &id).await?),
        None => Ok(None),
    }
}

/// Drop the identity from the session. Safe to call on an anonymous session.
pub async fn logout(session: &Session) -> AppResult<()> {
    let removed: Option<String> = session.remove(USER_ID_KEY).await?;

    if let Some(user_id) = removed {
        tracing::debug!(%user_id, "session logged out");
    }

    Ok(())
}
