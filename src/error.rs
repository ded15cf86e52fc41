//! # Error Handling
//!
//! This module defines the application error type and the generic top-level
//! handler that turns any unhandled error into an HTTP response.
//!
//! A rejected login is NOT an error. Wrong passwords and unknown usernames are
//! ordinary outcomes (see `auth::authenticator::AuthOutcome`) and never reach
//! this module. Everything here means "the server broke".

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

/// Application-wide error type
///
/// ## The `#[from]` attribute
/// This enables automatic conversion using the `?` operator. For example:
/// ```rust,ignore
/// let user = sqlx::query_as::<_, User>(...).fetch_optional(pool).await?;
/// // The ? automatically converts sqlx::Error to AppError::Database
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// Credential store errors (unreachable database, failed write)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Session store errors while reading or writing session state
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Password hashing errors
    ///
    /// Raised for a malformed stored hash or an unsupported cost factor
    #[error("Hashing error: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    /// The blocking task running a bcrypt operation panicked or was cancelled
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Convert AppError into an HTTP response
///
/// Every variant is a server-side failure, so every variant maps to 500 with
/// the same generic page. The real cause only goes to the log.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Database(e) => tracing::error!("Database error: {:?}", e),
            AppError::Session(e) => tracing::error!("Session error: {:?}", e),
            AppError::Hashing(e) => tracing::error!("Hashing error: {:?}", e),
            AppError::Task(e) => tracing::error!("Background task error: {:?}", e),
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(crate::views::render_error_page()),
        )
            .into_response()
    }
}

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;
