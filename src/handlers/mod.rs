//! # HTTP Request Handlers
//!
//! This module contains all the HTTP route handlers.
//!
//! ## Submodules
//! - `health`: Health check endpoint (for monitoring)
//! - `pages`: HTML pages (home, sign-up form)
//! - `auth`: Form posts and links that change identity (sign-up, log-in, log-out)
//!
//! ## Routes
//! | Method | Path       | Handler                 |
//! |--------|------------|-------------------------|
//! | GET    | `/`        | `pages::index`          |
//! | GET    | `/sign-up` | `pages::sign_up_form`   |
//! | POST   | `/sign-up` | `auth::sign_up`         |
//! | POST   | `/log-in`  | `auth::log_in`          |
//! | GET    | `/log-out` | `auth::log_out`         |
//! | GET    | `/health`  | `health::health_check`  |

pub mod auth;
pub mod health;
pub mod pages;

use crate::middleware::auth::resolve_identity;
use crate::state::AppState;
use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};

/// Build the application routes
///
/// Every route runs behind `resolve_identity`, which needs a `Session`. The
/// caller must wrap the result in a `SessionManagerLayer`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/sign-up", get(pages::sign_up_form).post(auth::sign_up))
        .route("/log-in", post(auth::log_in))
        .route("/log-out", get(auth::log_out))
        .route("/health", get(health::health_check))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            resolve_identity,
        ))
        .with_state(state)
}
