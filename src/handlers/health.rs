//! # Health Check Handler
//!
//! Simple endpoint to check if the server is running and can reach its database.
//! Used by load balancers and monitoring systems.

use crate::error::AppResult;
use crate::state::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};

/// Health check endpoint
///
/// ## Route
/// GET /health
///
/// ## Response
/// ```json
/// {
///   "status": "healthy",
///   "service": "password-auth-server"
/// }
/// ```
///
/// Returns the generic 500 page if the database doesn't answer.
pub async fn health_check(State(state): State<AppState>) -> AppResult<Json<Value>> {
    sqlx::query("SELECT 1").execute(&state.db).await?;

    Ok(Json(json!({
        "status": "healthy",
        "service": "password-auth-server"
    })))
}
