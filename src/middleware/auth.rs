use crate::auth::session::resolve_current_identity;
use crate::db::models::User;
use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tower_sessions::Session;

/// The user behind the current request, if the session is authenticated
///
/// Inserted into request extensions by [`resolve_identity`]; handlers read it
/// with `Extension<CurrentUser>`.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Option<User>);

/// Resolve the session to a full user record before the handler runs
///
/// Runs on every request. The record is fetched fresh each time, never cached
/// across requests.
pub async fn resolve_identity(
    State(state): State<AppState>,
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = resolve_current_identity(&session, &state.db).await?;

    request.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(request).await)
}
