use crate::auth::password::hash_password;
use crate::auth::types::CredentialsForm;
use crate::auth::{authenticator, session as session_binder};
use crate::db::users;
use crate::error::AppResult;
use crate::state::AppState;
use axum::{extract::State, response::Redirect, Form};
use tower_sessions::Session;

/// POST /sign-up
///
/// Hashes the password and stores a new user. Duplicate usernames are accepted.
/// Does not log the new user in.
pub async fn sign_up(
    State(state): State<AppState>,
    Form(form): Form<CredentialsForm>,
) -> AppResult<Redirect> {
    let (username, password) = form.into_parts();

    let hash = hash_password(password, state.bcrypt_cost).await?;
    let user = users::create_user(&state.db, &username, &hash).await?;
    tracing::info!(user_id = %user.id, "user signed up");

    Ok(Redirect::to("/"))
}

/// POST /log-in
///
/// Redirects to `/` whether or not the credentials were accepted. Only storage
/// or hashing failures produce an error response.
pub async fn log_in(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CredentialsForm>,
) -> AppResult<Redirect> {
    let (username, password) = form.into_parts();

    let outcome = authenticator::authenticate(&state.db, &username, password).await?;
    let session_state = session_binder::login(&session, &outcome).await?;
    tracing::debug!(?session_state, "log-in handled");

    Ok(Redirect::to("/"))
}

/// GET /log-out
pub async fn log_out(session: Session) -> AppResult<Redirect> {
    session_binder::logout(&session).await?;

    Ok(Redirect::to("/"))
}
