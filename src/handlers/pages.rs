//! # Page Handlers
//!
//! GET endpoints that render HTML.

use crate::middleware::auth::CurrentUser;
use crate::views;
use axum::{response::Html, Extension};

/// Home page
///
/// ## Route
/// GET /
///
/// Shows "WELCOME BACK {username}" and a log-out link for an authenticated
/// session, the log-in form otherwise. A failed login lands here too and looks
/// exactly like a first visit.
pub async fn index(Extension(CurrentUser(user)): Extension<CurrentUser>) -> Html<String> {
    Html(views::render_index(user.as_ref()))
}

/// GET /sign-up
pub async fn sign_up_form() -> Html<String> {
    Html(views::render_sign_up_form())
}
