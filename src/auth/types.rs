//! # Form Types
//!
//! Request bodies for the sign-up and log-in endpoints. Both are
//! `application/x-www-form-urlencoded` posts from the HTML forms.

use secrecy::SecretString;
use serde::Deserialize;

/// Username and password as posted by the sign-up and log-in forms
///
/// ## Example body
/// ```text
/// username=alice&password=hunter2
/// ```
#[derive(Deserialize)]
pub struct CredentialsForm {
    pub username: String,
    pub password: String,
}

impl CredentialsForm {
    /// Split into the username and a password that won't show up in `Debug` output
    pub fn into_parts(self) -> (String, SecretString) {
        (self.username, SecretString::from(self.password))
    }
}

impl std::fmt::Debug for CredentialsForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsForm")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
