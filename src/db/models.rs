//! # Database Models
//!
//! Data structures that map to database tables.

use chrono::Utc;
use uuid::Uuid;

/// User account information
///
/// One row per sign-up. The username is not unique: two sign-ups with the
/// same name produce two rows with different ids.
///
/// ## Derive Macros Explained
/// - `Debug`: Allows printing with {:?} for debugging
/// - `Clone`: Allows creating copies of the struct
/// - `sqlx::FromRow`: Automatically maps database rows to this struct
///
/// `Debug` is implemented by hand so the password hash never ends up in logs.
#[derive(Clone, sqlx::FromRow)]
pub struct User {
    /// Unique identifier (UUID v4), assigned at insert and never changed
    /// Example: "550e8400-e29b-41d4-a716-446655440000"
    pub id: String,

    /// Name the user logs in with
    pub username: String,

    /// bcrypt hash in modular crypt format: `$2b$<cost>$<22-char salt><31-char hash>`
    ///
    /// The salt and cost live inside the string, so verification needs
    /// nothing else.
    pub password_hash: String,

    /// When the user signed up (RFC3339 timestamp)
    pub created_at: String,
}

impl User {
    /// Create a new user with a generated ID and timestamp
    pub fn new(username: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username,
            password_hash,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .field("created_at", &self.created_at)
            .finish()
    }
}
