//! # Authentication Module
//!
//! Username/password authentication and session identity.
//!
//! ## Submodules
//! - `password`: bcrypt hashing and verification
//! - `authenticator`: checks a username/password pair against the credential store
//! - `session`: binds a successful login to the session and resolves it back
//! - `types`: form bodies for sign-up and log-in
//!
//! ## Flow Overview
//!
//! ### Sign-up
//! 1. Client posts username and password → `password::hash_password()`
//! 2. Server stores the username with the hash
//!
//! ### Log-in
//! 1. Client posts username and password → `authenticator::authenticate()`
//! 2. The outcome is handed to `session::login()`
//! 3. On success the session now carries the user id
//!
//! ### Every request
//! 1. `middleware::auth::resolve_identity` calls `session::resolve_current_identity()`
//! 2. Handlers read the resolved `CurrentUser`

pub mod authenticator;
pub mod password;
pub mod session;
pub mod types;
