//! # Middleware Module
//!
//! Middleware intercepts HTTP requests and responses.
//!
//! ## Our Middleware
//! - `auth`: Resolves the session cookie to the current user on every request

pub mod auth;
