//! # Database Module
//!
//! The credential store. Organized into submodules:
//! - `models`: Data structures (User)
//! - `users`: Insert and lookup operations for users
//!
//! Sessions live in the same database but are owned by the session store
//! (`tower-sessions-sqlx-store`), which manages its own table.

pub mod models;
pub mod users;
