//! # Application State
//!
//! This module defines the shared state that's accessible to all request handlers.
//! In Axum, state is how you share resources (database connections, configuration, etc.)
//! across different parts of your application.
//!
//! ## The State Pattern
//! Instead of reaching for a process-wide connection, we:
//! 1. Create a connection pool once at startup
//! 2. Store it in AppState
//! 3. Hand it to every request handler through `State<AppState>`
//! 4. Close it explicitly when the server shuts down

use crate::config::Config;
use anyhow::{Context, Result};
use sqlx::sqlite::SqlitePool;

/// Shared application state
///
/// Cloned for every request. Cheap because `SqlitePool` is a handle around an
/// `Arc` and the remaining fields are plain values.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    ///
    /// Backs both the credential store (`users` table) and the session store
    /// (`tower_sessions` table).
    pub db: SqlitePool,

    /// bcrypt work factor used by sign-up when hashing a new password
    pub bcrypt_cost: u32,
}

impl AppState {
    /// Initialize application state
    ///
    /// This function:
    /// 1. Connects to the SQLite database
    /// 2. Runs database migrations (creates tables if they don't exist)
    /// 3. Returns the initialized state
    ///
    /// # Errors
    /// Returns an error if the connection or the migrations fail.
    pub async fn new(config: &Config) -> Result<Self> {
        let db = SqlitePool::connect(&config.database_url)
            .await
            .with_context(|| format!("failed to connect to {}", config.database_url))?;

        let state = Self::from_pool(db, config.bcrypt_cost).await?;
        Ok(state)
    }

    /// Build state around an existing pool, running migrations on it
    pub async fn from_pool(db: SqlitePool, bcrypt_cost: u32) -> Result<Self> {
        // The `sqlx::migrate!` macro embeds migrations from ./migrations directory
        sqlx::migrate!("./migrations")
            .run(&db)
            .await
            .context("failed to run database migrations")?;

        Ok(AppState { db, bcrypt_cost })
    }

    /// Release every pooled connection
    ///
    /// Called once the HTTP server has drained, so in-flight requests keep
    /// their connections until they finish.
    pub async fn shutdown(&self) {
        self.db.close().await;
        tracing::info!("Database pool closed");
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::AppState;
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::path::Path;
    use std::time::Duration;

    /// Lowest cost bcrypt accepts; keeps tests fast.
    pub const TEST_BCRYPT_COST: u32 = 4;

    /// Fresh in-memory database with the schema applied.
    ///
    /// A single connection, because every `:memory:` connection is its own
    /// database.
    pub async fn test_state() -> anyhow::Result<AppState> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        AppState::from_pool(pool, TEST_BCRYPT_COST).await
    }

    /// File-backed database with several pooled connections, for tests that
    /// need writes to really overlap.
    pub async fn test_state_on_disk(dir: &Path) -> anyhow::Result<AppState> {
        let options = SqliteConnectOptions::new()
            .filename(dir.join("auth.db"))
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect_with(options)
            .await?;

        AppState::from_pool(pool, TEST_BCRYPT_COST).await
    }
}
