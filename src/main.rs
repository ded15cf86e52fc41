//! # Password Authentication Server
//!
//! A small web app with username/password sign-up, log-in, log-out and
//! server-side sessions.
//!
//! ## Key Concepts
//! - **bcrypt**: Slow, salted password hashing so stolen hashes are expensive to crack
//! - **Sessions**: The browser only holds an opaque session id; the user id lives server-side
//! - **Identity resolution**: Every request re-reads the user from the database

mod auth;        // Password hashing, credential verification, session identity
mod config;      // Configuration management (environment variables, settings)
mod db;          // Credential store (users table)
mod error;       // Error handling and the generic error response
mod handlers;    // HTTP request handlers (routes)
mod middleware;  // Per-request identity resolution
mod state;       // Shared application state
mod views;       // Server-rendered HTML

use crate::config::Config;
use crate::state::AppState;
use time::Duration;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tower_sessions::session_store::ExpiredDeletion;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// How often expired sessions are purged from the session table
const SESSION_CLEANUP_INTERVAL: std::time::Duration = std::time::Duration::from_secs(600);

/// Main application entry point
///
/// This function:
/// 1. Sets up logging
/// 2. Loads configuration from environment variables
/// 3. Connects to the database and runs migrations
/// 4. Starts a background task that deletes expired sessions
/// 5. Configures HTTP sessions
/// 6. Serves the routes until Ctrl-C or SIGTERM, then closes the pool
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Default: info level for most crates, debug level for our app
    // Can be overridden with RUST_LOG environment variable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,password_auth_server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded: {:?}", config);

    let app_state = AppState::new(&config).await?;
    tracing::info!("Application state initialized");

    // Sessions share the SQLite pool with the users table
    let session_store = SqliteStore::new(app_state.db.clone());
    session_store.migrate().await?;

    let cleanup_store = session_store.clone();
    let cleanup_task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            tracing::debug!("Running session cleanup task");
            if let Err(e) = cleanup_store.delete_expired().await {
                tracing::error!("Session cleanup failed: {:?}", e);
            }
        }
    });

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(config.session_secure_cookie)
        .with_expiry(Expiry::OnInactivity(Duration::hours(i64::from(
            config.session_inactivity_hours,
        ))));

    let app = handlers::router(app_state.clone())
        .layer(session_layer)
        .layer(TraceLayer::new_for_http());

    let bind_addr = config.bind_address();
    tracing::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    cleanup_task.abort();
    app_state.shutdown().await;
    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
