//! # Configuration Management
//!
//! This module handles loading configuration from environment variables.
//! It uses the "12-factor app" methodology where configuration comes from the environment.
//!
//! ## Environment Variables
//! - `HOST`: Server bind address (default: 127.0.0.1)
//! - `PORT`: Server port (default: 3000)
//! - `DATABASE_URL`: SQLite database connection string
//! - `BCRYPT_COST`: bcrypt work factor for new password hashes (default: 10)
//! - `SESSION_INACTIVITY_HOURS`: Hours of inactivity before a session expires (default: 24)
//! - `SESSION_SECURE_COOKIE`: Mark the session cookie `Secure` (default: false)

use anyhow::{bail, Context, Result};
use std::env;

/// Lowest and highest work factors bcrypt accepts.
const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

/// One hour up to one year of inactivity.
const SESSION_INACTIVITY_HOURS_RANGE: std::ops::RangeInclusive<u32> = 1..=8760;

/// Application configuration
///
/// This struct holds all configuration values needed to run the server.
/// All fields are public for easy access from other modules.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host/IP address to bind to
    /// Examples: "127.0.0.1" (localhost only), "0.0.0.0" (all interfaces)
    pub host: String,

    /// Server port number (1-65535)
    pub port: u16,

    /// SQLite database connection URL
    /// Format: "sqlite:filename.db?mode=rwc"
    /// The "mode=rwc" means: read, write, create if not exists
    pub database_url: String,

    /// bcrypt cost factor used when hashing new passwords
    ///
    /// Each increment doubles the work. Existing hashes keep the cost they
    /// were created with, since verification reads it from the hash itself.
    pub bcrypt_cost: u32,

    /// Sessions expire after this many hours without a request
    pub session_inactivity_hours: u32,

    /// Whether the session cookie carries the `Secure` attribute
    /// Must be true when served over HTTPS in production
    pub session_secure_cookie: bool,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads variables from .env file (if present) using dotenvy
    /// 2. Reads each configuration value from environment
    /// 3. Falls back to sensible defaults if variables aren't set
    /// 4. Returns an error if parsing fails (e.g., invalid port number)
    ///
    /// ## Example .env file
    /// ```text
    /// HOST=127.0.0.1
    /// PORT=3000
    /// DATABASE_URL=sqlite:auth.db?mode=rwc
    /// BCRYPT_COST=10
    /// ```
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (dotenvy doesn't error if file missing)
        dotenvy::dotenv().ok();

        let bcrypt_cost = parse_in_range(
            "BCRYPT_COST",
            env::var("BCRYPT_COST").ok(),
            10,
            BCRYPT_COST_RANGE,
        )?;

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),

            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a valid port number")?,

            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:auth.db?mode=rwc".to_string()),

            bcrypt_cost,

            session_inactivity_hours: parse_in_range(
                "SESSION_INACTIVITY_HOURS",
                env::var("SESSION_INACTIVITY_HOURS").ok(),
                24,
                SESSION_INACTIVITY_HOURS_RANGE,
            )?,

            session_secure_cookie: parse_bool(
                "SESSION_SECURE_COOKIE",
                env::var("SESSION_SECURE_COOKIE").ok(),
                false,
            )?,
        })
    }

    /// Get the socket address to bind the server to
    ///
    /// Combines host and port into a format suitable for TCP binding.
    /// Example: "127.0.0.1:3000"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse an optional unsigned setting and reject values outside `range`
fn parse_in_range(
    name: &str,
    raw: Option<String>,
    default: u32,
    range: std::ops::RangeInclusive<u32>,
) -> Result<u32> {
    let value = match raw {
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .with_context(|| format!("{} must be a non-negative integer, got {:?}", name, raw))?,
        None => default,
    };

    if !range.contains(&value) {
        bail!(
            "{} must be between {} and {}, got {}",
            name,
            range.start(),
            range.end(),
            value
        );
    }

    Ok(value)
}

/// Parse an optional boolean setting ("true"/"false", any case)
fn parse_bool(name: &str, raw: Option<String>, default: bool) -> Result<bool> {
    match raw {
        Some(raw) => raw
            .trim()
            .to_lowercase()
            .parse::<bool>()
            .with_context(|| format!("{} must be true or false, got {:?}", name, raw)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_address_joins_host_and_port() {
        let config = Config {
            host: "0.0.0.0".to_string(),
            port: 3000,
            database_url: "sqlite::memory:".to_string(),
            bcrypt_cost: 10,
            session_inactivity_hours: 24,
            session_secure_cookie: false,
        };

        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    fn hours(raw: &str) -> Result<u32> {
        parse_in_range(
            "SESSION_INACTIVITY_HOURS",
            Some(raw.to_string()),
            24,
            SESSION_INACTIVITY_HOURS_RANGE,
        )
    }

    #[test]
    fn session_hours_default_when_unset() -> Result<()> {
        let value = parse_in_range(
            "SESSION_INACTIVITY_HOURS",
            None,
            24,
            SESSION_INACTIVITY_HOURS_RANGE,
        )?;

        assert_eq!(value, 24);
        Ok(())
    }

    #[test]
    fn session_hours_reject_negative_zero_and_oversized() {
        assert!(hours("-5").is_err());
        assert!(hours("0").is_err());
        assert!(hours("8761").is_err());
        assert!(hours("9223372036854775807").is_err());
        assert!(hours("soon").is_err());
    }

    #[test]
    fn session_hours_accept_bounds() -> Result<()> {
        assert_eq!(hours("1")?, 1);
        assert_eq!(hours("8760")?, 8760);
        Ok(())
    }

    #[test]
    fn accepted_session_hours_build_a_valid_expiry() -> Result<()> {
        let max = hours("8760")?;
        let expiry = time::Duration::hours(i64::from(max));

        assert!(expiry.is_positive());
        Ok(())
    }

    #[test]
    fn bcrypt_cost_outside_range_is_rejected() {
        assert!(parse_in_range("BCRYPT_COST", Some("3".to_string()), 10, BCRYPT_COST_RANGE).is_err());
        assert!(parse_in_range("BCRYPT_COST", Some("32".to_string()), 10, BCRYPT_COST_RANGE).is_err());
    }

    #[test]
    fn secure_cookie_flag_parses_any_case() -> Result<()> {
        assert!(parse_bool("SESSION_SECURE_COOKIE", Some("True".to_string()), false)?);
        assert!(parse_bool("SESSION_SECURE_COOKIE", Some("TRUE".to_string()), false)?);
        assert!(!parse_bool("SESSION_SECURE_COOKIE", Some("false".to_string()), true)?);
        assert!(!parse_bool("SESSION_SECURE_COOKIE", None, false)?);
        Ok(())
    }

    #[test]
    fn secure_cookie_flag_rejects_unknown_values() {
        for raw in ["on", "yes", "1", ""] {
            assert!(
                parse_bool("SESSION_SECURE_COOKIE", Some(raw.to_string()), false).is_err(),
                "{:?} should be rejected",
                raw
            );
        }
    }
}
