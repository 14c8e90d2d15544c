//! Database connection settings.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: PostgreSQL connection string. Optional: without it the
//!   site runs on an empty in-memory store and every page shows its
//!   fallback content.
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default: 5)
//! - `DATABASE_ACQUIRE_TIMEOUT_SECS`: how long a page waits for a
//!   connection before giving up and rendering fallbacks (default: 3)

use std::time::Duration;

use crate::env::{optional_string, parse_or};

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(3),
        }
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            url: optional_string("DATABASE_URL"),
            max_connections: parse_or("DATABASE_MAX_CONNECTIONS", defaults.max_connections),
            acquire_timeout: Duration::from_secs(parse_or(
                "DATABASE_ACQUIRE_TIMEOUT_SECS",
                defaults.acquire_timeout.as_secs(),
            )),
        }
    }
}
