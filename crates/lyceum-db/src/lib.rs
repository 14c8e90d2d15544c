//! # Lyceum DB
//!
//! Read-only access to the site's content collections.
//!
//! Pages talk to a [`SiteStore`]. Two implementations ship:
//!
//! - [`PgSiteStore`]: PostgreSQL through SQLx
//! - [`MemoryStore`]: in-process records, used when no database is
//!   configured and as a test fixture
//!
//! # Example
//!
//! ```ignore
//! use lyceum_config::DatabaseConfig;
//! use lyceum_db::{PgSiteStore, init_db_pool};
//!
//! let config = DatabaseConfig::from_env();
//! if let Some(pool) = init_db_pool(&config)? {
//!     let store = PgSiteStore::new(pool);
//!     let schedules = store.list_exam_schedules().await?;
//! }
//! ```

use lyceum_config::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;

pub mod memory;
pub mod postgres;
pub mod store;
#[cfg(feature = "test-utils")]
pub mod testing;

pub use memory::MemoryStore;
pub use postgres::PgSiteStore;
pub use store::{DynSiteStore, SiteStore, StoreError, collections};

// Re-export PgPool for convenience
pub use sqlx::PgPool;

/// Build a PostgreSQL connection pool from `config`.
///
/// Returns `Ok(None)` when no `DATABASE_URL` is configured. The pool
/// connects lazily, so an unreachable database does not stop the server
/// from starting: queries fail later and pages fall back to static content.
///
/// # Errors
///
/// Fails only when the connection string cannot be parsed.
pub fn init_db_pool(config: &DatabaseConfig) -> Result<Option<PgPool>, sqlx::Error> {
    let Some(url) = config.url.as_deref() else {
        return Ok(None);
    };

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_lazy(url)?;

    Ok(Some(pool))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_url_means_no_pool() {
        let pool = init_db_pool(&DatabaseConfig::default()).unwrap();
        assert!(pool.is_none());
    }

    #[test]
    fn test_malformed_url_is_an_error() {
        let config = DatabaseConfig {
            url: Some("not a url".to_string()),
            ..DatabaseConfig::default()
        };
        assert!(init_db_pool(&config).is_err());
    }
}
