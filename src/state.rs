use std::sync::Arc;

use lyceum_config::{DatabaseConfig, SiteConfig};
use lyceum_db::{DynSiteStore, MemoryStore, PgSiteStore, init_db_pool};
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub store: DynSiteStore,
    pub site: SiteConfig,
}

impl AppState {
    pub fn new(store: DynSiteStore, site: SiteConfig) -> Self {
        Self { store, site }
    }
}

/// Build the state from the environment.
///
/// Without `DATABASE_URL` the site runs on an empty in-memory store and
/// every page shows its static content.
pub fn init_app_state() -> Result<AppState, sqlx::Error> {
    let database = DatabaseConfig::from_env();
    let site = SiteConfig::from_env();

    let store: DynSiteStore = match init_db_pool(&database)? {
        Some(pool) => {
            info!(max_connections = database.max_connections, "Using PostgreSQL content store");
            Arc::new(PgSiteStore::new(pool))
        }
        None => {
            warn!("DATABASE_URL not set, serving static page content only");
            Arc::new(MemoryStore::new())
        }
    };

    Ok(AppState::new(store, site))
}
