//! # Lyceum Config
//!
//! Configuration types for the Lyceum site, loaded from environment
//! variables:
//!
//! - [`server`]: listen address
//! - [`database`]: optional PostgreSQL connection settings
//! - [`site`]: institute name, contact details and static assets
//!
//! # Example
//!
//! ```ignore
//! use lyceum_config::{DatabaseConfig, ServerConfig, SiteConfig};
//!
//! let server = ServerConfig::from_env();
//! let database = DatabaseConfig::from_env();
//! let site = SiteConfig::from_env();
//! ```

pub mod database;
pub mod env;
pub mod server;
pub mod site;

// Re-export commonly used types at crate root
pub use database::DatabaseConfig;
pub use server::ServerConfig;
pub use site::SiteConfig;
