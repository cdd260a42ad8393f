//! cfgdb Common - Configuration document, common store and shared traits
//!
//! This crate provides the pieces every cfgdb backend builds on:
//! - The `Config` document and its compiled-in defaults
//! - `CommonStore`, which owns validation, environment overrides, the
//!   in-memory copy and the shared lock
//! - The `Persister` and `ConfigStore` traits backends implement
//! - Error types

pub mod error;
pub mod model;
pub mod store;
pub mod traits;
pub mod utils;

// Re-exports for convenience
pub use error::ConfigError;
pub use model::{Config, FileSettings, LogSettings, ServiceSettings, SqlSettings, marshal_config};
pub use store::CommonStore;
pub use traits::{ConfigStore, Persister};
pub use utils::{new_id, now_millis};

/// Driver name recorded for MySQL databases
pub const DRIVER_MYSQL: &str = "mysql";

/// Driver name recorded for PostgreSQL databases
pub const DRIVER_POSTGRES: &str = "postgres";
