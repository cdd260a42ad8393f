//! Store traits
//!
//! `Persister` is the durability callback a backend hands to `CommonStore`;
//! `ConfigStore` is the surface the application programs against.

use std::fmt::Display;
use std::sync::Arc;

use async_trait::async_trait;

use crate::model::Config;

/// Durable write of a configuration document
#[async_trait]
pub trait Persister: Send + Sync {
    async fn persist(&self, cfg: &Config) -> anyhow::Result<()>;
}

/// Configuration store backend
///
/// `Display` must render the backing location with any credential masked.
#[async_trait]
pub trait ConfigStore: Display + Send + Sync {
    /// Current in-memory configuration, environment overrides applied
    fn get(&self) -> Arc<Config>;

    /// Reload the configuration from the backing store
    async fn load(&self) -> anyhow::Result<()>;

    /// Replace the configuration and persist it
    async fn set(&self, new_cfg: Config) -> anyhow::Result<Arc<Config>>;

    /// Fetch a previously stored configuration file
    async fn get_file(&self, name: &str) -> anyhow::Result<Vec<u8>>;

    /// Create or replace a configuration file
    async fn set_file(&self, name: &str, data: &[u8]) -> anyhow::Result<()>;

    /// Whether a configuration file was stored under `name`
    async fn has_file(&self, name: &str) -> anyhow::Result<bool>;

    /// Remove a configuration file; missing names are not an error
    async fn remove_file(&self, name: &str) -> anyhow::Result<()>;

    /// Release the backing resources
    async fn close(&self) -> anyhow::Result<()>;
}
