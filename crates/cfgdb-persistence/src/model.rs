//! Domain model types for the database store

use std::time::Duration;

use sea_orm::ConnectOptions;
use serde::{Deserialize, Serialize};

/// Connection pool settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreOptions {
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
    /// Log every statement at debug level
    pub sqlx_logging: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            max_connections: 100,
            min_connections: 1,
            connect_timeout_secs: 30,
            acquire_timeout_secs: 8,
            idle_timeout_secs: 10,
            max_lifetime_secs: 1800,
            sqlx_logging: false,
        }
    }
}

impl StoreOptions {
    /// Apply these settings to SeaORM connect options for `url`
    pub fn connect_options(&self, url: String) -> ConnectOptions {
        let mut opt = ConnectOptions::new(url);

        opt.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(self.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(self.max_lifetime_secs))
            .sqlx_logging(self.sqlx_logging)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        opt
    }
}

/// One stored configuration revision, without its document
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigRevision {
    pub id: String,
    pub create_at: i64,
    pub active: bool,
}
