//! Common store shared by every configuration backend
//!
//! `CommonStore` owns the in-memory configuration and the coarse lock that
//! serializes `load`, `set` and backend shutdown. Backends call into it with
//! their raw bytes and a `Persister` for durability; it never touches storage
//! itself.

use std::sync::Arc;

use anyhow::Context;
use parking_lot::RwLock;
use tokio::sync::Mutex;
use tracing::{debug, info};
use validator::Validate;

use crate::error::ConfigError;
use crate::model::Config;
use crate::traits::Persister;

/// Default prefix for environment overrides
///
/// `CFGDB_CONFIG__SQL_SETTINGS__MAX_OPEN_CONNS=50` overrides
/// `sql_settings.max_open_conns`.
pub const DEFAULT_ENV_PREFIX: &str = "CFGDB_CONFIG";

const ENV_SEPARATOR: &str = "__";

pub struct CommonStore {
    config_lock: Arc<Mutex<()>>,
    config: RwLock<Arc<Config>>,
    config_without_overrides: RwLock<Arc<Config>>,
    env_prefix: String,
}

impl Default for CommonStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CommonStore {
    pub fn new() -> Self {
        Self::with_env_prefix(DEFAULT_ENV_PREFIX)
    }

    /// Create a store reading environment overrides under `prefix`
    pub fn with_env_prefix(prefix: impl Into<String>) -> Self {
        Self {
            config_lock: Arc::new(Mutex::new(())),
            config: RwLock::new(Arc::new(Config::default())),
            config_without_overrides: RwLock::new(Arc::new(Config::default())),
            env_prefix: prefix.into(),
        }
    }

    /// Shared exclusive lock held by `load` and `set`
    ///
    /// Backends take it before releasing their resources.
    pub fn lock_handle(&self) -> Arc<Mutex<()>> {
        self.config_lock.clone()
    }

    /// Current configuration with environment overrides applied
    pub fn get(&self) -> Arc<Config> {
        self.config.read().clone()
    }

    /// Current configuration as it was persisted
    pub fn get_without_overrides(&self) -> Arc<Config> {
        self.config_without_overrides.read().clone()
    }

    pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
        cfg.validate().map_err(ConfigError::Validation)
    }

    /// Adopt a serialized configuration read from a backend
    ///
    /// When `needs_save` is set the document is persisted before it becomes
    /// current, so a bootstrapped default is durable once `load` returns.
    pub async fn load(
        &self,
        data: &[u8],
        needs_save: bool,
        persister: &dyn Persister,
    ) -> anyhow::Result<()> {
        let _guard = self.config_lock.lock().await;

        let loaded: Config =
            serde_json::from_slice(data).map_err(ConfigError::Deserialization)?;
        let effective = self.apply_environment_overrides(&loaded)?;
        Self::validate(&effective).context("invalid config")?;

        if needs_save {
            persister
                .persist(&loaded)
                .await
                .context("failed to persist required changes after load")?;
            info!("Persisted configuration after load");
        }

        *self.config_without_overrides.write() = Arc::new(loaded);
        *self.config.write() = Arc::new(effective);

        Ok(())
    }

    /// Replace the current configuration
    ///
    /// The document is validated and persisted as given; environment
    /// overrides, when allowed, only shape the in-memory copy returned.
    pub async fn set(
        &self,
        new_cfg: Config,
        allow_env_overrides: bool,
        persister: &dyn Persister,
    ) -> anyhow::Result<Arc<Config>> {
        let _guard = self.config_lock.lock().await;

        Self::validate(&new_cfg).context("new configuration is invalid")?;

        let effective = if allow_env_overrides {
            let cfg = self.apply_environment_overrides(&new_cfg)?;
            Self::validate(&cfg).context("configuration is invalid after environment overrides")?;
            cfg
        } else {
            new_cfg.clone()
        };

        persister
            .persist(&new_cfg)
            .await
            .context("failed to persist")?;

        let effective = Arc::new(effective);
        *self.config_without_overrides.write() = Arc::new(new_cfg);
        *self.config.write() = effective.clone();
        debug!("Configuration replaced");

        Ok(effective)
    }

    fn apply_environment_overrides(&self, cfg: &Config) -> Result<Config, ConfigError> {
        let json = serde_json::to_string(cfg).map_err(ConfigError::Serialization)?;

        let merged = config::Config::builder()
            .add_source(config::File::from_str(&json, config::FileFormat::Json))
            .add_source(
                config::Environment::with_prefix(&self.env_prefix)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?;

        Ok(merged.try_deserialize()?)
    }
}
