//! Settings for the command line tool
//!
//! Sources, lowest precedence first: the optional YAML file
//! (`conf/cfgdb.yml` by default), `CFGDB_*` environment variables with `__`
//! separating nested keys (`CFGDB_POOL__MAX_CONNECTIONS=5`), then flags.

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, ConfigError, Environment, File};
use tracing::Level;

use cfgdb_persistence::StoreOptions;

use crate::startup::logging::{LogRotation, LoggingConfig};

pub const DEFAULT_CONFIG_FILE: &str = "conf/cfgdb.yml";
pub const ENV_PREFIX: &str = "CFGDB";

const DSN_KEY: &str = "dsn";
const POOL_KEY: &str = "pool";

#[derive(Clone, Debug, Default)]
pub struct CliConfiguration {
    pub config: Config,
}

impl CliConfiguration {
    /// Layer the config file, environment and an explicit DSN
    pub fn load(path: &Path, dsn: Option<String>) -> anyhow::Result<Self> {
        let mut builder = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        if let Some(v) = dsn {
            builder = builder.set_override(DSN_KEY, v)?;
        }

        let config = builder
            .build()
            .with_context(|| format!("failed to read settings from {}", path.display()))?;

        Ok(Self { config })
    }

    /// Descriptor of the configuration database
    pub fn dsn(&self) -> anyhow::Result<String> {
        self.config
            .get_string(DSN_KEY)
            .context("no DSN configured: pass --dsn, set CFGDB_DSN or add `dsn` to the config file")
    }

    /// Pool settings, falling back to the defaults when the section is absent
    pub fn store_options(&self) -> anyhow::Result<StoreOptions> {
        match self.config.get::<StoreOptions>(POOL_KEY) {
            Ok(options) => Ok(options),
            Err(ConfigError::NotFound(_)) => Ok(StoreOptions::default()),
            Err(e) => Err(e).context("invalid pool settings"),
        }
    }

    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            log_dir: self.config.get_string("log.dir").ok().map(PathBuf::from),
            console_output: self.config.get_bool("log.console").unwrap_or(true),
            level: self
                .config
                .get_string("log.level")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(Level::INFO),
            rotation: self
                .config
                .get_string("log.rotation")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(LogRotation::Daily),
        }
    }
}
