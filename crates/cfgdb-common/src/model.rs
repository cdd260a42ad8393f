//! Configuration document
//!
//! Every section carries `#[serde(default)]`, so a partial document is
//! completed from the compiled-in defaults when it is deserialized.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::ConfigError;
use crate::{DRIVER_MYSQL, DRIVER_POSTGRES};

/// Log levels accepted by `LogSettings`
pub const LOG_LEVELS: [&str; 5] = ["TRACE", "DEBUG", "INFO", "WARN", "ERROR"];

/// Storage drivers accepted by `FileSettings`
pub const FILE_DRIVERS: [&str; 2] = ["local", "amazons3"];

/// Application configuration document
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Config {
    #[validate(nested)]
    pub service_settings: ServiceSettings,
    #[validate(nested)]
    pub sql_settings: SqlSettings,
    #[validate(nested)]
    pub log_settings: LogSettings,
    #[validate(nested)]
    pub file_settings: FileSettings,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ServiceSettings {
    #[validate(url)]
    pub site_url: Option<String>,
    #[validate(length(min = 1))]
    pub listen_address: String,
    pub enable_developer: bool,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            site_url: None,
            listen_address: ":8065".to_string(),
            enable_developer: false,
        }
    }
}

/// Database settings for the application itself
///
/// On first start the database store fills `driver_name` and `data_source`
/// with its own connection details.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SqlSettings {
    #[validate(custom(function = "validate_driver_name"))]
    pub driver_name: String,
    #[validate(length(min = 1))]
    pub data_source: String,
    pub data_source_replicas: Vec<String>,
    pub max_idle_conns: u32,
    #[validate(range(min = 1))]
    pub max_open_conns: u32,
    pub conn_max_lifetime_ms: u64,
    #[validate(range(min = 1))]
    pub query_timeout_secs: u64,
    pub trace: bool,
}

impl Default for SqlSettings {
    fn default() -> Self {
        Self {
            driver_name: DRIVER_MYSQL.to_string(),
            data_source: "cfgdb:cfgdb@tcp(localhost:3306)/cfgdb?charset=utf8mb4".to_string(),
            data_source_replicas: Vec::new(),
            max_idle_conns: 20,
            max_open_conns: 300,
            conn_max_lifetime_ms: 3_600_000,
            query_timeout_secs: 30,
            trace: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LogSettings {
    pub enable_console: bool,
    #[validate(custom(function = "validate_log_level"))]
    pub console_level: String,
    pub enable_file: bool,
    #[validate(custom(function = "validate_log_level"))]
    pub file_level: String,
    pub file_location: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            enable_console: true,
            console_level: "INFO".to_string(),
            enable_file: true,
            file_level: "INFO".to_string(),
            file_location: String::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct FileSettings {
    #[validate(custom(function = "validate_file_driver"))]
    pub driver_name: String,
    pub directory: String,
    #[validate(range(min = 1))]
    pub max_file_size: u64,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            driver_name: "local".to_string(),
            directory: "./data/".to_string(),
            max_file_size: 100 * 1024 * 1024,
        }
    }
}

fn validate_driver_name(driver_name: &str) -> Result<(), ValidationError> {
    if driver_name != DRIVER_MYSQL && driver_name != DRIVER_POSTGRES {
        return Err(ValidationError::new("driver_name_unsupported"));
    }
    Ok(())
}

fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    if !LOG_LEVELS.contains(&level.to_uppercase().as_str()) {
        return Err(ValidationError::new("log_level_invalid"));
    }
    Ok(())
}

fn validate_file_driver(driver_name: &str) -> Result<(), ValidationError> {
    if !FILE_DRIVERS.contains(&driver_name) {
        return Err(ValidationError::new("file_driver_unsupported"));
    }
    Ok(())
}

/// Serialize a configuration into the bytes stored by backends
///
/// Output is pretty-printed JSON with a fixed field order, so equal documents
/// always serialize to identical bytes.
pub fn marshal_config(cfg: &Config) -> Result<Vec<u8>, ConfigError> {
    serde_json::to_vec_pretty(cfg).map_err(ConfigError::Serialization)
}
