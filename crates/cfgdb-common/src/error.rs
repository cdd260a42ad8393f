//! Error types for the configuration document and common store
//!
//! Backends propagate these inside `anyhow::Error`; callers recover them with
//! `err.downcast_ref::<ConfigError>()`.

/// Configuration document errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to serialize configuration: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("failed to deserialize configuration: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("failed to apply environment overrides: {0}")]
    EnvironmentOverride(#[from] config::ConfigError),
}
