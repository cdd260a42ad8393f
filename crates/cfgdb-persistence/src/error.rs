//! Store error taxonomy
//!
//! Messages name the operation and target but never the raw descriptor.

use sea_orm::DbErr;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("malformed descriptor: {0}")]
    MalformedDescriptor(String),

    #[error("unsupported scheme '{0}'")]
    UnsupportedDialect(String),

    #[error("failed to connect to {driver} database: {source}")]
    ConnectionFailure {
        driver: &'static str,
        #[source]
        source: DbErr,
    },

    #[error("failed to {operation}: {source}")]
    SchemaInitFailure {
        operation: String,
        #[source]
        source: DbErr,
    },

    #[error("value is too long: {length} > {max} bytes")]
    PayloadTooLarge { length: usize, max: usize },

    #[error("failed to query active configuration: {0}")]
    LoadFailure(#[source] DbErr),

    #[error("failed to {operation} for {target}: {source}")]
    QueryFailure {
        operation: &'static str,
        target: String,
        #[source]
        source: DbErr,
    },

    #[error("failed to {operation}: {source}")]
    TransactionFailure {
        operation: &'static str,
        #[source]
        source: DbErr,
    },

    #[error("configuration file '{0}' not found")]
    FileNotFound(String),

    #[error("configuration file '{0}' is not valid UTF-8")]
    InvalidFileData(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::PayloadTooLarge {
            length: 10,
            max: 4,
        };
        assert_eq!(format!("{}", err), "value is too long: 10 > 4 bytes");

        let err = StoreError::UnsupportedDialect("ftp".to_string());
        assert_eq!(format!("{}", err), "unsupported scheme 'ftp'");

        let err = StoreError::QueryFailure {
            operation: "fetch data",
            target: "saml.crt".to_string(),
            source: DbErr::Custom("boom".to_string()),
        };
        assert!(format!("{}", err).starts_with("failed to fetch data for saml.crt: "));
    }

    #[test]
    fn test_store_error_survives_context() {
        let err: anyhow::Error = StoreError::FileNotFound("a".to_string()).into();
        let err = err.context("failed to read file");
        assert!(matches!(
            err.downcast_ref::<StoreError>(),
            Some(StoreError::FileNotFound(name)) if name == "a"
        ));
    }
}
