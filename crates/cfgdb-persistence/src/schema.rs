//! Schema initialization
//!
//! Creates both tables when absent, then widens the text columns on MySQL,
//! where TEXT stops at 64 KiB. Every statement is idempotent, so this runs on
//! each store construction.

use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, Schema, Statement};
use tracing::{debug, info};

use crate::dsn::Dialect;
use crate::entity::{configuration_files, configurations};
use crate::error::StoreError;

/// MEDIUMTEXT holds up to 16 MiB, above `MAX_WRITE_LENGTH`
const MYSQL_WIDEN_STATEMENTS: [(&str, &str); 2] = [
    (
        "alter Configurations table",
        "ALTER TABLE `Configurations` MODIFY `Value` MEDIUMTEXT NOT NULL",
    ),
    (
        "alter ConfigurationFiles table",
        "ALTER TABLE `ConfigurationFiles` MODIFY `Data` MEDIUMTEXT NOT NULL",
    ),
];

/// Ensure the backing tables exist for `dialect`
pub async fn initialize(db: &DatabaseConnection, dialect: Dialect) -> Result<(), StoreError> {
    create_table(db, configurations::Entity, "create Configurations table").await?;
    create_table(db, configuration_files::Entity, "create ConfigurationFiles table").await?;

    if dialect.capabilities().widen_text_columns {
        let backend = db.get_database_backend();
        for (operation, sql) in MYSQL_WIDEN_STATEMENTS {
            db.execute(Statement::from_string(backend, sql))
                .await
                .map_err(|source| StoreError::SchemaInitFailure {
                    operation: operation.to_string(),
                    source,
                })?;
        }
        debug!("Widened text columns to MEDIUMTEXT");
    }

    info!(dialect = %dialect, "Configuration tables initialized");
    Ok(())
}

async fn create_table<E>(
    db: &DatabaseConnection,
    entity: E,
    operation: &str,
) -> Result<(), StoreError>
where
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let mut stmt = Schema::new(backend).create_table_from_entity(entity);
    stmt.if_not_exists();

    db.execute(backend.build(&stmt))
        .await
        .map_err(|source| StoreError::SchemaInitFailure {
            operation: operation.to_string(),
            source,
        })?;

    Ok(())
}
