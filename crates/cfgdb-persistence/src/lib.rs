//! cfgdb Persistence - Database-backed configuration store
//!
//! This crate provides:
//! - Descriptor parsing and the dialect capability table
//! - SeaORM entity definitions for the two backing tables
//! - Schema initialization, including the MySQL column-widening migration
//! - `DatabaseStore`, the `ConfigStore` implementation over MySQL/PostgreSQL

pub mod dsn;
pub mod entity;
pub mod error;
pub mod model;
pub mod schema;
pub mod sql;

// Re-export sea-orm for convenience
pub use sea_orm;

// Re-export entity prelude
pub use entity::prelude::*;

pub use dsn::{Dialect, DialectCapabilities, ParsedDescriptor, mask_descriptor, parse_descriptor};
pub use error::StoreError;
pub use model::{ConfigRevision, StoreOptions};
pub use sql::DatabaseStore;

/// Maximum length accepted for a write to either table
///
/// Imposed by MySQL's default `max_allowed_packet` of 4 MiB.
pub const MAX_WRITE_LENGTH: usize = 4 * 1024 * 1024;
