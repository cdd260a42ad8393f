//! SeaORM entity definitions for the backing tables

pub mod prelude;

pub mod configuration_files;
pub mod configurations;
