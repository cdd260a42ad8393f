//! cfgdb command line tool
//!
//! Connects to a configuration database, then shows, replaces or audits the
//! active configuration and manages the stored configuration files.

pub mod command;
pub mod config;
pub mod startup;

pub use command::{Cli, Command, FileCommand, run};
pub use config::CliConfiguration;
