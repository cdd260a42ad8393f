use clap::Parser;
use tracing::info;

use cfgdb_cli::{Cli, CliConfiguration, run, startup::logging};
use cfgdb_common::ConfigStore;
use cfgdb_persistence::DatabaseStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let configuration = CliConfiguration::load(&cli.config, cli.dsn.clone())?;
    let _logging_guard = logging::init_logging(&configuration.logging_config())?;

    let dsn = configuration.dsn()?;
    let store = DatabaseStore::with_options(&dsn, configuration.store_options()?).await?;
    info!(store = %store, "Connected to configuration store");

    let result = run(&store, cli.command, &mut std::io::stdout()).await;

    store.close().await?;
    result
}
