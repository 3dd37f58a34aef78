use crate::app_config::AppConfig;
use crate::cli::Cli;
use crate::commands::CommandError;
use clap::Parser;
use std::process;
use tracing::{Level, error, info};

mod app_config;
mod cli;
mod commands;
mod domain;
mod extensions;
mod geometry;
mod loader;
mod proximity;
mod report;
mod request;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).with_writer(std::io::stderr).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if let Err(err) = execute(cli).await {
        error!("❌ {}", err);
        eprintln!("{}", err.to_document());
        process::exit(err.exit_code());
    }
}

async fn execute(cli: Cli) -> Result<(), CommandError> {
    let config = AppConfig::load(&cli.config)?;
    info!("✅  Loaded configuration, default radius {}", config.query().radius());

    let result = commands::run(cli.command, &config).await?;
    serde_json::to_writer_pretty(std::io::stdout().lock(), &result)?;
    println!();
    Ok(())
}
