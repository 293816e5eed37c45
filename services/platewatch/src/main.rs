//! Platewatch CLI
//!
//! Command-line interface for the vehicle detection monitoring dashboard.

use std::path::PathBuf;

use clap::Parser;
use platewatch::load_config;
use tracing::Level;

#[derive(Parser)]
#[command(name = "platewatch")]
#[command(about = "Vehicle detection monitoring dashboard")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: PathBuf,

    /// Dashboard port (overrides config file)
    #[arg(long)]
    dashboard_port: Option<u16>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    tracing::debug!("Loading configuration from {:?}", args.config);
    let mut config = load_config(&args.config)?;
    config.resolve_secrets()?;

    if let Some(dashboard_port) = args.dashboard_port {
        config.dashboard.port = dashboard_port;
    }

    tracing::info!("Starting platewatch service");
    platewatch::run(config).await?;

    Ok(())
}
