//! Vigil Control - one-shot service liveness checker
//!
//! Reads a service list from a YAML config file, checks every service
//! concurrently, and prints an UP/DOWN report.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "vigilctl")]
#[command(about = "Concurrent service liveness checker", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config file (optional). Defaults to ~/.vigil/config.yaml,
    /// then ./config.yaml
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so the report on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    vigilctl::run(cli.config).await
}
