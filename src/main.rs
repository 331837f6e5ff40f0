use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use rover_remote::config::PanelConfig;
use rover_remote::tui::runner::run_tui;

#[derive(Parser)]
#[command(name = "rover-remote", about = "Rover remote-control panel.")]
struct Cli {
    /// Config file (defaults to .rover/config.yaml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write logs here (overrides the config file)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// The terminal belongs to the UI, so logs go to a file or nowhere.
fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let writer = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(std::io::sink),
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rover_remote=info".parse()?),
        )
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = PanelConfig::load(cli.config.as_deref())?;

    init_logging(cli.log_file.as_ref().or(config.log_file.as_ref()))?;
    info!("rover-remote starting");
    match &config.source {
        Some(path) => info!("loaded config from {}", path.display()),
        None => info!("no config file, using defaults"),
    }

    run_tui(&config).await
}
