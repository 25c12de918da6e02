//! `ytdl` - command-line front end for the youtube-dl adapter.

mod commands;
mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ytdl_core::{load_config, validate_config, AdapterError, Severity, YoutubeDlAdapter};

use commands::Command;
use output::Printer;

#[derive(Debug, Parser)]
#[command(name = "ytdl", version, about = "Look up and download media with youtube-dl")]
struct Cli {
    /// Configuration file
    #[arg(long, env = "YTDL_CONFIG", default_value = "ytdl.toml", global = true)]
    config: PathBuf,

    /// Print results and events as JSON lines
    #[arg(long, global = true)]
    json: bool,

    /// Succeed when youtube-dl reported only warnings
    #[arg(long, global = true)]
    allow_warnings: bool,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.json);

    if let Err(e) = run(cli).await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| fmt::layer().with_writer(std::io::stderr)))
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    info!("Loading configuration from {:?}", cli.config);
    let config = load_config(&cli.config)
        .with_context(|| format!("Failed to load config from {:?}", cli.config))?;
    validate_config(&config).context("Configuration validation failed")?;

    let mut adapter = YoutubeDlAdapter::from_config(&config);
    let printer = Printer::new(cli.json);
    let operation = cli.command.operation();

    match commands::execute(&mut adapter, &cli.command, printer).await {
        Ok(()) => Ok(()),
        Err(err) => {
            log_diagnostics(&err);
            if cli.allow_warnings && err.is_warning_only() {
                warn!(%operation, "Finished with warnings");
                return Ok(());
            }
            Err(err).with_context(|| format!("{operation} failed"))
        }
    }
}

/// Logs every message of a diagnostic chain, newest first.
fn log_diagnostics(err: &AdapterError) {
    let Some(chain) = err.diagnostics() else {
        return;
    };
    for message in chain {
        match message.severity() {
            Severity::Error => error!("youtube-dl: {}", message.text()),
            Severity::Warning => warn!("youtube-dl: {}", message.text()),
        }
    }
}
