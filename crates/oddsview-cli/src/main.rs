use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use oddsview_core::{AppConfig, PredictionPolicy};

mod commands;

#[derive(Parser)]
#[command(name = "oddsview")]
#[command(author, version, about = "A terminal odds display with a live clock")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the config file (defaults to ~/.config/oddsview/config.toml)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Print generated odds values
    Sample {
        /// Number of values to print
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
        /// Generation policy: weighted_random or time_derived
        #[arg(short, long)]
        policy: Option<PredictionPolicy>,
        /// RNG seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Print the current time and predicted time
    Clock,
    /// Print the effective configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match cli.config {
        Some(ref path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    let config = Arc::new(config);

    let tui = matches!(cli.command, Some(Commands::Run) | None);
    init_logging(&config, tui)?;

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config),
        Some(Commands::Sample { count, policy, seed }) => {
            commands::sample::run(&config, count, policy, seed)
        }
        Some(Commands::Clock) => commands::clock::run(&config),
        Some(Commands::Config) => commands::config::run(&config, cli.config.as_deref()),
    }
}

/// Initialize logging
///
/// Subcommands log to stderr. The TUI owns the terminal, so it logs to the
/// configured log file, or nowhere when none is set.
fn init_logging(config: &AppConfig, tui: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );

    if !tui {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
        return Ok(());
    }

    if let Some(path) = config.log_file() {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    }

    Ok(())
}
