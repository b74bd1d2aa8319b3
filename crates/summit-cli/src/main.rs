//! Summit CLI
//!
//! Drives the application core without a UI: replays action scripts through
//! the store and prints what each selector emits.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use summit_app::AppConfig;

#[derive(Parser)]
#[command(name = "summit")]
#[command(about = "Summit - conference companion state inspector", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path
    #[arg(short, long, global = true, default_value = "summit.toml")]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay an action script and print selector emissions per step
    Replay {
        /// JSON array of actions
        script: PathBuf,
    },

    /// Print the state snapshot as JSON
    State {
        /// Apply this action script before printing
        #[arg(short, long)]
        script: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool, config: &AppConfig) {
    let level = if verbose { "debug" } else { config.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)?;
    config.merge_with_env()?;
    init_logging(cli.verbose, &config);
    tracing::debug!(config = ?config, "configuration loaded");

    let mut out = std::io::stdout().lock();
    match cli.command {
        Commands::Replay { script } => {
            commands::replay::run(&config, &script, &mut out)?;
        }
        Commands::State { script } => {
            commands::state::run(&config, script.as_deref(), &mut out)?;
        }
    }

    Ok(())
}
