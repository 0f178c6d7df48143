//! Tally: an interactive decimal calculator with an undoable, persistent
//! history.

use std::path::PathBuf;

use clap::Parser;
use tracing::error;

use tally_core::CalculatorConfig;

/// Interactive decimal calculator with undo/redo history
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Interactive decimal calculator with an undoable, persistent history")]
#[command(version)]
struct Cli {
    /// Directory holding the history file
    #[arg(short, long)]
    base_dir: Option<PathBuf>,

    /// Disable auto-saving after each calculation
    #[arg(long)]
    no_auto_save: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the interactive prompt.
    let default_directive = if cli.verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let mut config = CalculatorConfig::from_env();
    if let Some(base_dir) = cli.base_dir {
        config.base_dir = base_dir;
    }
    if cli.no_auto_save {
        config.auto_save = false;
    }

    if let Err(err) = tally_cli::repl::run(config) {
        error!(error = %err, "Calculator session failed");
        std::process::exit(1);
    }
}
