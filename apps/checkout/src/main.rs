//! # Checkout Entry Point
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Initialize tracing (logging to stderr)
//! 3. Run the scenario and print the receipt to stdout

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use supermarket_checkout::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    info!(scenario = %cli.scenario.display(), "Starting checkout");

    let output = supermarket_checkout::run(&cli)
        .with_context(|| format!("checkout of {} failed", cli.scenario.display()))?;
    println!("{output}");

    Ok(())
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG` wins when set
/// - `--verbose`: INFO, with pricing decisions at DEBUG
/// - Default: WARN (only passed-through invalid values)
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "info,supermarket_core=debug,supermarket_checkout=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
