//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::OutputFormat;

/// Price a shopping cart against a catalog and special offers
#[derive(Parser, Debug)]
#[command(name = "checkout", version, about)]
pub struct Cli {
    /// Scenario file (TOML) with products, offers and cart
    #[arg(short, long)]
    pub scenario: PathBuf,

    /// Configuration file (TOML); SUPERMARKET_* env vars override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format, overrides the configured one
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Log pricing decisions to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
