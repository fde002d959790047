//! # Checkout Harness Library
//!
//! Drives supermarket-core from a scenario file.
//!
//! ## Module Organization
//! ```text
//! supermarket_checkout/
//! ├── lib.rs       ◄─── You are here (run)
//! ├── cli.rs       ◄─── Command-line arguments
//! ├── config.rs    ◄─── Layered configuration
//! ├── scenario.rs  ◄─── Scenario file → catalog, offers, cart
//! ├── printer.rs   ◄─── Text receipt rendering
//! └── error.rs     ◄─── Application error type
//! ```
//!
//! ## Run Sequence
//! 1. Load configuration (defaults → file → `SUPERMARKET_*` env)
//! 2. Load and resolve the scenario
//! 3. Check out the cart
//! 4. Render the receipt as text or JSON

pub mod cli;
pub mod config;
pub mod error;
pub mod printer;
pub mod scenario;

use serde::Serialize;
use tracing::info;

use supermarket_core::Receipt;

use crate::cli::Cli;
use crate::config::{CheckoutConfig, OutputFormat};
use crate::error::AppResult;
use crate::printer::ReceiptPrinter;
use crate::scenario::Scenario;

/// Runs one checkout and returns the rendered receipt.
pub fn run(cli: &Cli) -> AppResult<String> {
    let config = CheckoutConfig::load(cli.config.as_deref())?;
    info!(store = %config.store_name, "Configuration loaded");

    let scenario = Scenario::load(&cli.scenario, config.strict_quantities)?;
    info!(
        products = scenario.catalog.len(),
        offers = scenario.offers.len(),
        lines = scenario.cart.item_count(),
        "Scenario loaded"
    );

    let receipt = scenario.checkout()?;

    let format = cli.format.unwrap_or(config.output);
    render(&receipt, &config, format)
}

/// Renders a receipt in the requested format.
pub fn render(receipt: &Receipt, config: &CheckoutConfig, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(ReceiptPrinter::from_config(config).render(receipt)),
        OutputFormat::Json => {
            let document = JsonReceipt {
                store: &config.store_name,
                receipt,
                subtotal: receipt.subtotal(),
                total_discount: receipt.total_discount(),
                total: receipt.total_price(),
            };
            Ok(serde_json::to_string_pretty(&document)?)
        }
    }
}

/// JSON output: the receipt plus its computed totals, unrounded.
#[derive(Serialize)]
struct JsonReceipt<'a> {
    store: &'a str,
    #[serde(flatten)]
    receipt: &'a Receipt,
    subtotal: f64,
    total_discount: f64,
    total: f64,
}
