//! # Checkout Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SUPERMARKET_STORE_NAME="Corner Shop"                               │
//! │     SUPERMARKET_OUTPUT=json                                            │
//! │                                                                         │
//! │  2. TOML Config File (--config)                                        │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! store_name = "Corner Shop"
//! currency_symbol = "€"
//! currency_decimals = 2
//! paper_width = 42
//! output = "text"          # text | json
//! strict_quantities = false
//! ```

use std::path::Path;

use clap::ValueEnum;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Receipt output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Printed receipt for humans
    #[default]
    Text,
    /// Receipt as JSON, totals unrounded
    Json,
}

/// Checkout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Printed at the top of text receipts
    pub store_name: String,

    /// Currency symbol for display
    pub currency_symbol: String,

    /// Decimal places amounts are rounded to when printed
    pub currency_decimals: u8,

    /// Receipt width in characters (typically 32, 42, or 48)
    pub paper_width: u8,

    /// Default output format
    pub output: OutputFormat,

    /// Reject negative or non-finite scenario values instead of passing
    /// them through to the core
    pub strict_quantities: bool,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        CheckoutConfig {
            store_name: "Supermarket".to_string(),
            currency_symbol: String::new(),
            currency_decimals: 2,
            paper_width: 40,
            output: OutputFormat::Text,
            strict_quantities: false,
        }
    }
}

const MIN_PAPER_WIDTH: u8 = 20;
const MAX_CURRENCY_DECIMALS: u8 = 6;

impl CheckoutConfig {
    /// Loads configuration: defaults, then `path` if given, then
    /// `SUPERMARKET_*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let defaults = CheckoutConfig::default();

        let mut builder = Config::builder()
            .set_default("store_name", defaults.store_name)?
            .set_default("currency_symbol", defaults.currency_symbol)?
            .set_default("currency_decimals", i64::from(defaults.currency_decimals))?
            .set_default("paper_width", i64::from(defaults.paper_width))?
            .set_default("output", "text")?
            .set_default("strict_quantities", defaults.strict_quantities)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path.to_path_buf()).required(true));
        }

        let config: CheckoutConfig = builder
            .add_source(Environment::with_prefix("SUPERMARKET").try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.paper_width < MIN_PAPER_WIDTH {
            return Err(ConfigError::InvalidValue(format!(
                "paper_width must be at least {MIN_PAPER_WIDTH}"
            )));
        }

        if self.currency_decimals > MAX_CURRENCY_DECIMALS {
            return Err(ConfigError::InvalidValue(format!(
                "currency_decimals must be at most {MAX_CURRENCY_DECIMALS}"
            )));
        }

        Ok(())
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidValue(String),
}
