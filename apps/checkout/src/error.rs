//! # Application Error Type
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Checkout Harness                   │
//! │                                                                         │
//! │  CheckoutConfig::load ─── ConfigError ───┐                             │
//! │  Scenario::load ───────── ScenarioError ─┼──► AppError ──► anyhow      │
//! │  Teller::checkout ─────── CoreError ─────┤    (main.rs)    (stderr)    │
//! │  render (json) ────────── serde_json ────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use supermarket_core::{CoreError, ValidationError};
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by [`crate::run`].
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scenario(#[from] ScenarioError),

    #[error("Checkout failed: {0}")]
    Core(#[from] CoreError),

    #[error("Failed to encode receipt: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors while reading or resolving a scenario file.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Failed to read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid scenario file: {0}")]
    Parse(#[from] toml::de::Error),

    /// An offer, bundle or cart line names a product missing from `[[products]]`.
    #[error("Unknown product '{name}' referenced by {context}")]
    UnknownProduct { name: String, context: String },

    #[error("Product '{0}' is declared more than once")]
    DuplicateProduct(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Convenience type alias for application results.
pub type AppResult<T> = Result<T, AppError>;
