//! # Error Types
//!
//! Domain-specific error types for supermarket-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  supermarket-core errors (this file)                                   │
//! │  ├── CoreError        - Pricing failures (catalog miss)                │
//! │  └── ValidationError  - Opt-in input validation failures               │
//! │                                                                         │
//! │  checkout app errors (separate crate)                                  │
//! │  └── AppError         - Scenario, config and I/O failures              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, field)
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::types::Product;

// =============================================================================
// Core Error
// =============================================================================

/// Core pricing errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// The catalog has no unit price for a product.
    ///
    /// ## When This Occurs
    /// - A cart line references a product never added to the catalog
    /// - A bundle member present in the cart is unknown to the catalog
    ///
    /// This is a caller error and is never recovered inside the core.
    #[error("No catalog price for product: {product}")]
    CatalogMiss { product: Product },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Only produced by the helpers in [`crate::validation`]. The cart and the
/// teller accept any quantity as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// A quantity is negative.
    #[error("Invalid quantity {quantity} for {product}")]
    InvalidQuantity { product: String, quantity: f64 },

    /// Numeric value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
