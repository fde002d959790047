//! # Validation Module
//!
//! Opt-in input checks for harnesses that want to reject bad input before
//! it reaches the teller.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Harness (scenario file, CLI)                                 │
//! │  ├── Deserialization (types, required fields)                          │
//! │  └── THIS MODULE, when strict mode is on                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Core (cart, teller)                                          │
//! │  └── No checks: quantities pass through unchanged                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use supermarket_core::validation::{validate_quantity, validate_unit_price};
//! use supermarket_core::{Product, ProductUnit};
//!
//! let apples = Product::new("apples", ProductUnit::Kilo);
//! assert!(validate_quantity(&apples, 1.5).is_ok());
//! assert!(validate_quantity(&apples, -1.0).is_err());
//! assert!(validate_unit_price(1.99).is_ok());
//! ```

use crate::error::ValidationError;
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

fn require_finite(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty after trimming
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }
    Ok(())
}

/// Validates a cart quantity.
///
/// ## Rules
/// - Must be finite
/// - Must not be negative (zero is allowed: an emptied line)
pub fn validate_quantity(product: &Product, quantity: f64) -> ValidationResult<()> {
    require_finite("quantity", quantity)?;

    if quantity < 0.0 {
        return Err(ValidationError::InvalidQuantity {
            product: product.name.clone(),
            quantity,
        });
    }

    Ok(())
}

/// Validates a catalog unit price.
///
/// ## Rules
/// - Must be finite and non-negative (zero = free item)
pub fn validate_unit_price(price: f64) -> ValidationResult<()> {
    require_finite("price", price)?;

    if price < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0.0,
            max: f64::MAX,
        });
    }

    Ok(())
}

/// Validates a percentage offer argument.
///
/// ## Rules
/// - Must be between 0 and 100
pub fn validate_percentage(percent: f64) -> ValidationResult<()> {
    require_finite("percentage", percent)?;

    if !(0.0..=100.0).contains(&percent) {
        return Err(ValidationError::OutOfRange {
            field: "percentage".to_string(),
            min: 0.0,
            max: 100.0,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductUnit;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("toothbrush").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        let apples = Product::new("apples", ProductUnit::Kilo);
        assert!(validate_quantity(&apples, 0.0).is_ok());
        assert!(validate_quantity(&apples, 2.5).is_ok());

        assert!(matches!(
            validate_quantity(&apples, -1.0),
            Err(ValidationError::InvalidQuantity { .. })
        ));
        assert!(matches!(
            validate_quantity(&apples, f64::NAN),
            Err(ValidationError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price(0.0).is_ok());
        assert!(validate_unit_price(0.99).is_ok());
        assert!(validate_unit_price(-0.01).is_err());
        assert!(validate_unit_price(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_percentage() {
        assert!(validate_percentage(0.0).is_ok());
        assert!(validate_percentage(10.0).is_ok());
        assert!(validate_percentage(100.0).is_ok());
        assert!(validate_percentage(100.5).is_err());
        assert!(validate_percentage(-5.0).is_err());
    }
}
