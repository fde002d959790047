//! # Domain Types
//!
//! The product identity shared by the catalog, the cart and the offers.
//!
//! ## Identity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Product                                         │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    Product      │   │  ProductUnit    │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  name           │   │  Each           │  toothbrush × 2             │
//! │  │  unit ──────────┼──►│  Kilo           │  apples × 1.25 kg           │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  Two products are the same product iff name AND unit match.            │
//! │  Product is a map key (catalog, cart, offer registry).                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Product Unit
// =============================================================================

/// How a product is sold.
///
/// Kilo-priced products allow fractional quantities. Each-priced products
/// conventionally use whole numbers, but this is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductUnit {
    /// Sold per piece.
    Each,
    /// Sold by weight.
    Kilo,
}

impl fmt::Display for ProductUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductUnit::Each => write!(f, "each"),
            ProductUnit::Kilo => write!(f, "kilo"),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product that can be priced.
///
/// Immutable once created; cloning is how it is shared between the catalog,
/// cart lines, offers and receipt entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    /// Display name, also the product's identity.
    pub name: String,

    /// Unit of sale.
    pub unit: ProductUnit,
}

impl Product {
    /// Creates a product.
    ///
    /// ## Example
    /// ```rust
    /// use supermarket_core::{Product, ProductUnit};
    ///
    /// let apples = Product::new("apples", ProductUnit::Kilo);
    /// assert_eq!(apples.name, "apples");
    /// assert_eq!(apples.to_string(), "apples (kilo)");
    /// ```
    pub fn new(name: impl Into<String>, unit: ProductUnit) -> Self {
        Product {
            name: name.into(),
            unit,
        }
    }

    /// Whether fractional quantities are natural for this product.
    #[inline]
    pub fn is_weighed(&self) -> bool {
        self.unit == ProductUnit::Kilo
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.unit)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
