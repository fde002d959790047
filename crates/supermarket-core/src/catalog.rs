//! # Catalog
//!
//! Unit price lookup. The catalog is owned by the caller; the core only
//! ever reads from it.
//!
//! ```text
//! Teller::checkout ──► SupermarketCatalog::unit_price(&product)
//!                          │
//!                          ├── known   → Ok(1.99)
//!                          └── unknown → Err(CoreError::CatalogMiss)
//! ```

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::types::Product;

/// Price lookup by product.
///
/// Implement this to plug a real price source (database, pricing service)
/// into a [`crate::Teller`]. [`InMemoryCatalog`] is the in-process version.
pub trait SupermarketCatalog {
    /// Returns the unit price of `product`, or [`CoreError::CatalogMiss`].
    fn unit_price(&self, product: &Product) -> CoreResult<f64>;
}

impl<C: SupermarketCatalog + ?Sized> SupermarketCatalog for &C {
    fn unit_price(&self, product: &Product) -> CoreResult<f64> {
        (**self).unit_price(product)
    }
}

/// A catalog held in memory.
///
/// ## Example
/// ```rust
/// use supermarket_core::{InMemoryCatalog, Product, ProductUnit, SupermarketCatalog};
///
/// let apples = Product::new("apples", ProductUnit::Kilo);
/// let mut catalog = InMemoryCatalog::new();
/// catalog.add_product(apples.clone(), 1.99);
///
/// assert_eq!(catalog.unit_price(&apples).unwrap(), 1.99);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    prices: HashMap<Product, f64>,
}

impl InMemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        InMemoryCatalog::default()
    }

    /// Adds or reprices a product.
    pub fn add_product(&mut self, product: Product, unit_price: f64) {
        self.prices.insert(product, unit_price);
    }

    /// Checks whether the product has a price.
    pub fn contains(&self, product: &Product) -> bool {
        self.prices.contains_key(product)
    }

    /// Number of priced products.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl SupermarketCatalog for InMemoryCatalog {
    fn unit_price(&self, product: &Product) -> CoreResult<f64> {
        self.prices
            .get(product)
            .copied()
            .ok_or_else(|| CoreError::CatalogMiss {
                product: product.clone(),
            })
    }
}
