//! # Shopping Cart
//!
//! The products a customer brings to the till, with their quantities.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Caller Action                Method                  Cart Change       │
//! │  ─────────────                ──────                  ───────────       │
//! │                                                                         │
//! │  Scan product (new) ────────► add_item_quantity() ──► lines.push(line) │
//! │                                                                         │
//! │  Scan product (again) ──────► add_item_quantity() ──► line.qty = new   │
//! │                                                       (REPLACE, not +=) │
//! │                                                                         │
//! │  Checkout ──────────────────► lines() ──────────────► (read only)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::types::Product;

/// A product and its quantity in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,

    /// Pieces for [`crate::ProductUnit::Each`], kilograms for
    /// [`crate::ProductUnit::Kilo`]. Not validated.
    pub quantity: f64,
}

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by product
/// - Lines keep first-insertion order, so receipts are deterministic
/// - Adding a product already in the cart replaces its quantity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingCart {
    lines: Vec<CartLine>,
}

impl ShoppingCart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        ShoppingCart::default()
    }

    /// Sets the quantity of `product`.
    ///
    /// ## Behavior
    /// - If product already in cart: its quantity is replaced (last write wins)
    /// - If product not in cart: a new line is appended
    /// - Zero and negative quantities are stored as given
    ///
    /// ## Example
    /// ```rust
    /// use supermarket_core::{Product, ProductUnit, ShoppingCart};
    ///
    /// let apples = Product::new("apples", ProductUnit::Kilo);
    /// let mut cart = ShoppingCart::new();
    /// cart.add_item_quantity(apples.clone(), 2.0);
    /// cart.add_item_quantity(apples.clone(), 5.0);
    ///
    /// assert_eq!(cart.quantity_of(&apples), Some(5.0));
    /// ```
    pub fn add_item_quantity(&mut self, product: Product, quantity: f64) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product == product) {
            line.quantity = quantity;
            return;
        }

        self.lines.push(CartLine { product, quantity });
    }

    /// Returns the cart lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns the quantity of `product`, or `None` if it is not in the cart.
    pub fn quantity_of(&self, product: &Product) -> Option<f64> {
        self.lines
            .iter()
            .find(|l| &l.product == product)
            .map(|l| l.quantity)
    }

    /// Checks whether `product` has a line in the cart.
    pub fn contains(&self, product: &Product) -> bool {
        self.quantity_of(product).is_some()
    }

    /// Returns the number of distinct products in the cart.
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Removes every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
