//! # Receipt
//!
//! Output value objects of a checkout.
//!
//! ```text
//! Receipt
//! ├── items      ─ one ReceiptItem per cart line, cart order
//! │                 total_price = quantity × price
//! └── discounts  ─ per-product discounts (cart order), then bundle
//!                   discounts (registration order)
//!
//! total_price() = Σ items.total_price − Σ discounts.discount_amount
//! ```
//!
//! No rounding happens here. Rounding to cents is a presentation concern.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Product;

// =============================================================================
// Discount
// =============================================================================

/// What a discount is attributed to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiscountTarget {
    /// A single-product offer.
    Product { product: Product },
    /// A bundle offer; lists the members that were in the cart.
    Bundle { products: Vec<Product> },
}

impl fmt::Display for DiscountTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscountTarget::Product { product } => write!(f, "{}", product.name),
            DiscountTarget::Bundle { products } => {
                let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
                write!(f, "bundle [{}]", names.join(", "))
            }
        }
    }
}

/// An amount taken off the naive full-price total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub target: DiscountTarget,

    /// Label of the offer, e.g. "3 for 2".
    pub description: String,

    /// Positive amount subtracted from the total.
    pub discount_amount: f64,
}

impl Discount {
    /// A discount from a single-product offer.
    pub fn for_product(product: Product, description: impl Into<String>, amount: f64) -> Self {
        Discount {
            target: DiscountTarget::Product { product },
            description: description.into(),
            discount_amount: amount,
        }
    }

    /// A combined discount from a bundle offer.
    pub fn for_bundle(products: Vec<Product>, description: impl Into<String>, amount: f64) -> Self {
        Discount {
            target: DiscountTarget::Bundle { products },
            description: description.into(),
            discount_amount: amount,
        }
    }

    /// The product, if this is a single-product discount.
    pub fn product(&self) -> Option<&Product> {
        match &self.target {
            DiscountTarget::Product { product } => Some(product),
            DiscountTarget::Bundle { .. } => None,
        }
    }
}

// =============================================================================
// Receipt Item
// =============================================================================

/// A priced cart line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptItem {
    pub product: Product,
    pub quantity: f64,

    /// Unit price from the catalog.
    pub price: f64,

    /// `quantity × price`.
    pub total_price: f64,
}

impl ReceiptItem {
    pub fn new(product: Product, quantity: f64, price: f64) -> Self {
        ReceiptItem {
            product,
            quantity,
            price,
            total_price: quantity * price,
        }
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// The priced-and-discounted summary of a checkout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    items: Vec<ReceiptItem>,
    discounts: Vec<Discount>,
}

impl Receipt {
    pub fn new(items: Vec<ReceiptItem>, discounts: Vec<Discount>) -> Self {
        Receipt { items, discounts }
    }

    pub fn items(&self) -> &[ReceiptItem] {
        &self.items
    }

    pub fn discounts(&self) -> &[Discount] {
        &self.discounts
    }

    /// Sum of line totals before discounts.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(|i| i.total_price).sum()
    }

    /// Sum of all discount amounts.
    pub fn total_discount(&self) -> f64 {
        self.discounts.iter().map(|d| d.discount_amount).sum()
    }

    /// Grand total: subtotal minus discounts, unrounded.
    pub fn total_price(&self) -> f64 {
        self.subtotal() - self.total_discount()
    }
}
