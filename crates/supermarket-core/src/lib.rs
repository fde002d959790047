//! # supermarket-core: Pricing Logic for Supermarket Checkout
//!
//! This crate prices a shopping cart against a product catalog and a set of
//! special offers, producing an itemized receipt. It has zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Supermarket Pricing Architecture                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Checkout CLI (apps/checkout)                    │   │
//! │  │    scenario file ──► catalog / offers / cart ──► receipt text   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ supermarket-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   cart    │  │  offers   │  │  teller   │  │   │
//! │  │   │  Product  │  │ Shopping  │  │  Special  │  │ checkout  │  │   │
//! │  │   │  Unit     │  │   Cart    │  │  Offer    │  │ ► Receipt │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product and unit of sale
//! - [`catalog`] - Unit price lookup (the external collaborator seam)
//! - [`cart`] - Shopping cart with replace-on-add semantics
//! - [`offers`] - Special offer rules and bundles
//! - [`receipt`] - Receipt, receipt items and discounts
//! - [`teller`] - Offer registry and checkout
//! - [`validation`] - Opt-in input checks
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: checkout is deterministic and never mutates its inputs
//! 2. **No Rounding**: amounts are raw `f64` sums; rounding is a display concern
//! 3. **Explicit Errors**: a catalog miss is a typed error, never a panic
//!
//! ## Concurrency
//! Everything here is single-threaded and synchronous. A [`Teller`] shared
//! between transactions needs external synchronization (e.g. an `RwLock`
//! around it) supplied by the caller.
//!
//! ## Example Usage
//!
//! ```rust
//! use supermarket_core::{
//!     InMemoryCatalog, Product, ProductUnit, ShoppingCart, SpecialOfferType, Teller,
//! };
//!
//! let toothbrush = Product::new("toothbrush", ProductUnit::Each);
//!
//! let mut catalog = InMemoryCatalog::new();
//! catalog.add_product(toothbrush.clone(), 0.99);
//!
//! let mut teller = Teller::new(catalog);
//! teller.add_special_offer(SpecialOfferType::TenPercentDiscount, toothbrush.clone(), 10.0);
//!
//! let mut cart = ShoppingCart::new();
//! cart.add_item_quantity(toothbrush, 1.0);
//!
//! let receipt = teller.checkout(&cart).unwrap();
//! assert!((receipt.total_price() - 0.891).abs() < 1e-9);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod offers;
pub mod receipt;
pub mod teller;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartLine, ShoppingCart};
pub use catalog::{InMemoryCatalog, SupermarketCatalog};
pub use error::{CoreError, CoreResult, ValidationError};
pub use offers::{Bundle, OfferRule, SpecialOffer, SpecialOfferType};
pub use receipt::{Discount, DiscountTarget, Receipt, ReceiptItem};
pub use teller::Teller;
pub use types::*;
