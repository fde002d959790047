//! # Special Offers
//!
//! Declarative promotional rules and the per-product pricing table.
//!
//! ## Offer Kinds
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Per-Product Pricing Table                          │
//! │                                                                         │
//! │  q = quantity, p = unit price, a = argument                            │
//! │                                                                         │
//! │  Offer              Qualifies   Discounted line total                  │
//! │  ─────              ─────────   ─────────────────────                  │
//! │  TenPercentDiscount q > 0       q·p·(1 − a/100)                        │
//! │  ThreeForTwo        q ≥ 3       (⌊q/3⌋·2 + q mod 3)·p                  │
//! │  TwoForAmount       q ≥ 2       ⌊q/2⌋·a + (q mod 2)·p                  │
//! │  FiveForAmount      q ≥ 5       ⌊q/5⌋·a + (q mod 5)·p                  │
//! │                                                                         │
//! │  Below the threshold the line stays at full price (no Discount).       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Bundles
//! An offer may carry a [`Bundle`]: a set of distinct products that earn a
//! combined percentage discount when each of them is in the cart at most
//! once. For bundled offers only `argument` (a percentage) and the bundle's
//! product set matter; `offer_type` and `product` are carried but unused.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cart::ShoppingCart;
use crate::types::Product;

// =============================================================================
// Offer Type
// =============================================================================

/// The kind of special offer, as registered by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialOfferType {
    /// `argument` percent off the line.
    TenPercentDiscount,
    /// Every third unit is free. `argument` is unused.
    ThreeForTwo,
    /// Each pair costs `argument`.
    TwoForAmount,
    /// Each group of five costs `argument`.
    FiveForAmount,
}

// =============================================================================
// Offer Rule
// =============================================================================

/// An offer type with its argument resolved into a payload.
///
/// [`SpecialOfferType`] plus a loose `argument` is the registration shape;
/// this is the shape pricing works on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OfferRule {
    /// `percent` off the whole line.
    PercentOff { percent: f64 },
    /// Pay for two out of every three.
    ThreeForTwo,
    /// Every complete group of `group_size` units costs `amount`.
    GroupForAmount { group_size: u32, amount: f64 },
}

impl OfferRule {
    /// Resolves a registered offer type and argument.
    pub fn from_type(offer_type: SpecialOfferType, argument: f64) -> Self {
        match offer_type {
            SpecialOfferType::TenPercentDiscount => OfferRule::PercentOff { percent: argument },
            SpecialOfferType::ThreeForTwo => OfferRule::ThreeForTwo,
            SpecialOfferType::TwoForAmount => OfferRule::GroupForAmount {
                group_size: 2,
                amount: argument,
            },
            SpecialOfferType::FiveForAmount => OfferRule::GroupForAmount {
                group_size: 5,
                amount: argument,
            },
        }
    }

    /// Checks whether `quantity` is enough for the rule to apply.
    pub fn qualifies(&self, quantity: f64) -> bool {
        match self {
            OfferRule::PercentOff { .. } => quantity > 0.0,
            OfferRule::ThreeForTwo => quantity >= 3.0,
            OfferRule::GroupForAmount { group_size, .. } => quantity >= f64::from(*group_size),
        }
    }

    /// Returns the line total after the rule, or `None` below the threshold.
    ///
    /// ## Example
    /// ```rust
    /// use supermarket_core::OfferRule;
    ///
    /// // Three apples at 1.99, pay for two
    /// let total = OfferRule::ThreeForTwo.discounted_total(3.0, 1.99).unwrap();
    /// assert!((total - 3.98).abs() < 1e-9);
    ///
    /// // Two apples do not qualify
    /// assert_eq!(OfferRule::ThreeForTwo.discounted_total(2.0, 1.99), None);
    /// ```
    pub fn discounted_total(&self, quantity: f64, unit_price: f64) -> Option<f64> {
        if !self.qualifies(quantity) {
            return None;
        }

        let total = match *self {
            OfferRule::PercentOff { percent } => quantity * unit_price * (1.0 - percent / 100.0),
            OfferRule::ThreeForTwo => {
                let groups = (quantity / 3.0).floor();
                let remainder = quantity % 3.0;
                (groups * 2.0 + remainder) * unit_price
            }
            OfferRule::GroupForAmount { group_size, amount } => {
                let size = f64::from(group_size);
                let groups = (quantity / size).floor();
                let remainder = quantity % size;
                groups * amount + remainder * unit_price
            }
        };

        Some(total)
    }

    /// Returns how much the rule takes off the full line total.
    ///
    /// `None` below the threshold. Percentage discounts are computed directly
    /// as `q·p·a/100`; group rules as full total minus discounted total.
    pub fn discount_amount(&self, quantity: f64, unit_price: f64) -> Option<f64> {
        let discounted = self.discounted_total(quantity, unit_price)?;

        let amount = match *self {
            OfferRule::PercentOff { percent } => quantity * unit_price * percent / 100.0,
            _ => quantity * unit_price - discounted,
        };

        Some(amount)
    }

    /// Human-readable label for receipts.
    pub fn description(&self) -> String {
        match *self {
            OfferRule::PercentOff { percent } => format!("{}% off", percent),
            OfferRule::ThreeForTwo => "3 for 2".to_string(),
            OfferRule::GroupForAmount { group_size, amount } => {
                format!("{} for {}", group_size, amount)
            }
        }
    }
}

impl fmt::Display for OfferRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

// =============================================================================
// Bundle
// =============================================================================

/// A promotional grouping of distinct products.
///
/// `bundled == false` is the "no bundle" sentinel ([`Bundle::none`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    /// Member products, without duplicates.
    pub products: Vec<Product>,
    pub bundled: bool,
}

impl Bundle {
    /// A bundle over `products`. Duplicate members are dropped.
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        let mut members: Vec<Product> = Vec::new();
        for product in products {
            if !members.contains(&product) {
                members.push(product);
            }
        }

        Bundle {
            products: members,
            bundled: true,
        }
    }

    /// The "not a bundle" sentinel.
    pub fn none() -> Self {
        Bundle::default()
    }

    /// Checks whether `product` is a member.
    pub fn covers(&self, product: &Product) -> bool {
        self.products.contains(product)
    }

    /// A bundle qualifies only if every member is in the cart at most once.
    ///
    /// Members absent from the cart do not invalidate the bundle.
    ///
    /// ## Example
    /// ```rust
    /// use supermarket_core::{Bundle, Product, ProductUnit, ShoppingCart};
    ///
    /// let toothbrush = Product::new("toothbrush", ProductUnit::Each);
    /// let toothpaste = Product::new("toothpaste", ProductUnit::Each);
    /// let bundle = Bundle::new([toothbrush.clone(), toothpaste.clone()]);
    ///
    /// let mut cart = ShoppingCart::new();
    /// cart.add_item_quantity(toothbrush.clone(), 1.0);
    /// assert!(bundle.is_valid(&cart));
    ///
    /// cart.add_item_quantity(toothbrush, 2.0);
    /// assert!(!bundle.is_valid(&cart));
    /// ```
    pub fn is_valid(&self, cart: &ShoppingCart) -> bool {
        self.products
            .iter()
            .all(|product| cart.quantity_of(product).map_or(true, |qty| qty <= 1.0))
    }

    /// Members that have a line in the cart, in bundle order.
    pub fn members_in<'a>(&'a self, cart: &'a ShoppingCart) -> impl Iterator<Item = &'a Product> {
        self.products.iter().filter(move |p| cart.contains(p))
    }
}

// =============================================================================
// Special Offer
// =============================================================================

/// One registered promotional rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialOffer {
    pub offer_type: SpecialOfferType,
    pub product: Product,

    /// Percentage for [`SpecialOfferType::TenPercentDiscount`] and bundles,
    /// group price for the `*ForAmount` types, unused for ThreeForTwo.
    pub argument: f64,

    #[serde(default)]
    pub bundle: Bundle,
}

impl SpecialOffer {
    /// A single-product offer.
    pub fn new(offer_type: SpecialOfferType, product: Product, argument: f64) -> Self {
        SpecialOffer {
            offer_type,
            product,
            argument,
            bundle: Bundle::none(),
        }
    }

    /// An offer carrying a bundle.
    pub fn with_bundle(mut self, bundle: Bundle) -> Self {
        self.bundle = bundle;
        self
    }

    /// Whether this offer uses bundle pricing.
    #[inline]
    pub fn is_bundled(&self) -> bool {
        self.bundle.bundled
    }

    /// The pricing rule for the single-product path.
    pub fn rule(&self) -> OfferRule {
        OfferRule::from_type(self.offer_type, self.argument)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
