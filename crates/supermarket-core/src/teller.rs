//! # Teller
//!
//! Holds the catalog and the registered special offers, and turns a cart
//! into a [`Receipt`].
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Teller::checkout(&cart)                          │
//! │                                                                         │
//! │  1. Price lines ──► for each cart line (cart order)                     │
//! │                     unit_price(product)? ──► ReceiptItem               │
//! │                                                                         │
//! │  2. Product offers ► for each cart line with a registered offer        │
//! │                     ├── product covered by a bundle? → skip            │
//! │                     ├── below threshold?             → skip            │
//! │                     └── otherwise                    → Discount        │
//! │                                                                         │
//! │  3. Bundle offers ─► for each bundle offer (registration order)        │
//! │                     ├── any member qty > 1? → no discount at all       │
//! │                     └── otherwise → one Discount over members present  │
//! │                                                                         │
//! │  4. Receipt { items, discounts }                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Offer Registry
//! - Single-product offers live in a map keyed by product; registering a
//!   second offer for the same product replaces the first.
//! - Bundled offers live in a separate list and never occupy the map.
//! - A bundle overrides single-product offers for every product it covers,
//!   whether or not the bundle qualifies in a given cart.
//!
//! ## Thread Safety
//! None provided. Register offers before checking out; a teller shared
//! between threads needs an external `RwLock`.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::cart::ShoppingCart;
use crate::catalog::SupermarketCatalog;
use crate::error::CoreResult;
use crate::offers::{Bundle, SpecialOffer, SpecialOfferType};
use crate::receipt::{Discount, Receipt, ReceiptItem};
use crate::types::Product;

/// The checkout desk.
#[derive(Debug)]
pub struct Teller<C> {
    catalog: C,
    offers: HashMap<Product, SpecialOffer>,
    bundle_offers: Vec<SpecialOffer>,
}

impl<C: SupermarketCatalog> Teller<C> {
    /// Creates a teller bound to `catalog`, with no offers.
    pub fn new(catalog: C) -> Self {
        Teller {
            catalog,
            offers: HashMap::new(),
            bundle_offers: Vec::new(),
        }
    }

    /// Registers a single-product offer, replacing any earlier one for
    /// `product`.
    pub fn add_special_offer(
        &mut self,
        offer_type: SpecialOfferType,
        product: Product,
        argument: f64,
    ) {
        self.register(SpecialOffer::new(offer_type, product, argument));
    }

    /// Registers an offer that may carry a bundle.
    ///
    /// With `bundle.bundled == false` this is exactly
    /// [`add_special_offer`](Self::add_special_offer). Otherwise the offer
    /// is kept as a bundle offer: only `argument` (a percentage) and the
    /// bundle's products are used for pricing.
    pub fn add_special_offer_with_bundle(
        &mut self,
        offer_type: SpecialOfferType,
        product: Product,
        argument: f64,
        bundle: Bundle,
    ) {
        self.register(SpecialOffer::new(offer_type, product, argument).with_bundle(bundle));
    }

    /// Registers an already-built offer.
    pub fn register(&mut self, offer: SpecialOffer) {
        if offer.is_bundled() {
            debug!(
                members = offer.bundle.products.len(),
                percent = offer.argument,
                "Registered bundle offer"
            );
            self.bundle_offers.push(offer);
            return;
        }

        let product = offer.product.clone();
        if let Some(previous) = self.offers.insert(product.clone(), offer) {
            debug!(
                product = %product,
                replaced = ?previous.offer_type,
                "Replaced special offer"
            );
        } else {
            debug!(product = %product, "Registered special offer");
        }
    }

    /// The single-product offer registered for `product`, if any.
    pub fn offer_for(&self, product: &Product) -> Option<&SpecialOffer> {
        self.offers.get(product)
    }

    /// Bundle offers in registration order.
    pub fn bundle_offers(&self) -> &[SpecialOffer] {
        &self.bundle_offers
    }

    /// Prices `cart` into a receipt.
    ///
    /// Reads the cart and the offers without changing either, so repeated
    /// calls give identical receipts.
    ///
    /// ## Errors
    /// [`crate::CoreError::CatalogMiss`] if a cart product has no price.
    pub fn checkout(&self, cart: &ShoppingCart) -> CoreResult<Receipt> {
        let items = self.price_lines(cart)?;

        let mut discounts = self.product_discounts(&items);
        discounts.extend(self.bundle_discounts(cart, &items));

        let receipt = Receipt::new(items, discounts);
        info!(
            items = receipt.items().len(),
            discounts = receipt.discounts().len(),
            subtotal = receipt.subtotal(),
            total = receipt.total_price(),
            "Checkout complete"
        );

        Ok(receipt)
    }

    fn price_lines(&self, cart: &ShoppingCart) -> CoreResult<Vec<ReceiptItem>> {
        cart.lines()
            .iter()
            .map(|line| {
                let price = self.catalog.unit_price(&line.product)?;
                debug!(
                    product = %line.product,
                    quantity = line.quantity,
                    price,
                    "Priced line"
                );
                Ok(ReceiptItem::new(line.product.clone(), line.quantity, price))
            })
            .collect()
    }

    fn covered_by_bundle(&self, product: &Product) -> bool {
        self.bundle_offers.iter().any(|o| o.bundle.covers(product))
    }

    fn product_discounts(&self, items: &[ReceiptItem]) -> Vec<Discount> {
        let mut discounts = Vec::new();

        for item in items {
            let Some(offer) = self.offers.get(&item.product) else {
                continue;
            };

            if self.covered_by_bundle(&item.product) {
                debug!(product = %item.product, "Offer overridden by bundle");
                continue;
            }

            let rule = offer.rule();
            match rule.discount_amount(item.quantity, item.price) {
                Some(amount) if amount > 0.0 => {
                    debug!(product = %item.product, offer = %rule, amount, "Applied offer");
                    discounts.push(Discount::for_product(
                        item.product.clone(),
                        rule.description(),
                        amount,
                    ));
                }
                _ => {
                    debug!(
                        product = %item.product,
                        offer = %rule,
                        quantity = item.quantity,
                        "Offer does not apply"
                    );
                }
            }
        }

        discounts
    }

    fn bundle_discounts(&self, cart: &ShoppingCart, items: &[ReceiptItem]) -> Vec<Discount> {
        let mut discounts = Vec::new();

        for offer in &self.bundle_offers {
            let bundle = &offer.bundle;
            if !bundle.is_valid(cart) {
                debug!(
                    members = bundle.products.len(),
                    "Bundle invalid: a member is in the cart more than once"
                );
                continue;
            }

            let members: Vec<&ReceiptItem> = bundle
                .members_in(cart)
                .filter_map(|product| items.iter().find(|item| &item.product == product))
                .collect();
            if members.is_empty() {
                continue;
            }

            let combined: f64 = members.iter().map(|item| item.price).sum();
            let discounted = combined * (1.0 - offer.argument / 100.0);
            let amount = combined - discounted;
            if amount <= 0.0 {
                continue;
            }

            debug!(
                members = members.len(),
                combined,
                amount,
                "Applied bundle offer"
            );
            discounts.push(Discount::for_bundle(
                members.iter().map(|item| item.product.clone()).collect(),
                format!("bundle {}% off", offer.argument),
                amount,
            ));
        }

        discounts
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use crate::error::CoreError;
    use crate::types::ProductUnit;

    fn toothbrush() -> Product {
        Product::new("toothbrush", ProductUnit::Each)
    }

    fn apples() -> Product {
        Product::new("apples", ProductUnit::Kilo)
    }

    fn teller() -> Teller<InMemoryCatalog> {
        let mut catalog = InMemoryCatalog::new();
        catalog.add_product(toothbrush(), 0.99);
        catalog.add_product(apples(), 1.99);
        Teller::new(catalog)
    }

    #[test]
    fn test_later_offer_replaces_earlier() {
        let mut teller = teller();
        teller.add_special_offer(SpecialOfferType::ThreeForTwo, apples(), 0.0);
        teller.add_special_offer(SpecialOfferType::TwoForAmount, apples(), 3.5);

        let offer = teller.offer_for(&apples()).unwrap();
        assert_eq!(offer.offer_type, SpecialOfferType::TwoForAmount);

        let mut cart = ShoppingCart::new();
        cart.add_item_quantity(apples(), 2.0);
        let receipt = teller.checkout(&cart).unwrap();
        assert!((receipt.total_price() - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_bundled_offer_skips_product_registry() {
        let mut teller = teller();
        teller.add_special_offer_with_bundle(
            SpecialOfferType::FiveForAmount,
            apples(),
            10.0,
            Bundle::new([toothbrush(), apples()]),
        );

        assert!(teller.offer_for(&apples()).is_none());
        assert_eq!(teller.bundle_offers().len(), 1);
    }

    #[test]
    fn test_unbundled_sentinel_registers_as_product_offer() {
        let mut teller = teller();
        teller.add_special_offer_with_bundle(
            SpecialOfferType::TenPercentDiscount,
            toothbrush(),
            10.0,
            Bundle::none(),
        );

        assert!(teller.offer_for(&toothbrush()).is_some());
        assert!(teller.bundle_offers().is_empty());
    }

    #[test]
    fn test_bundle_overrides_product_offer() {
        let mut teller = teller();
        teller.add_special_offer(SpecialOfferType::TenPercentDiscount, toothbrush(), 50.0);
        teller.add_special_offer_with_bundle(
            SpecialOfferType::TenPercentDiscount,
            toothbrush(),
            10.0,
            Bundle::new([toothbrush(), apples()]),
        );

        let mut cart = ShoppingCart::new();
        cart.add_item_quantity(toothbrush(), 1.0);
        cart.add_item_quantity(apples(), 1.0);

        let receipt = teller.checkout(&cart).unwrap();
        assert_eq!(receipt.discounts().len(), 1);
        assert!(receipt.discounts()[0].product().is_none());
        assert!((receipt.total_price() - 2.98 * 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_bundle_suppresses_product_offer() {
        let mut teller = teller();
        teller.add_special_offer(SpecialOfferType::TenPercentDiscount, toothbrush(), 50.0);
        teller.add_special_offer_with_bundle(
            SpecialOfferType::TenPercentDiscount,
            apples(),
            10.0,
            Bundle::new([toothbrush(), apples()]),
        );

        let mut cart = ShoppingCart::new();
        cart.add_item_quantity(toothbrush(), 2.0);
        cart.add_item_quantity(apples(), 1.0);

        let receipt = teller.checkout(&cart).unwrap();
        assert!(receipt.discounts().is_empty());
        assert!((receipt.total_price() - 3.97).abs() < 1e-9);
    }

    #[test]
    fn test_bundle_with_no_members_in_cart_emits_nothing() {
        let mut teller = teller();
        teller.add_special_offer_with_bundle(
            SpecialOfferType::TenPercentDiscount,
            apples(),
            10.0,
            Bundle::new([apples()]),
        );

        let mut cart = ShoppingCart::new();
        cart.add_item_quantity(toothbrush(), 1.0);

        let receipt = teller.checkout(&cart).unwrap();
        assert!(receipt.discounts().is_empty());
    }

    #[test]
    fn test_offer_that_would_raise_price_is_not_applied() {
        let mut teller = teller();
        // Two toothbrushes cost 1.98; "2 for 5.00" is worse
        teller.add_special_offer(SpecialOfferType::TwoForAmount, toothbrush(), 5.0);

        let mut cart = ShoppingCart::new();
        cart.add_item_quantity(toothbrush(), 2.0);

        let receipt = teller.checkout(&cart).unwrap();
        assert!(receipt.discounts().is_empty());
        assert!((receipt.total_price() - 1.98).abs() < 1e-9);
    }

    #[test]
    fn test_catalog_miss_propagates() {
        let teller = teller();
        let rice = Product::new("rice", ProductUnit::Each);

        let mut cart = ShoppingCart::new();
        cart.add_item_quantity(rice.clone(), 1.0);

        let err = teller.checkout(&cart).unwrap_err();
        assert_eq!(err, CoreError::CatalogMiss { product: rice });
    }

    #[test]
    fn test_discounts_follow_cart_order() {
        let mut teller = teller();
        teller.add_special_offer(SpecialOfferType::TenPercentDiscount, apples(), 10.0);
        teller.add_special_offer(SpecialOfferType::TenPercentDiscount, toothbrush(), 10.0);

        let mut cart = ShoppingCart::new();
        cart.add_item_quantity(toothbrush(), 1.0);
        cart.add_item_quantity(apples(), 1.0);

        let receipt = teller.checkout(&cart).unwrap();
        let order: Vec<&str> = receipt
            .discounts()
            .iter()
            .filter_map(|d| d.product())
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(order, vec!["toothbrush", "apples"]);
    }

    #[test]
    fn test_teller_over_borrowed_catalog() {
        let mut catalog = InMemoryCatalog::new();
        catalog.add_product(apples(), 1.99);
        let teller = Teller::new(&catalog);

        let mut cart = ShoppingCart::new();
        cart.add_item_quantity(apples(), 1.0);

        assert!((teller.checkout(&cart).unwrap().total_price() - 1.99).abs() < 1e-9);
    }
}
