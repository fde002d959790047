//! # Scenario Files
//!
//! A scenario is one checkout described in TOML: the catalog, the offers
//! registered on the teller, and the cart.
//!
//! ## File Format
//! ```toml
//! [[products]]
//! name = "toothbrush"
//! unit = "each"            # each | kilo
//! price = 0.99
//!
//! [[offers]]
//! type = "three_for_two"   # ten_percent_discount | three_for_two
//!                          # two_for_amount | five_for_amount
//! product = "toothbrush"
//! argument = 0.0
//! bundle = ["toothbrush", "toothpaste"]   # optional
//!
//! [[cart]]
//! product = "toothbrush"
//! quantity = 3
//! ```
//!
//! Offers and cart lines apply in file order, so a later offer for the same
//! product replaces an earlier one and a later cart line replaces the
//! quantity of an earlier one.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use supermarket_core::validation::{
    validate_percentage, validate_product_name, validate_quantity, validate_unit_price,
    ValidationResult,
};
use supermarket_core::{
    Bundle, CoreResult, InMemoryCatalog, Product, ProductUnit, Receipt, ShoppingCart,
    SpecialOffer, SpecialOfferType, Teller,
};

use crate::error::ScenarioError;

// =============================================================================
// File Shape
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScenarioFile {
    #[serde(default)]
    products: Vec<ProductEntry>,
    #[serde(default)]
    offers: Vec<OfferEntry>,
    #[serde(default)]
    cart: Vec<CartEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProductEntry {
    name: String,
    unit: ProductUnit,
    price: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OfferEntry {
    #[serde(rename = "type")]
    offer_type: SpecialOfferType,
    product: String,
    #[serde(default)]
    argument: f64,
    #[serde(default)]
    bundle: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CartEntry {
    product: String,
    quantity: f64,
}

// =============================================================================
// Resolved Scenario
// =============================================================================

/// A scenario with product names resolved.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub catalog: InMemoryCatalog,

    /// Offers in registration order.
    pub offers: Vec<SpecialOffer>,

    pub cart: ShoppingCart,
}

impl Scenario {
    /// Reads and resolves a scenario file.
    pub fn load(path: &Path, strict: bool) -> Result<Self, ScenarioError> {
        let text = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Scenario::parse(&text, strict)
    }

    /// Resolves scenario text.
    ///
    /// With `strict`, negative quantities, negative prices and percentages
    /// outside 0..=100 are rejected. Otherwise they are logged and passed
    /// through to the core unchanged.
    pub fn parse(text: &str, strict: bool) -> Result<Self, ScenarioError> {
        let file: ScenarioFile = toml::from_str(text)?;

        let mut products: HashMap<String, Product> = HashMap::new();
        let mut catalog = InMemoryCatalog::new();
        for entry in file.products {
            validate_product_name(&entry.name)?;
            check(strict, validate_unit_price(entry.price))?;

            let product = Product::new(entry.name.clone(), entry.unit);
            if products.insert(entry.name.clone(), product.clone()).is_some() {
                return Err(ScenarioError::DuplicateProduct(entry.name));
            }
            catalog.add_product(product, entry.price);
        }

        let lookup = |name: &str, context: String| -> Result<Product, ScenarioError> {
            products
                .get(name)
                .cloned()
                .ok_or_else(|| ScenarioError::UnknownProduct {
                    name: name.to_string(),
                    context,
                })
        };

        let mut offers = Vec::with_capacity(file.offers.len());
        for (index, entry) in file.offers.into_iter().enumerate() {
            let product = lookup(entry.product.as_str(), format!("offer {}", index + 1))?;
            let mut offer = SpecialOffer::new(entry.offer_type, product, entry.argument);

            if let Some(names) = entry.bundle {
                let members = names
                    .iter()
                    .map(|name| lookup(name.as_str(), format!("bundle of offer {}", index + 1)))
                    .collect::<Result<Vec<_>, _>>()?;
                offer = offer.with_bundle(Bundle::new(members));
            }

            if offer.is_bundled() || offer.offer_type == SpecialOfferType::TenPercentDiscount {
                check(strict, validate_percentage(offer.argument))?;
            }
            offers.push(offer);
        }

        let mut cart = ShoppingCart::new();
        for (index, entry) in file.cart.into_iter().enumerate() {
            let product = lookup(entry.product.as_str(), format!("cart line {}", index + 1))?;
            check(strict, validate_quantity(&product, entry.quantity))?;

            if let Some(previous) = cart.quantity_of(&product) {
                debug!(product = %product, previous, quantity = entry.quantity, "Cart line replaced");
            }
            cart.add_item_quantity(product, entry.quantity);
        }

        Ok(Scenario {
            catalog,
            offers,
            cart,
        })
    }

    /// Registers the offers on a teller over this scenario's catalog and
    /// checks out the cart.
    pub fn checkout(&self) -> CoreResult<Receipt> {
        let mut teller = Teller::new(&self.catalog);
        for offer in &self.offers {
            teller.register(offer.clone());
        }
        teller.checkout(&self.cart)
    }
}

/// Fails in strict mode, logs and continues otherwise.
fn check(strict: bool, result: ValidationResult<()>) -> Result<(), ScenarioError> {
    match result {
        Ok(()) => Ok(()),
        Err(err) if strict => Err(err.into()),
        Err(err) => {
            warn!(error = %err, "Passing invalid value through");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const WEEKLY: &str = r#"
        [[products]]
        name = "toothbrush"
        unit = "each"
        price = 0.99

        [[products]]
        name = "apples"
        unit = "kilo"
        price = 1.99

        [[offers]]
        type = "ten_percent_discount"
        product = "toothbrush"
        argument = 10.0

        [[cart]]
        product = "toothbrush"
        quantity = 1
    "#;

    #[test]
    fn test_parse_and_checkout() {
        let scenario = Scenario::parse(WEEKLY, false).unwrap();

        assert_eq!(scenario.catalog.len(), 2);
        assert_eq!(scenario.offers.len(), 1);

        let receipt = scenario.checkout().unwrap();
        assert!((receipt.total_price() - 0.891).abs() < 1e-9);
    }

    #[test]
    fn test_bundle_offer() {
        let text = r#"
            [[products]]
            name = "toothbrush"
            unit = "each"
            price = 0.99

            [[products]]
            name = "apples"
            unit = "kilo"
            price = 1.99

            [[offers]]
            type = "five_for_amount"
            product = "apples"
            argument = 10.0
            bundle = ["toothbrush", "apples"]

            [[cart]]
            product = "toothbrush"
            quantity = 1

            [[cart]]
            product = "apples"
            quantity = 1
        "#;

        let scenario = Scenario::parse(text, true).unwrap();
        assert!(scenario.offers[0].is_bundled());

        let receipt = scenario.checkout().unwrap();
        assert!((receipt.total_price() - 2.682).abs() < 1e-9);
    }

    #[test]
    fn test_later_cart_line_replaces_quantity() {
        let text = format!("{WEEKLY}\n[[cart]]\nproduct = \"toothbrush\"\nquantity = 4\n");
        let scenario = Scenario::parse(&text, false).unwrap();

        assert_eq!(scenario.cart.item_count(), 1);
        assert_eq!(
            scenario.cart.quantity_of(&Product::new("toothbrush", ProductUnit::Each)),
            Some(4.0)
        );
    }

    #[test]
    fn test_unknown_product_in_cart() {
        let text = format!("{WEEKLY}\n[[cart]]\nproduct = \"kiwi\"\nquantity = 1\n");
        let err = Scenario::parse(&text, false).unwrap_err();

        match err {
            ScenarioError::UnknownProduct { name, context } => {
                assert_eq!(name, "kiwi");
                assert_eq!(context, "cart line 2");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_product() {
        let text = format!("{WEEKLY}\n[[products]]\nname = \"apples\"\nunit = \"kilo\"\nprice = 2.5\n");
        assert!(matches!(
            Scenario::parse(&text, false),
            Err(ScenarioError::DuplicateProduct(name)) if name == "apples"
        ));
    }

    #[test]
    fn test_misspelled_key_is_rejected() {
        let offer = "\n[[offers]]\ntype = \"ten_percent_discount\"\nproduct = \"apples\"\nargumnet = 10.0\n";
        let text = format!("{WEEKLY}{offer}");
        assert!(matches!(
            Scenario::parse(&text, false),
            Err(ScenarioError::Parse(_))
        ));

        let text = format!("{WEEKLY}\n[[cart]]\nproduct = \"apples\"\nquantity = 1\nqty = 2\n");
        assert!(matches!(
            Scenario::parse(&text, false),
            Err(ScenarioError::Parse(_))
        ));
    }

    #[test]
    fn test_negative_quantity_strict_and_lenient() {
        let text = format!("{WEEKLY}\n[[cart]]\nproduct = \"apples\"\nquantity = -1.0\n");

        assert!(matches!(
            Scenario::parse(&text, true),
            Err(ScenarioError::Validation(_))
        ));

        let scenario = Scenario::parse(&text, false).unwrap();
        let receipt = scenario.checkout().unwrap();
        assert!((receipt.total_price() - (0.891 - 1.99)).abs() < 1e-9);
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(WEEKLY.as_bytes()).unwrap();

        let scenario = Scenario::load(file.path(), false).unwrap();
        assert_eq!(scenario.cart.item_count(), 1);

        let missing = Scenario::load(Path::new("/nonexistent/scenario.toml"), false);
        assert!(matches!(missing, Err(ScenarioError::Io { .. })));
    }
}
