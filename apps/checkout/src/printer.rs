//! # Receipt Printer
//!
//! Renders a [`Receipt`] as fixed-width text. This is the only place
//! amounts are rounded.
//!
//! ## Layout (width 40)
//! ```text
//!               Supermarket
//! ----------------------------------------
//! toothbrush                          2.97
//!   3 x 0.99
//! apples                              1.99
//! 3 for 2 (toothbrush)               -0.99
//! ----------------------------------------
//! Total:                              3.97
//! ```

use supermarket_core::{Receipt, ReceiptItem};

use crate::config::CheckoutConfig;

/// Fixed-width text receipt renderer.
#[derive(Debug, Clone)]
pub struct ReceiptPrinter {
    store_name: String,
    currency_symbol: String,
    decimals: usize,
    width: usize,
}

impl ReceiptPrinter {
    pub fn from_config(config: &CheckoutConfig) -> Self {
        ReceiptPrinter {
            store_name: config.store_name.clone(),
            currency_symbol: config.currency_symbol.clone(),
            decimals: usize::from(config.currency_decimals),
            width: usize::from(config.paper_width),
        }
    }

    /// Renders the whole receipt.
    pub fn render(&self, receipt: &Receipt) -> String {
        let mut out = String::new();
        let rule = "-".repeat(self.width);

        if !self.store_name.is_empty() {
            out.push_str(&format!("{:^width$}", self.store_name, width = self.width));
            out.push('\n');
            out.push_str(&rule);
            out.push('\n');
        }

        for item in receipt.items() {
            out.push_str(&self.item_lines(item));
        }

        for discount in receipt.discounts() {
            let label = format!("{} ({})", discount.description, discount.target);
            let amount = format!("-{}", self.amount(discount.discount_amount));
            out.push_str(&self.columns(&label, &amount));
        }

        out.push_str(&rule);
        out.push('\n');
        out.push_str(&self.columns("Total:", &self.amount(receipt.total_price())));
        out
    }

    fn item_lines(&self, item: &ReceiptItem) -> String {
        let mut lines = self.columns(&item.product.name, &self.amount(item.total_price));

        if item.quantity != 1.0 {
            lines.push_str(&format!(
                "  {} x {}\n",
                self.quantity(item),
                self.amount(item.price)
            ));
        }

        lines
    }

    fn quantity(&self, item: &ReceiptItem) -> String {
        if item.product.is_weighed() {
            format!("{:.3}", item.quantity)
        } else {
            format!("{}", item.quantity)
        }
    }

    /// Values that round to zero print unsigned.
    fn amount(&self, value: f64) -> String {
        let digits = format!("{:.*}", self.decimals, value);
        let digits = match digits.strip_prefix('-') {
            Some(unsigned) if unsigned.chars().all(|c| c == '0' || c == '.') => unsigned,
            _ => digits.as_str(),
        };
        format!("{}{}", self.currency_symbol, digits)
    }

    /// Label left, value right, one line.
    fn columns(&self, label: &str, value: &str) -> String {
        let used = label.chars().count() + value.chars().count();
        let padding = self.width.saturating_sub(used).max(1);
        format!("{}{}{}\n", label, " ".repeat(padding), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use supermarket_core::{Discount, Product, ProductUnit};

    impl ReceiptPrinter {
        fn new(width: usize, decimals: usize) -> Self {
            ReceiptPrinter {
                store_name: String::new(),
                currency_symbol: String::new(),
                decimals,
                width,
            }
        }
    }

    fn sample() -> Receipt {
        let toothbrush = Product::new("toothbrush", ProductUnit::Each);
        let apples = Product::new("apples", ProductUnit::Kilo);
        Receipt::new(
            vec![
                ReceiptItem::new(toothbrush.clone(), 3.0, 0.99),
                ReceiptItem::new(apples, 1.0, 1.99),
            ],
            vec![Discount::for_product(toothbrush, "3 for 2", 0.99)],
        )
    }

    #[test]
    fn test_render_layout() {
        let text = ReceiptPrinter::new(40, 2).render(&sample());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], format!("toothbrush{}2.97", " ".repeat(26)));
        assert_eq!(lines[1], "  3 x 0.99");
        assert_eq!(lines[2], format!("apples{}1.99", " ".repeat(30)));
        assert_eq!(lines[3], format!("3 for 2 (toothbrush){}-0.99", " ".repeat(15)));
        assert_eq!(lines[4], "-".repeat(40));
        assert_eq!(lines[5], format!("Total:{}3.97", " ".repeat(30)));
        assert!(lines.iter().all(|l| l.chars().count() <= 40));
    }

    #[test]
    fn test_header_and_currency_from_config() {
        let config = CheckoutConfig {
            store_name: "Corner Shop".to_string(),
            currency_symbol: "€".to_string(),
            paper_width: 32,
            ..CheckoutConfig::default()
        };

        let text = ReceiptPrinter::from_config(&config).render(&sample());
        assert!(text.starts_with(&format!("{:^32}\n", "Corner Shop")));
        assert!(text.ends_with("€3.97\n"));
    }

    #[test]
    fn test_weighed_quantity_uses_three_decimals() {
        let apples = Product::new("apples", ProductUnit::Kilo);
        let receipt = Receipt::new(vec![ReceiptItem::new(apples, 1.25, 2.0)], vec![]);

        let text = ReceiptPrinter::new(30, 2).render(&receipt);
        assert!(text.contains("  1.250 x 2.00\n"));
    }

    #[test]
    fn test_long_label_keeps_one_space() {
        let printer = ReceiptPrinter::new(20, 2);
        assert_eq!(
            printer.columns("a very long product name", "1.00"),
            "a very long product name 1.00\n"
        );
    }

    #[test]
    fn test_amount_rounding_to_zero_is_unsigned() {
        let printer = ReceiptPrinter::new(40, 2);
        assert_eq!(printer.amount(-0.001), "0.00");
        assert_eq!(printer.amount(-0.0), "0.00");
        assert_eq!(printer.amount(-0.01), "-0.01");
        assert_eq!(ReceiptPrinter::new(40, 0).amount(-0.4), "0");
    }

    #[test]
    fn test_total_just_below_zero_prints_zero() {
        let bag = Product::new("bag", ProductUnit::Each);
        let receipt = Receipt::new(
            vec![ReceiptItem::new(bag.clone(), 1.0, 0.10)],
            vec![Discount::for_product(bag, "free bag", 0.1000001)],
        );

        let text = ReceiptPrinter::new(30, 2).render(&receipt);
        assert!(text.ends_with(&format!("Total:{}0.00\n", " ".repeat(20))));
        assert!(!text.contains("-0.00"));
    }
}
