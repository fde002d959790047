//! Runs the shipped sample scenario end to end.

use std::path::PathBuf;

use supermarket_checkout::cli::Cli;
use supermarket_checkout::config::OutputFormat;

fn sample_scenario() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios/weekly_specials.toml")
}

fn cli(format: OutputFormat) -> Cli {
    Cli {
        scenario: sample_scenario(),
        config: None,
        format: Some(format),
        verbose: false,
    }
}

#[test]
fn json_receipt_for_weekly_specials() {
    let output = supermarket_checkout::run(&cli(OutputFormat::Json)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    // bundle (0.99 + 1.79) × 0.9 + apples 1.25 kg × 1.99 × 0.8
    // + rice 2 × 2.49 + tomatoes 2 × 0.99 + 0.69
    let total = json["total"].as_f64().unwrap();
    assert!((total - 12.142).abs() < 1e-9, "total was {total}");

    let discounts = json["discounts"].as_array().unwrap();
    assert_eq!(discounts.len(), 4);
    // Product discounts in cart order, bundle discount last
    assert_eq!(discounts[0]["target"]["product"]["name"], "apples");
    assert_eq!(discounts[3]["target"]["kind"], "bundle");
}

#[test]
fn text_receipt_for_weekly_specials() {
    let output = supermarket_checkout::run(&cli(OutputFormat::Text)).unwrap();

    assert!(output.contains("3 for 2 (rice)"));
    assert!(output.contains("bundle 10% off (bundle [toothbrush, toothpaste])"));
    let last = output.lines().last().unwrap();
    assert!(last.starts_with("Total:") && last.ends_with("12.14"));
}
