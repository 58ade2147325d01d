//! Basic formatting example.
//!
//! Demonstrates the default output and the effect of each display
//! option, one at a time.

use money_display::core::options::FormatOptions;
use money_display::format::{format, Formatter};

fn main() {
    println!("╔═══════════════════════════════════════════╗");
    println!("║  money-display: Basic Formatting Example  ║");
    println!("╚═══════════════════════════════════════════╝\n");

    // --- Scenario 1: Defaults ---
    println!("━━━ Scenario 1: Defaults ━━━\n");

    let defaults = FormatOptions::default();
    for amount in [10.0, 1000.0, 1234567.89, -9876.5, 0.999] {
        println!("  {:>12}  →  {}", amount, format(amount, &defaults).unwrap());
    }
    println!();

    // --- Scenario 2: One option at a time ---
    println!("━━━ Scenario 2: One Option at a Time ━━━\n");

    let variants = [
        (
            "with_cents: false",
            FormatOptions {
                with_cents: false,
                ..Default::default()
            },
        ),
        (
            "with_currency: true",
            FormatOptions {
                with_currency: true,
                ..Default::default()
            },
        ),
        (
            "with_symbol: false",
            FormatOptions {
                with_symbol: false,
                ..Default::default()
            },
        ),
        (
            "with_symbol_space: true",
            FormatOptions {
                with_symbol_space: true,
                ..Default::default()
            },
        ),
        (
            "with_thousands_separator: false",
            FormatOptions {
                with_thousands_separator: false,
                ..Default::default()
            },
        ),
    ];

    for (label, options) in &variants {
        println!("  {:<34} {}", label, format(1000.0, options).unwrap());
    }
    println!();

    // --- Scenario 3: A reused formatter ---
    println!("━━━ Scenario 3: Reusing a Formatter ━━━\n");

    let formatter = Formatter::new(FormatOptions {
        currency: "eur".to_string(),
        with_currency: true,
        ..Default::default()
    })
    .unwrap();

    for amount in [0.0, 49.99, 120000.0] {
        println!("  {:>10}  →  {}", amount, formatter.format(amount));
    }
}
