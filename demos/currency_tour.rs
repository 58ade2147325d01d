//! Currency tour example.
//!
//! Formats the same amount in every supported currency to show the
//! per-currency symbol, separator, and decimal-mark rules.

use money_display::core::currency::Currency;
use money_display::core::options::FormatOptions;
use money_display::format::Formatter;

fn main() {
    println!("╔══════════════════════════════════════╗");
    println!("║  money-display: Currency Tour        ║");
    println!("╚══════════════════════════════════════╝\n");

    let amount = 1234567.89;
    println!("Formatting {} in every supported currency:\n", amount);

    for currency in Currency::all() {
        let formatter = Formatter::new(FormatOptions {
            currency: currency.iso_code.to_string(),
            with_symbol_space: !currency.symbol_first,
            ..Default::default()
        })
        .unwrap();

        let subunit = currency.subunit.unwrap_or("(zero-decimal)");
        println!(
            "  {:<4} {:<20} {}",
            currency.iso_code,
            formatter.format(amount),
            subunit
        );
    }
}
