//! money-display CLI
//!
//! Format amounts from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Format a single amount
//! money-display format --amount 1234.56
//!
//! # Pick a currency and tweak display options
//! money-display format --amount 1234.56 --currency eur --iso
//!
//! # Format a batch of amounts from a JSON file
//! money-display format --input amounts.json
//!
//! # Output as JSON
//! money-display format --amount 1234.56 --format json
//!
//! # List the supported currencies
//! money-display currencies
//! ```

use money_display::core::currency::Currency;
use money_display::core::options::FormatOptions;
use money_display::format::Formatter;
use std::fs;
use std::process;

fn print_usage() {
    eprintln!(
        r#"money-display — locale-aware money display formatting

USAGE:
    money-display <COMMAND> [OPTIONS]

COMMANDS:
    format      Format one amount, or a batch from a JSON file
    currencies  List the supported currencies and their display rules
    help        Show this message

OPTIONS (format):
    --amount <N>        Amount to format
    --input <FILE>      Path to a JSON batch file (instead of --amount)
    --currency <CODE>   ISO currency code (default: usd)
    --no-cents          Omit the fractional part
    --iso               Append the ISO code after the amount
    --no-symbol         Omit the currency symbol
    --symbol-space      Insert a space between symbol and amount
    --no-thousands      Do not group integer digits
    --format <FORMAT>   Output format: text (default) or json

OPTIONS (currencies):
    --format <FORMAT>   Output format: text (default) or json

EXAMPLES:
    money-display format --amount 1234.56
    money-display format --amount 1234.56 --currency sek --symbol-space
    money-display format --input amounts.json --format json
    money-display currencies --format json"#
    );
}

/// JSON schema for batch input files.
#[derive(serde::Deserialize)]
struct BatchFile {
    amounts: Vec<f64>,
    #[serde(default)]
    options: serde_json::Value,
}

/// JSON output schema for formatted amounts.
#[derive(serde::Serialize)]
struct FormatOutput {
    amount: f64,
    currency: String,
    formatted: String,
}

fn load_batch(path: &str) -> (Vec<f64>, FormatOptions) {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", path, e);
        process::exit(1);
    });

    let file: BatchFile = serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing JSON: {}", e);
        eprintln!("Expected format:");
        eprintln!(
            r#"{{
  "amounts": [10, 1234.56, -99.9],
  "options": {{ "currency": "eur", "with_symbol_space": true }}
}}"#
        );
        process::exit(1);
    });

    let options = if file.options.is_null() {
        FormatOptions::default()
    } else {
        FormatOptions::from_json(&file.options.to_string()).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            process::exit(1);
        })
    };

    log::debug!("loaded {} amounts from {}", file.amounts.len(), path);
    (file.amounts, options)
}

fn cmd_format(args: &[String]) {
    let mut amount: Option<f64> = None;
    let mut input_path: Option<String> = None;
    let mut options = FormatOptions::default();
    let mut output = "text".to_string();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--amount" => {
                i += 1;
                amount = Some(
                    args.get(i)
                        .and_then(|s| s.parse().ok())
                        .unwrap_or_else(|| {
                            eprintln!("--amount requires a number");
                            process::exit(1);
                        }),
                );
            }
            "--input" => {
                i += 1;
                input_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--input requires a file path");
                    process::exit(1);
                }));
            }
            "--currency" => {
                i += 1;
                options.currency = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--currency requires an ISO code");
                    process::exit(1);
                });
            }
            "--no-cents" => options.with_cents = false,
            "--iso" => options.with_currency = true,
            "--no-symbol" => options.with_symbol = false,
            "--symbol-space" => options.with_symbol_space = true,
            "--no-thousands" => options.with_thousands_separator = false,
            "--format" => {
                i += 1;
                output = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--format requires 'text' or 'json'");
                    process::exit(1);
                });
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let amounts = match (amount, input_path) {
        (Some(value), None) => vec![value],
        (None, Some(path)) => {
            let (amounts, file_options) = load_batch(&path);
            options = file_options;
            amounts
        }
        (Some(_), Some(_)) => {
            eprintln!("Error: --amount and --input are mutually exclusive");
            process::exit(1);
        }
        (None, None) => {
            eprintln!("Error: either --amount <N> or --input <FILE> is required");
            process::exit(1);
        }
    };

    let formatter = Formatter::new(options).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });
    log::debug!("formatting in {}", formatter.currency());

    if output == "json" {
        let results: Vec<FormatOutput> = amounts
            .iter()
            .map(|&value| FormatOutput {
                amount: value,
                currency: formatter.currency().iso_code.to_string(),
                formatted: formatter.format(value),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&results).unwrap());
    } else {
        for &value in &amounts {
            println!("{}", formatter.format(value));
        }
    }
}

fn cmd_currencies(args: &[String]) {
    let mut output = "text".to_string();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--format" => {
                i += 1;
                output = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--format requires 'text' or 'json'");
                    process::exit(1);
                });
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    if output == "json" {
        println!(
            "{}",
            serde_json::to_string_pretty(Currency::all()).unwrap()
        );
    } else {
        println!(
            "{:<6} {:<6} {:<10} {:<8} {:<10} {}",
            "CODE", "SYMBOL", "SUBUNIT", "FIRST", "THOUSANDS", "DECIMAL"
        );
        for currency in Currency::all() {
            println!(
                "{:<6} {:<6} {:<10} {:<8} {:<10} {}",
                currency.iso_code,
                currency.symbol,
                currency.subunit.unwrap_or("-"),
                currency.symbol_first,
                format!("'{}'", currency.thousands_separator),
                format!("'{}'", currency.decimal_mark),
            );
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "format" => cmd_format(rest),
        "currencies" => cmd_currencies(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
