use money_display::core::currency::{ConfigError, Currency};
use money_display::core::options::FormatOptions;
use money_display::format::{format, Formatter};

fn with_currency(code: &str) -> FormatOptions {
    FormatOptions {
        currency: code.to_string(),
        ..Default::default()
    }
}

/// Zero formats as symbol + zero (+ two zero cents where the currency
/// has a subunit) for every supported currency.
#[test]
fn zero_with_defaults_for_every_currency() {
    for currency in Currency::all() {
        let formatted = format(0.0, &with_currency(currency.iso_code)).unwrap();

        let amount = if currency.is_zero_decimal() {
            "0".to_string()
        } else {
            format!("0{}00", currency.decimal_mark)
        };
        let expected = if currency.symbol_first {
            format!("{}{}", currency.symbol, amount)
        } else {
            format!("{}{}", amount, currency.symbol)
        };
        assert_eq!(formatted, expected, "currency {}", currency.iso_code);
    }
}

#[test]
fn documented_defaults() {
    assert_eq!(format(10.0, &FormatOptions::default()).unwrap(), "$10.00");
    assert_eq!(format(10.0, &with_currency("eur")).unwrap(), "€10.00");
}

#[test]
fn option_effects_one_by_one() {
    let no_cents = FormatOptions {
        with_cents: false,
        ..Default::default()
    };
    assert_eq!(format(10.0, &no_cents).unwrap(), "$10");

    let iso = FormatOptions {
        with_currency: true,
        ..Default::default()
    };
    assert_eq!(format(10.0, &iso).unwrap(), "$10.00 USD");

    let no_symbol = FormatOptions {
        with_symbol: false,
        ..Default::default()
    };
    assert_eq!(format(10.0, &no_symbol).unwrap(), "10.00");

    let spaced = FormatOptions {
        with_symbol_space: true,
        ..Default::default()
    };
    assert_eq!(format(10.0, &spaced).unwrap(), "$ 10.00");

    assert_eq!(format(1000.0, &FormatOptions::default()).unwrap(), "$1,000.00");
    let ungrouped = FormatOptions {
        with_thousands_separator: false,
        ..Default::default()
    };
    assert_eq!(format(1000.0, &ungrouped).unwrap(), "$1000.00");
}

/// The carry at the rounding boundary must propagate into the integer
/// part: 0.999 is one dollar, not "$0.100".
#[test]
fn rounding_boundary_carries() {
    assert_eq!(format(0.999, &FormatOptions::default()).unwrap(), "$1.00");
    assert_eq!(
        format(999.995, &FormatOptions::default()).unwrap(),
        "$1,000.00"
    );
}

#[test]
fn zero_decimal_currency_never_shows_cents() {
    let jpy = with_currency("jpy");
    assert_eq!(format(1500.0, &jpy).unwrap(), "¥1,500");
    assert_eq!(format(1234.56, &jpy).unwrap(), "¥1,234");

    // with_cents explicitly on changes nothing for JPY.
    let forced = FormatOptions {
        currency: "jpy".to_string(),
        with_cents: true,
        ..Default::default()
    };
    assert!(!format(1234.56, &forced).unwrap().contains('.'));
}

#[test]
fn negative_amounts() {
    assert_eq!(
        format(-1234.56, &FormatOptions::default()).unwrap(),
        "$-1,234.56"
    );

    let sek = FormatOptions {
        currency: "sek".to_string(),
        with_symbol_space: true,
        ..Default::default()
    };
    assert_eq!(format(-1234.5, &sek).unwrap(), "-1 234,50 kr");

    let iso = FormatOptions {
        with_currency: true,
        ..Default::default()
    };
    assert_eq!(format(-10.0, &iso).unwrap(), "$-10.00 USD");

    // A magnitude that rounds to zero drops the sign.
    assert_eq!(format(-0.001, &FormatOptions::default()).unwrap(), "$0.00");
}

#[test]
fn currency_resolution_is_case_insensitive() {
    for code in ["usd", "USD", "Usd"] {
        assert_eq!(format(1.0, &with_currency(code)).unwrap(), "$1.00");
    }
}

#[test]
fn unknown_currency_is_rejected() {
    let err = format(10.0, &with_currency("xyz")).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownCurrency { .. }));
    assert_eq!(err.to_string(), "unknown currency code 'xyz'");
}

#[test]
fn option_documents_are_validated_at_the_boundary() {
    let options = FormatOptions::from_json(
        r#"{"currency": "eur", "with_symbol_space": true, "with_currency": true}"#,
    )
    .unwrap();
    assert_eq!(format(1234567.891, &options).unwrap(), "€ 1,234,567.89 EUR");

    assert!(matches!(
        FormatOptions::from_json(r#"{"with_centz": true}"#).unwrap_err(),
        ConfigError::InvalidOptions(_)
    ));
    assert!(matches!(
        FormatOptions::from_json(r#"{"with_cents": "yes"}"#).unwrap_err(),
        ConfigError::InvalidOptions(_)
    ));
}

/// Full pipeline over a reused formatter: splitting, grouping, cents,
/// sign, symbol, and ISO suffix all composed.
#[test]
fn full_composition_with_reused_formatter() {
    let formatter = Formatter::new(FormatOptions {
        currency: "brl".to_string(),
        with_currency: true,
        ..Default::default()
    })
    .unwrap();

    assert_eq!(formatter.currency().iso_code, "BRL");
    assert_eq!(formatter.format(0.0), "R$0,00 BRL");
    assert_eq!(formatter.format(1234567.89), "R$1.234.567,89 BRL");
    assert_eq!(formatter.format(-9876.5), "R$-9.876,50 BRL");
}
