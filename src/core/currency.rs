use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors arising from formatter configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown currency code '{code}'")]
    UnknownCurrency { code: String },
    #[error("invalid display options: {0}")]
    InvalidOptions(String),
}

/// Display metadata for a single currency.
///
/// One record per supported ISO 4217 code: how the currency writes its
/// symbol, where the symbol sits relative to the amount, and which
/// characters separate thousands groups and mark the decimal point.
/// A `subunit` of `None` marks a zero-decimal currency (e.g. JPY) that
/// never displays a fractional part.
///
/// The full table is compiled into the binary and is never mutated, so
/// records can be shared freely across threads.
///
/// # Examples
///
/// ```
/// use money_display::core::currency::Currency;
///
/// let eur = Currency::resolve("eur").unwrap();
/// assert_eq!(eur.symbol, "€");
/// assert!(eur.symbol_first);
///
/// let jpy = Currency::resolve("JPY").unwrap();
/// assert!(jpy.is_zero_decimal());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Currency {
    /// Canonical ISO 4217 code, upper-case.
    pub iso_code: &'static str,
    /// Display symbol ("$", "€", "kr", ...).
    pub symbol: &'static str,
    /// Name of the fractional denomination, or `None` for
    /// zero-decimal currencies.
    pub subunit: Option<&'static str>,
    /// Whether the symbol is written before the amount.
    pub symbol_first: bool,
    /// Grouping string inserted every three integer digits.
    pub thousands_separator: &'static str,
    /// String separating the integer and fractional parts.
    pub decimal_mark: &'static str,
}

impl Currency {
    /// Look up a currency record by ISO code, case-insensitively.
    ///
    /// An unknown code is a configuration error, never a fallback to
    /// some default currency.
    pub fn resolve(code: &str) -> Result<&'static Currency, ConfigError> {
        CURRENCIES
            .iter()
            .find(|c| c.iso_code.eq_ignore_ascii_case(code))
            .ok_or_else(|| ConfigError::UnknownCurrency {
                code: code.to_string(),
            })
    }

    /// The full metadata table, in ISO-code order.
    pub fn all() -> &'static [Currency] {
        CURRENCIES
    }

    /// Whether this currency has no fractional denomination.
    pub fn is_zero_decimal(&self) -> bool {
        self.subunit.is_none()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iso_code)
    }
}

/// The static currency metadata table.
///
/// Fixed data asset: separators and marks follow each currency's
/// conventional written form, not a runtime locale.
static CURRENCIES: &[Currency] = &[
    Currency {
        iso_code: "AUD",
        symbol: "$",
        subunit: Some("Cent"),
        symbol_first: true,
        thousands_separator: ",",
        decimal_mark: ".",
    },
    Currency {
        iso_code: "BRL",
        symbol: "R$",
        subunit: Some("Centavo"),
        symbol_first: true,
        thousands_separator: ".",
        decimal_mark: ",",
    },
    Currency {
        iso_code: "CAD",
        symbol: "$",
        subunit: Some("Cent"),
        symbol_first: true,
        thousands_separator: ",",
        decimal_mark: ".",
    },
    Currency {
        iso_code: "CHF",
        symbol: "CHF",
        subunit: Some("Rappen"),
        symbol_first: true,
        thousands_separator: "'",
        decimal_mark: ".",
    },
    Currency {
        iso_code: "CLP",
        symbol: "$",
        subunit: None,
        symbol_first: true,
        thousands_separator: ".",
        decimal_mark: ",",
    },
    Currency {
        iso_code: "CNY",
        symbol: "¥",
        subunit: Some("Fen"),
        symbol_first: true,
        thousands_separator: ",",
        decimal_mark: ".",
    },
    Currency {
        iso_code: "CZK",
        symbol: "Kč",
        subunit: Some("Haléř"),
        symbol_first: false,
        thousands_separator: " ",
        decimal_mark: ",",
    },
    Currency {
        iso_code: "DKK",
        symbol: "kr",
        subunit: Some("Øre"),
        symbol_first: false,
        thousands_separator: ".",
        decimal_mark: ",",
    },
    Currency {
        iso_code: "EUR",
        symbol: "€",
        subunit: Some("Cent"),
        symbol_first: true,
        thousands_separator: ",",
        decimal_mark: ".",
    },
    Currency {
        iso_code: "GBP",
        symbol: "£",
        subunit: Some("Penny"),
        symbol_first: true,
        thousands_separator: ",",
        decimal_mark: ".",
    },
    Currency {
        iso_code: "HKD",
        symbol: "$",
        subunit: Some("Cent"),
        symbol_first: true,
        thousands_separator: ",",
        decimal_mark: ".",
    },
    Currency {
        iso_code: "HUF",
        symbol: "Ft",
        subunit: Some("Fillér"),
        symbol_first: false,
        thousands_separator: " ",
        decimal_mark: ",",
    },
    Currency {
        iso_code: "IDR",
        symbol: "Rp",
        subunit: Some("Sen"),
        symbol_first: true,
        thousands_separator: ".",
        decimal_mark: ",",
    },
    Currency {
        iso_code: "ILS",
        symbol: "₪",
        subunit: Some("Agora"),
        symbol_first: true,
        thousands_separator: ",",
        decimal_mark: ".",
    },
    Currency {
        iso_code: "INR",
        symbol: "₹",
        subunit: Some("Paisa"),
        symbol_first: true,
        thousands_separator: ",",
        decimal_mark: ".",
    },
    Currency {
        iso_code: "ISK",
        symbol: "kr",
        subunit: None,
        symbol_first: false,
        thousands_separator: ".",
        decimal_mark: ",",
    },
    Currency {
        iso_code: "JPY",
        symbol: "¥",
        subunit: None,
        symbol_first: true,
        thousands_separator: ",",
        decimal_mark: ".",
    },
    Currency {
        iso_code: "KRW",
        symbol: "₩",
        subunit: None,
        symbol_first: true,
        thousands_separator: ",",
        decimal_mark: ".",
    },
    Currency {
        iso_code: "MXN",
        symbol: "$",
        subunit: Some("Centavo"),
        symbol_first: true,
        thousands_separator: ",",
        decimal_mark: ".",
    },
    Currency {
        iso_code: "NOK",
        symbol: "kr",
        subunit: Some("Øre"),
        symbol_first: false,
        thousands_separator: ".",
        decimal_mark: ",",
    },
    Currency {
        iso_code: "NZD",
        symbol: "$",
        subunit: Some("Cent"),
        symbol_first: true,
        thousands_separator: ",",
        decimal_mark: ".",
    },
    Currency {
        iso_code: "PHP",
        symbol: "₱",
        subunit: Some("Centavo"),
        symbol_first: true,
        thousands_separator: ",",
        decimal_mark: ".",
    },
    Currency {
        iso_code: "PLN",
        symbol: "zł",
        subunit: Some("Grosz"),
        symbol_first: false,
        thousands_separator: " ",
        decimal_mark: ",",
    },
    Currency {
        iso_code: "RUB",
        symbol: "₽",
        subunit: Some("Kopek"),
        symbol_first: false,
        thousands_separator: ".",
        decimal_mark: ",",
    },
    Currency {
        iso_code: "SEK",
        symbol: "kr",
        subunit: Some("Öre"),
        symbol_first: false,
        thousands_separator: " ",
        decimal_mark: ",",
    },
    Currency {
        iso_code: "SGD",
        symbol: "$",
        subunit: Some("Cent"),
        symbol_first: true,
        thousands_separator: ",",
        decimal_mark: ".",
    },
    Currency {
        iso_code: "THB",
        symbol: "฿",
        subunit: Some("Satang"),
        symbol_first: true,
        thousands_separator: ",",
        decimal_mark: ".",
    },
    Currency {
        iso_code: "TRY",
        symbol: "₺",
        subunit: Some("Kuruş"),
        symbol_first: true,
        thousands_separator: ".",
        decimal_mark: ",",
    },
    Currency {
        iso_code: "USD",
        symbol: "$",
        subunit: Some("Cent"),
        symbol_first: true,
        thousands_separator: ",",
        decimal_mark: ".",
    },
    Currency {
        iso_code: "VND",
        symbol: "₫",
        subunit: None,
        symbol_first: false,
        thousands_separator: ".",
        decimal_mark: ",",
    },
    Currency {
        iso_code: "ZAR",
        symbol: "R",
        subunit: Some("Cent"),
        symbol_first: true,
        thousands_separator: " ",
        decimal_mark: ".",
    },
];
