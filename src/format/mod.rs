//! Value splitting, thousands grouping, symbol placement, and the
//! top-level [`Formatter`] that assembles them.

pub mod group;
pub mod split;
pub mod symbol;

use crate::core::currency::{ConfigError, Currency};
use crate::core::options::FormatOptions;
use crate::format::group::group_thousands;
use crate::format::split::split_value;
use crate::format::symbol::place_symbol;

/// A money formatter bound to one currency and option set.
///
/// Construction resolves the currency record and is the only place a
/// configuration error can surface; formatting itself always produces
/// a string. Build one formatter and reuse it across amounts.
///
/// # Examples
///
/// ```
/// use money_display::core::options::FormatOptions;
/// use money_display::format::Formatter;
///
/// let formatter = Formatter::new(FormatOptions::default()).unwrap();
/// assert_eq!(formatter.format(1000.0), "$1,000.00");
/// assert_eq!(formatter.format(-1234.56), "$-1,234.56");
///
/// let eur = Formatter::new(FormatOptions {
///     currency: "eur".to_string(),
///     with_currency: true,
///     ..Default::default()
/// })
/// .unwrap();
/// assert_eq!(eur.format(10.0), "€10.00 EUR");
/// ```
#[derive(Debug, Clone)]
pub struct Formatter {
    currency: &'static Currency,
    options: FormatOptions,
}

impl Formatter {
    /// Build a formatter, resolving the currency named in `options`.
    pub fn new(options: FormatOptions) -> Result<Self, ConfigError> {
        let currency = options.resolve_currency()?;
        Ok(Self { currency, options })
    }

    /// The resolved currency record.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// The options this formatter was built with.
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Format one amount.
    ///
    /// Assembly order is fixed: split, group the integer digits, append
    /// decimal mark and cents, re-attach the sign, place the symbol,
    /// append the ISO code. Each step operates on the previous step's
    /// output.
    pub fn format(&self, value: f64) -> String {
        let split = split_value(value);

        let mut result = if self.options.with_thousands_separator {
            group_thousands(&split.integer, self.currency.thousands_separator)
        } else {
            split.integer
        };

        // Zero-decimal currencies never display a fractional part,
        // regardless of with_cents.
        if self.options.with_cents && self.currency.subunit.is_some() {
            result.push_str(self.currency.decimal_mark);
            result.push_str(&split.fractional);
        }

        if split.negative {
            result.insert(0, '-');
        }

        if self.options.with_symbol {
            result = place_symbol(&result, self.currency, self.options.with_symbol_space);
        }

        if self.options.with_currency {
            result.push(' ');
            result.push_str(self.currency.iso_code);
        }

        result
    }
}

/// One-shot convenience wrapper around [`Formatter`].
///
/// # Examples
///
/// ```
/// use money_display::core::options::FormatOptions;
/// use money_display::format::format;
///
/// assert_eq!(format(10.0, &FormatOptions::default()).unwrap(), "$10.00");
/// ```
pub fn format(value: f64, options: &FormatOptions) -> Result<String, ConfigError> {
    Ok(Formatter::new(options.clone())?.format(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(value: f64, options: FormatOptions) -> String {
        format(value, &options).unwrap()
    }

    #[test]
    fn test_defaults() {
        assert_eq!(fmt(10.0, FormatOptions::default()), "$10.00");
        assert_eq!(fmt(1000.0, FormatOptions::default()), "$1,000.00");
    }

    #[test]
    fn test_currency_option() {
        let eur = FormatOptions {
            currency: "eur".to_string(),
            ..Default::default()
        };
        assert_eq!(fmt(10.0, eur), "€10.00");
    }

    #[test]
    fn test_without_cents() {
        let options = FormatOptions {
            with_cents: false,
            ..Default::default()
        };
        assert_eq!(fmt(10.0, options), "$10");
    }

    #[test]
    fn test_with_iso_code() {
        let options = FormatOptions {
            with_currency: true,
            ..Default::default()
        };
        assert_eq!(fmt(10.0, options), "$10.00 USD");
    }

    #[test]
    fn test_without_symbol() {
        let options = FormatOptions {
            with_symbol: false,
            ..Default::default()
        };
        assert_eq!(fmt(10.0, options), "10.00");
    }

    #[test]
    fn test_with_symbol_space() {
        let options = FormatOptions {
            with_symbol_space: true,
            ..Default::default()
        };
        assert_eq!(fmt(10.0, options), "$ 10.00");
    }

    #[test]
    fn test_without_thousands_separator() {
        let options = FormatOptions {
            with_thousands_separator: false,
            ..Default::default()
        };
        assert_eq!(fmt(1000.0, options), "$1000.00");
    }

    #[test]
    fn test_currency_specific_separators() {
        let brl = FormatOptions {
            currency: "brl".to_string(),
            ..Default::default()
        };
        assert_eq!(fmt(1234567.89, brl), "R$1.234.567,89");
    }

    #[test]
    fn test_suffix_symbol() {
        let sek = FormatOptions {
            currency: "sek".to_string(),
            with_symbol_space: true,
            ..Default::default()
        };
        assert_eq!(fmt(1234.5, sek), "1 234,50 kr");
    }

    #[test]
    fn test_zero_decimal_currency() {
        let jpy = FormatOptions {
            currency: "jpy".to_string(),
            ..Default::default()
        };
        // with_cents defaults to true but JPY has no subunit.
        assert_eq!(fmt(1500.0, jpy.clone()), "¥1,500");
        assert_eq!(fmt(1234.56, jpy), "¥1,234");
    }

    #[test]
    fn test_rounding_carry() {
        assert_eq!(fmt(0.999, FormatOptions::default()), "$1.00");
        assert_eq!(fmt(999.999, FormatOptions::default()), "$1,000.00");
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(fmt(-1234.56, FormatOptions::default()), "$-1,234.56");

        let sek = FormatOptions {
            currency: "sek".to_string(),
            with_symbol_space: true,
            ..Default::default()
        };
        assert_eq!(fmt(-1234.5, sek), "-1 234,50 kr");
    }

    #[test]
    fn test_negative_rounding_to_zero() {
        assert_eq!(fmt(-0.001, FormatOptions::default()), "$0.00");
    }

    #[test]
    fn test_all_options_compose() {
        let options = FormatOptions {
            currency: "eur".to_string(),
            with_currency: true,
            with_symbol_space: true,
            ..Default::default()
        };
        assert_eq!(fmt(1234567.891, options), "€ 1,234,567.89 EUR");
    }

    #[test]
    fn test_unknown_currency_is_config_error() {
        let options = FormatOptions {
            currency: "zzz".to_string(),
            ..Default::default()
        };
        assert!(format(10.0, &options).is_err());
        assert!(Formatter::new(options).is_err());
    }

    #[test]
    fn test_formatter_reuse() {
        let formatter = Formatter::new(FormatOptions::default()).unwrap();
        assert_eq!(formatter.format(1.0), "$1.00");
        assert_eq!(formatter.format(2.5), "$2.50");
        assert_eq!(formatter.currency().iso_code, "USD");
    }
}
