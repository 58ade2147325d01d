use crate::core::currency::{ConfigError, Currency};
use serde::{Deserialize, Serialize};

/// Display options for money formatting.
///
/// Every option has a well-defined default, so `FormatOptions::default()`
/// is a fully specified configuration and callers override only the
/// fields they care about:
///
/// ```
/// use money_display::core::options::FormatOptions;
///
/// let options = FormatOptions {
///     currency: "eur".to_string(),
///     with_cents: false,
///     ..Default::default()
/// };
/// assert!(options.with_symbol);
/// ```
///
/// For callers holding options as data rather than code (config files,
/// CLI input documents), [`FormatOptions::from_json`] deserializes a
/// partial option document. Unknown keys and type-mismatched values are
/// rejected there as [`ConfigError::InvalidOptions`]; typed callers
/// cannot produce either failure mode at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatOptions {
    /// ISO code of the currency to format in, matched case-insensitively.
    pub currency: String,
    /// Include the fractional part (ignored for zero-decimal currencies).
    pub with_cents: bool,
    /// Append the ISO code after the amount.
    pub with_currency: bool,
    /// Include the currency symbol.
    pub with_symbol: bool,
    /// Insert a space between symbol and amount.
    pub with_symbol_space: bool,
    /// Group integer digits with the currency's thousands separator.
    pub with_thousands_separator: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            currency: "usd".to_string(),
            with_cents: true,
            with_currency: false,
            with_symbol: true,
            with_symbol_space: false,
            with_thousands_separator: true,
        }
    }
}

impl FormatOptions {
    /// Parse a partial option document; absent keys keep their defaults.
    ///
    /// ```
    /// use money_display::core::options::FormatOptions;
    ///
    /// let options = FormatOptions::from_json(r#"{"currency": "eur"}"#).unwrap();
    /// assert_eq!(options.currency, "eur");
    /// assert!(options.with_cents);
    ///
    /// assert!(FormatOptions::from_json(r#"{"with_cents": "yes"}"#).is_err());
    /// assert!(FormatOptions::from_json(r#"{"with_centz": true}"#).is_err());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::InvalidOptions(e.to_string()))
    }

    /// Resolve the currency record this option set refers to.
    pub fn resolve_currency(&self) -> Result<&'static Currency, ConfigError> {
        Currency::resolve(&self.currency)
    }
}
