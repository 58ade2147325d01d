use crate::core::currency::Currency;

/// Attach the currency symbol to an already-composed amount string.
///
/// Placement follows the currency's `symbol_first`; the optional single
/// space applies on whichever side the symbol lands.
///
/// # Examples
///
/// ```
/// use money_display::core::currency::Currency;
/// use money_display::format::symbol::place_symbol;
///
/// let usd = Currency::resolve("usd").unwrap();
/// assert_eq!(place_symbol("10.00", usd, false), "$10.00");
/// assert_eq!(place_symbol("10.00", usd, true), "$ 10.00");
///
/// let sek = Currency::resolve("sek").unwrap();
/// assert_eq!(place_symbol("10,00", sek, true), "10,00 kr");
/// ```
pub fn place_symbol(amount: &str, currency: &Currency, with_space: bool) -> String {
    let space = if with_space { " " } else { "" };
    if currency.symbol_first {
        format!("{}{}{}", currency.symbol, space, amount)
    } else {
        format!("{}{}{}", amount, space, currency.symbol)
    }
}
