//! # money-display
//!
//! Locale-aware money display formatting.
//!
//! Formats a numeric amount into a human-readable price string according
//! to per-currency rules (symbol, decimal mark, thousands separator, ISO
//! code) and a small set of caller-supplied display options. No
//! conversion, no parsing, no locale detection — just display.
//!
//! ## Architecture
//!
//! - **core** — Currency metadata table and display options
//! - **format** — Value splitting, thousands grouping, symbol placement,
//!   and the top-level formatter
//!
//! ## Example
//!
//! ```
//! use money_display::core::options::FormatOptions;
//! use money_display::format::format;
//!
//! assert_eq!(format(1000.0, &FormatOptions::default()).unwrap(), "$1,000.00");
//!
//! let eur = FormatOptions {
//!     currency: "eur".to_string(),
//!     ..Default::default()
//! };
//! assert_eq!(format(10.0, &eur).unwrap(), "€10.00");
//! ```

pub mod core;
pub mod format;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::currency::{ConfigError, Currency};
    pub use crate::core::options::FormatOptions;
    pub use crate::format::{format, Formatter};
}
