//! # Symbol Value Object
//!
//! Validated instrument identifier.
//!
//! A [`Symbol`] is the exchange's name for a futures contract, e.g.
//! `BTCUSDT`. Construction trims surrounding whitespace and upper-cases the
//! input, so the rest of the system never sees a mixed-case or padded
//! symbol.
//!
//! # Examples
//!
//! ```
//! use futures_desk::domain::value_objects::symbol::Symbol;
//!
//! let symbol = Symbol::new("btcusdt").unwrap();
//! assert_eq!(symbol.as_str(), "BTCUSDT");
//!
//! assert!(Symbol::new("   ").is_err());
//! ```

use crate::domain::errors::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A normalized, non-empty instrument identifier.
///
/// # Invariants
///
/// - Never empty
/// - Upper-case, no surrounding whitespace
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Creates a symbol, trimming and upper-casing the input.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidSymbol`] if the input is empty
    /// after trimming.
    pub fn new(raw: impl AsRef<str>) -> ValidationResult<Self> {
        let normalized = raw.as_ref().trim().to_uppercase();
        if normalized.is_empty() {
            return Err(ValidationError::InvalidSymbol);
        }
        Ok(Self(normalized))
    }

    /// Returns the symbol as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        let symbol = Symbol::new("  ethusdt ").unwrap();
        assert_eq!(symbol.as_str(), "ETHUSDT");
    }

    #[test]
    fn already_normalized_passes_through() {
        let symbol = Symbol::new("BTCUSDT").unwrap();
        assert_eq!(symbol.as_str(), "BTCUSDT");
    }

    #[test]
    fn empty_is_rejected() {
        assert_eq!(Symbol::new(""), Err(ValidationError::InvalidSymbol));
        assert_eq!(Symbol::new("   "), Err(ValidationError::InvalidSymbol));
    }

    #[test]
    fn serde_is_transparent() {
        let symbol = Symbol::new("btcusdt").unwrap();
        let json = serde_json::to_string(&symbol).unwrap();
        assert_eq!(json, "\"BTCUSDT\"");
    }

    #[test]
    fn display() {
        let symbol = Symbol::new("solusdt").unwrap();
        assert_eq!(symbol.to_string(), "SOLUSDT");
    }
}
