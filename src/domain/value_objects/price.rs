//! # Price Value Object
//!
//! Strictly positive decimal price.
//!
//! # Examples
//!
//! ```
//! use futures_desk::domain::value_objects::price::Price;
//! use rust_decimal::Decimal;
//!
//! let price = Price::new(Decimal::new(652301, 1)).unwrap();
//! assert_eq!(price.get().to_string(), "65230.1");
//!
//! assert!(Price::new(Decimal::ZERO).is_err());
//! ```

use crate::domain::errors::{ValidationError, ValidationResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A strictly positive price.
///
/// Stored as a [`Decimal`] so values survive the wire without float
/// rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Creates a price.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPrice`] if the value is zero or
    /// negative.
    pub fn new(value: Decimal) -> ValidationResult<Self> {
        if value <= Decimal::ZERO {
            return Err(ValidationError::InvalidPrice { value });
        }
        Ok(Self(value))
    }

    /// Returns the inner decimal value.
    #[inline]
    #[must_use]
    pub fn get(self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn positive_is_accepted() {
        let price = Price::new(Decimal::new(50_000, 0)).unwrap();
        assert_eq!(price.get(), Decimal::new(50_000, 0));
    }

    #[test]
    fn zero_is_rejected() {
        let err = Price::new(Decimal::ZERO).unwrap_err();
        assert_eq!(err.code(), "InvalidPrice");
    }

    #[test]
    fn negative_is_rejected() {
        assert!(Price::new(Decimal::new(-1, 0)).is_err());
    }

    #[test]
    fn display_matches_decimal() {
        let price = Price::new(Decimal::new(123_45, 2)).unwrap();
        assert_eq!(price.to_string(), "123.45");
    }
}
