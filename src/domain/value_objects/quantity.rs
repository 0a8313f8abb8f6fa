//! # Quantity Value Object
//!
//! Strictly positive decimal order size.
//!
//! # Examples
//!
//! ```
//! use futures_desk::domain::value_objects::quantity::Quantity;
//! use rust_decimal::Decimal;
//!
//! let qty = Quantity::new(Decimal::new(1, 2)).unwrap();
//! assert_eq!(qty.get().to_string(), "0.01");
//!
//! assert!(Quantity::new(Decimal::ZERO).is_err());
//! ```

use crate::domain::errors::{ValidationError, ValidationResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A strictly positive order quantity in contract units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(Decimal);

impl Quantity {
    /// Creates a quantity.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidQuantity`] if the value is zero or
    /// negative.
    pub fn new(value: Decimal) -> ValidationResult<Self> {
        if value <= Decimal::ZERO {
            return Err(ValidationError::InvalidQuantity { value });
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

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
