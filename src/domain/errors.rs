//! # Domain Errors
//!
//! Error types for domain validation.
//!
//! [`ValidationError`] covers every way a raw order draft can fail to become
//! a well-formed [`OrderRequest`](crate::domain::entities::OrderRequest).
//! Validation never touches the network; these errors are produced and
//! resolved entirely in-process.
//!
//! # Examples
//!
//! ```
//! use futures_desk::domain::errors::ValidationError;
//!
//! let error = ValidationError::MissingPrice;
//! assert_eq!(error.code(), "MissingPrice");
//! assert!(error.is_price_error());
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Error type for order validation.
///
/// Each variant corresponds to one validation rule; validation applies the
/// rules in a fixed order and stops at the first failure. The
/// [`code`](ValidationError::code) string is stable and is what callers see
/// as a rejection reason; `Display` carries the diagnostic detail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Symbol is empty after trimming.
    #[error("symbol must be a non-empty instrument identifier")]
    InvalidSymbol,

    /// Side is not BUY or SELL.
    #[error("side must be BUY or SELL, got '{value}'")]
    InvalidSide {
        /// The rejected input.
        value: String,
    },

    /// Order type is not MARKET or LIMIT.
    #[error("order type must be MARKET or LIMIT, got '{value}'")]
    InvalidOrderType {
        /// The rejected input.
        value: String,
    },

    /// Quantity is zero or negative.
    #[error("quantity must be positive, got {value}")]
    InvalidQuantity {
        /// The rejected input.
        value: Decimal,
    },

    /// Price is zero or negative.
    ///
    /// Produced by the [`Price`](crate::domain::value_objects::Price)
    /// constructor; order validation folds it into [`MissingPrice`] for
    /// LIMIT orders and ignores it for MARKET orders.
    #[error("price must be positive, got {value}")]
    InvalidPrice {
        /// The rejected input.
        value: Decimal,
    },

    /// LIMIT order without a usable price.
    #[error("limit orders require a positive price")]
    MissingPrice,
}

impl ValidationError {
    /// Creates an invalid side error.
    #[must_use]
    pub fn invalid_side(value: impl Into<String>) -> Self {
        Self::InvalidSide {
            value: value.into(),
        }
    }

    /// Creates an invalid order type error.
    #[must_use]
    pub fn invalid_order_type(value: impl Into<String>) -> Self {
        Self::InvalidOrderType {
            value: value.into(),
        }
    }

    /// Returns the stable variant name used as a rejection reason.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidSymbol => "InvalidSymbol",
            Self::InvalidSide { .. } => "InvalidSide",
            Self::InvalidOrderType { .. } => "InvalidOrderType",
            Self::InvalidQuantity { .. } => "InvalidQuantity",
            Self::InvalidPrice { .. } => "InvalidPrice",
            Self::MissingPrice => "MissingPrice",
        }
    }

    /// Returns true if this error concerns the price field.
    #[must_use]
    pub fn is_price_error(&self) -> bool {
        matches!(self, Self::InvalidPrice { .. } | Self::MissingPrice)
    }
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_variant_names() {
        assert_eq!(ValidationError::InvalidSymbol.code(), "InvalidSymbol");
        assert_eq!(ValidationError::invalid_side("HOLD").code(), "InvalidSide");
        assert_eq!(
            ValidationError::invalid_order_type("STOP").code(),
            "InvalidOrderType"
        );
        assert_eq!(
            ValidationError::InvalidQuantity {
                value: Decimal::ZERO
            }
            .code(),
            "InvalidQuantity"
        );
        assert_eq!(ValidationError::MissingPrice.code(), "MissingPrice");
    }

    #[test]
    fn display_carries_detail() {
        let err = ValidationError::invalid_side("HOLD");
        assert!(err.to_string().contains("HOLD"));

        let err = ValidationError::InvalidQuantity {
            value: Decimal::NEGATIVE_ONE,
        };
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn price_errors() {
        assert!(ValidationError::MissingPrice.is_price_error());
        assert!(
            ValidationError::InvalidPrice {
                value: Decimal::ZERO
            }
            .is_price_error()
        );
        assert!(!ValidationError::InvalidSymbol.is_price_error());
    }
}
