//! # Domain Enums
//!
//! Closed enumeration types for order submission.
//!
//! - [`OrderSide`] - Buy or Sell direction
//! - [`OrderType`] - Market or Limit execution
//! - [`TimeInForce`] - How long a resting order stays live
//!
//! Free-form strings from callers are parsed into these enums at the
//! validation boundary; an unrecognized value becomes a typed
//! [`ValidationError`] instead of a downstream string surprise.
//!
//! All enums implement `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
//! `Display`, `FromStr`, and Serde traits with UPPERCASE wire names.

use crate::domain::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order side indicating buy or sell direction.
///
/// # Examples
///
/// ```
/// use futures_desk::domain::value_objects::enums::OrderSide;
///
/// let side: OrderSide = "buy".parse().unwrap();
/// assert_eq!(side, OrderSide::Buy);
/// assert_eq!(side.to_string(), "BUY");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum OrderSide {
    /// Buy order - acquiring the contract.
    Buy = 0,
    /// Sell order - disposing of the contract.
    Sell = 1,
}

impl OrderSide {
    /// Returns the opposite side.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }

    /// Returns the exchange wire name.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderSide {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BUY" => Ok(Self::Buy),
            "SELL" => Ok(Self::Sell),
            _ => Err(ValidationError::invalid_side(s)),
        }
    }
}

/// Order execution type.
///
/// MARKET orders execute immediately at the best available price and carry
/// no price field on the wire. LIMIT orders rest at a specified price and
/// require both a price and a time-in-force policy.
///
/// # Examples
///
/// ```
/// use futures_desk::domain::value_objects::enums::OrderType;
///
/// assert!(OrderType::Limit.requires_price());
/// assert!(!OrderType::Market.requires_price());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum OrderType {
    /// Execute immediately at best available price.
    Market = 0,
    /// Execute only at the specified price or better.
    Limit = 1,
}

impl OrderType {
    /// Returns true if this order type requires a price.
    #[inline]
    #[must_use]
    pub const fn requires_price(self) -> bool {
        matches!(self, Self::Limit)
    }

    /// Returns the exchange wire name.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Market => "MARKET",
            Self::Limit => "LIMIT",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MARKET" => Ok(Self::Market),
            "LIMIT" => Ok(Self::Limit),
            _ => Err(ValidationError::invalid_order_type(s)),
        }
    }
}

/// Time-in-force policy for resting orders.
///
/// Only good-till-cancelled is supported; the variant exists so the wire
/// field is typed rather than a string literal scattered through the
/// translator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeInForce {
    /// Good till cancelled.
    Gtc,
}

impl TimeInForce {
    /// Returns the exchange wire name.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gtc => "GTC",
        }
    }
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod order_side {
        use super::*;

        #[test]
        fn opposite_works() {
            assert_eq!(OrderSide::Buy.opposite(), OrderSide::Sell);
            assert_eq!(OrderSide::Sell.opposite(), OrderSide::Buy);
        }

        #[test]
        fn display_uppercase() {
            assert_eq!(OrderSide::Buy.to_string(), "BUY");
            assert_eq!(OrderSide::Sell.to_string(), "SELL");
        }

        #[test]
        fn from_str_is_case_insensitive() {
            assert_eq!("BUY".parse::<OrderSide>().unwrap(), OrderSide::Buy);
            assert_eq!("buy".parse::<OrderSide>().unwrap(), OrderSide::Buy);
            assert_eq!("Sell".parse::<OrderSide>().unwrap(), OrderSide::Sell);
        }

        #[test]
        fn from_str_invalid() {
            let err = "HOLD".parse::<OrderSide>().unwrap_err();
            assert_eq!(err.code(), "InvalidSide");
            assert!(err.to_string().contains("HOLD"));
        }

        #[test]
        fn serde_roundtrip() {
            let json = serde_json::to_string(&OrderSide::Buy).unwrap();
            assert_eq!(json, "\"BUY\"");
            let side: OrderSide = serde_json::from_str(&json).unwrap();
            assert_eq!(side, OrderSide::Buy);
        }
    }

    mod order_type {
        use super::*;

        #[test]
        fn requires_price() {
            assert!(OrderType::Limit.requires_price());
            assert!(!OrderType::Market.requires_price());
        }

        #[test]
        fn display_uppercase() {
            assert_eq!(OrderType::Market.to_string(), "MARKET");
            assert_eq!(OrderType::Limit.to_string(), "LIMIT");
        }

        #[test]
        fn from_str_is_case_insensitive() {
            assert_eq!("market".parse::<OrderType>().unwrap(), OrderType::Market);
            assert_eq!("LIMIT".parse::<OrderType>().unwrap(), OrderType::Limit);
        }

        #[test]
        fn from_str_invalid() {
            let err = "STOP_MARKET".parse::<OrderType>().unwrap_err();
            assert_eq!(err.code(), "InvalidOrderType");
        }
    }

    mod time_in_force {
        use super::*;

        #[test]
        fn gtc_wire_name() {
            assert_eq!(TimeInForce::Gtc.as_str(), "GTC");
            assert_eq!(serde_json::to_string(&TimeInForce::Gtc).unwrap(), "\"GTC\"");
        }
    }
}
