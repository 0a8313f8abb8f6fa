//! # Order Request
//!
//! Raw order intent and its validated form.
//!
//! [`OrderDraft`] is exactly what the caller sent: free-form strings and
//! bare decimals. [`OrderRequest::validate`] is the single gate between a
//! draft and the rest of the system; downstream code only ever sees the
//! validated [`OrderRequest`], whose types make invalid states
//! unrepresentable (a LIMIT request without a price cannot be
//! constructed).
//!
//! # Examples
//!
//! ```
//! use futures_desk::domain::entities::order_request::{OrderDraft, OrderRequest};
//! use rust_decimal::Decimal;
//!
//! let draft = OrderDraft::market("btcusdt", "buy", Decimal::new(1, 2));
//! let request = OrderRequest::validate(&draft).unwrap();
//! assert_eq!(request.symbol().as_str(), "BTCUSDT");
//! ```

use crate::domain::errors::{ValidationError, ValidationResult};
use crate::domain::value_objects::{OrderSide, OrderType, Price, Quantity, Symbol};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw caller-supplied order intent.
///
/// Deserialized directly from the `place_order` request body and embedded,
/// as supplied, in the audit record for the attempt. Carries no secrets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    /// Instrument identifier, any case.
    pub symbol: String,
    /// Order side, any case.
    pub side: String,
    /// Order type, any case.
    pub order_type: String,
    /// Order size in contract units.
    pub quantity: Decimal,
    /// Limit price; ignored for market orders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
}

impl OrderDraft {
    /// Creates a draft for a market order.
    #[must_use]
    pub fn market(
        symbol: impl Into<String>,
        side: impl Into<String>,
        quantity: Decimal,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            side: side.into(),
            order_type: "MARKET".to_string(),
            quantity,
            price: None,
        }
    }

    /// Creates a draft for a limit order.
    #[must_use]
    pub fn limit(
        symbol: impl Into<String>,
        side: impl Into<String>,
        quantity: Decimal,
        price: Option<Decimal>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            side: side.into(),
            order_type: "LIMIT".to_string(),
            quantity,
            price,
        }
    }
}

impl fmt::Display for OrderDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} x{}",
            self.order_type, self.side, self.symbol, self.quantity
        )?;
        if let Some(price) = self.price {
            write!(f, " @{price}")?;
        }
        Ok(())
    }
}

/// A validated order request.
///
/// Can only be obtained through [`OrderRequest::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    symbol: Symbol,
    side: OrderSide,
    order_type: OrderType,
    quantity: Quantity,
    price: Option<Price>,
}

impl OrderRequest {
    /// Validates a raw draft.
    ///
    /// Rules apply in order and stop at the first failure:
    ///
    /// 1. symbol non-empty after trim + uppercase
    /// 2. side is BUY or SELL
    /// 3. order type is MARKET or LIMIT
    /// 4. quantity is positive
    /// 5. LIMIT only: price present and positive
    ///
    /// A price supplied with a MARKET order is not an error: a well-formed
    /// one is retained (the translator drops it from the wire), a
    /// malformed one is discarded.
    ///
    /// Pure and deterministic; no side effects.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] for the first rule that fails; a
    /// LIMIT order with an absent or non-positive price fails with
    /// [`ValidationError::MissingPrice`].
    pub fn validate(draft: &OrderDraft) -> ValidationResult<Self> {
        let symbol = Symbol::new(&draft.symbol)?;
        let side: OrderSide = draft.side.parse()?;
        let order_type: OrderType = draft.order_type.parse()?;
        let quantity = Quantity::new(draft.quantity)?;

        let price = if order_type.requires_price() {
            let raw = draft.price.ok_or(ValidationError::MissingPrice)?;
            Some(Price::new(raw).map_err(|_| ValidationError::MissingPrice)?)
        } else {
            draft.price.and_then(|raw| Price::new(raw).ok())
        };

        Ok(Self {
            symbol,
            side,
            order_type,
            quantity,
            price,
        })
    }

    /// Returns the instrument symbol.
    #[inline]
    #[must_use]
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Returns the order side.
    #[inline]
    #[must_use]
    pub fn side(&self) -> OrderSide {
        self.side
    }

    /// Returns the order type.
    #[inline]
    #[must_use]
    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    /// Returns the order quantity.
    #[inline]
    #[must_use]
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Returns the limit price, if any.
    #[inline]
    #[must_use]
    pub fn price(&self) -> Option<Price> {
        self.price
    }
}

impl fmt::Display for OrderRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} x{}",
            self.order_type, self.side, self.symbol, self.quantity
        )?;
        if let Some(price) = self.price {
            write!(f, " @{price}")?;
        }
        Ok(())
    }
}
