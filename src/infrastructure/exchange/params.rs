//! # Exchange Order Parameters
//!
//! The exchange's wire vocabulary for one order, and the translation from
//! the domain request into it.
//!
//! Translation is a pure mapping executed only after validation, so the
//! exchange's field names and conventions stay out of the domain model;
//! adding an order type or a second exchange touches this module, not the
//! validator.
//!
//! # Examples
//!
//! ```
//! use futures_desk::domain::entities::{OrderDraft, OrderRequest};
//! use futures_desk::infrastructure::exchange::params::ExchangeOrderParams;
//! use rust_decimal::Decimal;
//!
//! let draft = OrderDraft::market("btcusdt", "buy", Decimal::new(1, 2));
//! let request = OrderRequest::validate(&draft).unwrap();
//! let params = ExchangeOrderParams::from_request(&request);
//! assert_eq!(params.symbol(), "BTCUSDT");
//! assert!(params.price().is_none());
//! ```

use crate::domain::entities::OrderRequest;
use crate::domain::value_objects::{OrderSide, OrderType, TimeInForce};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Wire parameters for one futures order.
///
/// Field names serialize in the exchange's camelCase convention; absent
/// fields are omitted entirely, never sent as null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeOrderParams {
    symbol: String,
    side: OrderSide,
    #[serde(rename = "type")]
    order_type: OrderType,
    #[serde(skip_serializing_if = "Option::is_none")]
    time_in_force: Option<TimeInForce>,
    quantity: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    price: Option<Decimal>,
}

impl ExchangeOrderParams {
    /// Translates a validated request into wire parameters.
    ///
    /// - MARKET: `{symbol, side, type, quantity}` — no price and no
    ///   time-in-force, even when the request retained a caller-supplied
    ///   price.
    /// - LIMIT: `{symbol, side, type, timeInForce: GTC, quantity, price}`.
    ///
    /// Pure: the same request always yields identical parameters.
    #[must_use]
    pub fn from_request(request: &OrderRequest) -> Self {
        let (time_in_force, price) = match request.order_type() {
            OrderType::Market => (None, None),
            OrderType::Limit => (
                Some(TimeInForce::Gtc),
                request.price().map(|p| p.get()),
            ),
        };

        Self {
            symbol: request.symbol().as_str().to_string(),
            side: request.side(),
            order_type: request.order_type(),
            time_in_force,
            quantity: request.quantity().get(),
            price,
        }
    }

    /// Returns the instrument symbol.
    #[inline]
    #[must_use]
    pub fn symbol(&self) -> &str {
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

    /// Returns the time-in-force policy, present only for LIMIT orders.
    #[inline]
    #[must_use]
    pub fn time_in_force(&self) -> Option<TimeInForce> {
        self.time_in_force
    }

    /// Returns the order quantity.
    #[inline]
    #[must_use]
    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// Returns the limit price, present only for LIMIT orders.
    #[inline]
    #[must_use]
    pub fn price(&self) -> Option<Decimal> {
        self.price
    }
}

impl fmt::Display for ExchangeOrderParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} x{}",
            self.order_type, self.side, self.symbol, self.quantity
        )?;
        if let Some(price) = self.price {
            write!(f, " @{price} {}", TimeInForce::Gtc)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::OrderDraft;

    fn validated(draft: &OrderDraft) -> OrderRequest {
        OrderRequest::validate(draft).unwrap()
    }

    fn qty(raw: &str) -> Decimal {
        raw.parse().unwrap()
    }

    #[test]
    fn market_translation() {
        let request = validated(&OrderDraft::market("btcusdt", "buy", qty("0.01")));
        let params = ExchangeOrderParams::from_request(&request);

        assert_eq!(params.symbol(), "BTCUSDT");
        assert_eq!(params.side(), OrderSide::Buy);
        assert_eq!(params.order_type(), OrderType::Market);
        assert_eq!(params.quantity(), qty("0.01"));
        assert_eq!(params.price(), None);
        assert_eq!(params.time_in_force(), None);
    }

    #[test]
    fn limit_translation_fixes_gtc() {
        let request = validated(&OrderDraft::limit(
            "ethusdt",
            "sell",
            qty("0.5"),
            Some(qty("3200")),
        ));
        let params = ExchangeOrderParams::from_request(&request);

        assert_eq!(params.order_type(), OrderType::Limit);
        assert_eq!(params.time_in_force(), Some(TimeInForce::Gtc));
        assert_eq!(params.price(), Some(qty("3200")));
    }

    #[test]
    fn market_drops_supplied_price() {
        let draft = OrderDraft {
            symbol: "BTCUSDT".to_string(),
            side: "BUY".to_string(),
            order_type: "MARKET".to_string(),
            quantity: qty("0.01"),
            price: Some(qty("64000")),
        };
        let params = ExchangeOrderParams::from_request(&validated(&draft));
        assert_eq!(params.price(), None);
        assert_eq!(params.time_in_force(), None);
    }

    #[test]
    fn market_serialization_has_no_price_or_tif_key() {
        let request = validated(&OrderDraft::market("BTCUSDT", "BUY", qty("1")));
        let json =
            serde_json::to_value(ExchangeOrderParams::from_request(&request)).unwrap();

        let object = json.as_object().unwrap();
        assert!(!object.contains_key("price"));
        assert!(!object.contains_key("timeInForce"));
        assert_eq!(object.get("type").unwrap(), "MARKET");
        assert_eq!(object.get("side").unwrap(), "BUY");
    }

    #[test]
    fn limit_serialization_uses_camel_case() {
        let request = validated(&OrderDraft::limit(
            "BTCUSDT",
            "SELL",
            qty("0.5"),
            Some(qty("64000")),
        ));
        let json =
            serde_json::to_value(ExchangeOrderParams::from_request(&request)).unwrap();

        assert_eq!(json.get("timeInForce").unwrap(), "GTC");
        assert_eq!(json.get("type").unwrap(), "LIMIT");
    }

    #[test]
    fn translation_is_pure() {
        let request = validated(&OrderDraft::limit(
            "BTCUSDT",
            "SELL",
            qty("0.5"),
            Some(qty("64000")),
        ));
        let a = ExchangeOrderParams::from_request(&request);
        let b = ExchangeOrderParams::from_request(&request);
        assert_eq!(a, b);
    }
}
