//! # Exchange Gateway Ports
//!
//! Port definitions for the external exchange.
//!
//! [`ExchangeGateway`] is the seam the order service submits through; the
//! production implementation signs and POSTs to the exchange, tests inject
//! mocks. [`GatewayFactory`] constructs a gateway bound to one credential
//! set when a session is configured.
//!
//! # Examples
//!
//! ```ignore
//! use futures_desk::infrastructure::exchange::traits::ExchangeGateway;
//!
//! struct MyGateway { /* ... */ }
//!
//! #[async_trait::async_trait]
//! impl ExchangeGateway for MyGateway {
//!     // ... implement submit
//! }
//! ```

use crate::domain::value_objects::{ExchangeCredentials, Timestamp};
use crate::infrastructure::exchange::error::GatewayResult;
use crate::infrastructure::exchange::params::ExchangeOrderParams;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// The exchange's acknowledgement of an accepted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeAck {
    exchange_order_id: String,
    raw: serde_json::Value,
    received_at: Timestamp,
}

impl ExchangeAck {
    /// Creates an acknowledgement.
    #[must_use]
    pub fn new(exchange_order_id: impl Into<String>, raw: serde_json::Value) -> Self {
        Self {
            exchange_order_id: exchange_order_id.into(),
            raw,
            received_at: Timestamp::now(),
        }
    }

    /// Returns the order id assigned by the exchange.
    #[inline]
    #[must_use]
    pub fn exchange_order_id(&self) -> &str {
        &self.exchange_order_id
    }

    /// Returns the exchange's response body, verbatim.
    #[inline]
    #[must_use]
    pub fn raw(&self) -> &serde_json::Value {
        &self.raw
    }

    /// Returns when the acknowledgement was received.
    #[inline]
    #[must_use]
    pub fn received_at(&self) -> Timestamp {
        self.received_at
    }
}

impl fmt::Display for ExchangeAck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExchangeAck({})", self.exchange_order_id)
    }
}

/// Trait defining the interface to the external exchange.
///
/// One gateway instance is bound to one credential set for its whole
/// lifetime; replacing credentials means constructing a new gateway
/// through a [`GatewayFactory`].
///
/// # Error Handling
///
/// `submit` returns a single
/// [`GatewayError`](crate::infrastructure::exchange::error::GatewayError)
/// per failed attempt. Implementations must not retry; retry policy (there
/// is none) belongs to the caller.
#[async_trait]
pub trait ExchangeGateway: Send + Sync + fmt::Debug {
    /// Returns a short name for logging.
    fn name(&self) -> &'static str;

    /// Submits one order to the exchange.
    ///
    /// Implementations must bound the call with a timeout; an elapsed
    /// timeout is a `Network` error.
    ///
    /// # Errors
    ///
    /// - `GatewayError::Network` - transport failure or timeout
    /// - `GatewayError::Auth` - credentials rejected
    /// - `GatewayError::Rejected` - exchange refused the order
    async fn submit(&self, params: &ExchangeOrderParams) -> GatewayResult<ExchangeAck>;
}

/// Constructs gateways bound to a credential set.
///
/// The session manager calls this once per successful configure; tests
/// inject factories that produce mock gateways.
pub trait GatewayFactory: Send + Sync + fmt::Debug {
    /// Builds a gateway bound to `credentials`.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`](crate::infrastructure::exchange::error::GatewayError)
    /// if the gateway cannot be constructed (this does not contact the
    /// exchange).
    fn build(&self, credentials: &ExchangeCredentials)
    -> GatewayResult<Arc<dyn ExchangeGateway>>;
}
