//! # Exchange Infrastructure
//!
//! Everything that speaks the exchange's language.
//!
//! - [`params`]: wire parameters and the domain-to-wire translation
//! - [`traits`]: the [`ExchangeGateway`] and [`GatewayFactory`] ports
//! - [`error`]: the gateway error taxonomy
//! - [`binance`]: the production Binance USDT-M futures adapter
//!
//! The rest of the system depends only on the ports; the adapter is
//! injected at wiring time and replaced by mocks in tests.

pub mod binance;
pub mod error;
pub mod params;
pub mod traits;

pub use binance::{BinanceFuturesGateway, BinanceGatewayFactory};
pub use error::{GatewayError, GatewayResult};
pub use params::ExchangeOrderParams;
pub use traits::{ExchangeAck, ExchangeGateway, GatewayFactory};
