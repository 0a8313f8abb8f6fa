//! # Infrastructure Layer
//!
//! Adapters for the outside world: the exchange gateway and the durable
//! audit trail. Each sub-module exposes a port trait; the application
//! layer depends on the ports, never on concrete adapters.

pub mod audit;
pub mod exchange;
