//! # Application Layer
//!
//! Session lifecycle and order orchestration.
//!
//! - [`session`]: the single configured session and its registry
//! - [`services`]: the root order-submission operation

pub mod services;
pub mod session;

pub use services::{OrderService, OrderServiceConfig};
pub use session::{ConfigError, Session, SessionManager};
