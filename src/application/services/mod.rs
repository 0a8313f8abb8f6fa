//! # Application Services
//!
//! Use-case orchestration.
//!
//! [`OrderService`] is the root operation external callers invoke; it
//! owns the validate → translate → submit → record sequence.

pub mod order_service;

pub use order_service::{
    CANCELLED_REASON, NOT_CONFIGURED_REASON, OrderService, OrderServiceConfig,
};
