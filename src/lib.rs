//! # futures-desk
//!
//! Single-session futures order desk.
//!
//! An operator configures exchange credentials through `POST /setup` and
//! submits MARKET/LIMIT futures orders through `POST /place_order`; one
//! in-process session mediates all calls to the exchange, and every
//! attempt lands in an append-only audit trail readable via `GET /logs`.
//!
//! # Architecture
//!
//! The crate is layered hexagonally:
//!
//! - [`domain`] - pure types and validation; no I/O
//! - [`infrastructure`] - the exchange gateway and the audit trail,
//!   behind port traits
//! - [`application`] - the session registry and the root order service
//! - [`api`] - the axum REST surface
//! - [`config`] - layered file/environment configuration
//!
//! One order submission flows:
//!
//! ```text
//! POST /place_order
//!   -> OrderService::place_order
//!        -> OrderRequest::validate        (reject bad input, no network)
//!        -> ExchangeOrderParams::from_request
//!        -> ExchangeGateway::submit       (signed, bounded, no retries)
//!        -> AuditLog::record              (exactly one record per call)
//!   -> OrderOutcome rendered as JSON
//! ```
//!
//! The design keeps hard contracts in the core: ordered validation rules,
//! MARKET/LIMIT translation differences, success/failure classification,
//! and a durable, atomically-appended audit record per attempt. The web
//! layer stays thin and interprets nothing.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
