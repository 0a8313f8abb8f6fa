//! # REST API
//!
//! REST endpoints using axum for the operator console.
//!
//! # Endpoints
//!
//! - `POST /setup` - configure exchange credentials
//! - `POST /place_order` - submit a MARKET or LIMIT futures order
//! - `GET /logs` - up to the last 50 audit records
//! - `GET /health` - liveness probe
//!
//! # Usage
//!
//! ```ignore
//! use futures_desk::api::rest::{create_router, AppState};
//! use std::sync::Arc;
//!
//! let state = Arc::new(AppState {
//!     sessions: /* ... */,
//!     orders: /* ... */,
//!     audit: /* ... */,
//! });
//!
//! let router = create_router(state);
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{
    AcceptedOrder, AppState, HealthResponse, LogsQuery, LogsResponse, PlaceOrderResponse,
    SetupRequest, SetupResponse,
};
pub use routes::create_router;
