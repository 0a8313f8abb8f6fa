//! # Route Wiring
//!
//! Builds the axum router over an [`AppState`].

use crate::api::rest::handlers::{self, AppState};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Creates the application router.
///
/// Routes mirror the operator console surface:
///
/// - `POST /setup` - configure exchange credentials
/// - `POST /place_order` - submit one order
/// - `GET /logs` - recent audit records
/// - `GET /health` - liveness probe
#[must_use]
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/setup", post(handlers::setup))
        .route("/place_order", post(handlers::place_order))
        .route("/logs", get(handlers::logs))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
