//! # REST Handlers
//!
//! Request and response bodies plus the handler functions.
//!
//! The handlers are deliberately thin: they deserialize, call into the
//! application layer, and render the result. They interpret nothing; the
//! one piece of presentation logic is mapping the `NotConfigured`
//! rejection onto the console's legacy "Bot not configured" message.

use crate::application::services::order_service::NOT_CONFIGURED_REASON;
use crate::application::services::OrderService;
use crate::application::session::SessionManager;
use crate::domain::entities::{OrderDraft, OrderOutcome};
use crate::domain::value_objects::ExchangeCredentials;
use crate::infrastructure::audit::record::AuditRecord;
use crate::infrastructure::audit::traits::{AuditLog, DEFAULT_TAIL_LIMIT};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared state for all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Registry owning the current session.
    pub sessions: Arc<SessionManager>,
    /// The order-submission service.
    pub orders: Arc<OrderService>,
    /// The audit trail, for tail reads.
    pub audit: Arc<dyn AuditLog>,
}

/// Body of `POST /setup`.
#[derive(Debug, Deserialize)]
pub struct SetupRequest {
    /// Exchange API key.
    pub api_key: String,
    /// Exchange API secret.
    pub api_secret: String,
    /// Target the sandbox endpoint.
    #[serde(default)]
    pub testnet: bool,
}

/// Response of `POST /setup`.
#[derive(Debug, Serialize)]
pub struct SetupResponse {
    /// Whether the session was configured.
    pub success: bool,
    /// Echo of the configured endpoint choice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testnet: Option<bool>,
    /// Failure message, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Accepted-order fields of a `place_order` response.
#[derive(Debug, Serialize)]
pub struct AcceptedOrder {
    /// Order id assigned by the exchange.
    pub exchange_order_id: String,
    /// The exchange's acknowledgement body, verbatim.
    pub raw: serde_json::Value,
}

/// Response of `POST /place_order`.
#[derive(Debug, Serialize)]
pub struct PlaceOrderResponse {
    /// Whether the exchange accepted the order.
    pub success: bool,
    /// Present iff `success`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<AcceptedOrder>,
    /// Rejection reason iff not `success`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Query parameters of `GET /logs`.
#[derive(Debug, Default, Deserialize)]
pub struct LogsQuery {
    /// Maximum records to return, capped at the default tail limit.
    pub limit: Option<usize>,
}

/// Response of `GET /logs`.
#[derive(Debug, Serialize)]
pub struct LogsResponse {
    /// Whether the log was readable.
    pub success: bool,
    /// Number of records returned.
    pub count: usize,
    /// The records, in the order they were written.
    pub records: Vec<AuditRecord>,
    /// Read-failure description; the synthetic entry for a broken log.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Response of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "ok" while the process serves requests.
    pub status: &'static str,
    /// Whether a session is configured.
    pub configured: bool,
}

/// `POST /setup` - configure the session from submitted credentials.
///
/// On failure the previous session, if any, stays active.
pub async fn setup(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SetupRequest>,
) -> (StatusCode, Json<SetupResponse>) {
    let credentials = ExchangeCredentials::new(body.api_key, body.api_secret, body.testnet);

    match state.sessions.configure(credentials) {
        Ok(session) => (
            StatusCode::OK,
            Json(SetupResponse {
                success: true,
                testnet: Some(session.testnet()),
                error: None,
            }),
        ),
        Err(error) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(SetupResponse {
                success: false,
                testnet: None,
                error: Some(error.to_string()),
            }),
        ),
    }
}

/// `POST /place_order` - submit one order through the current session.
///
/// Always responds 200 with a well-formed body; rejection reasons travel
/// in `error`.
pub async fn place_order(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<OrderDraft>,
) -> Json<PlaceOrderResponse> {
    let session = state.sessions.current();
    let outcome = state
        .orders
        .place_order(session.as_deref(), &draft)
        .await;

    let response = match outcome {
        OrderOutcome::Accepted {
            exchange_order_id,
            raw,
        } => PlaceOrderResponse {
            success: true,
            order: Some(AcceptedOrder {
                exchange_order_id,
                raw,
            }),
            error: None,
        },
        OrderOutcome::Rejected { reason } => {
            let error = if reason == NOT_CONFIGURED_REASON {
                "Bot not configured".to_string()
            } else {
                reason
            };
            PlaceOrderResponse {
                success: false,
                order: None,
                error: Some(error),
            }
        }
    };

    Json(response)
}

/// `GET /logs` - the most recent audit records.
///
/// A missing log reads as empty; a log that exists but cannot be read
/// yields a single synthetic error in place of records.
pub async fn logs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LogsQuery>,
) -> Json<LogsResponse> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_TAIL_LIMIT)
        .min(DEFAULT_TAIL_LIMIT);

    let response = match state.audit.tail(limit).await {
        Ok(records) => LogsResponse {
            success: true,
            count: records.len(),
            records,
            error: None,
        },
        Err(error) => LogsResponse {
            success: false,
            count: 0,
            records: Vec::new(),
            error: Some(format!("Error reading logs: {error}")),
        },
    };

    Json(response)
}

/// `GET /health` - liveness probe with the configured flag.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        configured: state.sessions.is_configured(),
    })
}
