//! # Order Service
//!
//! The root order-submission operation.
//!
//! Composes validation, translation, the exchange gateway, and the audit
//! trail into one atomic `place_order` call:
//!
//! ```text
//! draft -> validate -> translate -> gateway.submit -> audit.record -> outcome
//! ```
//!
//! Every call terminates in a well-formed [`OrderOutcome`] plus exactly
//! one audit record, whichever branch it took. No failure of any stage is
//! raised to the caller.

use crate::application::session::Session;
use crate::domain::entities::{OrderDraft, OrderOutcome, OrderRequest};
use crate::infrastructure::audit::record::AuditRecord;
use crate::infrastructure::audit::traits::AuditLog;
use crate::infrastructure::exchange::params::ExchangeOrderParams;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

/// Rejection reason when no session is configured.
pub const NOT_CONFIGURED_REASON: &str = "NotConfigured";

/// Rejection reason when the service-level deadline cuts a gateway call.
pub const CANCELLED_REASON: &str = "Cancelled";

/// Configuration for the order service.
#[derive(Debug, Clone)]
pub struct OrderServiceConfig {
    /// Upper bound on one gateway submission, in milliseconds.
    ///
    /// The gateway carries its own (shorter) transport timeout that maps
    /// to a network error; this outer deadline stands in for host
    /// cancellation and maps to a `Cancelled` rejection.
    pub submit_timeout_ms: u64,
}

impl Default for OrderServiceConfig {
    fn default() -> Self {
        Self {
            submit_timeout_ms: 10_000,
        }
    }
}

/// Orchestrates one order submission end to end.
#[derive(Debug)]
pub struct OrderService {
    audit: Arc<dyn AuditLog>,
    config: OrderServiceConfig,
}

impl OrderService {
    /// Creates an order service writing to `audit`.
    #[must_use]
    pub fn new(audit: Arc<dyn AuditLog>, config: OrderServiceConfig) -> Self {
        Self { audit, config }
    }

    /// Places one order against the given session snapshot.
    ///
    /// - No session: rejected `NotConfigured`, no gateway call.
    /// - Validation failure: rejected with the validation code, no
    ///   gateway call.
    /// - Gateway failure: rejected with the sanitized gateway reason; the
    ///   full error is preserved in the audit record.
    /// - Deadline elapsed: rejected `Cancelled`.
    /// - Gateway success: accepted with the exchange's order id.
    ///
    /// Exactly one audit record is written per call, on every branch.
    pub async fn place_order(
        &self,
        session: Option<&Session>,
        draft: &OrderDraft,
    ) -> OrderOutcome {
        let (outcome, detail) = match session {
            None => (
                OrderOutcome::rejected(NOT_CONFIGURED_REASON),
                Some("no session configured; POST /setup first".to_string()),
            ),
            Some(session) => self.submit(session, draft).await,
        };

        match &outcome {
            OrderOutcome::Accepted {
                exchange_order_id, ..
            } => {
                tracing::info!(order = %draft, %exchange_order_id, "order accepted");
            }
            OrderOutcome::Rejected { reason } => {
                tracing::warn!(order = %draft, %reason, "order rejected");
            }
        }

        let record = AuditRecord::for_outcome(draft.clone(), outcome.clone(), detail);
        self.audit.record(&record).await;

        outcome
    }

    /// Validates, translates, and submits against a live session.
    async fn submit(&self, session: &Session, draft: &OrderDraft) -> (OrderOutcome, Option<String>) {
        let request = match OrderRequest::validate(draft) {
            Ok(request) => request,
            Err(error) => {
                return (
                    OrderOutcome::rejected(error.code()),
                    Some(error.to_string()),
                );
            }
        };

        let params = ExchangeOrderParams::from_request(&request);
        let deadline = Duration::from_millis(self.config.submit_timeout_ms);

        match timeout(deadline, session.gateway().submit(&params)).await {
            Ok(Ok(ack)) => (
                OrderOutcome::accepted(ack.exchange_order_id(), ack.raw().clone()),
                None,
            ),
            Ok(Err(error)) => (
                OrderOutcome::rejected(error.sanitized_reason()),
                Some(error.to_string()),
            ),
            Err(_elapsed) => (
                OrderOutcome::rejected(CANCELLED_REASON),
                Some(format!(
                    "gateway call exceeded the {}ms deadline",
                    self.config.submit_timeout_ms
                )),
            ),
        }
    }
}
