//! # Audit Record
//!
//! One immutable entry in the order audit trail.
//!
//! Exactly one record is created per `place_order` call, whichever branch
//! the call took. Records are never mutated or deleted after creation;
//! the log they land in is append-only.

use crate::domain::entities::{OrderDraft, OrderOutcome};
use crate::domain::value_objects::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Severity of an audit record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuditLevel {
    /// The attempt succeeded.
    Info,
    /// The attempt was rejected at some stage.
    Error,
}

impl fmt::Display for AuditLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => f.write_str("INFO"),
            Self::Error => f.write_str("ERROR"),
        }
    }
}

/// One order-submission attempt and its outcome.
///
/// The embedded request is the draft as the caller supplied it; it never
/// contains credentials. The `detail` field preserves the unsanitized
/// failure description for diagnosis; the outcome itself carries only the
/// caller-safe reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    id: Uuid,
    timestamp: Timestamp,
    level: AuditLevel,
    request: OrderDraft,
    outcome: OrderOutcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

impl AuditRecord {
    /// Creates a record for an outcome, deriving the level from it.
    ///
    /// Accepted outcomes record at INFO, rejections at ERROR.
    #[must_use]
    pub fn for_outcome(
        request: OrderDraft,
        outcome: OrderOutcome,
        detail: Option<String>,
    ) -> Self {
        let level = if outcome.is_accepted() {
            AuditLevel::Info
        } else {
            AuditLevel::Error
        };
        Self {
            id: Uuid::new_v4(),
            timestamp: Timestamp::now(),
            level,
            request,
            outcome,
            detail,
        }
    }

    /// Returns the record id.
    #[inline]
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns when the attempt completed.
    #[inline]
    #[must_use]
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Returns the severity.
    #[inline]
    #[must_use]
    pub fn level(&self) -> AuditLevel {
        self.level
    }

    /// Returns the request as the caller supplied it.
    #[inline]
    #[must_use]
    pub fn request(&self) -> &OrderDraft {
        &self.request
    }

    /// Returns the outcome of the attempt.
    #[inline]
    #[must_use]
    pub fn outcome(&self) -> &OrderOutcome {
        &self.outcome
    }

    /// Returns the unsanitized failure detail, if any.
    #[inline]
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

impl fmt::Display for AuditRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {} -> {}",
            self.level, self.timestamp, self.request, self.outcome
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    fn draft() -> OrderDraft {
        OrderDraft::market("BTCUSDT", "BUY", Decimal::new(1, 2))
    }

    #[test]
    fn accepted_records_at_info() {
        let record = AuditRecord::for_outcome(
            draft(),
            OrderOutcome::accepted("42", json!({"orderId": 42})),
            None,
        );
        assert_eq!(record.level(), AuditLevel::Info);
        assert!(record.detail().is_none());
    }

    #[test]
    fn rejected_records_at_error() {
        let record = AuditRecord::for_outcome(
            draft(),
            OrderOutcome::rejected("MissingPrice"),
            Some("limit orders require a positive price".to_string()),
        );
        assert_eq!(record.level(), AuditLevel::Error);
        assert_eq!(
            record.detail(),
            Some("limit orders require a positive price")
        );
    }

    #[test]
    fn records_get_distinct_ids() {
        let a = AuditRecord::for_outcome(draft(), OrderOutcome::rejected("x"), None);
        let b = AuditRecord::for_outcome(draft(), OrderOutcome::rejected("x"), None);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn serde_roundtrip() {
        let record = AuditRecord::for_outcome(
            draft(),
            OrderOutcome::rejected("NotConfigured"),
            Some("no session configured".to_string()),
        );
        let line = serde_json::to_string(&record).unwrap();
        let back: AuditRecord = serde_json::from_str(&line).unwrap();
        assert_eq!(record, back);
    }

    #[test]
    fn level_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&AuditLevel::Info).unwrap(), "\"INFO\"");
        assert_eq!(
            serde_json::to_string(&AuditLevel::Error).unwrap(),
            "\"ERROR\""
        );
    }
}
