//! # Order Outcome
//!
//! Result of one order-submission attempt.
//!
//! Every `place_order` call terminates in exactly one [`OrderOutcome`],
//! whichever branch it took: accepted by the exchange, rejected by
//! validation, rejected by the exchange, or cut off by the deadline.
//! An outcome is never partially populated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The terminal result of one submission attempt.
///
/// Serializes with an UPPERCASE `status` tag so audit lines and API
/// responses read the same way:
///
/// ```json
/// {"status":"ACCEPTED","exchange_order_id":"4061921","raw":{...}}
/// {"status":"REJECTED","reason":"MissingPrice"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "UPPERCASE")]
pub enum OrderOutcome {
    /// The exchange accepted the order.
    Accepted {
        /// Order id assigned by the exchange.
        exchange_order_id: String,
        /// The exchange's acknowledgement body, verbatim.
        raw: serde_json::Value,
    },
    /// The attempt was rejected before or by the exchange.
    Rejected {
        /// Sanitized, caller-visible reason.
        reason: String,
    },
}

impl OrderOutcome {
    /// Creates an accepted outcome.
    #[must_use]
    pub fn accepted(exchange_order_id: impl Into<String>, raw: serde_json::Value) -> Self {
        Self::Accepted {
            exchange_order_id: exchange_order_id.into(),
            raw,
        }
    }

    /// Creates a rejected outcome.
    #[must_use]
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }

    /// Returns true if the exchange accepted the order.
    #[inline]
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Returns true if the attempt was rejected.
    #[inline]
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// Returns the exchange order id for accepted outcomes.
    #[must_use]
    pub fn exchange_order_id(&self) -> Option<&str> {
        match self {
            Self::Accepted {
                exchange_order_id, ..
            } => Some(exchange_order_id),
            Self::Rejected { .. } => None,
        }
    }

    /// Returns the rejection reason for rejected outcomes.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected { reason } => Some(reason),
        }
    }
}

impl fmt::Display for OrderOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted {
                exchange_order_id, ..
            } => write!(f, "ACCEPTED({exchange_order_id})"),
            Self::Rejected { reason } => write!(f, "REJECTED({reason})"),
        }
    }
}
