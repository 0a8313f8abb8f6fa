//! # Gateway Errors
//!
//! Error types for exchange gateway operations.
//!
//! This module provides error types for order submission against the
//! external exchange: network failures, authentication failures, and
//! exchange-side rejections.
//!
//! # Examples
//!
//! ```
//! use futures_desk::infrastructure::exchange::error::GatewayError;
//!
//! let error = GatewayError::auth("invalid API key");
//! assert!(error.is_auth());
//! assert!(error.sanitized_reason().starts_with("AuthError"));
//! ```

use thiserror::Error;

/// Error type for exchange gateway operations.
///
/// The gateway performs no retries; every variant maps a single failed
/// submission attempt. `Display` carries the full detail for the audit
/// trail; [`sanitized_reason`](GatewayError::sanitized_reason) is the
/// caller-safe rendering.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// Network failure, timeout, or unreachable exchange.
    #[error("exchange network error: {message}")]
    Network {
        /// Error message.
        message: String,
    },

    /// Authentication or authorization failure.
    #[error("exchange authentication error: {message}")]
    Auth {
        /// Error message.
        message: String,
    },

    /// The exchange processed the request and rejected the order.
    #[error("exchange rejected order: {reason}")]
    Rejected {
        /// Rejection reason reported by the exchange.
        reason: String,
        /// Exchange-specific error code.
        code: Option<i64>,
    },
}

impl GatewayError {
    /// Creates a network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates an authentication error.
    #[must_use]
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Creates a rejection error.
    #[must_use]
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
            code: None,
        }
    }

    /// Creates a rejection error with the exchange's error code.
    #[must_use]
    pub fn rejected_with_code(reason: impl Into<String>, code: i64) -> Self {
        Self::Rejected {
            reason: reason.into(),
            code: Some(code),
        }
    }

    /// Returns true if this is a network error.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    /// Returns true if this is an authentication error.
    #[must_use]
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }

    /// Returns true if this is an exchange-side rejection.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// Returns the exchange error code, if any.
    #[must_use]
    pub fn code(&self) -> Option<i64> {
        match self {
            Self::Rejected { code, .. } => *code,
            _ => None,
        }
    }

    /// Returns the caller-safe rejection reason.
    ///
    /// The error class is always named; raw response bodies and transport
    /// detail stay in `Display` (and therefore in the audit record) only.
    #[must_use]
    pub fn sanitized_reason(&self) -> String {
        match self {
            Self::Network { .. } => "NetworkError: exchange unreachable or timed out".to_string(),
            Self::Auth { .. } => {
                "AuthError: exchange rejected the configured credentials".to_string()
            }
            Self::Rejected { reason, .. } => format!("ExchangeRejected: {reason}"),
        }
    }
}

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;
