//! # Audit Log Port
//!
//! Port definition for the append-only audit trail.
//!
//! Appending is infallible at the call boundary: a failed write must never
//! fail the order it describes. Implementations log persistence failures
//! through `tracing` and move on. Reading back is bounded: only the most
//! recent N records are ever returned.

use crate::infrastructure::audit::record::AuditRecord;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Default number of records returned by a tail read.
pub const DEFAULT_TAIL_LIMIT: usize = 50;

/// Error type for audit log reads.
///
/// Only reads can fail; a missing log is not an error (it reads as
/// empty).
#[derive(Debug, Error)]
pub enum AuditError {
    /// The backing store could not be opened.
    #[error("audit log open failed: {0}")]
    Open(String),

    /// The log exists but could not be read.
    #[error("audit log read failed: {0}")]
    Read(String),
}

impl AuditError {
    /// Creates an open error.
    #[must_use]
    pub fn open(message: impl Into<String>) -> Self {
        Self::Open(message.into())
    }

    /// Creates a read error.
    #[must_use]
    pub fn read(message: impl Into<String>) -> Self {
        Self::Read(message.into())
    }
}

/// Result type for audit log reads.
pub type AuditResult<T> = Result<T, AuditError>;

/// Trait defining the append-only audit trail.
///
/// Records arrive in the order operations complete; implementations must
/// guarantee that concurrent appends never interleave within a single
/// record.
#[async_trait]
pub trait AuditLog: Send + Sync + fmt::Debug {
    /// Appends one record.
    ///
    /// Must not fail the calling operation: implementations swallow
    /// persistence errors after reporting them on the tracing fallback
    /// channel.
    async fn record(&self, record: &AuditRecord);

    /// Returns the last `n` records in the order they were written.
    ///
    /// Returns fewer than `n` if the log is shorter, and an empty vector
    /// if no log exists yet.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Read`] only when an existing log cannot be
    /// read.
    async fn tail(&self, n: usize) -> AuditResult<Vec<AuditRecord>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_display() {
        let error = AuditError::read("permission denied");
        assert!(error.to_string().contains("permission denied"));
    }
}
