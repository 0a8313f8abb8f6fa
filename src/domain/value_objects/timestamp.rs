//! # Timestamp Value Object
//!
//! DateTime wrapper with domain-specific methods.
//!
//! This module provides the [`Timestamp`] type for representing points in
//! time, used for audit records and exchange request timestamps.
//!
//! # Examples
//!
//! ```
//! use futures_desk::domain::value_objects::timestamp::Timestamp;
//!
//! let ts = Timestamp::from_millis(1704067200000).unwrap();
//! assert_eq!(ts.timestamp_millis(), 1704067200000);
//! ```

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A UTC timestamp.
///
/// Wraps `chrono::DateTime<Utc>` with the operations this system needs:
/// current time, Unix-millisecond conversion for exchange requests, and
/// RFC 3339 rendering for audit records.
///
/// # Invariants
///
/// - Always in UTC timezone
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from Unix milliseconds.
    ///
    /// # Returns
    ///
    /// `Some(Timestamp)` if the value is representable, `None` otherwise.
    #[must_use]
    pub fn from_millis(millis: i64) -> Option<Self> {
        Utc.timestamp_millis_opt(millis).single().map(Self)
    }

    /// Returns milliseconds since the Unix epoch.
    ///
    /// This is the format Binance-style exchanges expect in the signed
    /// `timestamp` request parameter.
    #[inline]
    #[must_use]
    pub fn timestamp_millis(self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Returns the RFC 3339 rendering.
    #[must_use]
    pub fn to_rfc3339(self) -> String {
        self.0.to_rfc3339()
    }

    /// Returns true if this timestamp is strictly after `other`.
    #[inline]
    #[must_use]
    pub fn is_after(&self, other: &Self) -> bool {
        self.0 > other.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn from_millis_roundtrip() {
        let ts = Timestamp::from_millis(1704067200000).unwrap();
        assert_eq!(ts.timestamp_millis(), 1704067200000);
    }

    #[test]
    fn from_millis_out_of_range() {
        assert!(Timestamp::from_millis(i64::MAX).is_none());
    }

    #[test]
    fn ordering() {
        let earlier = Timestamp::from_millis(1_000).unwrap();
        let later = Timestamp::from_millis(2_000).unwrap();
        assert!(later.is_after(&earlier));
        assert!(!earlier.is_after(&later));
        assert!(earlier < later);
    }

    #[test]
    fn serde_is_transparent() {
        let ts = Timestamp::from_millis(1704067200000).unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(ts, back);
    }

    #[test]
    fn display_is_rfc3339() {
        let ts = Timestamp::from_millis(0).unwrap();
        assert!(ts.to_string().starts_with("1970-01-01T00:00:00"));
    }
}
