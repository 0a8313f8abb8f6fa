//! # Exchange Credentials
//!
//! API key material for one exchange account.
//!
//! The secret fields are opaque to this system; they are forwarded to the
//! exchange adapter for request signing and never appear in logs, audit
//! records, or `Debug` output.

use serde::Deserialize;
use std::fmt;

/// One exchange credential set.
///
/// Immutable once a session is configured; replacing credentials means
/// reconfiguring the session. The `testnet` flag selects the sandbox
/// endpoint over production.
///
/// # Security
///
/// `Debug` redacts both secrets, and the type deliberately does not
/// implement `Serialize`, so credentials cannot leak through the audit
/// trail or a JSON response.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct ExchangeCredentials {
    api_key: String,
    api_secret: String,
    #[serde(default)]
    testnet: bool,
}

impl ExchangeCredentials {
    /// Creates a credential set.
    #[must_use]
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>, testnet: bool) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            testnet,
        }
    }

    /// Returns the API key.
    #[inline]
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the API secret.
    #[inline]
    #[must_use]
    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }

    /// Returns true if the sandbox endpoint should be used.
    #[inline]
    #[must_use]
    pub fn testnet(&self) -> bool {
        self.testnet
    }

    /// Returns true if the API key is non-empty after trimming.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Returns true if the API secret is non-empty after trimming.
    #[must_use]
    pub fn has_api_secret(&self) -> bool {
        !self.api_secret.trim().is_empty()
    }
}

impl fmt::Debug for ExchangeCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExchangeCredentials")
            .field("api_key", &"<redacted>")
            .field("api_secret", &"<redacted>")
            .field("testnet", &self.testnet)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let creds = ExchangeCredentials::new("key", "secret", true);
        assert_eq!(creds.api_key(), "key");
        assert_eq!(creds.api_secret(), "secret");
        assert!(creds.testnet());
    }

    #[test]
    fn shape_checks() {
        let creds = ExchangeCredentials::new("key", "", false);
        assert!(creds.has_api_key());
        assert!(!creds.has_api_secret());

        let creds = ExchangeCredentials::new("   ", "secret", false);
        assert!(!creds.has_api_key());
        assert!(creds.has_api_secret());
    }

    #[test]
    fn debug_redacts_secrets() {
        let creds = ExchangeCredentials::new("my-key", "my-secret", true);
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("my-key"));
        assert!(!rendered.contains("my-secret"));
        assert!(rendered.contains("<redacted>"));
        assert!(rendered.contains("testnet: true"));
    }
}
