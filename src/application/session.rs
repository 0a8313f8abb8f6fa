//! # Session Management
//!
//! The single configured bot session and its registry.
//!
//! A [`Session`] binds one credential set to one gateway instance. The
//! process owns at most one current session, held by a [`SessionManager`];
//! configuring replaces the current session atomically, and callers that
//! already hold a session snapshot keep using it until they finish.
//!
//! Configuration is optimistic: credentials are validated for shape only
//! and never verified against the exchange at configure time. A bad key
//! surfaces as an authentication rejection on the first order. This is a
//! deliberate, tested policy, not an accident.

use crate::domain::value_objects::{ExchangeCredentials, Timestamp};
use crate::infrastructure::exchange::error::GatewayError;
use crate::infrastructure::exchange::traits::{ExchangeGateway, GatewayFactory};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Error type for session configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// API key is empty.
    #[error("API key must not be empty")]
    MissingApiKey,

    /// API secret is empty.
    #[error("API secret must not be empty")]
    MissingApiSecret,

    /// The gateway could not be constructed.
    #[error("gateway construction failed: {0}")]
    Gateway(#[from] GatewayError),
}

/// Result type for session configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// One credential set bound to one gateway.
///
/// Immutable: replacing credentials means configuring a new session.
#[derive(Debug)]
pub struct Session {
    credentials: ExchangeCredentials,
    gateway: Arc<dyn ExchangeGateway>,
    configured_at: Timestamp,
}

impl Session {
    /// Returns the gateway bound to this session's credentials.
    #[inline]
    #[must_use]
    pub fn gateway(&self) -> &Arc<dyn ExchangeGateway> {
        &self.gateway
    }

    /// Returns true if this session targets the sandbox endpoint.
    #[inline]
    #[must_use]
    pub fn testnet(&self) -> bool {
        self.credentials.testnet()
    }

    /// Returns when this session was configured.
    #[inline]
    #[must_use]
    pub fn configured_at(&self) -> Timestamp {
        self.configured_at
    }
}

/// Thread-safe registry owning the current session.
///
/// `Unconfigured` is simply the absence of a session. There is no
/// `Closed` state; reconfiguration swaps the session in place.
pub struct SessionManager {
    factory: Arc<dyn GatewayFactory>,
    current: RwLock<Option<Arc<Session>>>,
}

impl SessionManager {
    /// Creates a manager in the unconfigured state.
    #[must_use]
    pub fn new(factory: Arc<dyn GatewayFactory>) -> Self {
        Self {
            factory,
            current: RwLock::new(None),
        }
    }

    /// Configures a new session from `credentials`.
    ///
    /// Validates credential shape, builds a gateway bound to the
    /// credentials, then atomically replaces the current session. On any
    /// error the previous session (or the unconfigured state) is left
    /// untouched. In-flight operations holding the previous session's
    /// `Arc` complete against the snapshot they started with.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingApiKey`] / [`ConfigError::MissingApiSecret`]
    ///   for empty key material
    /// - [`ConfigError::Gateway`] if the gateway cannot be constructed
    pub fn configure(&self, credentials: ExchangeCredentials) -> ConfigResult<Arc<Session>> {
        if !credentials.has_api_key() {
            return Err(ConfigError::MissingApiKey);
        }
        if !credentials.has_api_secret() {
            return Err(ConfigError::MissingApiSecret);
        }

        let gateway = self.factory.build(&credentials)?;
        let session = Arc::new(Session {
            credentials,
            gateway,
            configured_at: Timestamp::now(),
        });

        *self.current.write() = Some(Arc::clone(&session));
        tracing::info!(testnet = session.testnet(), "session configured");
        Ok(session)
    }

    /// Returns a snapshot of the current session, if configured.
    #[must_use]
    pub fn current(&self) -> Option<Arc<Session>> {
        self.current.read().clone()
    }

    /// Returns true if a session is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.current.read().is_some()
    }
}

impl fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionManager")
            .field("configured", &self.is_configured())
            .finish()
    }
}
