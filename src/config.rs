//! # Application Configuration
//!
//! Layered configuration: built-in defaults, an optional `config.toml`,
//! and `FUTURES_DESK__*` environment overrides (loaded after `.env` via
//! `dotenvy` in the binary). Credentials are NOT configuration; they
//! arrive at runtime through `POST /setup`.
//!
//! # Examples
//!
//! ```
//! use futures_desk::config::AppConfig;
//!
//! let config = AppConfig::default();
//! assert_eq!(config.bind_addr(), "127.0.0.1:5000");
//! ```

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for configuration loading.
#[derive(Debug, Error)]
#[error("configuration error: {0}")]
pub struct ConfigLoadError(#[from] config::ConfigError);

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

/// Exchange gateway settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExchangeConfig {
    /// Transport timeout per exchange request, in milliseconds.
    pub request_timeout_ms: u64,
    /// `recvWindow` sent with signed requests, in milliseconds.
    pub recv_window_ms: u64,
    /// Service-level deadline on one order submission, in milliseconds.
    pub submit_timeout_ms: u64,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: 5_000,
            recv_window_ms: 5_000,
            submit_timeout_ms: 10_000,
        }
    }
}

/// Audit trail settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Path of the append-only audit log file.
    pub log_path: PathBuf,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("audit.log"),
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Exchange gateway settings.
    pub exchange: ExchangeConfig,
    /// Audit trail settings.
    pub audit: AuditConfig,
}

impl AppConfig {
    /// Loads configuration from `config.toml` (optional) and the
    /// environment.
    ///
    /// Environment variables use the `FUTURES_DESK` prefix with `__` as
    /// the section separator, e.g. `FUTURES_DESK__SERVER__PORT=8080`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigLoadError`] if a source is malformed.
    pub fn load() -> Result<Self, ConfigLoadError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("FUTURES_DESK").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Returns the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:5000");
        assert_eq!(config.exchange.request_timeout_ms, 5_000);
        assert_eq!(config.exchange.submit_timeout_ms, 10_000);
        assert_eq!(config.audit.log_path, PathBuf::from("audit.log"));
    }

    #[test]
    fn partial_file_overrides_defaults() {
        let source = r#"
            [server]
            port = 8080

            [audit]
            log_path = "/var/log/desk/audit.log"
        "#;
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(source, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.exchange.recv_window_ms, 5_000);
        assert_eq!(config.audit.log_path, PathBuf::from("/var/log/desk/audit.log"));
    }
}
