//! # Binance USDT-M Futures Gateway
//!
//! Production [`ExchangeGateway`] implementation.
//!
//! Submits orders to the Binance futures REST API with an HMAC-SHA256
//! signature over the urlencoded parameter string, the way the exchange
//! requires for signed endpoints. The credential set's `testnet` flag
//! selects the sandbox host over production.
//!
//! No retries: one `submit` call is one HTTP request, bounded by the
//! client timeout.

use crate::domain::value_objects::{ExchangeCredentials, Timestamp};
use crate::infrastructure::exchange::error::{GatewayError, GatewayResult};
use crate::infrastructure::exchange::params::ExchangeOrderParams;
use crate::infrastructure::exchange::traits::{ExchangeAck, ExchangeGateway, GatewayFactory};
use async_trait::async_trait;
use hmac::{Hmac, Mac};
use reqwest::StatusCode;
use serde::Deserialize;
use sha2::Sha256;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

type HmacSha256 = Hmac<Sha256>;

/// Sandbox futures REST host.
pub const TESTNET_BASE_URL: &str = "https://testnet.binancefuture.com";
/// Production futures REST host.
pub const MAINNET_BASE_URL: &str = "https://fapi.binance.com";

/// Signed order-submission endpoint.
const ORDER_PATH: &str = "/fapi/v1/order";

/// Default per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;
/// Default `recvWindow` sent with signed requests, in milliseconds.
pub const DEFAULT_RECV_WINDOW_MS: u64 = 5_000;

/// Error body returned by the exchange for rejected requests.
#[derive(Debug, Deserialize)]
struct BinanceErrorBody {
    code: i64,
    msg: String,
}

/// Gateway bound to one credential set.
#[derive(Clone)]
pub struct BinanceFuturesGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    api_secret: String,
    recv_window_ms: u64,
}

impl BinanceFuturesGateway {
    /// Creates a gateway bound to `credentials`.
    ///
    /// The base URL follows the credential set's `testnet` flag. This does
    /// not contact the exchange; a bad key surfaces on the first `submit`.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Network` if the HTTP client cannot be built.
    pub fn new(
        credentials: &ExchangeCredentials,
        timeout_ms: u64,
        recv_window_ms: u64,
    ) -> GatewayResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| GatewayError::network(format!("failed to build HTTP client: {e}")))?;

        let base_url = if credentials.testnet() {
            TESTNET_BASE_URL
        } else {
            MAINNET_BASE_URL
        };

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            api_key: credentials.api_key().to_string(),
            api_secret: credentials.api_secret().to_string(),
            recv_window_ms,
        })
    }

    /// Overrides the base URL. Intended for tests against a local server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Returns the active base URL.
    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the urlencoded parameter string the signature covers.
    fn build_payload(&self, params: &ExchangeOrderParams, timestamp_ms: i64) -> String {
        let mut payload = format!(
            "symbol={symbol}&side={side}&type={order_type}&quantity={quantity}",
            symbol = params.symbol(),
            side = params.side(),
            order_type = params.order_type(),
            quantity = params.quantity(),
        );

        if let Some(price) = params.price() {
            payload.push_str(&format!("&price={price}"));
        }
        if let Some(tif) = params.time_in_force() {
            payload.push_str(&format!("&timeInForce={tif}"));
        }

        payload.push_str(&format!(
            "&recvWindow={recv_window}&timestamp={timestamp_ms}",
            recv_window = self.recv_window_ms,
        ));
        payload
    }

    /// Signs `payload` with the bound API secret.
    fn sign(&self, payload: &str) -> GatewayResult<String> {
        let mut mac = HmacSha256::new_from_slice(self.api_secret.as_bytes())
            .map_err(|e| GatewayError::auth(format!("unusable API secret: {e}")))?;
        mac.update(payload.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    /// Maps a non-success HTTP status to a gateway error.
    fn map_status_error(status: StatusCode, body: &str) -> GatewayError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                GatewayError::auth(format!("HTTP {status}: {body}"))
            }
            StatusCode::TOO_MANY_REQUESTS => {
                GatewayError::network(format!("rate limited: HTTP {status}: {body}"))
            }
            status if status.is_server_error() => {
                GatewayError::network(format!("server error: HTTP {status}: {body}"))
            }
            _ => match serde_json::from_str::<BinanceErrorBody>(body) {
                Ok(parsed) => GatewayError::rejected_with_code(parsed.msg, parsed.code),
                Err(_) => GatewayError::rejected(format!("HTTP {status}: {body}")),
            },
        }
    }
}

impl fmt::Debug for BinanceFuturesGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinanceFuturesGateway")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("api_secret", &"<redacted>")
            .field("recv_window_ms", &self.recv_window_ms)
            .finish()
    }
}

#[async_trait]
impl ExchangeGateway for BinanceFuturesGateway {
    fn name(&self) -> &'static str {
        "binance-futures"
    }

    async fn submit(&self, params: &ExchangeOrderParams) -> GatewayResult<ExchangeAck> {
        let timestamp_ms = Timestamp::now().timestamp_millis();
        let payload = self.build_payload(params, timestamp_ms);
        let signature = self.sign(&payload)?;
        let body = format!("{payload}&signature={signature}");

        let url = format!("{}{}", self.base_url, ORDER_PATH);
        tracing::debug!(order = %params, url = %url, "submitting order");

        let response = self
            .client
            .post(&url)
            .header("X-MBX-APIKEY", &self.api_key)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::network(format!("request timed out: {e}"))
                } else {
                    GatewayError::network(format!("request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::map_status_error(status, &body));
        }

        let raw: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GatewayError::network(format!("unreadable acknowledgement: {e}")))?;

        let exchange_order_id = raw
            .get("orderId")
            .and_then(|id| {
                id.as_i64()
                    .map(|n| n.to_string())
                    .or_else(|| id.as_str().map(str::to_string))
            })
            .ok_or_else(|| GatewayError::rejected("acknowledgement missing orderId"))?;

        Ok(ExchangeAck::new(exchange_order_id, raw))
    }
}

/// Factory producing [`BinanceFuturesGateway`] instances.
#[derive(Debug, Clone)]
pub struct BinanceGatewayFactory {
    timeout_ms: u64,
    recv_window_ms: u64,
}

impl BinanceGatewayFactory {
    /// Creates a factory with the given per-request timeout and
    /// `recvWindow`.
    #[must_use]
    pub fn new(timeout_ms: u64, recv_window_ms: u64) -> Self {
        Self {
            timeout_ms,
            recv_window_ms,
        }
    }
}

impl Default for BinanceGatewayFactory {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT_MS, DEFAULT_RECV_WINDOW_MS)
    }
}

impl GatewayFactory for BinanceGatewayFactory {
    fn build(
        &self,
        credentials: &ExchangeCredentials,
    ) -> GatewayResult<Arc<dyn ExchangeGateway>> {
        let gateway =
            BinanceFuturesGateway::new(credentials, self.timeout_ms, self.recv_window_ms)?;
        Ok(Arc::new(gateway))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::{OrderDraft, OrderRequest};
    use rust_decimal::Decimal;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn creds() -> ExchangeCredentials {
        ExchangeCredentials::new("test-key", "test-secret", true)
    }

    fn gateway(timeout_ms: u64) -> BinanceFuturesGateway {
        BinanceFuturesGateway::new(&creds(), timeout_ms, DEFAULT_RECV_WINDOW_MS).unwrap()
    }

    fn market_params() -> ExchangeOrderParams {
        let draft = OrderDraft::market("btcusdt", "buy", Decimal::new(1, 2));
        ExchangeOrderParams::from_request(&OrderRequest::validate(&draft).unwrap())
    }

    fn limit_params() -> ExchangeOrderParams {
        let draft = OrderDraft::limit(
            "btcusdt",
            "sell",
            Decimal::new(5, 1),
            Some(Decimal::new(64_000, 0)),
        );
        ExchangeOrderParams::from_request(&OrderRequest::validate(&draft).unwrap())
    }

    mod payload {
        use super::*;

        #[test]
        fn market_payload_has_no_price_or_tif() {
            let payload = gateway(1_000).build_payload(&market_params(), 1_700_000_000_000);
            assert!(payload.starts_with("symbol=BTCUSDT&side=BUY&type=MARKET&quantity=0.01"));
            assert!(!payload.contains("price="));
            assert!(!payload.contains("timeInForce="));
            assert!(payload.contains("recvWindow=5000"));
            assert!(payload.ends_with("&timestamp=1700000000000"));
        }

        #[test]
        fn limit_payload_carries_price_and_gtc() {
            let payload = gateway(1_000).build_payload(&limit_params(), 1_700_000_000_000);
            assert!(payload.contains("type=LIMIT"));
            assert!(payload.contains("&price=64000"));
            assert!(payload.contains("&timeInForce=GTC"));
        }

        #[test]
        fn signature_is_deterministic_hex() {
            let gw = gateway(1_000);
            let payload = gw.build_payload(&market_params(), 1_700_000_000_000);
            let a = gw.sign(&payload).unwrap();
            let b = gw.sign(&payload).unwrap();
            assert_eq!(a, b);
            assert_eq!(a.len(), 64);
            assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    mod base_url {
        use super::*;

        #[test]
        fn testnet_flag_selects_sandbox_host() {
            let gw = gateway(1_000);
            assert_eq!(gw.base_url(), TESTNET_BASE_URL);

            let prod = ExchangeCredentials::new("k", "s", false);
            let gw = BinanceFuturesGateway::new(&prod, 1_000, 5_000).unwrap();
            assert_eq!(gw.base_url(), MAINNET_BASE_URL);
        }

        #[test]
        fn debug_redacts_key_material() {
            let rendered = format!("{:?}", gateway(1_000));
            assert!(!rendered.contains("test-key"));
            assert!(!rendered.contains("test-secret"));
        }
    }

    mod submit {
        use super::*;

        #[tokio::test]
        async fn accepted_order_yields_ack() {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path("/fapi/v1/order"))
                .and(header("X-MBX-APIKEY", "test-key"))
                .and(body_string_contains("symbol=BTCUSDT&side=BUY&type=MARKET"))
                .and(body_string_contains("&signature="))
                .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "orderId": 4_061_921_i64,
                    "symbol": "BTCUSDT",
                    "status": "NEW"
                })))
                .expect(1)
                .mount(&server)
                .await;

            let gw = gateway(2_000).with_base_url(server.uri());
            let ack = gw.submit(&market_params()).await.unwrap();
            assert_eq!(ack.exchange_order_id(), "4061921");
            assert_eq!(ack.raw().get("status").unwrap(), "NEW");
        }

        #[tokio::test]
        async fn http_401_maps_to_auth() {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path("/fapi/v1/order"))
                .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                    "code": -2014, "msg": "API-key format invalid."
                })))
                .mount(&server)
                .await;

            let gw = gateway(2_000).with_base_url(server.uri());
            let error = gw.submit(&market_params()).await.unwrap_err();
            assert!(error.is_auth());
        }

        #[tokio::test]
        async fn http_400_maps_to_rejected_with_code() {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path("/fapi/v1/order"))
                .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                    "code": -2019, "msg": "Margin is insufficient."
                })))
                .mount(&server)
                .await;

            let gw = gateway(2_000).with_base_url(server.uri());
            let error = gw.submit(&limit_params()).await.unwrap_err();
            assert!(error.is_rejected());
            assert_eq!(error.code(), Some(-2019));
            assert!(error.to_string().contains("Margin is insufficient."));
        }

        #[tokio::test]
        async fn http_503_maps_to_network() {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path("/fapi/v1/order"))
                .respond_with(ResponseTemplate::new(503))
                .mount(&server)
                .await;

            let gw = gateway(2_000).with_base_url(server.uri());
            let error = gw.submit(&market_params()).await.unwrap_err();
            assert!(error.is_network());
        }

        #[tokio::test]
        async fn timeout_maps_to_network() {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path("/fapi/v1/order"))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_json(serde_json::json!({"orderId": 1}))
                        .set_delay(Duration::from_millis(500)),
                )
                .mount(&server)
                .await;

            let gw = gateway(100).with_base_url(server.uri());
            let error = gw.submit(&market_params()).await.unwrap_err();
            assert!(error.is_network());
        }

        #[tokio::test]
        async fn missing_order_id_is_rejected() {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path("/fapi/v1/order"))
                .respond_with(
                    ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "NEW"})),
                )
                .mount(&server)
                .await;

            let gw = gateway(2_000).with_base_url(server.uri());
            let error = gw.submit(&market_params()).await.unwrap_err();
            assert!(error.is_rejected());
        }
    }

    mod factory {
        use super::*;

        #[test]
        fn builds_gateway_without_network_io() {
            let factory = BinanceGatewayFactory::default();
            let gateway = factory.build(&creds()).unwrap();
            assert_eq!(gateway.name(), "binance-futures");
        }
    }
}
