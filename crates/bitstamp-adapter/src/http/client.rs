/*
[INPUT]:  HTTP configuration (base URL, timeouts, credentials)
[OUTPUT]: Configured reqwest client and shared request dispatch
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing dispatch behavior
*/

use crate::http::signature::RequestSigner;
use crate::http::{BitstampError, Result};
use reqwest::{Client, Url};
use serde_json::{json, Value};
use std::time::Duration;

/// Base URL for the Bitstamp API
const BASE_URL: &str = "https://www.bitstamp.net";

/// Error code for a failed HTTP round trip
const ERROR_TRANSPORT: i64 = 1;
/// Error code for an unparseable or empty response body
const ERROR_DECODE: i64 = 2;

const INVALID_DATA_MESSAGE: &str =
    "Invalid data received, please make sure connection is working and requested API exists";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Credentials for authenticated requests
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
    pub client_id: String,
}

impl Credentials {
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            client_id: client_id.into(),
        }
    }
}

/// Main HTTP client for the Bitstamp API
#[derive(Debug)]
pub struct BitstampClient {
    http_client: Client,
    base_url: Url,
    signer: RequestSigner,
}

impl BitstampClient {
    /// Create a new client with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(credentials, config, BASE_URL)
    }

    /// Create a new client against a non-default base URL (mock servers, staging)
    pub fn with_config_and_base_url(
        credentials: Credentials,
        config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(BitstampError::Http)?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            signer: RequestSigner::new(credentials),
        })
    }

    /// Perform an authenticated POST to `/api/{action}/`
    ///
    /// Appends `nonce`, `key` and `signature` to the caller's parameters and
    /// sends them as a form-encoded body. Every outcome is folded into a
    /// `Value`: the exchange's payload verbatim on success, or the sentinel
    /// object `{"error": code, "message": ...}` on transport (code 1) and
    /// decode/empty-body (code 2) failures. Exchange-reported business errors
    /// pass through untouched; callers should check for an `error` key before
    /// interpreting the payload.
    pub(crate) async fn request(
        &self,
        action: &str,
        mut params: Vec<(&'static str, String)>,
    ) -> Value {
        let nonce = self.signer.nonce();
        let signature = self.signer.sign(&nonce);
        params.push(("nonce", nonce));
        params.push(("key", self.signer.api_key().to_string()));
        params.push(("signature", signature));

        tracing::debug!(action, "dispatching API request");

        let url = match self.base_url.join(&format!("/api/{action}/")) {
            Ok(url) => url,
            Err(e) => return transport_error(e.to_string()),
        };

        let response = match self.http_client.post(url).form(&params).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(action, error = %e, "transport failure");
                return transport_error(e.to_string());
            }
        };

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(action, error = %e, "failed to read response body");
                return transport_error(e.to_string());
            }
        };

        match serde_json::from_str::<Value>(&body) {
            Ok(data) if !is_empty_payload(&data) => data,
            _ => {
                tracing::warn!(action, "invalid or empty response body");
                decode_error()
            }
        }
    }
}

fn transport_error(message: String) -> Value {
    json!({ "error": ERROR_TRANSPORT, "message": message })
}

fn decode_error() -> Value {
    json!({ "error": ERROR_DECODE, "message": INVALID_DATA_MESSAGE })
}

/// A decoded body that carries no usable payload: null, false, zero, the
/// empty string, the string "0", or an empty array/object. Matches the
/// exchange wrapper's original falsiness rules, where "0" is also empty.
fn is_empty_payload(data: &Value) -> bool {
    match data {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
