/*
[INPUT]:  API credentials and the wall clock
[OUTPUT]: Per-request nonce and uppercase hex HMAC-SHA256 signature
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or nonce format
*/

use crate::http::Credentials;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};

type HmacSha256 = Hmac<Sha256>;

/// Signs API requests with the account's HMAC credentials
#[derive(Debug)]
pub struct RequestSigner {
    credentials: Credentials,
}

impl RequestSigner {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    pub fn api_key(&self) -> &str {
        &self.credentials.api_key
    }

    /// Generate a nonce from the current wall-clock time
    ///
    /// Unix seconds concatenated with the zero-padded 6-digit microsecond
    /// fraction. Monotonic in practice, not guaranteed: rapid successive
    /// calls on a coarse clock, or a clock stepped backwards, can repeat a
    /// value; the exchange rejects a reused nonce and the caller retries.
    pub fn nonce(&self) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        format!("{}{:06}", now.as_secs(), now.subsec_micros())
    }

    /// Sign a nonce according to the Bitstamp API specification
    ///
    /// Message is `{nonce}{client_id}{api_key}`, keyed with the API secret.
    /// Returns the uppercase hex digest.
    pub fn sign(&self, nonce: &str) -> String {
        let message = format!(
            "{nonce}{}{}",
            self.credentials.client_id, self.credentials.api_key
        );
        // HMAC-SHA256 accepts keys of any length, so this cannot fail.
        let mut mac = match HmacSha256::new_from_slice(self.credentials.api_secret.as_bytes()) {
            Ok(mac) => mac,
            Err(e) => {
                tracing::error!(error = %e, "HMAC initialization failed");
                return String::new();
            }
        };
        mac.update(message.as_bytes());
        hex::encode(mac.finalize().into_bytes()).to_uppercase()
    }
}
