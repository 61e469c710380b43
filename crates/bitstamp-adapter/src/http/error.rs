/*
[INPUT]:  Error sources (HTTP client construction, URL parsing)
[OUTPUT]: Structured error types for client setup
[POS]:    Error handling layer - construction-time failures only
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the Bitstamp adapter
///
/// These errors can only occur while constructing a client. Once a client
/// exists, every API call returns a `serde_json::Value`; transport and decode
/// failures are folded into the `{"error": code, "message": ...}` sentinel
/// rather than surfaced here.
#[derive(Error, Debug)]
pub enum BitstampError {
    /// HTTP client construction failed
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias for Bitstamp adapter operations
pub type Result<T> = std::result::Result<T, BitstampError>;
