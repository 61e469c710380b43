/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses as decoded JSON values
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod public;
pub mod signature;
pub mod trade;
pub mod user;

pub use error::{BitstampError, Result};
pub use signature::RequestSigner;

pub use client::{BitstampClient, ClientConfig, Credentials};
