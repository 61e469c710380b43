/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Bitstamp adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;

// Re-export commonly used types from http
pub use http::{
    BitstampClient,
    BitstampError,
    ClientConfig,
    Credentials,
    RequestSigner,
    Result,
};
