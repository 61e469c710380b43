/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for bitstamp-adapter tests

use bitstamp_adapter::{BitstampClient, ClientConfig, Credentials};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Fixed credentials for testing
pub fn test_credentials() -> Credentials {
    Credentials::new("apikey123", "topsecret", "918273")
}

/// Build a client pointed at the given mock server
pub fn client_for(server: &MockServer) -> BitstampClient {
    BitstampClient::with_config_and_base_url(
        test_credentials(),
        ClientConfig::default(),
        &server.uri(),
    )
    .expect("client init")
}
