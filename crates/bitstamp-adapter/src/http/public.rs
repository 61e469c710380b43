/*
[INPUT]:  Optional query parameters (grouping, pagination, sort order)
[OUTPUT]: Market data (ticker, order book, transactions, EUR/USD rate)
[POS]:    HTTP layer - public market data endpoints
[UPDATE]: When adding new market data endpoints or changing parameter defaults
*/

use crate::http::BitstampClient;
use serde_json::Value;

/// Fold a requested sort direction onto the two values the API accepts.
///
/// Case-insensitive "asc" stays ascending; everything else, including an
/// absent value, becomes "desc".
pub(crate) fn normalize_sort(sort: Option<&str>) -> &'static str {
    match sort {
        Some(s) if s.eq_ignore_ascii_case("asc") => "asc",
        _ => "desc",
    }
}

/// Shared parameter shaping for the two transaction-list endpoints
pub(crate) fn transaction_params(
    offset: Option<u64>,
    limit: Option<u64>,
    sort: Option<&str>,
) -> Vec<(&'static str, String)> {
    vec![
        ("offset", offset.unwrap_or(0).to_string()),
        ("limit", limit.unwrap_or(100).to_string()),
        ("sort", normalize_sort(sort).to_string()),
    ]
}

impl BitstampClient {
    /// Retrieve the ticker
    ///
    /// POST /api/ticker/
    pub async fn ticker(&self) -> Value {
        self.request("ticker", Vec::new()).await
    }

    /// Retrieve the order book
    ///
    /// POST /api/order_book/
    /// `group` controls whether orders are grouped by price; defaults to grouped.
    pub async fn order_book(&self, group: Option<bool>) -> Value {
        let group = if group.unwrap_or(true) { "1" } else { "0" };
        self.request("order_book", vec![("group", group.to_string())])
            .await
    }

    /// Retrieve recent market transactions
    ///
    /// POST /api/transactions/
    /// Defaults: offset 0, limit 100, sort "desc".
    pub async fn transactions(
        &self,
        offset: Option<u64>,
        limit: Option<u64>,
        sort: Option<&str>,
    ) -> Value {
        self.request("transactions", transaction_params(offset, limit, sort))
            .await
    }

    /// Retrieve the EUR/USD conversion rate
    ///
    /// POST /api/eur_usd/
    pub async fn exchange_rate(&self) -> Value {
        self.request("eur_usd", Vec::new()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{ClientConfig, Credentials};
    use rstest::rstest;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_client(server: &MockServer) -> BitstampClient {
        BitstampClient::with_config_and_base_url(
            Credentials::new("apikey123", "topsecret", "918273"),
            ClientConfig::default(),
            &server.uri(),
        )
        .expect("client init")
    }

    #[rstest]
    #[case(None, "desc")]
    #[case(Some(""), "desc")]
    #[case(Some("xyz"), "desc")]
    #[case(Some("Desc"), "desc")]
    #[case(Some("asc"), "asc")]
    #[case(Some("ASC"), "asc")]
    #[case(Some("aSc"), "asc")]
    fn test_normalize_sort(#[case] input: Option<&str>, #[case] expected: &str) {
        assert_eq!(normalize_sort(input), expected);
    }

    #[tokio::test]
    async fn test_ticker_passes_payload_through() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("POST"))
            .and(path("/api/ticker/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(r#"{"bid": "100.0", "ask": "101.0"}"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server).await;
        let response = client.ticker().await;

        assert_eq!(response, serde_json::json!({"bid": "100.0", "ask": "101.0"}));
        assert!(response.get("error").is_none());
    }

    #[tokio::test]
    async fn test_order_book_defaults_to_grouped() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("POST"))
            .and(path("/api/order_book/"))
            .and(body_string_contains("group=1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(r#"{"bids": [], "asks": [], "timestamp": "1"}"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server).await;
        let response = client.order_book(None).await;
        assert!(response.get("error").is_none());
    }

    #[tokio::test]
    async fn test_order_book_ungrouped() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("POST"))
            .and(path("/api/order_book/"))
            .and(body_string_contains("group=0"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(r#"{"bids": [], "asks": [], "timestamp": "1"}"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server).await;
        let response = client.order_book(Some(false)).await;
        assert!(response.get("error").is_none());
    }

    #[tokio::test]
    async fn test_transactions_sends_defaults() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("POST"))
            .and(path("/api/transactions/"))
            .and(body_string_contains("offset=0"))
            .and(body_string_contains("limit=100"))
            .and(body_string_contains("sort=desc"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(r#"[{"tid": 1, "price": "99.9"}]"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server).await;
        let response = client.transactions(None, None, None).await;
        assert!(response.is_array());
    }

    #[tokio::test]
    async fn test_transactions_normalizes_sort() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("POST"))
            .and(path("/api/transactions/"))
            .and(body_string_contains("offset=50"))
            .and(body_string_contains("limit=10"))
            .and(body_string_contains("sort=asc"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw("[1]", "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server).await;
        let response = client.transactions(Some(50), Some(10), Some("ASC")).await;
        assert!(response.get("error").is_none());
    }

    #[tokio::test]
    async fn test_exchange_rate() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("POST"))
            .and(path("/api/eur_usd/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(r#"{"buy": "1.10", "sell": "1.08"}"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server).await;
        let response = client.exchange_rate().await;
        assert_eq!(response.get("buy").and_then(Value::as_str), Some("1.10"));
    }
}
