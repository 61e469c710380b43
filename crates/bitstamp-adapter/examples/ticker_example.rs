/*
[INPUT]:  API credentials from the environment
[OUTPUT]: Current ticker, order book depth and EUR/USD rate on stdout
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use bitstamp_adapter::{BitstampClient, Credentials};

/// Example: Query market data
///
/// These endpoints still go through the signed POST dispatch, so real
/// credentials are required.
#[tokio::main]
async fn main() {
    println!("=== Bitstamp Market Data Example ===\n");

    let credentials = match (
        std::env::var("BITSTAMP_API_KEY"),
        std::env::var("BITSTAMP_API_SECRET"),
        std::env::var("BITSTAMP_CLIENT_ID"),
    ) {
        (Ok(key), Ok(secret), Ok(client_id)) => Credentials::new(key, secret, client_id),
        _ => {
            eprintln!(
                "Set BITSTAMP_API_KEY, BITSTAMP_API_SECRET and BITSTAMP_CLIENT_ID to run this example"
            );
            return;
        }
    };

    let client = match BitstampClient::new(credentials) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created\n");

    println!("Querying ticker...");
    let ticker = client.ticker().await;
    println!("✓ Ticker: {}", ticker);

    println!("\nQuerying grouped order book...");
    let book = client.order_book(None).await;
    match book.get("bids").and_then(|bids| bids.as_array()) {
        Some(bids) => println!("✓ Order book with {} bid levels", bids.len()),
        None => println!("✗ Unexpected response: {}", book),
    }

    println!("\nQuerying EUR/USD rate...");
    let rate = client.exchange_rate().await;
    println!("✓ Rate: {}", rate);

    println!("\n✓ Market data example complete");
}
