/*
[INPUT]:  Order, code and withdrawal parameters
[OUTPUT]: Order placement/cancellation and withdrawal confirmations
[POS]:    HTTP layer - trading and funds-movement endpoints
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use crate::http::BitstampClient;
use rust_decimal::Decimal;
use serde_json::Value;

impl BitstampClient {
    /// Place a limit buy order
    ///
    /// POST /api/buy/
    pub async fn buy(&self, amount: Decimal, price: Decimal) -> Value {
        self.request(
            "buy",
            vec![("amount", amount.to_string()), ("price", price.to_string())],
        )
        .await
    }

    /// Place a limit sell order
    ///
    /// POST /api/sell/
    pub async fn sell(&self, amount: Decimal, price: Decimal) -> Value {
        self.request(
            "sell",
            vec![("amount", amount.to_string()), ("price", price.to_string())],
        )
        .await
    }

    /// Cancel an open order
    ///
    /// POST /api/cancel_order/
    pub async fn cancel_order(&self, id: u64) -> Value {
        self.request("cancel_order", vec![("id", id.to_string())])
            .await
    }

    /// Check the value of a Bitstamp code
    ///
    /// POST /api/check_code/
    pub async fn check_code(&self, code: &str) -> Value {
        self.request("check_code", vec![("code", code.to_string())])
            .await
    }

    /// Redeem a Bitstamp code
    ///
    /// POST /api/redeem/
    pub async fn redeem_code(&self, code: &str) -> Value {
        self.request("redeem", vec![("code", code.to_string())])
            .await
    }

    /// Request a withdrawal to a Bitcoin address
    ///
    /// POST /api/bitcoin_withdrawal/
    pub async fn withdraw_bitcoin(&self, amount: Decimal, address: &str) -> Value {
        self.request(
            "bitcoin_withdrawal",
            vec![
                ("amount", amount.to_string()),
                ("address", address.to_string()),
            ],
        )
        .await
    }

    /// Request a withdrawal to a Ripple address
    ///
    /// POST /api/ripple_withdrawal/
    pub async fn withdraw_ripple(&self, amount: Decimal, address: &str, currency: &str) -> Value {
        self.request(
            "ripple_withdrawal",
            vec![
                ("amount", amount.to_string()),
                ("address", address.to_string()),
                ("currency", currency.to_string()),
            ],
        )
        .await
    }
}
