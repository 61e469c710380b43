/*
[INPUT]:  Pagination and sort parameters
[OUTPUT]: Account data (balance, transactions, open orders, deposits, withdrawals)
[POS]:    HTTP layer - account endpoints
[UPDATE]: When adding new account endpoints or changing query parameters
*/

use crate::http::public::transaction_params;
use crate::http::BitstampClient;
use serde_json::Value;

impl BitstampClient {
    /// Retrieve the account balance
    ///
    /// POST /api/balance/
    pub async fn balance(&self) -> Value {
        self.request("balance", Vec::new()).await
    }

    /// Retrieve the account's transactions
    ///
    /// POST /api/user_transactions/
    /// Defaults: offset 0, limit 100, sort "desc".
    pub async fn user_transactions(
        &self,
        offset: Option<u64>,
        limit: Option<u64>,
        sort: Option<&str>,
    ) -> Value {
        self.request("user_transactions", transaction_params(offset, limit, sort))
            .await
    }

    /// Retrieve the account's open orders
    ///
    /// POST /api/open_orders/
    pub async fn open_orders(&self) -> Value {
        self.request("open_orders", Vec::new()).await
    }

    /// Retrieve the account's withdrawal requests
    ///
    /// POST /api/withdrawal_request/
    pub async fn withdrawals(&self) -> Value {
        self.request("withdrawal_request", Vec::new()).await
    }

    /// Retrieve the Bitcoin deposit address for the account
    ///
    /// POST /api/bitcoin_deposit_address/
    pub async fn deposit_bitcoin_address(&self) -> Value {
        self.request("bitcoin_deposit_address", Vec::new()).await
    }

    /// Retrieve unconfirmed Bitcoin deposits
    ///
    /// POST /api/unconfirmed_btc/
    pub async fn unconfirmed_deposits(&self) -> Value {
        self.request("unconfirmed_btc", Vec::new()).await
    }

    /// Retrieve the Ripple deposit address for the account
    ///
    /// POST /api/ripple_address/
    pub async fn deposit_ripple_address(&self) -> Value {
        self.request("ripple_address", Vec::new()).await
    }
}
