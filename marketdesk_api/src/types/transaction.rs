use serde::{Deserialize, Serialize};

use super::Timestamp;

/// An escrow-provider transaction row from `/v2/trustap-transactions`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TrustapTransaction {
    pub id: i64,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub pay_status: Option<String>,
    #[serde(default)]
    pub claim_status: Option<String>,
    #[serde(default)]
    pub order_ids: Option<Vec<i64>>,
    #[serde(default)]
    pub buyer_email: Option<String>,
    #[serde(default)]
    pub seller_email: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

/// A user's escrow account summary from `/v2/user/{id}/trustap`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TrustapAccount {
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub balance: Option<f64>,
}

/// One row of a user's wallet transaction history.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WalletTransaction {
    pub id: i64,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(rename = "type", default)]
    pub tx_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

/// Response of `/v2/user/{id}/transactions`. The whole history arrives in
/// one call with no pagination object; clients page it locally.
#[derive(Serialize, Deserialize, Debug)]
pub struct WalletHistory {
    #[serde(default = "Vec::new")]
    pub data: Vec<WalletTransaction>,
    #[serde(default)]
    pub pending_balance: f64,
}
