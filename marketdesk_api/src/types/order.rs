use serde::{Deserialize, Serialize};

use super::{Product, Timestamp};

/// An order as returned by `/v2/order` and `/v2/order/{id}`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Order {
    pub id: i64,
    #[serde(default)]
    pub order_no: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub buyer: Option<OrderParty>,
    #[serde(default)]
    pub seller: Option<OrderParty>,
    #[serde(default)]
    pub product: Option<Product>,
    /// Present only on the detail endpoint.
    #[serde(default)]
    pub tracking: Option<OrderTracking>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

/// Buyer/seller summary embedded in an order.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OrderParty {
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Shipment tracking block on the order detail.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OrderTracking {
    #[serde(default)]
    pub carrier: Option<String>,
    #[serde(default)]
    pub tracking_number: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}
