use serde::{Deserialize, Serialize};

use super::{Order, Timestamp};

/// A buyer-initiated return claim against a completed order, as returned by
/// `/v2/chat/return-request`. Approval and rejection are server-side rules;
/// the dashboard only triggers them.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ReturnRequest {
    pub id: i64,
    #[serde(default)]
    pub order_id: Option<i64>,
    #[serde(default)]
    pub reason: Option<String>,
    /// "pending", "approved", or "rejected".
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub order: Option<Order>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}
