use serde::{Deserialize, Serialize};

/// Headline counters from `/v2/dashboard/stats`.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_users: i64,
    #[serde(default)]
    pub total_products: i64,
    #[serde(default)]
    pub total_orders: i64,
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub pending_return_requests: i64,
    #[serde(default)]
    pub open_enquiries: i64,
}
