use serde::{Deserialize, Serialize};

use super::Timestamp;

/// A product listing as returned by `/v2/product/all` and
/// `/v2/product/{id}`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Product {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    /// Numeric listing status (draft/live/sold and so on, backend-defined).
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default)]
    pub category_id: Option<i64>,
    /// Carries the deepest selected category level, not the middle one.
    #[serde(default)]
    pub sub_category_id: Option<i64>,
    #[serde(default)]
    pub brand_id: Option<i64>,
    #[serde(default)]
    pub custom_brand: Option<String>,
    #[serde(default)]
    pub size_id: Option<i64>,
    #[serde(default)]
    pub condition_id: Option<i64>,
    #[serde(default)]
    pub color_ids: Option<Vec<i64>>,
    #[serde(default)]
    pub custom_color: Option<String>,
    #[serde(default)]
    pub material_ids: Option<Vec<i64>>,
    #[serde(default)]
    pub custom_material: Option<String>,
    #[serde(default)]
    pub is_negotiable: Option<bool>,
    /// Absolute URLs or backend-relative paths; callers join relative ones
    /// with the configured image base.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}
