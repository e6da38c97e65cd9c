//! Reference lookup tables used to populate form selectors.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SubCategory {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Brand {
    pub id: i64,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Size {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category_id: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Color {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub hex: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Material {
    pub id: i64,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Condition {
    pub id: i64,
    pub name: String,
}
