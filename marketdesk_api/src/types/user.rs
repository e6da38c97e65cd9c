use serde::{Deserialize, Serialize};

use super::Timestamp;

/// A marketplace account as returned by `/v2/user` and
/// `/v2/user/user-info`. Most fields are optional on the wire; the
/// dashboard renders placeholders for whatever is missing.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub profile_img: Option<String>,
    /// Account type ("buyer", "seller", ...).
    #[serde(rename = "type", default)]
    pub user_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub is_verified: Option<bool>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

impl User {
    pub fn display_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(f), Some(l)) => format!("{} {}", f, l),
            (Some(f), None) => f.to_string(),
            (None, Some(l)) => l.to_string(),
            (None, None) => format!("User #{}", self.id),
        }
    }
}

/// Patch body for `PATCH /v2/user/{id}`. Unset fields are left out of the
/// JSON entirely so the backend does not null them.
#[derive(Serialize, Default, Clone, Debug)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Booleans are always explicit when set; `None` means "leave as is".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
}

/// One row of a user's review history (received or given).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Review {
    pub id: i64,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub reviewer_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}
