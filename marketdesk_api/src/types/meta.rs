use serde::{Deserialize, Serialize};

/// Pagination metadata attached to every server-paginated list response.
///
/// The backend owns these values; clients render them as-is and never
/// recompute them for server-paginated lists. `has_next_page` always equals
/// `page < total_pages` and `total_pages` equals `ceil(total / limit)`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
    pub has_next_page: bool,
}

impl Pagination {
    /// Zeroed fallback used when a list response omits the pagination
    /// object. Renders as a single disabled page.
    pub fn disabled() -> Pagination {
        Pagination {
            total: 0,
            page: 1,
            limit: 10,
            total_pages: 0,
            has_next_page: false,
        }
    }
}

/// Envelope for list endpoints: `{ message?, data: [...], pagination? }`.
///
/// A handful of endpoints (master data, the user wallet history) return a
/// bare array with no pagination object, so `pagination` stays optional
/// here and callers substitute [`Pagination::disabled`] when absent.
#[derive(Serialize, Deserialize, Debug)]
pub struct ListEnvelope<T> {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Envelope for detail and mutation endpoints: `{ message?, data }`.
///
/// `data` is `None` both when the key is absent and when the backend sends
/// an explicit null, which detail views render as "not found".
#[derive(Serialize, Deserialize, Debug)]
pub struct Envelope<T> {
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}
