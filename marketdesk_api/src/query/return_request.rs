use url::Url;

use super::common::{Query, QueryCommon};

/// Query for the return request list (`/v2/chat/return-request`).
#[derive(Default, Clone, Debug)]
pub struct ReturnRequestQuery {
    pub common: QueryCommon,
    /// Lifecycle state: pending, approved, or rejected.
    pub status: Option<String>,
}

impl Query for ReturnRequestQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(status) = self.status.as_deref() {
            if !status.is_empty() {
                url.query_pairs_mut().append_pair("status", status);
            }
        }
        url
    }
}

impl ReturnRequestQuery {
    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }
}
