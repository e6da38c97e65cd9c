use url::Url;

use super::common::{Query, QueryCommon};

/// Query for the order list (`/v2/order`).
#[derive(Default, Clone, Debug)]
pub struct OrderQuery {
    pub common: QueryCommon,
    pub status: Option<String>,
}

impl Query for OrderQuery {
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

impl OrderQuery {
    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }
}
