use url::Url;

use super::common::{Query, QueryCommon};

/// Query for the contact enquiry list (`/v2/support/contact-enquiries`).
#[derive(Default, Clone, Debug)]
pub struct EnquiryQuery {
    pub common: QueryCommon,
    pub status: Option<String>,
    /// Enquiry category (e.g. "order", "account", "other").
    pub query_type: Option<String>,
}

impl Query for EnquiryQuery {
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
        if let Some(query_type) = self.query_type.as_deref() {
            if !query_type.is_empty() {
                url.query_pairs_mut().append_pair("query_type", query_type);
            }
        }
        url
    }
}

impl EnquiryQuery {
    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }
    pub fn with_query_type(mut self, query_type: &str) -> Self {
        self.query_type = Some(query_type.to_string());
        self
    }
}
