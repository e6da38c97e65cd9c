use url::Url;

use super::common::{Query, QueryCommon};

/// Query for the payment-provider transaction list (`/v2/trustap-transactions`).
#[derive(Default, Clone, Debug)]
pub struct TransactionQuery {
    pub common: QueryCommon,
    /// Claim/lifecycle status filter.
    pub status: Option<String>,
    /// Payment status filter, separate from `status` on the wire.
    pub pay_status: Option<String>,
}

impl Query for TransactionQuery {
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
        if let Some(pay_status) = self.pay_status.as_deref() {
            if !pay_status.is_empty() {
                url.query_pairs_mut().append_pair("pay_status", pay_status);
            }
        }
        url
    }
}

impl TransactionQuery {
    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }
    pub fn with_pay_status(mut self, pay_status: &str) -> Self {
        self.pay_status = Some(pay_status.to_string());
        self
    }
}
