use url::Url;

use super::common::{Query, QueryCommon};

/// Query for the main user list (`/v2/user`).
#[derive(Default, Clone, Debug)]
pub struct UserQuery {
    pub common: QueryCommon,
    /// Account type filter (e.g. "buyer", "seller").
    pub user_type: Option<String>,
}

impl Query for UserQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(user_type) = self.user_type.as_deref() {
            if !user_type.is_empty() {
                url.query_pairs_mut().append_pair("type", user_type);
            }
        }
        url
    }
}

impl UserQuery {
    pub fn with_user_type(mut self, user_type: &str) -> Self {
        self.user_type = Some(user_type.to_string());
        self
    }
}

/// Query for a user's product listings (`/v2/user/{id}/products`).
///
/// The sub-collection endpoints accept only `page` plus their own filters
/// and never a page size.
#[derive(Clone, Debug)]
pub struct UserProductsQuery {
    pub common: QueryCommon,
    /// Listing status filter; 0/unset is omitted.
    pub status: Option<i64>,
}

impl Default for UserProductsQuery {
    fn default() -> Self {
        Self {
            common: QueryCommon::without_limit(),
            status: None,
        }
    }
}

impl Query for UserProductsQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(status) = self.status.filter(|s| *s != 0) {
            url.query_pairs_mut()
                .append_pair("status", &status.to_string());
        }
        url
    }
}

impl UserProductsQuery {
    pub fn with_status(mut self, status: i64) -> Self {
        self.status = Some(status);
        self
    }
}

/// Query for a user's orders (`/v2/user/{id}/orders`).
#[derive(Clone, Debug)]
pub struct UserOrdersQuery {
    pub common: QueryCommon,
    /// Order side: 0/unset omitted, otherwise buy/sell discriminator.
    pub order_type: Option<i64>,
    pub status: Option<String>,
}

impl Default for UserOrdersQuery {
    fn default() -> Self {
        Self {
            common: QueryCommon::without_limit(),
            order_type: None,
            status: None,
        }
    }
}

impl Query for UserOrdersQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(order_type) = self.order_type.filter(|t| *t != 0) {
            url.query_pairs_mut()
                .append_pair("type", &order_type.to_string());
        }
        if let Some(status) = self.status.as_deref() {
            if !status.is_empty() {
                url.query_pairs_mut().append_pair("status", status);
            }
        }
        url
    }
}

impl UserOrdersQuery {
    pub fn with_order_type(mut self, order_type: i64) -> Self {
        self.order_type = Some(order_type);
        self
    }
    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }
}

/// Page-only query for a user's received/given reviews.
#[derive(Clone, Debug)]
pub struct ReviewsQuery {
    pub common: QueryCommon,
}

impl Default for ReviewsQuery {
    fn default() -> Self {
        Self {
            common: QueryCommon::without_limit(),
        }
    }
}

impl Query for ReviewsQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        self.common.add_to_url(url)
    }
}
