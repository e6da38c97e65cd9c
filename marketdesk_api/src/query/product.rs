use url::Url;

use super::common::{Query, QueryCommon};

/// Query for the product catalogue list (`/v2/product/all`).
#[derive(Default, Clone, Debug)]
pub struct ProductQuery {
    pub common: QueryCommon,
    pub category_id: Option<i64>,
}

impl Query for ProductQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(category_id) = self.category_id {
            url.query_pairs_mut()
                .append_pair("category_id", &category_id.to_string());
        }
        url
    }
}

impl ProductQuery {
    pub fn with_category_id(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }
}
