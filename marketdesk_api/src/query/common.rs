//! Shared query infrastructure: the [`Query`] trait and the [`QueryCommon`]
//! pagination/search fields carried by every list query.

use url::Url;

/// Trait implemented by all query builders. Provides URL serialization and
/// shared builder methods for pagination and free-text search.
///
/// Parameters follow the backend's omission rule: a filter is appended only
/// when it has been set to a non-empty value. The backend treats an absent
/// parameter differently from an empty one for some filters, so unset
/// filters must not appear in the query string at all.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the page number (1-indexed).
    fn with_page(mut self, page: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = page;
        self
    }

    /// Sets the number of results per page.
    fn with_limit(mut self, limit: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().limit = Some(limit);
        self
    }

    /// Sets the free-text search term. Empty strings are treated as unset.
    fn with_search(mut self, search: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().search = Some(search.to_string());
        self
    }
}

/// Fields shared by all list queries: page, page size, and search term.
#[derive(Clone, Debug)]
pub struct QueryCommon {
    /// Page number (1-indexed). Defaults to 1 and is always sent.
    pub page: i64,
    /// Results per page. `None` omits the parameter (backend default).
    pub limit: Option<i64>,
    /// Free-text search term. `None` or empty omits the parameter.
    pub search: Option<String>,
}

impl Default for QueryCommon {
    fn default() -> QueryCommon {
        QueryCommon {
            page: 1,
            limit: Some(10),
            search: None,
        }
    }
}

impl QueryCommon {
    /// Common fields without a page-size default. Used by the user
    /// sub-collection queries, which never send `limit`.
    pub fn without_limit() -> QueryCommon {
        QueryCommon {
            limit: None,
            ..QueryCommon::default()
        }
    }

    /// Appends the common pagination and search parameters to the URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("page", &self.page.to_string());
        if let Some(limit) = self.limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        }
        if let Some(search) = self.search.as_deref() {
            if !search.is_empty() {
                url.query_pairs_mut().append_pair("search", search);
            }
        }
        url
    }
}
