//! State machine shared by every list screen.
//!
//! Each screen holds one `ListView` and drives it the same way: a trigger
//! (mount, search submit, filter change, page click) produces the fetch
//! parameters and moves the view to `Loading`; the fetch outcome is fed
//! back through [`ListView::resolve`]. There is no caching between
//! transitions; every parameter change is a fresh fetch.

use marketdesk_api::types::Pagination;

/// Render state of a list screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState<T> {
    /// Nothing requested yet.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last fetch returned rows.
    Populated(Vec<T>),
    /// The last fetch succeeded with zero rows.
    Empty,
    /// The last fetch failed; previously shown rows are gone.
    Errored(String),
}

/// Parameters for the fetch a state transition just requested.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchParams<F> {
    pub page: i64,
    pub search: String,
    pub filter: F,
}

/// List screen controller: current rows, pagination metadata, committed
/// search term, and a screen-specific filter set `F`.
pub struct ListView<T, F: Clone> {
    state: ListState<T>,
    page: i64,
    search: String,
    filter: F,
    pagination: Pagination,
}

impl<T, F: Clone + Default> Default for ListView<T, F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<T, F: Clone> ListView<T, F> {
    pub fn new(filter: F) -> Self {
        Self {
            state: ListState::Idle,
            page: 1,
            search: String::new(),
            filter,
            pagination: Pagination::disabled(),
        }
    }

    fn begin(&mut self) -> FetchParams<F> {
        self.state = ListState::Loading;
        FetchParams {
            page: self.page,
            search: self.search.clone(),
            filter: self.filter.clone(),
        }
    }

    /// First fetch on mount.
    pub fn start(&mut self) -> FetchParams<F> {
        self.begin()
    }

    /// Commits a search term. A new term always restarts from page 1.
    pub fn submit_search(&mut self, term: &str) -> FetchParams<F> {
        self.search = term.to_string();
        self.page = 1;
        self.begin()
    }

    /// Changes the filter set and restarts from page 1.
    pub fn set_filter(&mut self, filter: F) -> FetchParams<F> {
        self.filter = filter;
        self.page = 1;
        self.begin()
    }

    /// Jumps to a page keeping search and filters.
    pub fn set_page(&mut self, page: i64) -> FetchParams<F> {
        self.page = page.max(1);
        self.begin()
    }

    /// Applies a fetch outcome. On success the rows decide between
    /// `Populated` and `Empty`, and a missing pagination object falls back
    /// to the disabled placeholder. On failure the rows are cleared and the
    /// message kept for display; re-submitting the search retries.
    pub fn resolve(&mut self, result: Result<(Vec<T>, Option<Pagination>), String>) {
        match result {
            Ok((rows, pagination)) => {
                self.pagination = pagination.unwrap_or_else(Pagination::disabled);
                self.state = if rows.is_empty() {
                    ListState::Empty
                } else {
                    ListState::Populated(rows)
                };
            }
            Err(message) => {
                self.state = ListState::Errored(message);
            }
        }
    }

    pub fn state(&self) -> &ListState<T> {
        &self.state
    }

    pub fn rows(&self) -> &[T] {
        match &self.state {
            ListState::Populated(rows) => rows,
            _ => &[],
        }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ListState::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(total: i64, page: i64, limit: i64) -> Pagination {
        let total_pages = (total + limit - 1) / limit;
        Pagination {
            total,
            page,
            limit,
            total_pages,
            has_next_page: page < total_pages,
        }
    }

    #[test]
    fn mount_then_populate() {
        let mut view: ListView<&str, ()> = ListView::new(());
        assert_eq!(*view.state(), ListState::Idle);

        let params = view.start();
        assert_eq!(params.page, 1);
        assert!(view.is_loading());

        view.resolve(Ok((vec!["a", "b"], Some(meta(2, 1, 10)))));
        assert_eq!(view.rows(), &["a", "b"]);
    }

    #[test]
    fn empty_result_is_distinct_from_error() {
        let mut view: ListView<&str, ()> = ListView::new(());
        view.start();
        view.resolve(Ok((vec![], Some(meta(0, 1, 10)))));
        assert_eq!(*view.state(), ListState::Empty);
    }

    #[test]
    fn new_search_resets_page_to_one() {
        let mut view: ListView<&str, ()> = ListView::new(());
        view.set_page(4);
        view.resolve(Ok((vec!["x"], Some(meta(40, 4, 10)))));

        let params = view.submit_search("belt");
        assert_eq!(params.page, 1);
        assert_eq!(params.search, "belt");
    }

    #[test]
    fn filter_change_resets_page_to_one() {
        let mut view: ListView<&str, Option<String>> = ListView::new(None);
        view.set_page(3);
        let params = view.set_filter(Some("pending".to_string()));
        assert_eq!(params.page, 1);
        assert_eq!(params.filter.as_deref(), Some("pending"));
    }

    #[test]
    fn error_clears_previous_rows() {
        let mut view: ListView<&str, ()> = ListView::new(());
        view.start();
        view.resolve(Ok((vec!["a"], Some(meta(1, 1, 10)))));
        assert_eq!(view.rows().len(), 1);

        view.set_page(2);
        view.resolve(Err("Request failed".to_string()));
        assert_eq!(*view.state(), ListState::Errored("Request failed".to_string()));
        assert!(view.rows().is_empty());
    }

    #[test]
    fn missing_pagination_falls_back_to_disabled() {
        let mut view: ListView<&str, ()> = ListView::new(());
        view.start();
        view.resolve(Ok((vec!["a"], None)));
        assert_eq!(view.pagination().total_pages, 0);
        assert!(!view.pagination().has_next_page);
    }

    #[test]
    fn retry_via_search_resubmit_leaves_error_state() {
        let mut view: ListView<&str, ()> = ListView::new(());
        view.start();
        view.resolve(Err("boom".to_string()));

        view.submit_search("");
        assert!(view.is_loading());
        view.resolve(Ok((vec!["a"], Some(meta(1, 1, 10)))));
        assert_eq!(view.rows().len(), 1);
    }
}
