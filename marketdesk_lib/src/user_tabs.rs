//! Tab controller for the user detail screen.
//!
//! The screen owns five lazily loaded sub-collections behind a tab strip.
//! Each tab keeps its own page and pagination metadata, so paging within
//! one tab never disturbs another's position. Four tabs are
//! server-paginated; the transactions tab gets the whole wallet history in
//! one call and pages it locally. Sub-collection failures are non-fatal to
//! the screen (the tab just shows empty), only the user-info fetch is.

use marketdesk_api::types::{Order, Pagination, Product, Review, WalletTransaction};

use crate::paginator::{ClientPaginator, Paginator};

/// The selectable tabs. `Overview` renders the already-fetched profile and
/// needs no data of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserTab {
    Overview,
    Products,
    Orders,
    Transactions,
    ReviewsReceived,
    ReviewsGiven,
}

/// The fetch a tab interaction requires, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabFetch {
    Products { page: i64 },
    Orders { page: i64 },
    WalletHistory,
    ReviewsReceived { page: i64 },
    ReviewsGiven { page: i64 },
}

/// One server-paginated sub-collection: its rows for the current page plus
/// independent page state.
pub struct ServerTab<T> {
    rows: Vec<T>,
    page: i64,
    meta: Pagination,
    loaded: bool,
}

impl<T> Default for ServerTab<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            page: 1,
            meta: Pagination::disabled(),
            loaded: false,
        }
    }
}

impl<T> ServerTab<T> {
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn meta(&self) -> &Pagination {
        &self.meta
    }

    /// True until data for the current page has arrived.
    fn needs_fetch(&self) -> bool {
        !self.loaded
    }

    fn request_page(&mut self, page: i64) -> i64 {
        self.page = page.max(1);
        self.loaded = false;
        self.page
    }

    /// Stores a fetched page. Called with an empty vec and `None` on a
    /// failed sub-collection fetch, which renders as an empty tab.
    pub fn accept(&mut self, rows: Vec<T>, meta: Option<Pagination>) {
        self.rows = rows;
        self.meta = meta.unwrap_or_else(Pagination::disabled);
        self.loaded = true;
    }
}

/// State for the whole tab strip.
pub struct UserTabs {
    active: UserTab,
    pub products: ServerTab<Product>,
    pub orders: ServerTab<Order>,
    pub transactions: ClientPaginator<WalletTransaction>,
    transactions_loaded: bool,
    pub reviews_received: ServerTab<Review>,
    pub reviews_given: ServerTab<Review>,
}

impl Default for UserTabs {
    fn default() -> Self {
        Self::new()
    }
}

impl UserTabs {
    pub fn new() -> Self {
        Self {
            active: UserTab::Overview,
            products: ServerTab::default(),
            orders: ServerTab::default(),
            transactions: ClientPaginator::default(),
            transactions_loaded: false,
            reviews_received: ServerTab::default(),
            reviews_given: ServerTab::default(),
        }
    }

    pub fn active(&self) -> UserTab {
        self.active
    }

    /// Switches tabs, returning the fetch to run only when the selected
    /// tab has no data for its current page yet.
    pub fn select(&mut self, tab: UserTab) -> Option<TabFetch> {
        self.active = tab;
        match tab {
            UserTab::Overview => None,
            UserTab::Products => self
                .products
                .needs_fetch()
                .then(|| TabFetch::Products { page: self.products.page() }),
            UserTab::Orders => self
                .orders
                .needs_fetch()
                .then(|| TabFetch::Orders { page: self.orders.page() }),
            UserTab::Transactions => {
                (!self.transactions_loaded).then_some(TabFetch::WalletHistory)
            }
            UserTab::ReviewsReceived => self
                .reviews_received
                .needs_fetch()
                .then(|| TabFetch::ReviewsReceived { page: self.reviews_received.page() }),
            UserTab::ReviewsGiven => self
                .reviews_given
                .needs_fetch()
                .then(|| TabFetch::ReviewsGiven { page: self.reviews_given.page() }),
        }
    }

    /// Pages within the active tab. Server tabs hand back a fetch; the
    /// transactions tab re-slices locally and needs none.
    pub fn set_page(&mut self, page: i64) -> Option<TabFetch> {
        match self.active {
            UserTab::Overview => None,
            UserTab::Products => Some(TabFetch::Products {
                page: self.products.request_page(page),
            }),
            UserTab::Orders => Some(TabFetch::Orders {
                page: self.orders.request_page(page),
            }),
            UserTab::Transactions => {
                self.transactions.set_page(page);
                None
            }
            UserTab::ReviewsReceived => Some(TabFetch::ReviewsReceived {
                page: self.reviews_received.request_page(page),
            }),
            UserTab::ReviewsGiven => Some(TabFetch::ReviewsGiven {
                page: self.reviews_given.request_page(page),
            }),
        }
    }

    /// Stores the one-shot wallet history for local paging.
    pub fn accept_transactions(&mut self, history: Vec<WalletTransaction>) {
        self.transactions.accept(history);
        self.transactions_loaded = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(id: i64) -> Review {
        serde_json::from_value(serde_json::json!({ "id": id })).unwrap()
    }

    fn wallet_row(id: i64) -> WalletTransaction {
        serde_json::from_value(serde_json::json!({ "id": id })).unwrap()
    }

    fn meta(total: i64, page: i64) -> Pagination {
        let total_pages = (total + 9) / 10;
        Pagination {
            total,
            page,
            limit: 10,
            total_pages,
            has_next_page: page < total_pages,
        }
    }

    #[test]
    fn first_selection_fetches_then_is_cached() {
        let mut tabs = UserTabs::new();
        assert_eq!(
            tabs.select(UserTab::Products),
            Some(TabFetch::Products { page: 1 })
        );
        tabs.products.accept(vec![], Some(meta(0, 1)));

        // Coming back to an already-loaded page fetches nothing.
        tabs.select(UserTab::Overview);
        assert_eq!(tabs.select(UserTab::Products), None);
    }

    #[test]
    fn paging_one_tab_does_not_disturb_another() {
        let mut tabs = UserTabs::new();
        tabs.select(UserTab::ReviewsReceived);
        tabs.reviews_received.accept(vec![review(1)], Some(meta(30, 1)));
        assert_eq!(
            tabs.set_page(3),
            Some(TabFetch::ReviewsReceived { page: 3 })
        );
        tabs.reviews_received.accept(vec![review(2)], Some(meta(30, 3)));

        tabs.select(UserTab::ReviewsGiven);
        assert_eq!(tabs.reviews_given.page(), 1);
        assert_eq!(tabs.reviews_received.page(), 3);
    }

    #[test]
    fn transactions_page_locally_after_one_fetch() {
        let mut tabs = UserTabs::new();
        assert_eq!(
            tabs.select(UserTab::Transactions),
            Some(TabFetch::WalletHistory)
        );
        tabs.accept_transactions((0..23).map(wallet_row).collect());

        // No further fetch: paging is a local re-slice.
        assert_eq!(tabs.set_page(3), None);
        assert_eq!(tabs.transactions.current().len(), 3);
        assert!(!tabs.transactions.meta().has_next_page);

        tabs.select(UserTab::Overview);
        assert_eq!(tabs.select(UserTab::Transactions), None);
    }

    #[test]
    fn failed_subcollection_renders_empty_and_stops_refetching() {
        let mut tabs = UserTabs::new();
        tabs.select(UserTab::Orders);
        // The owner maps a failed fetch to an empty accept.
        tabs.orders.accept(vec![], None);
        assert_eq!(tabs.select(UserTab::Orders), None);
        assert!(tabs.orders.rows().is_empty());
        assert_eq!(tabs.orders.meta().total_pages, 0);
    }
}
