//! The two pagination strategies behind one interface.
//!
//! Every list in the dashboard is server-paginated except the user wallet
//! history, whose endpoint returns the complete set in one response. Rather
//! than letting that difference leak into each view, both modes implement
//! [`Paginator`]: a [`ServerPaginator`] asks its owner to re-fetch on page
//! change, a [`ClientPaginator`] re-slices the set it already holds.

use marketdesk_api::types::Pagination;

/// Default page size for client-sliced lists.
pub const CLIENT_PAGE_SIZE: i64 = 10;

/// What a page change requires from the owning view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageChange {
    /// The view must fetch this page from the backend.
    Fetch(i64),
    /// The paginator re-sliced locally; the view can render immediately.
    Resliced,
}

/// Common surface over the two pagination modes.
pub trait Paginator {
    type Item;

    /// Rows of the current page, in render order.
    fn current(&self) -> &[Self::Item];

    /// Pagination metadata for the current page.
    fn meta(&self) -> Pagination;

    /// Moves to `page`, reporting whether a fetch is needed.
    fn set_page(&mut self, page: i64) -> PageChange;
}

/// Server-driven pagination: holds the latest fetched page and the metadata
/// the backend sent with it. The metadata is trusted as-is and never
/// recomputed here.
pub struct ServerPaginator<T> {
    rows: Vec<T>,
    meta: Pagination,
    requested_page: i64,
}

impl<T> Default for ServerPaginator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ServerPaginator<T> {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            meta: Pagination::disabled(),
            requested_page: 1,
        }
    }

    /// The page the view should be fetching or showing.
    pub fn requested_page(&self) -> i64 {
        self.requested_page
    }

    /// Stores a fetched page. A response without a pagination object falls
    /// back to the disabled placeholder instead of failing the view.
    pub fn accept(&mut self, rows: Vec<T>, meta: Option<Pagination>) {
        self.rows = rows;
        self.meta = meta.unwrap_or_else(Pagination::disabled);
    }

    /// Drops the held page, e.g. after a fetch error.
    pub fn clear(&mut self) {
        self.rows.clear();
    }
}

impl<T> Paginator for ServerPaginator<T> {
    type Item = T;

    fn current(&self) -> &[T] {
        &self.rows
    }

    fn meta(&self) -> Pagination {
        self.meta.clone()
    }

    fn set_page(&mut self, page: i64) -> PageChange {
        self.requested_page = page.max(1);
        PageChange::Fetch(self.requested_page)
    }
}

/// Client-side pagination over a full set fetched in one call. Metadata is
/// recomputed locally from the set length.
pub struct ClientPaginator<T> {
    all: Vec<T>,
    page: i64,
    limit: i64,
}

impl<T> ClientPaginator<T> {
    pub fn new(limit: i64) -> Self {
        Self {
            all: Vec::new(),
            page: 1,
            limit: limit.max(1),
        }
    }

    /// Replaces the full set and resets to page 1.
    pub fn accept(&mut self, all: Vec<T>) {
        self.all = all;
        self.page = 1;
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    fn total_pages(&self) -> i64 {
        (self.all.len() as i64 + self.limit - 1) / self.limit
    }
}

impl<T> Default for ClientPaginator<T> {
    fn default() -> Self {
        Self::new(CLIENT_PAGE_SIZE)
    }
}

impl<T> Paginator for ClientPaginator<T> {
    type Item = T;

    fn current(&self) -> &[T] {
        let start = ((self.page - 1) * self.limit) as usize;
        let end = (start + self.limit as usize).min(self.all.len());
        if start >= self.all.len() {
            &[]
        } else {
            &self.all[start..end]
        }
    }

    fn meta(&self) -> Pagination {
        let total_pages = self.total_pages();
        Pagination {
            total: self.all.len() as i64,
            page: self.page,
            limit: self.limit,
            total_pages,
            has_next_page: self.page < total_pages,
        }
    }

    fn set_page(&mut self, page: i64) -> PageChange {
        self.page = page.clamp(1, self.total_pages().max(1));
        PageChange::Resliced
    }
}

/// One element of the rendered page bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageItem {
    Previous { enabled: bool },
    Page { number: i64, current: bool },
    Ellipsis,
    Next { enabled: bool },
}

/// Builds the page bar for the given metadata: page 1, the last page, and a
/// window of two pages either side of the current one, with an ellipsis for
/// each gap. Empty when there is a single page or none.
pub fn page_items(meta: &Pagination) -> Vec<PageItem> {
    if meta.total_pages <= 1 {
        return Vec::new();
    }

    let current = meta.page;
    let mut items = vec![PageItem::Previous {
        enabled: current > 1,
    }];
    for page in 1..=meta.total_pages {
        if page == 1 || page == meta.total_pages || (page >= current - 2 && page <= current + 2) {
            items.push(PageItem::Page {
                number: page,
                current: page == current,
            });
        } else if page == current - 3 || page == current + 3 {
            items.push(PageItem::Ellipsis);
        }
    }
    items.push(PageItem::Next {
        enabled: meta.has_next_page,
    });
    items
}

/// The "Showing X to Y of Z" footer text for a page.
pub fn range_text(meta: &Pagination) -> String {
    let start = (meta.page - 1) * meta.limit + 1;
    let end = (meta.page * meta.limit).min(meta.total);
    format!("{} to {} of {}", start, end, meta.total)
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
    fn range_text_mid_page() {
        assert_eq!(range_text(&meta(25, 2, 10)), "11 to 20 of 25");
    }

    #[test]
    fn range_text_last_partial_page() {
        assert_eq!(range_text(&meta(25, 3, 10)), "21 to 25 of 25");
    }

    #[test]
    fn client_paginator_slices_locally() {
        let mut p = ClientPaginator::default();
        p.accept((0..23).collect::<Vec<i64>>());

        assert_eq!(p.current().len(), 10);
        let m = p.meta();
        assert_eq!(m.total, 23);
        assert_eq!(m.total_pages, 3);
        assert!(m.has_next_page);

        assert_eq!(p.set_page(3), PageChange::Resliced);
        assert_eq!(p.current(), &[20, 21, 22]);
        let m = p.meta();
        assert!(!m.has_next_page);
        assert_eq!(m.page, 3);
    }

    #[test]
    fn client_paginator_clamps_out_of_range_pages() {
        let mut p = ClientPaginator::default();
        p.accept((0..5).collect::<Vec<i64>>());
        p.set_page(9);
        assert_eq!(p.meta().page, 1);
        assert_eq!(p.current().len(), 5);
    }

    #[test]
    fn client_paginator_empty_set() {
        let p: ClientPaginator<i64> = ClientPaginator::default();
        assert!(p.current().is_empty());
        let m = p.meta();
        assert_eq!(m.total_pages, 0);
        assert!(!m.has_next_page);
    }

    #[test]
    fn server_paginator_requests_fetch_on_page_change() {
        let mut p: ServerPaginator<i64> = ServerPaginator::new();
        assert_eq!(p.set_page(2), PageChange::Fetch(2));
        p.accept(vec![1, 2, 3], Some(meta(25, 2, 10)));
        assert_eq!(p.meta().page, 2);
    }

    #[test]
    fn server_paginator_falls_back_to_disabled_meta() {
        let mut p: ServerPaginator<i64> = ServerPaginator::new();
        p.accept(vec![1], None);
        let m = p.meta();
        assert_eq!(m.total_pages, 0);
        assert!(!m.has_next_page);
        assert!(page_items(&m).is_empty());
    }

    #[test]
    fn page_bar_hidden_for_single_page() {
        assert!(page_items(&meta(8, 1, 10)).is_empty());
    }

    #[test]
    fn page_bar_windows_and_ellipses() {
        let items = page_items(&meta(100, 5, 10));
        assert_eq!(
            items,
            vec![
                PageItem::Previous { enabled: true },
                PageItem::Page { number: 1, current: false },
                PageItem::Ellipsis,
                PageItem::Page { number: 3, current: false },
                PageItem::Page { number: 4, current: false },
                PageItem::Page { number: 5, current: true },
                PageItem::Page { number: 6, current: false },
                PageItem::Page { number: 7, current: false },
                PageItem::Ellipsis,
                PageItem::Page { number: 10, current: false },
                PageItem::Next { enabled: true },
            ]
        );
    }

    #[test]
    fn page_bar_at_first_page() {
        let items = page_items(&meta(30, 1, 10));
        assert_eq!(items[0], PageItem::Previous { enabled: false });
        assert_eq!(items.last(), Some(&PageItem::Next { enabled: true }));
        // 1, 2, 3 all inside the window; no ellipsis for three pages.
        assert!(!items.contains(&PageItem::Ellipsis));
    }

    #[test]
    fn page_bar_at_last_page() {
        let items = page_items(&meta(30, 3, 10));
        assert_eq!(items.last(), Some(&PageItem::Next { enabled: false }));
    }
}
