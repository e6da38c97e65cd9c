//! Library layer for Marketdesk: pagination strategies, view controllers,
//! form state, and the bulk upload runner.
//!
//! Wraps the `marketdesk_api` client with the page-level behavior the admin
//! dashboard needs: list/detail state machines, the two pagination modes,
//! product form validation, sequential bulk upload, and the persisted auth
//! session.

pub mod bulk_upload;
pub mod detail_view;
pub mod display;
pub mod error;
pub mod images;
pub mod list_view;
pub mod paginator;
pub mod product_form;
pub mod session;
pub mod user_tabs;

pub use marketdesk_api;
pub use marketdesk_api::types;
pub use marketdesk_api::{
    Client, EnquiryQuery, OrderQuery, ProductQuery, Query, ReturnRequestQuery, ReviewsQuery,
    TransactionQuery, UserOrdersQuery, UserProductsQuery, UserQuery,
};

pub use bulk_upload::{BulkItemOutcome, BulkSummary, BulkUploader, ProductDescriptor};
pub use detail_view::{DetailState, DetailView};
pub use error::MarketdeskError;
pub use list_view::{FetchParams, ListState, ListView};
pub use paginator::{
    page_items, range_text, ClientPaginator, PageChange, PageItem, Paginator, ServerPaginator,
};
pub use product_form::{MultiPick, ProductForm, SinglePick};
pub use session::{Profile, Session, SessionStore};
pub use user_tabs::{ServerTab, TabFetch, UserTab, UserTabs};
