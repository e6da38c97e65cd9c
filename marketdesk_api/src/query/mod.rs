mod common;
mod enquiry;
mod order;
mod product;
mod return_request;
mod transaction;
mod user;

pub use common::{Query, QueryCommon};
pub use enquiry::EnquiryQuery;
pub use order::OrderQuery;
pub use product::ProductQuery;
pub use return_request::ReturnRequestQuery;
pub use transaction::TransactionQuery;
pub use user::{ReviewsQuery, UserOrdersQuery, UserProductsQuery, UserQuery};
