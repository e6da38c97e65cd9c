mod client;
mod errors;
mod payload;
mod query;
pub mod types;
pub use self::client::Client;
pub use self::errors::Error;
pub use self::payload::{ImageFile, ProductPayload};
pub use self::query::{
    EnquiryQuery, OrderQuery, ProductQuery, Query, ReturnRequestQuery, ReviewsQuery,
    TransactionQuery, UserOrdersQuery, UserProductsQuery, UserQuery,
};
