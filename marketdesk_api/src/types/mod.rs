mod dashboard;
mod enquiry;
mod master;
mod meta;
mod order;
mod product;
mod return_request;
mod timestamp;
mod transaction;
mod user;

pub use dashboard::DashboardStats;
pub use enquiry::{ContactEnquiry, EnquiryReply};
pub use master::{Brand, Category, Color, Condition, Material, Size, SubCategory};
pub use meta::{Envelope, ListEnvelope, Pagination};
pub use order::{Order, OrderParty, OrderTracking};
pub use product::Product;
pub use return_request::ReturnRequest;
pub use timestamp::Timestamp;
pub use transaction::{TrustapAccount, TrustapTransaction, WalletHistory, WalletTransaction};
pub use user::{Review, User, UserUpdate};
