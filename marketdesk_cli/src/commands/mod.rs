pub mod auth;
pub mod enquiries;
pub mod master;
pub mod orders;
pub mod products;
pub mod returns;
pub mod stats;
pub mod transactions;
pub mod users;
