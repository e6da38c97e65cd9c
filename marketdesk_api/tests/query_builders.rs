use marketdesk_api::{
    EnquiryQuery, OrderQuery, ProductQuery, Query, ReturnRequestQuery, ReviewsQuery,
    TransactionQuery, UserOrdersQuery, UserProductsQuery, UserQuery,
};
use url::Url;

fn base(path: &str) -> Url {
    Url::parse(&format!("https://api.example.com{}", path)).unwrap()
}

#[test]
fn user_query_defaults() {
    let url = UserQuery::default().add_to_url(&base("/v2/user"));
    assert_eq!(
        url.to_string(),
        "https://api.example.com/v2/user?page=1&limit=10"
    );
}

#[test]
fn user_query_with_filters() {
    let url = UserQuery::default()
        .with_page(3)
        .with_limit(25)
        .with_search("jane")
        .with_user_type("seller")
        .add_to_url(&base("/v2/user"));
    assert_eq!(
        url.to_string(),
        "https://api.example.com/v2/user?page=3&limit=25&search=jane&type=seller"
    );
}

#[test]
fn empty_search_is_omitted() {
    let url = UserQuery::default()
        .with_search("")
        .add_to_url(&base("/v2/user"));
    assert!(!url.query().unwrap().contains("search"));
}

#[test]
fn empty_status_is_omitted() {
    let url = OrderQuery::default()
        .with_status("")
        .add_to_url(&base("/v2/order"));
    assert_eq!(
        url.to_string(),
        "https://api.example.com/v2/order?page=1&limit=10"
    );
}

#[test]
fn product_query_category_filter() {
    let url = ProductQuery::default()
        .with_category_id(7)
        .add_to_url(&base("/v2/product/all"));
    assert_eq!(
        url.to_string(),
        "https://api.example.com/v2/product/all?page=1&limit=10&category_id=7"
    );
}

#[test]
fn return_request_query_status() {
    let url = ReturnRequestQuery::default()
        .with_status("pending")
        .add_to_url(&base("/v2/chat/return-request"));
    assert_eq!(
        url.to_string(),
        "https://api.example.com/v2/chat/return-request?page=1&limit=10&status=pending"
    );
}

#[test]
fn enquiry_query_both_filters() {
    let url = EnquiryQuery::default()
        .with_status("open")
        .with_query_type("order")
        .add_to_url(&base("/v2/support/contact-enquiries"));
    assert_eq!(
        url.to_string(),
        "https://api.example.com/v2/support/contact-enquiries?page=1&limit=10&status=open&query_type=order"
    );
}

#[test]
fn transaction_query_pay_status() {
    let url = TransactionQuery::default()
        .with_status("claimed")
        .with_pay_status("paid")
        .add_to_url(&base("/v2/trustap-transactions"));
    assert_eq!(
        url.to_string(),
        "https://api.example.com/v2/trustap-transactions?page=1&limit=10&status=claimed&pay_status=paid"
    );
}

// The user sub-collection endpoints only ever take `page` plus their own
// filters; `limit` must not appear.
#[test]
fn user_products_query_sends_no_limit() {
    let url = UserProductsQuery::default().add_to_url(&base("/v2/user/5/products"));
    assert_eq!(
        url.to_string(),
        "https://api.example.com/v2/user/5/products?page=1"
    );
}

#[test]
fn user_products_zero_status_is_omitted() {
    let url = UserProductsQuery::default()
        .with_status(0)
        .add_to_url(&base("/v2/user/5/products"));
    assert_eq!(
        url.to_string(),
        "https://api.example.com/v2/user/5/products?page=1"
    );

    let url = UserProductsQuery::default()
        .with_status(2)
        .add_to_url(&base("/v2/user/5/products"));
    assert_eq!(
        url.to_string(),
        "https://api.example.com/v2/user/5/products?page=1&status=2"
    );
}

#[test]
fn user_orders_query_type_and_status() {
    let url = UserOrdersQuery::default()
        .with_page(2)
        .with_order_type(1)
        .with_status("delivered")
        .add_to_url(&base("/v2/user/5/orders"));
    assert_eq!(
        url.to_string(),
        "https://api.example.com/v2/user/5/orders?page=2&type=1&status=delivered"
    );
}

#[test]
fn reviews_query_is_page_only() {
    let url = ReviewsQuery::default()
        .with_page(4)
        .add_to_url(&base("/v2/user/5/reviews/received"));
    assert_eq!(
        url.to_string(),
        "https://api.example.com/v2/user/5/reviews/received?page=4"
    );
}
