use marketdesk_api::types::{
    ListEnvelope, Order, Pagination, Product, Timestamp, TrustapTransaction, User, WalletHistory,
};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

// Every server-paginated fixture must satisfy the backend's own pagination
// invariants; the client trusts these values without recomputing them.
fn assert_pagination_invariants(pagination: &Pagination) {
    assert!(pagination.limit > 0);
    let expected_pages = (pagination.total + pagination.limit - 1) / pagination.limit;
    assert_eq!(pagination.total_pages, expected_pages);
    assert_eq!(
        pagination.has_next_page,
        pagination.page < pagination.total_pages
    );
}

#[test]
fn users_fixture_parses() {
    let resp: ListEnvelope<User> = serde_json::from_str(&load_fixture("users.json")).unwrap();
    assert_eq!(resp.data.len(), 10);
    assert_pagination_invariants(resp.pagination.as_ref().unwrap());

    // Unix-seconds timestamps on this endpoint.
    assert!(matches!(
        resp.data[0].created_at,
        Some(Timestamp::UnixSeconds(_))
    ));
}

#[test]
fn products_fixture_parses_mixed_timestamps_and_images() {
    let resp: ListEnvelope<Product> =
        serde_json::from_str(&load_fixture("products.json")).unwrap();
    assert_pagination_invariants(resp.pagination.as_ref().unwrap());

    let scarf = &resp.data[0];
    assert!(matches!(scarf.created_at, Some(Timestamp::Iso(_))));
    // A product can mix backend-relative paths and absolute URLs.
    assert!(scarf.images[0].starts_with('/'));
    assert!(scarf.images[1].starts_with("https://"));
}

#[test]
fn orders_fixture_mixes_timestamp_wire_forms() {
    let resp: ListEnvelope<Order> = serde_json::from_str(&load_fixture("orders.json")).unwrap();
    assert!(matches!(
        resp.data[0].created_at,
        Some(Timestamp::UnixSeconds(_))
    ));
    assert!(matches!(resp.data[1].created_at, Some(Timestamp::Iso(_))));
    // Missing seller on the second order must not fail the whole list.
    assert!(resp.data[1].seller.is_none());
}

#[test]
fn transactions_fixture_parses() {
    let resp: ListEnvelope<TrustapTransaction> =
        serde_json::from_str(&load_fixture("transactions.json")).unwrap();
    let tx = &resp.data[0];
    assert_eq!(tx.order_ids.as_deref(), Some(&[501][..]));
    assert!(tx.claim_status.is_none());
}

#[test]
fn wallet_history_has_no_pagination_object() {
    let history: WalletHistory =
        serde_json::from_str(&load_fixture("wallet_history.json")).unwrap();
    assert_eq!(history.data.len(), 23);
    assert_eq!(history.pending_balance, 42.5);
}

#[test]
fn pagination_disabled_fallback_is_inert() {
    let disabled = Pagination::disabled();
    assert_eq!(disabled.total, 0);
    assert_eq!(disabled.total_pages, 0);
    assert!(!disabled.has_next_page);
}
