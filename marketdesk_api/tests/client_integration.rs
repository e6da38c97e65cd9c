use marketdesk_api::types::{EnquiryReply, UserUpdate};
use marketdesk_api::{
    Client, EnquiryQuery, OrderQuery, ProductQuery, Query, ReturnRequestQuery, TransactionQuery,
    UserQuery,
};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

/// Byte-level equivalent of `body_string_contains` for multipart bodies that
/// carry binary file parts: wiremock's string matcher rejects any request
/// whose body is not valid UTF-8.
struct BodyBytesContains(Vec<u8>);

impl wiremock::Match for BodyBytesContains {
    fn matches(&self, request: &wiremock::Request) -> bool {
        request
            .body
            .windows(self.0.len())
            .any(|window| window == self.0.as_slice())
    }
}

fn body_bytes_contains(part: &str) -> BodyBytesContains {
    BodyBytesContains(part.as_bytes().to_vec())
}

#[tokio::test]
async fn get_users_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("users.json");

    Mock::given(method("GET"))
        .and(path("/v2/user"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let resp = client
        .get_users(&UserQuery::default().with_page(2))
        .await
        .unwrap();

    assert_eq!(resp.data.len(), 10);
    assert_eq!(resp.data[0].display_name(), "Jane Doe");

    let pagination = resp.pagination.unwrap();
    assert_eq!(pagination.total, 25);
    assert_eq!(pagination.total_pages, 3);
    assert!(pagination.has_next_page);
    assert_eq!(
        pagination.has_next_page,
        pagination.page < pagination.total_pages
    );
}

#[tokio::test]
async fn bearer_token_is_attached() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/user"))
        .and(header("authorization", "Bearer staff-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("users.json")))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).with_token("staff-token");
    assert!(client.get_users(&UserQuery::default()).await.is_ok());
}

#[tokio::test]
async fn unauthorized_is_distinguished() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/user"))
        .respond_with(ResponseTemplate::new(401).set_body_string("{\"message\":\"Token expired\"}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let err = client.get_users(&UserQuery::default()).await.unwrap_err();
    assert!(matches!(err, marketdesk_api::Error::Unauthorized));
}

#[tokio::test]
async fn backend_message_is_extracted_on_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/order"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_string("{\"message\":\"Invalid status filter\"}"),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let err = client.get_orders(&OrderQuery::default()).await.unwrap_err();
    match err {
        marketdesk_api::Error::Status { status, message } => {
            assert_eq!(status, 422);
            assert_eq!(message, "Invalid status filter");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn malformed_json_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/product/all"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let err = client
        .get_products(&ProductQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, marketdesk_api::Error::Decode));
}

#[tokio::test]
async fn missing_pagination_is_preserved_as_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/product/all"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(load_fixture("products_no_pagination.json")),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let resp = client.get_products(&ProductQuery::default()).await.unwrap();
    assert_eq!(resp.data.len(), 2);
    assert!(resp.pagination.is_none());
}

#[tokio::test]
async fn get_user_null_data_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/user/user-info"))
        .and(query_param("user_id", "999"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"data\":null}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let resp = client.get_user(999).await.unwrap();
    assert!(resp.data.is_none());
}

#[tokio::test]
async fn update_user_sends_only_set_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/v2/user/11"))
        .and(body_json(serde_json::json!({
            "status": "suspended",
            "is_verified": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("user.json")))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let update = UserUpdate {
        status: Some("suspended".to_string()),
        is_verified: Some(false),
        ..UserUpdate::default()
    };
    let resp = client.update_user(11, &update).await.unwrap();
    assert!(resp.data.is_some());
}

#[tokio::test]
async fn get_user_transactions_returns_full_history() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/user/11/transactions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("wallet_history.json")),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let history = client.get_user_transactions(11).await.unwrap();
    assert_eq!(history.data.len(), 23);
    assert_eq!(history.pending_balance, 42.5);
}

#[tokio::test]
async fn create_product_posts_multipart() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/product/admin/add"))
        .and(body_bytes_contains("Silk scarf"))
        .and(body_bytes_contains("is_negotiable"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "{\"message\":\"Product created\",\"data\":{\"id\":103,\"title\":\"Silk scarf\"}}",
        ))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let payload = marketdesk_api::ProductPayload {
        user_id: Some(12),
        title: "Silk scarf".to_string(),
        price: Some(120.0),
        is_negotiable: Some(true),
        images: vec![marketdesk_api::ImageFile {
            file_name: "scarf.jpg".to_string(),
            bytes: vec![0xff, 0xd8, 0xff],
        }],
        ..Default::default()
    };
    let resp = client.create_product(payload).await.unwrap();
    assert_eq!(resp.data.unwrap().id, 103);
}

#[tokio::test]
async fn delete_product_uses_query_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v2/product"))
        .and(query_param("id", "102"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"message\":\"Deleted\"}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let resp = client.delete_product(102).await.unwrap();
    assert_eq!(resp.message.as_deref(), Some("Deleted"));
    assert!(resp.data.is_none());
}

#[tokio::test]
async fn approve_return_request_hits_order_scoped_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/chat/approve-return-request/501"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "{\"message\":\"Return request approved\",\"data\":{\"id\":71,\"status\":\"approved\"}}",
        ))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let resp = client.approve_return_request(501).await.unwrap();
    assert_eq!(resp.data.unwrap().status.as_deref(), Some("approved"));
}

#[tokio::test]
async fn reply_to_enquiry_posts_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/support/contact-enquiries/41/reply"))
        .and(body_json(serde_json::json!({
            "message": "We have issued the refund."
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "{\"message\":\"Reply sent\",\"data\":{\"id\":41,\"status\":\"replied\"}}",
        ))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let reply = EnquiryReply {
        message: "We have issued the refund.".to_string(),
    };
    let resp = client.reply_to_enquiry(41, &reply).await.unwrap();
    assert_eq!(resp.data.unwrap().status.as_deref(), Some("replied"));
}

#[tokio::test]
async fn list_endpoints_round_trip() {
    let mock_server = MockServer::start().await;
    for (p, fixture) in [
        ("/v2/order", "orders.json"),
        ("/v2/chat/return-request", "return_requests.json"),
        ("/v2/support/contact-enquiries", "enquiries.json"),
        ("/v2/trustap-transactions", "transactions.json"),
    ] {
        Mock::given(method("GET"))
            .and(path(p))
            .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture(fixture)))
            .mount(&mock_server)
            .await;
    }

    let client = Client::with_base_url(&mock_server.uri());

    let orders = client.get_orders(&OrderQuery::default()).await.unwrap();
    assert_eq!(orders.data.len(), 2);

    let requests = client
        .get_return_requests(&ReturnRequestQuery::default())
        .await
        .unwrap();
    assert_eq!(requests.data[0].status.as_deref(), Some("pending"));

    let enquiries = client.get_enquiries(&EnquiryQuery::default()).await.unwrap();
    assert_eq!(enquiries.data[0].query_type.as_deref(), Some("order"));

    let transactions = client
        .get_transactions(&TransactionQuery::default())
        .await
        .unwrap();
    assert_eq!(transactions.data[0].pay_status.as_deref(), Some("paid"));
}

#[tokio::test]
async fn dashboard_stats_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/dashboard/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("stats.json")))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let stats = client.get_dashboard_stats().await.unwrap().data.unwrap();
    assert_eq!(stats.total_users, 1250);
    assert_eq!(stats.pending_return_requests, 12);
}
