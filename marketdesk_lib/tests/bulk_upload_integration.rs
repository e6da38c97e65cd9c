use std::collections::HashMap;
use std::time::Duration;

use marketdesk_lib::bulk_upload::{parse_descriptors, BulkUploader};
use marketdesk_lib::Client;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BATCH: &str = r#"[
    {"title": "Silk scarf", "price": 120, "images": ["scarf.jpg"]},
    {"title": "Broken listing", "price": -1},
    {"title": "Leather belt", "price": 85.5, "images": ["missing.jpg"]}
]"#;

#[tokio::test]
async fn one_failure_does_not_stop_the_batch() {
    let mock_server = MockServer::start().await;

    // The backend rejects the one bad listing; matched first by its title.
    Mock::given(method("POST"))
        .and(path("/v2/product/admin/add"))
        .and(body_string_contains("Broken listing"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_string("{\"message\":\"Price must be positive\"}"),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v2/product/admin/add"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "{\"message\":\"Product created\",\"data\":{\"id\":103,\"title\":\"ok\"}}",
        ))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let descriptors = parse_descriptors(BATCH).unwrap();

    let mut images = HashMap::new();
    images.insert("scarf.jpg".to_string(), vec![0xff, 0xd8, 0xff]);

    let mut progress_calls = Vec::new();
    let summary = BulkUploader::new(&client, 12)
        .with_pause(Duration::ZERO)
        .run(descriptors, &images, |current, total, title| {
            progress_calls.push((current, total, title.to_string()));
        })
        .await;

    // All three attempted, in order, regardless of the middle failure.
    assert_eq!(progress_calls.len(), 3);
    assert_eq!(progress_calls[1], (2, 3, "Broken listing".to_string()));

    assert_eq!(summary.succeeded(), 2);
    assert_eq!(summary.failed(), 1);

    let failed: Vec<_> = summary.failed_items().collect();
    assert_eq!(failed[0].index, 2);
    assert_eq!(failed[0].error.as_deref(), Some("Price must be positive"));

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
}

#[tokio::test]
async fn successes_carry_the_created_product_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/product/admin/add"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "{\"message\":\"Product created\",\"data\":{\"id\":777,\"title\":\"ok\"}}",
        ))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let descriptors = parse_descriptors("[{\"title\": \"Single\", \"price\": 5}]").unwrap();

    let summary = BulkUploader::new(&client, 12)
        .with_pause(Duration::ZERO)
        .run(descriptors, &HashMap::new(), |_, _, _| {})
        .await;

    assert_eq!(summary.succeeded(), 1);
    assert_eq!(summary.outcomes[0].product_id, Some(777));
}
