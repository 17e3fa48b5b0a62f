//! End-to-end tests driving the pagination engine through the HTTP client
//! against a mock Engine API.

use cirrus_client::lbaas::{BackendApi, BackendInfo};
use cirrus_client::pagination::{scan_until, stream, StreamEvent};
use cirrus_client::{Client, ClientConfig, Error};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> Client {
    let config = ClientConfig::builder()
        .base_url(base_url)
        .token("secret123")
        .build()
        .unwrap();
    Client::new(config).unwrap()
}

fn page_body(page: u32, total_pages: u32, total_items: u32, names: &[&str]) -> serde_json::Value {
    let data: Vec<_> = names
        .iter()
        .map(|name| json!({ "identifier": format!("id-{name}"), "name": name }))
        .collect();
    json!({
        "data": {
            "page": page,
            "limit": 10,
            "total_pages": total_pages,
            "total_items": total_items,
            "data": data
        }
    })
}

async fn mount_page(server: &MockServer, page: u32, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/lbaas/v1/backends.json"))
        .and(query_param("page", page.to_string()))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn stream_walks_all_pages_in_order_then_closes() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, 1, page_body(1, 3, 8, &["a", "b", "c"])).await;
    mount_page(&mock_server, 2, page_body(2, 3, 8, &["d", "e", "f"])).await;
    mount_page(&mock_server, 3, page_body(3, 3, 8, &["g", "h"])).await;

    let api = BackendApi::new(test_client(&mock_server.uri()));
    let (mut rx, _cancel) = stream(api);

    let mut names = Vec::new();
    while let Some(event) = rx.recv().await {
        match event {
            StreamEvent::Item(BackendInfo { name, .. }) => names.push(name),
            StreamEvent::Failed(err) => panic!("unexpected stream failure: {err}"),
        }
    }

    assert_eq!(names, vec!["a", "b", "c", "d", "e", "f", "g", "h"]);
    assert!(rx.recv().await.is_none());
}

#[tokio::test]
async fn stream_surfaces_mid_collection_server_error() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, 1, page_body(1, 2, 5, &["a", "b", "c"])).await;

    Mock::given(method("GET"))
        .and(path("/api/lbaas/v1/backends.json"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let api = BackendApi::new(test_client(&mock_server.uri()));
    let (mut rx, _cancel) = stream(api);

    let mut items = 0;
    let mut failure = None;
    while let Some(event) = rx.recv().await {
        match event {
            StreamEvent::Item(_) => items += 1,
            StreamEvent::Failed(err) => failure = Some(err),
        }
    }

    assert_eq!(items, 3);
    assert!(matches!(failure, Some(Error::Server { status: 500, .. })));
}

#[tokio::test]
async fn scan_until_does_not_look_past_the_first_page() {
    let mock_server = MockServer::start().await;

    // the match lives on page 2, which scan_until never requests
    Mock::given(method("GET"))
        .and(path("/api/lbaas/v1/backends.json"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(1, 2, 5, &["a", "b", "c"])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = BackendApi::new(test_client(&mock_server.uri()));
    let result = scan_until(&api, |info| Ok(info.name == "d")).await;

    assert!(matches!(result, Err(Error::ConditionNeverMet)));
}

#[tokio::test]
async fn stream_cancel_closes_channel() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, 1, page_body(1, 1, 2, &["a", "b"])).await;

    let api = BackendApi::new(test_client(&mock_server.uri()));
    let (mut rx, cancel) = stream(api);

    cancel.cancel();
    cancel.cancel();

    let mut received = 0;
    while rx.recv().await.is_some() {
        received += 1;
    }
    assert!(received <= 1);
}
