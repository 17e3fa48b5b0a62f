//! Tests for the HTTP client module

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> Client {
    let config = ClientConfig::builder()
        .base_url(base_url)
        .token("secret123")
        .build()
        .unwrap();
    Client::new(config).unwrap()
}

#[test]
fn test_config_defaults() {
    let config = ClientConfig::builder().token("t").build().unwrap();
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    assert!(config.user_agent.starts_with("cirrus-client/"));
    assert!(config.default_headers.is_empty());
}

#[test]
fn test_config_builder() {
    let config = ClientConfig::builder()
        .base_url("https://engine.example.com")
        .timeout(Duration::from_secs(30))
        .user_agent("custom-agent/1.0")
        .header("X-Custom", "value")
        .token("t")
        .build()
        .unwrap();

    assert_eq!(config.base_url, "https://engine.example.com");
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.user_agent, "custom-agent/1.0");
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
}

#[test]
fn test_config_requires_token() {
    let result = ClientConfig::builder().build();
    assert!(matches!(result, Err(Error::Config { .. })));

    let result = ClientConfig::builder().token("").build();
    assert!(matches!(result, Err(Error::Config { .. })));
}

#[test]
fn test_config_debug_redacts_token() {
    let config = ClientConfig::builder().token("super-secret").build().unwrap();
    let debug_str = format!("{config:?}");
    assert!(debug_str.contains("REDACTED"));
    assert!(!debug_str.contains("super-secret"));
}

#[test]
fn test_token_from_env() {
    std::env::set_var(TOKEN_ENV, "env-token");
    let config = ClientConfig::builder()
        .token_from_env()
        .unwrap()
        .build()
        .unwrap();
    let client = Client::new(config).unwrap();
    assert_eq!(client.base_url(), DEFAULT_BASE_URL);
}

#[tokio::test]
async fn test_request_sends_auth_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/info"))
        .and(header("Authorization", "Token secret123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let body: serde_json::Value = client.get_json("/api/info").await.unwrap();

    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn test_get_with_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/list"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let body: serde_json::Value = client
        .get_json_with_query(
            "/api/list",
            &[("page", "2".to_string()), ("limit", "10".to_string())],
        )
        .await
        .unwrap();

    assert!(body["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/items"))
        .and(body_json(json!({ "name": "test" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 1 })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let body: serde_json::Value = client
        .post_json("/api/items", &json!({ "name": "test" }))
        .await
        .unwrap();

    assert_eq!(body["id"], 1);
}

#[tokio::test]
async fn test_delete() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/items/42"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    client.delete("/api/items/42").await.unwrap();
}

#[tokio::test]
async fn test_server_error_maps_to_server_variant() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/broken"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let err = client
        .get_json::<serde_json::Value>("/api/broken")
        .await
        .unwrap_err();

    match err {
        Error::Server { status, body } => {
            assert_eq!(status, 502);
            assert_eq!(body, "Bad Gateway");
        }
        other => panic!("expected Server error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_client_error_maps_to_api_variant() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/missing"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "error": {
                "code": 422,
                "message": "validation failed",
                "validation": { "name": "must not be empty" }
            }
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let err = client
        .get_json::<serde_json::Value>("/api/missing")
        .await
        .unwrap_err();

    match err {
        Error::Api(api_err) => {
            assert_eq!(api_err.code, 422);
            assert_eq!(api_err.message, "validation failed");
            assert_eq!(
                api_err.validation.get("name"),
                Some(&"must not be empty".to_string())
            );
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unparsable_error_body_maps_to_decode() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/odd"))
        .respond_with(ResponseTemplate::new(400).set_body_string("not json at all"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let err = client
        .get_json::<serde_json::Value>("/api/odd")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Decode { .. }));
}

#[tokio::test]
async fn test_malformed_success_body_maps_to_decode() {
    let mock_server = MockServer::start().await;

    #[derive(serde::Deserialize, Debug)]
    #[allow(dead_code)]
    struct Strict {
        id: u64,
    }

    Mock::given(method("GET"))
        .and(path("/api/shape"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "not a number" })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let err = client.get_json::<Strict>("/api/shape").await.unwrap_err();

    assert!(matches!(err, Error::Decode { .. }));
}
