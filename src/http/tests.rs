//! Tests for the transport module

use super::*;
use crate::decode::{Envelope, GUARD_PREFIX};
use crate::error::Error;
use crate::model::{CollectionParser, ModelKind, PostList};
use crate::resource::Resource;
use serde_json::json;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A guard-prefixed listing body with two posts.
fn listing_body() -> String {
    format!(
        "{GUARD_PREFIX}{}",
        json!({
            "success": true,
            "payload": {
                "value": [
                    {"id": "p-1", "title": "First"},
                    {"id": "p-2", "title": "Second"}
                ]
            }
        })
    )
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_http_config_default() {
    let config = HttpConfig::default();
    assert!(config.base_url.is_none());
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.default_headers.is_empty());
    assert!(config.user_agent.starts_with("medium-client/"));
}

#[test]
fn test_http_config_builder() {
    let config = HttpConfig::builder()
        .base_url("http://127.0.0.1:9000")
        .timeout(Duration::from_secs(5))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url, Some("http://127.0.0.1:9000".to_string()));
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_transport_debug() {
    let transport = HttpTransport::new();
    let debug_str = format!("{transport:?}");
    assert!(debug_str.contains("HttpTransport"));
    assert!(debug_str.contains("config"));
}

// ============================================================================
// Request Flow
// ============================================================================

#[tokio::test]
async fn test_transport_list_posts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "swift"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_body()))
        .mount(&mock_server)
        .await;

    let config = HttpConfig::builder().base_url(mock_server.uri()).build();
    let transport = HttpTransport::with_config(config);

    // Tag casing is normalized on the way out; the mock only matches q=swift.
    let model = transport
        .load(&Resource::list_posts("Swift"))
        .await
        .unwrap();

    assert_eq!(model.kind(), ModelKind::Posts);
    let posts = model.into_posts().unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts.posts[0].title, "First");
}

#[tokio::test]
async fn test_transport_sends_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(header("user-agent", "test-agent/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_body()))
        .mount(&mock_server)
        .await;

    let config = HttpConfig::builder()
        .base_url(mock_server.uri())
        .user_agent("test-agent/1.0")
        .build();
    let transport = HttpTransport::with_config(config);

    assert!(transport.load(&Resource::list_posts("swift")).await.is_ok());
}

#[tokio::test]
async fn test_transport_sends_default_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(header("X-Request-Source", "tests"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_body()))
        .mount(&mock_server)
        .await;

    let config = HttpConfig::builder()
        .base_url(mock_server.uri())
        .header("X-Request-Source", "tests")
        .build();
    let transport = HttpTransport::with_config(config);

    assert!(transport.load(&Resource::list_posts("swift")).await.is_ok());
}

#[tokio::test]
async fn test_transport_base_url_trailing_slash() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_body()))
        .mount(&mock_server)
        .await;

    let config = HttpConfig::builder()
        .base_url(format!("{}/", mock_server.uri()))
        .build();
    let transport = HttpTransport::with_config(config);

    assert!(transport.load(&Resource::list_posts("swift")).await.is_ok());
}

// ============================================================================
// Failure Mapping
// ============================================================================

#[tokio::test]
async fn test_transport_maps_404() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&mock_server)
        .await;

    let config = HttpConfig::builder().base_url(mock_server.uri()).build();
    let transport = HttpTransport::with_config(config);

    let err = transport
        .load(&Resource::list_posts("swift"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_transport_maps_500() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let config = HttpConfig::builder().base_url(mock_server.uri()).build();
    let transport = HttpTransport::with_config(config);

    let err = transport
        .load(&Resource::list_posts("swift"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
}

#[tokio::test]
async fn test_transport_unparseable_body_is_empty_model() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>wall</html>"))
        .mount(&mock_server)
        .await;

    let config = HttpConfig::builder().base_url(mock_server.uri()).build();
    let transport = HttpTransport::with_config(config);

    let err = transport
        .load(&Resource::list_posts("swift"))
        .await
        .unwrap_err();

    assert!(err.is_empty_model());
}

#[tokio::test]
async fn test_transport_fetch_post_is_empty_model() {
    let mock_server = MockServer::start().await;

    // A perfectly healthy response still yields no model on this path.
    Mock::given(method("GET"))
        .and(path("/@jane/intro"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_body()))
        .mount(&mock_server)
        .await;

    let config = HttpConfig::builder().base_url(mock_server.uri()).build();
    let transport = HttpTransport::with_config(config);

    let err = transport
        .load(&Resource::fetch_post("jane", "intro"))
        .await
        .unwrap_err();

    assert!(err.is_empty_model());
    assert_eq!(
        err.to_string(),
        "No model in response for fetch_post(@jane/intro)"
    );
}

#[tokio::test]
async fn test_transport_invalid_base_url() {
    let config = HttpConfig::builder().base_url("not a url").build();
    let transport = HttpTransport::with_config(config);

    let err = transport
        .load(&Resource::list_posts("swift"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidUrl(_)));
}

#[tokio::test]
async fn test_transport_timeout_maps_to_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(listing_body())
                .set_delay(Duration::from_millis(250)),
        )
        .mount(&mock_server)
        .await;

    let config = HttpConfig::builder()
        .base_url(mock_server.uri())
        .timeout(Duration::from_millis(25))
        .build();
    let transport = HttpTransport::with_config(config);

    let err = transport
        .load(&Resource::list_posts("swift"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Http(_)));
    assert!(err.is_transport());
}

// ============================================================================
// Collaborator Injection
// ============================================================================

/// Records the envelope it was handed.
#[derive(Default)]
struct RecordingParser {
    seen: Mutex<Option<Envelope>>,
}

impl CollectionParser for RecordingParser {
    fn parse(&self, envelope: &Envelope) -> Option<PostList> {
        *self.seen.lock().unwrap() = Some(envelope.clone());
        Some(PostList::default())
    }
}

#[tokio::test]
async fn test_transport_uses_injected_parser() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(format!("{GUARD_PREFIX}{}", json!({"payload": {"posts": ["p1"]}}))),
        )
        .mount(&mock_server)
        .await;

    let parser = Arc::new(RecordingParser::default());
    let config = HttpConfig::builder().base_url(mock_server.uri()).build();
    let transport =
        HttpTransport::with_config(config).with_collection_parser(parser.clone());

    let model = transport
        .load(&Resource::list_posts("swift"))
        .await
        .unwrap();

    assert_eq!(model.kind(), ModelKind::Posts);
    let seen = parser.seen.lock().unwrap().clone().unwrap();
    assert_eq!(
        serde_json::Value::Object(seen),
        json!({"payload": {"posts": ["p1"]}})
    );
}
