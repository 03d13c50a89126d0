//! Integration tests for the ApolloClient using mockito for HTTP mocking.

use apollo_mcp_server::client::{AsyncApolloClient, AsyncApolloClientImpl};
use apollo_mcp_server::domain::ApiKey;
use apollo_mcp_server::error::{ApolloApiError, UpstreamOperation};
use apollo_mcp_server::models::{PayloadBuilder, UpstreamPayload};
use apollo_mcp_server::tools::{ContactSearchTools, SearchPeopleContactsParams};
use apollo_mcp_server::ApolloClient;
use mockito::{Matcher, Server};
use serde_json::json;
use std::sync::Arc;

fn api_key() -> ApiKey {
    ApiKey::new("test-api-key").unwrap()
}

fn search_payload() -> UpstreamPayload {
    PayloadBuilder::new()
        .field("page", 1)
        .and_then(|b| b.field("per_page", 100))
        .and_then(|b| b.field("organization_ids", ["abc123"]))
        .unwrap()
        .build()
}

#[test]
fn test_search_people_sends_headers_and_body() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/mixed_people/search")
        .match_header("x-api-key", "test-api-key")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "page": 1,
            "per_page": 100,
            "organization_ids": ["abc123"]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"people": [{"id": "p1", "name": "Jane Doe"}]}"#)
        .create();

    let client = ApolloClient::with_base_url(server.url());
    let response = client.search_people(&api_key(), &search_payload()).unwrap();

    mock.assert();
    assert_eq!(response["people"][0]["id"], "p1");
    assert_eq!(client.metrics().http_requests_total(), 1);
    assert_eq!(client.metrics().people_searches_total(), 1);
    assert_eq!(client.metrics().http_errors_total(), 0);
}

#[test]
fn test_enrich_organization_posts_to_enrich_endpoint() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/organizations/enrich")
        .match_header("x-api-key", "test-api-key")
        .match_body(Matcher::Json(json!({"domain": "apollo.io"})))
        .with_status(200)
        .with_body(r#"{"organization": {"name": "Apollo"}}"#)
        .create();

    let payload = PayloadBuilder::new()
        .field("domain", "apollo.io")
        .unwrap()
        .build();

    let client = ApolloClient::with_base_url(server.url());
    let response = client.enrich_organization(&api_key(), &payload).unwrap();

    mock.assert();
    assert_eq!(response, json!({"organization": {"name": "Apollo"}}));
    assert_eq!(client.metrics().organization_enrichments_total(), 1);
}

#[test]
fn test_non_2xx_keeps_status_and_raw_body() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/mixed_people/search")
        .with_status(403)
        .with_body("Your plan does not include API access")
        .expect(1)
        .create();

    let client = ApolloClient::with_base_url(server.url());
    let result = client.search_people(&api_key(), &search_payload());

    mock.assert();
    match result {
        Err(ApolloApiError::Upstream {
            operation,
            status,
            body,
        }) => {
            assert_eq!(operation, UpstreamOperation::PeopleSearch);
            assert_eq!(status, 403);
            assert_eq!(body, "Your plan does not include API access");
        }
        other => panic!("Expected Upstream error, got: {:?}", other),
    }
    assert_eq!(client.metrics().http_errors_total(), 1);
}

#[test]
fn test_server_error_message_for_enrichment() {
    let mut server = Server::new();

    let body = r#"{"error":"internal"}"#;
    let mock = server
        .mock("POST", "/organizations/enrich")
        .with_status(500)
        .with_body(body)
        .create();

    let client = ApolloClient::with_base_url(server.url());
    let err = client
        .enrich_organization(&api_key(), &UpstreamPayload::new())
        .unwrap_err();

    mock.assert();
    assert_eq!(
        err.to_string(),
        format!("Apollo organization enrichment failed with status 500: {}", body)
    );
}

#[test]
fn test_status_below_400_outside_2xx_is_upstream_error() {
    let mut server = Server::new();

    // ureq only errors on >= 400; a 300 without Location comes back as a response
    let mock = server
        .mock("POST", "/mixed_people/search")
        .with_status(300)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices": ["a", "b"]}"#)
        .create();

    let client = ApolloClient::with_base_url(server.url());
    let result = client.search_people(&api_key(), &search_payload());

    mock.assert();
    match result {
        Err(ApolloApiError::Upstream { status, body, .. }) => {
            assert_eq!(status, 300);
            assert_eq!(body, r#"{"choices": ["a", "b"]}"#);
        }
        other => panic!("Expected Upstream error, got: {:?}", other),
    }
    assert_eq!(client.metrics().http_errors_total(), 1);
}

#[test]
fn test_success_body_larger_than_ten_megabytes_parses() {
    let mut server = Server::new();

    let blob = "a".repeat(11 * 1024 * 1024);
    let mock = server
        .mock("POST", "/organizations/enrich")
        .with_status(200)
        .with_body(json!({ "organization": { "blob": blob } }).to_string())
        .create();

    let client = ApolloClient::with_base_url(server.url());
    let response = client
        .enrich_organization(&api_key(), &UpstreamPayload::new())
        .unwrap();

    mock.assert();
    assert_eq!(
        response["organization"]["blob"].as_str().map(str::len),
        Some(blob.len())
    );
}

#[test]
fn test_error_body_larger_than_ten_megabytes_is_kept() {
    let mut server = Server::new();

    let body = "e".repeat(11 * 1024 * 1024);
    let mock = server
        .mock("POST", "/mixed_people/search")
        .with_status(502)
        .with_body(&body)
        .create();

    let client = ApolloClient::with_base_url(server.url());
    let result = client.search_people(&api_key(), &search_payload());

    mock.assert();
    match result {
        Err(ApolloApiError::Upstream {
            status,
            body: received,
            ..
        }) => {
            assert_eq!(status, 502);
            assert_eq!(received.len(), body.len());
            assert!(received == body);
        }
        other => panic!("Expected Upstream error, got: {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_non_json_success_body_is_an_error() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/mixed_people/search")
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create();

    let client = ApolloClient::with_base_url(server.url());
    let result = client.search_people(&api_key(), &search_payload());

    mock.assert();
    assert!(matches!(result, Err(ApolloApiError::Json(_))));
}

#[test]
fn test_connection_failure_is_a_transport_error() {
    // Port 9 (discard) is not expected to be listening in the test environment
    let client = ApolloClient::with_base_url("http://127.0.0.1:9".to_string());
    let result = client.search_people(&api_key(), &search_payload());

    assert!(matches!(result, Err(ApolloApiError::Transport(_))));
    assert_eq!(client.metrics().http_errors_total(), 1);
}

#[tokio::test]
async fn test_async_client_wraps_sync_client() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/mixed_people/search")
        .match_header("x-api-key", "test-api-key")
        .with_status(200)
        .with_body(r#"{"people": []}"#)
        .create_async()
        .await;

    let client = AsyncApolloClientImpl::new(ApolloClient::with_base_url(server.url()));
    let response = client
        .search_people(&api_key(), &search_payload())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response, json!({"people": []}));
    assert_eq!(client.inner().metrics().http_requests_total(), 1);
}

#[tokio::test]
async fn test_search_tool_end_to_end() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/mixed_people/search")
        .match_header("x-api-key", "test-api-key")
        .match_body(Matcher::Json(json!({
            "page": 2,
            "per_page": 50,
            "q_organization_domains": "apollo.io"
        })))
        .with_status(200)
        .with_body(r#"{"people":[]}"#)
        .expect(1)
        .create_async()
        .await;

    let client = Arc::new(AsyncApolloClientImpl::new(ApolloClient::with_base_url(
        server.url(),
    )));
    let tools = ContactSearchTools::new(client, Some(api_key()));

    let text = tools
        .search_people_contacts(SearchPeopleContactsParams {
            domain: Some("apollo.io".to_string()),
            page: Some(2),
            limit: Some(50),
            ..Default::default()
        })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(text, "{\n  \"people\": []\n}");
}
