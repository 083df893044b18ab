// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! End-to-end tests for `SearchHandler::handle` with a mock Google endpoint.
//!
//! Tests cover:
//! - Missing query returns 400 without any upstream call
//! - Both payload shapes reach Google with the extracted query
//! - Success bodies carry normalized results
//! - Upstream and configuration failures return 500 with an error description

use qsearch_plugin::{SearchHandler, MISSING_QUERY_MESSAGE, PROCESSING_ERROR_MESSAGE};
use qsearch_search_google_cse::{CseClient, CseConfig};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CSE_PATH: &str = "/customsearch/v1";

fn handler_for(server: &MockServer) -> SearchHandler {
	let config =
		CseConfig::new("test-key", "test-cx").with_base_url(format!("{}{CSE_PATH}", server.uri()));
	SearchHandler::new(CseClient::new(config))
}

fn body(envelope: &qsearch_plugin::Envelope) -> Value {
	envelope.body_json().expect("envelope body is JSON")
}

// ============================================================================
// 400: missing query
// ============================================================================

#[tokio::test]
async fn missing_query_makes_no_network_call() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
		.expect(0)
		.mount(&server)
		.await;

	let handler = handler_for(&server);
	for event in [
		json!({}),
		json!({ "query": "" }),
		json!({ "parameters": {} }),
		json!({ "parameters": { "query": "" } }),
		json!({ "search": "cats" }),
	] {
		let envelope = handler.handle(&event).await;
		assert_eq!(envelope.status_code, 400, "event: {event}");
		assert_eq!(body(&envelope), json!({ "message": MISSING_QUERY_MESSAGE }));
	}

	assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// 200: results
// ============================================================================

#[tokio::test]
async fn parameters_query_is_searched() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path(CSE_PATH))
		.and(query_param("q", "cats"))
		.and(query_param("num", "10"))
		.and(query_param("start", "1"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"items": [{
				"title": "A",
				"link": "http://x",
				"snippet": "s",
				"pagemap": { "cse_thumbnail": [{ "src": "http://t" }] }
			}]
		})))
		.expect(1)
		.mount(&server)
		.await;

	let envelope = handler_for(&server)
		.handle(&json!({ "parameters": { "query": "cats" } }))
		.await;

	assert_eq!(envelope.status_code, 200);
	assert_eq!(
		body(&envelope),
		json!({
			"results": [{
				"title": "A",
				"link": "http://x",
				"snippet": "s",
				"source": "Google Search",
				"thumbnail": "http://t"
			}]
		})
	);
}

#[tokio::test]
async fn empty_top_level_query_falls_through_to_parameters() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path(CSE_PATH))
		.and(query_param("q", "cats"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
		.expect(1)
		.mount(&server)
		.await;

	let envelope = handler_for(&server)
		.handle(&json!({ "query": "", "parameters": { "query": "  cats " } }))
		.await;

	assert_eq!(envelope.status_code, 200);
}

#[tokio::test]
async fn zero_results_is_success() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path(CSE_PATH))
		.and(query_param("q", "zzzxqj"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"searchInformation": { "totalResults": "0" }
		})))
		.mount(&server)
		.await;

	let envelope = handler_for(&server).handle(&json!({ "query": "zzzxqj" })).await;

	assert_eq!(envelope.status_code, 200);
	assert_eq!(body(&envelope), json!({ "results": [] }));
}

#[tokio::test]
async fn inbound_options_are_not_forwarded() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path(CSE_PATH))
		.and(query_param("num", "10"))
		.and(query_param("start", "1"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
		.expect(1)
		.mount(&server)
		.await;

	let envelope = handler_for(&server)
		.handle(&json!({
			"query": "rust",
			"results_count": 3,
			"start_index": 40,
			"site_search": "example.com"
		}))
		.await;

	assert_eq!(envelope.status_code, 200);
	let requests = server.received_requests().await.unwrap();
	assert_eq!(requests.len(), 1);
	assert!(!requests[0].url.query().unwrap_or("").contains("siteSearch"));
}

// ============================================================================
// 500: failures
// ============================================================================

#[tokio::test]
async fn upstream_403_returns_500_with_error() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path(CSE_PATH))
		.respond_with(
			ResponseTemplate::new(403)
				.set_body_string(r#"{"error":{"code":403,"message":"forbidden"}}"#),
		)
		.expect(1)
		.mount(&server)
		.await;

	let envelope = handler_for(&server).handle(&json!({ "query": "cats" })).await;

	assert_eq!(envelope.status_code, 500);
	let body = body(&envelope);
	assert_eq!(body["message"], PROCESSING_ERROR_MESSAGE);
	let error = body["error"].as_str().unwrap();
	assert!(!error.is_empty());
	assert!(error.contains("403"));
	assert!(!error.contains("test-key"));
}

#[tokio::test]
async fn malformed_upstream_body_returns_500() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path(CSE_PATH))
		.respond_with(ResponseTemplate::new(200).set_body_string("not json"))
		.mount(&server)
		.await;

	let envelope = handler_for(&server).handle(&json!({ "query": "cats" })).await;

	assert_eq!(envelope.status_code, 500);
	assert!(body(&envelope)["error"]
		.as_str()
		.unwrap()
		.contains("invalid response"));
}

#[tokio::test]
async fn missing_credentials_return_500_without_network_call() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
		.expect(0)
		.mount(&server)
		.await;

	let config = CseConfig {
		base_url: Some(format!("{}{CSE_PATH}", server.uri())),
		..Default::default()
	};
	let handler = SearchHandler::new(CseClient::new(config));

	let envelope = handler.handle(&json!({ "query": "cats" })).await;

	assert_eq!(envelope.status_code, 500);
	assert_eq!(
		body(&envelope),
		json!({
			"message": PROCESSING_ERROR_MESSAGE,
			"error": "Google API key or Search Engine ID not configured"
		})
	);
}
