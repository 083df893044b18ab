// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! The `{statusCode, body}` response returned to the invoking environment.

use qsearch_search_google_cse::SearchResultItem;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::PluginError;

pub const MISSING_QUERY_MESSAGE: &str = "Search query is required";
pub const PROCESSING_ERROR_MESSAGE: &str = "An error occurred while processing the search request";

/// Status code plus a JSON-encoded body string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
	pub status_code: u16,
	pub body: String,
}

#[derive(Serialize)]
struct SuccessBody<'a> {
	results: &'a [SearchResultItem],
}

impl Envelope {
	/// 200 with `{"results": [...]}`.
	pub fn success(results: &[SearchResultItem]) -> Result<Self, serde_json::Error> {
		Ok(Self {
			status_code: http::StatusCode::OK.as_u16(),
			body: serde_json::to_string(&SuccessBody { results })?,
		})
	}

	/// Envelope for a failure, shaped by its kind's policy.
	pub fn from_error(err: &PluginError) -> Self {
		let policy = err.kind().policy();
		let body = if policy.include_error {
			json!({ "message": policy.message, "error": err.to_string() })
		} else {
			json!({ "message": policy.message })
		};

		Self {
			status_code: policy.status.as_u16(),
			body: body.to_string(),
		}
	}

	/// Decoded body, for callers that want to inspect it.
	pub fn body_json(&self) -> Result<Value, serde_json::Error> {
		serde_json::from_str(&self.body)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use qsearch_search_google_cse::{CseError, PROVIDER_SOURCE};

	#[test]
	fn success_envelope() {
		let results = vec![SearchResultItem {
			title: "A".into(),
			link: "http://x".into(),
			snippet: "s".into(),
			source: PROVIDER_SOURCE.into(),
			thumbnail: None,
		}];
		let envelope = Envelope::success(&results).unwrap();

		assert_eq!(envelope.status_code, 200);
		assert_eq!(
			envelope.body_json().unwrap(),
			json!({
				"results": [
					{ "title": "A", "link": "http://x", "snippet": "s", "source": "Google Search" }
				]
			})
		);
	}

	#[test]
	fn empty_results_envelope() {
		let envelope = Envelope::success(&[]).unwrap();
		assert_eq!(envelope.body, r#"{"results":[]}"#);
	}

	#[test]
	fn missing_query_envelope_has_no_error_field() {
		let envelope = Envelope::from_error(&PluginError::MissingQuery);
		assert_eq!(envelope.status_code, 400);
		assert_eq!(
			envelope.body_json().unwrap(),
			json!({ "message": "Search query is required" })
		);
	}

	#[test]
	fn server_error_envelope_carries_description() {
		let envelope = Envelope::from_error(&PluginError::from(CseError::NotConfigured));
		assert_eq!(envelope.status_code, 500);
		assert_eq!(
			envelope.body_json().unwrap(),
			json!({
				"message": "An error occurred while processing the search request",
				"error": "Google API key or Search Engine ID not configured"
			})
		);
	}

	#[test]
	fn serializes_with_camel_case_status() {
		let envelope = Envelope {
			status_code: 400,
			body: "{}".into(),
		};
		assert_eq!(
			serde_json::to_value(&envelope).unwrap(),
			json!({ "statusCode": 400, "body": "{}" })
		);
	}
}
