// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Types for the Google Custom Search Engine client.

use qsearch_common_config::{Secret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::DEFAULT_BASE_URL;
use crate::normalize::{normalize, SearchResultItem};

/// Credentials and endpoint for the Custom Search JSON API.
///
/// Built once at startup and handed to [`crate::CseClient::new`]. Missing or
/// empty credentials are only reported when a search is attempted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CseConfig {
	pub api_key: Option<SecretString>,
	pub search_engine_id: Option<String>,
	/// Overrides [`DEFAULT_BASE_URL`] (tests, private mirrors).
	pub base_url: Option<String>,
}

impl CseConfig {
	pub fn new(api_key: impl Into<String>, search_engine_id: impl Into<String>) -> Self {
		Self {
			api_key: Some(Secret::new(api_key.into())),
			search_engine_id: Some(search_engine_id.into()),
			base_url: None,
		}
	}

	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = Some(base_url.into());
		self
	}

	pub fn is_configured(&self) -> bool {
		self.credentials().is_some()
	}

	pub fn endpoint(&self) -> &str {
		self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
	}

	/// `(api_key, search_engine_id)` when both are present and non-empty.
	pub(crate) fn credentials(&self) -> Option<(&str, &str)> {
		let api_key = self.api_key.as_ref().filter(|k| !k.is_empty())?;
		let cx = self.search_engine_id.as_deref().filter(|id| !id.is_empty())?;
		Some((api_key.expose().as_str(), cx))
	}
}

/// Optional knobs for a search. Unknown keys are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
	/// Sent as `num`.
	pub results_count: u32,
	/// 1-based offset, sent as `start`.
	pub start_index: u32,
	/// Sent as `safe` (e.g. `active`, `off`).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub safe_search: Option<String>,
	/// Sent as `fileType`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub file_type: Option<String>,
	/// Sent as `siteSearch`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub site_search: Option<String>,
}

impl Default for SearchOptions {
	fn default() -> Self {
		Self {
			results_count: 10,
			start_index: 1,
			safe_search: None,
			file_type: None,
			site_search: None,
		}
	}
}

impl SearchOptions {
	/// Parse options from a JSON mapping such as `{"results_count": 5}`.
	pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
		Self::deserialize(value)
	}
}

/// Raw JSON body returned by the Custom Search API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CseResponse(Value);

impl CseResponse {
	pub fn raw(&self) -> &Value {
		&self.0
	}

	pub fn into_inner(self) -> Value {
		self.0
	}

	/// Number of entries in `items`, zero when absent.
	pub fn item_count(&self) -> usize {
		self.0
			.get("items")
			.and_then(Value::as_array)
			.map_or(0, Vec::len)
	}

	pub fn normalize(&self) -> Vec<SearchResultItem> {
		normalize(&self.0)
	}
}

impl From<Value> for CseResponse {
	fn from(value: Value) -> Self {
		Self(value)
	}
}
