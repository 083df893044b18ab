// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Google Custom Search Engine client implementation.

use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, error, info, instrument, trace};

use crate::error::CseError;
use crate::types::{CseConfig, CseResponse, SearchOptions};

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// Client for the Google Custom Search JSON API.
///
/// Issues exactly one GET per [`CseClient::search`]; there is no retry and no
/// timeout beyond what reqwest and the host impose.
#[derive(Debug, Clone)]
pub struct CseClient {
	http_client: Client,
	config: CseConfig,
}

impl CseClient {
	pub fn new(config: CseConfig) -> Self {
		Self {
			http_client: qsearch_common_http::new_client(),
			config,
		}
	}

	/// Replaces the underlying HTTP client.
	pub fn with_http_client(mut self, http_client: Client) -> Self {
		self.http_client = http_client;
		self
	}

	pub fn config(&self) -> &CseConfig {
		&self.config
	}

	pub fn is_configured(&self) -> bool {
		self.config.is_configured()
	}

	/// Performs a search and returns Google's JSON body untouched.
	///
	/// Fails with [`CseError::NotConfigured`] before touching the network when
	/// either credential is missing.
	#[instrument(skip(self, options), fields(num = options.results_count, start = options.start_index))]
	pub async fn search(&self, query: &str, options: &SearchOptions) -> Result<CseResponse, CseError> {
		let Some((api_key, cx)) = self.config.credentials() else {
			error!("Google API key or Search Engine ID not configured");
			return Err(CseError::NotConfigured);
		};

		let query = query.trim();
		if query.is_empty() {
			return Err(CseError::EmptyQuery);
		}

		let url = Url::parse_with_params(
			self.config.endpoint(),
			query_pairs(api_key, cx, query, options),
		)
		.map_err(|e| {
			error!(error = %e, endpoint = %self.config.endpoint(), "Invalid Google CSE endpoint");
			CseError::InvalidEndpoint(e.to_string())
		})?;

		info!(query = %query, "Performing Google search");

		let response = self.http_client.get(url).send().await.map_err(|e| {
			let e = e.without_url();
			error!(error = %e, "Error performing Google search");
			CseError::Network(e)
		})?;

		let status = response.status();
		debug!(status = %status, "Received response from Google CSE");

		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			error!(status = status.as_u16(), body = %body, "Google API error");
			return Err(CseError::Api { status, body });
		}

		let body = response.text().await.map_err(|e| {
			let e = e.without_url();
			error!(error = %e, "Failed to read Google CSE response body");
			CseError::Network(e)
		})?;

		trace!(body = %body, "Response body");

		let value: Value = serde_json::from_str(&body).map_err(|e| {
			error!(error = %e, body = %body, "Failed to parse Google CSE response");
			CseError::InvalidResponse(format!("JSON parse error: {e}"))
		})?;

		let response = CseResponse::from(value);
		debug!(item_count = response.item_count(), "Search completed");

		Ok(response)
	}
}

/// Query string for one search, in the order Google documents them.
///
/// `safe`, `fileType` and `siteSearch` only appear when the matching option
/// is set.
pub fn query_pairs(
	api_key: &str,
	cx: &str,
	query: &str,
	options: &SearchOptions,
) -> Vec<(&'static str, String)> {
	let mut pairs = vec![
		("key", api_key.to_string()),
		("cx", cx.to_string()),
		("q", query.to_string()),
		("num", options.results_count.to_string()),
		("start", options.start_index.to_string()),
	];

	let optional = [
		("safe", &options.safe_search),
		("fileType", &options.file_type),
		("siteSearch", &options.site_search),
	];
	pairs.extend(
		optional
			.into_iter()
			.filter_map(|(name, value)| value.clone().map(|v| (name, v))),
	);

	pairs
}
