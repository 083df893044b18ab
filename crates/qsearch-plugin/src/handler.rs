// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Trigger payload in, [`Envelope`] out.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use qsearch_search_google_cse::{CseClient, SearchOptions, SearchResultItem};
use serde_json::Value;
use tracing::{error, info, instrument, warn};

use crate::envelope::Envelope;
use crate::error::PluginError;
use crate::event::extract_query;

/// Handles one invocation at a time; holds no per-request state and can be
/// shared freely across concurrent invocations.
#[derive(Debug, Clone)]
pub struct SearchHandler {
	client: CseClient,
}

impl SearchHandler {
	pub fn new(client: CseClient) -> Self {
		Self { client }
	}

	pub fn is_configured(&self) -> bool {
		self.client.is_configured()
	}

	/// Run one invocation. Never fails: every outcome is an envelope.
	///
	/// Upstream options are not taken from the payload; searches always use
	/// [`SearchOptions::default`].
	#[instrument(skip_all)]
	pub async fn handle(&self, event: &Value) -> Envelope {
		info!(event = %event, "Received event");

		match self.process(event).await {
			Ok(envelope) => envelope,
			Err(err) => {
				let kind = err.kind();
				if kind.policy().log_as_error {
					error!(error = %err, kind = ?kind, "Error in plugin execution");
				} else {
					warn!(error = %err, kind = ?kind, "Rejected search request");
				}
				Envelope::from_error(&err)
			}
		}
	}

	async fn process(&self, event: &Value) -> Result<Envelope, PluginError> {
		let query = extract_query(event).ok_or(PluginError::MissingQuery)?;

		let results = guarded(self.search(query)).await?;
		info!(result_count = results.len(), "Search succeeded");

		Envelope::success(&results)
			.map_err(|e| PluginError::Unexpected(format!("failed to encode results: {e}")))
	}

	async fn search(&self, query: &str) -> Result<Vec<SearchResultItem>, PluginError> {
		let response = self.client.search(query, &SearchOptions::default()).await?;
		Ok(response.normalize())
	}
}

/// Awaits `fut`, turning a panic into [`PluginError::Unexpected`].
pub(crate) async fn guarded<T, F>(fut: F) -> Result<T, PluginError>
where
	F: Future<Output = Result<T, PluginError>>,
{
	match AssertUnwindSafe(fut).catch_unwind().await {
		Ok(result) => result,
		Err(panic) => Err(PluginError::Unexpected(panic_message(panic.as_ref()))),
	}
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
	if let Some(message) = panic.downcast_ref::<&str>() {
		format!("panic: {message}")
	} else if let Some(message) = panic.downcast_ref::<String>() {
		format!("panic: {message}")
	} else {
		"panic with non-string payload".to_string()
	}
}
