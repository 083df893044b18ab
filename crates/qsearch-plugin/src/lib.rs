// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Request handling for the qsearch plugin.
//!
//! A trigger payload arrives, the query is pulled out of it, Google is asked
//! once, and the outcome always comes back as an [`Envelope`]: 200 with
//! results, 400 for a missing query, 500 for everything else.

pub mod api;
pub mod envelope;
pub mod error;
pub mod event;
pub mod handler;

pub use api::create_router;
pub use envelope::{Envelope, MISSING_QUERY_MESSAGE, PROCESSING_ERROR_MESSAGE};
pub use error::{ErrorKind, PluginError};
pub use event::{extract_query, QUERY_EXTRACTORS};
pub use handler::SearchHandler;

use qsearch_plugin_config::GoogleCseConfig;
use qsearch_search_google_cse::CseConfig;

/// Translate the loaded configuration section into client configuration.
pub fn cse_config(config: &GoogleCseConfig) -> CseConfig {
	CseConfig {
		api_key: config.api_key.clone(),
		search_engine_id: config.search_engine_id.clone(),
		base_url: config.base_url.clone(),
	}
}
