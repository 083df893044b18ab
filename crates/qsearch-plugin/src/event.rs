// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Query extraction from trigger payloads.
//!
//! Callers send either `{"query": "..."}` or
//! `{"parameters": {"query": "..."}}`. Each shape is one entry in
//! [`QUERY_EXTRACTORS`]; the first one yielding a non-blank string wins.

use serde_json::Value;
use tracing::trace;

/// Pulls a candidate query out of a payload.
pub type QueryExtractor = fn(&Value) -> Option<&str>;

/// Extraction strategies, tried in order.
pub const QUERY_EXTRACTORS: &[(&str, QueryExtractor)] = &[
	("query", top_level_query),
	("parameters.query", parameters_query),
];

fn top_level_query(event: &Value) -> Option<&str> {
	event.get("query")?.as_str()
}

fn parameters_query(event: &Value) -> Option<&str> {
	event.get("parameters")?.get("query")?.as_str()
}

/// Returns the first non-blank query, trimmed, or `None` when no strategy
/// finds one.
///
/// A blank or whitespace-only `query` does not stop the search: extraction
/// falls through to `parameters.query`. Surrounding whitespace never reaches
/// Google.
pub fn extract_query(event: &Value) -> Option<&str> {
	QUERY_EXTRACTORS.iter().find_map(|(name, extract)| {
		let query = extract(event)?.trim();
		if query.is_empty() {
			return None;
		}
		trace!(strategy = name, "query extracted");
		Some(query)
	})
}
