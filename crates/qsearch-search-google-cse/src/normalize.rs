// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Reshaping of raw Custom Search responses into result items.
//!
//! Only `items[*].title`, `link`, `snippet` and
//! `pagemap.cse_thumbnail[0].src` are read. Anything missing or of the wrong
//! type degrades to an empty string; a single odd entry never fails the batch.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Value of [`SearchResultItem::source`] for every result.
pub const PROVIDER_SOURCE: &str = "Google Search";

/// One normalized search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultItem {
	pub title: String,
	pub link: String,
	pub snippet: String,
	pub source: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub thumbnail: Option<String>,
}

/// Normalize a raw response. A missing `items` field is a valid empty result.
pub fn normalize(response: &Value) -> Vec<SearchResultItem> {
	let Some(items) = response.get("items").and_then(Value::as_array) else {
		return Vec::new();
	};

	items.iter().map(normalize_item).collect()
}

fn normalize_item(item: &Value) -> SearchResultItem {
	SearchResultItem {
		title: string_field(item, "title"),
		link: string_field(item, "link"),
		snippet: string_field(item, "snippet"),
		source: PROVIDER_SOURCE.to_string(),
		thumbnail: thumbnail(item),
	}
}

// Present only when `cse_thumbnail` is a non-empty array. A first entry
// without `src` still yields a (blank) thumbnail.
fn thumbnail(item: &Value) -> Option<String> {
	let first = item
		.get("pagemap")?
		.get("cse_thumbnail")?
		.as_array()?
		.first()?;
	Some(string_field(first, "src"))
}

fn string_field(value: &Value, key: &str) -> String {
	value
		.get(key)
		.and_then(Value::as_str)
		.unwrap_or_default()
		.to_string()
}
