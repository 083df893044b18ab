// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration layer for merging from multiple sources.

use serde::Deserialize;

use crate::sections::{HttpConfigLayer, LoggingConfigLayer, SearchConfigLayer};

/// Plugin configuration layer; every field is optional so layers can stack.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PluginConfigLayer {
	#[serde(default)]
	pub http: Option<HttpConfigLayer>,
	#[serde(default)]
	pub search: Option<SearchConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
}

impl PluginConfigLayer {
	/// Merge another layer into this one. Other layer takes precedence.
	pub fn merge(&mut self, other: PluginConfigLayer) {
		merge_option(&mut self.http, other.http, HttpConfigLayer::merge);
		merge_option(&mut self.search, other.search, SearchConfigLayer::merge);
		merge_option(&mut self.logging, other.logging, LoggingConfigLayer::merge);
	}
}

fn merge_option<T>(base: &mut Option<T>, other: Option<T>, merge: fn(&mut T, T)) {
	match (base.as_mut(), other) {
		(Some(b), Some(o)) => merge(b, o),
		(None, Some(o)) => *base = Some(o),
		_ => {}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn merge_fills_missing_sections() {
		let mut base = PluginConfigLayer::default();
		base.merge(PluginConfigLayer {
			http: Some(HttpConfigLayer {
				host: None,
				port: Some(3000),
			}),
			..Default::default()
		});
		assert_eq!(base.http.unwrap().port, Some(3000));
		assert!(base.search.is_none());
	}

	#[test]
	fn merge_keeps_base_when_other_missing() {
		let mut base = PluginConfigLayer {
			logging: Some(LoggingConfigLayer {
				level: Some("debug".to_string()),
				format: None,
			}),
			..Default::default()
		};
		base.merge(PluginConfigLayer::default());
		assert_eq!(base.logging.unwrap().level.as_deref(), Some("debug"));
	}
}
