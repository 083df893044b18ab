// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Search provider configuration section.

use qsearch_common_config::SecretString;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchConfigLayer {
	#[serde(default)]
	pub google_cse: Option<GoogleCseConfigLayer>,
}

impl SearchConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if let Some(other_google) = other.google_cse {
			let google = self.google_cse.get_or_insert_with(Default::default);
			google.merge(other_google);
		}
	}

	pub fn finalize(self) -> SearchConfig {
		SearchConfig {
			google_cse: self.google_cse.map(|g| g.finalize()).unwrap_or_default(),
		}
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GoogleCseConfigLayer {
	#[serde(default)]
	pub api_key: Option<SecretString>,
	#[serde(default)]
	pub search_engine_id: Option<String>,
	#[serde(default)]
	pub base_url: Option<String>,
}

impl GoogleCseConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.api_key.is_some() {
			self.api_key = other.api_key;
		}
		if other.search_engine_id.is_some() {
			self.search_engine_id = other.search_engine_id;
		}
		if other.base_url.is_some() {
			self.base_url = other.base_url;
		}
	}

	pub fn finalize(self) -> GoogleCseConfig {
		GoogleCseConfig {
			api_key: self.api_key.filter(|k| !k.is_empty()),
			search_engine_id: self.search_engine_id.filter(|id| !id.is_empty()),
			base_url: self.base_url.filter(|url| !url.is_empty()),
		}
	}
}

#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
	pub google_cse: GoogleCseConfig,
}

#[derive(Debug, Clone, Default)]
pub struct GoogleCseConfig {
	pub api_key: Option<SecretString>,
	pub search_engine_id: Option<String>,
	pub base_url: Option<String>,
}

impl GoogleCseConfig {
	pub fn is_configured(&self) -> bool {
		self.api_key.is_some() && self.search_engine_id.is_some()
	}
}
