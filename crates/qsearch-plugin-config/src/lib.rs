// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration for the qsearch plugin.
//!
//! Layered from (lowest to highest precedence) built-in defaults, a TOML
//! file and the environment. Credentials are read once here; nothing reads
//! the environment at request time.
//!
//! # Usage
//!
//! ```ignore
//! use qsearch_plugin_config::load_config;
//!
//! let config = load_config()?;
//! println!("listening on {}", config.http.socket_addr());
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::PluginConfigLayer;
pub use sections::*;
pub use sources::{
	ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource, DEFAULT_CONFIG_PATH,
};

use std::path::PathBuf;

use tracing::{debug, info, warn};

/// Fully resolved plugin configuration.
#[derive(Debug, Clone, Default)]
pub struct PluginConfig {
	pub http: HttpConfig,
	pub search: SearchConfig,
	pub logging: LoggingConfig,
}

/// Load configuration from defaults, the system TOML file and the environment.
pub fn load_config() -> Result<PluginConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(config_path: impl Into<PathBuf>) -> Result<PluginConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

/// Load configuration from environment only.
pub fn load_config_from_env() -> Result<PluginConfig, ConfigError> {
	load_from_sources(vec![Box::new(DefaultsSource), Box::new(EnvSource)])
}

fn load_from_sources(mut sources: Vec<Box<dyn ConfigSource>>) -> Result<PluginConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = PluginConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		merged.merge(source.load()?);
	}

	Ok(finalize(merged))
}

fn finalize(layer: PluginConfigLayer) -> PluginConfig {
	let http = layer.http.unwrap_or_default().finalize();
	let search = layer.search.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();

	if !search.google_cse.is_configured() {
		warn!("GOOGLE_API_KEY or GOOGLE_SEARCH_ENGINE_ID not set; searches will fail");
	}

	info!(
		host = %http.host,
		port = http.port,
		google_cse_configured = search.google_cse.is_configured(),
		log_format = ?logging.format,
		"Plugin configuration loaded"
	);

	PluginConfig {
		http,
		search,
		logging,
	}
}
