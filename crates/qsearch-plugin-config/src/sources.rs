// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: built-in defaults, a TOML file, the environment.

use std::path::PathBuf;

use qsearch_common_config::load_secret_env;
use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::PluginConfigLayer;
use crate::sections::{
	GoogleCseConfigLayer, HttpConfigLayer, LogFormat, LoggingConfigLayer, SearchConfigLayer,
};

pub const DEFAULT_CONFIG_PATH: &str = "/etc/qsearch/plugin.toml";

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<PluginConfigLayer, ConfigError>;
}

pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<PluginConfigLayer, ConfigError> {
		Ok(PluginConfigLayer::default())
	}
}

/// TOML file source. A missing file is skipped, not an error.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new(DEFAULT_CONFIG_PATH)
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<PluginConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(PluginConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: PluginConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// The Google credentials keep their conventional names (`GOOGLE_API_KEY`,
/// `GOOGLE_SEARCH_ENGINE_ID`); everything else is `QSEARCH_<FIELD>`.
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<PluginConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(PluginConfigLayer {
			http: Some(load_http_from_env()?),
			search: Some(load_search_from_env()?),
			logging: Some(load_logging_from_env()?),
		})
	}
}

fn env_var(name: &str) -> Option<String> {
	std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_u16(name: &str) -> Result<Option<u16>, ConfigError> {
	match env_var(name) {
		Some(v) => v.parse().map(Some).map_err(|_| ConfigError::InvalidValue {
			key: name.to_string(),
			message: format!("invalid u16 value '{v}'"),
		}),
		None => Ok(None),
	}
}

fn load_http_from_env() -> Result<HttpConfigLayer, ConfigError> {
	Ok(HttpConfigLayer {
		host: env_var("QSEARCH_HOST"),
		port: env_u16("QSEARCH_PORT")?,
	})
}

fn load_search_from_env() -> Result<SearchConfigLayer, ConfigError> {
	Ok(SearchConfigLayer {
		google_cse: Some(GoogleCseConfigLayer {
			api_key: load_secret_env("GOOGLE_API_KEY")?,
			search_engine_id: env_var("GOOGLE_SEARCH_ENGINE_ID"),
			base_url: env_var("QSEARCH_GOOGLE_CSE_BASE_URL"),
		}),
	})
}

fn load_logging_from_env() -> Result<LoggingConfigLayer, ConfigError> {
	let format = env_var("QSEARCH_LOG_FORMAT")
		.map(|v| {
			v.parse::<LogFormat>()
				.map_err(|message| ConfigError::InvalidValue {
					key: "QSEARCH_LOG_FORMAT".to_string(),
					message,
				})
		})
		.transpose()?;

	Ok(LoggingConfigLayer {
		level: env_var("QSEARCH_LOG_LEVEL"),
		format,
	})
}
