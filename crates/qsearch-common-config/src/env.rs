// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Loading secrets from the process environment.
//!
//! `VAR_FILE` points at a file holding the secret (Docker/Kubernetes secret
//! mounts); `VAR` holds it inline. The file form wins when both are set.

use std::path::PathBuf;
use std::{env, fs};

use thiserror::Error;

use crate::secret::Secret;

#[derive(Debug, Error)]
pub enum SecretEnvError {
	#[error("failed to read secret file at {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("secret file path in {var} is empty")]
	EmptyPath { var: String },
}

/// Load `var` from the environment, honouring the `{var}_FILE` convention.
///
/// Returns `Ok(None)` when neither variable is set or the inline value is
/// empty. One trailing newline is stripped from file contents.
pub fn load_secret_env(var: &str) -> Result<Option<Secret<String>>, SecretEnvError> {
	let file_var = format!("{var}_FILE");

	if let Ok(path) = env::var(&file_var) {
		if path.is_empty() {
			return Err(SecretEnvError::EmptyPath { var: file_var });
		}

		let path = PathBuf::from(path);
		let content = fs::read_to_string(&path).map_err(|source| SecretEnvError::Io {
			path: path.clone(),
			source,
		})?;
		let value = content.strip_suffix('\n').unwrap_or(&content);
		return Ok(Some(Secret::new(value.to_string())));
	}

	Ok(env::var(var)
		.ok()
		.filter(|v| !v.is_empty())
		.map(Secret::new))
}
