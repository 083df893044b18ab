// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the Google Custom Search Engine client.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when searching through the Google CSE API.
#[derive(Debug, Error)]
pub enum CseError {
	/// API key or search engine ID missing. Raised before any request is made.
	#[error("Google API key or Search Engine ID not configured")]
	NotConfigured,

	/// The configured endpoint is not a valid URL.
	#[error("Invalid Google CSE endpoint: {0}")]
	InvalidEndpoint(String),

	/// The query was empty or whitespace.
	#[error("Search query must not be empty")]
	EmptyQuery,

	/// Network-level error during HTTP communication. The request URL has
	/// been stripped because it carries the API key.
	#[error("Google search failed: {0}")]
	Network(#[source] reqwest::Error),

	/// Google returned a non-2xx status.
	#[error("Google search failed: HTTP {status}")]
	Api { status: StatusCode, body: String },

	/// The response body was not JSON.
	#[error("Google search failed: invalid response: {0}")]
	InvalidResponse(String),
}

/// Coarse classification of [`CseError`] used by callers to pick a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CseErrorKind {
	Validation,
	Configuration,
	Upstream,
}

impl CseError {
	pub fn kind(&self) -> CseErrorKind {
		match self {
			CseError::EmptyQuery => CseErrorKind::Validation,
			CseError::NotConfigured | CseError::InvalidEndpoint(_) => CseErrorKind::Configuration,
			CseError::Network(_) | CseError::Api { .. } | CseError::InvalidResponse(_) => {
				CseErrorKind::Upstream
			}
		}
	}

	/// Response body returned by Google, when the failure carried one.
	pub fn upstream_body(&self) -> Option<&str> {
		match self {
			CseError::Api { body, .. } if !body.is_empty() => Some(body),
			_ => None,
		}
	}

	/// HTTP status returned by Google, when the failure carried one.
	pub fn upstream_status(&self) -> Option<StatusCode> {
		match self {
			CseError::Api { status, .. } => Some(*status),
			CseError::Network(e) => e.status(),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn kinds_are_assigned() {
		assert_eq!(CseError::NotConfigured.kind(), CseErrorKind::Configuration);
		assert_eq!(
			CseError::InvalidEndpoint("x".into()).kind(),
			CseErrorKind::Configuration
		);
		assert_eq!(CseError::EmptyQuery.kind(), CseErrorKind::Validation);
		assert_eq!(
			CseError::InvalidResponse("eof".into()).kind(),
			CseErrorKind::Upstream
		);
		assert_eq!(
			CseError::Api {
				status: StatusCode::FORBIDDEN,
				body: String::new(),
			}
			.kind(),
			CseErrorKind::Upstream
		);
	}

	#[test]
	fn api_error_exposes_status_and_body() {
		let err = CseError::Api {
			status: StatusCode::FORBIDDEN,
			body: r#"{"error":{"code":403}}"#.to_string(),
		};
		assert_eq!(err.to_string(), "Google search failed: HTTP 403 Forbidden");
		assert_eq!(err.upstream_status(), Some(StatusCode::FORBIDDEN));
		assert_eq!(err.upstream_body(), Some(r#"{"error":{"code":403}}"#));
	}

	#[test]
	fn empty_body_is_not_reported() {
		let err = CseError::Api {
			status: StatusCode::BAD_GATEWAY,
			body: String::new(),
		};
		assert_eq!(err.upstream_body(), None);
		assert_eq!(CseError::NotConfigured.upstream_body(), None);
	}
}
