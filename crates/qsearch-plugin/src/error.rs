// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Plugin error types and their response policy.

use http::StatusCode;
use qsearch_search_google_cse::{CseError, CseErrorKind};
use thiserror::Error;

use crate::envelope::{MISSING_QUERY_MESSAGE, PROCESSING_ERROR_MESSAGE};

/// Every way a single invocation can fail.
#[derive(Debug, Error)]
pub enum PluginError {
	/// Neither `query` nor `parameters.query` held a usable string.
	#[error("Search query is required")]
	MissingQuery,

	/// The search client failed.
	#[error(transparent)]
	Search(#[from] CseError),

	/// Anything else, including a panic on the search path.
	#[error("Unexpected error: {0}")]
	Unexpected(String),
}

/// Closed set of failure classes. Response shape is decided per kind in
/// [`ErrorKind::policy`] and nowhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	Validation,
	Configuration,
	Upstream,
	Unexpected,
}

/// How a failure kind is turned into an envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponsePolicy {
	pub status: StatusCode,
	pub message: &'static str,
	/// Whether the error description goes into the body's `error` field.
	pub include_error: bool,
	/// Whether the failure is logged at error level (otherwise warn).
	pub log_as_error: bool,
}

impl ErrorKind {
	pub const ALL: [ErrorKind; 4] = [
		ErrorKind::Validation,
		ErrorKind::Configuration,
		ErrorKind::Upstream,
		ErrorKind::Unexpected,
	];

	pub fn policy(self) -> ResponsePolicy {
		match self {
			ErrorKind::Validation => ResponsePolicy {
				status: StatusCode::BAD_REQUEST,
				message: MISSING_QUERY_MESSAGE,
				include_error: false,
				log_as_error: false,
			},
			ErrorKind::Configuration | ErrorKind::Upstream | ErrorKind::Unexpected => {
				ResponsePolicy {
					status: StatusCode::INTERNAL_SERVER_ERROR,
					message: PROCESSING_ERROR_MESSAGE,
					include_error: true,
					log_as_error: true,
				}
			}
		}
	}

	pub fn status_code(self) -> StatusCode {
		self.policy().status
	}
}

impl PluginError {
	pub fn kind(&self) -> ErrorKind {
		match self {
			PluginError::MissingQuery => ErrorKind::Validation,
			PluginError::Search(e) => match e.kind() {
				CseErrorKind::Validation => ErrorKind::Validation,
				CseErrorKind::Configuration => ErrorKind::Configuration,
				CseErrorKind::Upstream => ErrorKind::Upstream,
			},
			PluginError::Unexpected(_) => ErrorKind::Unexpected,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn status_table() {
		assert_eq!(ErrorKind::Validation.status_code(), StatusCode::BAD_REQUEST);
		assert_eq!(
			ErrorKind::Configuration.status_code(),
			StatusCode::INTERNAL_SERVER_ERROR
		);
		assert_eq!(
			ErrorKind::Upstream.status_code(),
			StatusCode::INTERNAL_SERVER_ERROR
		);
		assert_eq!(
			ErrorKind::Unexpected.status_code(),
			StatusCode::INTERNAL_SERVER_ERROR
		);
	}

	#[test]
	fn only_server_side_failures_expose_detail_and_log_as_error() {
		for kind in ErrorKind::ALL {
			let policy = kind.policy();
			let server_side = policy.status.is_server_error();
			assert_eq!(policy.include_error, server_side, "{kind:?}");
			assert_eq!(policy.log_as_error, server_side, "{kind:?}");
		}
	}

	#[test]
	fn kinds_follow_search_errors() {
		assert_eq!(PluginError::MissingQuery.kind(), ErrorKind::Validation);
		assert_eq!(
			PluginError::from(CseError::EmptyQuery).kind(),
			ErrorKind::Validation
		);
		assert_eq!(
			PluginError::from(CseError::NotConfigured).kind(),
			ErrorKind::Configuration
		);
		assert_eq!(
			PluginError::from(CseError::InvalidResponse("eof".into())).kind(),
			ErrorKind::Upstream
		);
		assert_eq!(
			PluginError::Unexpected("boom".into()).kind(),
			ErrorKind::Unexpected
		);
	}

	#[test]
	fn search_errors_display_transparently() {
		let err = PluginError::from(CseError::NotConfigured);
		assert_eq!(
			err.to_string(),
			"Google API key or Search Engine ID not configured"
		);
	}
}
