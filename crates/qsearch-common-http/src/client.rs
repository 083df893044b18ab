// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP client with a consistent User-Agent header.

use reqwest::{Client, ClientBuilder};

/// Creates a client with the standard qsearch User-Agent and no other
/// customisation. Timeouts are left to reqwest and the hosting environment.
pub fn new_client() -> Client {
	builder().build().expect("failed to build HTTP client")
}

/// Client builder pre-populated with the standard User-Agent.
///
/// # Example
/// ```ignore
/// let client = qsearch_common_http::builder()
///     .connect_timeout(Duration::from_secs(5))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// `qsearch/{version}/{platform}`, e.g. `qsearch/0.1.0/linux-x86_64`.
pub fn user_agent() -> String {
	format!("qsearch/{}/{}", env!("CARGO_PKG_VERSION"), platform())
}

/// `{os}-{arch}` of the running binary.
pub fn platform() -> String {
	format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH)
}
