// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Google Custom Search Engine client for qsearch.
//!
//! Two halves:
//! - [`CseClient::search`] turns a query plus [`SearchOptions`] into one GET
//!   against the Custom Search JSON API and hands back the raw JSON body
//! - [`normalize`] reshapes that body into [`SearchResultItem`]s without any
//!   I/O

pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::{query_pairs, CseClient, DEFAULT_BASE_URL};
pub use error::{CseError, CseErrorKind};
pub use normalize::{normalize, SearchResultItem, PROVIDER_SOURCE};
pub use types::{CseConfig, CseResponse, SearchOptions};
