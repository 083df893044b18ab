// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP client construction for qsearch.
//!
//! Every outbound client carries the same `User-Agent` so upstream request
//! logs can be attributed to a plugin build.

mod client;

pub use client::{builder, new_client, platform, user_agent};
