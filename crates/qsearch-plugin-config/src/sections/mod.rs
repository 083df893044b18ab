// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod http;
mod logging;
mod search;

pub use http::{HttpConfig, HttpConfigLayer};
pub use logging::{LogFormat, LoggingConfig, LoggingConfigLayer};
pub use search::{GoogleCseConfig, GoogleCseConfigLayer, SearchConfig, SearchConfigLayer};
