// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP host for the handler.
//!
//! `POST /invoke` takes a trigger payload and answers with the envelope as
//! JSON. The HTTP status is always 200; the outcome lives in the envelope's
//! `statusCode`, the same as any other invoker would see.

use std::sync::Arc;

use axum::{
	body::Bytes,
	extract::State,
	http::StatusCode,
	response::IntoResponse,
	routing::{get, post},
	Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::envelope::Envelope;
use crate::handler::SearchHandler;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
	Healthy,
	Degraded,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
	pub status: HealthStatus,
	pub search_configured: bool,
	pub version: &'static str,
}

pub fn create_router(handler: Arc<SearchHandler>) -> Router {
	Router::new()
		.route("/invoke", post(invoke))
		.route("/health", get(health))
		.layer(TraceLayer::new_for_http())
		.with_state(handler)
}

/// POST /invoke - run one search invocation.
async fn invoke(State(handler): State<Arc<SearchHandler>>, body: Bytes) -> Json<Envelope> {
	// A body that is not JSON is handled like a payload without a query.
	let event = serde_json::from_slice::<Value>(&body).unwrap_or_else(|e| {
		warn!(error = %e, "invoke: request body is not JSON");
		Value::Null
	});

	Json(handler.handle(&event).await)
}

/// GET /health - 503 while credentials are missing.
async fn health(State(handler): State<Arc<SearchHandler>>) -> impl IntoResponse {
	let search_configured = handler.is_configured();
	let (status_code, status) = if search_configured {
		(StatusCode::OK, HealthStatus::Healthy)
	} else {
		(StatusCode::SERVICE_UNAVAILABLE, HealthStatus::Degraded)
	};

	(
		status_code,
		Json(HealthResponse {
			status,
			search_configured,
			version: env!("CARGO_PKG_VERSION"),
		}),
	)
}
