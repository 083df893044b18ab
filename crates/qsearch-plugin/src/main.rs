// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! qsearch plugin binary.

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use qsearch_plugin::{cse_config, create_router, SearchHandler};
use qsearch_plugin_config::{LogFormat, LoggingConfig, PluginConfig};
use qsearch_search_google_cse::CseClient;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// qsearch plugin - Google Custom Search behind a trigger-payload handler.
#[derive(Parser, Debug)]
#[command(name = "qsearch-plugin", about = "Google search plugin handler", version)]
struct Args {
	/// Path to a TOML config file (defaults to /etc/qsearch/plugin.toml).
	#[arg(long, env = "QSEARCH_CONFIG", global = true)]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Serve the handler over HTTP (default).
	Serve,
	/// Handle a single trigger payload and print the envelope.
	Invoke {
		/// File holding the payload JSON; `-` reads stdin.
		#[arg(long, default_value = "-")]
		event: String,
	},
	/// Show version and build information.
	Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	if let Some(Command::Version) = args.command {
		println!("{}", version_info());
		return Ok(());
	}

	dotenvy::dotenv().ok();

	let config = match &args.config {
		Some(path) => qsearch_plugin_config::load_config_with_file(path),
		None => qsearch_plugin_config::load_config(),
	}
	.context("failed to load configuration")?;

	init_tracing(&config.logging);

	if !config.search.google_cse.is_configured() {
		tracing::warn!("GOOGLE_API_KEY or GOOGLE_SEARCH_ENGINE_ID not set; searches will fail");
	}

	let handler = Arc::new(build_handler(&config));

	match args.command.unwrap_or(Command::Serve) {
		Command::Serve => serve(&config, handler).await,
		Command::Invoke { event } => invoke(&event, &handler).await,
		Command::Version => Ok(()),
	}
}

fn build_handler(config: &PluginConfig) -> SearchHandler {
	let client = CseClient::new(cse_config(&config.search.google_cse));
	SearchHandler::new(client)
}

async fn serve(config: &PluginConfig, handler: Arc<SearchHandler>) -> anyhow::Result<()> {
	let addr = config.http.socket_addr();
	let listener = tokio::net::TcpListener::bind(&addr)
		.await
		.with_context(|| format!("failed to bind {addr}"))?;

	tracing::info!(
		addr = %addr,
		search_configured = handler.is_configured(),
		"starting qsearch-plugin"
	);

	axum::serve(listener, create_router(handler))
		.with_graceful_shutdown(shutdown_signal())
		.await
		.context("server error")?;

	tracing::info!("qsearch-plugin stopped");
	Ok(())
}

async fn invoke(source: &str, handler: &SearchHandler) -> anyhow::Result<()> {
	let raw = if source == "-" {
		let mut buf = String::new();
		std::io::stdin()
			.read_to_string(&mut buf)
			.context("failed to read event from stdin")?;
		buf
	} else {
		std::fs::read_to_string(source).with_context(|| format!("failed to read event file {source}"))?
	};

	let event: serde_json::Value =
		serde_json::from_str(&raw).context("event is not valid JSON")?;
	let envelope = handler.handle(&event).await;

	println!("{}", serde_json::to_string_pretty(&envelope)?);
	Ok(())
}

async fn shutdown_signal() {
	if let Err(e) = tokio::signal::ctrl_c().await {
		tracing::error!(error = %e, "failed to listen for shutdown signal");
		std::future::pending::<()>().await;
	}
	tracing::info!("shutdown signal received");
}

fn init_tracing(logging: &LoggingConfig) {
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

	// Logs go to stderr so `invoke` output on stdout stays machine-readable.
	match logging.format {
		LogFormat::Json => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().json().with_writer(std::io::stderr))
				.init();
		}
		LogFormat::Text => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().with_writer(std::io::stderr))
				.init();
		}
	}
}

fn version_info() -> String {
	format!(
		"qsearch-plugin version: {}\nPlatform:               {}\nUser-Agent:             {}",
		env!("CARGO_PKG_VERSION"),
		qsearch_common_http::platform(),
		qsearch_common_http::user_agent(),
	)
}
