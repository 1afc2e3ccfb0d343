// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! NextStep site server binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use nextstep_server::{create_app_state, create_router};
use tower_http::{
	cors::{Any, CorsLayer},
	trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// NextStep server - localized study-abroad site.
#[derive(Parser, Debug)]
#[command(name = "nextstep-server", about = "NextStep localized site server", version)]
struct Args {
	/// Path to a TOML config file (defaults to /etc/nextstep/server.toml)
	#[arg(long, env = "NEXTSTEP_SERVER_CONFIG")]
	config: Option<PathBuf>,

	/// Subcommands for nextstep-server (e.g., `version`)
	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Show version information
	Version,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	if let Some(Command::Version) = args.command {
		println!("nextstep-server version: {}", env!("CARGO_PKG_VERSION"));
		return Ok(());
	}

	// Load .env file if present
	dotenvy::dotenv().ok();

	let config = match &args.config {
		Some(path) => nextstep_server_config::load_config_with_file(path)?,
		None => nextstep_server_config::load_config()?,
	};

	tracing_subscriber::registry()
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| config.logging.level.clone().into()),
		)
		.with(tracing_subscriber::fmt::layer())
		.init();

	tracing::info!(
		host = %config.http.host,
		port = config.http.port,
		default_locale = %config.i18n.default_locale,
		"starting nextstep-server"
	);

	let state = create_app_state(&config)?;
	tracing::info!(
		source = state.dictionaries.source_name(),
		cached = state.dictionaries.is_cached(),
		assets = %state.assets_dir.display(),
		"dictionary loader ready"
	);

	let app = create_router(state)
		.layer(TraceLayer::new_for_http())
		.layer(
			CorsLayer::new()
				.allow_origin(Any)
				.allow_methods(Any)
				.allow_headers(Any),
		);

	let addr = config.socket_addr();
	tracing::info!("listening on {}", addr);

	let listener = tokio::net::TcpListener::bind(&addr).await?;

	tokio::select! {
		result = axum::serve(listener, app) => {
			if let Err(e) = result {
				tracing::error!(error = %e, "Server error");
			}
		}
		_ = tokio::signal::ctrl_c() => {
			tracing::info!("Received shutdown signal");
		}
	}

	tracing::info!("Server shutdown complete");
	Ok(())
}
