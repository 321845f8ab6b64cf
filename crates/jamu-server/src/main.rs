// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Jamu storefront edge server binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jamu_server::{create_router, telemetry, AppState};

mod version;

/// Jamu server - route guard and locale API for the storefront.
#[derive(Parser, Debug)]
#[command(name = "jamu-server", about = "Jamu storefront edge server", version)]
struct Args {
	/// Path to the TOML config file (defaults to /etc/jamu/server.toml)
	#[arg(long, env = "JAMU_SERVER_CONFIG")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Show version and build information
	Version,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	if let Some(Command::Version) = args.command {
		println!("{}", version::format_version_info());
		return Ok(());
	}

	dotenvy::dotenv().ok();

	let config = telemetry::with_bootstrap_logging(|| match &args.config {
		Some(path) => jamu_server_config::load_config_with_file(path.clone()),
		None => jamu_server_config::load_config(),
	})?;

	telemetry::init_tracing(&config.logging.level);

	tracing::info!(
		host = %config.http.host,
		port = config.http.port,
		default_locale = %config.i18n.default_locale,
		"starting jamu-server"
	);

	let state = AppState::from_config(&config);
	let app = create_router(state);

	let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
	tracing::info!(addr = %listener.local_addr()?, "listening");

	axum::serve(listener, app)
		.with_graceful_shutdown(shutdown_signal())
		.await?;

	tracing::info!("server stopped");
	Ok(())
}

async fn shutdown_signal() {
	if let Err(e) = tokio::signal::ctrl_c().await {
		tracing::error!(error = %e, "failed to listen for shutdown signal");
	}
	tracing::info!("shutdown signal received");
}
