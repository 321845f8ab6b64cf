// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Tracing setup.
//!
//! The log level lives in the config, so startup runs in two phases: config
//! loading happens under a temporary subscriber (`RUST_LOG` or `info`), then
//! the global subscriber is installed from the resolved level.

use tracing::Subscriber;
use tracing_subscriber::{
	fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Level used before the config is known, unless `RUST_LOG` says otherwise.
pub const BOOTSTRAP_LEVEL: &str = "info";

fn env_filter_or(level: &str) -> EnvFilter {
	EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Subscriber for the startup phase.
pub fn bootstrap_subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync
where
	W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
	tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer().with_writer(writer))
}

/// Run `f` (normally config loading) with startup logging to stdout.
pub fn with_bootstrap_logging<T>(f: impl FnOnce() -> T) -> T {
	let subscriber = bootstrap_subscriber(env_filter_or(BOOTSTRAP_LEVEL), std::io::stdout);
	tracing::subscriber::with_default(subscriber, f)
}

/// Install the global subscriber; `RUST_LOG` overrides the configured level.
pub fn init_tracing(level: &str) {
	tracing_subscriber::registry()
		.with(env_filter_or(level))
		.with(tracing_subscriber::fmt::layer())
		.init();
}
