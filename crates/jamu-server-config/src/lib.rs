// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Centralized configuration management for the Jamu edge server.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`JAMU_SERVER_*`)
//!
//! # Usage
//!
//! ```ignore
//! use jamu_server_config::load_config;
//!
//! let config = load_config()?;
//! println!("Server listening on {}:{}", config.http.host, config.http.port);
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use jamu_common_config::load_first_secret_env;
use jamu_common_i18n::is_supported;
use tracing::{debug, info, warn};

/// Environment variables consulted, in order, for the session signing secret.
pub const AUTH_SECRET_VARS: &[&str] = &["JAMU_SERVER_AUTH_SECRET", "NEXTAUTH_SECRET"];

/// Fully resolved server configuration.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
	pub http: HttpConfig,
	pub auth: AuthConfig,
	pub i18n: I18nConfig,
	pub logging: LoggingConfig,
}

impl ServerConfig {
	/// Get the socket address string for binding.
	pub fn socket_addr(&self) -> String {
		format!("{}:{}", self.http.host, self.http.port)
	}
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`JAMU_SERVER_*`)
/// 2. Config file (`/etc/jamu/server.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration from environment only (for testing or simple deployments).
pub fn load_config_from_env() -> Result<ServerConfig, ConfigError> {
	let mut merged = ServerConfigLayer::default();
	merged.merge(EnvSource.load()?);
	finalize(merged)
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

fn load_from_sources(mut sources: Vec<Box<dyn ConfigSource>>) -> Result<ServerConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ServerConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: ServerConfigLayer) -> Result<ServerConfig, ConfigError> {
	let secret = load_first_secret_env(AUTH_SECRET_VARS)?;

	let http = layer.http.unwrap_or_default().finalize();
	let auth = layer.auth.unwrap_or_default().finalize(secret);
	let i18n = layer.i18n.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();

	validate_config(&auth, &i18n)?;

	if auth.secret.is_none() {
		warn!("no session signing secret configured; every request will be treated as anonymous");
	}

	info!(
		host = %http.host,
		port = http.port,
		vip_prefix = %auth.vip_prefix,
		admin_prefix = %auth.admin_prefix,
		default_locale = %i18n.default_locale,
		token_format = auth.token_format.as_str(),
		secret_configured = auth.secret.is_some(),
		"Server configuration loaded"
	);

	Ok(ServerConfig {
		http,
		auth,
		i18n,
		logging,
	})
}

fn is_header_safe_path(path: &str) -> bool {
	path.bytes().all(|b| (0x21..=0x7e).contains(&b))
}

/// Validate cross-field configuration rules.
fn validate_config(auth: &AuthConfig, i18n: &I18nConfig) -> Result<(), ConfigError> {
	if !is_supported(&i18n.default_locale) {
		return Err(ConfigError::InvalidValue {
			key: "i18n.default_locale".to_string(),
			message: format!("unsupported locale '{}'", i18n.default_locale),
		});
	}

	for (key, path) in [
		("auth.vip_prefix", &auth.vip_prefix),
		("auth.admin_prefix", &auth.admin_prefix),
		("auth.login_path", &auth.login_path),
		("auth.home_path", &auth.home_path),
	] {
		if !path.starts_with('/') {
			return Err(ConfigError::InvalidValue {
				key: key.to_string(),
				message: format!("path '{path}' must start with '/'"),
			});
		}
		// Redirect targets go into a Location header verbatim.
		if !is_header_safe_path(path) {
			return Err(ConfigError::InvalidValue {
				key: key.to_string(),
				message: format!("path {path:?} must contain only visible ASCII characters"),
			});
		}
	}

	if auth.callback_param.is_empty() {
		return Err(ConfigError::Validation(
			"auth.callback_param must not be empty".to_string(),
		));
	}

	if auth.cookie_names.is_empty() {
		return Err(ConfigError::Validation(
			"auth.cookie_names must name at least one session cookie".to_string(),
		));
	}

	Ok(())
}
