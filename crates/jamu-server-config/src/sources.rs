// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: environment variables and TOML files.

use std::path::PathBuf;

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::ServerConfigLayer;
use crate::sections::{
	AuthConfigLayer, HttpConfigLayer, I18nConfigLayer, LoggingConfigLayer, TokenFormat,
};

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ServerConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(ServerConfigLayer::default())
	}
}

/// TOML file configuration source.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new("/etc/jamu/server.toml")
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(ServerConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: ServerConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: JAMU_SERVER_<SECTION>_<FIELD>. List values are comma-separated.
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(ServerConfigLayer {
			http: Some(load_http_from_env()?),
			auth: Some(load_auth_from_env()?),
			i18n: Some(load_i18n_from_env()),
			logging: Some(load_logging_from_env()),
		})
	}
}

fn env_var(name: &str) -> Option<String> {
	std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_list(name: &str) -> Option<Vec<String>> {
	env_var(name).map(|s| {
		s.split(',')
			.map(|s| s.trim().to_string())
			.filter(|s| !s.is_empty())
			.collect()
	})
}

fn env_u16(name: &str) -> Result<Option<u16>, ConfigError> {
	match env_var(name) {
		Some(v) => v.parse().map(Some).map_err(|_| ConfigError::InvalidValue {
			key: name.to_string(),
			message: format!("invalid u16 value '{v}'"),
		}),
		None => Ok(None),
	}
}

fn env_u64(name: &str) -> Result<Option<u64>, ConfigError> {
	match env_var(name) {
		Some(v) => v.parse().map(Some).map_err(|_| ConfigError::InvalidValue {
			key: name.to_string(),
			message: format!("invalid u64 value '{v}'"),
		}),
		None => Ok(None),
	}
}

fn env_token_format(name: &str) -> Result<Option<TokenFormat>, ConfigError> {
	env_var(name)
		.map(|v| {
			v.parse().map_err(|message| ConfigError::InvalidValue {
				key: name.to_string(),
				message,
			})
		})
		.transpose()
}

fn load_http_from_env() -> Result<HttpConfigLayer, ConfigError> {
	Ok(HttpConfigLayer {
		host: env_var("JAMU_SERVER_HTTP_HOST"),
		port: env_u16("JAMU_SERVER_HTTP_PORT")?,
	})
}

fn load_auth_from_env() -> Result<AuthConfigLayer, ConfigError> {
	Ok(AuthConfigLayer {
		vip_prefix: env_var("JAMU_SERVER_AUTH_VIP_PREFIX"),
		admin_prefix: env_var("JAMU_SERVER_AUTH_ADMIN_PREFIX"),
		login_path: env_var("JAMU_SERVER_AUTH_LOGIN_PATH"),
		home_path: env_var("JAMU_SERVER_AUTH_HOME_PATH"),
		callback_param: env_var("JAMU_SERVER_AUTH_CALLBACK_PARAM"),
		privileged_roles: env_list("JAMU_SERVER_AUTH_PRIVILEGED_ROLES"),
		cookie_names: env_list("JAMU_SERVER_AUTH_COOKIE_NAMES"),
		excluded_prefixes: env_list("JAMU_SERVER_AUTH_EXCLUDED_PREFIXES"),
		token_leeway_secs: env_u64("JAMU_SERVER_AUTH_TOKEN_LEEWAY_SECS")?,
		token_format: env_token_format("JAMU_SERVER_AUTH_TOKEN_FORMAT")?,
	})
}

fn load_i18n_from_env() -> I18nConfigLayer {
	I18nConfigLayer {
		default_locale: env_var("JAMU_SERVER_I18N_DEFAULT_LOCALE"),
		locale_cookie: env_var("JAMU_SERVER_I18N_LOCALE_COOKIE"),
	}
}

fn load_logging_from_env() -> LoggingConfigLayer {
	LoggingConfigLayer {
		level: env_var("JAMU_SERVER_LOGGING_LEVEL"),
	}
}
