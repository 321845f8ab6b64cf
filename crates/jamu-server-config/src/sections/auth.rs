// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Route guard and session configuration section.
//!
//! The signing secret is deliberately absent from the TOML layer; it is only
//! read from the environment (see [`crate::sources`]).

use jamu_common_config::SecretString;
use serde::Deserialize;

/// How session tokens are encoded by the authentication collaborator.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TokenFormat {
	/// NextAuth.js v4 encrypted JWT (`dir` + `A256GCM`).
	#[default]
	Nextauth,
	/// Plain JWT signed with HS256.
	Hs256,
}

impl TokenFormat {
	pub fn as_str(self) -> &'static str {
		match self {
			TokenFormat::Nextauth => "nextauth",
			TokenFormat::Hs256 => "hs256",
		}
	}
}

impl std::str::FromStr for TokenFormat {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"nextauth" => Ok(TokenFormat::Nextauth),
			"hs256" => Ok(TokenFormat::Hs256),
			other => Err(format!("unknown token format '{other}', expected nextauth or hs256")),
		}
	}
}

fn strings(items: &[&str]) -> Vec<String> {
	items.iter().map(|s| s.to_string()).collect()
}

/// Route guard configuration (runtime, fully resolved).
#[derive(Debug, Clone, PartialEq)]
pub struct AuthConfig {
	pub vip_prefix: String,
	pub admin_prefix: String,
	pub login_path: String,
	pub home_path: String,
	pub callback_param: String,
	pub privileged_roles: Vec<String>,
	/// Session cookie names, checked in order.
	pub cookie_names: Vec<String>,
	pub excluded_prefixes: Vec<String>,
	/// Clock skew tolerated on token expiry.
	pub token_leeway_secs: u64,
	pub token_format: TokenFormat,
	pub secret: Option<SecretString>,
}

impl Default for AuthConfig {
	fn default() -> Self {
		AuthConfigLayer::default().finalize(None)
	}
}

/// Auth configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AuthConfigLayer {
	#[serde(default)]
	pub vip_prefix: Option<String>,
	#[serde(default)]
	pub admin_prefix: Option<String>,
	#[serde(default)]
	pub login_path: Option<String>,
	#[serde(default)]
	pub home_path: Option<String>,
	#[serde(default)]
	pub callback_param: Option<String>,
	#[serde(default)]
	pub privileged_roles: Option<Vec<String>>,
	#[serde(default)]
	pub cookie_names: Option<Vec<String>>,
	#[serde(default)]
	pub excluded_prefixes: Option<Vec<String>>,
	#[serde(default)]
	pub token_leeway_secs: Option<u64>,
	#[serde(default)]
	pub token_format: Option<TokenFormat>,
}

impl AuthConfigLayer {
	pub fn merge(&mut self, other: AuthConfigLayer) {
		macro_rules! take {
			($($field:ident),*) => {
				$(if other.$field.is_some() {
					self.$field = other.$field;
				})*
			};
		}
		take!(
			vip_prefix,
			admin_prefix,
			login_path,
			home_path,
			callback_param,
			privileged_roles,
			cookie_names,
			excluded_prefixes,
			token_leeway_secs,
			token_format
		);
	}

	pub fn finalize(self, secret: Option<SecretString>) -> AuthConfig {
		AuthConfig {
			vip_prefix: self.vip_prefix.unwrap_or_else(|| "/vip".to_string()),
			admin_prefix: self.admin_prefix.unwrap_or_else(|| "/admin".to_string()),
			login_path: self.login_path.unwrap_or_else(|| "/auth/login".to_string()),
			home_path: self.home_path.unwrap_or_else(|| "/".to_string()),
			callback_param: self
				.callback_param
				.unwrap_or_else(|| "callbackUrl".to_string()),
			privileged_roles: self
				.privileged_roles
				.unwrap_or_else(|| strings(&["admin", "superadmin"]))
				.into_iter()
				.map(|r| r.to_lowercase())
				.collect(),
			cookie_names: self.cookie_names.unwrap_or_else(|| {
				strings(&[
					"__Secure-next-auth.session-token",
					"next-auth.session-token",
				])
			}),
			excluded_prefixes: self.excluded_prefixes.unwrap_or_else(|| {
				strings(&[
					"/api/auth",
					"/_next/static",
					"/_next/image",
					"/favicon.ico",
					"/public",
				])
			}),
			token_leeway_secs: self.token_leeway_secs.unwrap_or(60),
			token_format: self.token_format.unwrap_or_default(),
			secret,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use jamu_common_config::Secret;

	#[test]
	fn defaults_match_storefront_routes() {
		let config = AuthConfig::default();
		assert_eq!(config.vip_prefix, "/vip");
		assert_eq!(config.admin_prefix, "/admin");
		assert_eq!(config.login_path, "/auth/login");
		assert_eq!(config.callback_param, "callbackUrl");
		assert_eq!(config.privileged_roles, vec!["admin", "superadmin"]);
		assert_eq!(config.cookie_names.len(), 2);
		assert_eq!(config.excluded_prefixes.len(), 5);
		assert_eq!(config.token_format, TokenFormat::Nextauth);
		assert!(config.secret.is_none());
	}

	#[test]
	fn privileged_roles_are_lowercased() {
		let layer = AuthConfigLayer {
			privileged_roles: Some(vec!["Owner".to_string()]),
			..Default::default()
		};
		assert_eq!(layer.finalize(None).privileged_roles, vec!["owner"]);
	}

	#[test]
	fn merge_keeps_unset_fields() {
		let mut base = AuthConfigLayer {
			vip_prefix: Some("/members".to_string()),
			token_leeway_secs: Some(5),
			..Default::default()
		};
		base.merge(AuthConfigLayer {
			token_leeway_secs: Some(30),
			..Default::default()
		});
		assert_eq!(base.vip_prefix.as_deref(), Some("/members"));
		assert_eq!(base.token_leeway_secs, Some(30));
	}

	#[test]
	fn secret_is_redacted_in_debug() {
		let config = AuthConfigLayer::default().finalize(Some(Secret::new("s3cr3t".to_string())));
		assert!(!format!("{config:?}").contains("s3cr3t"));
	}

	#[test]
	fn deserialize_lists_from_toml() {
		let layer: AuthConfigLayer = toml::from_str(
			r#"
			privileged_roles = ["admin"]
			cookie_names = ["session"]
			"#,
		)
		.unwrap();
		let config = layer.finalize(None);
		assert_eq!(config.privileged_roles, vec!["admin"]);
		assert_eq!(config.cookie_names, vec!["session"]);
	}

	#[test]
	fn token_format_from_toml_and_env_strings() {
		let layer: AuthConfigLayer = toml::from_str(r#"token_format = "hs256""#).unwrap();
		assert_eq!(layer.finalize(None).token_format, TokenFormat::Hs256);

		assert_eq!("NextAuth".parse::<TokenFormat>(), Ok(TokenFormat::Nextauth));
		assert!("rs256".parse::<TokenFormat>().is_err());
		assert!(toml::from_str::<AuthConfigLayer>(r#"token_format = "jwe""#).is_err());
	}
}
