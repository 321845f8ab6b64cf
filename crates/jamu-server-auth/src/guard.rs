// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Route gating by path prefix and session role.
//!
//! Each request is evaluated exactly once into one of three outcomes:
//!
//! | Path            | No session       | Session, not privileged | Privileged |
//! |-----------------|------------------|-------------------------|------------|
//! | VIP prefix      | `RedirectLogin`  | `Allow`                 | `Allow`    |
//! | admin prefix    | `RedirectLogin`  | `RedirectHome`          | `Allow`    |
//! | anything else   | `Allow`          | `Allow`                 | `Allow`    |
//!
//! Prefixes are plain, case-sensitive `starts_with` tests, so nested paths
//! are gated too.

use serde::Serialize;
use url::form_urlencoded;

use crate::roles::PRIVILEGED_ROLES;
use crate::token::SessionToken;

/// Coarse classification of a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteClass {
	Public,
	VipGated,
	AdminGated,
}

/// Decision for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
	Allow,
	/// Send the visitor to the login page; `callback_url` is the original
	/// path and query to return to.
	RedirectLogin { callback_url: String },
	RedirectHome,
}

/// Read-only gating configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardRules {
	pub vip_prefix: String,
	pub admin_prefix: String,
	pub login_path: String,
	pub home_path: String,
	pub callback_param: String,
	/// Lowercase role names that unlock admin paths.
	pub privileged_roles: Vec<String>,
	/// Paths the guard never looks at (auth API, static assets, ...).
	pub excluded_prefixes: Vec<String>,
}

impl Default for GuardRules {
	fn default() -> Self {
		Self {
			vip_prefix: "/vip".to_string(),
			admin_prefix: "/admin".to_string(),
			login_path: "/auth/login".to_string(),
			home_path: "/".to_string(),
			callback_param: "callbackUrl".to_string(),
			privileged_roles: PRIVILEGED_ROLES.iter().map(|r| r.to_string()).collect(),
			excluded_prefixes: [
				"/api/auth",
				"/_next/static",
				"/_next/image",
				"/favicon.ico",
				"/public",
			]
			.iter()
			.map(|p| p.to_string())
			.collect(),
		}
	}
}

impl GuardRules {
	/// Replace the privileged role set; names are lowercased.
	pub fn with_privileged_roles<I, S>(mut self, roles: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.privileged_roles = roles
			.into_iter()
			.map(|r| r.as_ref().to_lowercase())
			.collect();
		self
	}

	/// True if the guard should not run for this path at all.
	pub fn is_excluded(&self, path: &str) -> bool {
		self.excluded_prefixes
			.iter()
			.any(|prefix| path.starts_with(prefix.as_str()))
	}

	fn is_vip(&self, path: &str) -> bool {
		path.starts_with(self.vip_prefix.as_str())
	}

	fn is_admin(&self, path: &str) -> bool {
		path.starts_with(self.admin_prefix.as_str())
	}

	pub fn classify(&self, path: &str) -> RouteClass {
		if self.is_vip(path) {
			RouteClass::VipGated
		} else if self.is_admin(path) {
			RouteClass::AdminGated
		} else {
			RouteClass::Public
		}
	}

	pub fn is_privileged(&self, token: &SessionToken) -> bool {
		token.has_any_role(&self.privileged_roles)
	}

	/// Decide the outcome for `path` (and its raw `query`, without `?`).
	pub fn evaluate(
		&self,
		path: &str,
		query: Option<&str>,
		token: Option<&SessionToken>,
	) -> GuardOutcome {
		if self.is_vip(path) && token.is_none() {
			return GuardOutcome::RedirectLogin {
				callback_url: callback_url(path, query),
			};
		}

		if self.is_admin(path) {
			let Some(token) = token else {
				return GuardOutcome::RedirectLogin {
					callback_url: callback_url(path, query),
				};
			};
			if !self.is_privileged(token) {
				return GuardOutcome::RedirectHome;
			}
		}

		GuardOutcome::Allow
	}

	/// Location for a login redirect.
	///
	/// The original query parameters are carried over and the callback
	/// parameter is set, replacing any value already present.
	pub fn login_location(&self, query: Option<&str>, callback_url: &str) -> String {
		let mut serializer = form_urlencoded::Serializer::new(String::new());
		let mut callback_written = false;

		for (key, value) in form_urlencoded::parse(query.unwrap_or("").as_bytes()) {
			if key == self.callback_param.as_str() {
				if !callback_written {
					serializer.append_pair(&key, callback_url);
					callback_written = true;
				}
				continue;
			}
			serializer.append_pair(&key, &value);
		}
		if !callback_written {
			serializer.append_pair(&self.callback_param, callback_url);
		}

		format!("{}?{}", self.login_path, serializer.finish())
	}
}

/// The original destination: path plus `?query` when a query is present.
pub fn callback_url(path: &str, query: Option<&str>) -> String {
	match query {
		Some(q) if !q.is_empty() => format!("{path}?{q}"),
		_ => path.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn rules() -> GuardRules {
		GuardRules::default()
	}

	fn login(callback: &str) -> GuardOutcome {
		GuardOutcome::RedirectLogin {
			callback_url: callback.to_string(),
		}
	}

	mod evaluate {
		use super::*;

		#[test]
		fn vip_without_session_redirects_to_login() {
			assert_eq!(
				rules().evaluate("/vip/anything", None, None),
				login("/vip/anything")
			);
		}

		#[test]
		fn vip_callback_keeps_query() {
			assert_eq!(
				rules().evaluate("/vip", Some("tab=deals"), None),
				login("/vip?tab=deals")
			);
		}

		#[test]
		fn vip_with_any_session_is_allowed() {
			let token = SessionToken::with_roles(["member"]);
			assert_eq!(rules().evaluate("/vip", None, Some(&token)), GuardOutcome::Allow);

			let no_roles = SessionToken::with_roles(Vec::<String>::new());
			assert_eq!(
				rules().evaluate("/vip/lounge", None, Some(&no_roles)),
				GuardOutcome::Allow
			);
		}

		#[test]
		fn admin_without_session_redirects_to_login() {
			assert_eq!(rules().evaluate("/admin", None, None), login("/admin"));
		}

		#[test]
		fn admin_with_unprivileged_roles_goes_home() {
			let token = SessionToken::with_roles(["editor"]);
			assert_eq!(
				rules().evaluate("/admin", None, Some(&token)),
				GuardOutcome::RedirectHome
			);
		}

		#[test]
		fn admin_with_admin_role_is_allowed_case_insensitively() {
			let token = SessionToken::with_roles(["Admin"]);
			assert_eq!(
				rules().evaluate("/admin/users", None, Some(&token)),
				GuardOutcome::Allow
			);

			let token = SessionToken::with_roles(["editor", "SUPERADMIN"]);
			assert_eq!(
				rules().evaluate("/admin/users", None, Some(&token)),
				GuardOutcome::Allow
			);
		}

		#[test]
		fn empty_role_is_not_privileged() {
			let token = SessionToken::with_roles([""]);
			assert_eq!(
				rules().evaluate("/admin", None, Some(&token)),
				GuardOutcome::RedirectHome
			);
		}

		#[test]
		fn public_paths_are_allowed() {
			assert_eq!(rules().evaluate("/", None, None), GuardOutcome::Allow);
			assert_eq!(rules().evaluate("/menu/3", None, None), GuardOutcome::Allow);
		}

		#[test]
		fn prefix_matching_is_not_segment_aware() {
			assert_eq!(rules().evaluate("/vipers", None, None), login("/vipers"));
			assert_eq!(
				rules().evaluate("/administrator", None, None),
				login("/administrator")
			);
		}

		#[test]
		fn prefix_matching_is_case_sensitive() {
			assert_eq!(rules().evaluate("/VIP", None, None), GuardOutcome::Allow);
			assert_eq!(rules().evaluate("/Admin", None, None), GuardOutcome::Allow);
		}

		#[test]
		fn custom_privileged_roles() {
			let rules = rules().with_privileged_roles(["Owner"]);
			let owner = SessionToken::with_roles(["owner"]);
			let admin = SessionToken::with_roles(["admin"]);

			assert_eq!(rules.evaluate("/admin", None, Some(&owner)), GuardOutcome::Allow);
			assert_eq!(
				rules.evaluate("/admin", None, Some(&admin)),
				GuardOutcome::RedirectHome
			);
		}
	}

	mod classify {
		use super::*;

		#[test]
		fn classifies_by_prefix() {
			assert_eq!(rules().classify("/vip/x"), RouteClass::VipGated);
			assert_eq!(rules().classify("/admin"), RouteClass::AdminGated);
			assert_eq!(rules().classify("/profile"), RouteClass::Public);
		}

		#[test]
		fn exclusions_cover_assets_and_auth_api() {
			let rules = rules();
			assert!(rules.is_excluded("/api/auth/session"));
			assert!(rules.is_excluded("/_next/static/chunks/app.js"));
			assert!(rules.is_excluded("/_next/image"));
			assert!(rules.is_excluded("/favicon.ico"));
			assert!(rules.is_excluded("/public/logo.png"));
			assert!(!rules.is_excluded("/api/navigation"));
			assert!(!rules.is_excluded("/vip"));
		}
	}

	mod login_location {
		use super::*;

		#[test]
		fn encodes_callback() {
			assert_eq!(
				rules().login_location(None, "/vip/anything"),
				"/auth/login?callbackUrl=%2Fvip%2Fanything"
			);
		}

		#[test]
		fn keeps_existing_query_and_appends_callback() {
			assert_eq!(
				rules().login_location(Some("ref=home"), "/vip?ref=home"),
				"/auth/login?ref=home&callbackUrl=%2Fvip%3Fref%3Dhome"
			);
		}

		#[test]
		fn replaces_existing_callback_in_place() {
			assert_eq!(
				rules().login_location(Some("callbackUrl=%2Fevil&a=1&callbackUrl=x"), "/vip"),
				"/auth/login?callbackUrl=%2Fvip&a=1"
			);
		}
	}

	#[test]
	fn callback_url_omits_empty_query() {
		assert_eq!(callback_url("/vip", None), "/vip");
		assert_eq!(callback_url("/vip", Some("")), "/vip");
		assert_eq!(callback_url("/vip", Some("a=1")), "/vip?a=1");
	}

	proptest! {
		#[test]
		fn public_paths_always_allowed(path in "/[a-uw-z][a-z/]{0,20}") {
			prop_assume!(!path.starts_with("/admin"));
			prop_assert_eq!(rules().evaluate(&path, None, None), GuardOutcome::Allow);
		}

		#[test]
		fn admin_paths_never_allow_unprivileged(suffix in "[a-z/]{0,20}", role in "[a-z]{1,10}") {
			prop_assume!(role != "admin" && role != "superadmin");
			let path = format!("/admin{suffix}");
			let token = SessionToken::with_roles([role]);
			prop_assert_eq!(
				rules().evaluate(&path, None, Some(&token)),
				GuardOutcome::RedirectHome
			);
		}
	}
}
