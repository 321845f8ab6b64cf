// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Application state and router construction.

use std::sync::Arc;

use axum::{middleware::from_fn_with_state, routing::get, Router};
use jamu_server_auth::{GuardRules, JwtSessionDecoder, NextAuthSessionDecoder, SessionDecoder};
use jamu_server_config::{AuthConfig, I18nConfig, ServerConfig, TokenFormat};
use tower_http::trace::TraceLayer;

use crate::{guard_middleware::route_guard_layer, outlets::OutletDirectory, routes};

/// Shared, read-only state for every request.
#[derive(Clone)]
pub struct AppState {
	pub guard: Arc<GuardRules>,
	pub decoder: Arc<dyn SessionDecoder>,
	/// Session cookie names, checked in order.
	pub cookie_names: Arc<[String]>,
	pub i18n: Arc<I18nConfig>,
	pub outlets: Arc<OutletDirectory>,
}

impl AppState {
	pub fn new(
		guard: GuardRules,
		decoder: Arc<dyn SessionDecoder>,
		cookie_names: Vec<String>,
		i18n: I18nConfig,
	) -> Self {
		Self {
			guard: Arc::new(guard),
			decoder,
			cookie_names: cookie_names.into(),
			i18n: Arc::new(i18n),
			outlets: Arc::new(OutletDirectory::seeded()),
		}
	}

	/// Replace the seeded outlet directory.
	pub fn with_outlets(mut self, outlets: OutletDirectory) -> Self {
		self.outlets = Arc::new(outlets);
		self
	}

	/// Build state from resolved configuration.
	pub fn from_config(config: &ServerConfig) -> Self {
		Self::new(
			guard_rules(&config.auth),
			session_decoder(&config.auth),
			config.auth.cookie_names.clone(),
			config.i18n.clone(),
		)
	}
}

/// Pick the session decoder matching the configured token format.
pub fn session_decoder(auth: &AuthConfig) -> Arc<dyn SessionDecoder> {
	match auth.token_format {
		TokenFormat::Nextauth => Arc::new(
			NextAuthSessionDecoder::new(auth.secret.clone()).with_leeway(auth.token_leeway_secs),
		),
		TokenFormat::Hs256 => Arc::new(
			JwtSessionDecoder::new(auth.secret.clone()).with_leeway(auth.token_leeway_secs),
		),
	}
}

/// Translate the auth config section into guard rules.
pub fn guard_rules(auth: &AuthConfig) -> GuardRules {
	GuardRules {
		vip_prefix: auth.vip_prefix.clone(),
		admin_prefix: auth.admin_prefix.clone(),
		login_path: auth.login_path.clone(),
		home_path: auth.home_path.clone(),
		callback_param: auth.callback_param.clone(),
		privileged_roles: Vec::new(),
		excluded_prefixes: auth.excluded_prefixes.clone(),
	}
	.with_privileged_roles(&auth.privileged_roles)
}

pub fn create_router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(routes::health::health_check))
		.route("/api/locales", get(routes::i18n::list_locales))
		.route("/api/locale", get(routes::i18n::get_locale))
		.route("/api/greeting", get(routes::i18n::get_greeting))
		.route("/api/widgets/labels", get(routes::i18n::get_widget_labels))
		.route("/api/navigation", get(routes::navigation::get_navigation))
		.route("/api/outlets", get(routes::outlets::list_outlets))
		.route("/api/outlets/{id}", get(routes::outlets::get_outlet))
		.route("/api/session", get(routes::session::get_session))
		.fallback(routes::not_found)
		.layer(from_fn_with_state(state.clone(), route_guard_layer))
		.layer(TraceLayer::new_for_http())
		.with_state(state)
}
