// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use axum::{
	extract::{Query, State},
	http::HeaderMap,
	Extension, Json,
};
use jamu_server_auth::SessionContext;
use serde::Deserialize;

use crate::{
	api::AppState,
	navigation::{build_navigation, Navigation},
	routes::i18n::request_locale,
};

#[derive(Debug, Default, Deserialize)]
pub struct NavigationQuery {
	pub locale: Option<String>,
	/// Current page path; defaults to `/`.
	pub path: Option<String>,
}

pub async fn get_navigation(
	State(state): State<AppState>,
	Extension(session): Extension<SessionContext>,
	headers: HeaderMap,
	Query(query): Query<NavigationQuery>,
) -> Json<Navigation> {
	let locale = request_locale(&state, &headers, query.locale.as_deref()).code;
	let path = query.path.as_deref().unwrap_or("/");

	Json(build_navigation(
		locale,
		path,
		session.is_authenticated(),
		&state.guard.login_path,
	))
}
