// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use axum::{extract::State, Extension, Json};
use jamu_server_auth::{NormalizedRole, SessionContext};
use serde::Serialize;

use crate::api::AppState;

#[derive(Debug, Serialize)]
pub struct SessionResponse {
	pub authenticated: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub subject: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	pub roles: Vec<NormalizedRole>,
	pub is_admin: bool,
}

/// Describe the session the route guard resolved for this request.
pub async fn get_session(
	State(state): State<AppState>,
	Extension(session): Extension<SessionContext>,
) -> Json<SessionResponse> {
	let response = match session.token() {
		Some(token) => SessionResponse {
			authenticated: true,
			subject: token.subject.clone(),
			name: token.name.clone(),
			roles: token.roles.clone(),
			is_admin: state.guard.is_privileged(token),
		},
		None => SessionResponse {
			authenticated: false,
			subject: None,
			name: None,
			roles: Vec::new(),
			is_admin: false,
		},
	};
	Json(response)
}
