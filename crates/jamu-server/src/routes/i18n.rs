// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale metadata and label catalog endpoints.

use axum::{
	extract::{rejection::QueryRejection, Query, State},
	http::HeaderMap,
	Json,
};
use chrono::Timelike;
use jamu_common_i18n::{
	available_locales, greeting, resolve_locale_with_default, widget_labels, DayPart, Locale,
	LocaleInfo, ResolvedLocale, WidgetLabels,
};
use jamu_server_auth::extract_session_cookie_with_name;
use serde::{Deserialize, Serialize};

use crate::{api::AppState, error::ServerError};

#[derive(Debug, Default, Deserialize)]
pub struct LocaleQuery {
	pub locale: Option<String>,
}

/// Pick the request locale: `locale` query parameter, then the locale
/// cookie, then the configured default. An empty parameter counts as absent.
pub(crate) fn request_locale(
	state: &AppState,
	headers: &HeaderMap,
	requested: Option<&str>,
) -> ResolvedLocale {
	let cookie = extract_session_cookie_with_name(headers, &state.i18n.locale_cookie);
	let requested = requested
		.filter(|code| !code.is_empty())
		.or(cookie.as_deref());
	resolve_locale_with_default(requested, &state.i18n.default_locale)
}

#[derive(Debug, Serialize)]
pub struct LocalesResponse {
	pub default_locale: String,
	pub locales: &'static [LocaleInfo],
}

pub async fn list_locales(State(state): State<AppState>) -> Json<LocalesResponse> {
	Json(LocalesResponse {
		default_locale: state.i18n.default_locale.clone(),
		locales: available_locales(),
	})
}

#[derive(Debug, Serialize)]
pub struct LocaleResponse {
	pub code: Locale,
	pub dir: &'static str,
	pub is_right_to_left: bool,
	pub name: &'static str,
	pub native_name: &'static str,
}

impl From<ResolvedLocale> for LocaleResponse {
	fn from(resolved: ResolvedLocale) -> Self {
		let info = resolved.code.info();
		Self {
			code: resolved.code,
			dir: resolved.direction().as_html_dir(),
			is_right_to_left: resolved.is_right_to_left,
			name: info.name,
			native_name: info.native_name,
		}
	}
}

pub async fn get_locale(
	State(state): State<AppState>,
	headers: HeaderMap,
	Query(query): Query<LocaleQuery>,
) -> Json<LocaleResponse> {
	let resolved = request_locale(&state, &headers, query.locale.as_deref());
	Json(resolved.into())
}

#[derive(Debug, Default, Deserialize)]
pub struct GreetingQuery {
	pub locale: Option<String>,
	/// 0-23; the server's local hour when absent.
	pub hour: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct GreetingResponse {
	pub locale: Locale,
	pub hour: u32,
	pub day_part: DayPart,
	pub greeting: &'static str,
}

pub async fn get_greeting(
	State(state): State<AppState>,
	headers: HeaderMap,
	query: Result<Query<GreetingQuery>, QueryRejection>,
) -> Result<Json<GreetingResponse>, ServerError> {
	let Query(query) = query?;
	let hour = query.hour.unwrap_or_else(|| chrono::Local::now().hour());
	if hour > 23 {
		return Err(ServerError::BadRequest(format!(
			"hour must be between 0 and 23, got {hour}"
		)));
	}

	let locale = request_locale(&state, &headers, query.locale.as_deref()).code;
	Ok(Json(GreetingResponse {
		locale,
		hour,
		day_part: DayPart::from_hour(hour),
		greeting: greeting(locale, hour),
	}))
}

#[derive(Debug, Serialize)]
pub struct WidgetLabelsResponse {
	pub locale: Locale,
	pub labels: WidgetLabels,
}

pub async fn get_widget_labels(
	State(state): State<AppState>,
	headers: HeaderMap,
	Query(query): Query<LocaleQuery>,
) -> Json<WidgetLabelsResponse> {
	let locale = request_locale(&state, &headers, query.locale.as_deref()).code;
	Json(WidgetLabelsResponse {
		locale,
		labels: widget_labels(locale),
	})
}
