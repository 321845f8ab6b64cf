// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Outlet list and outlet detail endpoints.

use axum::{
	extract::{
		rejection::{PathRejection, QueryRejection},
		Path, Query, State,
	},
	http::HeaderMap,
	Json,
};
use jamu_common_i18n::{outlet_labels, Locale, OutletLabels};
use serde::{Deserialize, Serialize};

use crate::{
	api::AppState,
	error::ServerError,
	outlets::{Outlet, Services, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
	routes::i18n::request_locale,
};

#[derive(Debug, Default, Deserialize)]
pub struct OutletListQuery {
	pub locale: Option<String>,
	#[serde(default)]
	pub offset: Option<usize>,
	#[serde(default)]
	pub limit: Option<usize>,
	/// Outlet currently chosen by the visitor; flagged in the response.
	#[serde(default, alias = "selectedId")]
	pub selected_id: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct OutletEntry {
	pub id: u32,
	pub name: String,
	pub address: String,
	pub is_favorite: bool,
	pub services: Services,
	pub selected: bool,
	pub menu_href: String,
	pub detail_href: String,
}

impl OutletEntry {
	fn new(outlet: &Outlet, selected_id: Option<u32>) -> Self {
		Self {
			id: outlet.id,
			name: outlet.name.clone(),
			address: outlet.address.clone(),
			is_favorite: outlet.is_favorite,
			services: outlet.services,
			selected: selected_id == Some(outlet.id),
			menu_href: outlet.menu_href(),
			detail_href: outlet.detail_href(),
		}
	}
}

#[derive(Debug, Serialize)]
pub struct OutletListResponse {
	pub locale: Locale,
	pub dir: &'static str,
	pub labels: OutletLabels,
	pub outlets: Vec<OutletEntry>,
	pub offset: usize,
	pub limit: usize,
	pub total: usize,
	pub has_more: bool,
	pub next_offset: Option<usize>,
}

pub async fn list_outlets(
	State(state): State<AppState>,
	headers: HeaderMap,
	query: Result<Query<OutletListQuery>, QueryRejection>,
) -> Result<Json<OutletListResponse>, ServerError> {
	let Query(query) = query?;
	let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE);
	if limit == 0 || limit > MAX_PAGE_SIZE {
		return Err(ServerError::BadRequest(format!(
			"limit must be between 1 and {MAX_PAGE_SIZE}, got {limit}"
		)));
	}

	let locale = request_locale(&state, &headers, query.locale.as_deref()).code;
	let page = state.outlets.page(query.offset.unwrap_or(0), limit);

	Ok(Json(OutletListResponse {
		locale,
		dir: locale.direction().as_html_dir(),
		labels: outlet_labels(locale),
		outlets: page
			.outlets
			.iter()
			.map(|outlet| OutletEntry::new(outlet, query.selected_id))
			.collect(),
		offset: page.offset,
		limit,
		total: page.total,
		has_more: page.has_more,
		next_offset: page.next_offset,
	}))
}

#[derive(Debug, Default, Deserialize)]
pub struct OutletDetailQuery {
	pub locale: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OutletDetailResponse {
	pub locale: Locale,
	pub dir: &'static str,
	pub labels: OutletLabels,
	pub outlet: OutletEntry,
}

pub async fn get_outlet(
	State(state): State<AppState>,
	headers: HeaderMap,
	id: Result<Path<u32>, PathRejection>,
	query: Result<Query<OutletDetailQuery>, QueryRejection>,
) -> Result<Json<OutletDetailResponse>, ServerError> {
	let Path(id) = id?;
	let Query(query) = query?;
	let outlet = state
		.outlets
		.get(id)
		.ok_or_else(|| ServerError::NotFound(format!("outlet {id}")))?;

	let locale = request_locale(&state, &headers, query.locale.as_deref()).code;
	Ok(Json(OutletDetailResponse {
		locale,
		dir: locale.direction().as_html_dir(),
		labels: outlet_labels(locale),
		outlet: OutletEntry::new(outlet, Some(id)),
	}))
}
