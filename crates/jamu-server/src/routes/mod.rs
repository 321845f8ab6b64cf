// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

pub mod health;
pub mod i18n;
pub mod navigation;
pub mod outlets;
pub mod session;

use axum::http::Uri;

use crate::error::ServerError;

/// JSON 404 for unmatched routes.
pub async fn not_found(uri: Uri) -> ServerError {
	ServerError::NotFound(uri.path().to_string())
}
