// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Extracting session tokens from requests.
//!
//! This module provides:
//! - [`SessionContext`] - the explicit, per-request session state handed to handlers
//! - Helpers for reading session cookies and bearer tokens
//! - [`resolve_session`] - extract, decode, and collapse every failure into "anonymous"
//!
//! # Token sources
//!
//! Cookies are checked first, in the configured order (secure cookie name
//! before the plain one), then `Authorization: Bearer`. A session too large
//! for one cookie arrives split as `<name>.0`, `<name>.1`, ... and is joined
//! back in index order.
//!
//! # Security Notes
//!
//! Token values are never logged. Decode failures are logged at debug level
//! with the error kind only.

use http::header::{AUTHORIZATION, COOKIE};
use http::HeaderMap;
use tracing::instrument;

use crate::token::{SessionDecoder, SessionToken};

/// Cookie set by the authentication collaborator over HTTPS.
pub const SECURE_SESSION_COOKIE_NAME: &str = "__Secure-next-auth.session-token";

/// Cookie set by the authentication collaborator over plain HTTP.
pub const SESSION_COOKIE_NAME: &str = "next-auth.session-token";

/// Session state for a single request.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
	token: Option<SessionToken>,
}

impl SessionContext {
	pub fn anonymous() -> Self {
		Self { token: None }
	}

	pub fn authenticated(token: SessionToken) -> Self {
		Self { token: Some(token) }
	}

	pub fn token(&self) -> Option<&SessionToken> {
		self.token.as_ref()
	}

	pub fn is_authenticated(&self) -> bool {
		self.token.is_some()
	}
}

/// Extract a cookie value by name from the Cookie header.
pub fn extract_session_cookie_with_name(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
	headers
		.get_all(COOKIE)
		.iter()
		.filter_map(|value| value.to_str().ok())
		.flat_map(|header| header.split(';'))
		.find_map(|cookie| {
			let (name, value) = cookie.trim().split_once('=')?;
			(name == cookie_name && !value.is_empty()).then(|| value.to_string())
		})
}

/// Extract a session cookie, joining `<name>.<n>` chunks when the unsplit
/// cookie is absent.
pub fn extract_chunked_cookie(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
	if let Some(value) = extract_session_cookie_with_name(headers, cookie_name) {
		return Some(value);
	}

	let prefix = format!("{cookie_name}.");
	let mut chunks: Vec<(usize, &str)> = headers
		.get_all(COOKIE)
		.iter()
		.filter_map(|value| value.to_str().ok())
		.flat_map(|header| header.split(';'))
		.filter_map(|cookie| {
			let (name, value) = cookie.trim().split_once('=')?;
			let index = name.strip_prefix(prefix.as_str())?.parse().ok()?;
			Some((index, value))
		})
		.collect();
	if chunks.is_empty() {
		return None;
	}
	chunks.sort_by_key(|(index, _)| *index);

	let joined: String = chunks.into_iter().map(|(_, value)| value).collect();
	(!joined.is_empty()).then_some(joined)
}

/// Extract bearer token from the Authorization header.
///
/// Expects exactly `Authorization: Bearer <token>`; the scheme is case-sensitive.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
	let auth_str = headers.get(AUTHORIZATION)?.to_str().ok()?;
	auth_str
		.strip_prefix("Bearer ")
		.filter(|token| !token.is_empty())
		.map(|token| token.to_string())
}

/// Find the raw session token: cookies in order, then the bearer header.
pub fn extract_raw_session_token<S: AsRef<str>>(
	headers: &HeaderMap,
	cookie_names: &[S],
) -> Option<String> {
	cookie_names
		.iter()
		.find_map(|name| extract_chunked_cookie(headers, name.as_ref()))
		.or_else(|| extract_bearer_token(headers))
}

/// Build the session context for a request.
///
/// Never fails: a missing token, a missing secret, an expired or forged
/// token all produce [`SessionContext::anonymous`].
#[instrument(level = "debug", skip_all, fields(has_token = tracing::field::Empty))]
pub async fn resolve_session<S: AsRef<str>>(
	decoder: &dyn SessionDecoder,
	headers: &HeaderMap,
	cookie_names: &[S],
) -> SessionContext {
	let span = tracing::Span::current();
	let Some(raw) = extract_raw_session_token(headers, cookie_names) else {
		span.record("has_token", false);
		return SessionContext::anonymous();
	};
	span.record("has_token", true);

	match decoder.decode(&raw).await {
		Ok(token) => SessionContext::authenticated(token),
		Err(e) => {
			tracing::debug!(error = %e, "session token rejected, treating request as anonymous");
			SessionContext::anonymous()
		}
	}
}
