// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Route guard middleware for Axum.
//!
//! Runs once per request, before routing:
//!
//! 1. Excluded paths (auth API, static assets) pass straight through with an
//!    anonymous [`SessionContext`].
//! 2. The session token is extracted and decoded; any failure is anonymous.
//! 3. [`GuardRules::evaluate`](jamu_server_auth::GuardRules::evaluate) picks
//!    the outcome. Redirects are `307 Temporary Redirect`.
//! 4. Allowed requests carry the [`SessionContext`] as a request extension.
//!
//! ```ignore
//! let app = Router::new()
//!     .route("/api/session", get(get_session))
//!     .layer(from_fn_with_state(state.clone(), route_guard_layer));
//! ```

use axum::{
	body::Body,
	extract::State,
	http::Request,
	middleware::Next,
	response::{IntoResponse, Redirect, Response},
};
use jamu_server_auth::{resolve_session, GuardOutcome, SessionContext};
use tracing::instrument;

use crate::api::AppState;

#[instrument(
	skip_all,
	fields(path = %request.uri().path(), outcome = tracing::field::Empty)
)]
pub async fn route_guard_layer(
	State(state): State<AppState>,
	mut request: Request<Body>,
	next: Next,
) -> Response {
	let span = tracing::Span::current();
	let path = request.uri().path().to_string();

	if state.guard.is_excluded(&path) {
		span.record("outcome", "excluded");
		request.extensions_mut().insert(SessionContext::anonymous());
		return next.run(request).await;
	}

	let session = resolve_session(
		state.decoder.as_ref(),
		request.headers(),
		&state.cookie_names[..],
	)
	.await;
	let query = request.uri().query().map(str::to_string);

	match state.guard.evaluate(&path, query.as_deref(), session.token()) {
		GuardOutcome::Allow => {
			span.record("outcome", "allow");
			request.extensions_mut().insert(session);
			next.run(request).await
		}
		GuardOutcome::RedirectLogin { callback_url } => {
			span.record("outcome", "redirect_login");
			let location = state.guard.login_location(query.as_deref(), &callback_url);
			tracing::debug!(%location, "redirecting to login");
			Redirect::temporary(&location).into_response()
		}
		GuardOutcome::RedirectHome => {
			span.record("outcome", "redirect_home");
			tracing::debug!("session lacks a privileged role, redirecting home");
			Redirect::temporary(&state.guard.home_path).into_response()
		}
	}
}
