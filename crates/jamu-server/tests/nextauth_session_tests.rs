// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! End-to-end tests: NextAuth.js encrypted session cookies through the router.

use axum::{
	body::{to_bytes, Body},
	http::{header, Request, StatusCode},
	response::Response,
	Router,
};
use jamu_common_config::Secret;
use jamu_server::{create_router, AppState};
use jamu_server_config::{AuthConfig, ServerConfig, TokenFormat};
use serde_json::Value;
use tower::ServiceExt;

const SECRET: &str = "jamu-storefront-fixture-secret";

// Encrypted with SECRET as NextAuth.js v4 does (dir + A256GCM, HKDF-derived key).
// Sari, roles [{"name":"Admin"}], expires 2100-01-01.
const ADMIN_SESSION: &str = "eyJhbGciOiJkaXIiLCJlbmMiOiJBMjU2R0NNIn0..1oooYv3ibVSAD7tF.4RskNBHtn1_3OxZD0yc3xCIOmHJsmf-yvzQ8ZO6wZB5jgHdFcrGK_dUnVioSgJf6G0SW-3CVhLKZf-DNMoanIRnhBNFWRnRObuCklGtomQsygTkrhpYDOVShWT6QafSE-9K0pAz-Qydt0wSdp3-EMxSdZ1XiM9j--_GMSrMsiE9HiK1ux5Ca2v2u1WtYaRIrivf7wk4WSCYR213hdIurILS_jA.jglJiGEqLJPKyRLjkiuHlA";
// Sari, roles ["editor"], expired 2023-12-14.
const EXPIRED_SESSION: &str = "eyJhbGciOiJkaXIiLCJlbmMiOiJBMjU2R0NNIn0..VmWu7QY8Tt0p_nwL.8qIMXGuHAvXRG49zh4bujNQrFm3RZAIl3MVzl_UVPauSBtEU04-NZwRPdhjabjLOkokspuH_RwRzpnoYMmTW2iyVtUwjv5sa7BGLnpJMtzDaIyKyutZl_1OF_1zR2QW6XHOUnoIWwMktFV9PgF1Lwh7yVsuSpL75WDpDRtF2MbeVmOXbHD6POOEiJraR0lnOwZKNjIyZdkt9sJ4.ODead-bAaurTzQMhsTGp4w";
// Budi, roles ["member"], expires 2100-01-01.
const MEMBER_SESSION: &str = "eyJhbGciOiJkaXIiLCJlbmMiOiJBMjU2R0NNIn0..S36mshCPkXN1JlCd.qe2Kl0ToPDNy__heMiY1yGCYgjNjVsckw1mRzPySpdPVpUpKTYRZDZEiLMAmAeTX3hycmfv5ByukXZ9ctbW5QbaoDqpXVZ5s2FaULhCdkZCREeJQcC_WPYGmm-dc1Agd4pHrkbdoa9xngCLApns_M1IpxWXfMzK8qd4SOukUQAo.Reuucb4RXpA313GGIQ-gDA";

fn app_with_secret(secret: &str) -> Router {
	let config = ServerConfig {
		auth: AuthConfig {
			token_format: TokenFormat::Nextauth,
			secret: Some(Secret::new(secret.to_string())),
			..Default::default()
		},
		..Default::default()
	};
	create_router(AppState::from_config(&config))
}

async fn get_with_cookie(uri: &str, cookie: Option<&str>) -> Response {
	get_from(app_with_secret(SECRET), uri, cookie).await
}

async fn get_from(app: Router, uri: &str, cookie: Option<&str>) -> Response {
	let mut builder = Request::builder().uri(uri);
	if let Some(cookie) = cookie {
		builder = builder.header(header::COOKIE, cookie);
	}
	app.oneshot(builder.body(Body::empty()).unwrap())
		.await
		.unwrap()
}

fn session_cookie(token: &str) -> String {
	format!("next-auth.session-token={token}")
}

async fn json_body(response: Response) -> Value {
	let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
	serde_json::from_slice(&bytes).unwrap()
}

fn location(response: &Response) -> &str {
	response
		.headers()
		.get(header::LOCATION)
		.unwrap()
		.to_str()
		.unwrap()
}

mod route_guard {
	use super::*;

	#[tokio::test]
	async fn member_session_opens_vip() {
		let response = get_with_cookie("/vip", Some(&session_cookie(MEMBER_SESSION))).await;
		assert_ne!(response.status(), StatusCode::TEMPORARY_REDIRECT);
	}

	#[tokio::test]
	async fn admin_session_opens_admin() {
		let response =
			get_with_cookie("/admin/orders", Some(&session_cookie(ADMIN_SESSION))).await;
		assert_eq!(response.status(), StatusCode::NOT_FOUND);
	}

	#[tokio::test]
	async fn member_session_is_sent_home_from_admin() {
		let response = get_with_cookie("/admin", Some(&session_cookie(MEMBER_SESSION))).await;
		assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
		assert_eq!(location(&response), "/");
	}

	#[tokio::test]
	async fn expired_session_redirects_to_login() {
		let response = get_with_cookie("/vip", Some(&session_cookie(EXPIRED_SESSION))).await;
		assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
		assert_eq!(location(&response), "/auth/login?callbackUrl=%2Fvip");
	}

	#[tokio::test]
	async fn session_under_another_secret_redirects_to_login() {
		let response = get_from(
			app_with_secret("rotated-secret"),
			"/vip",
			Some(&session_cookie(ADMIN_SESSION)),
		)
		.await;
		assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
	}

	#[tokio::test]
	async fn secure_cookie_name_is_read() {
		let cookie = format!("__Secure-next-auth.session-token={MEMBER_SESSION}");
		let response = get_with_cookie("/vip", Some(&cookie)).await;
		assert_ne!(response.status(), StatusCode::TEMPORARY_REDIRECT);
	}

	#[tokio::test]
	async fn chunked_session_cookie_is_joined() {
		let (head, tail) = ADMIN_SESSION.split_at(120);
		let cookie = format!(
			"next-auth.session-token.1={tail}; theme=dark; next-auth.session-token.0={head}"
		);
		let response = get_with_cookie("/admin", Some(&cookie)).await;
		assert_eq!(response.status(), StatusCode::NOT_FOUND);
	}

	#[tokio::test]
	async fn hs256_format_does_not_read_nextauth_sessions() {
		let config = ServerConfig {
			auth: AuthConfig {
				token_format: TokenFormat::Hs256,
				secret: Some(Secret::new(SECRET.to_string())),
				..Default::default()
			},
			..Default::default()
		};
		let app = create_router(AppState::from_config(&config));
		let response = get_from(app, "/vip", Some(&session_cookie(MEMBER_SESSION))).await;
		assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
	}
}

mod session_api {
	use super::*;

	#[tokio::test]
	async fn reports_decrypted_identity() {
		let body = json_body(
			get_with_cookie("/api/session", Some(&session_cookie(ADMIN_SESSION))).await,
		)
		.await;
		assert_eq!(body["authenticated"], true);
		assert_eq!(body["name"], "Sari");
		assert_eq!(body["roles"], serde_json::json!(["admin"]));
		assert_eq!(body["is_admin"], true);
	}

	#[tokio::test]
	async fn expired_session_is_anonymous() {
		let body = json_body(
			get_with_cookie("/api/session", Some(&session_cookie(EXPIRED_SESSION))).await,
		)
		.await;
		assert_eq!(body["authenticated"], false);
	}
}
