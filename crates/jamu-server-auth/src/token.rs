// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Session token decoding.
//!
//! [`SessionDecoder`] is the seam between the guard and whatever produced the
//! session. [`JwtSessionDecoder`] verifies HS256 tokens signed with the secret
//! shared with the authentication collaborator.

use async_trait::async_trait;
use jamu_common_config::SecretString;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use tracing::instrument;

use crate::roles::{deserialize_roles, NormalizedRole, RoleEntry};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TokenError {
	#[error("no session signing secret configured")]
	MissingSecret,

	#[error("session token expired")]
	Expired,

	#[error("session token signature is invalid")]
	InvalidSignature,

	#[error("malformed session token: {0}")]
	Malformed(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
	fn from(e: jsonwebtoken::errors::Error) -> Self {
		match e.kind() {
			ErrorKind::ExpiredSignature => TokenError::Expired,
			ErrorKind::InvalidSignature => TokenError::InvalidSignature,
			_ => TokenError::Malformed(e.to_string()),
		}
	}
}

/// Claims read from a session token. Unknown claims are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionClaims {
	#[serde(default)]
	pub sub: Option<String>,
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default)]
	pub email: Option<String>,
	#[serde(default, deserialize_with = "deserialize_roles")]
	pub roles: Vec<RoleEntry>,
	#[serde(default)]
	pub exp: Option<i64>,
}

/// A decoded session with roles already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken {
	pub subject: Option<String>,
	pub name: Option<String>,
	pub email: Option<String>,
	pub roles: Vec<NormalizedRole>,
	pub expires_at: Option<i64>,
}

impl SessionToken {
	pub fn from_claims(claims: SessionClaims) -> Self {
		Self {
			subject: claims.sub,
			name: claims.name,
			email: claims.email,
			roles: claims.roles.iter().map(RoleEntry::normalize).collect(),
			expires_at: claims.exp,
		}
	}

	/// Build a token directly from role names, for callers that already hold
	/// a trusted session.
	pub fn with_roles<I, S>(roles: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		Self {
			subject: None,
			name: None,
			email: None,
			roles: roles
				.into_iter()
				.map(|r| NormalizedRole::new(r.as_ref()))
				.collect(),
			expires_at: None,
		}
	}

	/// True if any role matches one of `wanted` (compared lowercase).
	pub fn has_any_role<S: AsRef<str>>(&self, wanted: &[S]) -> bool {
		self.roles.iter().any(|role| {
			!role.is_empty()
				&& wanted
					.iter()
					.any(|w| role.as_str() == w.as_ref().to_lowercase())
		})
	}
}

/// Decodes a raw token string into a [`SessionToken`].
#[async_trait]
pub trait SessionDecoder: Send + Sync {
	async fn decode(&self, raw: &str) -> Result<SessionToken, TokenError>;
}

/// HS256 JWT decoder using the shared signing secret.
///
/// A decoder built without a secret rejects every token with
/// [`TokenError::MissingSecret`], which the guard treats as "no session".
pub struct JwtSessionDecoder {
	secret: Option<SecretString>,
	validation: Validation,
}

impl JwtSessionDecoder {
	pub fn new(secret: Option<SecretString>) -> Self {
		let mut validation = Validation::new(Algorithm::HS256);
		validation.required_spec_claims.clear();
		validation.validate_exp = true;
		validation.validate_aud = false;
		Self {
			secret: secret.filter(|s| !s.is_empty()),
			validation,
		}
	}

	/// Set the clock skew tolerance in seconds for `exp`.
	pub fn with_leeway(mut self, secs: u64) -> Self {
		self.validation.leeway = secs;
		self
	}

	pub fn has_secret(&self) -> bool {
		self.secret.is_some()
	}
}

impl std::fmt::Debug for JwtSessionDecoder {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("JwtSessionDecoder")
			.field("secret", &self.secret)
			.field("leeway", &self.validation.leeway)
			.finish()
	}
}

#[async_trait]
impl SessionDecoder for JwtSessionDecoder {
	#[instrument(level = "trace", skip_all)]
	async fn decode(&self, raw: &str) -> Result<SessionToken, TokenError> {
		let secret = self.secret.as_ref().ok_or(TokenError::MissingSecret)?;
		let key = DecodingKey::from_secret(secret.expose().as_bytes());
		let data = decode::<SessionClaims>(raw, &key, &self.validation)?;
		Ok(SessionToken::from_claims(data.claims))
	}
}
