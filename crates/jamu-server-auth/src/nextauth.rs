// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Decoder for session cookies issued by NextAuth.js v4.
//!
//! NextAuth stores the session as a compact JWE with direct key agreement:
//!
//! ```text
//! BASE64URL(header) . "" . BASE64URL(iv) . BASE64URL(ciphertext) . BASE64URL(tag)
//! header = {"alg":"dir","enc":"A256GCM"}
//! key    = HKDF-SHA256(ikm = secret, salt = "", info = "NextAuth.js Generated Encryption Key", len = 32)
//! aad    = ASCII(BASE64URL(header))
//! ```
//!
//! The plaintext is the JSON claims object, including `roles` when the
//! authentication collaborator's callbacks put them there.

use aes_gcm::{
	aead::{Aead, KeyInit, Payload},
	Aes256Gcm, Key, Nonce,
};
use async_trait::async_trait;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use hkdf::Hkdf;
use jamu_common_config::{Secret, SecretString};
use serde::Deserialize;
use sha2::Sha256;
use tracing::instrument;
use zeroize::Zeroizing;

use crate::token::{SessionClaims, SessionDecoder, SessionToken, TokenError};

/// HKDF info string NextAuth.js uses for its content encryption key.
pub const NEXTAUTH_KEY_INFO: &[u8] = b"NextAuth.js Generated Encryption Key";

const KEY_SIZE: usize = 32;
const NONCE_SIZE: usize = 12;

#[derive(Debug, Deserialize)]
struct JweHeader {
	alg: String,
	enc: String,
}

/// Derive the A256GCM content key from the shared secret.
///
/// Returns `None` only if HKDF rejects the output length, which cannot
/// happen for a 32-byte key.
pub fn derive_encryption_key(secret: &str) -> Option<Secret<[u8; KEY_SIZE]>> {
	let hkdf = Hkdf::<Sha256>::new(None, secret.as_bytes());
	let mut key = [0u8; KEY_SIZE];
	hkdf.expand(NEXTAUTH_KEY_INFO, &mut key).ok()?;
	Some(Secret::new(key))
}

fn decode_segment(segment: &str, what: &str) -> Result<Vec<u8>, TokenError> {
	URL_SAFE_NO_PAD
		.decode(segment)
		.map_err(|e| TokenError::Malformed(format!("invalid base64 in JWE {what}: {e}")))
}

/// Decrypt a compact JWE and parse its claims. Expiry is not checked here.
pub fn decrypt_claims(key: &[u8; KEY_SIZE], raw: &str) -> Result<SessionClaims, TokenError> {
	let segments: Vec<&str> = raw.split('.').collect();
	let [header_b64, encrypted_key, iv_b64, ciphertext_b64, tag_b64] = segments.as_slice() else {
		return Err(TokenError::Malformed(format!(
			"expected 5 JWE segments, got {}",
			segments.len()
		)));
	};

	if !encrypted_key.is_empty() {
		return Err(TokenError::Malformed(
			"direct encryption must not carry an encrypted key".to_string(),
		));
	}

	let header: JweHeader = serde_json::from_slice(&decode_segment(header_b64, "header")?)
		.map_err(|e| TokenError::Malformed(format!("invalid JWE header: {e}")))?;
	if header.alg != "dir" || header.enc != "A256GCM" {
		return Err(TokenError::Malformed(format!(
			"unsupported JWE algorithm {}/{}",
			header.alg, header.enc
		)));
	}

	let iv = decode_segment(iv_b64, "iv")?;
	if iv.len() != NONCE_SIZE {
		return Err(TokenError::Malformed(format!(
			"JWE iv must be {NONCE_SIZE} bytes, got {}",
			iv.len()
		)));
	}

	let mut sealed = decode_segment(ciphertext_b64, "ciphertext")?;
	sealed.extend_from_slice(&decode_segment(tag_b64, "tag")?);

	let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
	let plaintext = Zeroizing::new(
		cipher
			.decrypt(
				Nonce::from_slice(&iv),
				Payload {
					msg: &sealed,
					aad: header_b64.as_bytes(),
				},
			)
			.map_err(|_| TokenError::InvalidSignature)?,
	);

	serde_json::from_slice(&plaintext)
		.map_err(|e| TokenError::Malformed(format!("invalid session claims: {e}")))
}

/// Reads NextAuth.js v4 encrypted session tokens.
///
/// A decoder built without a secret rejects every token with
/// [`TokenError::MissingSecret`].
pub struct NextAuthSessionDecoder {
	key: Option<Secret<[u8; KEY_SIZE]>>,
	leeway_secs: i64,
}

impl NextAuthSessionDecoder {
	/// NextAuth's own `getToken` tolerates 15 seconds of clock skew.
	pub const DEFAULT_LEEWAY_SECS: u64 = 15;

	pub fn new(secret: Option<SecretString>) -> Self {
		Self {
			key: secret
				.filter(|s| !s.is_empty())
				.and_then(|s| derive_encryption_key(s.expose())),
			leeway_secs: Self::DEFAULT_LEEWAY_SECS as i64,
		}
	}

	pub fn with_leeway(mut self, secs: u64) -> Self {
		self.leeway_secs = i64::try_from(secs).unwrap_or(i64::MAX);
		self
	}

	pub fn has_secret(&self) -> bool {
		self.key.is_some()
	}

	fn check_expiry(&self, claims: &SessionClaims, now: i64) -> Result<(), TokenError> {
		match claims.exp {
			Some(exp) if exp <= now.saturating_sub(self.leeway_secs) => Err(TokenError::Expired),
			_ => Ok(()),
		}
	}
}

impl std::fmt::Debug for NextAuthSessionDecoder {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("NextAuthSessionDecoder")
			.field("key", &self.key)
			.field("leeway_secs", &self.leeway_secs)
			.finish()
	}
}

#[async_trait]
impl SessionDecoder for NextAuthSessionDecoder {
	#[instrument(level = "trace", skip_all)]
	async fn decode(&self, raw: &str) -> Result<SessionToken, TokenError> {
		let key = self.key.as_ref().ok_or(TokenError::MissingSecret)?;
		let claims = decrypt_claims(key.expose(), raw)?;
		self.check_expiry(&claims, chrono::Utc::now().timestamp())?;
		Ok(SessionToken::from_claims(claims))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::roles::NormalizedRole;
	use base64::Engine;

	const SECRET: &str = "jamu-storefront-fixture-secret";

	// Issued by NextAuth's encoding (jose EncryptJWT, dir + A256GCM) with SECRET.
	// Roles [{"name":"Admin"}], expires 2100-01-01.
	const ADMIN_SESSION: &str = "eyJhbGciOiJkaXIiLCJlbmMiOiJBMjU2R0NNIn0..1oooYv3ibVSAD7tF.4RskNBHtn1_3OxZD0yc3xCIOmHJsmf-yvzQ8ZO6wZB5jgHdFcrGK_dUnVioSgJf6G0SW-3CVhLKZf-DNMoanIRnhBNFWRnRObuCklGtomQsygTkrhpYDOVShWT6QafSE-9K0pAz-Qydt0wSdp3-EMxSdZ1XiM9j--_GMSrMsiE9HiK1ux5Ca2v2u1WtYaRIrivf7wk4WSCYR213hdIurILS_jA.jglJiGEqLJPKyRLjkiuHlA";
	// Roles ["editor"], expired 2023-12-14.
	const EXPIRED_SESSION: &str = "eyJhbGciOiJkaXIiLCJlbmMiOiJBMjU2R0NNIn0..VmWu7QY8Tt0p_nwL.8qIMXGuHAvXRG49zh4bujNQrFm3RZAIl3MVzl_UVPauSBtEU04-NZwRPdhjabjLOkokspuH_RwRzpnoYMmTW2iyVtUwjv5sa7BGLnpJMtzDaIyKyutZl_1OF_1zR2QW6XHOUnoIWwMktFV9PgF1Lwh7yVsuSpL75WDpDRtF2MbeVmOXbHD6POOEiJraR0lnOwZKNjIyZdkt9sJ4.ODead-bAaurTzQMhsTGp4w";
	// Roles ["member"], no email, expires 2100-01-01.
	const MEMBER_SESSION: &str = "eyJhbGciOiJkaXIiLCJlbmMiOiJBMjU2R0NNIn0..S36mshCPkXN1JlCd.qe2Kl0ToPDNy__heMiY1yGCYgjNjVsckw1mRzPySpdPVpUpKTYRZDZEiLMAmAeTX3hycmfv5ByukXZ9ctbW5QbaoDqpXVZ5s2FaULhCdkZCREeJQcC_WPYGmm-dc1Agd4pHrkbdoa9xngCLApns_M1IpxWXfMzK8qd4SOukUQAo.Reuucb4RXpA313GGIQ-gDA";

	fn decoder() -> NextAuthSessionDecoder {
		NextAuthSessionDecoder::new(Some(Secret::new(SECRET.to_string())))
	}

	mod decode {
		use super::*;

		#[tokio::test]
		async fn reads_nextauth_session() {
			let token = decoder().decode(ADMIN_SESSION).await.unwrap();
			assert_eq!(token.subject.as_deref(), Some("user-1"));
			assert_eq!(token.name.as_deref(), Some("Sari"));
			assert_eq!(token.email.as_deref(), Some("sari@example.com"));
			assert_eq!(token.roles, vec![NormalizedRole::new("admin")]);
			assert_eq!(token.expires_at, Some(4102444800));
		}

		#[tokio::test]
		async fn reads_string_roles() {
			let token = decoder().decode(MEMBER_SESSION).await.unwrap();
			assert_eq!(token.roles, vec![NormalizedRole::new("member")]);
			assert!(token.email.is_none());
		}

		#[tokio::test]
		async fn expired_session_is_rejected() {
			assert_eq!(
				decoder().decode(EXPIRED_SESSION).await,
				Err(TokenError::Expired)
			);
		}

		#[tokio::test]
		async fn wrong_secret_fails_authentication() {
			let other = NextAuthSessionDecoder::new(Some(Secret::new("another-secret".to_string())));
			assert_eq!(
				other.decode(ADMIN_SESSION).await,
				Err(TokenError::InvalidSignature)
			);
		}

		#[tokio::test]
		async fn tampered_header_fails_authentication() {
			// Same alg/enc with a different encoding changes the AAD.
			let forged_header = URL_SAFE_NO_PAD.encode(r#"{"enc":"A256GCM","alg":"dir"}"#);
			let (_, rest) = ADMIN_SESSION.split_once('.').unwrap();
			let forged = format!("{forged_header}.{rest}");
			assert_eq!(
				decoder().decode(&forged).await,
				Err(TokenError::InvalidSignature)
			);
		}

		#[tokio::test]
		async fn signed_jwt_is_malformed() {
			let result = decoder().decode("eyJhbGciOiJIUzI1NiJ9.e30.sig").await;
			assert!(matches!(result, Err(TokenError::Malformed(_))));
		}

		#[tokio::test]
		async fn missing_secret_rejects_everything() {
			let decoder = NextAuthSessionDecoder::new(None);
			assert!(!decoder.has_secret());
			assert_eq!(
				decoder.decode(ADMIN_SESSION).await,
				Err(TokenError::MissingSecret)
			);
		}
	}

	mod jwe_structure {
		use super::*;

		fn key() -> [u8; KEY_SIZE] {
			*derive_encryption_key(SECRET).unwrap().expose()
		}

		#[test]
		fn unsupported_algorithm_is_malformed() {
			let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"A256KW","enc":"A256GCM"}"#);
			let raw = format!("{header}..AAAAAAAAAAAAAAAA.AAAA.AAAAAAAAAAAAAAAAAAAAAA");
			let err = decrypt_claims(&key(), &raw).unwrap_err();
			assert!(err.to_string().contains("A256KW"));
		}

		#[test]
		fn encrypted_key_segment_is_rejected() {
			let raw = ADMIN_SESSION.replacen("..", ".AAAA.", 1);
			assert!(matches!(
				decrypt_claims(&key(), &raw),
				Err(TokenError::Malformed(_))
			));
		}

		#[test]
		fn short_iv_is_rejected() {
			let parts: Vec<&str> = ADMIN_SESSION.split('.').collect();
			let raw = format!("{}..AAAA.{}.{}", parts[0], parts[3], parts[4]);
			let err = decrypt_claims(&key(), &raw).unwrap_err();
			assert!(err.to_string().contains("iv"));
		}

		#[test]
		fn key_derivation_is_deterministic() {
			assert_eq!(key(), key());
			assert_ne!(
				key(),
				*derive_encryption_key("different").unwrap().expose()
			);
		}
	}

	mod expiry {
		use super::*;

		fn claims(exp: Option<i64>) -> SessionClaims {
			SessionClaims {
				exp,
				..Default::default()
			}
		}

		#[test]
		fn leeway_applies_at_the_boundary() {
			let decoder = decoder().with_leeway(15);
			assert!(decoder.check_expiry(&claims(Some(1_000)), 1_014).is_ok());
			assert_eq!(
				decoder.check_expiry(&claims(Some(1_000)), 1_015),
				Err(TokenError::Expired)
			);
		}

		#[test]
		fn missing_exp_never_expires() {
			assert!(decoder().check_expiry(&claims(None), i64::MAX).is_ok());
		}
	}
}
