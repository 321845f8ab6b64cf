// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Session handling and route gating for the Jamu storefront.
//!
//! Sessions are issued by an external authentication collaborator and share a
//! secret with this service, either as NextAuth.js encrypted tokens or as
//! HS256-signed JWTs. This crate only reads them:
//!
//! ```text
//! Request → Extract cookie/bearer → Decode (JWE/HS256) → SessionContext → Guard
//!                                       │
//!                                       └── any failure → anonymous session
//! ```
//!
//! - [`roles`]: role entries as they appear on the wire and their normalized form
//! - [`token`]: the [`SessionDecoder`] seam and its JWT implementation
//! - [`nextauth`]: the NextAuth.js v4 encrypted token implementation
//! - [`middleware`]: header extraction and [`SessionContext`]
//! - [`guard`]: path classification and the allow/redirect decision

pub mod guard;
pub mod middleware;
pub mod nextauth;
pub mod roles;
pub mod token;

pub use guard::{callback_url, GuardOutcome, GuardRules, RouteClass};
pub use middleware::{
	extract_bearer_token, extract_chunked_cookie, extract_raw_session_token, extract_session_cookie_with_name,
	resolve_session, SessionContext, SECURE_SESSION_COOKIE_NAME, SESSION_COOKIE_NAME,
};
pub use nextauth::NextAuthSessionDecoder;
pub use roles::{NormalizedRole, RoleEntry, RoleObject, PRIVILEGED_ROLES};
pub use token::{JwtSessionDecoder, SessionClaims, SessionDecoder, SessionToken, TokenError};
