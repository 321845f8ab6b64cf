// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

use serde::Serialize;

use crate::locale::{Direction, Locale, DEFAULT_LOCALE};

/// Outcome of resolving a requested locale code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedLocale {
	pub code: Locale,
	pub is_right_to_left: bool,
}

impl ResolvedLocale {
	fn from_locale(code: Locale) -> Self {
		Self {
			code,
			is_right_to_left: code.is_rtl(),
		}
	}

	pub fn direction(&self) -> Direction {
		self.code.direction()
	}
}

/// Resolve a requested locale code to a supported locale.
///
/// Total over every input: an absent, empty, malformed or unsupported code
/// yields [`DEFAULT_LOCALE`]. Matching is exact and case-sensitive.
///
/// ```
/// use jamu_common_i18n::{resolve, Locale};
///
/// assert_eq!(resolve(Some("fr")).code, Locale::Fr);
/// assert_eq!(resolve(Some("xx")).code, Locale::Id);
/// assert_eq!(resolve(None).code, Locale::Id);
/// ```
pub fn resolve(requested: Option<&str>) -> ResolvedLocale {
	let code = requested
		.and_then(Locale::from_code)
		.unwrap_or(DEFAULT_LOCALE);
	ResolvedLocale::from_locale(code)
}

/// Resolve with a server-configured default between the request and the
/// built-in fallback.
///
/// Resolution order:
/// 1. The requested code (if supported)
/// 2. The server default (if supported)
/// 3. [`DEFAULT_LOCALE`]
pub fn resolve_locale_with_default(requested: Option<&str>, server_default: &str) -> ResolvedLocale {
	if let Some(locale) = requested.and_then(Locale::from_code) {
		return ResolvedLocale::from_locale(locale);
	}
	if let Some(requested) = requested {
		tracing::trace!(requested, "unsupported locale requested, using default");
	}
	resolve(Some(server_default))
}
