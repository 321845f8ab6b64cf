// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale configuration section.

use jamu_common_i18n::DEFAULT_LOCALE;
use serde::{Deserialize, Serialize};

fn default_locale_cookie() -> String {
	"jamu_locale".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct I18nConfigLayer {
	pub default_locale: Option<String>,
	pub locale_cookie: Option<String>,
}

impl I18nConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.default_locale.is_some() {
			self.default_locale = other.default_locale;
		}
		if other.locale_cookie.is_some() {
			self.locale_cookie = other.locale_cookie;
		}
	}

	pub fn finalize(self) -> I18nConfig {
		I18nConfig {
			default_locale: self
				.default_locale
				.unwrap_or_else(|| DEFAULT_LOCALE.code().to_string()),
			locale_cookie: self.locale_cookie.unwrap_or_else(default_locale_cookie),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct I18nConfig {
	/// Used when a request names no supported locale.
	pub default_locale: String,
	/// Cookie holding the visitor's locale choice.
	pub locale_cookie: String,
}

impl Default for I18nConfig {
	fn default() -> Self {
		I18nConfigLayer::default().finalize()
	}
}
