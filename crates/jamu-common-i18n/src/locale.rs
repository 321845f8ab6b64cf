// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale metadata and direction support.

use std::fmt;

use serde::{Serialize, Serializer};

/// Text direction for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
	Ltr,
	Rtl,
}

impl Direction {
	/// Returns the HTML `dir` attribute value.
	pub fn as_html_dir(&self) -> &'static str {
		match self {
			Direction::Ltr => "ltr",
			Direction::Rtl => "rtl",
		}
	}
}

/// A supported storefront locale.
///
/// The codes are the storefront's own identifiers, not ISO 639-1: Korean is
/// `kr` and Japanese is `jp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Locale {
	Id,
	En,
	Ar,
	Fr,
	Kr,
	Jp,
}

/// Default locale used as fallback.
pub const DEFAULT_LOCALE: Locale = Locale::Id;

impl Locale {
	/// Parse an exact, case-sensitive locale code.
	pub fn from_code(code: &str) -> Option<Locale> {
		match code {
			"id" => Some(Locale::Id),
			"en" => Some(Locale::En),
			"ar" => Some(Locale::Ar),
			"fr" => Some(Locale::Fr),
			"kr" => Some(Locale::Kr),
			"jp" => Some(Locale::Jp),
			_ => None,
		}
	}

	pub fn code(&self) -> &'static str {
		self.info().code
	}

	pub fn direction(&self) -> Direction {
		self.info().direction
	}

	pub fn is_rtl(&self) -> bool {
		self.direction() == Direction::Rtl
	}

	pub fn info(&self) -> &'static LocaleInfo {
		match self {
			Locale::Id => &LOCALES[0],
			Locale::En => &LOCALES[1],
			Locale::Ar => &LOCALES[2],
			Locale::Fr => &LOCALES[3],
			Locale::Kr => &LOCALES[4],
			Locale::Jp => &LOCALES[5],
		}
	}
}

impl Default for Locale {
	fn default() -> Self {
		DEFAULT_LOCALE
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.code())
	}
}

impl Serialize for Locale {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(self.code())
	}
}

/// Metadata about a supported locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleInfo {
	pub code: &'static str,
	/// English name of the language
	pub name: &'static str,
	/// Native name of the language
	pub native_name: &'static str,
	pub direction: Direction,
}

/// All supported locales, in [`Locale`] declaration order.
pub const LOCALES: &[LocaleInfo] = &[
	LocaleInfo {
		code: "id",
		name: "Indonesian",
		native_name: "Bahasa Indonesia",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "en",
		name: "English",
		native_name: "English",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "ar",
		name: "Arabic",
		native_name: "العربية",
		direction: Direction::Rtl,
	},
	LocaleInfo {
		code: "fr",
		name: "French",
		native_name: "Français",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "kr",
		name: "Korean",
		native_name: "한국어",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "jp",
		name: "Japanese",
		native_name: "日本語",
		direction: Direction::Ltr,
	},
];

/// Get metadata for a locale code. `None` if unsupported.
pub fn locale_info(code: &str) -> Option<&'static LocaleInfo> {
	Locale::from_code(code).map(|l| l.info())
}

/// Check if a locale code uses right-to-left text. `false` for unsupported codes.
pub fn is_rtl(code: &str) -> bool {
	Locale::from_code(code).is_some_and(|l| l.is_rtl())
}

pub fn is_supported(code: &str) -> bool {
	Locale::from_code(code).is_some()
}

pub fn available_locales() -> &'static [LocaleInfo] {
	LOCALES
}

#[cfg(test)]
mod tests {
	use super::*;

	const ALL: [Locale; 6] = [
		Locale::Id,
		Locale::En,
		Locale::Ar,
		Locale::Fr,
		Locale::Kr,
		Locale::Jp,
	];

	#[test]
	fn info_table_matches_enum() {
		for locale in ALL {
			assert_eq!(Locale::from_code(locale.code()), Some(locale));
		}
		assert_eq!(LOCALES.len(), ALL.len());
	}

	#[test]
	fn only_arabic_is_rtl() {
		for locale in ALL {
			assert_eq!(locale.is_rtl(), locale == Locale::Ar, "{locale}");
		}
		assert!(is_rtl("ar"));
		assert!(!is_rtl("he"));
		assert!(!is_rtl(""));
	}

	#[test]
	fn codes_are_case_sensitive() {
		assert!(is_supported("en"));
		assert!(!is_supported("EN"));
		assert!(!is_supported(" en"));
		assert!(!is_supported("ko"));
		assert!(!is_supported("ja"));
	}

	#[test]
	fn locale_info_lookup() {
		let info = locale_info("kr").unwrap();
		assert_eq!(info.name, "Korean");
		assert_eq!(info.native_name, "한국어");
		assert!(locale_info("xx").is_none());
	}

	#[test]
	fn direction_html_dir() {
		assert_eq!(Direction::Ltr.as_html_dir(), "ltr");
		assert_eq!(Direction::Rtl.as_html_dir(), "rtl");
	}

	#[test]
	fn serializes_as_code() {
		assert_eq!(serde_json::to_string(&Locale::Jp).unwrap(), "\"jp\"");
		assert_eq!(serde_json::to_string(&Direction::Rtl).unwrap(), "\"rtl\"");
	}

	#[test]
	fn default_is_indonesian() {
		assert_eq!(Locale::default(), Locale::Id);
		assert_eq!(DEFAULT_LOCALE.code(), "id");
	}
}
