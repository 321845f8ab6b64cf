// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization support for the Jamu storefront.
//!
//! The storefront ships a closed set of six locales: `id` (default), `en`,
//! `ar`, `fr`, `kr` and `jp`. Arabic is the only right-to-left locale.
//!
//! Every lookup here is total: unknown codes resolve to the default locale
//! and label catalogs are exhaustive matches over [`Locale`], so callers never
//! handle a missing translation.
//!
//! # Example
//!
//! ```
//! use jamu_common_i18n::{resolve, t, Locale};
//!
//! let resolved = resolve(Some("ar"));
//! assert_eq!(resolved.code, Locale::Ar);
//! assert!(resolved.is_right_to_left);
//!
//! // Unsupported codes fall back to Indonesian.
//! assert_eq!(resolve(Some("de")).code, Locale::Id);
//!
//! assert_eq!(t(Locale::En, "nav.home"), "Home");
//! ```

mod catalog;
mod locale;
mod resolve;

pub use catalog::{
	greeting, header_labels, nav_labels, outlet_labels, t, widget_labels, DayPart, HeaderLabels,
	NavLabels, OutletLabels, WidgetLabels,
};
pub use locale::{
	available_locales, is_rtl, is_supported, locale_info, Direction, Locale, LocaleInfo,
	DEFAULT_LOCALE, LOCALES,
};
pub use resolve::{resolve, resolve_locale_with_default, ResolvedLocale};
