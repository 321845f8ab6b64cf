// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Bottom navigation model.

use jamu_common_i18n::{nav_labels, Locale, NavLabels};
use serde::Serialize;

/// Navigation entries in display order: label key and target path.
pub const NAV_ITEMS: [(&str, &str); 5] = [
	("home", "/"),
	("menu", "/menu"),
	("vip", "/vip"),
	("merch", "/merch"),
	("profile", "/profile"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
	pub key: &'static str,
	pub href: &'static str,
	pub label: &'static str,
	/// Only an exact path match is active; `/vip/gold` does not light up `/vip`.
	pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthPrompt {
	pub label: &'static str,
	pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
	pub locale: Locale,
	pub dir: &'static str,
	pub items: Vec<NavItem>,
	/// Present only for visitors without a session.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub auth_prompt: Option<AuthPrompt>,
}

fn label_for(labels: &NavLabels, key: &str) -> &'static str {
	match key {
		"home" => labels.home,
		"menu" => labels.menu,
		"vip" => labels.vip,
		"merch" => labels.merch,
		"profile" => labels.profile,
		_ => labels.auth,
	}
}

pub fn build_navigation(
	locale: Locale,
	current_path: &str,
	has_session: bool,
	login_path: &str,
) -> Navigation {
	let labels = nav_labels(locale);

	let items = NAV_ITEMS
		.iter()
		.map(|&(key, href)| NavItem {
			key,
			href,
			label: label_for(&labels, key),
			active: href == current_path,
		})
		.collect();

	let auth_prompt = (!has_session).then(|| AuthPrompt {
		label: labels.auth,
		href: login_path.to_string(),
	});

	Navigation {
		locale,
		dir: locale.direction().as_html_dir(),
		items,
		auth_prompt,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn active_hrefs(nav: &Navigation) -> Vec<&'static str> {
		nav.items
			.iter()
			.filter(|i| i.active)
			.map(|i| i.href)
			.collect()
	}

	#[test]
	fn items_in_display_order() {
		let nav = build_navigation(Locale::En, "/", false, "/auth/login");
		let hrefs: Vec<_> = nav.items.iter().map(|i| i.href).collect();
		assert_eq!(hrefs, vec!["/", "/menu", "/vip", "/merch", "/profile"]);
	}

	#[test]
	fn exact_match_is_active() {
		let nav = build_navigation(Locale::En, "/menu", true, "/auth/login");
		assert_eq!(active_hrefs(&nav), vec!["/menu"]);
	}

	#[test]
	fn nested_path_activates_nothing() {
		let nav = build_navigation(Locale::En, "/vip/gold", true, "/auth/login");
		assert!(active_hrefs(&nav).is_empty());
	}

	#[test]
	fn labels_follow_locale() {
		let nav = build_navigation(Locale::Id, "/", true, "/auth/login");
		assert_eq!(nav.items[0].label, "Beranda");
		assert_eq!(nav.items[4].label, "Saya");
		assert_eq!(nav.dir, "ltr");
	}

	#[test]
	fn arabic_is_rtl() {
		let nav = build_navigation(Locale::Ar, "/", true, "/auth/login");
		assert_eq!(nav.dir, "rtl");
	}

	#[test]
	fn auth_prompt_only_without_session() {
		let anonymous = build_navigation(Locale::En, "/", false, "/auth/login");
		let prompt = anonymous.auth_prompt.unwrap();
		assert_eq!(prompt.label, "Register or Login");
		assert_eq!(prompt.href, "/auth/login");

		let signed_in = build_navigation(Locale::En, "/", true, "/auth/login");
		assert!(signed_in.auth_prompt.is_none());
	}

	proptest! {
		#[test]
		fn at_most_one_item_active(path in "/[a-z/]{0,12}") {
			let nav = build_navigation(Locale::En, &path, true, "/auth/login");
			prop_assert!(active_hrefs(&nav).len() <= 1);
		}
	}
}
