// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Static storefront label catalogs.
//!
//! Catalogs are exhaustive matches over [`Locale`], so every locale has every
//! label. [`t`] exposes them through dot-notation keys, for example
//! `nav.home`, `widget.status.current`, `header.select_outlet`,
//! `outlet.load_more` or `greeting.evening`.

use serde::Serialize;

use crate::locale::Locale;

/// Bottom navigation labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLabels {
	pub home: &'static str,
	pub menu: &'static str,
	pub vip: &'static str,
	pub merch: &'static str,
	pub profile: &'static str,
	/// Call to action shown to visitors without a session.
	pub auth: &'static str,
}

/// Prayer-time and activity widget labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WidgetLabels {
	pub current: &'static str,
	pub upcoming: &'static str,
	pub completed: &'static str,
	pub prayer_time: &'static str,
	pub last_activity: &'static str,
}

/// Top header labels: salutation and the outlet picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeaderLabels {
	pub hi: &'static str,
	pub select_outlet: &'static str,
	/// Shown when no outlet has been picked yet.
	pub central_outlet: &'static str,
}

/// Outlet list and outlet card labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutletLabels {
	pub title: &'static str,
	pub search_placeholder: &'static str,
	pub detail: &'static str,
	pub delivery: &'static str,
	pub pickup: &'static str,
	pub dine_in: &'static str,
	pub load_more: &'static str,
	pub no_more_data: &'static str,
}

/// Part of the day used to pick a greeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPart {
	Morning,
	Afternoon,
	Evening,
}

impl DayPart {
	/// Before 12 is morning, before 18 is afternoon, anything later is evening.
	pub fn from_hour(hour: u32) -> DayPart {
		if hour < 12 {
			DayPart::Morning
		} else if hour < 18 {
			DayPart::Afternoon
		} else {
			DayPart::Evening
		}
	}

	fn key(&self) -> &'static str {
		match self {
			DayPart::Morning => "morning",
			DayPart::Afternoon => "afternoon",
			DayPart::Evening => "evening",
		}
	}
}

pub fn nav_labels(locale: Locale) -> NavLabels {
	match locale {
		Locale::Id => NavLabels {
			home: "Beranda",
			menu: "Menu",
			vip: "VIP",
			merch: "Merch",
			profile: "Saya",
			auth: "Daftar atau Masuk",
		},
		Locale::En => NavLabels {
			home: "Home",
			menu: "Menu",
			vip: "VIP",
			merch: "Merch",
			profile: "Me",
			auth: "Register or Login",
		},
		Locale::Ar => NavLabels {
			home: "الرئيسية",
			menu: "القائمة",
			vip: "كبار الشخصيات",
			merch: "سلع",
			profile: "أنا",
			auth: "سجل أو دخول",
		},
		Locale::Fr => NavLabels {
			home: "Accueil",
			menu: "Menu",
			vip: "VIP",
			merch: "Boutique",
			profile: "Moi",
			auth: "S'inscrire",
		},
		Locale::Kr => NavLabels {
			home: "홈",
			menu: "메뉴",
			vip: "VIP",
			merch: "굿즈",
			profile: "나",
			auth: "가입하기",
		},
		Locale::Jp => NavLabels {
			home: "ホーム",
			menu: "メニュー",
			vip: "VIP",
			merch: "グッズ",
			profile: "マイ",
			auth: "登録する",
		},
	}
}

pub fn widget_labels(locale: Locale) -> WidgetLabels {
	match locale {
		Locale::Id => WidgetLabels {
			current: "Sekarang",
			upcoming: "Berikutnya",
			completed: "Selesai",
			prayer_time: "Waktu Sholat",
			last_activity: "Aktivitas Terakhir",
		},
		Locale::En => WidgetLabels {
			current: "Now",
			upcoming: "Next",
			completed: "Done",
			prayer_time: "Prayer Time",
			last_activity: "Last Activity",
		},
		Locale::Ar => WidgetLabels {
			current: "الآن",
			upcoming: "القادم",
			completed: "تم",
			prayer_time: "وقت الصلاة",
			last_activity: "آخر نشاط",
		},
		Locale::Fr => WidgetLabels {
			current: "Maint.",
			upcoming: "Suiv.",
			completed: "Fait",
			prayer_time: "Heure de Prière",
			last_activity: "Dernière Activité",
		},
		Locale::Kr => WidgetLabels {
			current: "현재",
			upcoming: "다음",
			completed: "완료",
			prayer_time: "기도 시간",
			last_activity: "마지막 활동",
		},
		Locale::Jp => WidgetLabels {
			current: "現在",
			upcoming: "次",
			completed: "完了",
			prayer_time: "礼拝時間",
			last_activity: "最後の活動",
		},
	}
}

fn greeting_for(locale: Locale, part: DayPart) -> &'static str {
	use DayPart::*;
	match (locale, part) {
		(Locale::Id, Morning) => "Selamat Pagi",
		(Locale::Id, Afternoon) => "Selamat Siang",
		(Locale::Id, Evening) => "Selamat Malam",
		(Locale::En, Morning) => "Good Morning",
		(Locale::En, Afternoon) => "Good Afternoon",
		(Locale::En, Evening) => "Good Evening",
		(Locale::Ar, Morning) => "صباح الخير",
		(Locale::Ar, Afternoon | Evening) => "مساء الخير",
		(Locale::Fr, Morning) => "Bonjour",
		(Locale::Fr, Afternoon) => "Bon après-midi",
		(Locale::Fr, Evening) => "Bonsoir",
		(Locale::Kr, Morning) => "좋은 아침",
		(Locale::Kr, Afternoon) => "좋은 오후",
		(Locale::Kr, Evening) => "좋은 저녁",
		(Locale::Jp, Morning) => "おはよう",
		(Locale::Jp, Afternoon) => "こんにちは",
		(Locale::Jp, Evening) => "こんばんは",
	}
}

pub fn header_labels(locale: Locale) -> HeaderLabels {
	match locale {
		Locale::Id => HeaderLabels {
			hi: "Hai,",
			select_outlet: "Pilih Outlet",
			central_outlet: "Outlet Pusat Jakarta",
		},
		Locale::En => HeaderLabels {
			hi: "Hi,",
			select_outlet: "Select Outlet",
			central_outlet: "Jakarta Central Outlet",
		},
		Locale::Ar => HeaderLabels {
			hi: "مرحباً،",
			select_outlet: "اختر الفرع",
			central_outlet: "فرع جاكرتا الرئيسي",
		},
		Locale::Fr => HeaderLabels {
			hi: "Salut,",
			select_outlet: "Choisir un point de vente",
			central_outlet: "Point de vente central de Jakarta",
		},
		Locale::Kr => HeaderLabels {
			hi: "안녕,",
			select_outlet: "매장 선택",
			central_outlet: "자카르타 중앙 매장",
		},
		Locale::Jp => HeaderLabels {
			hi: "こんにちは、",
			select_outlet: "店舗を選択",
			central_outlet: "ジャカルタ中央店",
		},
	}
}

pub fn outlet_labels(locale: Locale) -> OutletLabels {
	match locale {
		Locale::Id => OutletLabels {
			title: "Daftar Outlet Herbal",
			search_placeholder: "Cari lokasi outlet...",
			detail: "Detail",
			delivery: "Delivery",
			pickup: "Pickup",
			dine_in: "Dine-In",
			load_more: "Lihat outlet lainnya",
			no_more_data: "Semua outlet telah ditampilkan",
		},
		Locale::En => OutletLabels {
			title: "Herbal Outlet List",
			search_placeholder: "Search outlet location...",
			detail: "Detail",
			delivery: "Delivery",
			pickup: "Pickup",
			dine_in: "Dine-In",
			load_more: "View more outlets",
			no_more_data: "All outlets loaded",
		},
		Locale::Ar => OutletLabels {
			title: "قائمة منافذ الأعشاب",
			search_placeholder: "البحث عن موقع المنفذ...",
			detail: "تفاصيل",
			delivery: "توصيل",
			pickup: "استلام",
			dine_in: "محلي",
			load_more: "عرض المزيد من المنافذ",
			no_more_data: "تم تحميل جميع المنافذ",
		},
		Locale::Fr => OutletLabels {
			title: "Liste des Points de Vente",
			search_placeholder: "Rechercher un emplacement...",
			detail: "Détails",
			delivery: "Livraison",
			pickup: "Retrait",
			dine_in: "Sur place",
			load_more: "Voir plus de points de vente",
			no_more_data: "Tous les points de vente affichés",
		},
		Locale::Kr => OutletLabels {
			title: "허브 매장 목록",
			search_placeholder: "매장 위치 검색...",
			detail: "상세",
			delivery: "배달",
			pickup: "픽업",
			dine_in: "매장",
			load_more: "매장 더 보기",
			no_more_data: "모든 매장이 로드되었습니다",
		},
		Locale::Jp => OutletLabels {
			title: "ハーブ店舗一覧",
			search_placeholder: "店舗の場所を検索...",
			detail: "詳細",
			delivery: "デリバリー",
			pickup: "ピックアップ",
			dine_in: "店内",
			load_more: "他の店舗を見る",
			no_more_data: "すべての店舗を表示しました",
		},
	}
}

/// Time-of-day greeting for a 24-hour clock hour.
pub fn greeting(locale: Locale, hour: u32) -> &'static str {
	greeting_for(locale, DayPart::from_hour(hour))
}

/// Look up a label by dot-notation key.
///
/// Unknown keys return the key itself so a missing label is visible in the
/// UI rather than blank.
///
/// ```
/// use jamu_common_i18n::{t, Locale};
///
/// assert_eq!(t(Locale::Fr, "widget.prayer_time"), "Heure de Prière");
/// assert_eq!(t(Locale::Fr, "no.such.key"), "no.such.key");
/// ```
pub fn t(locale: Locale, key: &str) -> String {
	lookup(locale, key)
		.map(str::to_string)
		.unwrap_or_else(|| key.to_string())
}

fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
	let (section, rest) = key.split_once('.')?;
	match section {
		"nav" => {
			let nav = nav_labels(locale);
			match rest {
				"home" => Some(nav.home),
				"menu" => Some(nav.menu),
				"vip" => Some(nav.vip),
				"merch" => Some(nav.merch),
				"profile" => Some(nav.profile),
				"auth" => Some(nav.auth),
				_ => None,
			}
		}
		"widget" => {
			let widget = widget_labels(locale);
			match rest {
				"status.current" => Some(widget.current),
				"status.upcoming" => Some(widget.upcoming),
				"status.completed" => Some(widget.completed),
				"prayer_time" => Some(widget.prayer_time),
				"last_activity" => Some(widget.last_activity),
				_ => None,
			}
		}
		"header" => {
			let header = header_labels(locale);
			match rest {
				"hi" => Some(header.hi),
				"select_outlet" => Some(header.select_outlet),
				"central_outlet" => Some(header.central_outlet),
				_ => None,
			}
		}
		"outlet" => {
			let outlet = outlet_labels(locale);
			match rest {
				"title" => Some(outlet.title),
				"search_placeholder" => Some(outlet.search_placeholder),
				"detail" => Some(outlet.detail),
				"service.delivery" => Some(outlet.delivery),
				"service.pickup" => Some(outlet.pickup),
				"service.dine_in" => Some(outlet.dine_in),
				"load_more" => Some(outlet.load_more),
				"no_more_data" => Some(outlet.no_more_data),
				_ => None,
			}
		}
		"greeting" => [DayPart::Morning, DayPart::Afternoon, DayPart::Evening]
			.into_iter()
			.find(|part| part.key() == rest)
			.map(|part| greeting_for(locale, part)),
		_ => None,
	}
}
