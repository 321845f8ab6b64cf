// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Outlet directory and "load more" paging.
//!
//! The storefront lists outlets ten at a time. Each "load more" extends the
//! visible window to `min(visible + 10, total)` and stops offering more once
//! every outlet is shown. [`OutletDirectory::page`] expresses the same rule as
//! an offset/limit window so clients can fetch the next slice directly.

use serde::Serialize;

/// Number of outlets seeded into the default directory.
pub const SEEDED_OUTLET_COUNT: u32 = 30;

/// Outlets per page when the client does not ask for a size.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Largest page a client may request.
pub const MAX_PAGE_SIZE: usize = 50;

/// Order modes an outlet supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Services {
	pub delivery: bool,
	pub pickup: bool,
	pub dine_in: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outlet {
	pub id: u32,
	pub name: String,
	pub address: String,
	pub is_favorite: bool,
	pub services: Services,
}

impl Outlet {
	/// Menu page scoped to this outlet; where selecting the outlet leads.
	pub fn menu_href(&self) -> String {
		format!("/menu-list?outletId={}", self.id)
	}

	pub fn detail_href(&self) -> String {
		format!("/menu/{}", self.id)
	}
}

/// Build the `index`-th (zero based) seeded outlet.
fn seeded_outlet(index: u32) -> Outlet {
	let branch = if index % 2 == 0 { "Center" } else { "Garden" };
	let floor = if index % 3 == 0 { "Ground" } else { "1" };
	let block = char::from(b'A' + (index % 5) as u8);
	let number = index + 1;

	Outlet {
		id: number,
		name: format!("Herbal House {branch} - Branch {number}"),
		address: format!("Jl. Kesehatan Alami No. {number}, Lantai {floor}, Blok {block}"),
		is_favorite: index < 3,
		services: Services {
			delivery: true,
			pickup: true,
			dine_in: index % 2 == 0,
		},
	}
}

/// One window of the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutletPage<'a> {
	pub outlets: &'a [Outlet],
	pub offset: usize,
	pub total: usize,
	pub has_more: bool,
	/// Offset of the following page, when there is one.
	pub next_offset: Option<usize>,
}

/// Read-only list of outlets in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutletDirectory {
	outlets: Vec<Outlet>,
}

impl OutletDirectory {
	pub fn new(outlets: Vec<Outlet>) -> Self {
		Self { outlets }
	}

	/// The storefront's demo outlets, ids 1 through [`SEEDED_OUTLET_COUNT`].
	pub fn seeded() -> Self {
		Self::new((0..SEEDED_OUTLET_COUNT).map(seeded_outlet).collect())
	}

	pub fn len(&self) -> usize {
		self.outlets.len()
	}

	pub fn is_empty(&self) -> bool {
		self.outlets.is_empty()
	}

	pub fn get(&self, id: u32) -> Option<&Outlet> {
		self.outlets.iter().find(|outlet| outlet.id == id)
	}

	/// Outlets `[offset, min(offset + limit, total))`. An offset past the end
	/// yields an empty page with nothing more to load.
	pub fn page(&self, offset: usize, limit: usize) -> OutletPage<'_> {
		let total = self.outlets.len();
		let start = offset.min(total);
		let end = offset.saturating_add(limit).min(total);
		let has_more = end < total;

		OutletPage {
			outlets: &self.outlets[start..end],
			offset: start,
			total,
			has_more,
			next_offset: has_more.then_some(end),
		}
	}
}
