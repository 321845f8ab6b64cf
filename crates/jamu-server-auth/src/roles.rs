// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Role entries carried on session tokens.
//!
//! The authentication collaborator emits roles in several shapes: a bare
//! string, or an object naming the role under `name`, `slug` or `role`.
//! [`RoleEntry`] captures those shapes at the deserialization boundary and
//! [`RoleEntry::normalize`] collapses them into a lowercase
//! [`NormalizedRole`] before any comparison.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Role names that unlock admin-gated routes by default.
pub const PRIVILEGED_ROLES: &[&str] = &["admin", "superadmin"];

/// Object-shaped role entry. Non-string fields are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleObject {
	pub name: Option<String>,
	pub slug: Option<String>,
	pub role: Option<String>,
}

/// A role entry as found on the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleEntry {
	Name(String),
	Object(RoleObject),
	/// Numbers, nulls, arrays and other shapes nobody should emit.
	Unrecognized,
}

impl RoleEntry {
	pub fn from_value(value: &Value) -> RoleEntry {
		match value {
			Value::String(s) => RoleEntry::Name(s.clone()),
			Value::Object(map) => {
				let field = |key: &str| map.get(key).and_then(Value::as_str).map(str::to_string);
				RoleEntry::Object(RoleObject {
					name: field("name"),
					slug: field("slug"),
					role: field("role"),
				})
			}
			_ => RoleEntry::Unrecognized,
		}
	}

	/// Collapse the entry into its comparable form.
	///
	/// Objects use the first present of `name`, `slug`, `role`; an object with
	/// none of them, or an unrecognized entry, normalizes to the empty role.
	pub fn normalize(&self) -> NormalizedRole {
		let raw = match self {
			RoleEntry::Name(name) => name.as_str(),
			RoleEntry::Object(obj) => obj
				.name
				.as_deref()
				.or(obj.slug.as_deref())
				.or(obj.role.as_deref())
				.unwrap_or(""),
			RoleEntry::Unrecognized => "",
		};
		NormalizedRole::new(raw)
	}
}

impl<'de> Deserialize<'de> for RoleEntry {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let value = Value::deserialize(deserializer)?;
		Ok(RoleEntry::from_value(&value))
	}
}

/// Deserialize a `roles` claim, yielding an empty list for anything that is
/// not an array.
pub(crate) fn deserialize_roles<'de, D>(deserializer: D) -> Result<Vec<RoleEntry>, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Option::<Value>::deserialize(deserializer)?;
	Ok(match value {
		Some(Value::Array(items)) => items.iter().map(RoleEntry::from_value).collect(),
		_ => Vec::new(),
	})
}

/// A lowercase role name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NormalizedRole(String);

impl NormalizedRole {
	pub fn new(raw: &str) -> Self {
		Self(raw.to_lowercase())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl fmt::Display for NormalizedRole {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}
