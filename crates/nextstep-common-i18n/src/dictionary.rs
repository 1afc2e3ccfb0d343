// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Localized content dictionaries.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The localized content bundle for one locale.
///
/// A nested JSON object: string keys mapping to strings, nested objects, or
/// arrays of records (team members, services, countries). Every field may be
/// absent, so lookups return `Option` or take a caller-supplied default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary(Map<String, Value>);

impl Dictionary {
	/// A dictionary with no keys.
	pub fn empty() -> Self {
		Self::default()
	}

	/// Parse a bundle. The top level must be a JSON object.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Look up a dotted path such as `hero.title` or `team.team.0.name`.
	///
	/// Numeric segments index into arrays.
	pub fn get(&self, path: &str) -> Option<&Value> {
		let mut segments = path.split('.');
		let first = segments.next()?;
		let mut current = self.0.get(first)?;
		for segment in segments {
			current = match current {
				Value::Object(map) => map.get(segment)?,
				Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
				_ => return None,
			};
		}
		Some(current)
	}

	/// String value at `path`, if present and a string.
	pub fn text(&self, path: &str) -> Option<&str> {
		self.get(path).and_then(Value::as_str)
	}

	/// String value at `path`, or `default` when absent.
	pub fn text_or<'a>(&'a self, path: &str, default: &'a str) -> &'a str {
		self.text(path).unwrap_or(default)
	}

	/// Array at `path`; empty when absent or not an array.
	pub fn list(&self, path: &str) -> &[Value] {
		self
			.get(path)
			.and_then(Value::as_array)
			.map(Vec::as_slice)
			.unwrap_or(&[])
	}
}
