// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Third-party integration settings passed through to the browser.

use serde::Deserialize;

/// External integrations. Values are opaque and never interpreted server-side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntegrationsConfig {
	/// Endpoint of the spreadsheet script that receives contact requests.
	pub script_sheet_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntegrationsConfigLayer {
	#[serde(default)]
	pub script_sheet_url: Option<String>,
}

impl IntegrationsConfigLayer {
	pub fn merge(&mut self, other: IntegrationsConfigLayer) {
		if other.script_sheet_url.is_some() {
			self.script_sheet_url = other.script_sheet_url;
		}
	}

	pub fn finalize(self) -> IntegrationsConfig {
		IntegrationsConfig {
			script_sheet_url: self.script_sheet_url,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_unset_by_default() {
		assert_eq!(
			IntegrationsConfigLayer::default().finalize().script_sheet_url,
			None
		);
	}

	#[test]
	fn test_merge_keeps_existing_when_other_unset() {
		let mut base = IntegrationsConfigLayer {
			script_sheet_url: Some("https://script.example/exec".to_string()),
		};
		base.merge(IntegrationsConfigLayer::default());
		assert_eq!(
			base.finalize().script_sheet_url.as_deref(),
			Some("https://script.example/exec")
		);
	}
}
