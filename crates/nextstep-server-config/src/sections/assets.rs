// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Static asset directory configuration.

use std::path::PathBuf;

use serde::Deserialize;

fn default_dir() -> PathBuf {
	PathBuf::from("./public")
}

/// Where images, stylesheets and the favicon are served from.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetsConfig {
	pub dir: PathBuf,
}

impl Default for AssetsConfig {
	fn default() -> Self {
		Self { dir: default_dir() }
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetsConfigLayer {
	#[serde(default)]
	pub dir: Option<PathBuf>,
}

impl AssetsConfigLayer {
	pub fn merge(&mut self, other: AssetsConfigLayer) {
		if other.dir.is_some() {
			self.dir = other.dir;
		}
	}

	pub fn finalize(self) -> AssetsConfig {
		AssetsConfig {
			dir: self.dir.unwrap_or_else(default_dir),
		}
	}
}
