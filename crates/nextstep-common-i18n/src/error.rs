// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for locale configuration and bundle loading.

use std::path::PathBuf;

/// Errors raised while building a [`crate::LocaleSet`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum I18nError {
	#[error("locale set must contain at least one locale")]
	EmptyLocaleSet,

	#[error("unknown locale '{0}'")]
	UnknownLocale(String),

	#[error("locale '{0}' listed more than once")]
	DuplicateLocale(String),

	#[error("default locale '{0}' is not in the supported locale set")]
	DefaultNotInSet(String),
}

/// Errors raised while fetching or parsing a dictionary bundle.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
	#[error("no dictionary bundle for locale '{locale}'")]
	Missing { locale: String },

	#[error("failed to read dictionary bundle for locale '{locale}' at {path}: {source}")]
	Io {
		locale: String,
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("malformed dictionary bundle for locale '{locale}': {source}")]
	Malformed {
		locale: String,
		#[source]
		source: serde_json::Error,
	},
}

impl DictionaryError {
	/// The locale whose bundle failed to load.
	pub fn locale(&self) -> &str {
		match self {
			DictionaryError::Missing { locale }
			| DictionaryError::Io { locale, .. }
			| DictionaryError::Malformed { locale, .. } => locale,
		}
	}
}
