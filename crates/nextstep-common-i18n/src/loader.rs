// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Dictionary loading with locale fallback.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use crate::bundle::BundleSource;
use crate::dictionary::Dictionary;
use crate::error::DictionaryError;
use crate::locale::LocaleSet;

/// Loads the dictionary for a locale.
///
/// Unsupported locale codes are silently replaced by the default locale.
/// [`DictionaryLoader::load`] never fails: a missing or malformed bundle is
/// logged and an empty [`Dictionary`] is returned, so page handlers must
/// treat every key as optional.
///
/// With [`DictionaryLoader::with_cache`], successfully parsed bundles are kept
/// for the life of the process. Bundles are immutable at runtime, so the
/// cache is never invalidated.
pub struct DictionaryLoader {
	locales: LocaleSet,
	source: Arc<dyn BundleSource>,
	cache: Option<RwLock<HashMap<&'static str, Arc<Dictionary>>>>,
}

impl DictionaryLoader {
	pub fn new(locales: LocaleSet, source: impl BundleSource + 'static) -> Self {
		Self {
			locales,
			source: Arc::new(source),
			cache: None,
		}
	}

	/// Enable the process-wide read-through cache.
	pub fn with_cache(mut self) -> Self {
		self.cache = Some(RwLock::new(HashMap::new()));
		self
	}

	pub fn locales(&self) -> &LocaleSet {
		&self.locales
	}

	pub fn source_name(&self) -> &'static str {
		self.source.name()
	}

	pub fn is_cached(&self) -> bool {
		self.cache.is_some()
	}

	/// Load the dictionary for `locale`, degrading to an empty one on failure.
	pub fn load(&self, locale: &str) -> Arc<Dictionary> {
		match self.try_load(locale) {
			Ok(dictionary) => dictionary,
			Err(e) => {
				warn!(locale = e.locale(), error = %e, "Missing dictionary, rendering with defaults");
				Arc::new(Dictionary::empty())
			}
		}
	}

	/// Load the dictionary for `locale`, reporting bundle failures.
	///
	/// Unsupported codes still fall back to the default locale.
	pub fn try_load(&self, locale: &str) -> Result<Arc<Dictionary>, DictionaryError> {
		let resolved = self.locales.normalize(locale);
		if resolved != locale {
			debug!(requested = locale, resolved, "unsupported locale, using default");
		}

		if let Some(cached) = self.cached(resolved) {
			return Ok(cached);
		}

		let text = self.source.fetch(resolved)?;
		let dictionary = Dictionary::from_json(&text).map_err(|source| DictionaryError::Malformed {
			locale: resolved.to_string(),
			source,
		})?;
		let dictionary = Arc::new(dictionary);

		if let Some(cache) = &self.cache {
			if let Ok(mut entries) = cache.write() {
				entries.insert(resolved, Arc::clone(&dictionary));
			}
		}

		Ok(dictionary)
	}

	/// Load every supported locale's bundle, returning the first failure.
	pub fn verify_all(&self) -> Result<(), DictionaryError> {
		for code in self.locales.codes() {
			self.try_load(code)?;
		}
		Ok(())
	}

	fn cached(&self, locale: &str) -> Option<Arc<Dictionary>> {
		let cache = self.cache.as_ref()?;
		let entries = cache.read().ok()?;
		entries.get(locale).cloned()
	}
}

impl std::fmt::Debug for DictionaryLoader {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("DictionaryLoader")
			.field("locales", &self.locales)
			.field("source", &self.source.name())
			.field("cached", &self.cache.is_some())
			.finish()
	}
}
