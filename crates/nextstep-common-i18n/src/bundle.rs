// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Where dictionary bundles come from.

use std::borrow::Cow;
use std::path::PathBuf;

use tracing::trace;

use crate::error::DictionaryError;

/// Bundles compiled into the binary, one per known locale.
pub const SITE_BUNDLES: &[(&str, &str)] = &[
	("en", include_str!("../dictionaries/en.json")),
	("ar", include_str!("../dictionaries/ar.json")),
	("fr", include_str!("../dictionaries/fr.json")),
	("ru", include_str!("../dictionaries/ru.json")),
	("hi", include_str!("../dictionaries/hi.json")),
];

/// A source of raw (unparsed) dictionary bundles addressed by locale code.
pub trait BundleSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn fetch(&self, locale: &str) -> Result<Cow<'static, str>, DictionaryError>;
}

/// Bundles held in a static table resolved at build time.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedBundles {
	bundles: &'static [(&'static str, &'static str)],
}

impl EmbeddedBundles {
	pub const fn new(bundles: &'static [(&'static str, &'static str)]) -> Self {
		Self { bundles }
	}

	/// The bundles shipped with the site.
	pub const fn site() -> Self {
		Self::new(SITE_BUNDLES)
	}
}

impl Default for EmbeddedBundles {
	fn default() -> Self {
		Self::site()
	}
}

impl BundleSource for EmbeddedBundles {
	fn name(&self) -> &'static str {
		"embedded"
	}

	fn fetch(&self, locale: &str) -> Result<Cow<'static, str>, DictionaryError> {
		self
			.bundles
			.iter()
			.find(|(code, _)| *code == locale)
			.map(|(_, text)| Cow::Borrowed(*text))
			.ok_or_else(|| DictionaryError::Missing {
				locale: locale.to_string(),
			})
	}
}

/// Bundles read from `<dir>/<locale>.json` on every fetch.
///
/// Lets operators override site copy without a rebuild. Callers only pass
/// locale codes that are members of the configured locale set.
#[derive(Debug, Clone)]
pub struct DirectoryBundles {
	dir: PathBuf,
}

impl DirectoryBundles {
	pub fn new(dir: impl Into<PathBuf>) -> Self {
		Self { dir: dir.into() }
	}

	fn path_for(&self, locale: &str) -> PathBuf {
		self.dir.join(format!("{locale}.json"))
	}
}

impl BundleSource for DirectoryBundles {
	fn name(&self) -> &'static str {
		"directory"
	}

	fn fetch(&self, locale: &str) -> Result<Cow<'static, str>, DictionaryError> {
		let path = self.path_for(locale);
		if !path.exists() {
			return Err(DictionaryError::Missing {
				locale: locale.to_string(),
			});
		}

		trace!(path = %path.display(), "reading dictionary bundle");
		std::fs::read_to_string(&path)
			.map(Cow::Owned)
			.map_err(|source| DictionaryError::Io {
				locale: locale.to_string(),
				path,
				source,
			})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::dictionary::Dictionary;
	use crate::locale::LOCALES;

	#[test]
	fn test_every_known_locale_has_a_parseable_embedded_bundle() {
		let source = EmbeddedBundles::site();
		for info in LOCALES {
			let text = source.fetch(info.code).unwrap();
			let dict = Dictionary::from_json(&text)
				.unwrap_or_else(|e| panic!("bundle {} is malformed: {e}", info.code));
			assert!(dict.text("nav.home").is_some(), "{} lacks nav.home", info.code);
			assert!(dict.text("hero.title").is_some(), "{} lacks hero.title", info.code);
			assert_eq!(dict.list("partners.partners").len(), 7, "{} partner logos", info.code);
			assert_eq!(dict.text("countries.cta.link"), Some("#contact"), "{}", info.code);
		}
	}

	#[test]
	fn test_embedded_missing_locale() {
		let source = EmbeddedBundles::new(&[("en", "{}")]);
		let err = source.fetch("fr").unwrap_err();
		assert!(matches!(err, DictionaryError::Missing { .. }));
		assert_eq!(err.locale(), "fr");
	}

	#[test]
	fn test_directory_reads_locale_file() {
		let dir = tempfile::tempdir().unwrap();
		std::fs::write(dir.path().join("fr.json"), r#"{"nav":{"home":"Accueil"}}"#).unwrap();

		let source = DirectoryBundles::new(dir.path());
		let text = source.fetch("fr").unwrap();
		assert!(text.contains("Accueil"));
	}

	#[test]
	fn test_directory_missing_file() {
		let dir = tempfile::tempdir().unwrap();
		let source = DirectoryBundles::new(dir.path());
		assert!(matches!(
			source.fetch("en").unwrap_err(),
			DictionaryError::Missing { .. }
		));
	}
}
