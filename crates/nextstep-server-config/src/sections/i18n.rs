// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale routing and dictionary configuration.

use std::path::PathBuf;

use nextstep_common_i18n::{
	I18nError, LocaleSet, RoutingRules, DEFAULT_EXCLUDED_PREFIXES, DEFAULT_LOCALE, LOCALES,
};
use serde::Deserialize;

fn default_locales() -> Vec<String> {
	LOCALES.iter().map(|l| l.code.to_string()).collect()
}

fn default_excluded_prefixes() -> Vec<String> {
	DEFAULT_EXCLUDED_PREFIXES
		.iter()
		.map(|p| p.to_string())
		.collect()
}

/// Locale configuration (runtime, fully resolved).
#[derive(Debug, Clone, PartialEq)]
pub struct I18nConfig {
	/// Supported locale codes in switcher order.
	pub locales: Vec<String>,
	/// Locale used when no preference can be determined.
	pub default_locale: String,
	/// Read bundles from `<dir>/<locale>.json` instead of the embedded ones.
	pub bundle_dir: Option<PathBuf>,
	/// Keep parsed dictionaries for the life of the process.
	pub cache_dictionaries: bool,
	/// Refuse to start when any configured locale's bundle fails to load.
	pub strict_bundles: bool,
	/// Path prefixes that bypass locale routing.
	pub excluded_prefixes: Vec<String>,
}

impl Default for I18nConfig {
	fn default() -> Self {
		I18nConfigLayer::default().finalize()
	}
}

impl I18nConfig {
	/// Build the locale set shared by routing and rendering.
	pub fn locale_set(&self) -> Result<LocaleSet, I18nError> {
		LocaleSet::new(&self.locales, &self.default_locale)
	}

	/// Build the routing rules for the locale middleware.
	pub fn routing_rules(&self) -> Result<RoutingRules, I18nError> {
		Ok(RoutingRules::new(self.locale_set()?)
			.with_excluded_prefixes(self.excluded_prefixes.clone()))
	}
}

/// Locale configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct I18nConfigLayer {
	#[serde(default)]
	pub locales: Option<Vec<String>>,
	#[serde(default)]
	pub default_locale: Option<String>,
	#[serde(default)]
	pub bundle_dir: Option<PathBuf>,
	#[serde(default)]
	pub cache_dictionaries: Option<bool>,
	#[serde(default)]
	pub strict_bundles: Option<bool>,
	#[serde(default)]
	pub excluded_prefixes: Option<Vec<String>>,
}

impl I18nConfigLayer {
	pub fn merge(&mut self, other: I18nConfigLayer) {
		if other.locales.is_some() {
			self.locales = other.locales;
		}
		if other.default_locale.is_some() {
			self.default_locale = other.default_locale;
		}
		if other.bundle_dir.is_some() {
			self.bundle_dir = other.bundle_dir;
		}
		if other.cache_dictionaries.is_some() {
			self.cache_dictionaries = other.cache_dictionaries;
		}
		if other.strict_bundles.is_some() {
			self.strict_bundles = other.strict_bundles;
		}
		if other.excluded_prefixes.is_some() {
			self.excluded_prefixes = other.excluded_prefixes;
		}
	}

	pub fn finalize(self) -> I18nConfig {
		I18nConfig {
			locales: self.locales.unwrap_or_else(default_locales),
			default_locale: self
				.default_locale
				.unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
			bundle_dir: self.bundle_dir,
			cache_dictionaries: self.cache_dictionaries.unwrap_or(true),
			strict_bundles: self.strict_bundles.unwrap_or(false),
			excluded_prefixes: self
				.excluded_prefixes
				.unwrap_or_else(default_excluded_prefixes),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_values() {
		let config = I18nConfigLayer::default().finalize();
		assert_eq!(config.locales, vec!["en", "ar", "fr", "ru", "hi"]);
		assert_eq!(config.default_locale, "ar");
		assert!(config.bundle_dir.is_none());
		assert!(config.cache_dictionaries);
		assert!(!config.strict_bundles);
		assert!(config.excluded_prefixes.contains(&"/api".to_string()));
	}

	#[test]
	fn test_default_config_builds_locale_set() {
		let set = I18nConfig::default().locale_set().unwrap();
		assert_eq!(set.default_locale(), "ar");
		assert_eq!(set.len(), 5);
	}

	#[test]
	fn test_default_outside_locales_is_rejected() {
		let config = I18nConfigLayer {
			locales: Some(vec!["en".to_string(), "fr".to_string()]),
			default_locale: Some("ar".to_string()),
			..Default::default()
		}
		.finalize();
		assert_eq!(
			config.locale_set().unwrap_err(),
			I18nError::DefaultNotInSet("ar".to_string())
		);
	}

	#[test]
	fn test_routing_rules_use_configured_exclusions() {
		let config = I18nConfigLayer {
			excluded_prefixes: Some(vec!["/static".to_string()]),
			..Default::default()
		}
		.finalize();
		let rules = config.routing_rules().unwrap();
		assert_eq!(rules.excluded_prefixes(), ["/static".to_string()]);
	}

	#[test]
	fn test_merge_overwrites_only_set_fields() {
		let mut base = I18nConfigLayer {
			default_locale: Some("en".to_string()),
			cache_dictionaries: Some(false),
			..Default::default()
		};
		base.merge(I18nConfigLayer {
			default_locale: Some("fr".to_string()),
			..Default::default()
		});
		assert_eq!(base.default_locale.as_deref(), Some("fr"));
		assert_eq!(base.cache_dictionaries, Some(false));
	}

	#[test]
	fn test_deserialize_from_toml() {
		let layer: I18nConfigLayer = toml::from_str(
			r#"
locales = ["en", "ar", "fr"]
default_locale = "en"
strict_bundles = true
"#,
		)
		.unwrap();
		let config = layer.finalize();
		assert_eq!(config.locales, vec!["en", "ar", "fr"]);
		assert_eq!(config.default_locale, "en");
		assert!(config.strict_bundles);
	}
}
