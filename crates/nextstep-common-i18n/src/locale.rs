// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale metadata, direction support and the configured locale set.

use crate::error::I18nError;

/// Text direction for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
	/// Left-to-right (e.g., English, French)
	Ltr,
	/// Right-to-left (e.g., Arabic)
	Rtl,
}

impl Direction {
	/// Returns the HTML `dir` attribute value.
	pub fn as_html_dir(&self) -> &'static str {
		match self {
			Direction::Ltr => "ltr",
			Direction::Rtl => "rtl",
		}
	}

	/// Returns the CSS `text-align` value for the start of text.
	pub fn text_align_start(&self) -> &'static str {
		match self {
			Direction::Ltr => "left",
			Direction::Rtl => "right",
		}
	}
}

/// Metadata about a locale the site knows how to serve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleInfo {
	/// ISO 639-1 language code, also used as the URL prefix
	pub code: &'static str,
	/// English name of the language
	pub name: &'static str,
	/// Native name of the language, shown in the language switcher
	pub native_name: &'static str,
	/// Text direction
	pub direction: Direction,
}

/// Default locale of the built-in locale set.
pub const DEFAULT_LOCALE: &str = "ar";

/// All locales the site has metadata and bundles for, in switcher order.
pub const LOCALES: &[LocaleInfo] = &[
	LocaleInfo {
		code: "en",
		name: "English",
		native_name: "English",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "ar",
		name: "Arabic",
		native_name: "العربية",
		direction: Direction::Rtl,
	},
	LocaleInfo {
		code: "fr",
		name: "French",
		native_name: "Français",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "ru",
		name: "Russian",
		native_name: "Русский",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "hi",
		name: "Hindi",
		native_name: "हिन्दी",
		direction: Direction::Ltr,
	},
];

/// Get metadata for a known locale.
///
/// Returns `None` if the locale is not known.
pub fn locale_info(locale: &str) -> Option<&'static LocaleInfo> {
	LOCALES.iter().find(|l| l.code == locale)
}

/// The ordered set of locales a deployment serves, with exactly one default.
///
/// Built once from configuration and handed to both the routing middleware
/// and the page layout, so the redirect logic and the language switcher can
/// never disagree about which locales exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSet {
	locales: Vec<&'static LocaleInfo>,
	default: &'static LocaleInfo,
}

impl LocaleSet {
	/// Build a locale set from codes in display order and a default code.
	pub fn new<I, S>(codes: I, default_locale: &str) -> Result<Self, I18nError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut locales: Vec<&'static LocaleInfo> = Vec::new();
		for code in codes {
			let code = code.as_ref().trim();
			let info = locale_info(code).ok_or_else(|| I18nError::UnknownLocale(code.to_string()))?;
			if locales.iter().any(|l| l.code == info.code) {
				return Err(I18nError::DuplicateLocale(code.to_string()));
			}
			locales.push(info);
		}

		if locales.is_empty() {
			return Err(I18nError::EmptyLocaleSet);
		}

		let default = locales
			.iter()
			.copied()
			.find(|l| l.code == default_locale)
			.ok_or_else(|| I18nError::DefaultNotInSet(default_locale.to_string()))?;

		Ok(Self { locales, default })
	}

	/// The default locale code.
	pub fn default_locale(&self) -> &'static str {
		self.default.code
	}

	/// Whether `code` is a member of this set (exact, case-sensitive).
	pub fn contains(&self, code: &str) -> bool {
		self.locales.iter().any(|l| l.code == code)
	}

	/// Metadata for `code` if it is a member of this set.
	pub fn get(&self, code: &str) -> Option<&'static LocaleInfo> {
		self.locales.iter().copied().find(|l| l.code == code)
	}

	/// Returns `code` if it is a member of this set, otherwise the default.
	pub fn normalize(&self, code: &str) -> &'static str {
		self.get(code).unwrap_or(self.default).code
	}

	/// Case-insensitive lookup of a primary language subtag.
	pub fn match_subtag(&self, subtag: &str) -> Option<&'static str> {
		self
			.locales
			.iter()
			.find(|l| l.code.eq_ignore_ascii_case(subtag))
			.map(|l| l.code)
	}

	/// Locale metadata in configured order.
	pub fn iter(&self) -> impl Iterator<Item = &'static LocaleInfo> + '_ {
		self.locales.iter().copied()
	}

	/// Locale codes in configured order.
	pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.locales.iter().map(|l| l.code)
	}

	pub fn len(&self) -> usize {
		self.locales.len()
	}

	pub fn is_empty(&self) -> bool {
		self.locales.is_empty()
	}
}

impl Default for LocaleSet {
	/// Every known locale, with [`DEFAULT_LOCALE`] as the default.
	fn default() -> Self {
		let locales: Vec<&'static LocaleInfo> = LOCALES.iter().collect();
		let default = locale_info(DEFAULT_LOCALE).unwrap_or(&LOCALES[0]);
		Self { locales, default }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_locale_info_found() {
		let info = locale_info("en").unwrap();
		assert_eq!(info.code, "en");
		assert_eq!(info.name, "English");
		assert_eq!(info.direction, Direction::Ltr);
	}

	#[test]
	fn test_locale_info_not_found() {
		assert!(locale_info("xx").is_none());
	}

	#[test]
	fn test_only_arabic_is_right_to_left() {
		for info in LOCALES {
			let expected = if info.code == "ar" {
				Direction::Rtl
			} else {
				Direction::Ltr
			};
			assert_eq!(info.direction, expected, "{}", info.code);
		}
	}

	#[test]
	fn test_direction_html_dir() {
		assert_eq!(Direction::Ltr.as_html_dir(), "ltr");
		assert_eq!(Direction::Rtl.as_html_dir(), "rtl");
		assert_eq!(Direction::Rtl.text_align_start(), "right");
	}

	#[test]
	fn test_default_set_contains_all_known_locales() {
		let set = LocaleSet::default();
		assert_eq!(set.len(), LOCALES.len());
		assert_eq!(set.default_locale(), "ar");
		assert_eq!(
			set.codes().collect::<Vec<_>>(),
			vec!["en", "ar", "fr", "ru", "hi"]
		);
	}

	#[test]
	fn test_new_preserves_order() {
		let set = LocaleSet::new(["fr", "en", "ar"], "en").unwrap();
		assert_eq!(set.codes().collect::<Vec<_>>(), vec!["fr", "en", "ar"]);
		assert_eq!(set.default_locale(), "en");
		assert!(!set.contains("ru"));
	}

	#[test]
	fn test_new_rejects_default_outside_set() {
		let err = LocaleSet::new(["en", "fr"], "ar").unwrap_err();
		assert_eq!(err, I18nError::DefaultNotInSet("ar".to_string()));
	}

	#[test]
	fn test_new_rejects_empty_set() {
		let err = LocaleSet::new(Vec::<String>::new(), "en").unwrap_err();
		assert_eq!(err, I18nError::EmptyLocaleSet);
	}

	#[test]
	fn test_new_rejects_unknown_and_duplicate() {
		assert_eq!(
			LocaleSet::new(["en", "de"], "en").unwrap_err(),
			I18nError::UnknownLocale("de".to_string())
		);
		assert_eq!(
			LocaleSet::new(["en", "en"], "en").unwrap_err(),
			I18nError::DuplicateLocale("en".to_string())
		);
	}

	#[test]
	fn test_normalize_substitutes_default() {
		let set = LocaleSet::new(["en", "fr"], "en").unwrap();
		assert_eq!(set.normalize("fr"), "fr");
		assert_eq!(set.normalize("ar"), "en");
		assert_eq!(set.normalize(""), "en");
	}

	#[test]
	fn test_match_subtag_is_case_insensitive() {
		let set = LocaleSet::default();
		assert_eq!(set.match_subtag("FR"), Some("fr"));
		assert_eq!(set.match_subtag("de"), None);
	}
}
