// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) support for the NextStep site.
//!
//! This crate holds everything that decides *which* language a visitor sees
//! and *what* copy is shown in that language:
//!
//! - [`LocaleSet`]: the configured, ordered set of supported locales with
//!   exactly one default. It is the single source of truth shared by the
//!   routing middleware and the language switcher.
//! - [`RoutingRules::resolve`]: decides whether a request path already carries
//!   a locale prefix or must be redirected to one.
//! - [`DictionaryLoader`]: maps a locale to its JSON bundle, substituting the
//!   default locale for unsupported codes and degrading to an empty
//!   [`Dictionary`] when a bundle is missing or malformed.
//!
//! Both LTR and RTL locales are supported (Arabic renders right-to-left).
//!
//! # Example
//!
//! ```
//! use nextstep_common_i18n::{
//! 	DictionaryLoader, EmbeddedBundles, LocaleSet, Resolution, RoutingRules,
//! };
//!
//! let locales = LocaleSet::default();
//! let rules = RoutingRules::new(locales.clone());
//!
//! match rules.resolve("/about", Some("fr-FR,en;q=0.8")) {
//! 	Resolution::Redirect { target, .. } => assert_eq!(target, "/fr/about"),
//! 	Resolution::Pass => unreachable!(),
//! }
//!
//! let loader = DictionaryLoader::new(locales, EmbeddedBundles::site());
//! let dictionary = loader.load("fr");
//! assert!(dictionary.text("hero.title").is_some());
//! ```

mod bundle;
mod dictionary;
mod error;
mod loader;
mod locale;
mod resolve;
mod routing;

pub use bundle::{BundleSource, DirectoryBundles, EmbeddedBundles, SITE_BUNDLES};
pub use dictionary::Dictionary;
pub use error::{DictionaryError, I18nError};
pub use loader::DictionaryLoader;
pub use locale::{
	locale_info, Direction, LocaleInfo, LocaleSet, DEFAULT_LOCALE, LOCALES,
};
pub use resolve::{negotiate_locale, primary_subtags};
pub use routing::{
	Resolution, RoutingRules, DEFAULT_EXCLUDED_PREFIXES, STATIC_ASSET_EXTENSIONS,
};
