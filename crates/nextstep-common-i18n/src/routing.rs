// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale routing: decide whether a request path needs a locale prefix.
//!
//! Every page URL on the site is prefixed by exactly one supported locale
//! (`/fr/about`). Requests arriving without one are redirected to the best
//! locale for the visitor. Static assets, the API namespace and probes are
//! left alone.

use crate::locale::LocaleSet;
use crate::resolve::negotiate_locale;

/// Path prefixes that bypass locale routing by default.
pub const DEFAULT_EXCLUDED_PREFIXES: &[&str] = &["/_assets", "/api", "/favicon.ico", "/health"];

/// File extensions (case-insensitive) that mark a path as a static asset.
pub const STATIC_ASSET_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "svg", "ico", "css", "js"];

/// Outcome of resolving a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
	/// Serve the request as-is.
	Pass,
	/// Redirect to `target`, which carries the `locale` prefix.
	Redirect {
		locale: &'static str,
		target: String,
	},
}

impl Resolution {
	pub fn is_pass(&self) -> bool {
		matches!(self, Resolution::Pass)
	}
}

/// Data-driven routing rules: the locale set plus the exclusion patterns.
#[derive(Debug, Clone)]
pub struct RoutingRules {
	locales: LocaleSet,
	excluded_prefixes: Vec<String>,
}

impl RoutingRules {
	/// Rules with the default exclusion prefixes.
	pub fn new(locales: LocaleSet) -> Self {
		Self {
			locales,
			excluded_prefixes: DEFAULT_EXCLUDED_PREFIXES
				.iter()
				.map(|p| p.to_string())
				.collect(),
		}
	}

	/// Replace the excluded path prefixes.
	pub fn with_excluded_prefixes<I, S>(mut self, prefixes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.excluded_prefixes = prefixes.into_iter().map(Into::into).collect();
		self
	}

	pub fn locales(&self) -> &LocaleSet {
		&self.locales
	}

	pub fn excluded_prefixes(&self) -> &[String] {
		&self.excluded_prefixes
	}

	/// Whether `path` bypasses locale routing entirely.
	///
	/// Paths ending in one of [`STATIC_ASSET_EXTENSIONS`] always do.
	pub fn is_excluded(&self, path: &str) -> bool {
		if self
			.excluded_prefixes
			.iter()
			.any(|prefix| path.starts_with(prefix.as_str()))
		{
			return true;
		}

		path
			.rsplit_once('.')
			.is_some_and(|(_, ext)| {
				STATIC_ASSET_EXTENSIONS
					.iter()
					.any(|known| known.eq_ignore_ascii_case(ext))
			})
	}

	/// The locale `path` is already prefixed with, if any.
	///
	/// Matches `/<locale>` exactly or `/<locale>/...`; `/english` is not `en`.
	pub fn locale_of(&self, path: &str) -> Option<&'static str> {
		let rest = path.strip_prefix('/')?;
		let segment = rest.split('/').next().unwrap_or(rest);
		self.locales.get(segment).map(|info| info.code)
	}

	/// Resolve a request path against an optional `Accept-Language` header.
	pub fn resolve(&self, path: &str, accept_language: Option<&str>) -> Resolution {
		if self.is_excluded(path) {
			return Resolution::Pass;
		}

		if self.locale_of(path).is_some() {
			return Resolution::Pass;
		}

		let locale = negotiate_locale(accept_language, &self.locales);
		let target = if path.starts_with('/') {
			format!("/{locale}{path}")
		} else {
			format!("/{locale}/{path}")
		};

		Resolution::Redirect { locale, target }
	}
}
