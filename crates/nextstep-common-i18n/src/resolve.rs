// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale negotiation from the `Accept-Language` header.

use crate::locale::LocaleSet;

/// Primary language subtags of an `Accept-Language` header, in header order.
///
/// Quality values are stripped and ignored: `fr-FR;q=0.5, en` yields `fr`
/// then `en`. Empty entries are skipped.
pub fn primary_subtags(header: &str) -> impl Iterator<Item = &str> {
	header.split(',').filter_map(|entry| {
		let tag = entry.split(';').next().unwrap_or(entry).trim();
		let primary = tag.split('-').next().unwrap_or(tag).trim();
		(!primary.is_empty()).then_some(primary)
	})
}

/// Pick the locale to redirect a visitor to.
///
/// Resolution order:
/// 1. The first primary subtag in the header that is in `locales`
/// 2. The default locale of `locales`
///
/// # Example
///
/// ```
/// use nextstep_common_i18n::{negotiate_locale, LocaleSet};
///
/// let locales = LocaleSet::default();
/// assert_eq!(negotiate_locale(Some("fr-FR,en;q=0.8"), &locales), "fr");
/// assert_eq!(negotiate_locale(Some("de-DE"), &locales), "ar");
/// assert_eq!(negotiate_locale(None, &locales), "ar");
/// ```
pub fn negotiate_locale(accept_language: Option<&str>, locales: &LocaleSet) -> &'static str {
	if let Some(header) = accept_language {
		if let Some(locale) = primary_subtags(header).find_map(|tag| locales.match_subtag(tag)) {
			return locale;
		}
	}

	locales.default_locale()
}
