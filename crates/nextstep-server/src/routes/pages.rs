// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Localized page handlers.

use axum::{
	extract::{Path, State},
	http::{StatusCode, Uri},
	response::{Html, IntoResponse, Response},
	Json,
};
use tracing::debug;

use crate::api::AppState;
use crate::error::ErrorResponse;
use crate::render::{self, PageContext};

/// GET /{lang}
pub async fn home(State(state): State<AppState>, Path(lang): Path<String>) -> Response {
	render_page(&state, &lang, "", render::home_page)
}

/// GET /{lang}/about
pub async fn about(State(state): State<AppState>, Path(lang): Path<String>) -> Response {
	render_page(&state, &lang, "/about", render::about_page)
}

/// Fallback for unrouted paths.
///
/// Under a supported locale prefix this is a localized 404 page; anything
/// else (only reachable for excluded paths) gets a JSON 404.
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
	let path = uri.path();
	match state.rules.locale_of(path) {
		Some(lang) => {
			let sub_path = &path[1 + lang.len()..];
			let mut response = render_page(&state, lang, sub_path, render::not_found_page);
			*response.status_mut() = StatusCode::NOT_FOUND;
			response
		}
		None => (
			StatusCode::NOT_FOUND,
			Json(ErrorResponse {
				error: "not_found".to_string(),
				message: format!("No route for {path}"),
			}),
		)
			.into_response(),
	}
}

fn render_page(
	state: &AppState,
	lang: &str,
	sub_path: &str,
	page: fn(&PageContext<'_>) -> String,
) -> Response {
	let locales = state.rules.locales();
	let Some(locale) = locales.get(lang) else {
		debug!(lang, "page requested for unsupported locale");
		return (
			StatusCode::NOT_FOUND,
			Html(render::unsupported_language_page(lang)),
		)
			.into_response();
	};

	let dictionary = state.dictionaries.load(locale.code);
	let ctx = PageContext {
		locale,
		locales,
		dictionary: &dictionary,
		sub_path,
		base_url: &state.base_url,
	};
	Html(page(&ctx)).into_response()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::api::create_app_state;
	use nextstep_server_config::ServerConfig;

	fn state() -> AppState {
		create_app_state(&ServerConfig::default()).unwrap()
	}

	#[tokio::test]
	async fn test_unsupported_locale_renders_not_supported_page() {
		let response = home(State(state()), Path("de".to_string())).await;
		assert_eq!(response.status(), StatusCode::NOT_FOUND);
	}

	#[tokio::test]
	async fn test_supported_locale_renders_page() {
		let response = about(State(state()), Path("ru".to_string())).await;
		assert_eq!(response.status(), StatusCode::OK);
	}

	#[tokio::test]
	async fn test_fallback_under_locale_is_localized_404() {
		let uri: Uri = "/fr/blog".parse().unwrap();
		let response = not_found(State(state()), uri).await;
		assert_eq!(response.status(), StatusCode::NOT_FOUND);
		assert_eq!(
			response.headers()["content-type"],
			"text/html; charset=utf-8"
		);
	}
}
