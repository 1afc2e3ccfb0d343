// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Client-side configuration endpoint.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::AppState;

#[derive(Debug, Serialize)]
pub struct ClientLocale {
	pub code: &'static str,
	pub name: &'static str,
	pub dir: &'static str,
}

/// Values the browser needs but must not hard-code.
#[derive(Debug, Serialize)]
pub struct ClientConfig {
	/// Passed through unchanged from `URL_SCRIPT_SHEET`.
	pub script_sheet_url: Option<String>,
	pub default_locale: &'static str,
	pub locales: Vec<ClientLocale>,
}

/// GET /api/config
pub async fn get_client_config(State(state): State<AppState>) -> Json<ClientConfig> {
	let locales = state.rules.locales();
	Json(ClientConfig {
		script_sheet_url: state.script_sheet_url.clone(),
		default_locale: locales.default_locale(),
		locales: locales
			.iter()
			.map(|info| ClientLocale {
				code: info.code,
				name: info.native_name,
				dir: info.direction.as_html_dir(),
			})
			.collect(),
	})
}
