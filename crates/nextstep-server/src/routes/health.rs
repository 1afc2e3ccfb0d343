// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Health check handler.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::AppState;

/// Health check response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
	pub status: &'static str,
	pub version: &'static str,
	pub locales: Vec<&'static str>,
	pub default_locale: &'static str,
	/// Where dictionary bundles are read from (`embedded` or `directory`).
	pub dictionary_source: &'static str,
}

/// GET /health - Liveness probe; never redirected by locale routing.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
	let locales = state.rules.locales();
	Json(HealthResponse {
		status: "healthy",
		version: env!("CARGO_PKG_VERSION"),
		locales: locales.codes().collect(),
		default_locale: locales.default_locale(),
		dictionary_source: state.dictionaries.source_name(),
	})
}
