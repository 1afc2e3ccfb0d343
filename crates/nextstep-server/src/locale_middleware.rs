// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale routing middleware.
//!
//! Every request passes through [`route_locale`] before reaching a handler.
//! Paths that already carry a supported locale prefix, and excluded paths
//! (assets, API, probes), are forwarded untouched. Everything else is
//! answered with a `307 Temporary Redirect` to the same path under the
//! visitor's preferred locale.

use axum::{
	extract::{Request, State},
	http::header::{ACCEPT_LANGUAGE, VARY},
	middleware::Next,
	response::{IntoResponse, Redirect, Response},
};
use nextstep_common_i18n::Resolution;
use tracing::debug;

use crate::api::AppState;

pub async fn route_locale(State(state): State<AppState>, request: Request, next: Next) -> Response {
	let accept_language = request
		.headers()
		.get(ACCEPT_LANGUAGE)
		.and_then(|value| value.to_str().ok());
	let path = request.uri().path();

	match state.rules.resolve(path, accept_language) {
		Resolution::Pass => {
			debug!(path, "locale routing: pass");
			next.run(request).await
		}
		Resolution::Redirect { locale, target } => {
			let location = match request.uri().query() {
				Some(query) => format!("{target}?{query}"),
				None => target,
			};
			debug!(path, locale, accept_language, %location, "locale routing: redirect");
			([(VARY, "Accept-Language")], Redirect::temporary(&location)).into_response()
		}
	}
}
