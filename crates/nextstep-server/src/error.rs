// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Server error types and HTTP response conversions.

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use nextstep_common_i18n::{DictionaryError, I18nError};
use serde::Serialize;

/// Server error types.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
	/// Invalid request payload.
	#[error("Invalid request: {0}")]
	BadRequest(String),

	/// The configured locale set is invalid.
	#[error("Locale configuration error: {0}")]
	Locales(#[from] I18nError),

	/// A dictionary bundle failed to load during strict startup checks.
	#[error("Dictionary error: {0}")]
	Dictionary(#[from] DictionaryError),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let (status, error_response) = match &self {
			ServerError::BadRequest(msg) => (
				StatusCode::BAD_REQUEST,
				ErrorResponse {
					error: "bad_request".to_string(),
					message: msg.clone(),
				},
			),
			ServerError::Locales(e) => {
				tracing::error!(error = %e, "locale configuration error");
				internal_error()
			}
			ServerError::Dictionary(e) => {
				tracing::error!(locale = e.locale(), error = %e, "dictionary error");
				internal_error()
			}
		};

		(status, Json(error_response)).into_response()
	}
}

fn internal_error() -> (StatusCode, ErrorResponse) {
	(
		StatusCode::INTERNAL_SERVER_ERROR,
		ErrorResponse {
			error: "internal_error".to_string(),
			message: "An internal error occurred".to_string(),
		},
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_bad_request_status() {
		let response = ServerError::BadRequest("name is required".to_string()).into_response();
		assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	}

	#[test]
	fn test_internal_errors_hide_details() {
		let err = ServerError::Locales(I18nError::EmptyLocaleSet);
		assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
	}
}
