// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Contact form placeholder.
//!
//! Submissions are validated and acknowledged. Nothing is stored or sent.

use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::error::ServerError;

/// Contact form payload.
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub email: String,
	/// Optional phone number.
	#[serde(default)]
	pub number: Option<String>,
	#[serde(default)]
	pub message: String,
}

impl ContactRequest {
	fn validate(&self) -> Result<(), ServerError> {
		for (field, value) in [
			("name", &self.name),
			("email", &self.email),
			("message", &self.message),
		] {
			if value.trim().is_empty() {
				return Err(ServerError::BadRequest(format!("{field} is required")));
			}
		}
		if !self.email.contains('@') {
			return Err(ServerError::BadRequest("email is invalid".to_string()));
		}
		Ok(())
	}
}

#[derive(Debug, Serialize)]
pub struct ContactAccepted {
	pub status: &'static str,
}

/// POST /api/contact
pub async fn submit_contact(
	payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ContactAccepted>), ServerError> {
	let Json(request) = payload.map_err(|e| ServerError::BadRequest(e.body_text()))?;
	request.validate()?;

	tracing::info!(
		has_number = request.number.as_deref().is_some_and(|n| !n.trim().is_empty()),
		message_len = request.message.len(),
		"contact request received"
	);

	Ok((
		StatusCode::ACCEPTED,
		Json(ContactAccepted { status: "received" }),
	))
}
