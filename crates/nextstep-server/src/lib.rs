// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! NextStep site server.
//!
//! Serves the localized study-abroad marketing site. Every page lives under a
//! locale prefix (`/en`, `/ar/about`); the locale middleware redirects
//! unprefixed requests based on `Accept-Language`.

pub mod api;
pub mod error;
pub mod locale_middleware;
pub mod render;
pub mod routes;

pub use api::{create_app_state, create_router, AppState};
pub use error::ServerError;
pub use nextstep_server_config::ServerConfig;
