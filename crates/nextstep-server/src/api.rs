// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Application state and router construction.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
	middleware,
	routing::{get, post},
	Router,
};
use nextstep_common_i18n::{DictionaryLoader, DirectoryBundles, EmbeddedBundles, RoutingRules};
use nextstep_server_config::ServerConfig;
use tower_http::services::{ServeDir, ServeFile};

use crate::error::ServerError;
use crate::locale_middleware::route_locale;
use crate::routes::{client_config, contact, health, pages};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
	/// Locale set plus exclusion patterns used by the locale middleware.
	pub rules: Arc<RoutingRules>,
	pub dictionaries: Arc<DictionaryLoader>,
	/// Opaque script-sheet endpoint passed through to the client.
	pub script_sheet_url: Option<String>,
	pub assets_dir: PathBuf,
	/// Public origin for canonical and alternate links, without a trailing `/`.
	pub base_url: String,
}

/// Build the application state from resolved configuration.
///
/// With `strict_bundles` enabled, every configured locale's bundle is loaded
/// once and the first failure is returned.
pub fn create_app_state(config: &ServerConfig) -> Result<AppState, ServerError> {
	let rules = config.i18n.routing_rules()?;
	let locales = rules.locales().clone();
	tracing::debug!(
		excluded_prefixes = ?rules.excluded_prefixes(),
		"locale routing rules built"
	);

	let mut loader = match &config.i18n.bundle_dir {
		Some(dir) => DictionaryLoader::new(locales, DirectoryBundles::new(dir)),
		None => DictionaryLoader::new(locales, EmbeddedBundles::site()),
	};
	if config.i18n.cache_dictionaries {
		loader = loader.with_cache();
	}

	if config.i18n.strict_bundles {
		loader.verify_all()?;
		tracing::info!(source = loader.source_name(), "all dictionary bundles verified");
	}

	Ok(AppState {
		rules: Arc::new(rules),
		dictionaries: Arc::new(loader),
		script_sheet_url: config.integrations.script_sheet_url.clone(),
		assets_dir: config.assets.dir.clone(),
		base_url: config.http.base_url.clone(),
	})
}

/// Build the router with every route behind the locale middleware.
pub fn create_router(state: AppState) -> Router {
	let favicon = state.assets_dir.join("favicon.ico");

	Router::new()
		.route("/health", get(health::health_check))
		.route("/api/config", get(client_config::get_client_config))
		.route("/api/contact", post(contact::submit_contact))
		.route("/{lang}", get(pages::home))
		.route("/{lang}/", get(pages::home))
		.route("/{lang}/about", get(pages::about))
		.nest_service("/_assets", ServeDir::new(&state.assets_dir))
		.route_service("/favicon.ico", ServeFile::new(favicon))
		.fallback(pages::not_found)
		.layer(middleware::from_fn_with_state(state.clone(), route_locale))
		.with_state(state)
}
