// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Centralized configuration management for the NextStep site server.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`NEXTSTEP_SERVER_*`)
//!
//! # Usage
//!
//! ```ignore
//! use nextstep_server_config::load_config;
//!
//! let config = load_config()?;
//! println!("Server listening on {}:{}", config.http.host, config.http.port);
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::{debug, info};

/// Fully resolved server configuration.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
	pub http: HttpConfig,
	pub i18n: I18nConfig,
	pub assets: AssetsConfig,
	pub logging: LoggingConfig,
	pub integrations: IntegrationsConfig,
}

impl ServerConfig {
	/// Get the socket address string for binding.
	pub fn socket_addr(&self) -> String {
		format!("{}:{}", self.http.host, self.http.port)
	}
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`NEXTSTEP_SERVER_*`, `URL_SCRIPT_SHEET`)
/// 2. Config file (`/etc/nextstep/server.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration from environment only (for testing or simple deployments).
pub fn load_config_from_env() -> Result<ServerConfig, ConfigError> {
	let mut merged = ServerConfigLayer::default();
	merged.merge(EnvSource.load()?);
	finalize(merged)
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

/// Merge the given sources in precedence order and finalize.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<ServerConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ServerConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: ServerConfigLayer) -> Result<ServerConfig, ConfigError> {
	let http = layer.http.unwrap_or_default().finalize();
	let i18n = layer.i18n.unwrap_or_default().finalize();
	let assets = layer.assets.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();
	let integrations = layer.integrations.unwrap_or_default().finalize();

	validate_config(&http, &i18n)?;

	info!(
		host = %http.host,
		port = http.port,
		locales = ?i18n.locales,
		default_locale = %i18n.default_locale,
		embedded_bundles = i18n.bundle_dir.is_none(),
		strict_bundles = i18n.strict_bundles,
		script_sheet_configured = integrations.script_sheet_url.is_some(),
		"Server configuration loaded"
	);

	Ok(ServerConfig {
		http,
		i18n,
		assets,
		logging,
		integrations,
	})
}

/// Validate cross-field configuration rules.
fn validate_config(http: &HttpConfig, i18n: &I18nConfig) -> Result<(), ConfigError> {
	if !http.has_absolute_base_url() {
		return Err(ConfigError::Validation(format!(
			"http.base_url must be an absolute http(s) URL, got {:?}",
			http.base_url
		)));
	}

	let locales = i18n
		.locale_set()
		.map_err(|e| ConfigError::Validation(format!("i18n: {e}")))?;

	for prefix in &i18n.excluded_prefixes {
		if !prefix.starts_with('/') || prefix == "/" {
			return Err(ConfigError::Validation(format!(
				"i18n.excluded_prefixes: {prefix:?} must start with '/' and name a path below the root"
			)));
		}
		// `/e` would also match `/en/...` and take every English page out of routing.
		if let Some(code) = locales
			.codes()
			.find(|code| format!("/{code}/").starts_with(prefix.as_str()))
		{
			return Err(ConfigError::Validation(format!(
				"i18n.excluded_prefixes: {prefix:?} covers the /{code} locale prefix"
			)));
		}
	}

	Ok(())
}
