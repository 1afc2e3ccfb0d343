// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: environment variables and TOML files.

use std::path::PathBuf;

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::ServerConfigLayer;
use crate::sections::{
	AssetsConfigLayer, HttpConfigLayer, I18nConfigLayer, IntegrationsConfigLayer,
	LoggingConfigLayer,
};

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ServerConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(ServerConfigLayer::default())
	}
}

/// TOML file configuration source.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new("/etc/nextstep/server.toml")
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(ServerConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: ServerConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: NEXTSTEP_SERVER_<FIELD>. The script-sheet URL is also read
/// from the bare `URL_SCRIPT_SHEET` variable used by existing deployments.
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading environment variables");
		load_layer(&|name| std::env::var(name).ok())
	}
}

type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

fn load_layer(lookup: Lookup<'_>) -> Result<ServerConfigLayer, ConfigError> {
	let env = Env(lookup);
	Ok(ServerConfigLayer {
		http: Some(load_http_from_env(&env)?),
		i18n: Some(load_i18n_from_env(&env)?),
		assets: Some(load_assets_from_env(&env)),
		logging: Some(load_logging_from_env(&env)),
		integrations: Some(load_integrations_from_env(&env)),
	})
}

struct Env<'a>(Lookup<'a>);

impl Env<'_> {
	fn var(&self, name: &str) -> Option<String> {
		(self.0)(name).filter(|s| !s.is_empty())
	}

	fn bool(&self, name: &str) -> Option<bool> {
		self
			.var(name)
			.map(|v| v.eq_ignore_ascii_case("true") || v == "1")
	}

	fn u16(&self, name: &str) -> Result<Option<u16>, ConfigError> {
		match self.var(name) {
			Some(v) => v.parse().map(Some).map_err(|_| ConfigError::InvalidValue {
				key: name.to_string(),
				message: format!("invalid u16 value '{v}'"),
			}),
			None => Ok(None),
		}
	}

	fn list(&self, name: &str) -> Option<Vec<String>> {
		self.var(name).map(|s| {
			s.split(',')
				.map(|s| s.trim().to_string())
				.filter(|s| !s.is_empty())
				.collect()
		})
	}
}

fn load_http_from_env(env: &Env<'_>) -> Result<HttpConfigLayer, ConfigError> {
	Ok(HttpConfigLayer {
		host: env.var("NEXTSTEP_SERVER_HOST"),
		port: env.u16("NEXTSTEP_SERVER_PORT")?,
		base_url: env.var("NEXTSTEP_SERVER_BASE_URL"),
	})
}

fn load_i18n_from_env(env: &Env<'_>) -> Result<I18nConfigLayer, ConfigError> {
	let locales = env.list("NEXTSTEP_SERVER_LOCALES");
	if locales.as_ref().is_some_and(Vec::is_empty) {
		return Err(ConfigError::InvalidValue {
			key: "NEXTSTEP_SERVER_LOCALES".to_string(),
			message: "locale list is empty".to_string(),
		});
	}

	Ok(I18nConfigLayer {
		locales,
		default_locale: env.var("NEXTSTEP_SERVER_DEFAULT_LOCALE"),
		bundle_dir: env.var("NEXTSTEP_SERVER_BUNDLE_DIR").map(PathBuf::from),
		cache_dictionaries: env.bool("NEXTSTEP_SERVER_CACHE_DICTIONARIES"),
		strict_bundles: env.bool("NEXTSTEP_SERVER_STRICT_BUNDLES"),
		excluded_prefixes: env.list("NEXTSTEP_SERVER_EXCLUDED_PREFIXES"),
	})
}

fn load_assets_from_env(env: &Env<'_>) -> AssetsConfigLayer {
	AssetsConfigLayer {
		dir: env.var("NEXTSTEP_SERVER_ASSETS_DIR").map(PathBuf::from),
	}
}

fn load_logging_from_env(env: &Env<'_>) -> LoggingConfigLayer {
	LoggingConfigLayer {
		level: env.var("NEXTSTEP_SERVER_LOG_LEVEL"),
	}
}

fn load_integrations_from_env(env: &Env<'_>) -> IntegrationsConfigLayer {
	IntegrationsConfigLayer {
		script_sheet_url: env
			.var("NEXTSTEP_SERVER_SCRIPT_SHEET_URL")
			.or_else(|| env.var("URL_SCRIPT_SHEET")),
	}
}
