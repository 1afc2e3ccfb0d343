// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections for nextstep-server.

pub mod assets;
pub mod http;
pub mod i18n;
pub mod integrations;
pub mod logging;

pub use assets::{AssetsConfig, AssetsConfigLayer};
pub use http::{HttpConfig, HttpConfigLayer};
pub use i18n::{I18nConfig, I18nConfigLayer};
pub use integrations::{IntegrationsConfig, IntegrationsConfigLayer};
pub use logging::{LoggingConfig, LoggingConfigLayer};
