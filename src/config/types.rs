// term-env: Terminal Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for term-env.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, TerminalConfig
//! TerminalConfig
//!   env:   PerPlatform<Vec<"NAME=value">>   set
//!   unset: PerPlatform<Vec<"NAME">>         delete
//!   cwd, locale, detect_locale, preserve_env
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::env::types::{EnvOverlay, Platform};
use crate::core::locale::DetectLocale;
use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Log level for stdout output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file, no file logging when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::WARN,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// One value per platform family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PerPlatform<T> {
    pub linux: T,
    pub osx: T,
    pub windows: T,
}

impl<T> PerPlatform<T> {
    /// Returns the value for `platform`.
    #[must_use]
    pub const fn get(&self, platform: Platform) -> &T {
        match platform {
            Platform::Linux => &self.linux,
            Platform::MacOs => &self.osx,
            Platform::Windows => &self.windows,
        }
    }
}

/// Terminal settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TerminalConfig {
    /// `NAME=value` assignments added to every terminal.
    ///
    /// Stored as strings so variable names keep their casing through the
    /// config layers. Values may contain `${...}` references.
    pub env: PerPlatform<Vec<String>>,
    /// Inherited variables removed from every terminal.
    pub unset: PerPlatform<Vec<String>>,
    /// Starting directory, absolute or relative to the workspace folder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,
    /// UI locale used to derive `LANG`, e.g. `pt-br`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    pub detect_locale: DetectLocale,
    /// Inherited names exempt from environment sanitization.
    pub preserve_env: Vec<String>,
}

impl TerminalConfig {
    /// Returns the configured overlay for `platform`.
    ///
    /// Unset names become deletion directives. A name both set and unset is
    /// deleted.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAssignment`] for an entry without `=`.
    pub fn env_overlay(
        &self,
        platform: Platform,
    ) -> std::result::Result<Option<EnvOverlay>, ConfigError> {
        let set = self.env.get(platform);
        let unset = self.unset.get(platform);
        if set.is_empty() && unset.is_empty() {
            return Ok(None);
        }

        let mut overlay = EnvOverlay::new();
        for assignment in set {
            let (name, value) = parse_assignment(assignment)?;
            overlay.insert(name, Some(value));
        }
        for name in unset {
            overlay.insert(name.clone(), None);
        }
        Ok(Some(overlay))
    }
}

/// Splits `NAME=value` at the first `=`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidAssignment`] if there is no `=` or the name
/// is empty.
pub fn parse_assignment(assignment: &str) -> std::result::Result<(String, String), ConfigError> {
    match assignment.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(ConfigError::InvalidAssignment(assignment.to_string())),
    }
}
