// term-env: Terminal Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for term-env.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. termenv.toml (cwd, optional)
//! 3. --ini files
//! 4. TERMENV_* env vars
//! 5. CLI overrides (--set, --log-level, ...)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! TERMENV_TERMINAL__CWD=/src            → terminal.cwd = "/src"
//! TERMENV_TERMINAL__DETECT_LOCALE=off   → terminal.detect_locale = "off"
//! TERMENV_GLOBAL__OUTPUT_LOG_LEVEL=4    → global.output_log_level = 4
//! ```
//!
//! # Example
//!
//! ```toml
//! [terminal]
//! cwd = "${workspaceFolder}/app"
//! detect_locale = "auto"
//!
//! [terminal.env]
//! linux = ["JAVA_HOME=/opt/jdk", "PATH=${env:PATH}:/opt/jdk/bin"]
//!
//! [terminal.unset]
//! linux = ["PYTHONHOME"]
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::core::env::types::{EnvOverlay, Platform};
use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{GlobalConfig, TerminalConfig};

/// Name of the optional config file picked up from the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "termenv.toml";

/// Prefix of environment variables overriding configuration.
pub const ENV_PREFIX: &str = "TERMENV";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Terminal settings.
    pub terminal: TerminalConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use term_env::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file("config/default.toml")
    ///     .add_toml_file_optional("termenv.toml")
    ///     .with_env_prefix("TERMENV")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Returns the configured environment overlay for `platform`.
    ///
    /// # Errors
    ///
    /// Returns an error if a `terminal.env` entry is not `NAME=value`.
    pub fn env_for(&self, platform: Platform) -> std::result::Result<Option<EnvOverlay>, ConfigError> {
        self.terminal.env_overlay(platform)
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_terminal_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
    }

    fn format_terminal_options(&self, options: &mut BTreeMap<String, String>) {
        let terminal = &self.terminal;
        options.insert(
            "terminal.cwd".into(),
            terminal.cwd.clone().unwrap_or_default(),
        );
        options.insert(
            "terminal.locale".into(),
            terminal.locale.clone().unwrap_or_default(),
        );
        options.insert(
            "terminal.detect_locale".into(),
            terminal.detect_locale.to_string(),
        );
        options.insert(
            "terminal.preserve_env".into(),
            terminal.preserve_env.join(", "),
        );
        for platform in [Platform::Linux, Platform::MacOs, Platform::Windows] {
            options.insert(
                format!("terminal.env.{platform}"),
                terminal.env.get(platform).join(", "),
            );
            options.insert(
                format!("terminal.unset.{platform}"),
                terminal.unset.get(platform).join(", "),
            );
        }
    }
}
