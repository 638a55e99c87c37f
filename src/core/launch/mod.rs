// term-env: Terminal Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shell launch configuration.
//!
//! ```text
//! ShellLaunchConfig::builder()
//!   .cwd() .env() .strict_env() .ignore_configuration_cwd()
//!   .build()
//! ShellCwd: Text("${workspaceFolder}/x") | Path(PathBuf)
//! ```

use bon::Builder;
use std::path::PathBuf;

use super::env::types::EnvOverlay;

/// Working directory requested by a launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCwd {
    /// Free-form string, may contain `${...}` references.
    Text(String),
    /// Already a filesystem path.
    Path(PathBuf),
}

impl ShellCwd {
    /// Returns the string form handed to variable resolution.
    #[must_use]
    pub fn to_unresolved(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Path(path) => path.to_string_lossy().into_owned(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Path(path) => path.as_os_str().is_empty(),
        }
    }
}

impl From<&str> for ShellCwd {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ShellCwd {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<PathBuf> for ShellCwd {
    fn from(value: PathBuf) -> Self {
        Self::Path(value)
    }
}

/// Everything a caller specifies about one shell launch.
#[derive(Debug, Clone, Default, Builder)]
pub struct ShellLaunchConfig {
    /// Explicit working directory, wins over any configured one.
    #[builder(into)]
    pub cwd: Option<ShellCwd>,
    /// Launch-specific overlay, applied last.
    pub env: Option<EnvOverlay>,
    /// Use `env` verbatim and ignore the inherited and configured environments.
    #[builder(default)]
    pub strict_env: bool,
    /// Skip the configured cwd.
    #[builder(default)]
    pub ignore_configuration_cwd: bool,
}
