// term-env: Terminal Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for environment variable management.
//!
//! # Architecture
//!
//! ```text
//! Platform: Windows | MacOs | Linux
//!   key_casing()            Windows → Insensitive, others → Sensitive
//!   path_delimiter()        Windows → ';', others → ':'
//!   executable_extensions() Windows → [".com", ".exe"], others → []
//! KeyCasing: Sensitive | Insensitive (case-preserving)
//! EnvOverlay: BTreeMap<String, Option<String>> (None = delete)
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::ConfigError;

/// Overlay applied on top of a base environment.
///
/// A `None` value is a deletion directive, never a stored value.
pub type EnvOverlay = BTreeMap<String, Option<String>>;

/// Operating system family a terminal environment is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    #[serde(rename = "osx")]
    MacOs,
    Linux,
}

impl Platform {
    /// Returns the platform this binary was compiled for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Linux
        }
    }

    #[must_use]
    pub const fn is_windows(self) -> bool {
        matches!(self, Self::Windows)
    }

    /// Returns how environment variable names compare on this platform.
    #[must_use]
    pub const fn key_casing(self) -> KeyCasing {
        match self {
            Self::Windows => KeyCasing::Insensitive,
            Self::MacOs | Self::Linux => KeyCasing::Sensitive,
        }
    }

    /// Returns the separator used in `PATH`-like variables.
    #[must_use]
    pub const fn path_delimiter(self) -> char {
        match self {
            Self::Windows => ';',
            Self::MacOs | Self::Linux => ':',
        }
    }

    /// Extensions tried after the bare name during executable lookup, in order.
    #[must_use]
    pub const fn executable_extensions(self) -> &'static [&'static str] {
        match self {
            Self::Windows => &[".com", ".exe"],
            Self::MacOs | Self::Linux => &[],
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Windows => write!(f, "windows"),
            Self::MacOs => write!(f, "osx"),
            Self::Linux => write!(f, "linux"),
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "windows" | "win32" => Ok(Self::Windows),
            "osx" | "macos" | "darwin" => Ok(Self::MacOs),
            "linux" => Ok(Self::Linux),
            _ => Err(ConfigError::InvalidValue {
                section: "terminal".to_string(),
                key: "platform".to_string(),
                message: format!("expected 'windows', 'osx', or 'linux', got '{s}'"),
            }),
        }
    }
}

/// How environment variable names are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyCasing {
    /// `PATH` and `Path` are different variables.
    #[default]
    Sensitive,
    /// `PATH` and `Path` name the same variable; the stored casing wins.
    Insensitive,
}

impl KeyCasing {
    /// Returns true if both names refer to the same variable.
    #[must_use]
    pub fn matches(self, a: &str, b: &str) -> bool {
        match self {
            Self::Sensitive => a == b,
            Self::Insensitive => a.eq_ignore_ascii_case(b),
        }
    }
}
