// term-env: Terminal Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered configuration sources.
//!
//! ```text
//! lowest                                          highest
//! termenv.toml ─► --ini files ─► TERMENV_* vars ─► --set key=value
//!  (optional)      (required)     (env prefix)      (assignments)
//! ```
//!
//! Later layers override earlier ones key by key. Files are recorded as
//! [`Source`]s so `termenv inis` can list what was actually read.

use std::fmt;
use std::path::{Path, PathBuf};

use config::{ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};

use super::Config;
use super::types::parse_assignment;
use crate::error::Result;

/// How a TOML layer entered the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Must exist.
    Required,
    /// Listed only if it existed when added.
    Optional,
    /// TOML text passed directly.
    Inline,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Required => "required",
            Self::Optional => "optional",
            Self::Inline => "inline",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub kind: SourceKind,
    /// File path, or `<inline>`.
    pub origin: PathBuf,
}

/// Accumulates configuration layers; [`ConfigLoader::build`] merges them.
pub struct ConfigLoader {
    builder: ConfigBuilder<DefaultState>,
    env_prefix: Option<String>,
    sources: Vec<Source>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            sources: Vec::new(),
        }
    }

    fn push_file(mut self, path: &Path, kind: SourceKind) -> Self {
        let required = kind == SourceKind::Required;
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(required));
        if required || path.exists() {
            self.sources.push(Source {
                kind,
                origin: path.to_path_buf(),
            });
        }
        self
    }

    /// Adds a TOML file that must exist when [`build`](Self::build) runs.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.push_file(path.as_ref(), SourceKind::Required)
    }

    /// Adds a TOML file that is silently skipped when missing.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(self, path: P) -> Self {
        self.push_file(path.as_ref(), SourceKind::Optional)
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.sources.push(Source {
            kind: SourceKind::Inline,
            origin: PathBuf::from("<inline>"),
        });
        self
    }

    /// Reads `<PREFIX>_SECTION__KEY` variables, e.g. `TERMENV_TERMINAL__CWD`.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Applies `section.key=value` overrides on top of every other layer.
    ///
    /// # Errors
    ///
    /// Returns an error if an assignment has no `=` or an empty key, or the
    /// key is not a valid config path.
    pub fn apply_assignments<I, S>(mut self, assignments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for assignment in assignments {
            let (key, value) = parse_assignment(assignment.as_ref())?;
            self.builder = self
                .builder
                .set_override(key.as_str(), value)
                .map_err(|e| anyhow::anyhow!("invalid override '{key}': {e}"))?;
        }
        Ok(self)
    }

    /// Merges every layer into a [`Config`].
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing, a file is not valid
    /// TOML, or the merged values do not deserialize into [`Config`].
    pub fn build(self) -> Result<Config> {
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            ),
            None => self.builder,
        };
        Ok(builder.build()?.try_deserialize()?)
    }

    #[must_use]
    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    /// One numbered line per source, lowest precedence first.
    #[must_use]
    pub fn format_sources(&self) -> Vec<String> {
        self.sources
            .iter()
            .enumerate()
            .map(|(i, source)| format!("{}. [{}] {}", i + 1, source.kind, source.origin.display()))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
