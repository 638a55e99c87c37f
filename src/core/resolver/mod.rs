// term-env: Terminal Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration variable substitution.
//!
//! ```text
//! VariableResolver (trait)   &str → Result<String, ResolveError>
//!   impl for Fn(&str) -> Result<String, ResolveError>
//!   ConfigVariableResolver
//!     ${env:NAME}                  → value or ""
//!     ${userHome}                  → home or error
//!     ${workspaceFolder}           → root or NoWorkspace
//!     ${workspaceFolderBasename}   → root file name or NoWorkspace
//!     ${pathSeparator}             → "/" or "\"
//!     anything else                → UnknownVariable
//! ```

use bon::Builder;
use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

use super::env::container::Env;
use super::env::types::Platform;
use crate::error::ResolveError;

static VARIABLE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\$\{([^}]*)\}").ok());

/// Substitutes `${...}` references in configuration strings.
pub trait VariableResolver {
    /// Resolves every reference in `value`.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolveError`] if any reference cannot be resolved.
    fn resolve(&self, value: &str) -> Result<String, ResolveError>;
}

impl<F> VariableResolver for F
where
    F: Fn(&str) -> Result<String, ResolveError>,
{
    fn resolve(&self, value: &str) -> Result<String, ResolveError> {
        self(value)
    }
}

/// Resolver for the variables a terminal configuration may reference.
#[derive(Debug, Clone, Builder)]
pub struct ConfigVariableResolver {
    /// Environment consulted by `${env:NAME}`.
    #[builder(default)]
    env: Env,
    #[builder(into)]
    user_home: Option<String>,
    #[builder(into)]
    workspace_folder: Option<PathBuf>,
    #[builder(default)]
    platform: Platform,
}

impl ConfigVariableResolver {
    fn lookup(&self, name: &str) -> Result<String, ResolveError> {
        if let Some(var) = name.strip_prefix("env:") {
            return Ok(self.env.get(var).unwrap_or_default().to_string());
        }

        match name {
            "userHome" => self
                .user_home
                .clone()
                .ok_or_else(|| ResolveError::NoHome {
                    name: name.to_string(),
                }),
            "workspaceFolder" => self
                .workspace_folder
                .as_ref()
                .map(|root| root.to_string_lossy().into_owned())
                .ok_or_else(|| ResolveError::NoWorkspace {
                    name: name.to_string(),
                }),
            "workspaceFolderBasename" => self
                .workspace_folder
                .as_ref()
                .and_then(|root| root.file_name())
                .map(|base| base.to_string_lossy().into_owned())
                .ok_or_else(|| ResolveError::NoWorkspace {
                    name: name.to_string(),
                }),
            "pathSeparator" => Ok(if self.platform.is_windows() { "\\" } else { "/" }.to_string()),
            _ => Err(ResolveError::UnknownVariable {
                name: name.to_string(),
            }),
        }
    }
}

impl VariableResolver for ConfigVariableResolver {
    fn resolve(&self, value: &str) -> Result<String, ResolveError> {
        let Some(re) = VARIABLE.as_ref() else {
            return Ok(value.to_string());
        };

        let mut resolved = String::with_capacity(value.len());
        let mut last = 0;
        for caps in re.captures_iter(value) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            resolved.push_str(&value[last..whole.start()]);
            resolved.push_str(&self.lookup(name.as_str())?);
            last = whole.end();
        }

        let rest = &value[last..];
        if rest.contains("${") {
            return Err(ResolveError::Unterminated {
                value: value.to_string(),
            });
        }
        resolved.push_str(rest);
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests;
