// term-env: Terminal Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//! anyhow::Result  (command plumbing, main)
//!      ^
//!      | ?
//!   ConfigError   InvalidValue, InvalidAssignment
//!   ResolveError  UnknownVariable, NoWorkspace, NoHome, Unterminated
//!   LookupError   ExecutableNotFound
//! ```
//!
//! Resolution and lookup failures never escape the core builders; they are
//! only surfaced by the CLI layer.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// A `KEY=VALUE` assignment without `=` or with an empty key.
    #[error("invalid assignment '{0}', expected KEY=VALUE")]
    InvalidAssignment(String),
}

// --- Resolve Errors ---

/// Variable substitution errors.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The `${...}` reference names no known variable.
    #[error("unknown variable '${{{name}}}'")]
    UnknownVariable { name: String },

    /// A workspace variable was referenced without an open workspace.
    #[error("variable '${{{name}}}' requires an open workspace folder")]
    NoWorkspace { name: String },

    /// A home variable was referenced but no home directory is known.
    #[error("variable '${{{name}}}' requires a home directory")]
    NoHome { name: String },

    /// A `${` with no closing brace.
    #[error("unterminated variable reference in '{value}'")]
    Unterminated { value: String },
}

// --- Lookup Errors ---

/// Executable lookup errors.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Executable not found on the search path.
    #[error("executable not found: '{name}'")]
    ExecutableNotFound { name: String },
}

#[cfg(test)]
mod tests;
