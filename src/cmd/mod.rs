// term-env: Terminal Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   env, cwd, which, lang, config (options / inis)
//! ```

pub mod config;
pub mod env;
pub mod lang;
pub mod which;

/// Returns the user's home directory as a string.
#[must_use]
pub fn user_home() -> Option<String> {
    dirs::home_dir().map(|home| home.to_string_lossy().into_owned())
}
