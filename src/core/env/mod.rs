// term-env: Terminal Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! Env (copy-on-write BTreeMap<String, String> + KeyCasing)
//! Sources: current_env(), Env::for_platform(), Env::from_pairs()
//! Ops: merge_environments / merge_non_null_keys / sanitize_process_environment
//! ```
//!
//! - **Case-insensitive on Windows**, case-preserving
//! - **Copy-on-write**: Clones share data until modified
//! - **UTF-8 internal**: non-Unicode host variables are skipped

pub mod container;
pub mod merge;
pub mod sanitize;
pub mod types;


use types::Platform;

/// Captures the current process environment.
#[must_use]
pub fn current_env() -> container::Env {
    let vars = std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect();
    container::Env::from_map(vars, Platform::current().key_casing())
}
