// term-env: Terminal Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Executable lookup on a search path.
//!
//! ```text
//! find_executable(command, cwd, paths, env, exists, platform)
//!   absolute command     → command if exists, no search
//!   "dir/command"        → cwd/dir/command if exists
//!   (absoluteness, separators and joins follow `platform`, not the host)
//!   search list          → paths | PATH (any casing) split on ';' / ':'
//!     none               → cwd/command if exists
//!     for entry in list  → entry/command [+ .com, .exe on Windows]
//!     exhausted          → cwd/command if exists
//! ```
//!
//! Checks run one at a time in list order. The first confirmed candidate wins.

use std::future::Future;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use super::env::container::Env;
use super::env::types::Platform;
use super::path;

/// Asynchronous file existence check.
///
/// Lookups never touch the filesystem directly, so tests can drive them with
/// an in-memory set of paths.
pub trait ExistenceCheck {
    /// Returns true if `path` exists. Errors count as "does not exist".
    fn exists(&self, path: &Path) -> impl Future<Output = bool>;
}

/// Existence check against the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsExistence;

impl ExistenceCheck for FsExistence {
    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }
}

impl<F, Fut> ExistenceCheck for F
where
    F: Fn(&Path) -> Fut,
    Fut: Future<Output = bool>,
{
    fn exists(&self, path: &Path) -> impl Future<Output = bool> {
        self(path)
    }
}

async fn check_candidate(exists: &impl ExistenceCheck, candidate: String) -> Option<PathBuf> {
    trace!(candidate = %candidate, "probing");
    let candidate = PathBuf::from(candidate);
    if exists.exists(&candidate).await {
        Some(candidate)
    } else {
        None
    }
}

/// Splits the `PATH` variable of `env` into a search list.
///
/// The name is matched case-insensitively on every platform.
#[must_use]
pub fn search_paths(env: &Env, platform: Platform) -> Option<Vec<String>> {
    env.get_ignore_case("PATH").map(|value| {
        value
            .split(platform.path_delimiter())
            .map(str::to_string)
            .collect()
    })
}

/// Locates `command`, returning the first candidate confirmed by `exists`.
///
/// `cwd` defaults to the current directory; `paths` defaults to the `PATH` of
/// `env`. On Windows every search entry is also tried with `.com` and then
/// `.exe` appended before moving on to the next entry.
pub async fn find_executable(
    command: &str,
    cwd: Option<&Path>,
    paths: Option<&[String]>,
    env: &Env,
    exists: &impl ExistenceCheck,
    platform: Platform,
) -> Option<PathBuf> {
    if path::is_absolute(command, platform) {
        return check_candidate(exists, command.to_string()).await;
    }

    let cwd = match cwd {
        Some(cwd) => cwd.to_string_lossy().into_owned(),
        None => std::env::current_dir()
            .map(|dir| dir.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };

    if path::has_directory_part(command, platform) {
        return check_candidate(exists, path::join(&cwd, command, platform)).await;
    }

    let derived;
    let paths = match paths {
        Some(paths) => Some(paths),
        None => {
            derived = search_paths(env, platform);
            derived.as_deref()
        }
    };

    let Some(paths) = paths.filter(|p| !p.is_empty()) else {
        debug!(command, "no search path, resolving against cwd");
        return check_candidate(exists, path::join(&cwd, command, platform)).await;
    };

    for entry in paths {
        let full_path = if path::is_absolute(entry, platform) {
            path::join(entry, command, platform)
        } else {
            path::join(&path::join(&cwd, entry, platform), command, platform)
        };

        if let Some(found) = check_candidate(exists, full_path.clone()).await {
            debug!(command, path = %found.display(), "resolved executable");
            return Some(found);
        }

        for ext in platform.executable_extensions() {
            if let Some(found) = check_candidate(exists, format!("{full_path}{ext}")).await {
                debug!(command, path = %found.display(), "resolved executable");
                return Some(found);
            }
        }
    }

    check_candidate(exists, path::join(&cwd, command, platform)).await
}
