// term-env: Terminal Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Working directory resolution for a new shell.
//!
//! # Precedence
//!
//! ```text
//! 1. shell.cwd            resolved, or unresolved on failure
//! 2. configured cwd       unless shell.ignore_configuration_cwd
//!      absolute → as is          (by platform rules, C:\x on Windows)
//!      relative → join(root, cwd) (needs root)
//!      resolve failure → warn!, skipped
//! 3. root → user home → ""
//!
//! sanitize_cwd(): Windows "c:\x" → "C:\x"
//! ```

use std::path::Path;
use tracing::{debug, warn};

use super::env::types::Platform;
use super::launch::ShellLaunchConfig;
use super::path;
use super::resolver::VariableResolver;

/// Normalizes a working directory string for `platform`.
///
/// On Windows a drive letter is uppercased; everything else passes through.
#[must_use]
pub fn sanitize_cwd(cwd: &str, platform: Platform) -> String {
    if platform.is_windows() {
        let mut chars = cwd.chars();
        if let (Some(drive), Some(':')) = (chars.next(), chars.next()) {
            let mut sanitized = drive.to_uppercase().to_string();
            sanitized.push_str(&cwd[drive.len_utf8()..]);
            return sanitized;
        }
    }
    cwd.to_string()
}

fn resolve_configured(custom_cwd: &str, resolver: Option<&dyn VariableResolver>) -> Option<String> {
    let Some(resolver) = resolver else {
        return Some(custom_cwd.to_string());
    };
    match resolver.resolve(custom_cwd) {
        Ok(resolved) => Some(resolved),
        Err(e) => {
            warn!(cwd = custom_cwd, error = %e, "could not resolve configured terminal cwd");
            None
        }
    }
}

/// Computes the working directory for a shell launch.
///
/// Resolver failures never propagate: an explicit launch cwd falls back to
/// its unresolved form, a configured cwd is dropped with a warning.
#[must_use]
pub fn get_cwd(
    shell: &ShellLaunchConfig,
    user_home: Option<&str>,
    resolver: Option<&dyn VariableResolver>,
    root: Option<&Path>,
    custom_cwd: Option<&str>,
    platform: Platform,
) -> String {
    if let Some(shell_cwd) = shell.cwd.as_ref().filter(|c| !c.is_empty()) {
        let unresolved = shell_cwd.to_unresolved();
        let resolved = resolver
            .and_then(|r| r.resolve(&unresolved).ok())
            .filter(|r| !r.is_empty());
        debug!(cwd = %unresolved, resolved = ?resolved, "using launch cwd");
        return sanitize_cwd(resolved.as_deref().unwrap_or(&unresolved), platform);
    }

    let mut cwd = None;
    if !shell.ignore_configuration_cwd
        && let Some(custom) = custom_cwd.filter(|c| !c.is_empty())
        && let Some(resolved) = resolve_configured(custom, resolver).filter(|r| !r.is_empty())
    {
        if path::is_absolute(&resolved, platform) {
            cwd = Some(resolved);
        } else if let Some(root) = root {
            cwd = Some(path::join(&root.to_string_lossy(), &resolved, platform));
        }
    }

    let cwd = cwd.unwrap_or_else(|| {
        root.map(|r| r.to_string_lossy().into_owned())
            .or_else(|| user_home.map(str::to_string))
            .unwrap_or_default()
    });

    sanitize_cwd(&cwd, platform)
}
