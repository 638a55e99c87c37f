// term-env: Terminal Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Removal of inherited host plumbing variables.
//!
//! ```text
//! VSCODE_IPC_HOOK   always removed, cannot be preserved
//! ELECTRON_*        removed unless preserved
//! VSCODE_*
//! GOOGLE_API_KEY
//! SNAP, SNAP_*
//! GDK_PIXBUF_*
//! ```

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::container::Env;
use super::types::KeyCasing;

/// IPC socket of the host editor. Leaking it lets a shell talk to the host.
pub const IPC_HOOK_VAR: &str = "VSCODE_IPC_HOOK";

static KEYS_TO_REMOVE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^ELECTRON_.+$",
        r"^GOOGLE_API_KEY$",
        r"^VSCODE_.+$",
        r"^SNAP(|_.*)$",
        r"^GDK_PIXBUF_.+$",
    ]
    .iter()
    .filter_map(|pattern| Regex::new(pattern).ok())
    .collect()
});

fn is_plumbing(key: &str, casing: KeyCasing) -> bool {
    match casing {
        KeyCasing::Sensitive => KEYS_TO_REMOVE.iter().any(|re| re.is_match(key)),
        KeyCasing::Insensitive => {
            let upper = key.to_ascii_uppercase();
            KEYS_TO_REMOVE.iter().any(|re| re.is_match(&upper))
        }
    }
}

/// Strips host plumbing variables from an inherited environment.
///
/// Names listed in `preserve` survive the pattern rules; [`IPC_HOOK_VAR`]
/// is removed regardless.
pub fn sanitize_process_environment<S: AsRef<str>>(env: &mut Env, preserve: &[S]) {
    let casing = env.casing();
    let before = env.len();

    env.retain(|key, _| {
        if casing.matches(key, IPC_HOOK_VAR) {
            return false;
        }
        if preserve.iter().any(|p| casing.matches(key, p.as_ref())) {
            return true;
        }
        !is_plumbing(key, casing)
    });

    let removed = before - env.len();
    if removed > 0 {
        debug!(removed, "sanitized inherited environment");
    }
}
