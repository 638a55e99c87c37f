// term-env: Terminal Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment merging.
//!
//! ```text
//! merge_environments(base, overlay)
//!   Some(v) → base.set(key, v)    (stored casing wins on Windows)
//!   None    → base.remove(key)
//!
//! merge_non_null_keys(env, pairs)
//!   non-empty Some(v) → env.insert_exact(key, v)
//!   None / ""         → skipped
//! ```

use tracing::trace;

use super::container::Env;
use super::types::EnvOverlay;

/// Merges `overlay` into `base` in place.
///
/// Names are matched using the base environment's casing, so on Windows an
/// overlay `PATH` overwrites an existing `Path` and the stored `Path` casing
/// is kept. A `None` value deletes the variable.
pub fn merge_environments(base: &mut Env, overlay: Option<&EnvOverlay>) {
    let Some(overlay) = overlay else {
        return;
    };

    for (key, value) in overlay {
        match value {
            Some(value) => {
                base.set(key.as_str(), value.as_str());
            }
            None => {
                if base.remove(key).is_some() {
                    trace!(key = %key, "removed variable from environment");
                }
            }
        }
    }
}

/// Copies the non-empty values of `other` into `env` verbatim.
///
/// Unlike [`merge_environments`] this never deletes and never folds names.
pub fn merge_non_null_keys<'a, I>(env: &mut Env, other: I)
where
    I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
{
    for (key, value) in other {
        if let Some(value) = value
            && !value.is_empty()
        {
            env.insert_exact(key, value);
        }
    }
}

/// Adapts an overlay to the pair shape taken by [`merge_non_null_keys`].
pub fn overlay_entries(overlay: &EnvOverlay) -> impl Iterator<Item = (&str, Option<&str>)> {
    overlay.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
}

/// Adapts an environment to the pair shape taken by [`merge_non_null_keys`].
pub fn env_entries(env: &Env) -> impl Iterator<Item = (&str, Option<&str>)> {
    env.iter().map(|(k, v)| (k, Some(v)))
}
