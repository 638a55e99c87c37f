// term-env: Terminal Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path strings under the rules of a chosen platform.
//!
//! ```text
//!           separators  absolute                      joined with
//! posix     /           /x                            /
//! windows   / and \     C:\x  C:/x  \x  \\srv\share   \
//! ```
//!
//! Paths stay strings so Windows rules apply on a POSIX host and the other
//! way round. `join` and `normalize` fold `.` and `..` segments.


use super::env::types::Platform;

/// Separator used when building paths for `platform`.
#[must_use]
pub const fn separator(platform: Platform) -> &'static str {
    if platform.is_windows() { "\\" } else { "/" }
}

/// Returns true if `c` separates path segments on `platform`.
#[must_use]
pub const fn is_separator(c: char, platform: Platform) -> bool {
    c == '/' || (platform.is_windows() && c == '\\')
}

/// Length of a `C:` drive prefix; always 0 off Windows.
fn drive_len(path: &str, platform: Platform) -> usize {
    match path.as_bytes() {
        [letter, b':', ..] if platform.is_windows() && letter.is_ascii_alphabetic() => 2,
        _ => 0,
    }
}

/// Returns true if `path` does not depend on a working directory.
///
/// On Windows this covers `C:\x`, `\x` and UNC paths, not `C:x`.
#[must_use]
pub fn is_absolute(path: &str, platform: Platform) -> bool {
    path[drive_len(path, platform)..].starts_with(|c| is_separator(c, platform))
}

/// Returns true if `path` names a directory besides `.`.
///
/// `./cmd` and `cmd` have none; `bin/cmd`, `/cmd` and `C:cmd` do.
#[must_use]
pub fn has_directory_part(path: &str, platform: Platform) -> bool {
    match path.rfind(|c| is_separator(c, platform)) {
        Some(0) => true,
        Some(end) => &path[..end] != ".",
        None => drive_len(path, platform) > 0,
    }
}

/// Collapses separators, `.` and `..` segments.
///
/// `..` never climbs above a root; a relative path keeps its leading `..`.
/// An empty result becomes `.`.
#[must_use]
pub fn normalize(path: &str, platform: Platform) -> String {
    let (drive, rest) = path.split_at(drive_len(path, platform));
    let leading = rest
        .chars()
        .take_while(|&c| is_separator(c, platform))
        .count();
    let sep = separator(platform);
    let root = match leading {
        0 => String::new(),
        // UNC `\\server\share`
        n if n > 1 && platform.is_windows() && drive.is_empty() => sep.repeat(2),
        _ => sep.to_string(),
    };

    let mut segments: Vec<&str> = Vec::new();
    for segment in rest.split(|c| is_separator(c, platform)) {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(last) if *last != ".." => {
                    segments.pop();
                }
                _ if !root.is_empty() => {}
                _ => segments.push(".."),
            },
            _ => segments.push(segment),
        }
    }

    let normalized = format!("{drive}{root}{}", segments.join(sep));
    if normalized.is_empty() {
        ".".to_string()
    } else {
        normalized
    }
}

/// Joins `rel` onto `base` and normalizes the result.
///
/// `rel` is appended even when absolute, matching a plain join rather than
/// a resolve.
#[must_use]
pub fn join(base: &str, rel: &str, platform: Platform) -> String {
    match (base.is_empty(), rel.is_empty()) {
        (true, _) => normalize(rel, platform),
        (false, true) => normalize(base, platform),
        (false, false) => normalize(&format!("{base}{}{rel}", separator(platform)), platform),
    }
}
