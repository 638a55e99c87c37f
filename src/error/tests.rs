// term-env: Terminal Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, LookupError, ResolveError};

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidAssignment("NOEQUALS".to_string());
    insta::assert_snapshot!(err.to_string(), @"invalid assignment 'NOEQUALS', expected KEY=VALUE");
}

#[test]
fn test_resolve_error_display() {
    let errors = [
        ResolveError::UnknownVariable {
            name: "command:foo".to_string(),
        },
        ResolveError::NoHome {
            name: "userHome".to_string(),
        },
    ]
    .map(|e| e.to_string());
    insta::assert_debug_snapshot!(errors, @r#"
    [
        "unknown variable '${command:foo}'",
        "variable '${userHome}' requires a home directory",
    ]
    "#);
}

#[test]
fn test_lookup_error_into_anyhow() {
    let err: anyhow::Error = LookupError::ExecutableNotFound {
        name: "zsh".to_string(),
    }
    .into();
    insta::assert_snapshot!(err.to_string(), @"executable not found: 'zsh'");
}
