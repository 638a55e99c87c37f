// term-env: Terminal Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigVariableResolver, VariableResolver};
use crate::core::env::container::Env;
use crate::core::env::types::{KeyCasing, Platform};
use crate::error::ResolveError;

fn resolver() -> ConfigVariableResolver {
    ConfigVariableResolver::builder()
        .env(Env::from_pairs([("EDITOR", "vim")], KeyCasing::Sensitive))
        .user_home("/home/dev")
        .workspace_folder("/work/project")
        .platform(Platform::Linux)
        .build()
}

#[test]
fn test_resolve_known_variables() {
    let r = resolver();
    insta::assert_debug_snapshot!(
        [
            "${workspaceFolder}/src",
            "${workspaceFolderBasename}",
            "${userHome}${pathSeparator}.cache",
            "editor=${env:EDITOR} pager=${env:PAGER}",
            "plain",
        ]
        .map(|input| r.resolve(input).map_err(|e| e.to_string())),
        @r#"
    [
        Ok(
            "/work/project/src",
        ),
        Ok(
            "project",
        ),
        Ok(
            "/home/dev/.cache",
        ),
        Ok(
            "editor=vim pager=",
        ),
        Ok(
            "plain",
        ),
    ]
    "#
    );
}

#[test]
fn test_resolve_unknown_variable_fails() {
    let err = resolver().resolve("${command:pick}").unwrap_err();
    assert!(matches!(err, ResolveError::UnknownVariable { ref name } if name == "command:pick"));
}

#[test]
fn test_resolve_workspace_without_folder_fails() {
    let r = ConfigVariableResolver::builder().build();
    let err = r.resolve("${workspaceFolder}").unwrap_err();
    assert!(matches!(err, ResolveError::NoWorkspace { .. }));
}

#[test]
fn test_resolve_user_home_without_home_fails() {
    let r = ConfigVariableResolver::builder().build();
    let err = r.resolve("${userHome}/.config").unwrap_err();
    assert!(matches!(err, ResolveError::NoHome { ref name } if name == "userHome"));
}

#[test]
fn test_resolve_unterminated_fails() {
    let err = resolver().resolve("${userHome}/${env:HOME").unwrap_err();
    assert!(matches!(err, ResolveError::Unterminated { .. }));
}

#[test]
fn test_resolve_windows_separator() {
    let r = ConfigVariableResolver::builder()
        .platform(Platform::Windows)
        .build();
    assert_eq!(r.resolve("a${pathSeparator}b").unwrap(), "a\\b");
}

#[test]
fn test_closure_resolver() {
    let upper = |value: &str| -> Result<String, ResolveError> { Ok(value.to_uppercase()) };
    assert_eq!(upper.resolve("abc").unwrap(), "ABC");
}
