// term-env: Terminal Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use super::{compute_cwd, compute_environment, format_env, launch_overlay};
use crate::cli::launch::LaunchArgs;
use crate::config::Config;
use crate::core::env::container::Env;
use crate::core::env::types::{KeyCasing, Platform};
use crate::core::locale::DetectLocale;

const CONFIG: &str = r#"
[terminal]
cwd = "${workspaceFolder}/app"
locale = "fr"

[terminal.env]
linux = ["TOOLS=${workspaceFolder}/tools", "EDITOR=vim"]

[terminal.unset]
linux = ["PATH"]
"#;

fn base_env() -> Env {
    Env::from_pairs(
        [
            ("HOME", "/home/dev"),
            ("PATH", "/usr/bin"),
            ("VSCODE_PID", "42"),
        ],
        KeyCasing::Sensitive,
    )
}

fn linux_args() -> LaunchArgs {
    LaunchArgs {
        platform: Some(Platform::Linux),
        ..LaunchArgs::default()
    }
}

#[test]
fn test_compute_environment_layers() {
    let config = Config::parse(CONFIG).unwrap();
    let args = LaunchArgs {
        set: vec!["EDITOR=nano".to_string()],
        workspace: Some(PathBuf::from("/work")),
        detect_locale: Some(DetectLocale::On),
        ..linux_args()
    };

    let env = compute_environment(&args, &config, &base_env(), Some("/home/dev"), "9.9.9").unwrap();

    insta::assert_debug_snapshot!(env.to_map(), @r#"
    {
        "COLORTERM": "truecolor",
        "EDITOR": "nano",
        "HOME": "/home/dev",
        "LANG": "fr_FR.UTF-8",
        "TERM_PROGRAM": "vscode",
        "TERM_PROGRAM_VERSION": "9.9.9",
        "TOOLS": "/work/tools",
    }
    "#);
}

#[test]
fn test_compute_environment_strict() {
    let config = Config::parse(CONFIG).unwrap();
    let args = LaunchArgs {
        set: vec!["A=1".to_string()],
        unset: vec!["B".to_string()],
        strict: true,
        ..linux_args()
    };

    let env = compute_environment(&args, &config, &base_env(), None, "9.9.9").unwrap();
    assert_eq!(format_env(&env), vec!["A=1"]);
}

#[test]
fn test_compute_environment_windows_rules() {
    let base = Env::from_pairs([("Path", "C:\\Windows")], KeyCasing::Sensitive);
    let args = LaunchArgs {
        set: vec!["PATH=C:\\tools".to_string()],
        detect_locale: Some(DetectLocale::Off),
        platform: Some(Platform::Windows),
        ..LaunchArgs::default()
    };

    let env = compute_environment(&args, &Config::default(), &base, None, "9.9.9").unwrap();
    assert_eq!(env.find_key("PATH"), Some("Path"));
    assert_eq!(env.get("Path"), Some("C:\\tools"));
    assert_eq!(env.get("LANG"), None);
}

#[test]
fn test_compute_environment_rejects_bad_assignment() {
    let args = LaunchArgs {
        set: vec!["NOEQUALS".to_string()],
        ..linux_args()
    };
    assert!(compute_environment(&args, &Config::default(), &base_env(), None, "1").is_err());
}

#[test]
fn test_compute_cwd_precedence() {
    let config = Config::parse(CONFIG).unwrap();
    let base = base_env();

    let in_workspace = LaunchArgs {
        workspace: Some(PathBuf::from("/work")),
        ..linux_args()
    };
    let no_workspace = linux_args();
    let explicit = LaunchArgs {
        cwd: Some("/explicit".to_string()),
        ..in_workspace.clone()
    };
    let ignored = LaunchArgs {
        ignore_config_cwd: true,
        ..in_workspace.clone()
    };

    let results: Vec<_> = [
        ("workspace", &in_workspace),
        ("no_workspace", &no_workspace),
        ("explicit", &explicit),
        ("ignore_config", &ignored),
    ]
    .into_iter()
    .map(|(name, args)| (name, compute_cwd(args, &config, &base, Some("/home/dev")).unwrap()))
    .collect();

    insta::assert_debug_snapshot!(results, @r#"
    [
        (
            "workspace",
            "/work/app",
        ),
        (
            "no_workspace",
            "/home/dev",
        ),
        (
            "explicit",
            "/explicit",
        ),
        (
            "ignore_config",
            "/work",
        ),
    ]
    "#);
}

#[test]
fn test_launch_overlay() {
    assert_eq!(launch_overlay(&LaunchArgs::default()).unwrap(), None);

    let args = LaunchArgs {
        set: vec!["A=1".to_string()],
        unset: vec!["A".to_string()],
        ..LaunchArgs::default()
    };
    let overlay = launch_overlay(&args).unwrap().unwrap();
    assert_eq!(overlay.get("A"), Some(&None));
}
