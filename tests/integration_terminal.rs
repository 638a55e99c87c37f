// term-env: Terminal Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the terminal environment pipeline.
//!
//! Exercises the public API end to end with in-memory existence checks and
//! explicit platforms.

use std::cell::RefCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use term_env::cli::which::WhichArgs;
use term_env::cmd::which::locate;
use term_env::core::cwd::{get_cwd, sanitize_cwd};
use term_env::core::env::container::Env;
use term_env::core::env::merge::merge_environments;
use term_env::core::env::types::{EnvOverlay, KeyCasing, Platform};
use term_env::core::exec::find_executable;
use term_env::core::launch::ShellLaunchConfig;
use term_env::core::locale::{DetectLocale, lang_env_variable, should_set_lang_env_variable};
use term_env::core::resolver::VariableResolver;
use term_env::core::terminal::TerminalEnvironment;
use term_env::error::ResolveError;

/// Existence check over a fixed set of paths that records every lookup.
struct KnownPaths {
    present: HashSet<PathBuf>,
    seen: RefCell<Vec<PathBuf>>,
}

impl KnownPaths {
    fn new(present: &[&str]) -> Self {
        Self {
            present: present.iter().map(PathBuf::from).collect(),
            seen: RefCell::new(Vec::new()),
        }
    }

    fn check(&self) -> impl Fn(&Path) -> std::future::Ready<bool> + '_ {
        move |path: &Path| {
            self.seen.borrow_mut().push(path.to_path_buf());
            std::future::ready(self.present.contains(path))
        }
    }
}

fn search(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|e| (*e).to_string()).collect()
}

// =============================================================================
// Executable Lookup
// =============================================================================

#[tokio::test]
async fn absolute_command_is_only_checked() {
    let env = Env::new(KeyCasing::Sensitive);
    let paths = search(&["/usr/bin"]);

    let present = KnownPaths::new(&["/opt/tool"]);
    let found = find_executable(
        "/opt/tool",
        None,
        Some(paths.as_slice()),
        &env,
        &present.check(),
        Platform::Linux,
    )
    .await;
    assert_eq!(found, Some(PathBuf::from("/opt/tool")));
    assert_eq!(present.seen.borrow().len(), 1);

    let absent = KnownPaths::new(&[]);
    let found = find_executable(
        "/opt/tool",
        None,
        Some(paths.as_slice()),
        &env,
        &absent.check(),
        Platform::Linux,
    )
    .await;
    assert_eq!(found, None);
    assert_eq!(*absent.seen.borrow(), vec![PathBuf::from("/opt/tool")]);
}

#[tokio::test]
async fn later_search_entry_is_found() {
    let env = Env::new(KeyCasing::Sensitive);
    let paths = search(&["/a", "/b"]);
    let known = KnownPaths::new(&["/b/cmd"]);

    let found = find_executable(
        "cmd",
        Some(Path::new("/work")),
        Some(paths.as_slice()),
        &env,
        &known.check(),
        Platform::Linux,
    )
    .await;
    assert_eq!(found, Some(PathBuf::from("/b/cmd")));
}

#[tokio::test]
async fn windows_checks_com_before_exe() {
    let env = Env::new(KeyCasing::Insensitive);
    let paths = search(&["C:\\bin"]);
    let known = KnownPaths::new(&["C:\\bin\\tool.exe"]);

    let found = find_executable(
        "tool",
        Some(Path::new("C:\\work")),
        Some(paths.as_slice()),
        &env,
        &known.check(),
        Platform::Windows,
    )
    .await;

    assert_eq!(found, Some(PathBuf::from("C:\\bin\\tool.exe")));
    insta::assert_debug_snapshot!(known.seen.borrow(), @r#"
    [
        "C:\\bin\\tool",
        "C:\\bin\\tool.com",
        "C:\\bin\\tool.exe",
    ]
    "#);
}

#[tokio::test]
async fn which_uses_path_of_given_env() {
    let env = Env::from_pairs([("PATH", "/usr/local/bin:/usr/bin")], KeyCasing::Sensitive);
    let known = KnownPaths::new(&["/usr/bin/git"]);
    let args = WhichArgs {
        command: "git".to_string(),
        cwd: Some(PathBuf::from("/work")),
        ..WhichArgs::default()
    };

    let found = locate(&args, &env, &known.check(), Platform::Linux).await;
    assert_eq!(found.ok(), Some(PathBuf::from("/usr/bin/git")));

    let missing = WhichArgs {
        command: "hg".to_string(),
        ..args
    };
    let err = locate(&missing, &env, &known.check(), Platform::Linux)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "executable not found: 'hg'");
}

// =============================================================================
// Environment Merge
// =============================================================================

#[test]
fn windows_merge_keeps_existing_casing() {
    let mut env = Env::from_pairs([("Path", "old"), ("TEMP", "t")], KeyCasing::Insensitive);
    let overlay: EnvOverlay = [
        ("PATH".to_string(), Some("x".to_string())),
        ("temp".to_string(), None),
    ]
    .into_iter()
    .collect();

    merge_environments(&mut env, Some(&overlay));

    insta::assert_debug_snapshot!(env.to_map(), @r#"
    {
        "Path": "x",
    }
    "#);
}

// =============================================================================
// Locale
// =============================================================================

#[test]
fn lang_derivation() {
    assert_eq!(lang_env_variable(None), "en_US.UTF-8");
    assert_eq!(lang_env_variable(Some("fr")), "fr_FR.UTF-8");
    assert_eq!(lang_env_variable(Some("pt-br")), "pt_BR.UTF-8");
}

#[test]
fn lang_detection_modes() {
    let utf8 = Env::from_pairs([("LANG", "en_US.UTF-8")], KeyCasing::Sensitive);
    let empty = Env::new(KeyCasing::Sensitive);

    assert!(!should_set_lang_env_variable(&utf8, DetectLocale::Auto));
    assert!(should_set_lang_env_variable(&empty, DetectLocale::Auto));
    assert!(!should_set_lang_env_variable(&empty, DetectLocale::Off));
    assert!(!should_set_lang_env_variable(&utf8, DetectLocale::Off));
}

// =============================================================================
// Working Directory
// =============================================================================

#[test]
fn failing_resolver_keeps_launch_cwd() {
    let failing = |_: &str| -> Result<String, ResolveError> {
        Err(ResolveError::UnknownVariable {
            name: "x".to_string(),
        })
    };
    let shell = ShellLaunchConfig::builder().cwd("/tmp/x").build();

    let cwd = get_cwd(
        &shell,
        Some("/home/dev"),
        Some(&failing as &dyn VariableResolver),
        None,
        None,
        Platform::Linux,
    );
    assert_eq!(cwd, "/tmp/x");
}

#[test]
fn drive_letter_sanitization() {
    assert_eq!(sanitize_cwd("c:\\work", Platform::Windows), "C:\\work");
    assert_eq!(sanitize_cwd("c:\\work", Platform::Linux), "c:\\work");
}

// =============================================================================
// Terminal Environment
// =============================================================================

#[test]
fn strict_mode_ignores_base_environment() {
    let overlay: EnvOverlay = [
        ("A".to_string(), Some("1".to_string())),
        ("B".to_string(), None),
    ]
    .into_iter()
    .collect();
    let mut shell = ShellLaunchConfig::builder()
        .env(overlay)
        .strict_env(true)
        .build();
    let base = Env::from_pairs([("HOME", "/home/dev"), ("B", "2")], KeyCasing::Sensitive);

    let env = TerminalEnvironment::builder()
        .shell(&mut shell)
        .base_env(&base)
        .version("1.0.0")
        .platform(Platform::Linux)
        .build()
        .create();

    insta::assert_debug_snapshot!(env.to_map(), @r#"
    {
        "A": "1",
    }
    "#);
}

#[test]
fn inherited_environment_gets_terminal_keys() {
    let base = Env::from_pairs(
        [("HOME", "/home/dev"), ("LANG", "C"), ("VSCODE_IPC_HOOK", "/tmp/sock")],
        KeyCasing::Sensitive,
    );
    let mut shell = ShellLaunchConfig::default();

    let env = TerminalEnvironment::builder()
        .shell(&mut shell)
        .base_env(&base)
        .locale("ja")
        .platform(Platform::Linux)
        .build()
        .create();

    insta::assert_debug_snapshot!(env.to_map(), @r#"
    {
        "COLORTERM": "truecolor",
        "HOME": "/home/dev",
        "LANG": "ja_JP.UTF-8",
        "TERM_PROGRAM": "vscode",
    }
    "#);
}
