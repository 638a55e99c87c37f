// term-env: Terminal Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations.

use std::io::Write;

use term_env::cli::global::GlobalOptions;
use term_env::cmd::config::build_config_loader;
use term_env::config::Config;
use term_env::core::env::types::Platform;
use term_env::core::locale::DetectLocale;
use term_env::logging::LogLevel;

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_empty() {
    let config = Config::parse("").unwrap();
    insta::assert_json_snapshot!(config, @r#"
    {
      "global": {
        "output_log_level": 2,
        "file_log_level": 5,
        "log_file": null
      },
      "terminal": {
        "env": {
          "linux": [],
          "osx": [],
          "windows": []
        },
        "unset": {
          "linux": [],
          "osx": [],
          "windows": []
        },
        "detect_locale": "auto",
        "preserve_env": []
      }
    }
    "#);
}

#[test]
fn config_parse_global_section() {
    let toml = r#"
[global]
output_log_level = 4
log_file = "logs/termenv.log"
"#;
    let config = Config::parse(toml).unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(
        config.global.log_file.as_deref(),
        Some(std::path::Path::new("logs/termenv.log"))
    );
}

#[test]
fn config_rejects_out_of_range_log_level() {
    assert!(Config::parse("[global]\noutput_log_level = 9").is_err());
}

#[test]
fn config_platform_overlays() {
    let toml = r#"
[terminal.env]
osx = ["Mixed_Case=kept", "PATH=${env:PATH}:/opt/bin"]

[terminal.unset]
osx = ["Mixed_Case"]
"#;
    let config = Config::parse(toml).unwrap();
    let overlay = config.env_for(Platform::MacOs).unwrap().unwrap();

    insta::assert_debug_snapshot!(overlay, @r#"
    {
        "Mixed_Case": None,
        "PATH": Some(
            "${env:PATH}:/opt/bin",
        ),
    }
    "#);
    assert!(config.env_for(Platform::Linux).unwrap().is_none());
}

// =============================================================================
// Layered loading
// =============================================================================

#[test]
fn config_cli_overrides_win() {
    let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
    writeln!(
        file,
        "[terminal]\ncwd = \"/from/file\"\ndetect_locale = \"on\"\n\n[global]\noutput_log_level = 1"
    )
    .unwrap();

    let global = GlobalOptions {
        inis: vec![file.path().to_path_buf()],
        log_level: Some(3),
        options: vec!["terminal.cwd=/from/set".to_string()],
        no_default_inis: true,
        ..GlobalOptions::default()
    };
    let loader = build_config_loader(&global).unwrap();
    assert_eq!(loader.sources().len(), 1);

    let config = loader.build().unwrap();
    assert_eq!(config.terminal.cwd.as_deref(), Some("/from/set"));
    assert_eq!(config.terminal.detect_locale, DetectLocale::On);
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.global.file_log_level, LogLevel::INFO);
}

#[test]
fn config_bad_set_override() {
    let global = GlobalOptions {
        options: vec!["novalue".to_string()],
        no_default_inis: true,
        ..GlobalOptions::default()
    };
    assert!(build_config_loader(&global).is_err());
}

#[test]
fn config_missing_ini_fails() {
    let global = GlobalOptions {
        inis: vec!["/nonexistent/termenv.toml".into()],
        no_default_inis: true,
        ..GlobalOptions::default()
    };
    let loader = build_config_loader(&global).unwrap();
    assert!(loader.build().is_err());
}
