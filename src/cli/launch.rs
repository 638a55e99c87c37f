// term-env: Terminal Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments describing a simulated terminal launch.
//!
//! ```text
//! -e KEY=VALUE   launch overlay, set
//! -u KEY         launch overlay, delete
//! --strict       only the launch overlay
//! --cwd DIR      explicit launch cwd
//! --workspace    workspace folder for ${workspaceFolder} and relative cwd
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::core::env::types::Platform;
use crate::core::locale::DetectLocale;

/// Options shared by `env` and `cwd`.
#[derive(Debug, Clone, Default, Args)]
pub struct LaunchArgs {
    /// Sets a variable in the launch overlay. Can be specified multiple times.
    #[arg(short = 'e', long = "env", value_name = "KEY=VALUE", action = clap::ArgAction::Append)]
    pub set: Vec<String>,

    /// Removes a variable through the launch overlay. Can be specified multiple times.
    #[arg(short = 'u', long = "unset", value_name = "KEY", action = clap::ArgAction::Append)]
    pub unset: Vec<String>,

    /// Uses only the launch overlay, ignoring inherited and configured variables.
    #[arg(long)]
    pub strict: bool,

    /// Explicit working directory of the launch.
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<String>,

    /// Ignores `terminal.cwd` from the configuration.
    #[arg(long = "ignore-config-cwd")]
    pub ignore_config_cwd: bool,

    /// Workspace folder the terminal belongs to.
    #[arg(short = 'w', long, value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    /// UI locale used to derive LANG, e.g. 'de' or 'pt-br'.
    #[arg(long, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// When to set LANG (auto, on, off).
    #[arg(long = "detect-locale", value_name = "MODE")]
    pub detect_locale: Option<DetectLocale>,

    /// Platform rules to apply (windows, osx, linux).
    #[arg(long, value_name = "PLATFORM")]
    pub platform: Option<Platform>,
}

/// Arguments for the `env` command.
#[derive(Debug, Clone, Default, Args)]
pub struct EnvArgs {
    #[command(flatten)]
    pub launch: LaunchArgs,

    /// Prints a JSON object instead of KEY=VALUE lines.
    #[arg(long)]
    pub json: bool,
}
