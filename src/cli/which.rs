// term-env: Terminal Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Lookup command arguments.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `which` command.
#[derive(Debug, Clone, Default, Args)]
pub struct WhichArgs {
    /// Command to locate, e.g. 'bash' or './run.sh'.
    #[arg(value_name = "COMMAND")]
    pub command: String,

    /// Search directory, replaces PATH. Can be specified multiple times.
    #[arg(short = 'p', long = "path", value_name = "DIR", action = clap::ArgAction::Append)]
    pub paths: Vec<String>,

    /// Directory relative commands are resolved against.
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}
