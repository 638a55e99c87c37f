// term-env: Terminal Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for term-env using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! termenv [global options] <command>
//! env   [launch options] [--json]
//! cwd   [launch options]
//! which <command> [--path DIR]... [--cwd DIR]
//! lang  [locale]
//! options | inis | version
//! ```

pub mod global;
pub mod lang;
pub mod launch;
pub mod which;


use crate::cli::global::GlobalOptions;
use crate::cli::launch::{EnvArgs, LaunchArgs};
use crate::cli::lang::LangArgs;
use crate::cli::which::WhichArgs;
use clap::{Parser, Subcommand};

/// Terminal Environment Builder
///
/// Computes the environment, working directory and shell path a terminal
/// would be launched with.
#[derive(Debug, Parser)]
#[command(
    name = "termenv",
    author,
    version,
    about = "Terminal Environment Builder",
    long_about = "term-env Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Computes the environment a new terminal would start with: the\n\
                  inherited variables, the configured overlay and the launch\n\
                  overlay, plus TERM_PROGRAM, COLORTERM and LANG.",
    after_help = "CONFIG FILES:\n\n\
                  termenv reads `termenv.toml` from the current directory when\n\
                  present. Additional files can be given with --ini and are loaded\n\
                  after it. TERMENV_SECTION__KEY environment variables and --set\n\
                  overrides are applied last."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the config files.
    Options,

    /// Lists the config files used by termenv.
    Inis,

    /// Prints the environment of a new terminal.
    Env(EnvArgs),

    /// Prints the working directory of a new terminal.
    Cwd(LaunchArgs),

    /// Locates an executable the way a terminal launch would.
    Which(WhichArgs),

    /// Prints the LANG value derived from a locale.
    Lang(LangArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
