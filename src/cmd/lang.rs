// term-env: Terminal Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Lang command implementation for term-env.

use crate::cli::lang::LangArgs;
use crate::config::Config;
use crate::core::locale::lang_env_variable;

/// Main handler for lang command.
pub fn run_lang_command(args: &LangArgs, config: &Config) {
    let locale = args
        .locale
        .as_deref()
        .or(config.terminal.locale.as_deref());
    println!("{}", lang_env_variable(locale));
}
