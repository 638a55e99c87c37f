// term-env: Terminal Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Lang command arguments.

use clap::Args;

/// Arguments for the `lang` command.
#[derive(Debug, Clone, Default, Args)]
pub struct LangArgs {
    /// Locale tag, e.g. 'fr' or 'pt-br'. Defaults to terminal.locale.
    #[arg(value_name = "LOCALE")]
    pub locale: Option<String>,
}
