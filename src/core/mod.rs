// term-env: Terminal Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for building a terminal's environment.
//!
//! ```text
//!                      terminal
//!           TerminalEnvironment::create()
//!                         |
//!     +--------+----------+---------+----------+
//!     v        v          v         v          v
//!    env    resolver    locale     cwd       exec
//!     |        |          |         |          |
//!   Env     ${...}      LANG    sanitize   find_executable
//!   merge   expansion   derive  get_cwd    PATH / PATHEXT
//!   sanitize                        |          |
//!                                   +----+-----+
//!                                        v
//!    launch: ShellLaunchConfig          path
//!                                   platform rules
//! ```

pub mod cwd;
pub mod env;
pub mod exec;
pub mod launch;
pub mod locale;
pub mod path;
pub mod resolver;
pub mod terminal;
