// term-env: Terminal Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Which command implementation for term-env.

use std::path::PathBuf;
use tracing::debug;

use crate::cli::which::WhichArgs;
use crate::core::env::container::Env;
use crate::core::env::current_env;
use crate::core::env::types::Platform;
use crate::core::exec::{ExistenceCheck, FsExistence, find_executable};
use crate::error::{LookupError, Result};

/// Locates the command named by `args`.
///
/// `--path` entries replace the `PATH` of `env`.
///
/// # Errors
///
/// Returns [`LookupError::ExecutableNotFound`] when no candidate exists.
pub async fn locate(
    args: &WhichArgs,
    env: &Env,
    exists: &impl ExistenceCheck,
    platform: Platform,
) -> std::result::Result<PathBuf, LookupError> {
    let paths = (!args.paths.is_empty()).then_some(args.paths.as_slice());
    let found = find_executable(
        &args.command,
        args.cwd.as_deref(),
        paths,
        env,
        exists,
        platform,
    )
    .await;

    debug!(command = %args.command, found = ?found, "lookup finished");
    found.ok_or_else(|| LookupError::ExecutableNotFound {
        name: args.command.clone(),
    })
}

/// Main handler for which command.
///
/// # Errors
///
/// Returns an error if the executable cannot be found.
pub async fn run_which_command(args: &WhichArgs) -> Result<()> {
    let path = locate(args, &current_env(), &FsExistence, Platform::current()).await?;
    println!("{}", path.display());
    Ok(())
}
