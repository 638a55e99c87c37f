// term-env: Terminal Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Env and cwd command implementations for term-env.
//!
//! ```text
//! LaunchArgs ──► ShellLaunchConfig ─┐
//! Config ──────► overlay, cwd, locale ├─► TerminalEnvironment::create()
//! process env ─► base Env ──────────┘      get_cwd()
//! ```

#[cfg(test)]
mod tests;

use crate::cli::launch::{EnvArgs, LaunchArgs};
use crate::cmd::user_home;
use crate::config::Config;
use crate::config::types::parse_assignment;
use crate::core::cwd::get_cwd;
use crate::core::env::container::Env;
use crate::core::env::current_env;
use crate::core::env::types::{EnvOverlay, Platform};
use crate::core::launch::ShellLaunchConfig;
use crate::core::resolver::{ConfigVariableResolver, VariableResolver};
use crate::core::terminal::TerminalEnvironment;
use crate::error::Result;

/// Builds the launch overlay from `-e` and `-u`, `None` when both are empty.
///
/// # Errors
///
/// Returns an error if a `-e` value is not `KEY=VALUE`.
pub fn launch_overlay(args: &LaunchArgs) -> Result<Option<EnvOverlay>> {
    if args.set.is_empty() && args.unset.is_empty() {
        return Ok(None);
    }

    let mut overlay = EnvOverlay::new();
    for assignment in &args.set {
        let (name, value) = parse_assignment(assignment)?;
        overlay.insert(name, Some(value));
    }
    for name in &args.unset {
        overlay.insert(name.clone(), None);
    }
    Ok(Some(overlay))
}

/// Describes the simulated launch.
///
/// # Errors
///
/// Returns an error if the launch overlay is malformed.
pub fn shell_launch_config(args: &LaunchArgs) -> Result<ShellLaunchConfig> {
    Ok(ShellLaunchConfig::builder()
        .maybe_cwd(args.cwd.clone())
        .maybe_env(launch_overlay(args)?)
        .strict_env(args.strict)
        .ignore_configuration_cwd(args.ignore_config_cwd)
        .build())
}

fn variable_resolver(
    args: &LaunchArgs,
    base: &Env,
    user_home: Option<&str>,
    platform: Platform,
) -> ConfigVariableResolver {
    ConfigVariableResolver::builder()
        .env(base.clone())
        .maybe_user_home(user_home)
        .maybe_workspace_folder(args.workspace.clone())
        .platform(platform)
        .build()
}

/// Computes the environment of the terminal described by `args`.
///
/// `base` is re-keyed with the casing rules of the selected platform.
///
/// # Errors
///
/// Returns an error if the launch or configured overlay is malformed.
pub fn compute_environment(
    args: &LaunchArgs,
    config: &Config,
    base: &Env,
    user_home: Option<&str>,
    version: &str,
) -> Result<Env> {
    let platform = args.platform.unwrap_or_default();
    let base = Env::from_map(base.to_map(), platform.key_casing());
    let mut shell = shell_launch_config(args)?;
    let mut config_env = config.env_for(platform)?;
    let resolver = variable_resolver(args, &base, user_home, platform);
    let locale = args
        .locale
        .as_deref()
        .or(config.terminal.locale.as_deref());

    Ok(TerminalEnvironment::builder()
        .shell(&mut shell)
        .base_env(&base)
        .maybe_env_from_config(config_env.as_mut())
        .resolver(&resolver as &dyn VariableResolver)
        .version(version)
        .maybe_locale(locale)
        .detect_locale(args.detect_locale.unwrap_or(config.terminal.detect_locale))
        .platform(platform)
        .preserve(config.terminal.preserve_env.as_slice())
        .build()
        .create())
}

/// Computes the working directory of the terminal described by `args`.
///
/// # Errors
///
/// Returns an error if the launch overlay is malformed.
pub fn compute_cwd(
    args: &LaunchArgs,
    config: &Config,
    base: &Env,
    user_home: Option<&str>,
) -> Result<String> {
    let platform = args.platform.unwrap_or_default();
    let shell = shell_launch_config(args)?;
    let resolver = variable_resolver(args, base, user_home, platform);

    Ok(get_cwd(
        &shell,
        user_home,
        Some(&resolver as &dyn VariableResolver),
        args.workspace.as_deref(),
        config.terminal.cwd.as_deref(),
        platform,
    ))
}

/// Renders `env` as sorted `KEY=VALUE` lines.
#[must_use]
pub fn format_env(env: &Env) -> Vec<String> {
    env.iter().map(|(key, value)| format!("{key}={value}")).collect()
}

/// Main handler for env command.
///
/// # Errors
///
/// Returns an error if an overlay is malformed or JSON encoding fails.
pub fn run_env_command(args: &EnvArgs, config: &Config, version: &str) -> Result<()> {
    let home = user_home();
    let env = compute_environment(&args.launch, config, &current_env(), home.as_deref(), version)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&env)?);
    } else {
        for line in format_env(&env) {
            println!("{line}");
        }
    }
    Ok(())
}

/// Main handler for cwd command.
///
/// # Errors
///
/// Returns an error if the launch overlay is malformed.
pub fn run_cwd_command(args: &LaunchArgs, config: &Config) -> Result<()> {
    let home = user_home();
    let cwd = compute_cwd(args, config, &current_env(), home.as_deref())?;
    println!("{cwd}");
    Ok(())
}
