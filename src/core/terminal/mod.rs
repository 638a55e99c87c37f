// term-env: Terminal Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Terminal environment construction.
//!
//! # Pipeline
//!
//! ```text
//! strict_env ──► {} + non-empty shell.env ──► done
//!
//! otherwise:
//!   {} + non-empty base_env
//!   resolve ${...} in config overlay and shell.env (in place)
//!   sanitize_process_environment(preserve)
//!   merge config overlay
//!   merge shell.env            (wins on conflict)
//!   add_terminal_environment_keys
//!     TERM_PROGRAM=vscode, TERM_PROGRAM_VERSION, LANG, COLORTERM=truecolor
//! ```

use bon::Builder;
use tracing::{debug, trace};

use super::env::container::Env;
use super::env::merge::{env_entries, merge_environments, merge_non_null_keys, overlay_entries};
use super::env::sanitize::sanitize_process_environment;
use super::env::types::{EnvOverlay, Platform};
use super::launch::ShellLaunchConfig;
use super::locale::{DetectLocale, lang_env_variable, should_set_lang_env_variable};
use super::resolver::VariableResolver;

/// Value stamped into `TERM_PROGRAM`.
pub const TERM_PROGRAM: &str = "vscode";

/// Value stamped into `COLORTERM`.
pub const COLORTERM: &str = "truecolor";

/// Resolves every value of `overlay` in place.
///
/// Deletion directives and values that fail to resolve are left untouched.
pub fn resolve_configuration_variables(resolver: &dyn VariableResolver, overlay: &mut EnvOverlay) {
    for (key, value) in overlay.iter_mut() {
        let Some(current) = value.as_deref() else {
            continue;
        };
        match resolver.resolve(current) {
            Ok(resolved) => *value = Some(resolved),
            Err(e) => trace!(key = %key, error = %e, "leaving unresolved value"),
        }
    }
}

/// Stamps the identifying terminal variables into `env`.
pub fn add_terminal_environment_keys(
    env: &mut Env,
    version: Option<&str>,
    locale: Option<&str>,
    detect_locale: DetectLocale,
) {
    env.set("TERM_PROGRAM", TERM_PROGRAM);
    if let Some(version) = version.filter(|v| !v.is_empty()) {
        env.set("TERM_PROGRAM_VERSION", version);
    }
    if should_set_lang_env_variable(env, detect_locale) {
        env.set("LANG", lang_env_variable(locale));
    }
    env.set("COLORTERM", COLORTERM);
}

/// Inputs for building one terminal environment.
///
/// Both overlays are borrowed mutably: `${...}` references in them are
/// resolved in place, so the caller sees the expanded values afterwards.
///
/// ```
/// use term_env::core::env::container::Env;
/// use term_env::core::env::types::Platform;
/// use term_env::core::launch::ShellLaunchConfig;
/// use term_env::core::terminal::TerminalEnvironment;
///
/// let mut shell = ShellLaunchConfig::default();
/// let base = Env::from_pairs([("HOME", "/home/dev")], Platform::Linux.key_casing());
/// let env = TerminalEnvironment::builder()
///     .shell(&mut shell)
///     .base_env(&base)
///     .version("1.0.0")
///     .platform(Platform::Linux)
///     .build()
///     .create();
///
/// assert_eq!(env.get("TERM_PROGRAM"), Some("vscode"));
/// assert_eq!(env.get("HOME"), Some("/home/dev"));
/// ```
#[derive(Builder)]
pub struct TerminalEnvironment<'a> {
    shell: &'a mut ShellLaunchConfig,
    /// Inherited process environment.
    base_env: &'a Env,
    /// Overlay from the user's terminal configuration.
    env_from_config: Option<&'a mut EnvOverlay>,
    resolver: Option<&'a dyn VariableResolver>,
    version: Option<&'a str>,
    locale: Option<&'a str>,
    #[builder(default)]
    detect_locale: DetectLocale,
    #[builder(default)]
    platform: Platform,
    /// Inherited names exempt from sanitization.
    #[builder(default)]
    preserve: &'a [String],
}

impl TerminalEnvironment<'_> {
    /// Builds the final environment, resolving both overlays in place first.
    #[must_use]
    pub fn create(self) -> Env {
        let mut env = Env::for_platform(self.platform);

        if self.shell.strict_env {
            if let Some(overlay) = &self.shell.env {
                merge_non_null_keys(&mut env, overlay_entries(overlay));
            }
            debug!(vars = env.len(), "built strict terminal environment");
            return env;
        }

        merge_non_null_keys(&mut env, env_entries(self.base_env));

        let mut config_env = self.env_from_config;
        if let Some(resolver) = self.resolver {
            if let Some(overlay) = config_env.as_deref_mut() {
                resolve_configuration_variables(resolver, overlay);
            }
            if let Some(overlay) = self.shell.env.as_mut() {
                resolve_configuration_variables(resolver, overlay);
            }
        }

        sanitize_process_environment(&mut env, self.preserve);
        merge_environments(&mut env, config_env.as_deref());
        merge_environments(&mut env, self.shell.env.as_ref());
        add_terminal_environment_keys(&mut env, self.version, self.locale, self.detect_locale);

        debug!(vars = env.len(), platform = %self.platform, "built terminal environment");
        env
    }
}
