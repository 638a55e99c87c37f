// term-env: Terminal Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `LANG` derivation from a UI locale tag.
//!
//! ```text
//! None / ""   → en_US.UTF-8
//! "fr"        → fr + REGIONS["fr"] → fr_FR.UTF-8
//! "pt"        → pt.UTF-8          (no default region)
//! "pt-br"     → pt_BR.UTF-8
//! "zh-tw-x"   → zh_TW.UTF-8       (third subtag dropped)
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::env::container::Env;
use crate::error::ConfigError;

/// `LANG` used when no locale is known.
pub const FALLBACK_LANG: &str = "en_US.UTF-8";

/// Default region for bare language codes.
const DEFAULT_REGIONS: &[(&str, &str)] = &[
    ("cs", "CZ"),
    ("de", "DE"),
    ("en", "US"),
    ("es", "ES"),
    ("fi", "FI"),
    ("fr", "FR"),
    ("hu", "HU"),
    ("it", "IT"),
    ("ja", "JP"),
    ("ko", "KR"),
    ("pl", "PL"),
    ("ru", "RU"),
    ("sk", "SK"),
    ("zh", "CN"),
];

static EUC_SUFFIX: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\.euc.+").ok());

/// When to write `LANG` into a terminal environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectLocale {
    /// Only when the inherited `LANG` is missing or not a UTF-8/EUC locale.
    #[default]
    Auto,
    Off,
    On,
}

impl std::fmt::Display for DetectLocale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Off => write!(f, "off"),
            Self::On => write!(f, "on"),
        }
    }
}

impl std::str::FromStr for DetectLocale {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "off" => Ok(Self::Off),
            "on" => Ok(Self::On),
            _ => Err(ConfigError::InvalidValue {
                section: "terminal".to_string(),
                key: "detect_locale".to_string(),
                message: format!("expected 'auto', 'off', or 'on', got '{s}'"),
            }),
        }
    }
}

fn default_region(language: &str) -> Option<&'static str> {
    DEFAULT_REGIONS
        .iter()
        .find(|(lang, _)| *lang == language)
        .map(|(_, region)| *region)
}

/// Maps a locale tag such as `fr` or `pt-br` to a POSIX `LANG` value.
#[must_use]
pub fn lang_env_variable(locale: Option<&str>) -> String {
    let Some(locale) = locale.filter(|l| !l.is_empty()) else {
        return FALLBACK_LANG.to_string();
    };

    let mut parts = locale.split('-');
    let language = parts.next().unwrap_or_default();
    let region = match parts.next() {
        Some(region) => Some(region.to_uppercase()),
        None => default_region(language).map(str::to_string),
    };

    match region {
        Some(region) => format!("{language}_{region}.UTF-8"),
        None => format!("{language}.UTF-8"),
    }
}

/// Decides whether a terminal environment should get a derived `LANG`.
#[must_use]
pub fn should_set_lang_env_variable(env: &Env, detect_locale: DetectLocale) -> bool {
    match detect_locale {
        DetectLocale::On => true,
        DetectLocale::Off => false,
        DetectLocale::Auto => match env.get("LANG") {
            None | Some("") => true,
            Some(lang) => {
                let is_euc = EUC_SUFFIX.as_ref().is_some_and(|re| re.is_match(lang));
                !(lang.ends_with(".UTF-8") || lang.ends_with(".utf8") || is_euc)
            }
        },
    }
}
