// term-env: Terminal Environment Builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable struct and copy-on-write implementation.
//!
//! # Architecture
//!
//! ```text
//! Env (copy-on-write)
//! vars: Arc<BTreeMap<String, String>> + KeyCasing
//! clone shares Arc until the first write (Arc::make_mut)
//!
//! set/remove/get     fold names per KeyCasing, keep stored casing
//! insert_exact       verbatim write, no folding
//! get_ignore_case    always folds (PATH lookup)
//! ```

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::sync::Arc;

use super::types::{KeyCasing, Platform};

/// A set of environment variables with copy-on-write semantics.
///
/// Keys are stored exactly as first written. With [`KeyCasing::Insensitive`]
/// every lookup, overwrite and removal matches names case-insensitively and
/// reuses the casing already stored.
///
/// # Thread Safety
/// `Env` is `Send` and `Sync` due to its use of `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Env {
    vars: Arc<BTreeMap<String, String>>,
    casing: KeyCasing,
}

impl Default for Env {
    fn default() -> Self {
        Self::for_platform(Platform::current())
    }
}

impl Env {
    #[must_use]
    pub fn new(casing: KeyCasing) -> Self {
        Self {
            vars: Arc::default(),
            casing,
        }
    }

    /// Creates an empty environment using the key casing of `platform`.
    #[must_use]
    pub fn for_platform(platform: Platform) -> Self {
        Self::new(platform.key_casing())
    }

    /// Creates an environment from a map of variables.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>, casing: KeyCasing) -> Self {
        Self {
            vars: Arc::new(vars),
            casing,
        }
    }

    /// Creates an environment from `(name, value)` pairs, folding names per `casing`.
    pub fn from_pairs<K, V, I>(pairs: I, casing: KeyCasing) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut env = Self::new(casing);
        for (key, value) in pairs {
            env.set(key, value);
        }
        env
    }

    #[must_use]
    pub const fn casing(&self) -> KeyCasing {
        self.casing
    }

    /// Returns the stored name matching `key` under this environment's casing.
    ///
    /// An exact match is preferred over a case-folded one.
    #[must_use]
    pub fn find_key(&self, key: &str) -> Option<&str> {
        if let Some((stored, _)) = self.vars.get_key_value(key) {
            return Some(stored.as_str());
        }
        match self.casing {
            KeyCasing::Sensitive => None,
            KeyCasing::Insensitive => self
                .vars
                .keys()
                .find(|stored| stored.eq_ignore_ascii_case(key))
                .map(String::as_str),
        }
    }

    /// Sets an environment variable, reusing the stored casing of an existing name.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = key.into();
        let key = self.find_key(&key).map_or(key, str::to_owned);
        Arc::make_mut(&mut self.vars).insert(key, value.into());
        self
    }

    /// Sets an environment variable under exactly the given name.
    pub fn insert_exact(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        Arc::make_mut(&mut self.vars).insert(key.into(), value.into());
        self
    }

    /// Gets an environment variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.find_key(key)
            .and_then(|stored| self.vars.get(stored))
            .map(String::as_str)
    }

    /// Gets a variable matching `key` case-insensitively, whatever the casing mode.
    #[must_use]
    pub fn get_ignore_case(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .or_else(|| {
                self.vars
                    .iter()
                    .find(|(stored, _)| stored.eq_ignore_ascii_case(key))
                    .map(|(_, value)| value)
            })
            .map(String::as_str)
    }

    /// Removes an environment variable, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let stored = self.find_key(key)?.to_owned();
        Arc::make_mut(&mut self.vars).remove(&stored)
    }

    /// Keeps only the variables for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &str) -> bool) {
        if self.vars.iter().all(|(k, v)| keep(k, v)) {
            return;
        }
        Arc::make_mut(&mut self.vars).retain(|k, v| keep(k, v));
    }

    /// Returns all environment variables as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        (*self.vars).clone()
    }

    /// Returns an iterator over environment variables.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }
}

impl Serialize for Env {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}
