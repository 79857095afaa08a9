// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Injectable settings sources
//!
//! Configuration is read from a [`SettingsSource`] handed in by the caller, so
//! nothing in this crate consults ambient process state on its own.

use std::collections::HashMap;

/// A key-value source of raw configuration strings.
pub trait SettingsSource {
    /// Look up `key`, returning `None` when it is not set.
    fn get(&self, key: &str) -> Option<String>;

    /// Short description used in logs.
    fn describe(&self) -> &'static str;
}

/// Reads settings from process environment variables
///
/// An optional prefix is prepended to every key, so with prefix `REACT_APP_`
/// the `CHAIN_ID` setting is read from `REACT_APP_CHAIN_ID`.
#[derive(Debug, Clone, Default)]
pub struct EnvSettings {
    prefix: Option<String>,
}

impl EnvSettings {
    /// Read unprefixed environment variables
    pub fn new() -> Self {
        Self::default()
    }

    /// Read environment variables named `{prefix}{key}`
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    fn var_name(&self, key: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}{key}"),
            None => key.to_string(),
        }
    }
}

impl SettingsSource for EnvSettings {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(self.var_name(key)).ok()
    }

    fn describe(&self) -> &'static str {
        "env"
    }
}

/// In-memory settings, mostly for tests and embedded configuration
///
/// # Example
///
/// ```rust
/// use dexcore::{MapSettings, SettingsSource};
///
/// let settings = MapSettings::new().with("CHAIN_ID", "97");
/// assert_eq!(settings.get("CHAIN_ID").as_deref(), Some("97"));
/// assert_eq!(settings.get("FACTORY_ADDRESS"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapSettings {
    values: HashMap<String, String>,
}

impl MapSettings {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a setting
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl From<HashMap<String, String>> for MapSettings {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl SettingsSource for MapSettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn describe(&self) -> &'static str {
        "map"
    }
}
