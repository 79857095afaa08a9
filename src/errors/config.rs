// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for DEX deployment configuration.

use super::CurrencyError;

/// Errors that can occur while resolving a [`crate::DexConfig`].
///
/// # Examples
///
/// ```rust
/// use dexcore::{ConfigError, DexConfig, MapSettings};
///
/// let settings = MapSettings::new().with("CHAIN_ID", "56");
/// match DexConfig::from_settings(&settings) {
///     Err(ConfigError::MissingSetting { key }) => assert_eq!(key, "FACTORY_ADDRESS"),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required setting was not provided by the settings source.
    #[error("Missing required setting {key}")]
    MissingSetting {
        /// Name of the missing key
        key: String,
    },

    /// A setting was present but could not be parsed.
    #[error("Invalid value for setting {key}: {details}")]
    InvalidSetting {
        /// Name of the offending key
        key: String,
        /// Why the value was rejected
        details: String,
    },

    /// A setting named an unsupported chain or a malformed address.
    #[error("Invalid chain or address: {0}")]
    Currency(#[from] CurrencyError),
}

impl ConfigError {
    /// Create a `MissingSetting` error for a key.
    pub fn missing(key: impl Into<String>) -> Self {
        ConfigError::MissingSetting { key: key.into() }
    }

    /// Create an `InvalidSetting` error with details.
    pub fn invalid(key: impl Into<String>, details: impl Into<String>) -> Self {
        ConfigError::InvalidSetting {
            key: key.into(),
            details: details.into(),
        }
    }
}
