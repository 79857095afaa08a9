// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! DEX deployment configuration
//!
//! A [`DexConfig`] pins the chain, the pair factory and the pair init-code
//! hash. It is resolved once at startup from an injected [`SettingsSource`]
//! and then passed explicitly to whatever needs it; there is no global lookup.
//!
//! All three values are required. Different builds have shipped different
//! factory/hash pairs for the same chain, so no deployment is ever picked by
//! default.
//!
//! # Example: From settings
//!
//! ```rust
//! use dexcore::{ChainId, DexConfig, MapSettings};
//!
//! let settings = MapSettings::new()
//!     .with("CHAIN_ID", "97")
//!     .with("FACTORY_ADDRESS", "0x037768f79c2985079c0B29C0b39F5bf1D598Db83")
//!     .with(
//!         "INIT_CODE_HASH",
//!         "0x3a37cf8ecde8166faa9daa2f4a070be1e622988f207a874db2907fd5220573f1",
//!     );
//!
//! let config = DexConfig::from_settings(&settings).unwrap();
//! assert_eq!(config.chain_id, ChainId::BscTestnet);
//! ```
//!
//! # Example: Choosing a known deployment
//!
//! ```rust
//! use dexcore::{known_deployments, ChainId, DexConfig};
//!
//! let deployment = known_deployments(ChainId::Bsc).next().unwrap();
//! let config = DexConfig::builder(ChainId::Bsc)
//!     .deployment(deployment)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.factory_address, deployment.factory_address);
//! ```

use std::str::FromStr;

use alloy_primitives::{Address, B256};

use crate::address::validate_and_parse_address;
use crate::chain::ChainId;
use crate::errors::ConfigError;
use crate::tracing::spans;

mod deployments;
mod settings;

pub use deployments::{known_deployments, KnownDeployment};
pub use settings::{EnvSettings, MapSettings, SettingsSource};

/// Configuration for a DEX deployment on one chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DexConfig {
    /// Chain the deployment lives on
    pub chain_id: ChainId,

    /// Pair factory contract
    pub factory_address: Address,

    /// `keccak256` of the pair creation code
    pub init_code_hash: B256,
}

impl DexConfig {
    /// Settings key for the numeric chain id
    pub const CHAIN_ID_KEY: &'static str = "CHAIN_ID";

    /// Settings key for the factory address
    pub const FACTORY_ADDRESS_KEY: &'static str = "FACTORY_ADDRESS";

    /// Settings key for the pair init-code hash
    pub const INIT_CODE_HASH_KEY: &'static str = "INIT_CODE_HASH";

    /// Start building a configuration for `chain_id`
    pub fn builder(chain_id: ChainId) -> DexConfigBuilder {
        DexConfigBuilder {
            chain_id,
            factory_address: None,
            init_code_hash: None,
        }
    }

    /// Resolve configuration from a settings source
    ///
    /// Reads `CHAIN_ID`, `FACTORY_ADDRESS` and `INIT_CODE_HASH`, in that order.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingSetting`] for the first absent key
    /// - [`ConfigError::InvalidSetting`] if a value does not parse
    /// - [`ConfigError::Currency`] for an unsupported chain or a malformed
    ///   factory address
    pub fn from_settings<S>(source: &S) -> Result<Self, ConfigError>
    where
        S: SettingsSource + ?Sized,
    {
        let span = spans::resolve_dex_config(source.describe());
        let _guard = span.enter();

        let raw_chain = required(source, Self::CHAIN_ID_KEY)?;
        let chain_id = raw_chain
            .trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::invalid(Self::CHAIN_ID_KEY, e.to_string()))?;
        let chain_id = ChainId::try_from(chain_id)?;

        let factory_address =
            validate_and_parse_address(required(source, Self::FACTORY_ADDRESS_KEY)?.trim())?;

        let raw_hash = required(source, Self::INIT_CODE_HASH_KEY)?;
        let init_code_hash = B256::from_str(raw_hash.trim())
            .map_err(|e| ConfigError::invalid(Self::INIT_CODE_HASH_KEY, e.to_string()))?;

        let config = Self {
            chain_id,
            factory_address,
            init_code_hash,
        };

        if !known_deployments(chain_id).any(|known| *known == config.as_deployment()) {
            tracing::warn!(
                chain = %chain_id,
                factory = %factory_address,
                "Factory/init-code-hash pair does not match any known deployment"
            );
        }
        tracing::info!(
            chain = %chain_id,
            factory = %factory_address,
            init_code_hash = %init_code_hash,
            "Resolved DEX configuration"
        );

        Ok(config)
    }

    /// View this configuration as a [`KnownDeployment`] record
    pub fn as_deployment(&self) -> KnownDeployment {
        KnownDeployment {
            chain_id: self.chain_id,
            factory_address: self.factory_address,
            init_code_hash: self.init_code_hash,
        }
    }
}

fn required<S>(source: &S, key: &str) -> Result<String, ConfigError>
where
    S: SettingsSource + ?Sized,
{
    source
        .get(key)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| ConfigError::missing(key))
}

/// Builder for [`DexConfig`]
///
/// # Example
///
/// ```rust
/// use alloy_primitives::{address, b256};
/// use dexcore::{ChainId, DexConfig};
///
/// let config = DexConfig::builder(ChainId::Bsc)
///     .factory_address(address!("27aD238316128DC85b23b0EC1eb3f7153afd6860"))
///     .init_code_hash(b256!("fe604490e88884eee0a2ef7362417e3771d067dc74cd2e605d0b3e1e90f300cb"))
///     .build()
///     .unwrap();
/// assert_eq!(config.chain_id, ChainId::Bsc);
/// ```
#[derive(Debug, Clone)]
pub struct DexConfigBuilder {
    chain_id: ChainId,
    factory_address: Option<Address>,
    init_code_hash: Option<B256>,
}

impl DexConfigBuilder {
    /// Set the pair factory address
    pub fn factory_address(mut self, address: Address) -> Self {
        self.factory_address = Some(address);
        self
    }

    /// Set the pair init-code hash
    pub fn init_code_hash(mut self, hash: B256) -> Self {
        self.init_code_hash = Some(hash);
        self
    }

    /// Take factory and hash from a known deployment
    ///
    /// Logs a warning if the deployment belongs to a different chain; the
    /// builder's chain is kept.
    pub fn deployment(mut self, deployment: &KnownDeployment) -> Self {
        if deployment.chain_id != self.chain_id {
            tracing::warn!(
                chain = %self.chain_id,
                deployment_chain = %deployment.chain_id,
                "Applying a deployment recorded for another chain"
            );
        }
        self.factory_address = Some(deployment.factory_address);
        self.init_code_hash = Some(deployment.init_code_hash);
        self
    }

    /// Finish building
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingSetting`] if the factory address or the
    /// init-code hash was never set.
    pub fn build(self) -> Result<DexConfig, ConfigError> {
        Ok(DexConfig {
            chain_id: self.chain_id,
            factory_address: self
                .factory_address
                .ok_or_else(|| ConfigError::missing(DexConfig::FACTORY_ADDRESS_KEY))?,
            init_code_hash: self
                .init_code_hash
                .ok_or_else(|| ConfigError::missing(DexConfig::INIT_CODE_HASH_KEY))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CurrencyError;
    use alloy_primitives::{address, b256};

    const BSC_FACTORY: &str = "0x27aD238316128DC85b23b0EC1eb3f7153afd6860";
    const BSC_HASH: &str = "0xfe604490e88884eee0a2ef7362417e3771d067dc74cd2e605d0b3e1e90f300cb";

    fn bsc_settings() -> MapSettings {
        MapSettings::new()
            .with("CHAIN_ID", "56")
            .with("FACTORY_ADDRESS", BSC_FACTORY)
            .with("INIT_CODE_HASH", BSC_HASH)
    }

    #[test]
    fn test_from_settings() {
        let config = DexConfig::from_settings(&bsc_settings()).unwrap();
        assert_eq!(config.chain_id, ChainId::Bsc);
        assert_eq!(
            config.factory_address,
            address!("27aD238316128DC85b23b0EC1eb3f7153afd6860")
        );
        assert_eq!(
            config.init_code_hash,
            b256!("fe604490e88884eee0a2ef7362417e3771d067dc74cd2e605d0b3e1e90f300cb")
        );
        assert!(known_deployments(ChainId::Bsc).any(|d| *d == config.as_deployment()));
    }

    #[test]
    fn test_each_key_is_required() {
        for key in ["CHAIN_ID", "FACTORY_ADDRESS", "INIT_CODE_HASH"] {
            let settings = bsc_settings().with(key, "  ");
            assert_eq!(
                DexConfig::from_settings(&settings),
                Err(ConfigError::missing(key)),
                "{key} should be required"
            );
        }

        assert_eq!(
            DexConfig::from_settings(&MapSettings::new()),
            Err(ConfigError::missing("CHAIN_ID"))
        );
    }

    #[test]
    fn test_unsupported_chain() {
        let settings = bsc_settings().with("CHAIN_ID", "31337");
        assert_eq!(
            DexConfig::from_settings(&settings),
            Err(ConfigError::Currency(CurrencyError::UnsupportedChain {
                chain_id: 31337
            }))
        );
    }

    #[test]
    fn test_invalid_values() {
        let settings = bsc_settings().with("CHAIN_ID", "bsc");
        assert!(matches!(
            DexConfig::from_settings(&settings),
            Err(ConfigError::InvalidSetting { ref key, .. }) if key == "CHAIN_ID"
        ));

        let settings = bsc_settings().with("INIT_CODE_HASH", "0x1234");
        assert!(matches!(
            DexConfig::from_settings(&settings),
            Err(ConfigError::InvalidSetting { ref key, .. }) if key == "INIT_CODE_HASH"
        ));

        let settings =
            bsc_settings().with("FACTORY_ADDRESS", "0x27ad238316128DC85b23b0EC1eb3f7153afd6860");
        assert!(matches!(
            DexConfig::from_settings(&settings),
            Err(ConfigError::Currency(CurrencyError::InvalidAddress { .. }))
        ));
    }

    #[test]
    fn test_unknown_pair_is_accepted() {
        // Custom deployments are allowed; they only produce a warning
        let settings = bsc_settings().with(
            "INIT_CODE_HASH",
            "0x0000000000000000000000000000000000000000000000000000000000000001",
        );
        let config = DexConfig::from_settings(&settings).unwrap();
        assert!(!known_deployments(ChainId::Bsc).any(|d| *d == config.as_deployment()));
    }

    #[test]
    fn test_builder_requires_both_values() {
        assert_eq!(
            DexConfig::builder(ChainId::Bsc).build(),
            Err(ConfigError::missing("FACTORY_ADDRESS"))
        );
        assert_eq!(
            DexConfig::builder(ChainId::Bsc)
                .factory_address(Address::ZERO)
                .build(),
            Err(ConfigError::missing("INIT_CODE_HASH"))
        );
    }

    #[test]
    fn test_builder_from_deployment() {
        let deployment = known_deployments(ChainId::BscTestnet).next().unwrap();
        let config = DexConfig::builder(ChainId::BscTestnet)
            .deployment(deployment)
            .build()
            .unwrap();
        assert_eq!(config.as_deployment(), *deployment);
    }
}
