// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Supported network identifiers.
//!
//! [`ChainId`] is a closed set of tags. Each variant carries the numeric
//! EIP-155 chain id of its network, so the enum converts losslessly to and from
//! `u64` and to [`alloy_chains::Chain`] for interop with the rest of the alloy
//! stack.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::CurrencyError;

macro_rules! chain_ids {
    ($($(#[$doc:meta])* $variant:ident = $id:literal => $name:literal,)+) => {
        /// A supported blockchain network.
        ///
        /// Serialized as its integer chain id.
        ///
        /// # Examples
        ///
        /// ```
        /// use dexcore::ChainId;
        ///
        /// assert_eq!(ChainId::Bsc.id(), 56);
        /// assert_eq!(ChainId::try_from(97).unwrap(), ChainId::BscTestnet);
        /// assert!(ChainId::try_from(31337).is_err());
        /// ```
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "u64", into = "u64")]
        #[repr(u64)]
        pub enum ChainId {
            $($(#[$doc])* $variant = $id,)+
        }

        impl ChainId {
            /// Every supported chain, in declaration order.
            pub const ALL: &'static [ChainId] = &[$(ChainId::$variant,)+];

            /// Short kebab-case name used in logs and error messages.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(ChainId::$variant => $name,)+
                }
            }
        }

        impl TryFrom<u64> for ChainId {
            type Error = CurrencyError;

            fn try_from(chain_id: u64) -> Result<Self, Self::Error> {
                match chain_id {
                    $($id => Ok(ChainId::$variant),)+
                    _ => Err(CurrencyError::UnsupportedChain { chain_id }),
                }
            }
        }
    };
}

chain_ids! {
    /// Ethereum mainnet
    Ethereum = 1 => "ethereum",
    Ropsten = 3 => "ropsten",
    Rinkeby = 4 => "rinkeby",
    Goerli = 5 => "goerli",
    Optimism = 10 => "optimism",
    Telos = 40 => "telos",
    Kovan = 42 => "kovan",
    /// BNB Smart Chain mainnet
    Bsc = 56 => "bsc",
    OkexTestnet = 65 => "okex-testnet",
    Okex = 66 => "okex",
    /// BNB Smart Chain testnet
    BscTestnet = 97 => "bsc-testnet",
    /// Gnosis chain, formerly xDai
    Xdai = 100 => "xdai",
    Fuse = 122 => "fuse",
    Heco = 128 => "heco",
    /// Polygon PoS
    Matic = 137 => "matic",
    Fantom = 250 => "fantom",
    HecoTestnet = 256 => "heco-testnet",
    Moonbeam = 1284 => "moonbeam",
    Moonriver = 1285 => "moonriver",
    /// Moonbase Alpha
    MoonbeamTestnet = 1287 => "moonbeam-testnet",
    FantomTestnet = 4002 => "fantom-testnet",
    Arbitrum = 42161 => "arbitrum",
    Celo = 42220 => "celo",
    /// Avalanche Fuji
    AvalancheTestnet = 43113 => "avalanche-testnet",
    Avalanche = 43114 => "avalanche",
    /// Polygon Mumbai
    MaticTestnet = 80001 => "matic-testnet",
    Harmony = 1666600000 => "harmony",
    HarmonyTestnet = 1666700000 => "harmony-testnet",
    PalmTestnet = 11297108099 => "palm-testnet",
    Palm = 11297108109 => "palm",
    /// Arbitrum Rinkeby
    ArbitrumTestnet = 79377087078960 => "arbitrum-testnet",
}

impl ChainId {
    /// The numeric EIP-155 chain id.
    pub const fn id(&self) -> u64 {
        *self as u64
    }

    /// Convert to an [`alloy_chains::Chain`].
    pub fn to_alloy_chain(&self) -> alloy_chains::Chain {
        alloy_chains::Chain::from_id(self.id())
    }
}

impl From<ChainId> for u64 {
    fn from(chain: ChainId) -> Self {
        chain.id()
    }
}

impl From<ChainId> for alloy_chains::Chain {
    fn from(chain: ChainId) -> Self {
        chain.to_alloy_chain()
    }
}

impl TryFrom<alloy_chains::Chain> for ChainId {
    type Error = CurrencyError;

    fn try_from(chain: alloy_chains::Chain) -> Result<Self, Self::Error> {
        ChainId::try_from(chain.id())
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
