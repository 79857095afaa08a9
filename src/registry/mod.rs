// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Chain-keyed registries of wrapped-native-asset tokens
//!
//! A [`WrappedNativeRegistry`] holds four read-only tables keyed by
//! [`ChainId`]:
//!
//! 1. the WETH9 (wrapped ether) address,
//! 2. the canonical wrapped-native address used by routing,
//! 3. the WETH9 [`Token`],
//! 4. the canonical wrapped-native [`Token`] (WBNB on BSC, WMATIC on Polygon...).
//!
//! The well-known tables are built once, on first access, and are exposed only
//! through shared references. Lookups for unconfigured chains return `None`.
//!
//! # Examples
//!
//! ```
//! use dexcore::{wnative, ChainId};
//!
//! let wbnb = wnative(ChainId::Bsc).unwrap();
//! assert_eq!(wbnb.symbol(), Some("WBNB"));
//! assert_eq!(wbnb.chain_id(), ChainId::Bsc);
//!
//! // Not configured: absent, not an error
//! assert!(dexcore::weth9(ChainId::BscTestnet).is_none());
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use alloy_primitives::Address;

use crate::chain::ChainId;
use crate::tracing::spans;
use crate::types::tokens::{Token, TokenDecimals};

mod tables;

static WELL_KNOWN: LazyLock<WrappedNativeRegistry> =
    LazyLock::new(WrappedNativeRegistry::well_known);

/// Read-only chain-keyed wrapped-native tables
///
/// Token tables are keyed by each token's own chain, so every entry in
/// [`wnative`](Self::wnative) resolves to a token whose `chain_id` equals the
/// lookup key.
#[derive(Debug, Clone, Default)]
pub struct WrappedNativeRegistry {
    weth9_addresses: HashMap<ChainId, Address>,
    wnative_addresses: HashMap<ChainId, Address>,
    weth9: HashMap<ChainId, Token>,
    wnative: HashMap<ChainId, Token>,
}

impl WrappedNativeRegistry {
    /// Start assembling a custom registry
    pub fn builder() -> WrappedNativeRegistryBuilder {
        WrappedNativeRegistryBuilder::default()
    }

    /// Build the registry from the well-known literal tables
    ///
    /// Prefer [`wrapped_native_registry`] for the shared process-wide instance.
    pub fn well_known() -> Self {
        let builder = tables::WETH9
            .iter()
            .fold(Self::builder(), |builder, &(chain, address)| {
                builder.weth9(chain, address)
            });

        tables::WNATIVE
            .iter()
            .fold(builder, |builder, &(chain, address, symbol, name)| {
                builder.wnative(Token::known(
                    chain,
                    address,
                    TokenDecimals::STANDARD,
                    symbol,
                    name,
                ))
            })
            .build()
    }

    /// WETH9 address on `chain`
    pub fn weth9_address(&self, chain: ChainId) -> Option<Address> {
        self.weth9_addresses.get(&chain).copied()
    }

    /// Canonical wrapped-native address on `chain`
    pub fn wnative_address(&self, chain: ChainId) -> Option<Address> {
        self.wnative_addresses.get(&chain).copied()
    }

    /// WETH9 token on `chain`
    pub fn weth9(&self, chain: ChainId) -> Option<&Token> {
        self.weth9.get(&chain)
    }

    /// Canonical wrapped-native token on `chain`
    pub fn wnative(&self, chain: ChainId) -> Option<&Token> {
        self.wnative.get(&chain)
    }

    /// Chains with a canonical wrapped-native token, in chain-id order
    pub fn wnative_chains(&self) -> Vec<ChainId> {
        let mut chains: Vec<ChainId> = self.wnative.keys().copied().collect();
        chains.sort();
        chains
    }
}

/// Builder for [`WrappedNativeRegistry`]
///
/// Tables are append-only: registering a chain a second time keeps the first
/// entry and logs a warning.
///
/// # Example
///
/// ```
/// use alloy_primitives::address;
/// use dexcore::{ChainId, Token, TokenDecimals, WrappedNativeRegistry};
///
/// let registry = WrappedNativeRegistry::builder()
///     .wnative(Token::known(
///         ChainId::BscTestnet,
///         address!("ae13d989daC2f0dEbFf460aC112a837C89BAa7cd"),
///         TokenDecimals::STANDARD,
///         "WBNB",
///         "Wrapped BNB",
///     ))
///     .build();
///
/// assert!(registry.wnative(ChainId::BscTestnet).is_some());
/// assert!(registry.wnative(ChainId::Bsc).is_none());
/// ```
#[derive(Debug, Default)]
pub struct WrappedNativeRegistryBuilder {
    registry: WrappedNativeRegistry,
}

impl WrappedNativeRegistryBuilder {
    /// Register the WETH9 address for `chain`, along with its WETH token
    pub fn weth9(mut self, chain: ChainId, address: Address) -> Self {
        if self.registry.weth9_addresses.contains_key(&chain) {
            tracing::warn!(chain = %chain, address = %address, "Ignoring duplicate WETH9 entry");
            return self;
        }

        self.registry.weth9_addresses.insert(chain, address);
        self.registry.weth9.insert(
            chain,
            Token::known(
                chain,
                address,
                TokenDecimals::STANDARD,
                "WETH",
                "Wrapped Ether",
            ),
        );
        self
    }

    /// Register `token` as the canonical wrapped-native asset of its chain
    pub fn wnative(mut self, token: Token) -> Self {
        let chain = token.chain_id();
        if self.registry.wnative.contains_key(&chain) {
            tracing::warn!(chain = %chain, token = %token, "Ignoring duplicate wrapped-native entry");
            return self;
        }

        self.registry.wnative_addresses.insert(chain, token.address());
        self.registry.wnative.insert(chain, token);
        self
    }

    /// Finish building
    pub fn build(self) -> WrappedNativeRegistry {
        let registry = self.registry;

        let span = spans::build_wrapped_native_registry(
            registry.weth9_addresses.len(),
            registry.wnative_addresses.len(),
        );
        let _guard = span.enter();
        tracing::debug!(
            chains = registry.wnative_chains().len(),
            "Built wrapped-native registry"
        );

        registry
    }
}

/// The shared registry built from the well-known tables
pub fn wrapped_native_registry() -> &'static WrappedNativeRegistry {
    &WELL_KNOWN
}

/// WETH9 address on `chain` from the well-known tables
pub fn weth9_address(chain: ChainId) -> Option<Address> {
    WELL_KNOWN.weth9_address(chain)
}

/// Canonical wrapped-native address on `chain` from the well-known tables
pub fn wnative_address(chain: ChainId) -> Option<Address> {
    WELL_KNOWN.wnative_address(chain)
}

/// WETH9 token on `chain` from the well-known tables
pub fn weth9(chain: ChainId) -> Option<&'static Token> {
    WELL_KNOWN.weth9(chain)
}

/// Canonical wrapped-native token on `chain` from the well-known tables
pub fn wnative(chain: ChainId) -> Option<&'static Token> {
    WELL_KNOWN.wnative(chain)
}
