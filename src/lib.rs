// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Currency and token value objects for decentralized-exchange clients.
//!
//! dexcore is the layer pricing, routing and trade construction build on:
//!
//! - [`Token`]: an ERC-20 asset identified by `(chain, address)`, with a
//!   validated EIP-55 address, decimal precision and optional metadata
//! - [`NativeCurrency`] and the [`Currency`] sum type, compared with
//!   [`currency_equals`]
//! - [`ChainId`]: the closed set of supported networks
//! - [`WrappedNativeRegistry`]: per-chain WETH9 and wrapped-native tokens,
//!   with [`weth9`] / [`wnative`] lookups over the well-known tables
//! - [`DexConfig`]: factory address and init-code hash resolved from an
//!   injected [`SettingsSource`]
//!
//! Everything is synchronous and immutable after construction; there is no
//! I/O.
//!
//! # Example
//!
//! ```rust
//! use dexcore::{wnative, ChainId, Token};
//!
//! let cake = Token::builder(ChainId::Bsc, "0x0E09FaBB73Bd3Ade0a17ECC321fD13a19e81cE82", 18)
//!     .symbol("CAKE")
//!     .build()?;
//! let wbnb = wnative(ChainId::Bsc).expect("WBNB is registered");
//!
//! // Deterministic pair ordering
//! let (token0, token1) = if cake.sorts_before(wbnb)? {
//!     (&cake, wbnb)
//! } else {
//!     (wbnb, &cake)
//! };
//! assert_eq!(token0.symbol(), Some("CAKE"));
//! assert_eq!(token1.symbol(), Some("WBNB"));
//! # Ok::<(), dexcore::CurrencyError>(())
//! ```

mod address;
mod chain;
mod config;
mod constants;
mod errors;
mod registry;
mod tracing;
mod types;

pub use address::{validate_and_parse_address, AddressValidator, Eip55Validator};
pub use chain::ChainId;
pub use config::{
    known_deployments, DexConfig, DexConfigBuilder, EnvSettings, KnownDeployment, MapSettings,
    SettingsSource,
};
pub use constants::{
    validate_solidity_type_instance, Rounding, SolidityType, TradeType, MINIMUM_LIQUIDITY,
};
pub use errors::{ConfigError, CurrencyError, DexCoreError};
pub use registry::{
    weth9, weth9_address, wnative, wnative_address, wrapped_native_registry,
    WrappedNativeRegistry, WrappedNativeRegistryBuilder,
};
pub use types::currency::{currency_equals, Currency, NativeCurrency};
pub use types::tokens::{Token, TokenBuilder, TokenDecimals, TokenOptions};
