// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for currency and token operations.

use alloy_primitives::{Address, U256};

use crate::chain::ChainId;
use crate::constants::SolidityType;

/// Errors raised while constructing, validating or ordering currencies.
///
/// All variants are synchronous input-validation failures. They are surfaced
/// directly to the caller and never recovered internally.
///
/// # Examples
///
/// ```rust
/// use dexcore::{CurrencyError, TokenDecimals};
///
/// let err = TokenDecimals::try_new(256).unwrap_err();
/// assert!(matches!(err, CurrencyError::InvalidDecimals { decimals: 256 }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurrencyError {
    /// Decimal precision outside `0..=255`.
    #[error("Invalid decimals {decimals}: must fit in 0..=255")]
    InvalidDecimals {
        /// The rejected precision
        decimals: i128,
    },

    /// The address string is malformed or fails its EIP-55 checksum.
    ///
    /// Token construction aborts; no partially-built token is observable.
    #[error("Invalid address {address:?}: {reason}")]
    InvalidAddress {
        /// The raw input as supplied by the caller
        address: String,
        /// Why the input was rejected
        reason: String,
    },

    /// Ordering was requested between tokens on different chains.
    #[error("Cannot order tokens across chains: {left} vs {right}")]
    ChainMismatch {
        /// Chain of the receiver
        left: ChainId,
        /// Chain of the other token
        right: ChainId,
    },

    /// Ordering was requested between two tokens with the same address.
    ///
    /// Callers should check equality before asking for an order.
    #[error("Cannot order a token against itself: {address}")]
    IdenticalAddress {
        /// The shared address
        address: Address,
    },

    /// The numeric chain identifier is not one of the supported networks.
    #[error("Unsupported chain id {chain_id}")]
    UnsupportedChain {
        /// The unrecognized chain id
        chain_id: u64,
    },

    /// A value exceeds the maximum of its Solidity integer type.
    #[error("{value} is not a {solidity_type}")]
    NotInSolidityRange {
        /// The offending value
        value: U256,
        /// The Solidity type it was checked against
        solidity_type: SolidityType,
    },
}

impl CurrencyError {
    /// Create an `InvalidAddress` error for a raw input.
    pub fn invalid_address(address: impl Into<String>, reason: impl Into<String>) -> Self {
        CurrencyError::InvalidAddress {
            address: address.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = CurrencyError::InvalidDecimals { decimals: -1 };
        assert_eq!(err.to_string(), "Invalid decimals -1: must fit in 0..=255");

        let err = CurrencyError::ChainMismatch {
            left: ChainId::Bsc,
            right: ChainId::BscTestnet,
        };
        assert_eq!(
            err.to_string(),
            "Cannot order tokens across chains: bsc vs bsc-testnet"
        );

        let err = CurrencyError::invalid_address("0x12", "expected 40 hex digits");
        assert_eq!(
            err.to_string(),
            "Invalid address \"0x12\": expected 40 hex digits"
        );
    }

    #[test]
    fn test_solidity_range_message() {
        let err = CurrencyError::NotInSolidityRange {
            value: U256::from(256u64),
            solidity_type: SolidityType::Uint8,
        };
        assert_eq!(err.to_string(), "256 is not a uint8");
    }
}
