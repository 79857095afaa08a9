// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! SDK-wide constants and Solidity integer bounds.
//!
//! Pair math, routing and trade construction live downstream; this module only
//! holds the shared vocabulary those layers agree on.

use std::fmt;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::errors::CurrencyError;

/// Liquidity permanently locked by a pair on its first mint.
pub const MINIMUM_LIQUIDITY: U256 = U256::from_limbs([1000, 0, 0, 0]);

/// Whether a trade fixes its input or its output amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeType {
    /// The input amount is fixed; the output is computed.
    ExactInput,
    /// The output amount is fixed; the input is computed.
    ExactOutput,
}

/// Rounding mode used when rendering fractional amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rounding {
    RoundDown,
    RoundHalfUp,
    RoundUp,
}

/// Solidity unsigned integer types that amounts are checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolidityType {
    Uint8,
    Uint256,
}

impl SolidityType {
    /// Largest value representable by this type.
    ///
    /// # Examples
    ///
    /// ```
    /// use alloy_primitives::U256;
    /// use dexcore::SolidityType;
    ///
    /// assert_eq!(SolidityType::Uint8.maximum(), U256::from(255u64));
    /// assert_eq!(SolidityType::Uint256.maximum(), U256::MAX);
    /// ```
    pub fn maximum(&self) -> U256 {
        match self {
            SolidityType::Uint8 => U256::from(u8::MAX),
            SolidityType::Uint256 => U256::MAX,
        }
    }

    /// Solidity spelling of the type name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SolidityType::Uint8 => "uint8",
            SolidityType::Uint256 => "uint256",
        }
    }
}

impl fmt::Display for SolidityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check that `value` fits in `solidity_type`.
///
/// # Errors
///
/// Returns [`CurrencyError::NotInSolidityRange`] when `value` exceeds
/// [`SolidityType::maximum`].
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use dexcore::{validate_solidity_type_instance, SolidityType};
///
/// assert!(validate_solidity_type_instance(U256::from(255u64), SolidityType::Uint8).is_ok());
/// assert!(validate_solidity_type_instance(U256::from(256u64), SolidityType::Uint8).is_err());
/// ```
pub fn validate_solidity_type_instance(
    value: U256,
    solidity_type: SolidityType,
) -> Result<(), CurrencyError> {
    if value > solidity_type.maximum() {
        return Err(CurrencyError::NotInSolidityRange {
            value,
            solidity_type,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_liquidity() {
        assert_eq!(MINIMUM_LIQUIDITY, U256::from(1000u64));
    }

    #[test]
    fn test_uint8_bounds() {
        assert!(validate_solidity_type_instance(U256::ZERO, SolidityType::Uint8).is_ok());
        assert!(validate_solidity_type_instance(U256::from(255u64), SolidityType::Uint8).is_ok());
        assert_eq!(
            validate_solidity_type_instance(U256::from(256u64), SolidityType::Uint8),
            Err(CurrencyError::NotInSolidityRange {
                value: U256::from(256u64),
                solidity_type: SolidityType::Uint8,
            })
        );
    }

    #[test]
    fn test_uint256_accepts_max() {
        assert!(validate_solidity_type_instance(U256::MAX, SolidityType::Uint256).is_ok());
    }

    #[test]
    fn test_serialization() {
        assert_eq!(
            serde_json::to_string(&TradeType::ExactInput).unwrap(),
            "\"EXACT_INPUT\""
        );
        assert_eq!(
            serde_json::to_string(&Rounding::RoundHalfUp).unwrap(),
            "\"ROUND_HALF_UP\""
        );
        assert_eq!(
            serde_json::to_string(&SolidityType::Uint256).unwrap(),
            "\"uint256\""
        );
    }
}
