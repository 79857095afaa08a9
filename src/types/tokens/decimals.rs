// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token decimal precision type

use serde::{Deserialize, Serialize};

use crate::errors::CurrencyError;

/// Decimal precision of a currency
///
/// The number of fractional digits used to scale raw integer amounts into
/// human-readable form. Most ERC-20 tokens use 18 decimals (like ETH), but some
/// use different values:
/// - USDC: 6 decimals
/// - WBTC: 8 decimals
/// - Standard: 18 decimals
///
/// Precision is stored as a `u8`, matching the ERC-20 `decimals()` return
/// type, so every value in `0..=255` is valid and nothing else is.
///
/// # Examples
///
/// ```
/// use dexcore::TokenDecimals;
///
/// assert_eq!(TokenDecimals::STANDARD.as_u8(), 18);
/// assert_eq!(TokenDecimals::try_new(255).unwrap().as_u8(), 255);
/// assert!(TokenDecimals::try_new(256).is_err());
/// assert!(TokenDecimals::try_new(-1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenDecimals(u8);

impl TokenDecimals {
    /// Standard decimals for ETH-like tokens (18)
    pub const STANDARD: Self = Self(18);

    /// USDC decimals (6)
    pub const USDC: Self = Self(6);

    /// WBTC decimals (8)
    pub const WBTC: Self = Self(8);

    /// Create a precision from a value already known to fit
    pub const fn new(decimals: u8) -> Self {
        Self(decimals)
    }

    /// Create a precision from an arbitrary integer
    ///
    /// # Errors
    ///
    /// Returns [`CurrencyError::InvalidDecimals`] when `decimals` is outside
    /// `0..=255`.
    pub fn try_new(decimals: impl Into<i128>) -> Result<Self, CurrencyError> {
        let decimals = decimals.into();
        u8::try_from(decimals)
            .map(Self)
            .map_err(|_| CurrencyError::InvalidDecimals { decimals })
    }

    /// Get the inner u8 value
    pub const fn as_u8(&self) -> u8 {
        self.0
    }
}

impl From<u8> for TokenDecimals {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<TokenDecimals> for u8 {
    fn from(value: TokenDecimals) -> Self {
        value.0
    }
}

impl std::fmt::Display for TokenDecimals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} decimals", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_decimals_constants() {
        assert_eq!(TokenDecimals::STANDARD.as_u8(), 18);
        assert_eq!(TokenDecimals::USDC.as_u8(), 6);
        assert_eq!(TokenDecimals::WBTC.as_u8(), 8);
    }

    #[test]
    fn test_try_new_bounds() {
        assert_eq!(TokenDecimals::try_new(0u8).unwrap().as_u8(), 0);
        assert_eq!(TokenDecimals::try_new(255u32).unwrap().as_u8(), 255);
        assert_eq!(
            TokenDecimals::try_new(256),
            Err(CurrencyError::InvalidDecimals { decimals: 256 })
        );
        assert_eq!(
            TokenDecimals::try_new(-1i64),
            Err(CurrencyError::InvalidDecimals { decimals: -1 })
        );
        assert!(TokenDecimals::try_new(u64::MAX).is_err());
    }

    #[test]
    fn test_display_formatting() {
        let decimals = TokenDecimals::STANDARD;
        assert_eq!(format!("{}", decimals), "18 decimals");
    }

    #[test]
    fn test_serialization() {
        let decimals = TokenDecimals::STANDARD;
        let json = serde_json::to_string(&decimals).unwrap();
        assert_eq!(json, "18");
        let deserialized: TokenDecimals = serde_json::from_str(&json).unwrap();
        assert_eq!(decimals, deserialized);

        assert!(serde_json::from_str::<TokenDecimals>("256").is_err());
    }

    #[test]
    fn test_conversions() {
        let u8_val: u8 = 18;
        let decimals: TokenDecimals = u8_val.into();
        let back: u8 = decimals.into();
        assert_eq!(u8_val, back);
    }
}
