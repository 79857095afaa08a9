// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Address validation and normalization.
//!
//! Token construction delegates address handling to an [`AddressValidator`].
//! The default [`Eip55Validator`] accepts the same inputs as common wallet
//! libraries:
//!
//! - an optional `0x` prefix followed by exactly 40 hex digits
//! - all-lowercase or all-uppercase hex, which carries no checksum
//! - mixed-case hex, which must match the EIP-55 checksum exactly
//!
//! The normalized form is the 20-byte [`Address`]; its text rendering is the
//! EIP-55 checksum string, so normalizing twice is the identity.

use std::str::FromStr;

use alloy_primitives::Address;

use crate::errors::CurrencyError;

/// Validates and normalizes a textual account or contract address.
///
/// Implementations must be pure: the same input always produces the same
/// result, and a successful result re-validates to itself when rendered with
/// [`Address::to_checksum`].
pub trait AddressValidator {
    /// Parse `raw` into its canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`CurrencyError::InvalidAddress`] on malformed input.
    fn validate(&self, raw: &str) -> Result<Address, CurrencyError>;
}

/// EIP-55 checksum validator.
///
/// # Examples
///
/// ```
/// use dexcore::{AddressValidator, Eip55Validator};
///
/// let validator = Eip55Validator;
/// let address = validator
///     .validate("0xbb4cdb9cbd36b01bd1cbaebf2de08d9173bc095c")
///     .unwrap();
/// assert_eq!(
///     address.to_checksum(None),
///     "0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c"
/// );
///
/// // Mixed case with a wrong checksum is rejected
/// assert!(validator
///     .validate("0xbb4cdB9CBd36B01bD1cBaEBF2De08d9173bc095c")
///     .is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Eip55Validator;

impl AddressValidator for Eip55Validator {
    fn validate(&self, raw: &str) -> Result<Address, CurrencyError> {
        validate_and_parse_address(raw)
    }
}

/// Validate `raw` with the default [`Eip55Validator`] rules.
pub fn validate_and_parse_address(raw: &str) -> Result<Address, CurrencyError> {
    let digits = raw.strip_prefix("0x").unwrap_or(raw);

    if digits.len() != 40 {
        return Err(reject(raw, "expected 40 hex digits"));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(reject(raw, "contains non-hex characters"));
    }

    let address = Address::from_str(digits).map_err(|e| reject(raw, e.to_string()))?;

    let has_lower = digits.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = digits.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        let checksummed = address.to_checksum(None);
        if checksummed[2..] != *digits {
            return Err(reject(raw, "bad EIP-55 checksum"));
        }
    }

    Ok(address)
}

fn reject(raw: &str, reason: impl Into<String>) -> CurrencyError {
    let error = CurrencyError::invalid_address(raw, reason);
    tracing::debug!(address = raw, error = %error, "Rejected address");
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    const WETH: &str = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2";

    #[test]
    fn test_checksummed_input_accepted() {
        let parsed = validate_and_parse_address(WETH).unwrap();
        assert_eq!(parsed, address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"));
    }

    #[test]
    fn test_lowercase_and_uppercase_accepted() {
        let lower = validate_and_parse_address(&WETH.to_lowercase()).unwrap();
        let upper =
            validate_and_parse_address("0xC02AAA39B223FE8D0A0E5C4F27EAD9083C756CC2").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.to_checksum(None), WETH);
    }

    #[test]
    fn test_prefix_is_optional() {
        let parsed = validate_and_parse_address(&WETH[2..]).unwrap();
        assert_eq!(parsed.to_checksum(None), WETH);
    }

    #[test]
    fn test_bad_checksum_rejected() {
        // last `C` lowered
        let err = validate_and_parse_address("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756cc2")
            .unwrap_err();
        assert!(matches!(
            err,
            CurrencyError::InvalidAddress { ref reason, .. } if reason == "bad EIP-55 checksum"
        ));
    }

    #[test]
    fn test_malformed_rejected() {
        let too_long = format!("{WETH}00");
        for raw in ["", "0x", "0x1234", "not an address", too_long.as_str()] {
            assert!(
                matches!(
                    validate_and_parse_address(raw),
                    Err(CurrencyError::InvalidAddress { .. })
                ),
                "{raw:?} should be rejected"
            );
        }
        assert!(validate_and_parse_address("0xZZ2aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2").is_err());
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let once = validate_and_parse_address(&WETH.to_lowercase()).unwrap();
        let twice = Eip55Validator.validate(&once.to_checksum(None)).unwrap();
        assert_eq!(once, twice);
    }
}
