// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for dexcore integration tests
//!
//! Provides proptest strategies for chains, addresses and the textual forms an
//! address may arrive in.

#![allow(dead_code)]

use alloy_primitives::{hex, Address};
use dexcore::ChainId;
use proptest::prelude::*;

/// Any supported chain
pub fn arb_chain() -> impl Strategy<Value = ChainId> {
    prop::sample::select(ChainId::ALL.to_vec())
}

/// Any 20-byte address
pub fn arb_address() -> impl Strategy<Value = Address> {
    any::<[u8; 20]>().prop_map(Address::from)
}

/// How a caller spells an address
#[derive(Debug, Clone, Copy)]
pub enum AddressCase {
    Lower,
    Upper,
    Checksummed,
    Unprefixed,
}

/// Any of the accepted spellings
pub fn arb_address_case() -> impl Strategy<Value = AddressCase> {
    prop_oneof![
        Just(AddressCase::Lower),
        Just(AddressCase::Upper),
        Just(AddressCase::Checksummed),
        Just(AddressCase::Unprefixed),
    ]
}

/// Render `address` the way a caller might supply it
pub fn spell(address: Address, case: AddressCase) -> String {
    let digits = hex::encode(address);
    match case {
        AddressCase::Lower => format!("0x{digits}"),
        AddressCase::Upper => format!("0x{}", digits.to_uppercase()),
        AddressCase::Checksummed => address.to_checksum(None),
        AddressCase::Unprefixed => digits,
    }
}

/// Lowercase `0x`-prefixed hex, the order key for token sorting
pub fn lower_hex(address: Address) -> String {
    format!("0x{}", hex::encode(address))
}
