// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Known factory deployments
//!
//! Literal factory/init-code-hash pairs that have been shipped for each chain.
//! None of them is applied automatically: an integrator selects one through
//! [`DexConfigBuilder::deployment`](super::DexConfigBuilder::deployment) or
//! supplies both values through settings.

use alloy_primitives::{address, b256, Address, B256};

use crate::chain::ChainId;

/// A factory contract and the init-code hash of the pairs it deploys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownDeployment {
    /// Chain the factory lives on
    pub chain_id: ChainId,
    /// Pair factory contract
    pub factory_address: Address,
    /// `keccak256` of the pair creation code, used for CREATE2 pair addresses
    pub init_code_hash: B256,
}

const KNOWN_DEPLOYMENTS: &[KnownDeployment] = &[
    KnownDeployment {
        chain_id: ChainId::Bsc,
        factory_address: address!("27aD238316128DC85b23b0EC1eb3f7153afd6860"),
        init_code_hash: b256!("fe604490e88884eee0a2ef7362417e3771d067dc74cd2e605d0b3e1e90f300cb"),
    },
    KnownDeployment {
        chain_id: ChainId::BscTestnet,
        factory_address: address!("037768f79c2985079c0B29C0b39F5bf1D598Db83"),
        init_code_hash: b256!("3a37cf8ecde8166faa9daa2f4a070be1e622988f207a874db2907fd5220573f1"),
    },
];

/// Candidate deployments recorded for `chain`
///
/// # Example
///
/// ```rust
/// use dexcore::{known_deployments, ChainId};
///
/// assert_eq!(known_deployments(ChainId::Bsc).count(), 1);
/// assert_eq!(known_deployments(ChainId::Ethereum).count(), 0);
/// ```
pub fn known_deployments(chain: ChainId) -> impl Iterator<Item = &'static KnownDeployment> {
    KNOWN_DEPLOYMENTS
        .iter()
        .filter(move |deployment| deployment.chain_id == chain)
}
