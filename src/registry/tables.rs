// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Literal per-chain address tables
//!
//! The WETH9 table lists the wrapped-ether asset deployed on each chain, which
//! on non-Ethereum networks is usually a bridged token rather than the
//! chain's own wrapped gas currency. The WNATIVE table lists the asset routing
//! actually wraps the native currency into.

use alloy_primitives::{address, Address};

use crate::chain::ChainId;

/// Wrapped ether (WETH9 or its bridged equivalent) per chain.
#[rustfmt::skip]
pub(crate) const WETH9: &[(ChainId, Address)] = &[
    (ChainId::Ethereum, address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2")),
    (ChainId::Ropsten, address!("c778417E063141139Fce010982780140Aa0cD5Ab")),
    (ChainId::Rinkeby, address!("c778417E063141139Fce010982780140Aa0cD5Ab")),
    (ChainId::Goerli, address!("B4FBF271143F4FBf7B91A5ded31805e42b2208d6")),
    (ChainId::Kovan, address!("d0A1E359811322d97991E03f863a0C30C2cF029C")),
    (ChainId::Arbitrum, address!("82aF49447D8a07e3bd95BD0d56f35241523fBab1")),
    (ChainId::ArbitrumTestnet, address!("f8456e5e6A225C2C1D74D8C9a4cB2B1d5dc1153b")),
    (ChainId::Bsc, address!("2170Ed0880ac9A755fd29B2688956BD959F933F8")),
    (ChainId::Fantom, address!("74b23882a30290451A17c44f4F05243b6b58C76d")),
    (ChainId::Matic, address!("7ceB23fD6bC0adD59E62ac25578270cFf1b9f619")),
    (ChainId::MaticTestnet, address!("714550C2C1Ea08688607D86ed8EeF4f5E4F22323")),
    (ChainId::Okex, address!("2170Ed0880ac9A755fd29B2688956BD959F933F8")),
    (ChainId::Heco, address!("64FF637fB478863B7468bc97D30a5bF3A428a1fD")),
    (ChainId::Harmony, address!("6983D1E6DEf3690C4d616b13597A09e6193EA013")),
    (ChainId::Xdai, address!("6A023CCd1ff6F2045C3309768eAd9E68F978f6e1")),
    (ChainId::Avalanche, address!("49D5c2BdFfac6CE2BFdB6640F4F80f226bc10bAB")),
    (ChainId::Palm, address!("726138359C17F1E56bA8c4F737a7CAf724F6010b")),
    (ChainId::Celo, address!("122013fd7dF1C6F636a5bb8f03108E876548b455")),
    (ChainId::Moonriver, address!("639A647fbe20b6c8ac19E48E2de44ea792c62c5C")),
    (ChainId::Telos, address!("fA9343C3897324496A05fC75abeD6bAC29f8A40f")),
    (ChainId::Fuse, address!("a722c13135930332Eb3d749B2F0906559D2C5b99")),
    (ChainId::Moonbeam, address!("30D2a9F5FDf90ACe8c17952cbb4eE48a55D916A7")),
    (ChainId::Optimism, address!("4200000000000000000000000000000000000006")),
];

/// Canonical wrapped-native asset per chain: `(chain, address, symbol, name)`.
#[rustfmt::skip]
pub(crate) const WNATIVE: &[(ChainId, Address, &str, &str)] = &[
    (ChainId::Ethereum, address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"), "WETH", "Wrapped Ether"),
    (ChainId::Ropsten, address!("c778417E063141139Fce010982780140Aa0cD5Ab"), "WETH", "Wrapped Ether"),
    (ChainId::Rinkeby, address!("c778417E063141139Fce010982780140Aa0cD5Ab"), "WETH", "Wrapped Ether"),
    (ChainId::Goerli, address!("B4FBF271143F4FBf7B91A5ded31805e42b2208d6"), "WETH", "Wrapped Ether"),
    (ChainId::Kovan, address!("d0A1E359811322d97991E03f863a0C30C2cF029C"), "WETH", "Wrapped Ether"),
    (ChainId::Optimism, address!("4200000000000000000000000000000000000006"), "WETH", "Wrapped Ether"),
    (ChainId::Arbitrum, address!("82aF49447D8a07e3bd95BD0d56f35241523fBab1"), "WETH", "Wrapped Ether"),
    (ChainId::ArbitrumTestnet, address!("f8456e5e6A225C2C1D74D8C9a4cB2B1d5dc1153b"), "WETH", "Wrapped Ether"),
    (ChainId::Fantom, address!("21be370D5312f44cB42ce377BC9b8a0cEF1A4C83"), "WFTM", "Wrapped FTM"),
    (ChainId::FantomTestnet, address!("f1277d1Ed8AD466beddF92ef448A132661956621"), "FTM", "Wrapped FTM"),
    (ChainId::Matic, address!("0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270"), "WMATIC", "Wrapped Matic"),
    (ChainId::MaticTestnet, address!("5B67676a984807a212b1c59eBFc9B3568a474F0a"), "WMATIC", "Wrapped Matic"),
    (ChainId::Xdai, address!("e91D153E0b41518A2Ce8Dd3D7944Fa863463a97d"), "WXDAI", "Wrapped xDai"),
    (ChainId::Bsc, address!("bb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c"), "WBNB", "Wrapped BNB"),
    (ChainId::BscTestnet, address!("ae13d989daC2f0dEbFf460aC112a837C89BAa7cd"), "WBNB", "Wrapped BNB"),
    (ChainId::MoonbeamTestnet, address!("372d0695E75563D9180F8CE31c9924D7e8aaac47"), "WETH", "Wrapped Ether"),
    (ChainId::Avalanche, address!("B31f66AA3C1e785363F0875A1B74E27b85FD66c7"), "WAVAX", "Wrapped AVAX"),
    (ChainId::AvalancheTestnet, address!("d00ae08403B9bbb9124bB305C09058E32C39A48c"), "WAVAX", "Wrapped AVAX"),
    (ChainId::Heco, address!("5545153CCFcA01fbd7Dd11C0b23ba694D9509A6F"), "WHT", "Wrapped HT"),
    (ChainId::HecoTestnet, address!("5B2DA6F42CA09C77D577a12BeaD0446148830687"), "WHT", "Wrapped HT"),
    (ChainId::Harmony, address!("cF664087a5bB0237a0BAd6742852ec6c8d69A27a"), "WONE", "Wrapped ONE"),
    (ChainId::HarmonyTestnet, address!("7a2afac38517d512E55C0bCe3b6805c10a04D60F"), "WONE", "Wrapped ONE"),
    (ChainId::Okex, address!("8F8526dbfd6E38E3D8307702cA8469Bae6C56C15"), "WOKT", "Wrapped OKExChain"),
    (ChainId::OkexTestnet, address!("2219845942d28716c0F7C605765fABDcA1a7d9E0"), "WOKT", "Wrapped OKExChain"),
    (ChainId::Palm, address!("F98cABF0a963452C5536330408B2590567611a71"), "WPALM", "Wrapped Palm"),
    (ChainId::Celo, address!("471EcE3750Da237f93B8E339c536989b8978a438"), "CELO", "Celo"),
    (ChainId::Moonriver, address!("f50225a84382c74CbdeA10b0c176f71fc3DE0C4d"), "WMOVR", "Wrapped Moonriver"),
    (ChainId::Fuse, address!("0BE9e53fd7EDaC9F859882AfdDa116645287C629"), "WFUSE", "Wrapped Fuse"),
    (ChainId::Telos, address!("D102cE6A4dB07D247fcc28F366A623Df0938CA9E"), "WTLOS", "Wrapped Telos"),
    (ChainId::Moonbeam, address!("Acc15dC74880C9944775448304B263D191c6077F"), "WGLMR", "Wrapped Glimmer"),
];
