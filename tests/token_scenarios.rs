// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end scenarios for tokens, registries and configuration
//!
//! Each test walks the public API the way a pricing or routing client would.

use alloy_primitives::address;
use dexcore::{
    currency_equals, weth9, wnative, wrapped_native_registry, ChainId, ConfigError, Currency,
    CurrencyError, DexConfig, EnvSettings, NativeCurrency, Token,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_construct_token_preserves_checksum() {
    init_tracing();

    let token = Token::builder(ChainId::Bsc, "0x27aD238316128DC85b23b0EC1eb3f7153afd6860", 18)
        .symbol("PCS")
        .build()
        .unwrap();

    assert_eq!(token.chain_id(), ChainId::Bsc);
    assert_eq!(
        token.checksum_address(),
        "0x27aD238316128DC85b23b0EC1eb3f7153afd6860"
    );
    assert_eq!(
        token.address(),
        address!("27aD238316128DC85b23b0EC1eb3f7153afd6860")
    );
    assert_eq!(token.decimals().as_u8(), 18);
}

#[test]
fn test_case_insensitive_identity() {
    init_tracing();

    let upper = Token::new(
        ChainId::Bsc,
        "0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
        18,
    )
    .unwrap();
    let lower = Token::new(
        ChainId::Bsc,
        "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
        9,
    )
    .unwrap();

    assert!(upper.equals(&lower));
    assert_eq!(upper, lower);
    assert_eq!(
        upper.sorts_before(&lower),
        Err(CurrencyError::IdenticalAddress {
            address: upper.address()
        })
    );
}

#[test]
fn test_cross_chain_ordering_rejected() {
    init_tracing();

    let mainnet = Token::new(
        ChainId::Bsc,
        "0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c",
        18,
    )
    .unwrap();
    let testnet = Token::new(
        ChainId::BscTestnet,
        "0xae13d989daC2f0dEbFf460aC112a837C89BAa7cd",
        18,
    )
    .unwrap();

    assert_eq!(
        mainnet.sorts_before(&testnet),
        Err(CurrencyError::ChainMismatch {
            left: ChainId::Bsc,
            right: ChainId::BscTestnet,
        })
    );
    assert!(!mainnet.equals(&testnet));
}

#[test]
fn test_unconfigured_chain_lookup_is_absent() {
    init_tracing();

    assert!(wnative(ChainId::PalmTestnet).is_none());
    assert!(weth9(ChainId::BscTestnet).is_none());

    let wbnb = wnative(ChainId::BscTestnet).unwrap();
    assert_eq!(wbnb.symbol(), Some("WBNB"));
    assert_eq!(wbnb.chain_id(), ChainId::BscTestnet);
}

#[test]
fn test_decimals_boundary() {
    init_tracing();

    const ADDRESS: &str = "0x0E09FaBB73Bd3Ade0a17ECC321fD13a19e81cE82";

    assert_eq!(
        Token::new(ChainId::Bsc, ADDRESS, 256),
        Err(CurrencyError::InvalidDecimals { decimals: 256 })
    );
    assert_eq!(
        Token::new(ChainId::Bsc, ADDRESS, 255)
            .unwrap()
            .decimals()
            .as_u8(),
        255
    );
}

#[test]
fn test_pair_ordering_against_registry() {
    init_tracing();

    let cake = Token::builder(ChainId::Bsc, "0x0E09FaBB73Bd3Ade0a17ECC321fD13a19e81cE82", 18)
        .symbol("CAKE")
        .build()
        .unwrap();
    let wbnb = wnative(ChainId::Bsc).unwrap();

    assert!(cake.sorts_before(wbnb).unwrap());
    assert!(!wbnb.sorts_before(&cake).unwrap());

    // The native coin is never the same currency as its wrapper
    let bnb = Currency::from(NativeCurrency::BNB);
    assert!(!currency_equals(&bnb, &Currency::from(wbnb.clone())));
}

#[test]
fn test_registry_is_shared() {
    init_tracing();

    let first = wrapped_native_registry();
    let second = wrapped_native_registry();
    assert!(std::ptr::eq(first, second));
    assert!(std::ptr::eq(
        first.wnative(ChainId::Bsc).unwrap(),
        wnative(ChainId::Bsc).unwrap()
    ));
}

#[test]
fn test_config_from_environment() {
    init_tracing();

    // Unique prefix keeps this test isolated from the process environment
    let settings = EnvSettings::with_prefix("DEXCORE_SCENARIO_");
    assert_eq!(
        DexConfig::from_settings(&settings),
        Err(ConfigError::MissingSetting {
            key: "CHAIN_ID".to_string()
        })
    );

    std::env::set_var("DEXCORE_SCENARIO_CHAIN_ID", "56");
    std::env::set_var(
        "DEXCORE_SCENARIO_FACTORY_ADDRESS",
        "0x27aD238316128DC85b23b0EC1eb3f7153afd6860",
    );
    std::env::set_var(
        "DEXCORE_SCENARIO_INIT_CODE_HASH",
        "0xfe604490e88884eee0a2ef7362417e3771d067dc74cd2e605d0b3e1e90f300cb",
    );

    let config = DexConfig::from_settings(&settings).unwrap();
    assert_eq!(config.chain_id, ChainId::Bsc);
    assert!(dexcore::known_deployments(ChainId::Bsc).any(|d| *d == config.as_deployment()));
}
