// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! ERC-20 token value object

use std::borrow::Cow;
use std::hash::{Hash, Hasher};

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use super::decimals::TokenDecimals;
use super::options::TokenOptions;
use crate::address::{AddressValidator, Eip55Validator};
use crate::chain::ChainId;
use crate::errors::CurrencyError;

/// An ERC-20 token deployed at a specific address on a specific chain
///
/// Identity is the pair `(chain_id, address)`. Two tokens with the same chain
/// and address are equal even when their decimals, symbol, name or
/// [`TokenOptions`] differ.
///
/// Tokens on the same chain with distinct addresses are totally ordered by
/// [`sorts_before`](Self::sorts_before). `Token` deliberately does not
/// implement `Ord`: there is no order across chains.
///
/// # Examples
///
/// ```
/// use dexcore::{ChainId, Token};
///
/// let wbnb = Token::builder(ChainId::Bsc, "0xbb4cdb9cbd36b01bd1cbaebf2de08d9173bc095c", 18)
///     .symbol("WBNB")
///     .name("Wrapped BNB")
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     wbnb.checksum_address(),
///     "0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c"
/// );
/// assert_eq!(wbnb.symbol(), Some("WBNB"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "TokenRecord", into = "TokenRecord")]
pub struct Token {
    chain_id: ChainId,
    address: Address,
    decimals: TokenDecimals,
    symbol: Option<Cow<'static, str>>,
    name: Option<Cow<'static, str>>,
    options: TokenOptions,
}

impl Token {
    /// Construct a token with default metadata
    ///
    /// Shorthand for `Token::builder(chain_id, address, decimals).build()`.
    ///
    /// # Errors
    ///
    /// - [`CurrencyError::InvalidDecimals`] when `decimals` is outside `0..=255`
    /// - [`CurrencyError::InvalidAddress`] when `address` fails EIP-55 validation
    pub fn new(
        chain_id: ChainId,
        address: impl Into<String>,
        decimals: impl Into<i128>,
    ) -> Result<Self, CurrencyError> {
        Self::builder(chain_id, address, decimals).build()
    }

    /// Start building a token from a raw address string
    pub fn builder(
        chain_id: ChainId,
        address: impl Into<String>,
        decimals: impl Into<i128>,
    ) -> TokenBuilder {
        TokenBuilder {
            chain_id,
            address: address.into(),
            decimals: decimals.into(),
            symbol: None,
            name: None,
            options: TokenOptions::DEFAULT,
        }
    }

    /// Construct a token from already-typed parts
    ///
    /// No validation runs: an [`Address`] is normalized by construction and a
    /// [`TokenDecimals`] is always in range. Used for literal tables such as the
    /// wrapped-native registry.
    ///
    /// ```
    /// use alloy_primitives::address;
    /// use dexcore::{ChainId, Token, TokenDecimals};
    ///
    /// const WETH: Token = Token::known(
    ///     ChainId::Ethereum,
    ///     address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"),
    ///     TokenDecimals::STANDARD,
    ///     "WETH",
    ///     "Wrapped Ether",
    /// );
    /// assert_eq!(WETH.name(), Some("Wrapped Ether"));
    /// ```
    pub const fn known(
        chain_id: ChainId,
        address: Address,
        decimals: TokenDecimals,
        symbol: &'static str,
        name: &'static str,
    ) -> Self {
        Self {
            chain_id,
            address,
            decimals,
            symbol: Some(Cow::Borrowed(symbol)),
            name: Some(Cow::Borrowed(name)),
            options: TokenOptions::DEFAULT,
        }
    }

    /// Network the token is deployed on
    pub const fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// Normalized contract address
    pub const fn address(&self) -> Address {
        self.address
    }

    /// EIP-55 checksum rendering of [`address`](Self::address)
    pub fn checksum_address(&self) -> String {
        self.address.to_checksum(None)
    }

    /// Decimal precision
    pub const fn decimals(&self) -> TokenDecimals {
        self.decimals
    }

    /// Display symbol, e.g. `WBNB`
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// Display name, e.g. `Wrapped BNB`
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Routing and trading hints
    pub const fn options(&self) -> &TokenOptions {
        &self.options
    }

    /// Routing priority (default 0)
    pub const fn priority(&self) -> i64 {
        self.options.priority
    }

    /// Whether referral fees apply (default false)
    pub const fn referral_enabled(&self) -> bool {
        self.options.referral_enabled
    }

    /// Buy-side slippage tolerance in percent (default 0)
    pub const fn buy_slippage_tolerance(&self) -> f64 {
        self.options.buy_slippage_tolerance
    }

    /// Sell-side slippage tolerance in percent (default 0)
    pub const fn sell_slippage_tolerance(&self) -> f64 {
        self.options.sell_slippage_tolerance
    }

    /// CoinGecko price-feed identifier
    pub fn coingecko_id(&self) -> Option<&str> {
        self.options.coingecko_id.as_deref()
    }

    /// Whether a "sell max" action is allowed (default true)
    pub const fn allow_sell_max(&self) -> bool {
        self.options.allow_sell_max
    }

    /// Returns true if both tokens denote the same on-chain asset
    ///
    /// Compares `(chain_id, address)` only, short-circuiting on reference
    /// equality.
    pub fn equals(&self, other: &Token) -> bool {
        std::ptr::eq(self, other)
            || (self.chain_id == other.chain_id && self.address == other.address)
    }

    /// Returns true if this token's address sorts before `other`'s
    ///
    /// Addresses compare as lowercase hex strings, which is the same as
    /// comparing their 20 bytes. Pair-key canonicalization downstream relies
    /// on this being a strict total order over same-chain, distinct-address
    /// tokens.
    ///
    /// # Errors
    ///
    /// - [`CurrencyError::ChainMismatch`] if the tokens are on different chains
    /// - [`CurrencyError::IdenticalAddress`] if the tokens share an address;
    ///   check [`equals`](Self::equals) first
    ///
    /// # Examples
    ///
    /// ```
    /// use dexcore::{ChainId, Token};
    ///
    /// let wbnb = Token::new(ChainId::Bsc, "0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c", 18)?;
    /// let eth = Token::new(ChainId::Bsc, "0x2170Ed0880ac9A755fd29B2688956BD959F933F8", 18)?;
    ///
    /// assert!(eth.sorts_before(&wbnb)?);
    /// assert!(!wbnb.sorts_before(&eth)?);
    /// # Ok::<(), dexcore::CurrencyError>(())
    /// ```
    pub fn sorts_before(&self, other: &Token) -> Result<bool, CurrencyError> {
        if self.chain_id != other.chain_id {
            return Err(CurrencyError::ChainMismatch {
                left: self.chain_id,
                right: other.chain_id,
            });
        }
        if self.address == other.address {
            return Err(CurrencyError::IdenticalAddress {
                address: self.address,
            });
        }
        Ok(self.address < other.address)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.address.hash(state);
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let address = self.checksum_address();
        match self.symbol() {
            Some(symbol) => write!(f, "{symbol} ({address}@{})", self.chain_id),
            None => write!(f, "{address}@{}", self.chain_id),
        }
    }
}

/// Builder for [`Token`]
///
/// Collects the raw inputs and optional metadata; all validation happens in
/// [`build`](Self::build), decimals first and then the address.
///
/// # Example
///
/// ```
/// use dexcore::{ChainId, Token};
///
/// let cake = Token::builder(ChainId::Bsc, "0x0e09fabb73bd3ade0a17ecc321fd13a19e81ce82", 18)
///     .symbol("CAKE")
///     .priority(5)
///     .sell_slippage_tolerance(2.5)
///     .coingecko_id("pancakeswap-token")
///     .build()
///     .unwrap();
///
/// assert_eq!(cake.priority(), 5);
/// assert!(cake.allow_sell_max());
/// ```
#[derive(Debug, Clone)]
pub struct TokenBuilder {
    chain_id: ChainId,
    address: String,
    decimals: i128,
    symbol: Option<Cow<'static, str>>,
    name: Option<Cow<'static, str>>,
    options: TokenOptions,
}

impl TokenBuilder {
    /// Set the display symbol
    pub fn symbol(mut self, symbol: impl Into<Cow<'static, str>>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Set the display name
    pub fn name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replace all [`TokenOptions`] at once
    pub fn options(mut self, options: TokenOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the routing priority
    pub fn priority(mut self, priority: i64) -> Self {
        self.options.priority = priority;
        self
    }

    /// Enable or disable referral fees
    pub fn referral_enabled(mut self, enabled: bool) -> Self {
        self.options.referral_enabled = enabled;
        self
    }

    /// Set the buy-side slippage tolerance in percent
    pub fn buy_slippage_tolerance(mut self, tolerance: f64) -> Self {
        self.options.buy_slippage_tolerance = tolerance;
        self
    }

    /// Set the sell-side slippage tolerance in percent
    pub fn sell_slippage_tolerance(mut self, tolerance: f64) -> Self {
        self.options.sell_slippage_tolerance = tolerance;
        self
    }

    /// Set the CoinGecko price-feed identifier
    pub fn coingecko_id(mut self, id: impl Into<String>) -> Self {
        self.options.coingecko_id = Some(id.into());
        self
    }

    /// Allow or forbid the "sell max" action
    pub fn allow_sell_max(mut self, allow: bool) -> Self {
        self.options.allow_sell_max = allow;
        self
    }

    /// Validate with the default [`Eip55Validator`] and build the token
    pub fn build(self) -> Result<Token, CurrencyError> {
        self.build_with(&Eip55Validator)
    }

    /// Validate with a caller-supplied [`AddressValidator`] and build the token
    pub fn build_with<V>(self, validator: &V) -> Result<Token, CurrencyError>
    where
        V: AddressValidator + ?Sized,
    {
        let decimals = TokenDecimals::try_new(self.decimals)?;
        let address = validator.validate(&self.address)?;

        Ok(Token {
            chain_id: self.chain_id,
            address,
            decimals,
            symbol: self.symbol,
            name: self.name,
            options: self.options,
        })
    }
}

/// Wire form of [`Token`]; deserialization re-runs validation
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenRecord {
    chain_id: ChainId,
    address: String,
    decimals: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default)]
    options: TokenOptions,
}

impl TryFrom<TokenRecord> for Token {
    type Error = CurrencyError;

    fn try_from(record: TokenRecord) -> Result<Self, Self::Error> {
        let mut builder = Token::builder(record.chain_id, record.address, record.decimals)
            .options(record.options);
        if let Some(symbol) = record.symbol {
            builder = builder.symbol(symbol);
        }
        if let Some(name) = record.name {
            builder = builder.name(name);
        }
        builder.build()
    }
}

impl From<Token> for TokenRecord {
    fn from(token: Token) -> Self {
        TokenRecord {
            chain_id: token.chain_id,
            address: token.address.to_checksum(None),
            decimals: i64::from(token.decimals.as_u8()),
            symbol: token.symbol.map(Cow::into_owned),
            name: token.name.map(Cow::into_owned),
            options: token.options,
        }
    }
}
