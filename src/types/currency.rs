// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Native currencies and the [`Currency`] sum type

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::tokens::{Token, TokenDecimals};
use crate::errors::CurrencyError;

/// A chain's gas-paying currency, with no contract address
///
/// # Examples
///
/// ```
/// use dexcore::NativeCurrency;
///
/// let bnb = NativeCurrency::BNB;
/// assert_eq!(bnb.decimals().as_u8(), 18);
/// assert_eq!(bnb.symbol(), Some("BNB"));
///
/// assert!(NativeCurrency::new(256, "BAD", "Bad").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NativeCurrency {
    decimals: TokenDecimals,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    symbol: Option<Cow<'static, str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<Cow<'static, str>>,
}

impl NativeCurrency {
    /// Ether, 18 decimals
    pub const ETHER: Self = Self::known(TokenDecimals::STANDARD, "ETH", "Ether");

    /// BNB, 18 decimals
    pub const BNB: Self = Self::known(TokenDecimals::STANDARD, "BNB", "BNB");

    /// Create a labeled native currency
    ///
    /// # Errors
    ///
    /// Returns [`CurrencyError::InvalidDecimals`] when `decimals` is outside
    /// `0..=255`.
    pub fn new(
        decimals: impl Into<i128>,
        symbol: impl Into<Cow<'static, str>>,
        name: impl Into<Cow<'static, str>>,
    ) -> Result<Self, CurrencyError> {
        Ok(Self {
            decimals: TokenDecimals::try_new(decimals)?,
            symbol: Some(symbol.into()),
            name: Some(name.into()),
        })
    }

    /// Create a native currency with no display labels
    pub fn unlabeled(decimals: impl Into<i128>) -> Result<Self, CurrencyError> {
        Ok(Self {
            decimals: TokenDecimals::try_new(decimals)?,
            symbol: None,
            name: None,
        })
    }

    /// Const constructor for literal presets
    pub const fn known(decimals: TokenDecimals, symbol: &'static str, name: &'static str) -> Self {
        Self {
            decimals,
            symbol: Some(Cow::Borrowed(symbol)),
            name: Some(Cow::Borrowed(name)),
        }
    }

    /// Decimal precision
    pub const fn decimals(&self) -> TokenDecimals {
        self.decimals
    }

    /// Display symbol
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// Display name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Any fungible unit of value: a native currency or an ERC-20 token
///
/// Shared fields are read through [`decimals`](Self::decimals),
/// [`symbol`](Self::symbol) and [`name`](Self::name). Equality follows
/// [`currency_equals`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Currency {
    /// The chain's gas currency
    Native(NativeCurrency),
    /// An address-bound token
    Token(Token),
}

impl Currency {
    /// Decimal precision
    pub fn decimals(&self) -> TokenDecimals {
        match self {
            Currency::Native(native) => native.decimals(),
            Currency::Token(token) => token.decimals(),
        }
    }

    /// Display symbol
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Currency::Native(native) => native.symbol(),
            Currency::Token(token) => token.symbol(),
        }
    }

    /// Display name
    pub fn name(&self) -> Option<&str> {
        match self {
            Currency::Native(native) => native.name(),
            Currency::Token(token) => token.name(),
        }
    }

    /// Whether this currency is an address-bound token
    pub fn is_token(&self) -> bool {
        matches!(self, Currency::Token(_))
    }

    /// The token, if this currency is one
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Currency::Token(token) => Some(token),
            Currency::Native(_) => None,
        }
    }
}

impl From<Token> for Currency {
    fn from(token: Token) -> Self {
        Currency::Token(token)
    }
}

impl From<NativeCurrency> for Currency {
    fn from(native: NativeCurrency) -> Self {
        Currency::Native(native)
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        currency_equals(self, other)
    }
}

impl Eq for Currency {}

/// Compare two currencies for equality
///
/// - two tokens are equal iff [`Token::equals`] holds
/// - a token never equals a native currency
/// - two native currencies are equal iff they are the same value
///
/// # Examples
///
/// ```
/// use dexcore::{currency_equals, ChainId, Currency, NativeCurrency, Token};
///
/// let bnb = Currency::from(NativeCurrency::BNB);
/// let wbnb = Currency::from(
///     Token::new(ChainId::Bsc, "0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c", 18).unwrap(),
/// );
///
/// assert!(currency_equals(&bnb, &bnb));
/// assert!(!currency_equals(&bnb, &wbnb));
/// assert!(!currency_equals(&wbnb, &bnb));
/// ```
pub fn currency_equals(currency_a: &Currency, currency_b: &Currency) -> bool {
    match (currency_a, currency_b) {
        (Currency::Token(a), Currency::Token(b)) => a.equals(b),
        (Currency::Native(a), Currency::Native(b)) => std::ptr::eq(a, b) || a == b,
        _ => false,
    }
}
