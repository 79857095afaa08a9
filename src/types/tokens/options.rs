// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Pass-through business metadata carried by tokens

use serde::{Deserialize, Serialize};

/// Routing and trading hints attached to a [`Token`](super::Token)
///
/// These fields are stored exactly as given and never interpreted by this
/// crate. They exist for downstream routing and trade-construction layers.
///
/// Defaults: `priority = 0`, `referral_enabled = false`, both slippage
/// tolerances `0`, no CoinGecko id, `allow_sell_max = true`.
///
/// # Examples
///
/// ```
/// use dexcore::TokenOptions;
///
/// let options = TokenOptions {
///     priority: 10,
///     sell_slippage_tolerance: 12.0,
///     ..TokenOptions::default()
/// };
/// assert!(options.allow_sell_max);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenOptions {
    /// Routing priority, higher is preferred
    pub priority: i64,

    /// Whether referral fees apply to trades in this token
    pub referral_enabled: bool,

    /// Extra slippage tolerance (percent) applied when buying
    pub buy_slippage_tolerance: f64,

    /// Extra slippage tolerance (percent) applied when selling
    pub sell_slippage_tolerance: f64,

    /// CoinGecko price-feed identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coingecko_id: Option<String>,

    /// Whether the UI may offer a "sell max" action
    pub allow_sell_max: bool,
}

impl TokenOptions {
    /// The documented defaults, usable in const contexts.
    pub const DEFAULT: Self = Self {
        priority: 0,
        referral_enabled: false,
        buy_slippage_tolerance: 0.0,
        sell_slippage_tolerance: 0.0,
        coingecko_id: None,
        allow_sell_max: true,
    };
}

impl Default for TokenOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}
