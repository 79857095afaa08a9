// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the dexcore library.
//!
//! This module follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained handling ([`CurrencyError`],
//!   [`ConfigError`])
//! - **Unified error type** ([`DexCoreError`]) for callers that don't need to
//!   distinguish between error sources
//!
//! Every failure in this crate is a permanent input-validation fault. There is
//! no I/O and nothing is retried.
//!
//! # Examples
//!
//! ## Fine-grained error handling
//!
//! ```rust
//! use dexcore::{ChainId, CurrencyError, Token};
//!
//! match Token::new(ChainId::Bsc, "0xnot-an-address", 18) {
//!     Ok(token) => println!("token: {token}"),
//!     Err(CurrencyError::InvalidAddress { address, reason }) => {
//!         eprintln!("rejected {address}: {reason}");
//!     }
//!     Err(e) => eprintln!("other error: {e}"),
//! }
//! ```
//!
//! ## Using the unified error type
//!
//! ```rust
//! use dexcore::{ChainId, DexCoreError, Token};
//!
//! fn wbnb() -> Result<Token, DexCoreError> {
//!     let token = Token::new(
//!         ChainId::Bsc,
//!         "0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c",
//!         18,
//!     )?;
//!     Ok(token)
//! }
//! # assert!(wbnb().is_ok());
//! ```

mod config;
mod currency;

pub use config::ConfigError;
pub use currency::CurrencyError;

/// Unified error type for all dexcore operations.
///
/// All module-specific error types convert to `DexCoreError` via `From`
/// implementations, so `?` propagates them naturally.
#[derive(Debug, thiserror::Error)]
pub enum DexCoreError {
    /// Error from currency or token construction and comparison.
    #[error("Currency error: {0}")]
    Currency(#[from] CurrencyError),

    /// Error from resolving DEX deployment configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
