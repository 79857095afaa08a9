// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for currencies and tokens.
//!
//! ```text
//! Currency
//!   ├── Native(NativeCurrency)   decimals, symbol?, name?
//!   └── Token(Token)             + chain_id, address, TokenOptions
//! ```
//!
//! Every value here is immutable once constructed and is `Send + Sync`.

pub mod currency;
pub mod tokens;

// Note: Public types are re-exported from lib.rs, not here
