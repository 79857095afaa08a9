// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for token values
//!
//! A [`Token`] is identified by `(chain_id, address)` alone. Decimals, labels
//! and [`TokenOptions`] travel with it as metadata and never affect equality or
//! ordering.

mod decimals;
mod options;
mod token;

pub use decimals::TokenDecimals;
pub use options::TokenOptions;
pub use token::{Token, TokenBuilder};
