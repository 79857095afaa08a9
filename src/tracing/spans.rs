// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for dexcore operations.
//!
//! Telemetry is kept out of business logic: instead of `#[instrument]`
//! attributes, each instrumented operation has a span helper here.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub fn my_operation(&self, param: Type) -> Result<T> {
//!     let span = spans::my_operation(param_value);
//!     let _guard = span.enter();
//!     // Business logic here
//! }
//! ```

use tracing::{Level, Span};

/// Create span for assembling a wrapped-native registry.
///
/// Parent: None (runs once, at first registry access or explicit build)
#[inline]
pub(crate) fn build_wrapped_native_registry(weth9_entries: usize, wnative_entries: usize) -> Span {
    tracing::debug_span!(
        "dexcore.build_wrapped_native_registry",
        weth9_entries = weth9_entries,
        wnative_entries = wnative_entries,
    )
}

/// Create span for resolving DEX deployment configuration from settings.
///
/// This is the startup entry point for configuration.
///
/// Parent: None (root span for this operation)
#[inline]
pub(crate) fn resolve_dex_config(source: &'static str) -> Span {
    tracing::span!(Level::INFO, "dexcore.resolve_dex_config", source = source)
}
