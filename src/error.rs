// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error taxonomy shared by the distribution, Shannon and time-series layers.
//!
//! Every failure is reported synchronously at the first violated precondition.
//! No measure returns a partial result alongside an error.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type InfoResult<T> = Result<T, InfoError>;

/// Errors raised by distributions and information measures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InfoError {
    /// A distribution was requested with an empty or oversized support.
    #[error(
        "distribution support must lie in 1..={}, got {support}",
        crate::dist::MAX_SUPPORT
    )]
    Construction { support: usize },

    /// Adding observations would overflow a count.
    #[error("observation count of event {event} overflows")]
    CountOverflow { event: usize },

    /// An event index lies outside the support of a distribution.
    #[error("event {event} is out of range for a support of size {support}")]
    IndexOutOfRange { event: usize, support: usize },

    /// The operation needs at least one observation on a non-empty support.
    #[error("invalid distribution: support {support}, {counts} observations")]
    InvalidDistribution { support: usize, counts: usize },

    /// A history length outside `1..=max`.
    #[error("invalid history length {history}, expected a value in 1..={max}")]
    InvalidHistoryLength { history: usize, max: usize },

    /// A realization holds fewer observations than the measure needs.
    #[error("series of length {length} is too short, at least {required} observations are required")]
    SeriesTooShort { length: usize, required: usize },

    /// Paired series have different `(rows, columns)` shapes.
    #[error("shape mismatch: {left:?} vs {right:?}")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Distributions combined by a Shannon measure use incompatible supports.
    #[error("support mismatch: expected {expected}, found {found}")]
    SupportMismatch { expected: usize, found: usize },

    /// The input holds no realizations at all.
    #[error("time series without realizations")]
    EmptySeries,

    /// A symbol is not representable in an explicitly supplied alphabet.
    #[error("state {state} is outside the alphabet of size {alphabet}")]
    InvalidState { state: u32, alphabet: u32 },

    /// The encoded state space is larger than a distribution may be.
    #[error(
        "state space {alphabet}^{exponent} exceeds the largest support of {} events",
        crate::dist::MAX_SUPPORT
    )]
    StateSpaceOverflow { alphabet: u32, exponent: usize },

    /// A computed value is not finite.
    #[error("{measure} is not finite ({value})")]
    Domain { measure: &'static str, value: f64 },
}

/// Reject a non-finite result of `measure`.
pub(crate) fn finite(measure: &'static str, value: f64) -> InfoResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InfoError::Domain { measure, value })
    }
}
