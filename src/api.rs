// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! One-call functions for every time-series measure.
//!
//! Each function builds the corresponding estimator and evaluates it either globally
//! or locally. An `alphabet` below 2 is inferred from the data and `log_base` selects
//! the unit ([`DEFAULT_LOG_BASE`](crate::DEFAULT_LOG_BASE) for bits).
//!
//! ```
//! use infodynamics::api;
//!
//! let ai = api::active_info(vec![0u32, 0, 1, 1, 1, 0, 0, 1, 1, 1], 2, 0, 2.0, false).unwrap();
//! assert!((ai.global().unwrap() - 0.466917).abs() < 1e-6);
//!
//! let local = api::active_info(vec![0u32, 0, 1, 1, 1, 0, 0, 1, 1, 1], 2, 0, 2.0, true).unwrap();
//! assert_eq!(local.local().unwrap().dim(), (1, 8));
//! ```

use ndarray::{Ix1, Ix2};

use crate::error::InfoResult;
use crate::estimators::series::SeriesData;
use crate::estimators::traits::{GlobalValue, Measure};
use crate::estimators::{
    ActiveInformation, BlockEntropy, ConditionalEntropy, EntropyRate, MutualInformation,
    RelativeEntropy, TransferEntropy,
};

/// Active information storage of `series` with history length `history`.
pub fn active_info(
    series: impl Into<SeriesData>,
    history: usize,
    alphabet: u32,
    log_base: f64,
    local: bool,
) -> InfoResult<Measure<Ix2>> {
    let estimator = ActiveInformation::new(series, history)?
        .alphabet(alphabet)
        .log_base(log_base);
    Measure::evaluate(&estimator, local)
}

/// Entropy rate of `series` with history length `history`.
pub fn entropy_rate(
    series: impl Into<SeriesData>,
    history: usize,
    alphabet: u32,
    log_base: f64,
    local: bool,
) -> InfoResult<Measure<Ix2>> {
    let estimator = EntropyRate::new(series, history)?
        .alphabet(alphabet)
        .log_base(log_base);
    Measure::evaluate(&estimator, local)
}

/// Transfer entropy from `source` to `target` with history length `history`.
///
/// The source contributes a history of the same length as the target.
pub fn transfer_entropy(
    source: impl Into<SeriesData>,
    target: impl Into<SeriesData>,
    history: usize,
    alphabet: u32,
    log_base: f64,
    local: bool,
) -> InfoResult<Measure<Ix2>> {
    let estimator = TransferEntropy::new(source, target, history)?
        .alphabet(alphabet)
        .log_base(log_base);
    Measure::evaluate(&estimator, local)
}

/// Block entropy of `series` over blocks of length `block`.
pub fn block_entropy(
    series: impl Into<SeriesData>,
    block: usize,
    alphabet: u32,
    log_base: f64,
    local: bool,
) -> InfoResult<Measure<Ix2>> {
    let estimator = BlockEntropy::new(series, block)?
        .alphabet(alphabet)
        .log_base(log_base);
    Measure::evaluate(&estimator, local)
}

/// Mutual information between two series observed side by side.
pub fn mutual_info(
    xs: impl Into<SeriesData>,
    ys: impl Into<SeriesData>,
    alphabet_x: u32,
    alphabet_y: u32,
    log_base: f64,
    local: bool,
) -> InfoResult<Measure<Ix2>> {
    let estimator = MutualInformation::new(xs, ys)?
        .alphabet_x(alphabet_x)
        .alphabet_y(alphabet_y)
        .log_base(log_base);
    Measure::evaluate(&estimator, local)
}

/// Conditional entropy `H(ys | xs)`.
pub fn conditional_entropy(
    xs: impl Into<SeriesData>,
    ys: impl Into<SeriesData>,
    alphabet_x: u32,
    alphabet_y: u32,
    log_base: f64,
    local: bool,
) -> InfoResult<Measure<Ix2>> {
    let estimator = ConditionalEntropy::new(xs, ys)?
        .alphabet_x(alphabet_x)
        .alphabet_y(alphabet_y)
        .log_base(log_base);
    Measure::evaluate(&estimator, local)
}

/// Relative entropy of the histogram of `xs` (posterior) from that of `ys` (prior).
///
/// Local values are per symbol, one for each of the shared alphabet's symbols.
pub fn relative_entropy(
    xs: impl Into<SeriesData>,
    ys: impl Into<SeriesData>,
    alphabet: u32,
    log_base: f64,
    local: bool,
) -> InfoResult<Measure<Ix1>> {
    let estimator = RelativeEntropy::new(xs, ys)?
        .alphabet(alphabet)
        .log_base(log_base);
    if local {
        estimator.local_values().map(Measure::Local)
    } else {
        estimator.global_value().map(Measure::Global)
    }
}
