// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pooled histogram accumulation over the realizations of an ensemble.
//!
//! Every measure tallies all rows of an ensemble into one set of distributions
//! before a single evaluation. With the `parallel` feature rows are tallied into
//! per-row tables on the rayon thread pool and merged afterwards in row order; the
//! resulting counts are identical to the sequential pass.

use crate::dist::{Distribution, MAX_SUPPORT};
use crate::error::{InfoError, InfoResult};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Fresh, empty distributions with the given supports, each in `1..=MAX_SUPPORT`.
pub fn tables<const N: usize>(supports: [usize; N]) -> InfoResult<[Distribution; N]> {
    if let Some(&support) = supports.iter().find(|&&n| n == 0 || n > MAX_SUPPORT) {
        return Err(InfoError::Construction { support });
    }
    Ok(supports.map(Distribution::zeroed))
}

/// Tally every row `0..rows` into distributions with the given `supports`.
///
/// `observe(row, tables)` ticks the events of a single realization.
#[cfg(not(feature = "parallel"))]
pub fn pool<const N: usize, F>(
    rows: usize,
    supports: [usize; N],
    observe: F,
) -> InfoResult<[Distribution; N]>
where
    F: Fn(usize, &mut [Distribution; N]) -> InfoResult<()> + Sync + Send,
{
    let mut pooled = tables(supports)?;
    for row in 0..rows {
        observe(row, &mut pooled)?;
    }
    Ok(pooled)
}

/// Tally every row `0..rows` into distributions with the given `supports`.
///
/// `observe(row, tables)` ticks the events of a single realization.
#[cfg(feature = "parallel")]
pub fn pool<const N: usize, F>(
    rows: usize,
    supports: [usize; N],
    observe: F,
) -> InfoResult<[Distribution; N]>
where
    F: Fn(usize, &mut [Distribution; N]) -> InfoResult<()> + Sync + Send,
{
    let mut pooled = tables(supports)?;
    let per_row = (0..rows)
        .into_par_iter()
        .map(|row| {
            let mut local = tables(supports)?;
            observe(row, &mut local)?;
            Ok(local)
        })
        .collect::<InfoResult<Vec<_>>>()?;

    for local in &per_row {
        for (total, part) in pooled.iter_mut().zip(local) {
            total.merge(part)?;
        }
    }
    Ok(pooled)
}
