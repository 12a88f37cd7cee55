// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Empirical distributions (histograms) over a fixed integer support.
//!
//! A [`Distribution`] counts observations of events `0..len()`. It becomes a
//! probability distribution once at least one observation has been made, see
//! [`Distribution::valid`]. Every Shannon measure in [`crate::shannon`] is defined on
//! these histograms, and every time-series measure reduces to building them.

use crate::error::{InfoError, InfoResult};
use ndarray::Array1;
use std::ops::Index;

/// Largest support a distribution may have, `2^28` events.
pub const MAX_SUPPORT: usize = 1 << 28;

/// Histogram over the events `0..n`.
///
/// Counts never go negative and the support only changes through
/// [`Distribution::resize`]. Probability queries on a distribution without
/// observations are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    histogram: Vec<usize>,
    counts: usize,
}

impl Distribution {
    /// Create an empty (and therefore invalid) distribution with support `n`.
    pub fn new(n: usize) -> InfoResult<Self> {
        check_support(n)?;
        Ok(Self {
            histogram: vec![0; n],
            counts: 0,
        })
    }

    /// Empty histogram without the support check; callers guarantee `1 <= n <= MAX_SUPPORT`.
    pub(crate) fn zeroed(n: usize) -> Self {
        Self {
            histogram: vec![0; n],
            counts: 0,
        }
    }

    /// Create a distribution seeded with `counts`; the support is `counts.len()`.
    pub fn from_counts(counts: impl Into<Vec<usize>>) -> InfoResult<Self> {
        let histogram: Vec<usize> = counts.into();
        check_support(histogram.len())?;
        let counts = histogram
            .iter()
            .enumerate()
            .try_fold(0usize, |total, (event, &c)| {
                total.checked_add(c).ok_or(InfoError::CountOverflow { event })
            })?;
        Ok(Self { histogram, counts })
    }

    /// Size of the support.
    pub fn len(&self) -> usize {
        self.histogram.len()
    }

    /// Always `false`: a distribution cannot have an empty support.
    pub fn is_empty(&self) -> bool {
        self.histogram.is_empty()
    }

    /// Total number of observations.
    pub fn counts(&self) -> usize {
        self.counts
    }

    /// Whether the support is non-empty and at least one observation has been made.
    pub fn valid(&self) -> bool {
        !self.histogram.is_empty() && self.counts > 0
    }

    /// Number of observations of `event`.
    pub fn get(&self, event: usize) -> InfoResult<usize> {
        self.check_event(event)?;
        Ok(self.histogram[event])
    }

    /// Overwrite the number of observations of `event`.
    ///
    /// Fails with [`InfoError::CountOverflow`] if the total would overflow; the
    /// distribution is left unchanged then.
    pub fn set(&mut self, event: usize, value: usize) -> InfoResult<()> {
        self.check_event(event)?;
        self.counts = (self.counts - self.histogram[event])
            .checked_add(value)
            .ok_or(InfoError::CountOverflow { event })?;
        self.histogram[event] = value;
        Ok(())
    }

    /// Observe `event` once and return its new count.
    pub fn tick(&mut self, event: usize) -> InfoResult<usize> {
        self.check_event(event)?;
        let total = self
            .counts
            .checked_add(1)
            .ok_or(InfoError::CountOverflow { event })?;
        self.histogram[event] += 1;
        self.counts = total;
        Ok(self.histogram[event])
    }

    /// Empirical probability of `event`.
    pub fn probability(&self, event: usize) -> InfoResult<f64> {
        self.ensure_valid()?;
        self.check_event(event)?;
        Ok(self.histogram[event] as f64 / self.counts as f64)
    }

    /// Grow or shrink the support in place.
    ///
    /// Counts at indices below `min(len, n)` are kept, new events start at zero and
    /// counts of dropped events are removed from the total.
    pub fn resize(&mut self, n: usize) -> InfoResult<()> {
        check_support(n)?;
        if n < self.histogram.len() {
            let dropped: usize = self.histogram[n..].iter().sum();
            self.counts -= dropped;
        }
        self.histogram.resize(n, 0);
        Ok(())
    }

    /// Independent deep copy.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Probabilities of every event in the support.
    pub fn dump(&self) -> InfoResult<Array1<f64>> {
        self.ensure_valid()?;
        let n = self.counts as f64;
        Ok(self.histogram.iter().map(|&c| c as f64 / n).collect())
    }

    /// Raw counts in event order.
    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.histogram.iter()
    }

    /// Raw counts as a slice.
    pub fn as_slice(&self) -> &[usize] {
        &self.histogram
    }

    /// Add the counts of `other`, which must share the same support.
    pub fn merge(&mut self, other: &Distribution) -> InfoResult<()> {
        if other.len() != self.len() {
            return Err(InfoError::SupportMismatch {
                expected: self.len(),
                found: other.len(),
            });
        }
        let total = self
            .counts
            .checked_add(other.counts)
            .ok_or(InfoError::CountOverflow { event: 0 })?;
        for (mine, theirs) in self.histogram.iter_mut().zip(other.iter()) {
            *mine += theirs;
        }
        self.counts = total;
        Ok(())
    }

    pub(crate) fn ensure_valid(&self) -> InfoResult<()> {
        if self.valid() {
            Ok(())
        } else {
            Err(InfoError::InvalidDistribution {
                support: self.len(),
                counts: self.counts,
            })
        }
    }

    fn check_event(&self, event: usize) -> InfoResult<()> {
        if event < self.histogram.len() {
            Ok(())
        } else {
            Err(InfoError::IndexOutOfRange {
                event,
                support: self.histogram.len(),
            })
        }
    }
}

fn check_support(n: usize) -> InfoResult<()> {
    if n == 0 || n > MAX_SUPPORT {
        Err(InfoError::Construction { support: n })
    } else {
        Ok(())
    }
}

impl Index<usize> for Distribution {
    type Output = usize;

    /// Panics if `event` is outside the support; see [`Distribution::get`].
    fn index(&self, event: usize) -> &usize {
        &self.histogram[event]
    }
}

impl<'a> IntoIterator for &'a Distribution {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.histogram.iter()
    }
}
