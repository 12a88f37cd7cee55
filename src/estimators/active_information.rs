// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use log::{debug, trace};
use ndarray::Array2;

use crate::dist::Distribution;
use crate::error::InfoResult;
use crate::estimators::series::{Series, SeriesData};
use crate::estimators::traits::{GlobalValue, LocalValues};
use crate::estimators::utils::pool::pool;
use crate::estimators::utils::windows::{history_slices, support_size};
use crate::shannon::{DEFAULT_LOG_BASE, local_log, mutual_info};

/// Active information storage `A(k) = I(x^(k)_i ; x_i)` of a discrete time series.
///
/// The amount of information about the next symbol that is already contained in the
/// preceding `k` symbols. All realizations of an ensemble are pooled into one set of
/// distributions, so the global value is the occurrence-weighted mean of the local
/// values `log_b p(x_i, x^(k)_i) / (p(x^(k)_i) p(x_i))`.
///
/// # Example
/// ```
/// use infodynamics::estimators::active_information::ActiveInformation;
/// use infodynamics::estimators::traits::GlobalValue;
///
/// let ai = ActiveInformation::new(vec![1u32, 1, 0, 0, 1, 0, 0, 1], 2).unwrap();
/// assert!((ai.global_value().unwrap() - 0.918296).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct ActiveInformation {
    series: Series,
    history: usize,
    alphabet: u32,
    log_base: f64,
}

/// Pooled distributions over `(history, next)`, histories and next symbols.
struct Tables {
    alphabet: usize,
    states: Distribution,
    histories: Distribution,
    futures: Distribution,
}

impl ActiveInformation {
    /// Active information of `series` with history length `history`.
    ///
    /// Fails if `history == 0` or a realization is shorter than `history + 1`.
    pub fn new(series: impl Into<SeriesData>, history: usize) -> InfoResult<Self> {
        let series = Series::new(series)?;
        series.check_history(history, 1)?;
        Ok(Self {
            series,
            history,
            alphabet: 0,
            log_base: DEFAULT_LOG_BASE,
        })
    }

    /// Alphabet size of the series; values below 2 infer it from the data.
    pub fn alphabet(mut self, alphabet: u32) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Logarithm base of the result.
    pub fn log_base(mut self, log_base: f64) -> Self {
        self.log_base = log_base;
        self
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    fn tables(&self) -> InfoResult<Tables> {
        let alphabet = self.series.resolve_alphabet(self.alphabet)?;
        let k = self.history;
        debug!(
            "active information: shape {:?}, alphabet {alphabet}, history {k}, log base {}",
            self.series.shape(),
            self.log_base
        );
        let supports = [
            support_size(alphabet, k + 1)?,
            support_size(alphabet, k)?,
            alphabet as usize,
        ];
        let b = alphabet as usize;
        let [states, histories, futures] =
            pool(self.series.rows(), supports, |r, [states, histories, futures]| {
                let (next, past) = history_slices(self.series.row(r), k, b);
                for (&f, &h) in next.iter().zip(&past) {
                    states.tick(h * b + f)?;
                    histories.tick(h)?;
                    futures.tick(f)?;
                }
                Ok(())
            })?;
        trace!("active information: {} observations", states.counts());
        Ok(Tables {
            alphabet: b,
            states,
            histories,
            futures,
        })
    }
}

impl GlobalValue for ActiveInformation {
    fn global_value(&self) -> InfoResult<f64> {
        let t = self.tables()?;
        mutual_info(&t.states, &t.histories, &t.futures, self.log_base)
    }
}

impl LocalValues for ActiveInformation {
    type Dim = ndarray::Ix2;

    /// One value per time index `i >= k`, shape `(rows, m - k)`.
    fn local_values(&self) -> InfoResult<Array2<f64>> {
        let t = self.tables()?;
        let k = self.history;
        let (rows, m) = self.series.shape();
        let n = t.states.counts() as f64;
        let mut local = Array2::zeros((rows, m - k));
        for r in 0..rows {
            let (futures, histories) = history_slices(self.series.row(r), k, t.alphabet);
            for (i, (&f, &h)) in futures.iter().zip(&histories).enumerate() {
                let joint = t.states[h * t.alphabet + f] as f64;
                let ratio = joint * n / (t.histories[h] as f64 * t.futures[f] as f64);
                local[(r, i)] = local_log("active information", ratio, self.log_base)?;
            }
        }
        Ok(local)
    }
}
