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
use crate::shannon::{DEFAULT_LOG_BASE, conditional_entropy, local_log};

/// Entropy rate `h(k) = H(x_i | x^(k)_i)` of a discrete time series.
///
/// Equivalent to the difference of block entropies `H(k+1) - H(k)` restricted to
/// the windows that have a successor. Local values are `-log_b p(x_i | x^(k)_i)`.
#[derive(Debug, Clone)]
pub struct EntropyRate {
    series: Series,
    history: usize,
    alphabet: u32,
    log_base: f64,
}

struct Tables {
    alphabet: usize,
    states: Distribution,
    histories: Distribution,
}

impl EntropyRate {
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

    pub fn log_base(mut self, log_base: f64) -> Self {
        self.log_base = log_base;
        self
    }

    fn tables(&self) -> InfoResult<Tables> {
        let alphabet = self.series.resolve_alphabet(self.alphabet)?;
        let k = self.history;
        debug!(
            "entropy rate: shape {:?}, alphabet {alphabet}, history {k}, log base {}",
            self.series.shape(),
            self.log_base
        );
        let b = alphabet as usize;
        let supports = [support_size(alphabet, k + 1)?, support_size(alphabet, k)?];
        let [states, histories] = pool(self.series.rows(), supports, |r, [states, histories]| {
            let (next, past) = history_slices(self.series.row(r), k, b);
            for (&f, &h) in next.iter().zip(&past) {
                states.tick(h * b + f)?;
                histories.tick(h)?;
            }
            Ok(())
        })?;
        trace!("entropy rate: {} observations", states.counts());
        Ok(Tables {
            alphabet: b,
            states,
            histories,
        })
    }
}

impl GlobalValue for EntropyRate {
    fn global_value(&self) -> InfoResult<f64> {
        let t = self.tables()?;
        conditional_entropy(&t.states, &t.histories, self.log_base)
    }
}

impl LocalValues for EntropyRate {
    type Dim = ndarray::Ix2;

    fn local_values(&self) -> InfoResult<Array2<f64>> {
        let t = self.tables()?;
        let k = self.history;
        let (rows, m) = self.series.shape();
        let mut local = Array2::zeros((rows, m - k));
        for r in 0..rows {
            let (futures, histories) = history_slices(self.series.row(r), k, t.alphabet);
            for (i, (&f, &h)) in futures.iter().zip(&histories).enumerate() {
                let ratio = t.histories[h] as f64 / t.states[h * t.alphabet + f] as f64;
                local[(r, i)] = local_log("entropy rate", ratio, self.log_base)?;
            }
        }
        Ok(local)
    }
}
