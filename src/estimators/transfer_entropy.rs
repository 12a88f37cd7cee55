// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use log::{debug, trace};
use ndarray::Array2;

use crate::dist::Distribution;
use crate::error::{InfoError, InfoResult};
use crate::estimators::series::{Series, SeriesData};
use crate::estimators::traits::{GlobalValue, LocalValues};
use crate::estimators::utils::pool::pool;
use crate::estimators::utils::windows::{support_size, te_slices};
use crate::shannon::{DEFAULT_LOG_BASE, conditional_mutual_info, local_log};

/// Transfer entropy `T(X -> Y) = I(y_i ; x^(l)_i | y^(k)_i)` from a source to a target series.
///
/// The information the last `l` source symbols carry about the next target symbol
/// beyond what the `k`-history of the target already explains. The source history
/// defaults to `l = k` and can be shortened with [`TransferEntropy::source_history`];
/// `l = 1` conditions on the single source symbol preceding each target step.
///
/// Local values are
/// `log_b p(y_i, x^(l)_i, y^(k)_i) p(y^(k)_i) / (p(x^(l)_i, y^(k)_i) p(y_i, y^(k)_i))`,
/// one per target time index `i >= k`.
///
/// # Example
/// ```
/// use infodynamics::estimators::transfer_entropy::TransferEntropy;
/// use infodynamics::estimators::traits::GlobalValue;
///
/// let source = vec![0u32, 1, 1, 1, 1, 0, 0, 0, 1];
/// let target = vec![0u32, 0, 1, 1, 1, 1, 0, 0, 0];
/// let te = TransferEntropy::new(source, target, 1).unwrap();
/// assert!((te.global_value().unwrap() - 0.811278).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct TransferEntropy {
    source: Series,
    target: Series,
    history: usize,
    source_history: Option<usize>,
    alphabet: u32,
    log_base: f64,
}

/// Pooled tables, indexed by
/// - states: `((h * b + f) * b^l) + s`
/// - sources: `h * b^l + s`
/// - predicates: `h * b + f`
/// - histories: `h`
struct Tables {
    alphabet: usize,
    source_support: usize,
    states: Distribution,
    sources: Distribution,
    predicates: Distribution,
    histories: Distribution,
}

impl TransferEntropy {
    /// Transfer entropy from `source` to `target` with target history length `history`.
    ///
    /// Both series must have the same shape.
    pub fn new(
        source: impl Into<SeriesData>,
        target: impl Into<SeriesData>,
        history: usize,
    ) -> InfoResult<Self> {
        let source = Series::new(source)?;
        let target = Series::new(target)?;
        source.check_same_shape(&target)?;
        target.check_history(history, 1)?;
        Ok(Self {
            source,
            target,
            history,
            source_history: None,
            alphabet: 0,
            log_base: DEFAULT_LOG_BASE,
        })
    }

    /// Joint alphabet of source and target; values below 2 infer it from both series.
    pub fn alphabet(mut self, alphabet: u32) -> Self {
        self.alphabet = alphabet;
        self
    }

    pub fn log_base(mut self, log_base: f64) -> Self {
        self.log_base = log_base;
        self
    }

    /// Number of past source symbols `l` in the conditioning state, `1 <= l <= k`.
    pub fn source_history(mut self, source_history: usize) -> Self {
        self.source_history = Some(source_history);
        self
    }

    fn resolved_source_history(&self) -> InfoResult<usize> {
        let l = self.source_history.unwrap_or(self.history);
        if l == 0 || l > self.history {
            return Err(InfoError::InvalidHistoryLength {
                history: l,
                max: self.history,
            });
        }
        Ok(l)
    }

    fn tables(&self) -> InfoResult<Tables> {
        let l = self.resolved_source_history()?;
        let alphabet = self
            .target
            .resolve_joint_alphabet(&self.source, self.alphabet)?;
        let k = self.history;
        debug!(
            "transfer entropy: shape {:?}, alphabet {alphabet}, history {k}, source history {l}, log base {}",
            self.target.shape(),
            self.log_base
        );
        let b = alphabet as usize;
        let source_support = support_size(alphabet, l)?;
        let supports = [
            support_size(alphabet, k + l + 1)?,
            support_size(alphabet, k + l)?,
            support_size(alphabet, k + 1)?,
            support_size(alphabet, k)?,
        ];
        let [states, sources, predicates, histories] = pool(
            self.target.rows(),
            supports,
            |r, [states, sources, predicates, histories]| {
                let (next, past, src) =
                    te_slices(self.source.row(r), self.target.row(r), l, k, b);
                for ((&f, &h), &s) in next.iter().zip(&past).zip(&src) {
                    let predicate = h * b + f;
                    states.tick(predicate * source_support + s)?;
                    sources.tick(h * source_support + s)?;
                    predicates.tick(predicate)?;
                    histories.tick(h)?;
                }
                Ok(())
            },
        )?;
        trace!("transfer entropy: {} observations", states.counts());
        Ok(Tables {
            alphabet: b,
            source_support,
            states,
            sources,
            predicates,
            histories,
        })
    }
}

impl GlobalValue for TransferEntropy {
    fn global_value(&self) -> InfoResult<f64> {
        let t = self.tables()?;
        conditional_mutual_info(
            &t.states,
            &t.predicates,
            &t.sources,
            &t.histories,
            self.log_base,
        )
    }
}

impl LocalValues for TransferEntropy {
    type Dim = ndarray::Ix2;

    fn local_values(&self) -> InfoResult<Array2<f64>> {
        let t = self.tables()?;
        let k = self.history;
        let l = self.resolved_source_history()?;
        let (rows, m) = self.target.shape();
        let mut local = Array2::zeros((rows, m - k));
        for r in 0..rows {
            let (next, past, src) =
                te_slices(self.source.row(r), self.target.row(r), l, k, t.alphabet);
            for (i, ((&f, &h), &s)) in next.iter().zip(&past).zip(&src).enumerate() {
                let predicate = h * t.alphabet + f;
                let state = t.states[predicate * t.source_support + s] as f64;
                let source = t.sources[h * t.source_support + s] as f64;
                let ratio =
                    state * t.histories[h] as f64 / (source * t.predicates[predicate] as f64);
                local[(r, i)] = local_log("transfer entropy", ratio, self.log_base)?;
            }
        }
        Ok(local)
    }
}
