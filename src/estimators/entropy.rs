// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Entropy-family measures of discrete time series.
//!
//! - [`BlockEntropy`]: entropy of the length-`k` blocks of a series (windowed)
//! - [`ConditionalEntropy`]: `H(Y|X)` of two series observed side by side
//! - [`RelativeEntropy`]: divergence between the symbol histograms of two series

use log::{debug, trace};
use ndarray::{Array1, Array2};

use crate::dist::Distribution;
use crate::error::{InfoError, InfoResult};
use crate::estimators::mutual_information::PairedSeries;
use crate::estimators::series::{Series, SeriesData};
use crate::estimators::traits::{GlobalValue, LocalValues};
use crate::estimators::utils::pool::pool;
use crate::estimators::utils::windows::{block_codes, support_size};
use crate::shannon::{self, DEFAULT_LOG_BASE, local_log};

/// Block entropy `H(k)`, the Shannon entropy of the pooled length-`k` blocks.
///
/// Every realization of length `m` contributes `m - k + 1` overlapping blocks. For
/// `k = 1` this is the plain entropy of the symbol histogram. Local values are
/// `-log_b p(x[i..i+k])`.
#[derive(Debug, Clone)]
pub struct BlockEntropy {
    series: Series,
    block: usize,
    alphabet: u32,
    log_base: f64,
}

impl BlockEntropy {
    /// Fails if `block == 0` or a realization is shorter than `block`.
    pub fn new(series: impl Into<SeriesData>, block: usize) -> InfoResult<Self> {
        let series = Series::new(series)?;
        series.check_history(block, 0)?;
        Ok(Self {
            series,
            block,
            alphabet: 0,
            log_base: DEFAULT_LOG_BASE,
        })
    }

    pub fn alphabet(mut self, alphabet: u32) -> Self {
        self.alphabet = alphabet;
        self
    }

    pub fn log_base(mut self, log_base: f64) -> Self {
        self.log_base = log_base;
        self
    }

    fn blocks(&self) -> InfoResult<(usize, Distribution)> {
        let alphabet = self.series.resolve_alphabet(self.alphabet)?;
        let k = self.block;
        debug!(
            "block entropy: shape {:?}, alphabet {alphabet}, block {k}, log base {}",
            self.series.shape(),
            self.log_base
        );
        let b = alphabet as usize;
        let [blocks] = pool(
            self.series.rows(),
            [support_size(alphabet, k)?],
            |r, [blocks]| {
                for code in block_codes(self.series.row(r), k, b) {
                    blocks.tick(code)?;
                }
                Ok(())
            },
        )?;
        trace!("block entropy: {} blocks", blocks.counts());
        Ok((b, blocks))
    }
}

impl GlobalValue for BlockEntropy {
    fn global_value(&self) -> InfoResult<f64> {
        let (_, blocks) = self.blocks()?;
        shannon::entropy(&blocks, self.log_base)
    }
}

impl LocalValues for BlockEntropy {
    type Dim = ndarray::Ix2;

    /// Shape `(rows, m - k + 1)`.
    fn local_values(&self) -> InfoResult<Array2<f64>> {
        let (b, blocks) = self.blocks()?;
        let (rows, m) = self.series.shape();
        let n = blocks.counts() as f64;
        let mut local = Array2::zeros((rows, m - self.block + 1));
        for r in 0..rows {
            for (i, code) in block_codes(self.series.row(r), self.block, b)
                .into_iter()
                .enumerate()
            {
                local[(r, i)] = local_log("block entropy", n / blocks[code] as f64, self.log_base)?;
            }
        }
        Ok(local)
    }
}

/// Conditional entropy `H(Y|X)` of `ys` given `xs`, observed at the same time indices.
///
/// Local values are `-log_b p(y|x)` in the shape of the input.
#[derive(Debug, Clone)]
pub struct ConditionalEntropy {
    pair: PairedSeries,
    log_base: f64,
}

impl ConditionalEntropy {
    /// `H(ys | xs)`; both series must have the same shape.
    pub fn new(xs: impl Into<SeriesData>, ys: impl Into<SeriesData>) -> InfoResult<Self> {
        Ok(Self {
            pair: PairedSeries::new(xs, ys)?,
            log_base: DEFAULT_LOG_BASE,
        })
    }

    pub fn alphabet_x(mut self, alphabet: u32) -> Self {
        self.pair.alphabet_x = alphabet;
        self
    }

    pub fn alphabet_y(mut self, alphabet: u32) -> Self {
        self.pair.alphabet_y = alphabet;
        self
    }

    pub fn log_base(mut self, log_base: f64) -> Self {
        self.log_base = log_base;
        self
    }
}

impl GlobalValue for ConditionalEntropy {
    fn global_value(&self) -> InfoResult<f64> {
        let t = self.pair.tables("conditional entropy", self.log_base)?;
        shannon::conditional_entropy(&t.joint, &t.x, self.log_base)
    }
}

impl LocalValues for ConditionalEntropy {
    type Dim = ndarray::Ix2;

    fn local_values(&self) -> InfoResult<Array2<f64>> {
        let t = self.pair.tables("conditional entropy", self.log_base)?;
        self.pair.map_observations(&t, |joint, x, _| {
            local_log("conditional entropy", x / joint, self.log_base)
        })
    }
}

/// Relative entropy `D(p || q)` between the symbol histogram `p` of `xs` (posterior)
/// and `q` of `ys` (prior), over one shared alphabet.
///
/// The global value is infinite, and reported as [`InfoError::Domain`], when `xs`
/// visits a symbol that never occurs in `ys`. The local values are per symbol rather
/// than per observation, so their plain mean is not the global value.
#[derive(Debug, Clone)]
pub struct RelativeEntropy {
    xs: Series,
    ys: Series,
    alphabet: u32,
    log_base: f64,
}

impl RelativeEntropy {
    pub fn new(xs: impl Into<SeriesData>, ys: impl Into<SeriesData>) -> InfoResult<Self> {
        let xs = Series::new(xs)?;
        let ys = Series::new(ys)?;
        xs.check_same_shape(&ys)?;
        xs.check_observed()?;
        Ok(Self {
            xs,
            ys,
            alphabet: 0,
            log_base: DEFAULT_LOG_BASE,
        })
    }

    /// Alphabet shared by both series; values below 2 infer it from both.
    pub fn alphabet(mut self, alphabet: u32) -> Self {
        self.alphabet = alphabet;
        self
    }

    pub fn log_base(mut self, log_base: f64) -> Self {
        self.log_base = log_base;
        self
    }

    fn histograms(&self) -> InfoResult<(Distribution, Distribution)> {
        let alphabet = self.xs.resolve_joint_alphabet(&self.ys, self.alphabet)?;
        debug!(
            "relative entropy: shape {:?}, alphabet {alphabet}, log base {}",
            self.xs.shape(),
            self.log_base
        );
        let support = support_size(alphabet, 1)?;
        let [p, q] = pool(
            self.xs.rows(),
            [support, support],
            |r, [p, q]| {
                for (&x, &y) in self.xs.row(r).iter().zip(self.ys.row(r)) {
                    p.tick(x as usize)?;
                    q.tick(y as usize)?;
                }
                Ok(())
            },
        )?;
        trace!("relative entropy: {} observations", p.counts());
        Ok((p, q))
    }

    /// `log_b p(e) / q(e)` for every symbol `e`; symbols absent from `xs` report 0.
    pub fn local_values(&self) -> InfoResult<Array1<f64>> {
        let (p, q) = self.histograms()?;
        let (np, nq) = (p.counts() as f64, q.counts() as f64);
        p.iter()
            .zip(q.iter())
            .map(|(&cp, &cq)| match (cp, cq) {
                (0, _) => Ok(0.0),
                (_, 0) => Err(InfoError::Domain {
                    measure: "relative entropy",
                    value: f64::INFINITY,
                }),
                _ => local_log(
                    "relative entropy",
                    (cp as f64 / np) / (cq as f64 / nq),
                    self.log_base,
                ),
            })
            .collect()
    }
}

impl GlobalValue for RelativeEntropy {
    fn global_value(&self) -> InfoResult<f64> {
        let (p, q) = self.histograms()?;
        shannon::relative_entropy(&p, &q, self.log_base)
    }
}
