// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use log::{debug, trace};
use ndarray::{Array2, Zip};

use crate::dist::Distribution;
use crate::error::InfoResult;
use crate::estimators::series::{Series, SeriesData};
use crate::estimators::traits::{GlobalValue, LocalValues};
use crate::estimators::utils::pool::pool;
use crate::estimators::utils::windows::joint_support;
use crate::shannon::{DEFAULT_LOG_BASE, local_log, mutual_info};

/// Two equally shaped series observed side by side, each with its own alphabet.
#[derive(Debug, Clone)]
pub(crate) struct PairedSeries {
    pub(crate) xs: Series,
    pub(crate) ys: Series,
    pub(crate) alphabet_x: u32,
    pub(crate) alphabet_y: u32,
}

/// Joint `x * |y| + y`, `x` and `y` histograms of a [`PairedSeries`].
pub(crate) struct JointTables {
    pub(crate) alphabet_y: usize,
    pub(crate) joint: Distribution,
    pub(crate) x: Distribution,
    pub(crate) y: Distribution,
}

impl PairedSeries {
    pub(crate) fn new(xs: impl Into<SeriesData>, ys: impl Into<SeriesData>) -> InfoResult<Self> {
        let xs = Series::new(xs)?;
        let ys = Series::new(ys)?;
        xs.check_same_shape(&ys)?;
        xs.check_observed()?;
        Ok(Self {
            xs,
            ys,
            alphabet_x: 0,
            alphabet_y: 0,
        })
    }

    pub(crate) fn tables(&self, measure: &str, log_base: f64) -> InfoResult<JointTables> {
        let bx = self.xs.resolve_alphabet(self.alphabet_x)?;
        let by = self.ys.resolve_alphabet(self.alphabet_y)?;
        debug!(
            "{measure}: shape {:?}, alphabets ({bx}, {by}), log base {log_base}",
            self.xs.shape()
        );
        let width = by as usize;
        let supports = [joint_support(bx, by)?, bx as usize, width];
        let [joint, x, y] = pool(self.xs.rows(), supports, |r, [joint, x, y]| {
            for (&a, &b) in self.xs.row(r).iter().zip(self.ys.row(r)) {
                joint.tick(a as usize * width + b as usize)?;
                x.tick(a as usize)?;
                y.tick(b as usize)?;
            }
            Ok(())
        })?;
        trace!("{measure}: {} observations", joint.counts());
        Ok(JointTables {
            alphabet_y: width,
            joint,
            x,
            y,
        })
    }

    /// Evaluate `point(n_xy, n_x, n_y)` at every observation, in the input's shape.
    pub(crate) fn map_observations<F>(&self, t: &JointTables, point: F) -> InfoResult<Array2<f64>>
    where
        F: Fn(f64, f64, f64) -> InfoResult<f64>,
    {
        let mut local = Array2::zeros(self.xs.shape());
        let mut failure = None;
        Zip::from(&mut local)
            .and(self.xs.view())
            .and(self.ys.view())
            .for_each(|out, &a, &b| {
                if failure.is_some() {
                    return;
                }
                let (a, b) = (a as usize, b as usize);
                let joint = t.joint[a * t.alphabet_y + b] as f64;
                match point(joint, t.x[a] as f64, t.y[b] as f64) {
                    Ok(value) => *out = value,
                    Err(err) => failure = Some(err),
                }
            });
        match failure {
            Some(err) => Err(err),
            None => Ok(local),
        }
    }
}

/// Mutual information `I(X;Y)` between two series observed at the same time indices.
///
/// No window is involved: every position contributes one joint observation. Local
/// values are `log_b p(x, y) / (p(x) p(y))` in the shape of the input.
#[derive(Debug, Clone)]
pub struct MutualInformation {
    pair: PairedSeries,
    log_base: f64,
}

impl MutualInformation {
    /// Both series must have the same shape and at least one observation.
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

impl GlobalValue for MutualInformation {
    fn global_value(&self) -> InfoResult<f64> {
        let t = self.pair.tables("mutual information", self.log_base)?;
        mutual_info(&t.joint, &t.x, &t.y, self.log_base)
    }
}

impl LocalValues for MutualInformation {
    type Dim = ndarray::Ix2;

    fn local_values(&self) -> InfoResult<Array2<f64>> {
        let t = self.pair.tables("mutual information", self.log_base)?;
        let n = t.joint.counts() as f64;
        self.pair.map_observations(&t, |joint, x, y| {
            local_log("mutual information", joint * n / (x * y), self.log_base)
        })
    }
}
