// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::{InfoError, InfoResult};
use ndarray::{Array, Dimension};

pub trait GlobalValue {
    /// Compute and return the global value of the measure.
    fn global_value(&self) -> InfoResult<f64>;
}

pub trait LocalValues: GlobalValue {
    /// Shape of the local output (one row per realization for windowed measures).
    type Dim: Dimension;

    /// Compute and return the local values of the measure.
    fn local_values(&self) -> InfoResult<Array<f64, Self::Dim>>;

    /// Derive the global value as the mean of the local values.
    ///
    /// Every observation carries equal weight, so this agrees with
    /// [`GlobalValue::global_value`] up to rounding.
    fn global_from_local(&self) -> InfoResult<f64> {
        self.local_values()?.mean().ok_or(InfoError::EmptySeries)
    }
}

/// Either the averaged value of a measure or its pointwise values.
#[derive(Debug, Clone, PartialEq)]
pub enum Measure<D: Dimension> {
    Global(f64),
    Local(Array<f64, D>),
}

impl<D: Dimension> Measure<D> {
    /// Evaluate `estimator` globally, or locally when `local` is set.
    pub fn evaluate<E>(estimator: &E, local: bool) -> InfoResult<Self>
    where
        E: LocalValues<Dim = D>,
    {
        if local {
            estimator.local_values().map(Measure::Local)
        } else {
            estimator.global_value().map(Measure::Global)
        }
    }

    pub fn global(&self) -> Option<f64> {
        match self {
            Measure::Global(value) => Some(*value),
            Measure::Local(_) => None,
        }
    }

    pub fn local(&self) -> Option<&Array<f64, D>> {
        match self {
            Measure::Global(_) => None,
            Measure::Local(values) => Some(values),
        }
    }

    pub fn into_local(self) -> Option<Array<f64, D>> {
        match self {
            Measure::Global(_) => None,
            Measure::Local(values) => Some(values),
        }
    }
}
