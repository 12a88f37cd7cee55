// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::{InfoError, InfoResult};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

/// Raw input accepted by the time-series measures.
///
/// A flat sequence is a single realization; a two-dimensional input is an ensemble
/// of equal-length realizations (rows = realizations, columns = time).
pub enum SeriesData {
    /// A single realization.
    OneDimensional(Array1<u32>),
    /// An ensemble stored as a rectangular array.
    TwoDimensional(Array2<u32>),
    /// An ensemble given as rows; every row must have the same length.
    Nested(Vec<Vec<u32>>),
}

impl From<Array1<u32>> for SeriesData {
    fn from(array: Array1<u32>) -> Self {
        SeriesData::OneDimensional(array)
    }
}

impl From<ArrayView1<'_, u32>> for SeriesData {
    fn from(view: ArrayView1<'_, u32>) -> Self {
        SeriesData::OneDimensional(view.to_owned())
    }
}

impl From<Array2<u32>> for SeriesData {
    fn from(array: Array2<u32>) -> Self {
        SeriesData::TwoDimensional(array)
    }
}

impl From<ArrayView2<'_, u32>> for SeriesData {
    fn from(view: ArrayView2<'_, u32>) -> Self {
        SeriesData::TwoDimensional(view.to_owned())
    }
}

impl From<Vec<u32>> for SeriesData {
    fn from(values: Vec<u32>) -> Self {
        SeriesData::OneDimensional(Array1::from(values))
    }
}

impl From<&[u32]> for SeriesData {
    fn from(values: &[u32]) -> Self {
        SeriesData::OneDimensional(Array1::from(values.to_vec()))
    }
}

impl<const N: usize> From<[u32; N]> for SeriesData {
    fn from(values: [u32; N]) -> Self {
        SeriesData::OneDimensional(Array1::from(values.to_vec()))
    }
}

impl From<Vec<Vec<u32>>> for SeriesData {
    fn from(rows: Vec<Vec<u32>>) -> Self {
        SeriesData::Nested(rows)
    }
}

impl<const M: usize, const N: usize> From<[[u32; M]; N]> for SeriesData {
    fn from(rows: [[u32; M]; N]) -> Self {
        SeriesData::TwoDimensional(Array2::from(rows.to_vec()))
    }
}

impl From<Series> for SeriesData {
    fn from(series: Series) -> Self {
        SeriesData::TwoDimensional(series.data)
    }
}

/// Canonical row-major ensemble of non-negative integer states.
///
/// Every measure normalises its input into this shape before any accumulation,
/// so a single realization is simply an ensemble with one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    data: Array2<u32>,
}

impl Series {
    /// Normalise `data` into a `(rows, columns)` ensemble.
    ///
    /// Fails with [`InfoError::EmptySeries`] when there are no rows and with
    /// [`InfoError::ShapeMismatch`] when nested rows differ in length.
    pub fn new(data: impl Into<SeriesData>) -> InfoResult<Self> {
        let data = match data.into() {
            SeriesData::OneDimensional(row) => row.insert_axis(Axis(0)),
            SeriesData::TwoDimensional(array) => array,
            SeriesData::Nested(rows) => {
                let m = rows.first().map_or(0, Vec::len);
                if let Some(bad) = rows.iter().find(|row| row.len() != m) {
                    return Err(InfoError::ShapeMismatch {
                        left: (1, m),
                        right: (1, bad.len()),
                    });
                }
                Array2::from_shape_fn((rows.len(), m), |(r, c)| rows[r][c])
            }
        };
        if data.nrows() == 0 {
            return Err(InfoError::EmptySeries);
        }
        Ok(Self { data })
    }

    /// Number of realizations.
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Length of every realization.
    pub fn columns(&self) -> usize {
        self.data.ncols()
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.data.nrows(), self.data.ncols())
    }

    pub fn view(&self) -> ArrayView2<'_, u32> {
        self.data.view()
    }

    pub fn row(&self, index: usize) -> ArrayView1<'_, u32> {
        self.data.row(index)
    }

    pub fn into_inner(self) -> Array2<u32> {
        self.data
    }

    /// Largest state in the ensemble, `None` if it holds no observations.
    pub fn max_state(&self) -> Option<u32> {
        self.data.iter().copied().max()
    }

    /// Alphabet inferred from the data: `max + 1`, but at least 2.
    pub fn infer_alphabet(&self) -> InfoResult<u32> {
        infer_alphabet(self.max_state())
    }

    /// Resolve the alphabet for this series; values below 2 mean "infer".
    pub(crate) fn resolve_alphabet(&self, requested: u32) -> InfoResult<u32> {
        if requested < 2 {
            return self.infer_alphabet();
        }
        self.check_states(requested)?;
        Ok(requested)
    }

    /// Resolve one alphabet shared by two series.
    pub(crate) fn resolve_joint_alphabet(&self, other: &Series, requested: u32) -> InfoResult<u32> {
        if requested < 2 {
            return infer_alphabet(self.max_state().max(other.max_state()));
        }
        self.check_states(requested)?;
        other.check_states(requested)?;
        Ok(requested)
    }

    /// Validate a history length `k` against the realization length, which must be
    /// at least `k + extra`.
    pub(crate) fn check_history(&self, history: usize, extra: usize) -> InfoResult<()> {
        let m = self.columns();
        if history == 0 {
            return Err(InfoError::InvalidHistoryLength {
                history,
                max: m.saturating_sub(extra),
            });
        }
        let required = history.saturating_add(extra);
        if m == 0 || m < required {
            return Err(InfoError::SeriesTooShort {
                length: m,
                required,
            });
        }
        Ok(())
    }

    /// Require at least one observation per realization.
    pub(crate) fn check_observed(&self) -> InfoResult<()> {
        if self.columns() == 0 {
            return Err(InfoError::SeriesTooShort {
                length: 0,
                required: 1,
            });
        }
        Ok(())
    }

    /// Require `other` to have exactly the same shape.
    pub(crate) fn check_same_shape(&self, other: &Series) -> InfoResult<()> {
        if self.shape() == other.shape() {
            Ok(())
        } else {
            Err(InfoError::ShapeMismatch {
                left: self.shape(),
                right: other.shape(),
            })
        }
    }

    fn check_states(&self, alphabet: u32) -> InfoResult<()> {
        match self.data.iter().find(|&&state| state >= alphabet) {
            Some(&state) => Err(InfoError::InvalidState { state, alphabet }),
            None => Ok(()),
        }
    }
}

fn infer_alphabet(max_state: Option<u32>) -> InfoResult<u32> {
    let max_state = max_state.unwrap_or(0);
    let alphabet = max_state
        .checked_add(1)
        .ok_or(InfoError::StateSpaceOverflow {
            alphabet: max_state,
            exponent: 1,
        })?;
    Ok(alphabet.max(2))
}
