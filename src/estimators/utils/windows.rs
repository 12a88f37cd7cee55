// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sliding-window encodings of a single realization.
//!
//! A window `x[j..j+k]` over an alphabet of size `b` is encoded as the base-`b`
//! integer `Σ x[j+i] b^(k-1-i)`, so blocks of length `k` occupy the events
//! `0..b^k` of a distribution. Callers size their distributions with
//! [`support_size`] first, which bounds every support by [`MAX_SUPPORT`] and so
//! also guarantees the encodings below fit into `usize`.

use crate::dist::MAX_SUPPORT;
use crate::error::{InfoError, InfoResult};
use ndarray::ArrayView1;

/// `alphabet^exponent`, or [`InfoError::StateSpaceOverflow`] above [`MAX_SUPPORT`].
pub fn support_size(alphabet: u32, exponent: usize) -> InfoResult<usize> {
    let overflow = InfoError::StateSpaceOverflow { alphabet, exponent };
    let exp = u32::try_from(exponent).map_err(|_| overflow.clone())?;
    (alphabet as usize)
        .checked_pow(exp)
        .filter(|&n| n <= MAX_SUPPORT)
        .ok_or(overflow)
}

/// Support of the joint space of two alphabets, `alphabet_x * alphabet_y`.
pub fn joint_support(alphabet_x: u32, alphabet_y: u32) -> InfoResult<usize> {
    (alphabet_x as usize)
        .checked_mul(alphabet_y as usize)
        .filter(|&n| n <= MAX_SUPPORT)
        .ok_or(InfoError::StateSpaceOverflow {
            alphabet: alphabet_x.max(alphabet_y),
            exponent: 2,
        })
}

/// Codes of every length-`length` block of `row`; `codes[j]` encodes `row[j..j+length]`.
///
/// Returns `m - length + 1` codes, or none if the row is shorter than a block.
pub fn block_codes(row: ArrayView1<'_, u32>, length: usize, alphabet: usize) -> Vec<usize> {
    let m = row.len();
    if length == 0 || length > m {
        return Vec::new();
    }
    let lead = alphabet.pow(length as u32 - 1);
    let mut codes = Vec::with_capacity(m - length + 1);
    let mut code = row
        .iter()
        .take(length)
        .fold(0usize, |acc, &x| acc * alphabet + x as usize);
    codes.push(code);
    for j in length..m {
        code = (code - row[j - length] as usize * lead) * alphabet + row[j] as usize;
        codes.push(code);
    }
    codes
}

/// Slice a realization into `(futures, histories)` for every time index `i >= k`.
///
/// - futures: `x_i`
/// - histories: code of `x[i-k..i]`
pub fn history_slices(
    row: ArrayView1<'_, u32>,
    history_len: usize,
    alphabet: usize,
) -> (Vec<usize>, Vec<usize>) {
    let m = row.len();
    if history_len == 0 || history_len >= m {
        return (Vec::new(), Vec::new());
    }
    let futures = row.iter().skip(history_len).map(|&x| x as usize).collect();
    let mut histories = block_codes(row, history_len, alphabet);
    histories.truncate(m - history_len);
    (futures, histories)
}

/// Slice source and destination realizations into future and history components
/// for transfer entropy, aligned on the time indices `i >= dest_hist_len`.
///
/// Returns `(dest_future, dest_history, src_history)`:
/// - dest_future: `y_i`
/// - dest_history: code of `y[i-k..i]`
/// - src_history: code of `x[i-l..i]`, with `l <= k`
pub fn te_slices(
    source: ArrayView1<'_, u32>,
    destination: ArrayView1<'_, u32>,
    src_hist_len: usize,
    dest_hist_len: usize,
    alphabet: usize,
) -> (Vec<usize>, Vec<usize>, Vec<usize>) {
    let m = destination.len();
    if src_hist_len == 0 || src_hist_len > dest_hist_len || source.len() != m {
        return (Vec::new(), Vec::new(), Vec::new());
    }
    let (dest_future, dest_history) = history_slices(destination, dest_hist_len, alphabet);
    if dest_future.is_empty() {
        return (Vec::new(), Vec::new(), Vec::new());
    }
    let offset = dest_hist_len - src_hist_len;
    let src_history = block_codes(source, src_hist_len, alphabet)[offset..m - src_hist_len].to_vec();
    (dest_future, dest_history, src_history)
}
