// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shannon information measures on [`Distribution`]s.
//!
//! All functions take the logarithm base explicitly ([`DEFAULT_LOG_BASE`] gives bits)
//! and require valid distributions. Joint distributions follow the row-major event
//! encoding `x * |y| + y`, so a joint over `(x, y)` has support `|x| * |y|`.
//! A non-finite result is reported as [`InfoError::Domain`].

use crate::dist::Distribution;
use crate::error::{InfoError, InfoResult, finite};

/// Logarithm base used when a caller does not choose one (bits).
pub const DEFAULT_LOG_BASE: f64 = 2.0;

/// Entropy in nats, `-Σ p ln p` over events with non-zero probability.
fn entropy_nats(dist: &Distribution) -> InfoResult<f64> {
    dist.ensure_valid()?;
    let n = dist.counts() as f64;
    let mut h = 0.0_f64;
    for &cnt in dist.iter() {
        if cnt > 0 {
            let p = cnt as f64 / n;
            h -= p * p.ln();
        }
    }
    Ok(h)
}

fn in_base(measure: &'static str, nats: f64, base: f64) -> InfoResult<f64> {
    finite(measure, nats / base.ln())
}

/// Pointwise value `log_base(ratio)` of a local measure.
pub(crate) fn local_log(measure: &'static str, ratio: f64, base: f64) -> InfoResult<f64> {
    finite(measure, ratio.ln() / base.ln())
}

fn check_support(expected: usize, found: usize) -> InfoResult<()> {
    if expected == found {
        Ok(())
    } else {
        Err(InfoError::SupportMismatch { expected, found })
    }
}

/// Shannon entropy `H(d)` in base `base`.
pub fn entropy(dist: &Distribution, base: f64) -> InfoResult<f64> {
    in_base("entropy", entropy_nats(dist)?, base)
}

/// Mutual information `I(X;Y) = H(X) + H(Y) - H(X,Y)`.
///
/// `joint` must have support `|x| * |y|` with events encoded as `x * |y| + y`.
pub fn mutual_info(
    joint: &Distribution,
    marginal_x: &Distribution,
    marginal_y: &Distribution,
    base: f64,
) -> InfoResult<f64> {
    let expected = marginal_x
        .len()
        .checked_mul(marginal_y.len())
        .ok_or(InfoError::SupportMismatch {
            expected: usize::MAX,
            found: joint.len(),
        })?;
    check_support(expected, joint.len())?;
    let nats = entropy_nats(marginal_x)? + entropy_nats(marginal_y)? - entropy_nats(joint)?;
    in_base("mutual information", nats, base)
}

/// Conditional entropy `H(Y|X) = H(X,Y) - H(X)` given the joint and the `x` marginal.
///
/// The joint support must be a multiple of the marginal support.
pub fn conditional_entropy(
    joint: &Distribution,
    marginal: &Distribution,
    base: f64,
) -> InfoResult<f64> {
    if joint.len() % marginal.len() != 0 {
        return Err(InfoError::SupportMismatch {
            expected: marginal.len() * (joint.len() / marginal.len() + 1),
            found: joint.len(),
        });
    }
    let nats = entropy_nats(joint)? - entropy_nats(marginal)?;
    in_base("conditional entropy", nats, base)
}

/// Conditional mutual information `I(X;Y|Z) = H(X,Z) + H(Y,Z) - H(X,Y,Z) - H(Z)`.
///
/// Supports must satisfy `|xyz| = |xz| * |yz| / |z|`.
pub fn conditional_mutual_info(
    joint: &Distribution,
    marginal_xz: &Distribution,
    marginal_yz: &Distribution,
    marginal_z: &Distribution,
    base: f64,
) -> InfoResult<f64> {
    let z = marginal_z.len();
    if marginal_xz.len() % z != 0 {
        return Err(InfoError::SupportMismatch {
            expected: z,
            found: marginal_xz.len(),
        });
    }
    if marginal_yz.len() % z != 0 {
        return Err(InfoError::SupportMismatch {
            expected: z,
            found: marginal_yz.len(),
        });
    }
    let expected = (marginal_xz.len() / z)
        .checked_mul(marginal_yz.len())
        .ok_or(InfoError::SupportMismatch {
            expected: usize::MAX,
            found: joint.len(),
        })?;
    check_support(expected, joint.len())?;
    let nats = entropy_nats(marginal_xz)? + entropy_nats(marginal_yz)?
        - entropy_nats(joint)?
        - entropy_nats(marginal_z)?;
    in_base("conditional mutual information", nats, base)
}

/// Relative entropy (Kullback-Leibler divergence) `D(p || q)` of the posterior `p`
/// from the prior `q`.
///
/// An event with `p(e) > 0` and `q(e) = 0` makes the divergence infinite, which is
/// reported as [`InfoError::Domain`].
pub fn relative_entropy(p: &Distribution, q: &Distribution, base: f64) -> InfoResult<f64> {
    check_support(p.len(), q.len())?;
    p.ensure_valid()?;
    q.ensure_valid()?;
    let np = p.counts() as f64;
    let nq = q.counts() as f64;
    let mut d = 0.0_f64;
    for (&cp, &cq) in p.iter().zip(q.iter()) {
        if cp == 0 {
            continue;
        }
        if cq == 0 {
            return Err(InfoError::Domain {
                measure: "relative entropy",
                value: f64::INFINITY,
            });
        }
        let pe = cp as f64 / np;
        let qe = cq as f64 / nq;
        d += pe * (pe / qe).ln();
    }
    in_base("relative entropy", d, base)
}
