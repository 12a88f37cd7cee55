// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # infodynamics
//!
//! Information dynamics of discrete time series: entropy, mutual information, active
//! information storage, entropy rate and transfer entropy, computed from empirical
//! distributions over dense integer states.
//!
//! ## Quick Start
//!
//! ```rust
//! use infodynamics::estimators::{ActiveInformation, TransferEntropy};
//! use infodynamics::estimators::traits::{GlobalValue, LocalValues};
//!
//! // Single realization
//! let ai = ActiveInformation::new(vec![0u32, 0, 1, 1, 1, 0, 0, 1, 1, 1], 2).unwrap();
//! let storage = ai.global_value().unwrap();
//! let per_step = ai.local_values().unwrap(); // shape (1, 8)
//!
//! // Ensemble of realizations, source -> target
//! let source = vec![vec![0u32, 1, 0, 1, 0, 0, 1, 1, 0, 0], vec![1, 1, 0, 0, 1, 0, 0, 1, 0, 1]];
//! let target = vec![vec![0u32, 0, 1, 0, 1, 1, 1, 0, 1, 1], vec![0, 1, 1, 0, 0, 1, 0, 0, 1, 0]];
//! let te = TransferEntropy::new(source, target, 2).unwrap().log_base(2.0);
//! let flow = te.global_value().unwrap();
//! # let _ = (storage, per_step, flow);
//! ```
//!
//! ## Measures
//!
//! | Measure | Windowed | Local values | Type |
//! |---------|----------|--------------|------|
//! | Active information storage | ✅ | ✅ | [`estimators::ActiveInformation`] |
//! | Entropy rate | ✅ | ✅ | [`estimators::EntropyRate`] |
//! | Transfer entropy | ✅ | ✅ | [`estimators::TransferEntropy`] |
//! | Block entropy | ✅ | ✅ | [`estimators::BlockEntropy`] |
//! | Mutual information | ❌ | ✅ | [`estimators::MutualInformation`] |
//! | Conditional entropy | ❌ | ✅ | [`estimators::ConditionalEntropy`] |
//! | Relative entropy | ❌ | per symbol | [`estimators::RelativeEntropy`] |
//!
//! ## Architecture
//!
//! The library follows a three-layer architecture:
//!
//! 1. **Distribution**: [`dist::Distribution`], a histogram over a fixed integer support
//! 2. **Shannon layer**: [`shannon`], pure functions on distributions
//! 3. **Time-series layer**: [`estimators`], which slides history windows over one or many
//!    realizations, pools the counts of all realizations and hands the resulting
//!    distributions to the Shannon layer; [`api`] wraps each estimator in a single call
//!
//! Inputs are normalised once into a [`estimators::Series`] (rows = realizations,
//! columns = time). Two separately named parameters select the alphabet size
//! (`alphabet`, inferred as `max + 1` but at least 2 when below 2) and the logarithm
//! base (`log_base`, bits by default).
//!
//! ## Feature Flags
//!
//! - `parallel`: accumulate the realizations of an ensemble on the rayon thread pool.
//!   Per-realization tables are merged in order, so results do not change.
//!
//! ## Logging
//!
//! Estimators report their resolved configuration through the `log` facade at `debug`
//! level and accumulation totals at `trace` level. No logger is installed.

pub mod api;
pub mod dist;
pub mod error;
pub mod estimators;
pub mod shannon;

pub use dist::Distribution;
pub use error::{InfoError, InfoResult};
pub use estimators::traits::{GlobalValue, LocalValues, Measure};
pub use shannon::DEFAULT_LOG_BASE;
