// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use infodynamics::api;
use infodynamics::estimators::ActiveInformation;
use infodynamics::estimators::traits::{GlobalValue, LocalValues};
use infodynamics::InfoError;
use rstest::rstest;

use crate::test_helpers::{assert_values_close, generate_random_ensemble, generate_random_series};

#[rstest]
#[case(vec![1, 1, 0, 0, 1, 0, 0, 1], 0.918296)]
#[case(vec![1, 0, 0, 0, 0, 0, 0, 0, 0], 0.000000)]
#[case(vec![0, 0, 1, 1, 1, 0, 0, 1, 1, 1], 0.466917)]
#[case(vec![3, 3, 3, 2, 1, 0, 0, 0, 1], 1.270942)]
fn single_realization(#[case] series: Vec<u32>, #[case] expected: f64) {
    let ai = ActiveInformation::new(series, 2).unwrap();
    assert_abs_diff_eq!(ai.global_value().unwrap(), expected, epsilon = 1e-6);
}

#[test]
fn binary_ensemble() {
    let series = vec![vec![1u32, 1, 0, 0, 1, 0, 0, 1], vec![0, 0, 0, 1, 0, 0, 0, 1]];
    let ai = ActiveInformation::new(series, 2).unwrap();
    assert_abs_diff_eq!(ai.global_value().unwrap(), 0.459148, epsilon = 1e-6);
}

#[test]
fn base_four_ensemble() {
    let series = vec![
        vec![3u32, 3, 3, 2, 1, 0, 0, 0, 1],
        vec![2, 2, 3, 3, 3, 3, 2, 1, 0],
        vec![0, 0, 0, 0, 1, 1, 0, 0, 0],
        vec![1, 1, 0, 0, 0, 1, 1, 2, 2],
    ];
    let ai = ActiveInformation::new(series, 2).unwrap();
    assert_abs_diff_eq!(ai.global_value().unwrap(), 1.324291, epsilon = 1e-6);
}

#[test]
fn binary_storage_lies_in_unit_interval() {
    let value = api::active_info(vec![0u32, 0, 1, 1, 1, 0, 0, 1, 1, 1], 2, 0, 2.0, false)
        .unwrap()
        .global()
        .unwrap();
    assert!(value.is_finite());
    assert!((0.0..=1.0).contains(&value));
    assert_abs_diff_eq!(value, 0.46691718668869925, epsilon = 1e-12);
}

#[test]
fn local_values_per_time_step() {
    let local = api::active_info(vec![0u32, 0, 1, 1, 1, 0, 0, 1, 1, 1], 2, 0, 2.0, true)
        .unwrap()
        .into_local()
        .unwrap();
    assert_eq!(local.dim(), (1, 8));
    let expected = [0.415037, 0.415037, -0.169925, 0.415037, 2.0, 0.415037, 0.415037, -0.169925];
    assert_values_close(local.as_slice().unwrap(), &expected, 1e-6);
}

#[rstest]
#[case(1, 20, 2, 1)]
#[case(3, 50, 3, 2)]
#[case(6, 40, 4, 3)]
fn local_mean_equals_global(
    #[case] rows: usize,
    #[case] columns: usize,
    #[case] history: usize,
    #[case] seed: u64,
) {
    let series = generate_random_ensemble(rows, columns, 3, seed);
    let ai = ActiveInformation::new(series, history).unwrap();
    let local = ai.local_values().unwrap();
    assert_eq!(local.dim(), (rows, columns - history));
    assert_abs_diff_eq!(
        local.mean().unwrap(),
        ai.global_value().unwrap(),
        epsilon = 1e-10
    );
}

#[test]
fn log_base_rescales() {
    let series = generate_random_series(200, 4, 7);
    let bits = ActiveInformation::new(series.clone(), 2)
        .unwrap()
        .global_value()
        .unwrap();
    let nats = ActiveInformation::new(series.clone(), 2)
        .unwrap()
        .log_base(std::f64::consts::E)
        .global_value()
        .unwrap();
    assert_abs_diff_eq!(nats, bits * std::f64::consts::LN_2, epsilon = 1e-12);

    let one_call = api::active_info(series, 2, 0, std::f64::consts::E, false)
        .unwrap()
        .global()
        .unwrap();
    assert_abs_diff_eq!(one_call, nats, epsilon = 1e-12);
}

#[test]
fn invalid_history() {
    assert!(matches!(
        api::active_info(vec![0u32, 1, 0, 1], 0, 0, 2.0, false),
        Err(InfoError::InvalidHistoryLength { history: 0, .. })
    ));
    assert_eq!(
        api::active_info(vec![0u32, 1, 0, 1], 4, 0, 2.0, false),
        Err(InfoError::SeriesTooShort {
            length: 4,
            required: 5
        })
    );
    assert_eq!(
        api::active_info(vec![0u32], 1, 0, 2.0, true),
        Err(InfoError::SeriesTooShort {
            length: 1,
            required: 2
        })
    );
    assert_eq!(
        ActiveInformation::new(vec![0u32, 1, 1], usize::MAX).err(),
        Some(InfoError::SeriesTooShort {
            length: 3,
            required: usize::MAX
        })
    );
}

#[rstest]
#[case(61)]
#[case(40)]
fn oversized_state_space_is_rejected(#[case] k: usize) {
    let series = generate_random_series(64, 2, 11);
    let ai = ActiveInformation::new(series, k).unwrap();
    assert_eq!(
        ai.global_value(),
        Err(InfoError::StateSpaceOverflow {
            alphabet: 2,
            exponent: k + 1
        })
    );
    assert!(ai.local_values().is_err());
}

#[test]
fn explicit_alphabet_too_small() {
    assert_eq!(
        api::active_info(vec![0u32, 1, 2, 1, 0], 1, 2, 2.0, false),
        Err(InfoError::InvalidState {
            state: 2,
            alphabet: 2
        })
    );
}
