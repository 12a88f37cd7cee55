// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use infodynamics::InfoError;
use infodynamics::api;
use infodynamics::estimators::TransferEntropy;
use infodynamics::estimators::traits::{GlobalValue, LocalValues};
use ndarray::{Array2, array, s};
use rstest::rstest;

use crate::test_helpers::generate_random_ensemble;

fn te(source: &[u32], target: &[u32], history: usize, source_history: usize) -> f64 {
    TransferEntropy::new(source.to_vec(), target.to_vec(), history)
        .unwrap()
        .source_history(source_history)
        .global_value()
        .unwrap()
}

#[rstest]
// xs = [1, 1, 1, 0, 0], ys = [1, 1, 0, 0, 1]
#[case(&[1, 1, 0, 0, 1], &[1, 1, 1, 0, 0], 1, 0.666667)]
#[case(&[1, 1, 0, 0, 1], &[1, 1, 1, 0, 0], 2, 0.666667)]
#[case(&[1, 1, 1, 0, 0], &[1, 1, 0, 0, 1], 1, 0.000000)]
#[case(&[1, 1, 1, 0, 0], &[1, 1, 0, 0, 1], 2, 0.000000)]
// xs = [0, 0, 1, 1, 1, 0, 0, 0, 0, 1], ys = [1, 1, 0, 0, 0, 0, 0, 0, 1, 1]
#[case(&[1, 1, 0, 0, 0, 0, 0, 0, 1, 1], &[0, 0, 1, 1, 1, 0, 0, 0, 0, 1], 1, 0.500000)]
#[case(&[1, 1, 0, 0, 0, 0, 0, 0, 1, 1], &[0, 0, 1, 1, 1, 0, 0, 0, 0, 1], 2, 0.500000)]
#[case(&[0, 0, 1, 1, 1, 0, 0, 0, 0, 1], &[1, 1, 0, 0, 0, 0, 0, 0, 1, 1], 1, 0.106844)]
#[case(&[0, 0, 1, 1, 1, 0, 0, 0, 0, 1], &[1, 1, 0, 0, 0, 0, 0, 0, 1, 1], 2, 0.201205)]
// xs = [0, 1, 0, 1, 0, 0, 1, 1, 0, 0], ys = [0, 0, 1, 0, 1, 1, 1, 0, 1, 1]
#[case(&[0, 0, 1, 0, 1, 1, 1, 0, 1, 1], &[0, 1, 0, 1, 0, 0, 1, 1, 0, 0], 1, 0.344361)]
#[case(&[0, 0, 1, 0, 1, 1, 1, 0, 1, 1], &[0, 1, 0, 1, 0, 0, 1, 1, 0, 0], 2, 0.344361)]
#[case(&[0, 1, 0, 1, 0, 0, 1, 1, 0, 0], &[0, 0, 1, 0, 1, 1, 1, 0, 1, 1], 1, 0.250000)]
#[case(&[0, 1, 0, 1, 0, 0, 1, 1, 0, 0], &[0, 0, 1, 0, 1, 1, 1, 0, 1, 1], 2, 0.250000)]
fn two_step_history(
    #[case] source: &[u32],
    #[case] target: &[u32],
    #[case] source_history: usize,
    #[case] expected: f64,
) {
    assert_abs_diff_eq!(te(source, target, 2, source_history), expected, epsilon = 1e-6);
}

#[test]
fn single_step_history() {
    let xs = [0u32, 1, 0, 1, 0, 0, 1, 1, 0, 0];
    let ys = [0u32, 0, 1, 0, 1, 1, 1, 0, 1, 1];
    assert_abs_diff_eq!(te(&ys, &xs, 1, 1), 0.455541, epsilon = 1e-6);
    assert_abs_diff_eq!(te(&xs, &ys, 1, 1), 0.539417, epsilon = 1e-6);

    let xs = [0u32, 0, 1, 1, 1, 1, 0, 0, 0];
    let ys = [0u32, 1, 1, 1, 1, 0, 0, 0, 1];
    assert_abs_diff_eq!(te(&ys, &xs, 1, 1), 0.811278, epsilon = 1e-6);
    assert_abs_diff_eq!(te(&xs, &ys, 1, 1), 0.216917, epsilon = 1e-6);
    assert_abs_diff_eq!(te(&ys, &xs, 2, 1), 0.679270, epsilon = 1e-6);
    assert_abs_diff_eq!(te(&xs, &ys, 2, 1), 0.000000, epsilon = 1e-6);
}

fn ensemble() -> (Array2<u32>, Array2<u32>) {
    let xs = array![
        [1u32, 1, 1, 0, 0, 1, 1, 0, 1, 0],
        [0, 1, 0, 1, 1, 1, 0, 0, 0, 0],
        [0, 0, 0, 1, 0, 0, 0, 1, 0, 0],
        [0, 0, 1, 0, 0, 0, 1, 0, 0, 1],
        [0, 0, 1, 1, 1, 1, 1, 0, 0, 0]
    ];
    let ys = array![
        [0u32, 1, 0, 0, 0, 1, 0, 1, 1, 0],
        [0, 0, 0, 1, 1, 1, 0, 1, 0, 0],
        [1, 0, 1, 0, 1, 0, 0, 0, 1, 0],
        [0, 1, 1, 0, 1, 1, 1, 1, 1, 1],
        [0, 0, 1, 1, 0, 0, 0, 0, 0, 1]
    ];
    (xs, ys)
}

#[test]
fn pooled_ensemble() {
    let (xs, ys) = ensemble();
    let te = |source: &Array2<u32>, target: &Array2<u32>, l: usize| {
        TransferEntropy::new(source.view(), target.view(), 2)
            .unwrap()
            .source_history(l)
            .global_value()
            .unwrap()
    };
    assert_abs_diff_eq!(te(&ys, &xs, 1), 0.091141, epsilon = 1e-6);
    assert_abs_diff_eq!(te(&xs, &ys, 1), 0.107630, epsilon = 1e-6);
    assert_abs_diff_eq!(te(&ys, &xs, 2), 0.418550, epsilon = 1e-6);
    assert_abs_diff_eq!(te(&xs, &ys, 2), 0.279468, epsilon = 1e-6);
    assert_abs_diff_eq!(te(&xs, &xs, 2), 0.0, epsilon = 1e-12);

    let head_x = xs.slice(s![..-1, ..]).to_owned();
    let head_y = ys.slice(s![..-1, ..]).to_owned();
    assert_abs_diff_eq!(te(&head_y, &head_x, 1), 0.134536, epsilon = 1e-6);
    assert_abs_diff_eq!(te(&head_x, &head_y, 1), 0.089518, epsilon = 1e-6);
}

#[test]
fn alternating_series_transfer_nothing_new() {
    let value = api::transfer_entropy(vec![1u32, 0, 1, 0, 1, 0], vec![0u32, 1, 0, 1, 0, 1], 1, 0, 2.0, false)
        .unwrap()
        .global()
        .unwrap();
    assert!(value.is_finite());
    assert!(value >= 0.0);
    assert_abs_diff_eq!(value, 0.0, epsilon = 1e-12);
}

#[test]
fn series_with_itself() {
    let (xs, _) = ensemble();
    for l in 1..=2 {
        let te = TransferEntropy::new(xs.clone(), xs.clone(), 2)
            .unwrap()
            .source_history(l);
        assert_abs_diff_eq!(te.global_value().unwrap(), 0.0, epsilon = 1e-12);
    }
}

#[rstest]
#[case(1, 1, 41)]
#[case(2, 1, 42)]
#[case(2, 2, 43)]
#[case(3, 2, 44)]
fn local_mean_equals_global(#[case] history: usize, #[case] source_history: usize, #[case] seed: u64) {
    let source = generate_random_ensemble(4, 30, 2, seed);
    let target = generate_random_ensemble(4, 30, 2, seed + 100);
    let te = TransferEntropy::new(source, target, history)
        .unwrap()
        .source_history(source_history);
    let local = te.local_values().unwrap();
    assert_eq!(local.dim(), (4, 30 - history));
    assert_abs_diff_eq!(
        te.global_from_local().unwrap(),
        te.global_value().unwrap(),
        epsilon = 1e-10
    );
}

#[test]
fn shape_mismatch() {
    let flat = vec![1u32, 1, 1, 1];
    let nested = vec![vec![1u32, 1, 1, 1]];
    assert!(api::transfer_entropy(nested.clone(), flat.clone(), 1, 0, 2.0, false).is_ok());
    assert_eq!(
        api::transfer_entropy(vec![vec![1u32, 1, 1, 1]], vec![vec![1u32, 1, 1]], 1, 0, 2.0, false),
        Err(InfoError::ShapeMismatch {
            left: (1, 4),
            right: (1, 3)
        })
    );
    assert_eq!(
        api::transfer_entropy(
            vec![vec![1u32, 1, 1], vec![0, 0, 0]],
            vec![vec![1u32, 1, 1]],
            1,
            0,
            2.0,
            true
        ),
        Err(InfoError::ShapeMismatch {
            left: (2, 3),
            right: (1, 3)
        })
    );
}

#[test]
fn invalid_history() {
    let xs = vec![0u32, 1, 1, 0];
    assert!(matches!(
        api::transfer_entropy(xs.clone(), xs.clone(), 0, 0, 2.0, false),
        Err(InfoError::InvalidHistoryLength { history: 0, .. })
    ));
    assert_eq!(
        api::transfer_entropy(xs.clone(), xs, 4, 0, 2.0, false),
        Err(InfoError::SeriesTooShort {
            length: 4,
            required: 5
        })
    );
}
