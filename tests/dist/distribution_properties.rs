// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use infodynamics::{Distribution, InfoError};
use rstest::rstest;

use crate::test_helpers::generate_random_counts;

#[test]
fn probabilities_of_seeded_counts() {
    let d = Distribution::from_counts(vec![3, 0, 1, 2]).unwrap();
    assert_abs_diff_eq!(d.probability(0).unwrap(), 0.5, epsilon = 1e-15);
    assert_abs_diff_eq!(d.probability(1).unwrap(), 0.0, epsilon = 1e-15);
    assert_abs_diff_eq!(d.probability(2).unwrap(), 1.0 / 6.0, epsilon = 1e-15);
    assert_abs_diff_eq!(d.probability(3).unwrap(), 1.0 / 3.0, epsilon = 1e-15);
    assert_eq!(
        d.probability(4),
        Err(InfoError::IndexOutOfRange {
            event: 4,
            support: 4
        })
    );
}

#[test]
fn fresh_distribution_has_no_observations() {
    let d = Distribution::new(5).unwrap();
    assert!(!d.valid());
    assert_eq!(d.counts(), 0);
    assert_eq!(d.len(), 5);
}

#[rstest]
#[case(2, 10, 1)]
#[case(8, 3, 2)]
#[case(50, 100, 3)]
#[case(256, 1, 4)]
fn probabilities_sum_to_one(#[case] support: usize, #[case] max_count: usize, #[case] seed: u64) {
    let d = Distribution::from_counts(generate_random_counts(support, max_count, seed)).unwrap();
    assert!(d.valid());
    let total: f64 = (0..d.len()).map(|e| d.probability(e).unwrap()).sum();
    assert_abs_diff_eq!(total, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(d.dump().unwrap().sum(), 1.0, epsilon = 1e-12);
}

#[rstest]
#[case(4, 5)]
#[case(16, 6)]
fn tick_increments_by_one(#[case] support: usize, #[case] seed: u64) {
    let mut d = Distribution::from_counts(generate_random_counts(support, 7, seed)).unwrap();
    for e in 0..support {
        let before = d.get(e).unwrap();
        let total = d.counts();
        let after = d.tick(e).unwrap();
        assert_eq!(before, after - 1);
        assert_eq!(d.get(e).unwrap(), after);
        assert_eq!(d.counts(), total + 1);
    }
}

#[test]
fn copy_does_not_alias() {
    let original = Distribution::from_counts(vec![1, 2, 3]).unwrap();
    let mut copy = original.copy();
    copy.tick(0).unwrap();
    copy.resize(5).unwrap();
    assert_eq!(original.as_slice(), &[1, 2, 3]);
    assert_eq!(original.counts(), 6);
    assert_eq!(copy.as_slice(), &[2, 2, 3, 0, 0]);
}

#[test]
fn invalid_operations_are_rejected() {
    assert_eq!(
        Distribution::new(0),
        Err(InfoError::Construction { support: 0 })
    );
    let mut d = Distribution::new(3).unwrap();
    assert!(matches!(d.dump(), Err(InfoError::InvalidDistribution { .. })));
    assert!(d.set(3, 1).is_err());
    d.set(2, 4).unwrap();
    assert!(d.valid());
    assert_abs_diff_eq!(d.probability(2).unwrap(), 1.0, epsilon = 1e-15);
}
