#![allow(non_snake_case)]

use approx::assert_relative_eq;
use itertools::iproduct;
use nurbs_basis::{
    bspline_basis_1d, nurbs_basis_1d, nurbs_basis_2d, sample_curve_basis, BasisError,
    DEFAULT_SAMPLE_COUNT,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const XI: [f64; 9] = [-2.0, -2.0, -2.0, -1.0, 0.0, 1.0, 2.0, 2.0, 2.0];
const WEIGHTS: [f64; 5] = [0.5, 1.75, 0.8, 1.8, 1.75];

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn interior_samples(min: f64, max: f64, count: usize) -> impl Iterator<Item = f64> + Clone {
    (1..=count).map(move |k| min + (max - min) * k as f64 / (count + 1) as f64)
}

#[test]
fn bspline_partition_of_unity() {
    init_logger();
    let knot_vectors: [&[f64]; 3] = [
        &[0.0, 0.0, 0.0, 0.0, 0.2, 0.45, 0.7, 1.0, 1.0, 1.0, 1.0],
        &[-1.0, -1.0, 0.0, 0.0, 1.0, 2.0, 2.0],
        &[0.0, 0.0, 0.0, 1.0, 1.0, 2.0, 3.0, 3.0, 3.0],
    ];
    let orders = [3, 1, 2];
    for (knots, p) in knot_vectors.iter().zip(orders) {
        let basis = bspline_basis_1d(p, knots).unwrap();
        let (min, max) = (knots[0], knots[knots.len() - 1]);
        for t in interior_samples(min, max, 64) {
            let sum: f64 = basis.iter().map(|b| b.eval(t)).sum();
            assert_relative_eq!(sum, 1.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn rational_partition_of_unity_with_random_weights() {
    init_logger();
    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
    for _ in 0..20 {
        let weights: Vec<f64> = (0..5).map(|_| rng.gen_range(0.05..3.0)).collect();
        let R = nurbs_basis_1d(3, &XI, &weights).unwrap();
        for t in interior_samples(-2.0, 2.0, 64) {
            let sum: f64 = R.iter().map(|r| r.eval(t).unwrap()).sum();
            assert_relative_eq!(sum, 1.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn rational_partition_of_unity_with_some_zero_weights() {
    let R = nurbs_basis_1d(3, &XI, &[0.0, 1.2, 0.0, 0.7, 0.0]).unwrap();
    for t in interior_samples(-2.0, 2.0, 64) {
        let sum: f64 = R.iter().map(|r| r.eval(t).unwrap()).sum();
        assert_relative_eq!(sum, 1.0, epsilon = 1e-9);
    }
}

#[test]
fn local_support() {
    let p = 2;
    let knots = [0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 4.0, 4.0, 4.0];
    let basis = bspline_basis_1d(p, &knots).unwrap();
    for (i, b) in basis.iter().enumerate() {
        for k in 0..=400 {
            let t = -1.0 + 6.0 * k as f64 / 400.0;
            if t < knots[i] || t >= knots[i + p + 1] {
                // The domain endpoints are nudged inwards, so skip them
                if (t - 4.0).abs() < 1e-12 || t.abs() < 1e-12 {
                    continue;
                }
                assert_eq!(b.eval(t), 0.0, "N({i}, {p}, {t})");
            }
        }
    }
}

#[test]
fn repeated_knots_stay_finite() {
    let knots = [0.0, 0.0, 0.0, 0.0, 0.5, 0.5, 0.5, 1.0, 1.0, 1.0, 1.0];
    let weights = [1.0, 0.3, 2.0, 0.9, 1.1, 0.4, 1.0];
    let basis = bspline_basis_1d(3, &knots).unwrap();
    let R = nurbs_basis_1d(3, &knots, &weights).unwrap();
    for k in 0..=200 {
        let t = k as f64 / 200.0;
        for b in &basis {
            assert!(b.eval(t).is_finite(), "N({}, 3, {t})", b.index());
        }
        for r in &R {
            assert!(r.eval(t).unwrap().is_finite(), "R({}, 3, {t})", r.index());
        }
    }
}

#[test]
fn upper_boundary_is_not_all_zero() {
    let basis = bspline_basis_1d(3, &XI).unwrap();
    assert!(basis.iter().any(|b| b.eval(2.0) != 0.0));

    let R = nurbs_basis_1d(3, &XI, &WEIGHTS).unwrap();
    let sum: f64 = R.iter().map(|r| r.eval(2.0).unwrap()).sum();
    assert_relative_eq!(sum, 1.0, epsilon = 1e-9);
}

#[test]
fn concrete_scenario() {
    let R = nurbs_basis_1d(3, &XI, &WEIGHTS).unwrap();
    assert_eq!(R.len(), 9 - 3 - 1);
    let sum: f64 = R.iter().map(|r| r.eval(0.0).unwrap()).sum();
    assert_relative_eq!(sum, 1.0, epsilon = 1e-9);
}

#[test]
fn insufficient_basis() {
    assert_eq!(
        bspline_basis_1d(4, &[0.0, 1.0, 2.0, 3.0]).unwrap_err(),
        BasisError::InsufficientBasis { knots: 4, order: 4 }
    );
}

const GRID_KNOTS: [f64; 6] = [0.0, 0.0, 0.0, 1.0, 1.0, 1.0];

fn weight_grid() -> Vec<Vec<f64>> {
    vec![
        vec![1.0, 0.6, 1.3],
        vec![0.9, 1.7, 0.4],
        vec![1.2, 0.8, 1.5],
    ]
}

#[test]
fn grid_index_alignment() {
    init_logger();
    let weights = weight_grid();
    let R = nurbs_basis_2d(&weights, 2, 2, &GRID_KNOTS, &GRID_KNOTS).unwrap();
    assert_eq!(R.len(), 3);
    assert!(R.iter().all(|row| row.len() == 3));
    assert_eq!(R[1][2].index(), (1, 2));
    assert_eq!(R[1][2].weight(), 0.4);

    // Swapping two weights changes only the numerators of the two swapped
    // functions; every function still shares the (new) denominator.
    let mut swapped = weights.clone();
    swapped[1][2] = weights[0][0];
    swapped[0][0] = weights[1][2];
    let S = nurbs_basis_2d(&swapped, 2, 2, &GRID_KNOTS, &GRID_KNOTS).unwrap();

    for (a, b) in iproduct!(1..8, 1..8) {
        let (xi, eta) = (a as f64 / 8.0, b as f64 / 8.0);
        let W = R[0][0].weight_function().eval(xi, eta);
        let W_swapped = S[0][0].weight_function().eval(xi, eta);
        for (i, j) in iproduct!(0..3, 0..3) {
            let before = R[i][j].eval(xi, eta).unwrap() * W;
            let after = S[i][j].eval(xi, eta).unwrap() * W_swapped;
            let N = R[i][j].bspline().eval(xi, eta);
            assert_relative_eq!(before, weights[i][j] * N, epsilon = 1e-12);
            assert_relative_eq!(after, swapped[i][j] * N, epsilon = 1e-12);
            if (i, j) != (0, 0) && (i, j) != (1, 2) {
                assert_relative_eq!(before, after, epsilon = 1e-12);
            }
        }
    }
}

#[test]
fn grid_partition_of_unity_with_positions() {
    let cp: Vec<Vec<[f64; 3]>> = weight_grid()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            row.iter()
                .enumerate()
                .map(|(j, &w)| [i as f64 * 2.0, j as f64 - 1.0, w])
                .collect()
        })
        .collect();
    let R = nurbs_basis_2d(&cp, 2, 2, &GRID_KNOTS, &GRID_KNOTS).unwrap();
    for (xi, eta) in iproduct!(interior_samples(0.0, 1.0, 9), interior_samples(0.0, 1.0, 9)) {
        let sum: f64 = R.iter().flatten().map(|r| r.eval(xi, eta).unwrap()).sum();
        assert_relative_eq!(sum, 1.0, epsilon = 1e-9);
    }
}

#[test]
fn concurrent_evaluation_matches_sequential() {
    let R = nurbs_basis_1d(3, &XI, &WEIGHTS).unwrap();
    let expected = sample_curve_basis(&R, DEFAULT_SAMPLE_COUNT).unwrap();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| sample_curve_basis(&R, DEFAULT_SAMPLE_COUNT).unwrap()))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}
