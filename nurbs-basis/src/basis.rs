//! Cox–de Boor evaluation of non-rational B-spline basis functions.
//!
//! The textbook definition is doubly recursive and costs `O(2^p)` per
//! evaluation.  We instead fill the triangular table of lower-order values
//! bottom-up, applying exactly the same per-cell arithmetic (including the
//! 0/0 override), so the result is bit-for-bit identical to the recursive
//! definition in `O(p^2)`.
use smallvec::smallvec;

use crate::{knot_vector::KNOT_EPS, BasisError, KnotVector, VecF};

/// Evaluates `N(i, p, t)` on the given knot vector.
///
/// Values outside the domain (including NaN and ±inf) evaluate to zero; the
/// two domain endpoints are nudged inwards (see [`KnotVector::nudge`]).
pub fn basis_function(i: usize, p: usize, t: f64, U: &KnotVector) -> Result<f64, BasisError> {
    let count = U.num_basis(p)?;
    if i >= count {
        return Err(BasisError::BasisIndexOutOfRange { index: i, count });
    }
    Ok(eval_unchecked(i, p, U.nudge(t), U))
}

/// Evaluates every degree-`p` basis function at `t` from a single table,
/// returning `n = len - p - 1` values indexed by basis number.
pub fn all_basis_functions(p: usize, t: f64, U: &KnotVector) -> Result<VecF, BasisError> {
    let n = U.num_basis(p)?;
    Ok(all_unchecked(p, n, U.nudge(t), U))
}

/// Table evaluation behind [`all_basis_functions`], for callers that have
/// already checked `n = U.num_basis(p)` and nudged `t`.
pub(crate) fn all_unchecked(p: usize, n: usize, t: f64, U: &KnotVector) -> VecF {
    if !t.is_finite() {
        return smallvec![0.0; n];
    }
    // Degree-0 values for every knot interval, then collapse upwards.  The
    // row for degree d holds n + p - d entries.
    let mut N: VecF = (0..n + p).map(|k| step(k, t, U)).collect();
    for d in 1..=p {
        for k in 0..(n + p - d) {
            N[k] = blend(k, d, t, U, N[k], N[k + 1]);
        }
        N.truncate(n + p - d);
    }
    N
}

/// Evaluates `N(i, p, t)` without bounds checks or nudging.  The caller
/// guarantees `i + p + 1 < U.len()` and has already nudged `t`.
pub(crate) fn eval_unchecked(i: usize, p: usize, t: f64, U: &KnotVector) -> f64 {
    debug_assert!(i + p + 1 < U.len());
    // NaN and ±inf lie in no knot span, and `inf * 0.0` would poison the table
    if !t.is_finite() {
        return 0.0;
    }

    // N[j] holds N(i + j, d, t) for the current degree d
    let mut N: VecF = smallvec![0.0; p + 1];
    for (j, n) in N.iter_mut().enumerate() {
        *n = step(i + j, t, U);
    }
    for d in 1..=p {
        for j in 0..=(p - d) {
            N[j] = blend(i + j, d, t, U, N[j], N[j + 1]);
        }
    }
    N[0]
}

/// Degree-0 basis function: the indicator of `[t_k, t_{k+1})`
fn step(k: usize, t: f64, U: &KnotVector) -> f64 {
    if t < U[k + 1] && t >= U[k] {
        1.0
    } else {
        0.0
    }
}

/// One cell of the Cox–de Boor table: `N(k, d)` built from `N(k, d - 1)`
/// (`left`) and `N(k + 1, d - 1)` (`right`).
fn blend(k: usize, d: usize, t: f64, U: &KnotVector, left: f64, right: f64) -> f64 {
    let num1 = (t - U[k]) * left;
    let denom1 = U[k + d] - U[k];
    let term1 = ratio(num1, denom1);

    let num2 = (U[k + d + 1] - t) * right;
    let denom2 = U[k + d + 1] - U[k + 1];
    let term2 = ratio(num2, denom2);

    term1 + term2
}

/// Division with 0/0 defined as 0.
///
/// The numerator here is already scaled by the lower-order basis value, so
/// the override only fires when the span is degenerate *and* the scaled
/// numerator is negligible.  A zero-length span always carries a zero
/// lower-order value on a valid knot vector, so a bare `x / 0` can't occur.
fn ratio(num: f64, denom: f64) -> f64 {
    if num.abs() < KNOT_EPS && denom.abs() < KNOT_EPS {
        0.0
    } else {
        debug_assert!(denom != 0.0, "non-zero numerator over zero-length span");
        num / denom
    }
}
