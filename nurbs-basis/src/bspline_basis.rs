use std::sync::Arc;

use crate::{abstract_basis::AbstractCurveBasis, basis, BasisError, KnotVector};

/// The `i`-th non-rational B-spline basis function of order `p`.
///
/// Each function owns its index and order and shares an immutable copy of
/// the knot vector with the rest of its basis set.
#[derive(Debug, Clone)]
pub struct BsplineBasis1d {
    i: usize,
    p: usize,
    U: Arc<KnotVector>,
}

impl BsplineBasis1d {
    pub fn index(&self) -> usize {
        self.i
    }

    pub fn order(&self) -> usize {
        self.p
    }

    pub fn knots(&self) -> &KnotVector {
        &self.U
    }

    /// Evaluates `N(i, p, t)`
    pub fn eval(&self, t: f64) -> f64 {
        basis::eval_unchecked(self.i, self.p, self.U.nudge(t), &self.U)
    }
}

impl AbstractCurveBasis for BsplineBasis1d {
    fn value(&self, t: f64) -> Result<f64, BasisError> {
        Ok(self.eval(t))
    }

    fn domain(&self) -> (f64, f64) {
        self.U.domain()
    }
}

/// Builds the `n = len(knots) - P - 1` B-spline basis functions of order
/// `P`, indexed `0..n`.
///
/// The knots are copied, so later changes to the caller's buffer don't
/// affect the returned functions.
pub fn bspline_basis_1d(P: usize, knots: &[f64]) -> Result<Vec<BsplineBasis1d>, BasisError> {
    let U = Arc::new(KnotVector::try_from(knots)?);
    bspline_basis_from_knots(P, U)
}

pub(crate) fn bspline_basis_from_knots(
    P: usize,
    U: Arc<KnotVector>,
) -> Result<Vec<BsplineBasis1d>, BasisError> {
    let n = U.num_basis(P)?;
    log::debug!(
        "building {n} B-spline basis functions of order {P} on {:?}",
        U.domain()
    );
    Ok((0..n)
        .map(|i| BsplineBasis1d {
            i,
            p: P,
            U: U.clone(),
        })
        .collect())
}
