use std::sync::Arc;

use nalgebra_glm::DVec2;

use crate::{
    abstract_basis::AbstractSurfaceBasis,
    bspline_basis::{bspline_basis_from_knots, BsplineBasis1d},
    BasisError, KnotVector,
};

/// Row-major grid: `grid[i][j]` is row `i` (xi index), column `j` (eta index)
pub type Grid<T> = Vec<Vec<T>>;

/// Tensor-product B-spline basis function
/// `N_ij(xi, eta) = N(i, P, xi) * N(j, Q, eta)`
#[derive(Debug, Clone)]
pub struct BsplineBasis2d {
    xi: BsplineBasis1d,
    eta: BsplineBasis1d,
}

impl BsplineBasis2d {
    /// Returns `(i, j)`
    pub fn index(&self) -> (usize, usize) {
        (self.xi.index(), self.eta.index())
    }

    pub fn xi(&self) -> &BsplineBasis1d {
        &self.xi
    }

    pub fn eta(&self) -> &BsplineBasis1d {
        &self.eta
    }

    pub fn eval(&self, xi: f64, eta: f64) -> f64 {
        self.xi.eval(xi) * self.eta.eval(eta)
    }
}

impl AbstractSurfaceBasis for BsplineBasis2d {
    fn value(&self, uv: DVec2) -> Result<f64, BasisError> {
        Ok(self.eval(uv.x, uv.y))
    }

    fn domain(&self) -> [(f64, f64); 2] {
        [self.xi.knots().domain(), self.eta.knots().domain()]
    }
}

/// Outer product of two 1D bases.  The result has one row per xi function
/// and one column per eta function, so `grid[i][j]` has index `(i, j)`.
pub fn tensor_product(
    xi_basis: &[BsplineBasis1d],
    eta_basis: &[BsplineBasis1d],
) -> Grid<BsplineBasis2d> {
    xi_basis
        .iter()
        .map(|xi| {
            eta_basis
                .iter()
                .map(|eta| BsplineBasis2d {
                    xi: xi.clone(),
                    eta: eta.clone(),
                })
                .collect()
        })
        .collect()
}

/// Builds the `n_xi × n_eta` grid of tensor-product B-spline basis
/// functions of orders `P` (xi) and `Q` (eta).
pub fn bspline_basis_2d(
    P: usize,
    Q: usize,
    xi_knots: &[f64],
    eta_knots: &[f64],
) -> Result<Grid<BsplineBasis2d>, BasisError> {
    let U = Arc::new(KnotVector::try_from(xi_knots)?);
    let V = Arc::new(KnotVector::try_from(eta_knots)?);
    let xi_basis = bspline_basis_from_knots(P, U)?;
    let eta_basis = bspline_basis_from_knots(Q, V)?;
    Ok(tensor_product(&xi_basis, &eta_basis))
}
