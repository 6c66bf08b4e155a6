use std::sync::Arc;

use nalgebra_glm::DVec2;

use crate::{
    abstract_basis::{AbstractCurveBasis, AbstractSurfaceBasis},
    bspline_basis::{bspline_basis_from_knots, BsplineBasis1d},
    control_point::Weighted,
    tensor_basis::{tensor_product, BsplineBasis2d},
    weight_function::{check_grid_shape, WeightFunction1d, WeightFunction2d},
    BasisError, Grid, KnotVector,
};

/// Rational basis function `R_i(t) = w_i N_i(t) / W(t)`
#[derive(Debug, Clone)]
pub struct NurbsBasis1d {
    basis: BsplineBasis1d,
    weight: f64,
    W: Arc<WeightFunction1d>,
}

impl NurbsBasis1d {
    pub fn index(&self) -> usize {
        self.basis.index()
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn bspline(&self) -> &BsplineBasis1d {
        &self.basis
    }

    /// The denominator shared with every other function in this basis set
    pub fn weight_function(&self) -> &WeightFunction1d {
        &self.W
    }

    pub fn eval(&self, t: f64) -> Result<f64, BasisError> {
        divide(self.weight * self.basis.eval(t), self.W.eval(t))
    }
}

impl AbstractCurveBasis for NurbsBasis1d {
    fn value(&self, t: f64) -> Result<f64, BasisError> {
        self.eval(t)
    }

    fn domain(&self) -> (f64, f64) {
        self.basis.knots().domain()
    }
}

/// Rational tensor-product basis function
/// `R_ij(xi, eta) = w_ij N_i(xi) N_j(eta) / W(xi, eta)`
#[derive(Debug, Clone)]
pub struct NurbsBasis2d {
    basis: BsplineBasis2d,
    weight: f64,
    W: Arc<WeightFunction2d>,
}

impl NurbsBasis2d {
    /// Returns `(i, j)`, matching the control point this function belongs to
    pub fn index(&self) -> (usize, usize) {
        self.basis.index()
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn bspline(&self) -> &BsplineBasis2d {
        &self.basis
    }

    pub fn weight_function(&self) -> &WeightFunction2d {
        &self.W
    }

    pub fn eval(&self, xi: f64, eta: f64) -> Result<f64, BasisError> {
        divide(self.weight * self.basis.eval(xi, eta), self.W.eval(xi, eta))
    }
}

impl AbstractSurfaceBasis for NurbsBasis2d {
    fn value(&self, uv: DVec2) -> Result<f64, BasisError> {
        self.eval(uv.x, uv.y)
    }

    fn domain(&self) -> [(f64, f64); 2] {
        self.basis.domain()
    }
}

/// Weights are non-negative, so `W` is exactly zero when it vanishes (all
/// weights zero, or outside every support).  Tiny but non-zero values near an
/// unclamped endpoint still give a well-defined ratio.
fn divide(numerator: f64, denominator: f64) -> Result<f64, BasisError> {
    if denominator == 0.0 || !denominator.is_finite() {
        log::warn!("weight function vanished ({denominator}); rational basis is undefined");
        Err(BasisError::DegenerateWeight { denominator })
    } else {
        Ok(numerator / denominator)
    }
}

/// Builds the 1D rational basis: one function per weight, all sharing the
/// same weight function.
pub fn nurbs_basis_1d(
    P: usize,
    knots: &[f64],
    weights: &[f64],
) -> Result<Vec<NurbsBasis1d>, BasisError> {
    let U = Arc::new(KnotVector::try_from(knots)?);
    let W = Arc::new(WeightFunction1d::new(P, U.clone(), weights.to_vec())?);
    let basis = bspline_basis_from_knots(P, U)?;
    Ok(basis
        .into_iter()
        .zip(weights)
        .map(|(basis, &weight)| NurbsBasis1d {
            basis,
            weight,
            W: W.clone(),
        })
        .collect())
}

/// Builds the 2D rational basis for a grid of control points.
///
/// Rows of `control_points` run along xi (order `P`, `xi_knots`) and columns
/// along eta (order `Q`, `eta_knots`).  The returned grid has exactly the
/// same shape, and `R[i][j]` belongs to `control_points[i][j]`.
pub fn nurbs_basis_2d<C: Weighted>(
    control_points: &[Vec<C>],
    P: usize,
    Q: usize,
    xi_knots: &[f64],
    eta_knots: &[f64],
) -> Result<Grid<NurbsBasis2d>, BasisError> {
    let U = Arc::new(KnotVector::try_from(xi_knots)?);
    let V = Arc::new(KnotVector::try_from(eta_knots)?);
    check_grid_shape(control_points, U.num_basis(P)?, V.num_basis(Q)?)?;

    let weights: Grid<f64> = control_points
        .iter()
        .map(|row| row.iter().map(Weighted::weight).collect())
        .collect();
    let W = Arc::new(WeightFunction2d::new(
        P,
        Q,
        U.clone(),
        V.clone(),
        weights.clone(),
    )?);

    let xi_basis = bspline_basis_from_knots(P, U)?;
    let eta_basis = bspline_basis_from_knots(Q, V)?;
    Ok(tensor_product(&xi_basis, &eta_basis)
        .into_iter()
        .zip(weights)
        .map(|(row, wrow)| {
            row.into_iter()
                .zip(wrow)
                .map(|(basis, weight)| NurbsBasis2d {
                    basis,
                    weight,
                    W: W.clone(),
                })
                .collect()
        })
        .collect())
}
