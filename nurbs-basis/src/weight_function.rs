//! The weight function `W = Σ N * w`, i.e. the shared denominator of every
//! rational basis function built on the same control points.
use std::sync::Arc;

use nalgebra_glm::DVec2;

use crate::{
    abstract_basis::{AbstractCurveBasis, AbstractSurfaceBasis},
    basis,
    error::Direction,
    BasisError, Grid, KnotVector,
};

/// Evaluates `W(xi) = Σ_i basis[i](xi) * weights[i]`
pub fn weight_function_1d<B: AbstractCurveBasis>(
    basis: &[B],
    weights: &[f64],
    xi: f64,
) -> Result<f64, BasisError> {
    if basis.len() != weights.len() {
        return Err(BasisError::ShapeMismatch {
            direction: Direction::Xi,
            expected: basis.len(),
            found: weights.len(),
        });
    }
    let mut value = 0.0;
    for (b, w) in basis.iter().zip(weights) {
        value += b.value(xi)? * w;
    }
    Ok(value)
}

/// Evaluates `W(xi, eta) = Σ_i Σ_j basis[i][j](xi, eta) * weights[i][j]`
pub fn weight_function_2d<B: AbstractSurfaceBasis>(
    basis: &[Vec<B>],
    weights: &[Vec<f64>],
    uv: DVec2,
) -> Result<f64, BasisError> {
    check_grid_shape(weights, basis.len(), basis.first().map_or(0, Vec::len))?;
    let mut value = 0.0;
    for (row, wrow) in basis.iter().zip(weights) {
        if row.len() != wrow.len() {
            return Err(BasisError::ShapeMismatch {
                direction: Direction::Eta,
                expected: row.len(),
                found: wrow.len(),
            });
        }
        for (b, w) in row.iter().zip(wrow) {
            value += b.value(uv)? * w;
        }
    }
    Ok(value)
}

/// Checks that `grid` is a non-empty `rows × cols` rectangle
pub(crate) fn check_grid_shape<T>(
    grid: &[Vec<T>],
    rows: usize,
    cols: usize,
) -> Result<(), BasisError> {
    if grid.is_empty() || grid[0].is_empty() {
        return Err(BasisError::EmptyGrid);
    }
    let width = grid[0].len();
    for (row, r) in grid.iter().enumerate() {
        if r.len() != width {
            return Err(BasisError::RaggedGrid {
                row,
                expected: width,
                found: r.len(),
            });
        }
    }
    if grid.len() != rows {
        return Err(BasisError::ShapeMismatch {
            direction: Direction::Xi,
            expected: rows,
            found: grid.len(),
        });
    }
    if width != cols {
        return Err(BasisError::ShapeMismatch {
            direction: Direction::Eta,
            expected: cols,
            found: width,
        });
    }
    Ok(())
}

pub(crate) fn check_weight(row: usize, col: usize, weight: f64) -> Result<f64, BasisError> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(weight)
    } else {
        Err(BasisError::InvalidWeight { row, col, weight })
    }
}

/// Weight function over a 1D list of control points, evaluating the whole
/// B-spline basis from a single Cox–de Boor table per call
#[derive(Debug, Clone)]
pub struct WeightFunction1d {
    p: usize,
    n: usize,
    U: Arc<KnotVector>,
    weights: Vec<f64>,
}

impl WeightFunction1d {
    pub fn new(p: usize, U: Arc<KnotVector>, weights: Vec<f64>) -> Result<Self, BasisError> {
        let n = U.num_basis(p)?;
        if weights.len() != n {
            return Err(BasisError::ShapeMismatch {
                direction: Direction::Xi,
                expected: n,
                found: weights.len(),
            });
        }
        for (col, &w) in weights.iter().enumerate() {
            check_weight(0, col, w)?;
        }
        Ok(Self { p, n, U, weights })
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn eval(&self, xi: f64) -> f64 {
        let N = basis::all_unchecked(self.p, self.n, self.U.nudge(xi), &self.U);
        let mut value = 0.0;
        for (Ni, w) in N.iter().zip(&self.weights) {
            value += Ni * w;
        }
        value
    }
}

/// Weight function over a 2D control point grid
#[derive(Debug, Clone)]
pub struct WeightFunction2d {
    p: usize,
    q: usize,
    rows: usize,
    cols: usize,
    U: Arc<KnotVector>,
    V: Arc<KnotVector>,
    weights: Grid<f64>,
}

impl WeightFunction2d {
    pub fn new(
        p: usize,
        q: usize,
        U: Arc<KnotVector>,
        V: Arc<KnotVector>,
        weights: Grid<f64>,
    ) -> Result<Self, BasisError> {
        let rows = U.num_basis(p)?;
        let cols = V.num_basis(q)?;
        check_grid_shape(&weights, rows, cols)?;
        for (i, row) in weights.iter().enumerate() {
            for (j, &w) in row.iter().enumerate() {
                check_weight(i, j, w)?;
            }
        }
        Ok(Self {
            p,
            q,
            rows,
            cols,
            U,
            V,
            weights,
        })
    }

    pub fn weights(&self) -> &[Vec<f64>] {
        &self.weights
    }

    pub fn eval(&self, xi: f64, eta: f64) -> f64 {
        let Nu = basis::all_unchecked(self.p, self.rows, self.U.nudge(xi), &self.U);
        let Nv = basis::all_unchecked(self.q, self.cols, self.V.nudge(eta), &self.V);
        let mut value = 0.0;
        for i in 0..self.rows {
            for j in 0..self.cols {
                value += (Nu[i] * Nv[j]) * self.weights[i][j];
            }
        }
        value
    }
}
