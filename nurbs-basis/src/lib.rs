//! Non-rational and rational (NURBS) B-spline basis functions over one- and
//! two-dimensional parametric domains, for isogeometric mesh generation.
#![allow(clippy::needless_range_loop)]
// This crate follows the textbook notation (N, R, W, P, Q, U, V), so we
// keep its single-character names.
#![allow(non_snake_case)]

mod abstract_basis;
mod basis;
mod bspline_basis;
mod control_point;
mod error;
mod knot_vector;
mod nurbs_basis;
mod parallel;
mod sampled_basis;
mod tensor_basis;
mod weight_function;

use smallvec::SmallVec;
pub type VecF = SmallVec<[f64; 8]>;

pub use crate::abstract_basis::{AbstractCurveBasis, AbstractSurfaceBasis};
pub use crate::basis::{all_basis_functions, basis_function};
pub use crate::bspline_basis::{bspline_basis_1d, BsplineBasis1d};
pub use crate::control_point::Weighted;
pub use crate::error::{BasisError, Direction};
pub use crate::knot_vector::{KnotVector, KNOT_EPS};
pub use crate::nurbs_basis::{nurbs_basis_1d, nurbs_basis_2d, NurbsBasis1d, NurbsBasis2d};
pub use crate::sampled_basis::{linspace, sample_curve_basis, SampledBasis, DEFAULT_SAMPLE_COUNT};
pub use crate::tensor_basis::{bspline_basis_2d, tensor_product, BsplineBasis2d, Grid};
pub use crate::weight_function::{
    weight_function_1d, weight_function_2d, WeightFunction1d, WeightFunction2d,
};
