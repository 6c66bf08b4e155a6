use thiserror::Error;

/// Errors raised while building or evaluating basis functions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BasisError {
    /// `knots - order - 1 <= 0`, so the knot vector supports no basis
    /// function of this order.
    #[error("insufficient number of basis functions: {knots} knots cannot support order {order}")]
    InsufficientBasis { knots: usize, order: usize },

    #[error("knot {index} is not finite ({value})")]
    NonFiniteKnot { index: usize, value: f64 },

    #[error("knot vector is decreasing at index {index} ({previous} > {value})")]
    DecreasingKnots {
        index: usize,
        previous: f64,
        value: f64,
    },

    #[error("basis index {index} is out of range (only {count} basis functions)")]
    BasisIndexOutOfRange { index: usize, count: usize },

    /// Weights must be finite and non-negative.  For 1D weight lists,
    /// `row` is always zero.
    #[error("invalid weight {weight} at ({row}, {col})")]
    InvalidWeight { row: usize, col: usize, weight: f64 },

    #[error("control point grid is empty")]
    EmptyGrid,

    #[error("control point grid is ragged: row {row} has {found} columns, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The control grid (or weight list) doesn't match the number of basis
    /// functions implied by the order and knot vector in one direction.
    #[error("{direction} direction expects {expected} control points, found {found}")]
    ShapeMismatch {
        direction: Direction,
        expected: usize,
        found: usize,
    },

    /// The weight function vanished at the query point, so the rational
    /// basis is undefined there.  This happens when every weight is zero or
    /// the point lies outside every basis function's support.
    #[error("weight function is degenerate ({denominator}) at the query point")]
    DegenerateWeight { denominator: f64 },
}

/// Parametric direction, used to label shape errors
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Xi,
    Eta,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Xi => write!(f, "xi"),
            Direction::Eta => write!(f, "eta"),
        }
    }
}
