use std::ops::Index;

use crate::BasisError;

/// Tolerance used for the boundary nudge and the 0/0 override in the
/// Cox–de Boor recursion.
pub const KNOT_EPS: f64 = 1e-14;

/// An immutable, non-decreasing sequence of knots `t_0 <= ... <= t_m`
#[derive(Debug, Clone, PartialEq)]
pub struct KnotVector(Vec<f64>);

impl KnotVector {
    /// Builds a knot vector, checking that every knot is finite and that
    /// the sequence never decreases.  Repeated knots are allowed.
    pub fn new<V: Into<Vec<f64>>>(knots: V) -> Result<Self, BasisError> {
        let knots = knots.into();
        if knots.len() < 2 {
            return Err(BasisError::InsufficientBasis {
                knots: knots.len(),
                order: 0,
            });
        }
        for (index, &value) in knots.iter().enumerate() {
            if !value.is_finite() {
                return Err(BasisError::NonFiniteKnot { index, value });
            }
        }
        for (index, w) in knots.windows(2).enumerate() {
            if w[1] < w[0] {
                return Err(BasisError::DecreasingKnots {
                    index: index + 1,
                    previous: w[0],
                    value: w[1],
                });
            }
        }
        Ok(Self(knots))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn min(&self) -> f64 {
        self.0[0]
    }

    pub fn max(&self) -> f64 {
        self.0[self.0.len() - 1]
    }

    /// Returns the parametric domain `[t_0, t_m]`
    pub fn domain(&self) -> (f64, f64) {
        (self.min(), self.max())
    }

    /// Number of basis functions of the given order, `n = len - order - 1`
    pub fn num_basis(&self, order: usize) -> Result<usize, BasisError> {
        self.len()
            .checked_sub(order + 1)
            .filter(|&n| n > 0)
            .ok_or(BasisError::InsufficientBasis {
                knots: self.len(),
                order,
            })
    }

    /// Pulls a parameter that sits on either end of the domain slightly
    /// inwards.  The degree-0 basis uses half-open intervals, so without
    /// this every basis function would vanish at `t_m`.
    ///
    /// Interior repeated knots are not protected.
    pub fn nudge(&self, t: f64) -> f64 {
        let (min, max) = self.domain();
        if (t - min).abs() < KNOT_EPS {
            log::trace!("nudging {t} up from domain minimum {min}");
            min + KNOT_EPS
        } else if (t - max).abs() < KNOT_EPS {
            log::trace!("nudging {t} down from domain maximum {max}");
            max - KNOT_EPS
        } else {
            t
        }
    }

    /// Number of knots with exactly the same value as knot `k`, or `None`
    /// if there is no knot `k`
    pub fn multiplicity(&self, k: usize) -> Option<usize> {
        let u = *self.0.get(k)?;
        Some(self.0.iter().filter(|&&v| v == u).count())
    }

    /// Finds the knot span `k` with `t_k <= t < t_{k+1}`, after applying the
    /// boundary nudge.  Returns `None` outside the domain.
    pub fn span(&self, t: f64) -> Option<usize> {
        let t = self.nudge(t);
        let count = self.0.partition_point(|&u| u <= t);
        if count == 0 || count == self.0.len() {
            None
        } else {
            Some(count - 1)
        }
    }
}

impl Index<usize> for KnotVector {
    type Output = f64;
    fn index(&self, k: usize) -> &f64 {
        &self.0[k]
    }
}

impl TryFrom<&[f64]> for KnotVector {
    type Error = BasisError;
    fn try_from(knots: &[f64]) -> Result<Self, BasisError> {
        Self::new(knots.to_vec())
    }
}
