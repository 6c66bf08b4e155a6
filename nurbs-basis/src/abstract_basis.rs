use nalgebra_glm::DVec2;

use crate::BasisError;

/// A basis function of one parametric coordinate
pub trait AbstractCurveBasis {
    /// Evaluates the function at `t`.  Non-rational bases never fail;
    /// rational bases fail where the weight function vanishes.
    fn value(&self, t: f64) -> Result<f64, BasisError>;

    /// Parametric domain `[t_0, t_m]` of the underlying knot vector
    fn domain(&self) -> (f64, f64);
}

/// A basis function of two parametric coordinates `(xi, eta)`
pub trait AbstractSurfaceBasis {
    fn value(&self, uv: DVec2) -> Result<f64, BasisError>;

    /// Parametric domains in the xi and eta directions
    fn domain(&self) -> [(f64, f64); 2];

    fn value_at(&self, xi: f64, eta: f64) -> Result<f64, BasisError> {
        self.value(DVec2::new(xi, eta))
    }
}
