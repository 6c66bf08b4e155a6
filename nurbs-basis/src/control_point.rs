use nalgebra_glm::DVec3;

/// Anything that can sit in a control point grid.  Only the weight matters
/// when building basis functions; positions are ignored.
pub trait Weighted {
    fn weight(&self) -> f64;
}

impl Weighted for f64 {
    fn weight(&self) -> f64 {
        *self
    }
}

/// `[x, y, weight]`
impl Weighted for [f64; 3] {
    fn weight(&self) -> f64 {
        self[2]
    }
}

/// `(x, y, weight)`, stored in the `z` slot
impl Weighted for DVec3 {
    fn weight(&self) -> f64 {
        self.z
    }
}

impl<T: Weighted> Weighted for &T {
    fn weight(&self) -> f64 {
        (*self).weight()
    }
}
