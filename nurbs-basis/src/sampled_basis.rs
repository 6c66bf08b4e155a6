//! Evenly spaced samples of a 1D basis set, which is all a plotting front
//! end needs from us.
use crate::{abstract_basis::AbstractCurveBasis, parallel::parallel_map, BasisError};

/// Number of samples per basis function used when plotting
pub const DEFAULT_SAMPLE_COUNT: usize = 50;

/// One basis function sampled at evenly spaced parameters
#[derive(Debug, Clone, PartialEq)]
pub struct SampledBasis {
    /// Position of the function within its basis set
    pub index: usize,
    pub params: Vec<f64>,
    pub values: Vec<f64>,
}

impl SampledBasis {
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.params.iter().copied().zip(self.values.iter().copied())
    }
}

/// `count` evenly spaced values from `min` to `max` inclusive.  The last
/// value is exactly `max`.
pub fn linspace(min: f64, max: f64, count: usize) -> Vec<f64> {
    match count {
        0 => vec![],
        1 => vec![min],
        _ => {
            let step = (max - min) / (count - 1) as f64;
            let mut out: Vec<f64> = (0..count).map(|k| min + k as f64 * step).collect();
            out[count - 1] = max;
            out
        }
    }
}

/// Samples every function in `basis` at `count` evenly spaced points over
/// its domain.  Functions are sampled in parallel with the `rayon` feature.
pub fn sample_curve_basis<B>(basis: &[B], count: usize) -> Result<Vec<SampledBasis>, BasisError>
where
    B: AbstractCurveBasis + Sync,
{
    let indexed: Vec<(usize, &B)> = basis.iter().enumerate().collect();
    parallel_map(&indexed, |&(index, b)| -> Result<SampledBasis, BasisError> {
        let (min, max) = b.domain();
        let params = linspace(min, max, count);
        let values = params
            .iter()
            .map(|&t| b.value(t))
            .collect::<Result<Vec<f64>, BasisError>>()?;
        Ok(SampledBasis {
            index,
            params,
            values,
        })
    })
    .into_iter()
    .collect()
}
