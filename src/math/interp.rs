//! 1-D linear interpolation over a monotone sample set.
//!
//! The bound solver inverts a time-frequency track by treating time as the
//! interpolation domain and frequency as the dependent value. Two properties
//! matter there:
//!
//! - the domain must be strictly monotone, so the inverse is well defined
//! - lookups outside the sampled domain must fail, never extrapolate

use crate::error::{WaveformError, WaveformResult};

/// A sampled, invertible 1-D function with linear interpolation between knots.
#[derive(Debug, Clone)]
pub struct Interp1d {
    /// Domain knots, strictly increasing after normalization.
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Interp1d {
    /// Build an interpolant from domain knots `x` and values `y`.
    ///
    /// `x` must be strictly monotone (either direction; decreasing input is
    /// reversed internally) and both slices must be finite and of equal
    /// length >= 2.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> WaveformResult<Self> {
        if x.len() != y.len() {
            return Err(WaveformError::invalid(
                "interp_domain",
                format!("domain/value length mismatch: {} vs {}", x.len(), y.len()),
            ));
        }
        if x.len() < 2 {
            return Err(WaveformError::invalid(
                "interp_domain",
                format!("need at least 2 knots, got {}", x.len()),
            ));
        }
        if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
            return Err(WaveformError::invalid(
                "interp_domain",
                "non-finite knot value",
            ));
        }

        let (mut x, mut y) = (x, y);
        if x[0] > x[x.len() - 1] {
            x.reverse();
            y.reverse();
        }
        if x.windows(2).any(|w| w[0] >= w[1]) {
            return Err(WaveformError::invalid(
                "interp_domain",
                "domain knots are not strictly monotone",
            ));
        }

        Ok(Self { x, y })
    }

    /// Smallest domain value covered.
    pub fn domain_min(&self) -> f64 {
        self.x[0]
    }

    /// Largest domain value covered.
    pub fn domain_max(&self) -> f64 {
        self.x[self.x.len() - 1]
    }

    /// Evaluate at `target`, failing for out-of-domain lookups.
    pub fn eval(&self, target: f64) -> WaveformResult<f64> {
        let (min, max) = (self.domain_min(), self.domain_max());
        if !target.is_finite() || target < min || target > max {
            return Err(WaveformError::InterpolationDomain { target, min, max });
        }

        // Index of the first knot strictly above target; target lies in
        // [x[hi-1], x[hi]]. The bounds check above keeps hi in 1..len.
        let hi = self
            .x
            .partition_point(|&v| v <= target)
            .clamp(1, self.x.len() - 1);
        let lo = hi - 1;

        let span = self.x[hi] - self.x[lo];
        let u = (target - self.x[lo]) / span;
        Ok(self.y[lo] + u * (self.y[hi] - self.y[lo]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn eval_recovers_knots_and_midpoints() {
        let f = Interp1d::new(vec![0.0, 1.0, 3.0], vec![10.0, 20.0, 60.0]).unwrap();
        assert_relative_eq!(f.eval(0.0).unwrap(), 10.0);
        assert_relative_eq!(f.eval(1.0).unwrap(), 20.0);
        assert_relative_eq!(f.eval(3.0).unwrap(), 60.0);
        assert_relative_eq!(f.eval(0.5).unwrap(), 15.0);
        assert_relative_eq!(f.eval(2.0).unwrap(), 40.0);
    }

    #[test]
    fn decreasing_domain_is_normalized() {
        let f = Interp1d::new(vec![3.0, 1.0, 0.0], vec![60.0, 20.0, 10.0]).unwrap();
        assert_relative_eq!(f.eval(2.0).unwrap(), 40.0);
    }

    #[test]
    fn out_of_domain_is_an_error_not_extrapolation() {
        let f = Interp1d::new(vec![0.0, 1.0], vec![0.0, 1.0]).unwrap();
        let err = f.eval(1.5).unwrap_err();
        match err {
            WaveformError::InterpolationDomain { target, min, max } => {
                assert_relative_eq!(target, 1.5);
                assert_relative_eq!(min, 0.0);
                assert_relative_eq!(max, 1.0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_degenerate_inputs() {
        assert!(Interp1d::new(vec![0.0], vec![1.0]).is_err());
        assert!(Interp1d::new(vec![0.0, 1.0], vec![1.0]).is_err());
        assert!(Interp1d::new(vec![0.0, 0.0, 1.0], vec![1.0, 2.0, 3.0]).is_err());
        assert!(Interp1d::new(vec![0.0, f64::NAN], vec![1.0, 2.0]).is_err());
    }
}
