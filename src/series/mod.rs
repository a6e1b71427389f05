//! Frequency-domain output containers.
//!
//! Two shapes come out of the pipeline:
//!
//! - a `FrequencySeries`: regularly spaced complex samples with `delta_f` and
//!   an absolute `epoch`, so the series is fully time-aligned
//! - bare `Samples`: values on a caller-supplied grid, where only the caller
//!   knows the spacing and no time metadata is attached

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// A regularly spaced complex frequency series with time-alignment metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencySeries {
    samples: Vec<Complex64>,
    /// Frequency spacing, Hz.
    delta_f: f64,
    /// Absolute time of the series' zero-frequency reference, seconds.
    epoch: f64,
}

impl FrequencySeries {
    pub fn new(samples: Vec<Complex64>, delta_f: f64, epoch: f64) -> Self {
        Self {
            samples,
            delta_f,
            epoch,
        }
    }

    pub fn samples(&self) -> &[Complex64] {
        &self.samples
    }

    pub fn delta_f(&self) -> f64 {
        self.delta_f
    }

    pub fn epoch(&self) -> f64 {
        self.epoch
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Per-channel pipeline output: time-aligned series or bare samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChannelData {
    /// Built from the regular grid; carries `delta_f` and `epoch`.
    Series(FrequencySeries),
    /// Built from explicit sample points; indexed array only.
    Samples(Vec<Complex64>),
}

impl ChannelData {
    pub fn samples(&self) -> &[Complex64] {
        match self {
            ChannelData::Series(s) => s.samples(),
            ChannelData::Samples(v) => v,
        }
    }

    pub fn len(&self) -> usize {
        self.samples().len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples().is_empty()
    }

    /// Frequency spacing, if this output carries time metadata.
    pub fn delta_f(&self) -> Option<f64> {
        match self {
            ChannelData::Series(s) => Some(s.delta_f()),
            ChannelData::Samples(_) => None,
        }
    }

    /// Series epoch, if this output carries time metadata.
    pub fn epoch(&self) -> Option<f64> {
        match self {
            ChannelData::Series(s) => Some(s.epoch()),
            ChannelData::Samples(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_exposes_metadata_and_samples() {
        let s = FrequencySeries::new(vec![Complex64::new(1.0, -1.0); 4], 0.25, 4000.0);
        assert_eq!(s.len(), 4);
        assert_eq!(s.delta_f(), 0.25);
        assert_eq!(s.epoch(), 4000.0);
    }

    #[test]
    fn bare_samples_carry_no_time_metadata() {
        let d = ChannelData::Samples(vec![Complex64::new(0.0, 1.0); 3]);
        assert_eq!(d.len(), 3);
        assert!(d.delta_f().is_none());
        assert!(d.epoch().is_none());

        let d = ChannelData::Series(FrequencySeries::new(vec![], 0.5, 0.0));
        assert!(d.is_empty());
        assert_eq!(d.delta_f(), Some(0.5));
    }
}
