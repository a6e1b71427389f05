//! Frequency sampling grid construction.
//!
//! Two branches, chosen by whether the caller supplied explicit sample
//! points:
//!
//! - explicit points are returned unmodified; the caller takes full
//!   responsibility for range and spacing
//! - otherwise a regular grid `[0, nyquist_freq)` with step `1/t_obs_start`

use crate::error::{WaveformError, WaveformResult};

/// How a grid was built; decides whether outputs carry time metadata.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridKind {
    /// Regularly spaced from zero; `delta_f = 1/t_obs_start`.
    Regular { delta_f: f64 },
    /// Caller-supplied ordered frequencies.
    Explicit,
}

/// The set of frequencies to evaluate the waveform on.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyGrid {
    freqs: Vec<f64>,
    kind: GridKind,
}

impl FrequencyGrid {
    pub fn freqs(&self) -> &[f64] {
        &self.freqs
    }

    pub fn kind(&self) -> GridKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.freqs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.freqs.is_empty()
    }
}

/// Build the evaluation grid.
pub fn build_grid(
    sample_points: Option<&[f64]>,
    nyquist_freq: f64,
    t_obs_start: f64,
) -> WaveformResult<FrequencyGrid> {
    if let Some(points) = sample_points {
        if points.is_empty() {
            return Err(WaveformError::invalid(
                "sample_points",
                "explicit sample points must be non-empty",
            ));
        }
        return Ok(FrequencyGrid {
            freqs: points.to_vec(),
            kind: GridKind::Explicit,
        });
    }

    if !(nyquist_freq.is_finite() && nyquist_freq > 0.0) {
        return Err(WaveformError::invalid(
            "nyquist_freq",
            format!("must be finite and > 0, got {nyquist_freq}"),
        ));
    }
    if !(t_obs_start.is_finite() && t_obs_start > 0.0) {
        return Err(WaveformError::invalid(
            "t_obs_start",
            format!("must be finite and > 0, got {t_obs_start}"),
        ));
    }

    let delta_f = 1.0 / t_obs_start;
    let n = (nyquist_freq * t_obs_start).floor() as usize;
    let freqs = (0..n).map(|i| i as f64 * delta_f).collect();

    Ok(FrequencyGrid {
        freqs,
        kind: GridKind::Regular { delta_f },
    })
}
