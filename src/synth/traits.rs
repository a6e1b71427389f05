//! Collaborator contracts.
//!
//! The physics lives outside this crate: the amplitude/phase model, the full
//! TDI synthesizer, and the detector-to-barycenter frame transform are all
//! consumed through the traits below. The pipeline takes implementations as
//! constructor arguments, so the orchestration logic can be exercised with
//! lightweight stand-ins that never run real waveform code.

use num_complex::Complex64;

use crate::error::{WaveformError, WaveformResult};
use crate::synth::cache::GeneratorKey;

/// Reference frequency convention fixed by this pipeline.
///
/// Zero is NOT the standard LAL convention; collaborators must be configured
/// accordingly.
pub const REFERENCE_FREQUENCY: f64 = 0.0;

/// A spherical-harmonic mode `(l, m)`.
pub type Mode = (u8, u8);

/// Request for a coarse amplitude/phase evaluation used only to obtain a
/// time-frequency track.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackRequest {
    pub mass1: f64,
    pub mass2: f64,
    pub spin1z: f64,
    pub spin2z: f64,
    /// Luminosity distance, meters.
    pub distance: f64,
    pub coa_phase: f64,
    pub f_ref: f64,
    pub t_ref: f64,
    /// Lower dimensionless-frequency floor; effectively unconstrained here.
    pub mf_min: f64,
    /// Whether to restrict the model to its aligned-spin PhenomD branch.
    pub run_phenomd: bool,
    pub modes: Vec<Mode>,
    /// Number of track samples to generate.
    pub length: usize,
}

/// A monotone time-of-frequency track for one mode.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeFrequencyTrack {
    /// Frequencies, Hz.
    pub freqs: Vec<f64>,
    /// Elapsed time at each frequency, seconds.
    pub tf: Vec<f64>,
}

/// Coarse amplitude/phase waveform model (track provider).
pub trait AmpPhaseModel {
    fn time_frequency_track(&self, request: &TrackRequest) -> WaveformResult<TimeFrequencyTrack>;
}

/// One full synthesis invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest<'a> {
    pub mass1: f64,
    pub mass2: f64,
    pub spin1z: f64,
    pub spin2z: f64,
    /// Luminosity distance, meters.
    pub distance: f64,
    pub coa_phase: f64,
    pub f_ref: f64,
    pub inclination: f64,
    /// Barycentric-frame ecliptic longitude.
    pub lam: f64,
    /// Barycentric-frame ecliptic latitude.
    pub beta: f64,
    /// Barycentric-frame polarization.
    pub psi: f64,
    /// Barycentric-frame reference time, seconds.
    pub t_ref: f64,
    /// Evaluation frequencies, Hz.
    pub freqs: &'a [f64],
    pub modes: &'a [Mode],
    pub direct: bool,
    pub fill: bool,
    pub squeeze: bool,
    /// Internal generation resolution, not an output parameter.
    pub length: usize,
    /// Observation window before merger, seconds.
    pub t_obs_start: f64,
    /// Offset past merger, seconds; zero keeps the ringdown.
    pub t_obs_end: f64,
    pub shift_t_limits: bool,
}

/// Channel-major synthesizer output: one complex row per TDI channel
/// (A = 0, E = 1, T = 2), each indexed by frequency.
#[derive(Debug, Clone, PartialEq)]
pub struct TdiArray {
    rows: Vec<Vec<Complex64>>,
}

impl TdiArray {
    pub fn new(rows: Vec<Vec<Complex64>>) -> Self {
        Self { rows }
    }

    pub fn num_channels(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, index: usize) -> WaveformResult<&[Complex64]> {
        self.rows.get(index).map(Vec::as_slice).ok_or_else(|| {
            WaveformError::Synthesis(format!(
                "synthesizer returned {} channel rows, need index {index}",
                self.rows.len()
            ))
        })
    }
}

/// Full multi-channel TDI waveform synthesizer.
pub trait TdiSynthesizer {
    fn synthesize(&self, request: &SynthesisRequest<'_>) -> WaveformResult<TdiArray>;
}

/// Builds expensive synthesizer instances for a given cache key.
///
/// Construction cost is the whole reason the generator cache exists; the
/// factory is only invoked on a cache miss.
pub trait SynthesizerFactory {
    type Generator: TdiSynthesizer;

    fn build(&self, key: &GeneratorKey) -> Self::Generator;
}

/// Detector-frame to barycentric-frame conversion of time and orientation.
pub trait FrameTransform {
    fn lisa_to_ssb(&self, t_ref: f64, lam: f64, beta: f64, psi: f64) -> (f64, f64, f64, f64);
}
