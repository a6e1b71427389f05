//! Pipeline orchestration.
//!
//! A single synchronous pass:
//! validate channels -> bound solver -> generator cache -> frame transform ->
//! frequency grid -> synthesis -> channel extraction
//!
//! The flow is linear with exactly two binary decision points (detector vs.
//! barycentric frame, explicit vs. regular grid), no retries, and no state
//! carried across invocations beyond the generator cache.

use std::collections::BTreeMap;

use tracing::debug;

use crate::bound;
use crate::domain::{SourceParameters, SynthesisOptions, TdiChannel};
use crate::error::{WaveformError, WaveformResult};
use crate::math::{dimensionless_frequency, megaparsecs_to_meters};
use crate::series::ChannelData;
use crate::synth::{
    AmpPhaseModel, FrameTransform, GeneratorCache, GeneratorKey, REFERENCE_FREQUENCY,
    SynthesisRequest, SynthesizerFactory, TdiSynthesizer,
};

pub mod extract;
pub mod frame;
pub mod grid;

pub use extract::*;
pub use frame::*;
pub use grid::*;

/// The synthesis pipeline with its injected collaborators.
///
/// Construct one per logical session: the generator cache lives inside the
/// pipeline value, so its lifetime (and any growth) is the caller's choice,
/// and tests get isolated caches for free. The pipeline holds no other state
/// across calls.
pub struct Pipeline<M, F, T>
where
    M: AmpPhaseModel,
    F: SynthesizerFactory,
    T: FrameTransform,
{
    track_model: M,
    factory: F,
    frame_transform: T,
    cache: GeneratorCache<F::Generator>,
}

impl<M, F, T> Pipeline<M, F, T>
where
    M: AmpPhaseModel,
    F: SynthesizerFactory,
    T: FrameTransform,
{
    pub fn new(track_model: M, factory: F, frame_transform: T) -> Self {
        Self {
            track_model,
            factory,
            frame_transform,
            cache: GeneratorCache::new(),
        }
    }

    /// Generator cache state, mostly useful for inspection in tests.
    pub fn cache(&self) -> &GeneratorCache<F::Generator> {
        &self.cache
    }

    /// Synthesize the frequency-domain signal for the requested channels.
    ///
    /// `channels` must name at least one entry; labels outside the TDI set
    /// are dropped from the output rather than rejected. Returns the complete
    /// per-channel mapping or the first violated precondition as an error.
    pub fn compute_frequency_domain_signal(
        &mut self,
        channels: Option<&[String]>,
        options: &SynthesisOptions,
        params: &SourceParameters,
    ) -> WaveformResult<BTreeMap<TdiChannel, ChannelData>> {
        // 1) Channel set is a precondition for doing any work at all.
        let requested = match channels {
            Some(c) if !c.is_empty() => c,
            _ => return Err(WaveformError::MissingChannels),
        };

        // 2) Boundary validation of the physical inputs.
        params.validate()?;

        // 3) Minimum analysis frequency from the observation window.
        let f_min = bound::compute_f_min(&self.track_model, params, params.t_obs_start)?;
        let mf_min = dimensionless_frequency(f_min, params.mass1, params.mass2);

        // 4) Generator lookup; construction only happens on a cache miss.
        let key = GeneratorKey {
            mf_min,
            run_phenomd: options.run_phenomd,
        };
        let factory = &self.factory;
        let generator = self.cache.get_or_create(key, |k| factory.build(k));

        // 5) Frame conversion of time/orientation parameters.
        let (t_ref, lam, beta, psi) = frame::to_barycentric(
            options.ref_frame,
            &self.frame_transform,
            params.tc,
            params.eclipticlongitude,
            params.eclipticlatitude,
            params.polarization,
        );

        // 6) Evaluation grid.
        let grid = grid::build_grid(
            options.sample_points.as_deref(),
            options.nyquist_freq,
            params.t_obs_start,
        )?;
        debug!(
            f_min,
            mf_min,
            frame = options.ref_frame.label(),
            grid_len = grid.len(),
            "synthesizing frequency-domain signal"
        );

        // 7) Full synthesis on the chosen grid.
        let request = SynthesisRequest {
            mass1: params.mass1,
            mass2: params.mass2,
            spin1z: params.spin1z,
            spin2z: params.spin2z,
            distance: megaparsecs_to_meters(params.distance),
            coa_phase: params.coa_phase,
            f_ref: REFERENCE_FREQUENCY,
            inclination: params.inclination,
            lam,
            beta,
            psi,
            t_ref,
            freqs: grid.freqs(),
            modes: &extract::SYNTHESIS_MODES,
            direct: extract::DIRECT,
            fill: extract::FILL,
            squeeze: extract::SQUEEZE,
            length: extract::SYNTHESIS_LENGTH,
            t_obs_start: params.t_obs_start,
            t_obs_end: extract::T_OBS_END,
            shift_t_limits: extract::SHIFT_T_LIMITS,
        };
        let wave = generator.synthesize(&request)?;

        // 8) Per-channel packaging.
        extract::extract_channels(&wave, requested, &grid, params.tc, t_ref, params.t_obs_start)
    }
}
