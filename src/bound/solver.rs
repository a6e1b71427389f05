//! Minimum analysis frequency from the requested observation window.
//!
//! The requested window is a duration, not a frequency, so we:
//!
//! - ask the track model for a coarse, wide-bandwidth dominant-mode (2,2)
//!   evaluation whose only purpose is its time-frequency track
//! - invert that monotone track via interpolation, with elapsed time as the
//!   domain and frequency as the value
//! - read off the frequency reached at the window start
//!
//! The coarse model is never reused for the final signal. A window start
//! outside the covered track range is an explicit error; extrapolating would
//! silently fabricate a starting frequency.

use tracing::debug;

use crate::domain::SourceParameters;
use crate::error::{WaveformError, WaveformResult};
use crate::math::{Interp1d, megaparsecs_to_meters, units::YRSID_SI};
use crate::synth::{AmpPhaseModel, REFERENCE_FREQUENCY, TrackRequest};

/// Track resolution for the coarse evaluation.
pub const TRACK_LENGTH: usize = 10240;

/// Effectively unconstrained lower dimensionless-frequency floor for the
/// coarse evaluation.
pub const TRACK_MF_FLOOR: f64 = 1e-20;

/// Compute the minimum analysis frequency (Hz) for the given observation
/// window.
///
/// `t_obs_start` is taken as an explicit argument so the solver never depends
/// on assignment order elsewhere in the pipeline.
pub fn compute_f_min<M: AmpPhaseModel>(
    model: &M,
    params: &SourceParameters,
    t_obs_start: f64,
) -> WaveformResult<f64> {
    if !(t_obs_start.is_finite() && t_obs_start > 0.0) {
        return Err(WaveformError::invalid(
            "t_obs_start",
            format!("must be finite and > 0, got {t_obs_start}"),
        ));
    }

    let request = TrackRequest {
        mass1: params.mass1,
        mass2: params.mass2,
        spin1z: params.spin1z,
        spin2z: params.spin2z,
        distance: megaparsecs_to_meters(params.distance),
        coa_phase: params.coa_phase,
        f_ref: REFERENCE_FREQUENCY,
        t_ref: params.tc,
        mf_min: TRACK_MF_FLOOR,
        // The track comes from the full multi-mode model even when the final
        // synthesis is restricted to PhenomD.
        run_phenomd: false,
        modes: vec![(2, 2)],
        length: TRACK_LENGTH,
    };

    let track = model.time_frequency_track(&request)?;
    if track.freqs.len() != track.tf.len() {
        return Err(WaveformError::Synthesis(format!(
            "track model returned {} frequencies but {} time samples",
            track.freqs.len(),
            track.tf.len()
        )));
    }

    // Invert time(frequency): time is the interpolation domain, frequency the
    // dependent value.
    let inverse_track = Interp1d::new(track.tf, track.freqs)?;
    let target_time = params.tc - t_obs_start * YRSID_SI;
    let f_min = inverse_track.eval(target_time)?;

    debug!(t_obs_start, target_time, f_min, "resolved minimum analysis frequency");
    Ok(f_min)
}
