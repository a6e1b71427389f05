//! Error taxonomy for the synthesis pipeline.
//!
//! The pipeline is a pure, synchronous computation: every failure is raised
//! once, immediately, with the offending value attached. There are no retries
//! and no partially filled outputs: a call either returns the complete
//! channel mapping or one of these errors.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type WaveformResult<T> = Result<T, WaveformError>;

/// All failures the pipeline can surface to a caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WaveformError {
    /// No detector channels were requested. Raised before any computation.
    #[error("no detector channels requested; at least one TDI channel label is required")]
    MissingChannels,

    /// A reference-frame label outside the known set.
    #[error("unknown reference frame {frame:?}; known frames are \"LISA\" and \"SSB\"")]
    UnknownFrame { frame: String },

    /// The time-track inversion target fell outside the sampled domain.
    ///
    /// Extrapolating the time-frequency track would silently produce
    /// unphysical starting frequencies, so out-of-domain lookups fail instead.
    #[error("interpolation target {target} outside sampled domain [{min}, {max}]")]
    InterpolationDomain { target: f64, min: f64, max: f64 },

    /// Boundary validation failure on an input value.
    #[error("invalid parameter `{name}`: {message}")]
    InvalidParameter { name: &'static str, message: String },

    /// A collaborator (track model or synthesizer) reported a failure.
    #[error("waveform synthesis failed: {0}")]
    Synthesis(String),
}

impl WaveformError {
    pub fn invalid(name: &'static str, message: impl Into<String>) -> Self {
        WaveformError::InvalidParameter {
            name,
            message: message.into(),
        }
    }
}
