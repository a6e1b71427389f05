//! Shared domain types.
//!
//! These types form the explicit boundary of the pipeline:
//!
//! - `SourceParameters` enumerates every physical input as a named, typed
//!   field (no open-ended parameter bags) and validates at ingestion
//! - `ReferenceFrame` / `TdiChannel` are closed enums with string parsing at
//!   the edges, so unknown labels fail (frames) or are dropped (channels)
//!   exactly where the contract says they should

use serde::{Deserialize, Serialize};

use crate::error::{WaveformError, WaveformResult};

/// Physical parameters of an aligned-spin binary source.
///
/// Angles are in radians, masses in solar masses, `distance` in Mpc, times in
/// seconds. `t_obs_start` is the observation duration counted backward from
/// the merger time `tc`. Immutable once received.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SourceParameters {
    pub mass1: f64,
    pub mass2: f64,
    pub spin1z: f64,
    pub spin2z: f64,
    pub distance: f64,
    pub coa_phase: f64,
    pub inclination: f64,
    pub eclipticlongitude: f64,
    pub eclipticlatitude: f64,
    pub polarization: f64,
    /// Merger (reference) time, seconds.
    pub tc: f64,
    /// Observation duration before merger, seconds.
    pub t_obs_start: f64,
}

impl SourceParameters {
    /// Reject out-of-range inputs at the boundary rather than deep inside the
    /// pipeline.
    pub fn validate(&self) -> WaveformResult<()> {
        let fields = [
            ("mass1", self.mass1),
            ("mass2", self.mass2),
            ("spin1z", self.spin1z),
            ("spin2z", self.spin2z),
            ("distance", self.distance),
            ("coa_phase", self.coa_phase),
            ("inclination", self.inclination),
            ("eclipticlongitude", self.eclipticlongitude),
            ("eclipticlatitude", self.eclipticlatitude),
            ("polarization", self.polarization),
            ("tc", self.tc),
            ("t_obs_start", self.t_obs_start),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(WaveformError::invalid(name, format!("non-finite value {value}")));
            }
        }

        for (name, value) in [
            ("mass1", self.mass1),
            ("mass2", self.mass2),
            ("distance", self.distance),
            ("t_obs_start", self.t_obs_start),
        ] {
            if value <= 0.0 {
                return Err(WaveformError::invalid(name, format!("must be > 0, got {value}")));
            }
        }

        Ok(())
    }

    /// Total system mass in solar masses.
    pub fn total_mass(&self) -> f64 {
        self.mass1 + self.mass2
    }
}

/// Reference frame of the supplied time/orientation parameters.
///
/// The synthesizer works in the barycentric (SSB) convention; detector-frame
/// inputs are converted before synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReferenceFrame {
    /// Detector-native convention ("LISA").
    Lisa,
    /// Solar-system-barycenter convention ("SSB").
    Ssb,
}

impl ReferenceFrame {
    /// Parse a frame label, failing loudly on anything outside the known set.
    pub fn parse(label: &str) -> WaveformResult<Self> {
        match label {
            "LISA" => Ok(ReferenceFrame::Lisa),
            "SSB" => Ok(ReferenceFrame::Ssb),
            other => Err(WaveformError::UnknownFrame {
                frame: other.to_string(),
            }),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReferenceFrame::Lisa => "LISA",
            ReferenceFrame::Ssb => "SSB",
        }
    }
}

/// One of the three orthogonal TDI channel combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TdiChannel {
    A,
    E,
    T,
}

impl TdiChannel {
    pub const ALL: [TdiChannel; 3] = [TdiChannel::A, TdiChannel::E, TdiChannel::T];

    /// Map a requested channel label to a channel.
    ///
    /// Unrecognized labels yield `None`; the extractor drops them silently
    /// rather than erroring, so a caller may over-request.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "LISA_A" => Some(TdiChannel::A),
            "LISA_E" => Some(TdiChannel::E),
            "LISA_T" => Some(TdiChannel::T),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TdiChannel::A => "LISA_A",
            TdiChannel::E => "LISA_E",
            TdiChannel::T => "LISA_T",
        }
    }

    /// Row index of this channel in the synthesizer output array.
    pub fn row(self) -> usize {
        match self {
            TdiChannel::A => 0,
            TdiChannel::E => 1,
            TdiChannel::T => 2,
        }
    }
}

/// Caller-tunable synthesis options.
///
/// Everything else about the synthesis call (mode set, fill/squeeze flags,
/// internal resolution, ringdown inclusion) is fixed by contract; see
/// `pipeline::extract`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisOptions {
    /// Restrict the underlying model to its aligned-spin PhenomD branch.
    pub run_phenomd: bool,
    /// Upper bound of the default frequency grid, Hz.
    pub nyquist_freq: f64,
    /// Frame the time/orientation inputs are expressed in.
    pub ref_frame: ReferenceFrame,
    /// Explicit evaluation frequencies (Hz). When set, the caller takes full
    /// responsibility for range and spacing, and outputs carry no time
    /// metadata.
    pub sample_points: Option<Vec<f64>>,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            run_phenomd: true,
            nyquist_freq: 0.1,
            ref_frame: ReferenceFrame::Lisa,
            sample_points: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> SourceParameters {
        SourceParameters {
            mass1: 1.0e6,
            mass2: 8.0e5,
            spin1z: 0.2,
            spin2z: -0.1,
            distance: 1.0e4,
            coa_phase: 0.0,
            inclination: 0.5,
            eclipticlongitude: 1.0,
            eclipticlatitude: 0.3,
            polarization: 0.7,
            tc: 1.0e7,
            t_obs_start: 3.15e7,
        }
    }

    #[test]
    fn validate_accepts_physical_parameters() {
        assert!(params().validate().is_ok());
    }

    #[test]
    fn validate_rejects_nonpositive_and_nonfinite() {
        let mut p = params();
        p.mass2 = 0.0;
        assert!(matches!(
            p.validate(),
            Err(WaveformError::InvalidParameter { name: "mass2", .. })
        ));

        let mut p = params();
        p.t_obs_start = -1.0;
        assert!(p.validate().is_err());

        let mut p = params();
        p.inclination = f64::NAN;
        assert!(matches!(
            p.validate(),
            Err(WaveformError::InvalidParameter { name: "inclination", .. })
        ));
    }

    #[test]
    fn frame_parsing_is_closed() {
        assert_eq!(ReferenceFrame::parse("LISA").unwrap(), ReferenceFrame::Lisa);
        assert_eq!(ReferenceFrame::parse("SSB").unwrap(), ReferenceFrame::Ssb);
        let err = ReferenceFrame::parse("GEO").unwrap_err();
        assert_eq!(
            err,
            WaveformError::UnknownFrame {
                frame: "GEO".to_string()
            }
        );
    }

    #[test]
    fn channel_labels_round_trip_and_unknowns_drop() {
        for ch in TdiChannel::ALL {
            assert_eq!(TdiChannel::from_label(ch.label()), Some(ch));
        }
        assert_eq!(TdiChannel::from_label("LISA_X"), None);
        assert_eq!(TdiChannel::from_label("H1"), None);
    }

    #[test]
    fn channel_rows_match_synthesizer_order() {
        assert_eq!(TdiChannel::A.row(), 0);
        assert_eq!(TdiChannel::E.row(), 1);
        assert_eq!(TdiChannel::T.row(), 2);
    }

    #[test]
    fn options_defaults_match_contract() {
        let opts = SynthesisOptions::default();
        assert!(opts.run_phenomd);
        assert_eq!(opts.nyquist_freq, 0.1);
        assert_eq!(opts.ref_frame, ReferenceFrame::Lisa);
        assert!(opts.sample_points.is_none());
    }
}
