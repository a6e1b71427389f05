//! `tdi-waveform` library crate.
//!
//! Synthesizes a frequency-domain gravitational-wave signal as observed by a
//! space-based detector's time-delay-interferometry (TDI) channels, from
//! physical source parameters. The physics collaborators (amplitude/phase
//! model, full TDI synthesizer, frame transform) are injected through traits;
//! this crate owns the orchestration:
//!
//! - solve the minimum analysis frequency for the requested observation
//!   window by inverting a time-frequency track
//! - memoize expensive generator construction by derived key
//! - convert detector-frame inputs to the barycentric frame
//! - build the frequency sampling grid
//! - map raw multi-channel output into time-aligned per-channel series

pub mod bound;
pub mod domain;
pub mod error;
pub mod math;
pub mod pipeline;
pub mod series;
pub mod synth;
