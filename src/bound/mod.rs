//! Frequency-bound solving.
//!
//! Responsibilities:
//!
//! - obtain a coarse dominant-mode time-frequency track from the model
//! - invert it to map the observation-window start onto a starting frequency

pub mod solver;

pub use solver::*;
