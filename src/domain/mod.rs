//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the fully enumerated source parameter set (`SourceParameters`)
//! - frame and channel enums with parsing at the string boundary
//! - caller-tunable synthesis options (`SynthesisOptions`)

pub mod types;

pub use types::*;
