//! Synthesizer collaborators and generator caching.
//!
//! Responsibilities:
//!
//! - define the injected collaborator contracts (track model, synthesizer,
//!   frame transform)
//! - memoize expensive generator construction by derived key

pub mod cache;
pub mod traits;

pub use cache::*;
pub use traits::*;
