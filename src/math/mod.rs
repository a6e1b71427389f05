//! Mathematical utilities: 1-D interpolation and unit conversions.

pub mod interp;
pub mod units;

pub use interp::*;
pub use units::*;
