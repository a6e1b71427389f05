//! Reference-frame conversion of time and orientation parameters.
//!
//! The synthesizer expects barycentric-frame (SSB) inputs. Detector-frame
//! inputs are converted through the injected transform; barycentric inputs
//! pass through untouched. Unknown frame labels never reach this point: the
//! `ReferenceFrame` enum is closed and its string boundary fails at parse.

use crate::domain::ReferenceFrame;
use crate::synth::FrameTransform;

/// Convert `(t_ref, lam, beta, psi)` into the barycentric frame.
pub fn to_barycentric<T: FrameTransform>(
    frame: ReferenceFrame,
    transform: &T,
    t_ref: f64,
    lam: f64,
    beta: f64,
    psi: f64,
) -> (f64, f64, f64, f64) {
    match frame {
        ReferenceFrame::Ssb => (t_ref, lam, beta, psi),
        ReferenceFrame::Lisa => transform.lisa_to_ssb(t_ref, lam, beta, psi),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Transform that tags every component, so pass-through is observable.
    struct Shift;

    impl FrameTransform for Shift {
        fn lisa_to_ssb(&self, t_ref: f64, lam: f64, beta: f64, psi: f64) -> (f64, f64, f64, f64) {
            (t_ref + 100.0, lam + 1.0, beta + 2.0, psi + 3.0)
        }
    }

    #[test]
    fn barycentric_inputs_are_identity() {
        let out = to_barycentric(ReferenceFrame::Ssb, &Shift, 10.0, 0.1, 0.2, 0.3);
        assert_eq!(out, (10.0, 0.1, 0.2, 0.3));
    }

    #[test]
    fn detector_inputs_delegate_to_the_transform_unmodified() {
        let out = to_barycentric(ReferenceFrame::Lisa, &Shift, 10.0, 0.1, 0.2, 0.3);
        assert_eq!(out, (110.0, 1.1, 2.2, 3.3));
    }
}
