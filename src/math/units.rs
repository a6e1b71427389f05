//! Physical constants and unit conversions.
//!
//! The synthesizer works in geometric conventions: masses enter as times
//! (solar masses × `MTSUN_SI`) and the generator cache is keyed on the
//! dimensionless frequency `f · M_total · MTSUN_SI`.

/// Geometrized solar mass, in seconds.
pub const MTSUN_SI: f64 = 4.925491025543576e-6;

/// Sidereal year, in seconds.
pub const YRSID_SI: f64 = 31_558_149.763_545_6;

/// One megaparsec, in meters.
pub const MPC_SI: f64 = 3.085_677_581_491_367e22;

/// Convert a luminosity distance in Mpc to meters.
pub fn megaparsecs_to_meters(distance_mpc: f64) -> f64 {
    distance_mpc * MPC_SI
}

/// Total system mass expressed as a time, in seconds.
pub fn total_mass_seconds(mass1: f64, mass2: f64) -> f64 {
    (mass1 + mass2) * MTSUN_SI
}

/// Convert a physical frequency (Hz) to its dimensionless counterpart for a
/// binary with the given component masses (solar masses).
pub fn dimensionless_frequency(f_hz: f64, mass1: f64, mass2: f64) -> f64 {
    f_hz * total_mass_seconds(mass1, mass2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn megaparsec_conversion_scales_linearly() {
        assert_relative_eq!(megaparsecs_to_meters(1.0), MPC_SI);
        assert_relative_eq!(megaparsecs_to_meters(100.0), 100.0 * MPC_SI);
    }

    #[test]
    fn dimensionless_frequency_uses_total_mass() {
        // 1e6 + 4e5 solar masses at 1 mHz.
        let mf = dimensionless_frequency(1e-3, 1.0e6, 4.0e5);
        assert_relative_eq!(mf, 1e-3 * 1.4e6 * MTSUN_SI, max_relative = 1e-15);
    }
}
