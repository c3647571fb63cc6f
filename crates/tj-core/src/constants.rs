//! Physical constants for dry air and the International Standard Atmosphere.

/// Heat capacity ratio of air.
pub const GAMMA: f64 = 1.4;

/// Specific gas constant of air [J/(kg·K)].
pub const R_AIR: f64 = 287.05;

/// Specific heat of air at constant pressure [J/(kg·K)].
pub const CP_AIR: f64 = 1005.0;

/// Standard gravity [m/s²].
pub const G0_MPS2: f64 = 9.806_65;

/// ISA sea level temperature [K].
pub const ISA_SEA_LEVEL_TEMP_K: f64 = 288.15;

/// ISA sea level pressure [Pa].
pub const ISA_SEA_LEVEL_PRESS_PA: f64 = 101_325.0;

/// Tropospheric temperature lapse rate [K/m].
pub const ISA_LAPSE_RATE_K_PER_M: f64 = 0.0065;

/// Geopotential altitude of the tropopause [m].
pub const ISA_TROPOPAUSE_ALT_M: f64 = 11_000.0;

/// Isothermal temperature of the lower stratosphere [K].
pub const ISA_TROPOPAUSE_TEMP_K: f64 = 216.65;

/// Pressure at the tropopause [Pa].
pub const ISA_TROPOPAUSE_PRESS_PA: f64 = 22_632.0;

/// Exponent `(γ - 1) / γ` of the isentropic temperature/pressure relation.
#[inline]
pub fn isentropic_exponent() -> f64 {
    (GAMMA - 1.0) / GAMMA
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isentropic_exponent_for_air() {
        assert!((isentropic_exponent() - 0.285_714_285_714).abs() < 1e-12);
    }

    #[test]
    fn tropopause_temperature_follows_lapse_rate() {
        let t = ISA_SEA_LEVEL_TEMP_K - ISA_LAPSE_RATE_K_PER_M * ISA_TROPOPAUSE_ALT_M;
        assert!((t - ISA_TROPOPAUSE_TEMP_K).abs() < 1e-9);
    }
}
