//! Piecewise ISA evaluation.

use tj_core::constants::{
    G0_MPS2, GAMMA, ISA_LAPSE_RATE_K_PER_M, ISA_SEA_LEVEL_PRESS_PA, ISA_SEA_LEVEL_TEMP_K,
    ISA_TROPOPAUSE_ALT_M, ISA_TROPOPAUSE_PRESS_PA, ISA_TROPOPAUSE_TEMP_K, R_AIR,
};
use tj_core::units::{Density, Pressure, Temperature, k, kg_per_m3, pa};
use tj_core::Real;

/// Atmospheric layer an altitude falls in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    /// Linear temperature lapse below the tropopause
    Troposphere,
    /// Isothermal layer from the tropopause upward
    Stratosphere,
}

impl Layer {
    /// Layer for `altitude_m`. The tropopause itself belongs to the stratosphere.
    pub fn at(altitude_m: Real) -> Self {
        if altitude_m < ISA_TROPOPAUSE_ALT_M {
            Layer::Troposphere
        } else {
            Layer::Stratosphere
        }
    }
}

/// Ambient conditions at a given altitude.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AtmosphereState {
    pub temperature: Temperature,
    pub pressure: Pressure,
    pub density: Density,
}

impl AtmosphereState {
    fn from_temperature_pressure(t_k: Real, p_pa: Real) -> Self {
        Self {
            temperature: k(t_k),
            pressure: pa(p_pa),
            density: kg_per_m3(p_pa / (R_AIR * t_k)),
        }
    }

    #[inline]
    pub fn temperature_k(&self) -> Real {
        self.temperature.value
    }

    #[inline]
    pub fn pressure_pa(&self) -> Real {
        self.pressure.value
    }

    #[inline]
    pub fn density_kg_m3(&self) -> Real {
        self.density.value
    }

    /// Speed of sound `sqrt(γ R T)` [m/s].
    pub fn speed_of_sound_mps(&self) -> Real {
        (GAMMA * R_AIR * self.temperature_k()).sqrt()
    }
}

/// Evaluate the ISA at `altitude_m`.
///
/// Pure and deterministic. Altitudes below sea level extrapolate the
/// tropospheric lapse rate; nothing is clamped.
pub fn evaluate(altitude_m: Real) -> AtmosphereState {
    match Layer::at(altitude_m) {
        Layer::Troposphere => troposphere(altitude_m),
        Layer::Stratosphere => stratosphere(altitude_m),
    }
}

/// Troposphere branch, evaluated regardless of the layer boundary.
pub fn troposphere(altitude_m: Real) -> AtmosphereState {
    let t = ISA_SEA_LEVEL_TEMP_K - ISA_LAPSE_RATE_K_PER_M * altitude_m;
    let exponent = G0_MPS2 / (ISA_LAPSE_RATE_K_PER_M * R_AIR);
    let p = ISA_SEA_LEVEL_PRESS_PA * (t / ISA_SEA_LEVEL_TEMP_K).powf(exponent);
    AtmosphereState::from_temperature_pressure(t, p)
}

/// Stratosphere branch, evaluated regardless of the layer boundary.
pub fn stratosphere(altitude_m: Real) -> AtmosphereState {
    let t = ISA_TROPOPAUSE_TEMP_K;
    let p = ISA_TROPOPAUSE_PRESS_PA
        * (-G0_MPS2 * (altitude_m - ISA_TROPOPAUSE_ALT_M) / (R_AIR * t)).exp();
    AtmosphereState::from_temperature_pressure(t, p)
}
