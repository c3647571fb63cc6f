//! Design and operating point inputs.

use serde::{Deserialize, Serialize};
use tj_core::Real;

/// Inputs to one engine cycle, in SI base units.
///
/// Values are not checked here. Each field documents its physically valid
/// range; out-of-range values produce non-physical results rather than
/// errors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineParameters {
    /// Flight altitude [m], meaningful in about [-500, 50 000]
    pub altitude: Real,
    /// Overall compressor pressure ratio (> 1)
    pub compression_ratio: Real,
    /// Fuel lower heating value [J/kg] (> 0)
    pub fuel_energy: Real,
    /// Compressor isentropic efficiency, (0, 1]
    pub compressor_efficiency: Real,
    /// Turbine isentropic efficiency, (0, 1]. Not used by the work-matched
    /// turbine; carried for reporting.
    pub turbine_efficiency: Real,
    /// Shaft transmission efficiency, (0, 1]
    pub mechanical_efficiency: Real,
    /// Nozzle efficiency, (0, 1]
    pub nozzle_efficiency: Real,
    /// Flight speed [m/s] (>= 0)
    pub flight_speed: Real,
    /// Primary fuel-air ratio [kg fuel / kg air]
    pub fuel_air_ratio: Real,
    /// Whether the afterburner is lit
    pub afterburner_enabled: bool,
    /// Afterburner fuel fraction [kg fuel / kg air] (>= 0)
    pub afterburner_fuel_fraction: Real,
    /// Nacelle drag coefficient
    pub drag_coefficient: Real,
    /// Frontal (and inlet capture) area [m²] (> 0)
    pub frontal_area: Real,
}

impl Default for EngineParameters {
    fn default() -> Self {
        Self {
            altitude: 10_000.0,
            compression_ratio: 10.0,
            fuel_energy: 43.0e6,
            compressor_efficiency: 0.85,
            turbine_efficiency: 0.85,
            mechanical_efficiency: 0.9,
            nozzle_efficiency: 0.9,
            flight_speed: 1_000.0,
            fuel_air_ratio: 0.045,
            afterburner_enabled: false,
            afterburner_fuel_fraction: 0.03,
            drag_coefficient: 0.01,
            frontal_area: 0.9,
        }
    }
}

impl EngineParameters {
    /// Same operating point with the afterburner lit at `fuel_fraction`.
    pub fn with_afterburner(mut self, fuel_fraction: Real) -> Self {
        self.afterburner_enabled = true;
        self.afterburner_fuel_fraction = fuel_fraction;
        self
    }

    /// Same operating point with the afterburner off.
    pub fn without_afterburner(mut self) -> Self {
        self.afterburner_enabled = false;
        self
    }

    /// Fuel burned per kg of captured air, including reheat when lit.
    pub fn total_fuel_fraction(&self) -> Real {
        if self.afterburner_enabled {
            self.fuel_air_ratio + self.afterburner_fuel_fraction
        } else {
            self.fuel_air_ratio
        }
    }
}
