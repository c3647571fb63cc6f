//! Turbine model matched to the compressor's shaft demand.

use crate::traits::Stage;
use tj_core::Real;
use tj_core::constants::CP_AIR;

/// Turbine that extracts exactly the work the compressor absorbs.
///
/// ## Model
///
/// The turbine is not an independent expansion to a target pressure. Its
/// temperature drop is set by the shaft energy balance, including mechanical
/// transmission losses, spread over the air+fuel mass flow:
///
/// ```text
/// w_c  = cp * (T2 - T0)
/// ΔT_t = (w_c / eta_mech) / (cp * (1 + f))
/// T4   = T3 - ΔT_t
/// ```
///
/// ## Sign Conventions
///
/// - `shaft_demand` is positive (work the turbine must deliver per kg of air)
/// - `temperature_rise()` is negative
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Turbine {
    /// Compressor work per kg of air [J/kg]
    pub shaft_demand: Real,
    /// Mechanical transmission efficiency (0 < eta_mech <= 1)
    pub mechanical_efficiency: Real,
    /// Fuel-air ratio of the gas flowing through the turbine
    pub fuel_air_ratio: Real,
}

impl Turbine {
    /// Size the turbine to drive a compressor absorbing `compressor_work` J/kg.
    pub fn matched_to(
        compressor_work: Real,
        mechanical_efficiency: Real,
        fuel_air_ratio: Real,
    ) -> Self {
        Self {
            shaft_demand: compressor_work,
            mechanical_efficiency,
            fuel_air_ratio,
        }
    }

    /// Work extracted from the gas per kg of air, including transmission losses [J/kg].
    pub fn extracted_work(&self) -> Real {
        self.shaft_demand / self.mechanical_efficiency
    }

    /// Temperature drop across the turbine (positive number).
    pub fn temperature_drop(&self) -> Real {
        self.extracted_work() / (CP_AIR * (1.0 + self.fuel_air_ratio))
    }
}

impl Stage for Turbine {
    fn name(&self) -> &'static str {
        "turbine"
    }

    fn outlet_temperature(&self, t_in: Real) -> Real {
        t_in - self.temperature_drop()
    }
}
