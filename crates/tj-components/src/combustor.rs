//! Primary combustor model.

use crate::common::heat_addition_rise;
use crate::traits::Stage;
use tj_core::Real;

/// Constant-pressure burner.
///
/// ## Model
///
/// Fuel energy released per kg of air heats the diluted air+fuel mixture:
///
/// ```text
/// T3 = T2 + f * Q / (cp * (1 + f))
/// ```
///
/// Pressure losses across the liner are neglected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Combustor {
    /// Fuel-air ratio `f` [kg fuel / kg air]
    pub fuel_air_ratio: Real,
    /// Fuel lower heating value `Q` [J/kg]
    pub fuel_energy: Real,
}

impl Combustor {
    pub fn new(fuel_air_ratio: Real, fuel_energy: Real) -> Self {
        Self {
            fuel_air_ratio,
            fuel_energy,
        }
    }

    /// Mass of combustion products per kg of air.
    pub fn mass_multiplier(&self) -> Real {
        1.0 + self.fuel_air_ratio
    }
}

impl Stage for Combustor {
    fn name(&self) -> &'static str {
        "combustor"
    }

    fn outlet_temperature(&self, t_in: Real) -> Real {
        t_in + heat_addition_rise(self.fuel_air_ratio, self.fuel_energy, self.mass_multiplier())
    }
}
