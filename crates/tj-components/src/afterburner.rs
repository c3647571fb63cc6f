//! Afterburner (reheat) model.

use crate::common::heat_addition_rise;
use crate::traits::Stage;
use tj_core::Real;

/// Reheat stage burning extra fuel in the turbine exhaust.
///
/// ## Model
///
/// ```text
/// T5 = T4 + b * Q / (cp * (1 + f + b))
/// ```
///
/// where `b` is the afterburner fuel fraction and `f` the primary fuel-air
/// ratio already present in the gas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Afterburner {
    /// Afterburner fuel fraction `b` [kg fuel / kg air]
    pub fuel_fraction: Real,
    /// Primary fuel-air ratio `f` carried from the combustor
    pub primary_fuel_air_ratio: Real,
    /// Fuel lower heating value `Q` [J/kg]
    pub fuel_energy: Real,
}

impl Afterburner {
    pub fn new(fuel_fraction: Real, primary_fuel_air_ratio: Real, fuel_energy: Real) -> Self {
        Self {
            fuel_fraction,
            primary_fuel_air_ratio,
            fuel_energy,
        }
    }

    /// Total mass of products per kg of air after reheat.
    pub fn mass_multiplier(&self) -> Real {
        1.0 + self.primary_fuel_air_ratio + self.fuel_fraction
    }

    /// Total fuel burned per kg of air, primary plus reheat.
    pub fn total_fuel_fraction(&self) -> Real {
        self.primary_fuel_air_ratio + self.fuel_fraction
    }
}

impl Stage for Afterburner {
    fn name(&self) -> &'static str {
        "afterburner"
    }

    fn outlet_temperature(&self, t_in: Real) -> Real {
        t_in + heat_addition_rise(self.fuel_fraction, self.fuel_energy, self.mass_multiplier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reheat_raises_temperature() {
        let ab = Afterburner::new(0.03, 0.045, 43.0e6);
        let t5 = ab.outlet_temperature(2_050.0);
        assert!((t5 - (2_050.0 + 0.03 * 43.0e6 / (1005.0 * 1.075))).abs() < 1e-9);
    }

    #[test]
    fn zero_fraction_is_pass_through() {
        let ab = Afterburner::new(0.0, 0.045, 43.0e6);
        assert_eq!(ab.outlet_temperature(2_050.0), 2_050.0);
        assert_eq!(ab.total_fuel_fraction(), 0.045);
    }
}
