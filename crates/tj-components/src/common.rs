//! Common utilities for stage calculations.

use tj_core::Real;
use tj_core::constants::CP_AIR;

/// Temperature rise from burning `fuel_fraction` kg of fuel per kg of core
/// air into a mixture of `mass_multiplier` kg, at constant pressure.
///
/// ```text
/// ΔT = fuel_fraction * Q / (cp * mass_multiplier)
/// ```
#[inline]
pub fn heat_addition_rise(fuel_fraction: Real, fuel_energy: Real, mass_multiplier: Real) -> Real {
    fuel_fraction * fuel_energy / (CP_AIR * mass_multiplier)
}

/// Specific enthalpy change for a temperature change at constant `cp` [J/kg].
#[inline]
pub fn enthalpy_change(delta_t: Real) -> Real {
    CP_AIR * delta_t
}
