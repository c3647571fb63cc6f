//! Compressor stage model.

use crate::common::enthalpy_change;
use crate::traits::Stage;
use tj_core::Real;
use tj_core::constants::isentropic_exponent;

/// Axial/centrifugal compressor treated as a single stage.
///
/// ## Model
///
/// The isentropic temperature rise for the overall pressure ratio `r` is
/// scaled up by the isentropic efficiency, since a real compressor needs more
/// work than an ideal one for the same pressure rise:
///
/// ```text
/// T2 = T0 * (1 + (r^((γ-1)/γ) - 1) / eta)
/// P2 = P0 * r
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Compressor {
    /// Overall pressure ratio (> 1)
    pub pressure_ratio: Real,
    /// Isentropic efficiency (0 < eta <= 1)
    pub eta: Real,
}

impl Compressor {
    pub fn new(pressure_ratio: Real, eta: Real) -> Self {
        Self { pressure_ratio, eta }
    }

    /// Ideal outlet-to-inlet temperature ratio `r^((γ-1)/γ)`.
    pub fn isentropic_temperature_ratio(&self) -> Real {
        self.pressure_ratio.powf(isentropic_exponent())
    }

    /// Outlet pressure for the given inlet pressure.
    pub fn outlet_pressure(&self, p_in: Real) -> Real {
        p_in * self.pressure_ratio
    }

    /// Shaft work absorbed per kg of air [J/kg].
    pub fn specific_work(&self, t_in: Real) -> Real {
        enthalpy_change(self.temperature_rise(t_in))
    }
}

impl Stage for Compressor {
    fn name(&self) -> &'static str {
        "compressor"
    }

    fn outlet_temperature(&self, t_in: Real) -> Real {
        t_in * (1.0 + (self.isentropic_temperature_ratio() - 1.0) / self.eta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ideal_compressor_matches_isentropic_relation() {
        let c = Compressor::new(10.0, 1.0);
        let t2 = c.outlet_temperature(288.15);
        let expected = 288.15 * 10.0_f64.powf(0.4 / 1.4);
        assert!((t2 - expected).abs() < 1e-9);
    }

    #[test]
    fn losses_raise_outlet_temperature() {
        let ideal = Compressor::new(10.0, 1.0).outlet_temperature(288.15);
        let real = Compressor::new(10.0, 0.85).outlet_temperature(288.15);
        assert!(real > ideal);
    }

    #[test]
    fn unit_ratio_does_no_work() {
        let c = Compressor::new(1.0, 0.85);
        assert_eq!(c.outlet_temperature(250.0), 250.0);
        assert_eq!(c.specific_work(250.0), 0.0);
    }

    #[test]
    fn outlet_pressure_scales_by_ratio() {
        let c = Compressor::new(25.0, 0.9);
        assert_eq!(c.outlet_pressure(20_000.0), 500_000.0);
    }

    #[test]
    fn sea_level_reference_point() {
        let c = Compressor::new(10.0, 0.85);
        assert!((c.outlet_temperature(288.15) - 603.6565).abs() < 1e-3);
    }
}
