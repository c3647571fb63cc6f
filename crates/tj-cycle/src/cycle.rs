//! The chained turbojet cycle.

use tj_atmosphere::AtmosphereState;
use tj_components::{Afterburner, Combustor, Compressor, Nozzle, NozzleLaw, Stage, Turbine};
use tj_core::Real;
use tj_core::constants::G0_MPS2;
use tracing::{debug, trace};

use crate::parameters::EngineParameters;
use crate::result::{CycleStationTemperatures, SimulationResult};

/// A turbojet at a fixed operating point.
///
/// Ambient conditions are evaluated once, at construction, and never change
/// for the lifetime of the instance. [`EngineCycle::simulate`] takes `&self`
/// and keeps no state between calls, so repeated calls return bit-identical
/// results and instances can be shared across threads.
#[derive(Debug, Clone)]
pub struct EngineCycle {
    params: EngineParameters,
    atmosphere: AtmosphereState,
}

impl EngineCycle {
    /// Build the cycle and evaluate the ISA at the configured altitude.
    pub fn new(params: EngineParameters) -> Self {
        let atmosphere = tj_atmosphere::evaluate(params.altitude);
        debug!(
            altitude_m = params.altitude,
            t0_k = atmosphere.temperature_k(),
            p0_pa = atmosphere.pressure_pa(),
            rho_kg_m3 = atmosphere.density_kg_m3(),
            "engine cycle constructed"
        );
        Self { params, atmosphere }
    }

    pub fn parameters(&self) -> &EngineParameters {
        &self.params
    }

    /// Ambient state fixed at construction.
    pub fn atmosphere(&self) -> &AtmosphereState {
        &self.atmosphere
    }

    /// Flight Mach number `V0 / a0`.
    pub fn flight_mach(&self) -> Real {
        self.params.flight_speed / self.atmosphere.speed_of_sound_mps()
    }

    /// Run compressor → combustor → turbine → (afterburner) → nozzle and
    /// synthesise thrust, fuel flow and efficiencies.
    pub fn simulate(&self) -> SimulationResult {
        let p = &self.params;
        let t0 = self.atmosphere.temperature_k();
        let rho = self.atmosphere.density_kg_m3();
        let v0 = p.flight_speed;
        let mass_flow = rho * v0 * p.frontal_area;

        let compressor = Compressor::new(p.compression_ratio, p.compressor_efficiency);
        let t2 = compressor.outlet_temperature(t0);
        trace!(stage = compressor.name(), t_in = t0, t_out = t2);

        let combustor = Combustor::new(p.fuel_air_ratio, p.fuel_energy);
        let t3 = combustor.outlet_temperature(t2);
        trace!(stage = combustor.name(), t_in = t2, t_out = t3);

        let turbine = Turbine::matched_to(
            compressor.specific_work(t0),
            p.mechanical_efficiency,
            p.fuel_air_ratio,
        );
        let t4 = turbine.outlet_temperature(t3);
        trace!(stage = turbine.name(), t_in = t3, t_out = t4);

        let nozzle = Nozzle::new(p.nozzle_efficiency);
        let (t5, exhaust_velocity) = if p.afterburner_enabled {
            let afterburner =
                Afterburner::new(p.afterburner_fuel_fraction, p.fuel_air_ratio, p.fuel_energy);
            let t5 = afterburner.outlet_temperature(t4);
            trace!(stage = afterburner.name(), t_in = t4, t_out = t5);
            let v = nozzle
                .with_law(NozzleLaw::KineticEnergy)
                .exit_velocity(t5, t0);
            (Some(t5), v)
        } else {
            (None, nozzle.exit_velocity(t4, t0))
        };
        trace!(stage = "nozzle", v_exit = exhaust_velocity);

        let fuel_flow_rate = p.total_fuel_fraction() * mass_flow;
        let gross_thrust = mass_flow * (exhaust_velocity - v0);
        let drag = 0.5 * rho * v0.powi(2) * p.drag_coefficient * p.frontal_area;
        let mut net_thrust = gross_thrust - drag;

        let (tsfc, specific_impulse) = if net_thrust <= 0.0 {
            debug!(gross_thrust, drag, "non-positive net thrust, clamping to zero");
            net_thrust = 0.0;
            (Real::INFINITY, 0.0)
        } else {
            (
                fuel_flow_rate / net_thrust,
                net_thrust / (fuel_flow_rate * G0_MPS2),
            )
        };

        let kinetic_power = 0.5 * mass_flow * (exhaust_velocity.powi(2) - v0.powi(2));
        let fuel_power = fuel_flow_rate * p.fuel_energy;
        let thermal_efficiency = if fuel_power != 0.0 {
            kinetic_power / fuel_power
        } else {
            0.0
        };
        let propulsive_efficiency = froude_efficiency(exhaust_velocity, v0);
        let overall_efficiency = thermal_efficiency * propulsive_efficiency;

        let stations = CycleStationTemperatures { t0, t2, t3, t4, t5 };

        SimulationResult {
            stations,
            compressor_temp: t2,
            combustor_temp: t3,
            turbine_exit_temp: stations.nozzle_inlet(),
            exhaust_velocity,
            net_thrust,
            fuel_flow_rate,
            tsfc,
            thermal_efficiency,
            propulsive_efficiency,
            overall_efficiency,
            specific_impulse,
            mass_flow_rate: mass_flow,
            gross_thrust,
            drag,
        }
    }
}

/// Froude propulsive efficiency `2 V0 (Ve - V0) / (Ve² + V0²)`, zero when the
/// jet is no faster than the aircraft.
fn froude_efficiency(v_exit: Real, v0: Real) -> Real {
    if v_exit > v0 {
        2.0 * v0 * (v_exit - v0) / (v_exit.powi(2) + v0.powi(2))
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cruise() -> EngineParameters {
        EngineParameters {
            altitude: 10_000.0,
            compression_ratio: 10.0,
            flight_speed: 250.0,
            ..EngineParameters::default()
        }
    }

    #[test]
    fn froude_efficiency_edges() {
        assert_eq!(froude_efficiency(500.0, 500.0), 0.0);
        assert_eq!(froude_efficiency(400.0, 500.0), 0.0);
        assert_eq!(froude_efficiency(500.0, 0.0), 0.0);
        // Ve = 2 V0 gives 2*1/(4+1) = 0.4
        assert!((froude_efficiency(200.0, 100.0) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn atmosphere_fixed_at_construction() {
        let cycle = EngineCycle::new(cruise());
        assert!((cycle.atmosphere().temperature_k() - 223.15).abs() < 1e-9);
        let first = cycle.simulate();
        let second = cycle.simulate();
        assert_eq!(first, second);
        assert!((cycle.atmosphere().temperature_k() - 223.15).abs() < 1e-9);
    }

    #[test]
    fn cruise_reference_values() {
        let r = EngineCycle::new(cruise()).simulate();
        assert!((r.compressor_temp - 467.4855).abs() < 1e-3);
        assert!((r.combustor_temp - 2_309.9479).abs() < 1e-3);
        assert!((r.turbine_exit_temp - 2_050.1546).abs() < 1e-3);
        assert!((r.exhaust_velocity - 1_724.6873).abs() < 1e-3);
        assert!((r.tsfc * 1e6 - 30.5408).abs() < 1e-3);
        assert!((r.thermal_efficiency - 0.752_467).abs() < 1e-5);
        assert!((r.propulsive_efficiency - 0.242_783).abs() < 1e-5);
    }

    #[test]
    fn mass_flow_is_reported_not_stored() {
        let cycle = EngineCycle::new(cruise());
        let r = cycle.simulate();
        let rho = cycle.atmosphere().density_kg_m3();
        assert_eq!(r.mass_flow_rate, rho * 250.0 * 0.9);
        assert_eq!(r.fuel_flow_rate, 0.045 * r.mass_flow_rate);
    }

    #[test]
    fn turbine_exit_is_reheat_exit_when_lit() {
        let r = EngineCycle::new(cruise().with_afterburner(0.03)).simulate();
        let t5 = r.stations.t5.expect("afterburner lit");
        assert_eq!(r.turbine_exit_temp, t5);
        assert!(t5 > r.stations.t4);
    }

    #[test]
    fn flight_mach_at_sea_level() {
        let params = EngineParameters {
            altitude: 0.0,
            flight_speed: 340.29,
            ..EngineParameters::default()
        };
        let mach = EngineCycle::new(params).flight_mach();
        assert!((mach - 1.0).abs() < 1e-3);
    }

    #[test]
    fn standstill_is_degenerate() {
        let params = EngineParameters {
            flight_speed: 0.0,
            ..cruise()
        };
        let r = EngineCycle::new(params).simulate();
        assert!(r.is_degenerate());
        assert_eq!(r.mass_flow_rate, 0.0);
        assert_eq!(r.thermal_efficiency, 0.0);
        assert_eq!(r.propulsive_efficiency, 0.0);
    }
}
