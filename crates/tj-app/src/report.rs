//! Display-unit conversions and text rendering of results.

use tj_core::units::{n, unitless};
use tj_cycle::SimulationResult;
use uom::si::f64::Mass;
use uom::si::force::kilonewton;
use uom::si::mass::{kilogram, milligram};
use uom::si::ratio::percent;

/// A result in the units people read: kN, mg/(N·s) and percent.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub compressor_temp_k: f64,
    pub combustor_temp_k: f64,
    pub turbine_exit_temp_k: f64,
    pub exhaust_velocity_mps: f64,
    pub net_thrust_n: f64,
    pub net_thrust_kn: f64,
    pub fuel_flow_kg_s: f64,
    /// `None` when the engine makes no net thrust
    pub tsfc_mg_per_n_s: Option<f64>,
    pub thermal_efficiency_pct: f64,
    pub propulsive_efficiency_pct: f64,
    pub overall_efficiency_pct: f64,
    pub specific_impulse_s: f64,
}

impl Summary {
    pub fn from_result(result: &SimulationResult) -> Self {
        let pct = |x: f64| unitless(x).get::<percent>();
        let tsfc = result
            .tsfc
            .is_finite()
            .then(|| Mass::new::<kilogram>(result.tsfc).get::<milligram>());

        Self {
            compressor_temp_k: result.compressor_temp,
            combustor_temp_k: result.combustor_temp,
            turbine_exit_temp_k: result.turbine_exit_temp,
            exhaust_velocity_mps: result.exhaust_velocity,
            net_thrust_n: result.net_thrust,
            net_thrust_kn: n(result.net_thrust).get::<kilonewton>(),
            fuel_flow_kg_s: result.fuel_flow_rate,
            tsfc_mg_per_n_s: tsfc,
            thermal_efficiency_pct: pct(result.thermal_efficiency),
            propulsive_efficiency_pct: pct(result.propulsive_efficiency),
            overall_efficiency_pct: pct(result.overall_efficiency),
            specific_impulse_s: result.specific_impulse,
        }
    }

    pub fn tsfc_display(&self) -> String {
        match self.tsfc_mg_per_n_s {
            Some(v) => format!("{v:.2}"),
            None => "inf".to_string(),
        }
    }
}

/// Multi-line block of one result under a `=== title ===` heading.
pub fn render_text(title: &str, result: &SimulationResult) -> String {
    let s = Summary::from_result(result);
    let mut out = format!("=== {title} ===\n");
    out.push_str(&format!("Compressor Temp: {:.2} K\n", s.compressor_temp_k));
    out.push_str(&format!("Combustor Temp: {:.2} K\n", s.combustor_temp_k));
    out.push_str(&format!(
        "Turbine/Nozzle Exit Temp: {:.2} K\n",
        s.turbine_exit_temp_k
    ));
    out.push_str(&format!("Exhaust Velocity: {:.2} m/s\n", s.exhaust_velocity_mps));
    out.push_str(&format!("Thrust: {:.2} N\n", s.net_thrust_n));
    out.push_str(&format!("Fuel Flow Rate: {:.4} kg/s\n", s.fuel_flow_kg_s));
    out.push_str(&format!("TSFC: {} mg/N·s\n", s.tsfc_display()));
    out.push_str(&format!(
        "Thermal Efficiency: {:.2} %\n",
        s.thermal_efficiency_pct
    ));
    out.push_str(&format!(
        "Propulsive Efficiency: {:.2} %\n",
        s.propulsive_efficiency_pct
    ));
    out.push_str(&format!(
        "Overall Efficiency: {:.2} %\n",
        s.overall_efficiency_pct
    ));
    out.push_str(&format!(
        "Specific Impulse (Isp): {:.2} s\n",
        s.specific_impulse_s
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tj_cycle::{EngineCycle, EngineParameters};

    #[test]
    fn converts_to_display_units() {
        let r = EngineCycle::new(EngineParameters {
            flight_speed: 250.0,
            ..EngineParameters::default()
        })
        .simulate();
        let s = Summary::from_result(&r);

        assert!((s.net_thrust_kn - r.net_thrust / 1_000.0).abs() < 1e-9);
        let tsfc = s.tsfc_mg_per_n_s.unwrap();
        assert!((tsfc - r.tsfc * 1e6).abs() < 1e-9);
        assert!((s.overall_efficiency_pct - r.overall_efficiency * 100.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_tsfc_renders_as_inf() {
        let r = EngineCycle::new(EngineParameters {
            flight_speed: 3_000.0,
            ..EngineParameters::default()
        })
        .simulate();
        let s = Summary::from_result(&r);
        assert_eq!(s.tsfc_mg_per_n_s, None);

        let text = render_text("Drag bound", &r);
        assert!(text.starts_with("=== Drag bound ===\n"));
        assert!(text.contains("TSFC: inf mg/N·s"));
        assert!(text.contains("Thrust: 0.00 N"));
    }
}
