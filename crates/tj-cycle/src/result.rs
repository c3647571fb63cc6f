//! Simulation output records.

use serde::{Deserialize, Serialize};
use tj_core::Real;

/// Temperatures along the gas path [K].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CycleStationTemperatures {
    /// Ambient / inlet
    pub t0: Real,
    /// Compressor exit
    pub t2: Real,
    /// Combustor exit
    pub t3: Real,
    /// Turbine exit
    pub t4: Real,
    /// Afterburner exit, when lit
    pub t5: Option<Real>,
}

impl CycleStationTemperatures {
    /// Temperature entering the nozzle.
    pub fn nozzle_inlet(&self) -> Real {
        self.t5.unwrap_or(self.t4)
    }

    /// True when each stage moves temperature the expected way:
    /// T2 > T0, T3 > T2, T4 < T3 and, with reheat, T5 > T4.
    pub fn is_ordered(&self) -> bool {
        let core = self.t2 > self.t0 && self.t3 > self.t2 && self.t4 < self.t3;
        match self.t5 {
            Some(t5) => core && t5 > self.t4,
            None => core,
        }
    }
}

/// Performance of one operating point, in SI base units.
///
/// Created fresh by every [`crate::EngineCycle::simulate`] call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Station temperatures including ambient and turbine exit
    pub stations: CycleStationTemperatures,
    /// T2 [K]
    pub compressor_temp: Real,
    /// T3 [K]
    pub combustor_temp: Real,
    /// T5 with afterburner, T4 otherwise [K]
    pub turbine_exit_temp: Real,
    /// Nozzle exit velocity [m/s]
    pub exhaust_velocity: Real,
    /// Net thrust [N], clamped to 0 when non-positive
    pub net_thrust: Real,
    /// Total fuel mass flow [kg/s]
    pub fuel_flow_rate: Real,
    /// Thrust specific fuel consumption [kg/(N·s)], `+∞` when thrust is 0
    #[serde(with = "tsfc_serde")]
    pub tsfc: Real,
    pub thermal_efficiency: Real,
    pub propulsive_efficiency: Real,
    /// Always exactly `thermal_efficiency * propulsive_efficiency`
    pub overall_efficiency: Real,
    /// Specific impulse [s], 0 when thrust is 0
    pub specific_impulse: Real,
    /// Captured air mass flow `rho * V0 * A` [kg/s]
    pub mass_flow_rate: Real,
    /// Momentum thrust before nacelle drag [N]
    pub gross_thrust: Real,
    /// Nacelle drag [N]
    pub drag: Real,
}

impl SimulationResult {
    /// Engine is not producing net thrust.
    pub fn is_degenerate(&self) -> bool {
        self.net_thrust == 0.0 && self.tsfc == Real::INFINITY
    }

    /// Every value is finite, apart from TSFC in the degenerate state.
    ///
    /// False when the inputs pushed the cycle outside its physical domain,
    /// e.g. a turbine drop larger than `T3 - T0` leaves the nozzle with a
    /// negative temperature difference and a NaN exhaust velocity.
    pub fn is_physical(&self) -> bool {
        let s = &self.stations;
        let values = [
            s.t0,
            s.t2,
            s.t3,
            s.t4,
            s.t5.unwrap_or(s.t4),
            self.compressor_temp,
            self.combustor_temp,
            self.turbine_exit_temp,
            self.exhaust_velocity,
            self.net_thrust,
            self.fuel_flow_rate,
            self.thermal_efficiency,
            self.propulsive_efficiency,
            self.overall_efficiency,
            self.specific_impulse,
            self.mass_flow_rate,
            self.gross_thrust,
            self.drag,
        ];
        values.iter().all(|v| v.is_finite()) && (self.tsfc.is_finite() || self.is_degenerate())
    }
}

/// JSON has no infinity: write non-finite TSFC as `null`, read `null` back as `+∞`.
mod tsfc_serde {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_some(value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}
