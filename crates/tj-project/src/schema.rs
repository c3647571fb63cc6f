//! Engine configuration file format.

use serde::{Deserialize, Serialize};

fn default_name() -> String {
    "custom".to_string()
}

/// One engine design and operating point as stored on disk.
///
/// Every field has a default, so a file may list only what differs from the
/// reference engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub name: String,

    /// Flight altitude [m]
    pub altitude: f64,

    pub compression_ratio: f64,
    /// [m²]
    pub frontal_area: f64,

    /// Fuel lower heating value [J/kg]
    pub fuel_energy: f64,
    /// Primary combustion fuel-air ratio
    pub fuel_air_ratio: f64,

    pub eta_comp: f64,
    pub eta_turb: f64,
    pub mechanical_eff: f64,
    pub nozzle_eff: f64,

    /// [m/s]
    pub flight_speed: f64,

    pub use_afterburner: bool,
    pub afterburner_fuel_fraction: f64,

    pub drag_coefficient: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            altitude: 10_000.0,
            compression_ratio: 10.0,
            frontal_area: 0.9,
            fuel_energy: 43.0e6,
            fuel_air_ratio: 0.045,
            eta_comp: 0.85,
            eta_turb: 0.85,
            mechanical_eff: 0.9,
            nozzle_eff: 0.9,
            flight_speed: 1_000.0,
            use_afterburner: false,
            afterburner_fuel_fraction: 0.03,
            drag_coefficient: 0.01,
        }
    }
}

impl EngineConfig {
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Numeric fields as `(field, value)` pairs, in file order.
    pub fn numeric_fields(&self) -> [(&'static str, f64); 12] {
        [
            ("altitude", self.altitude),
            ("compression_ratio", self.compression_ratio),
            ("frontal_area", self.frontal_area),
            ("fuel_energy", self.fuel_energy),
            ("fuel_air_ratio", self.fuel_air_ratio),
            ("eta_comp", self.eta_comp),
            ("eta_turb", self.eta_turb),
            ("mechanical_eff", self.mechanical_eff),
            ("nozzle_eff", self.nozzle_eff),
            ("flight_speed", self.flight_speed),
            ("afterburner_fuel_fraction", self.afterburner_fuel_fraction),
            ("drag_coefficient", self.drag_coefficient),
        ]
    }
}
