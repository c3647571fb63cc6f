//! Config-to-model conversion and command-line style overrides.

use tj_cycle::EngineParameters;
use tj_project::EngineConfig;

/// Map a stored configuration onto cycle inputs.
pub fn build_parameters(config: &EngineConfig) -> EngineParameters {
    EngineParameters {
        altitude: config.altitude,
        compression_ratio: config.compression_ratio,
        fuel_energy: config.fuel_energy,
        compressor_efficiency: config.eta_comp,
        turbine_efficiency: config.eta_turb,
        mechanical_efficiency: config.mechanical_eff,
        nozzle_efficiency: config.nozzle_eff,
        flight_speed: config.flight_speed,
        fuel_air_ratio: config.fuel_air_ratio,
        afterburner_enabled: config.use_afterburner,
        afterburner_fuel_fraction: config.afterburner_fuel_fraction,
        drag_coefficient: config.drag_coefficient,
        frontal_area: config.frontal_area,
    }
}

/// Individual values to replace in a resolved configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub altitude: Option<f64>,
    pub compression_ratio: Option<f64>,
    pub flight_speed: Option<f64>,
    pub fuel_air_ratio: Option<f64>,
    pub eta_comp: Option<f64>,
    pub eta_turb: Option<f64>,
    pub mechanical_eff: Option<f64>,
    pub nozzle_eff: Option<f64>,
    pub afterburner: Option<bool>,
    pub afterburner_fuel_fraction: Option<f64>,
}

impl ConfigOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(&self, config: &mut EngineConfig) {
        fn set(slot: &mut f64, value: Option<f64>) {
            if let Some(v) = value {
                *slot = v;
            }
        }

        set(&mut config.altitude, self.altitude);
        set(&mut config.compression_ratio, self.compression_ratio);
        set(&mut config.flight_speed, self.flight_speed);
        set(&mut config.fuel_air_ratio, self.fuel_air_ratio);
        set(&mut config.eta_comp, self.eta_comp);
        set(&mut config.eta_turb, self.eta_turb);
        set(&mut config.mechanical_eff, self.mechanical_eff);
        set(&mut config.nozzle_eff, self.nozzle_eff);
        set(
            &mut config.afterburner_fuel_fraction,
            self.afterburner_fuel_fraction,
        );
        if let Some(on) = self.afterburner {
            config.use_afterburner = on;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tj_project::presets;

    #[test]
    fn build_maps_every_field() {
        let config = presets::military_fighter();
        let p = build_parameters(&config);
        assert_eq!(p.altitude, 15_000.0);
        assert_eq!(p.compression_ratio, 20.0);
        assert_eq!(p.compressor_efficiency, config.eta_comp);
        assert_eq!(p.turbine_efficiency, config.eta_turb);
        assert_eq!(p.mechanical_efficiency, config.mechanical_eff);
        assert_eq!(p.nozzle_efficiency, config.nozzle_eff);
        assert_eq!(p.flight_speed, 600.0);
        assert!(p.afterburner_enabled);
        assert_eq!(p.afterburner_fuel_fraction, 0.04);
        assert_eq!(p.frontal_area, config.frontal_area);
    }

    #[test]
    fn default_config_matches_default_parameters() {
        assert_eq!(
            build_parameters(&EngineConfig::default()),
            EngineParameters::default()
        );
    }

    #[test]
    fn overrides_touch_only_what_is_set() {
        let overrides = ConfigOverrides {
            flight_speed: Some(250.0),
            afterburner: Some(true),
            ..ConfigOverrides::default()
        };
        assert!(!overrides.is_empty());

        let mut config = EngineConfig::default();
        overrides.apply(&mut config);

        assert_eq!(config.flight_speed, 250.0);
        assert!(config.use_afterburner);
        assert_eq!(config.altitude, 10_000.0);
        assert!(ConfigOverrides::default().is_empty());
    }
}
