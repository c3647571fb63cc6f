//! Named reference engines.

use crate::schema::EngineConfig;
use crate::{ProjectError, ProjectResult};

pub const PRESET_NAMES: [&str; 4] = [
    "civil_airliner",
    "military_fighter",
    "supersonic_transport",
    "regional_jet",
];

/// High-bypass-class cruise at about Mach 0.8.
pub fn civil_airliner() -> EngineConfig {
    EngineConfig {
        altitude: 35_000.0,
        compression_ratio: 25.0,
        flight_speed: 250.0,
        eta_comp: 0.90,
        eta_turb: 0.88,
        fuel_air_ratio: 0.042,
        use_afterburner: false,
        ..EngineConfig::default()
    }
    .named("civil_airliner")
}

/// Reheated dash at about Mach 1.8.
pub fn military_fighter() -> EngineConfig {
    EngineConfig {
        altitude: 15_000.0,
        compression_ratio: 20.0,
        flight_speed: 600.0,
        eta_comp: 0.85,
        eta_turb: 0.85,
        fuel_air_ratio: 0.048,
        use_afterburner: true,
        afterburner_fuel_fraction: 0.04,
        ..EngineConfig::default()
    }
    .named("military_fighter")
}

/// Mach 2 cruise near the ceiling.
pub fn supersonic_transport() -> EngineConfig {
    EngineConfig {
        altitude: 50_000.0,
        compression_ratio: 15.0,
        flight_speed: 650.0,
        eta_comp: 0.82,
        eta_turb: 0.84,
        fuel_air_ratio: 0.045,
        use_afterburner: true,
        afterburner_fuel_fraction: 0.02,
        ..EngineConfig::default()
    }
    .named("supersonic_transport")
}

pub fn regional_jet() -> EngineConfig {
    EngineConfig {
        altitude: 25_000.0,
        compression_ratio: 18.0,
        flight_speed: 200.0,
        eta_comp: 0.88,
        eta_turb: 0.86,
        fuel_air_ratio: 0.040,
        use_afterburner: false,
        ..EngineConfig::default()
    }
    .named("regional_jet")
}

pub fn list_presets() -> Vec<&'static str> {
    PRESET_NAMES.to_vec()
}

pub fn get_preset(name: &str) -> ProjectResult<EngineConfig> {
    match name {
        "civil_airliner" => Ok(civil_airliner()),
        "military_fighter" => Ok(military_fighter()),
        "supersonic_transport" => Ok(supersonic_transport()),
        "regional_jet" => Ok(regional_jet()),
        other => Err(ProjectError::UnknownPreset {
            name: other.to_string(),
            available: PRESET_NAMES.join(", "),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate_config;

    #[test]
    fn every_listed_preset_resolves_and_validates() {
        for name in list_presets() {
            let config = get_preset(name).unwrap();
            assert_eq!(config.name, name);
            validate_config(&config).unwrap();
        }
    }

    #[test]
    fn unknown_preset_lists_alternatives() {
        let err = get_preset("glider").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("glider"));
        assert!(msg.contains("civil_airliner, military_fighter"));
    }

    #[test]
    fn afterburner_presets() {
        assert!(military_fighter().use_afterburner);
        assert!(supersonic_transport().use_afterburner);
        assert!(!civil_airliner().use_afterburner);
        assert!(!regional_jet().use_afterburner);
    }
}
