//! Range checks for engine configurations.

use tj_core::{TjError, ensure_finite, ensure_in_range};

use crate::schema::EngineConfig;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

fn invalid(field: &str, value: f64, reason: impl Into<String>) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

impl From<TjError> for ValidationError {
    fn from(err: TjError) -> Self {
        match err {
            TjError::NonFinite { what, value } => invalid(what, value, "must be finite"),
            TjError::OutOfRange {
                what,
                value,
                min,
                max,
            } => invalid(what, value, format!("outside valid range [{min}, {max}]")),
        }
    }
}

fn check_closed(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), ValidationError> {
    ensure_in_range(value, min, max, field)?;
    Ok(())
}

fn check_efficiency(field: &str, value: f64) -> Result<(), ValidationError> {
    if value <= 0.0 || value > 1.0 {
        return Err(invalid(field, value, "must be in (0, 1]"));
    }
    Ok(())
}

/// Reject configurations outside their physical ranges.
///
/// The cycle itself never fails on bad inputs, so this is the only gate
/// between a file and a simulation.
pub fn validate_config(config: &EngineConfig) -> Result<(), ValidationError> {
    for (field, value) in config.numeric_fields() {
        ensure_finite(value, field)?;
    }

    check_closed("altitude", config.altitude, -500.0, 50_000.0)?;
    check_closed("compression_ratio", config.compression_ratio, 1.0, 100.0)?;
    check_closed("eta_comp", config.eta_comp, 0.1, 1.0)?;
    check_closed("eta_turb", config.eta_turb, 0.1, 1.0)?;
    check_efficiency("mechanical_eff", config.mechanical_eff)?;
    check_efficiency("nozzle_eff", config.nozzle_eff)?;
    check_closed("fuel_air_ratio", config.fuel_air_ratio, 0.01, 0.1)?;
    check_closed("flight_speed", config.flight_speed, 0.0, 3_000.0)?;
    check_closed(
        "afterburner_fuel_fraction",
        config.afterburner_fuel_fraction,
        0.0,
        0.2,
    )?;

    if config.fuel_energy <= 0.0 {
        return Err(invalid("fuel_energy", config.fuel_energy, "must be positive"));
    }
    if config.frontal_area <= 0.0 {
        return Err(invalid("frontal_area", config.frontal_area, "must be positive"));
    }
    if config.drag_coefficient < 0.0 {
        return Err(invalid(
            "drag_coefficient",
            config.drag_coefficient,
            "must be non-negative",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: ValidationError) -> String {
        let ValidationError::InvalidValue { field, .. } = err;
        field
    }

    #[test]
    fn default_config_is_valid() {
        validate_config(&EngineConfig::default()).unwrap();
    }

    #[test]
    fn range_edges_are_inclusive() {
        let config = EngineConfig {
            altitude: -500.0,
            compression_ratio: 1.0,
            eta_comp: 0.1,
            eta_turb: 1.0,
            fuel_air_ratio: 0.1,
            flight_speed: 0.0,
            afterburner_fuel_fraction: 0.2,
            drag_coefficient: 0.0,
            ..EngineConfig::default()
        };
        validate_config(&config).unwrap();
    }

    #[test]
    fn reports_offending_field() {
        let cases = [
            (
                EngineConfig {
                    altitude: 50_001.0,
                    ..EngineConfig::default()
                },
                "altitude",
            ),
            (
                EngineConfig {
                    compression_ratio: 0.5,
                    ..EngineConfig::default()
                },
                "compression_ratio",
            ),
            (
                EngineConfig {
                    eta_comp: 0.05,
                    ..EngineConfig::default()
                },
                "eta_comp",
            ),
            (
                EngineConfig {
                    nozzle_eff: 0.0,
                    ..EngineConfig::default()
                },
                "nozzle_eff",
            ),
            (
                EngineConfig {
                    fuel_air_ratio: 0.005,
                    ..EngineConfig::default()
                },
                "fuel_air_ratio",
            ),
            (
                EngineConfig {
                    flight_speed: -1.0,
                    ..EngineConfig::default()
                },
                "flight_speed",
            ),
            (
                EngineConfig {
                    afterburner_fuel_fraction: 0.3,
                    ..EngineConfig::default()
                },
                "afterburner_fuel_fraction",
            ),
            (
                EngineConfig {
                    frontal_area: 0.0,
                    ..EngineConfig::default()
                },
                "frontal_area",
            ),
            (
                EngineConfig {
                    drag_coefficient: -0.1,
                    ..EngineConfig::default()
                },
                "drag_coefficient",
            ),
        ];

        for (config, expected) in cases {
            let err = validate_config(&config).unwrap_err();
            assert_eq!(field_of(err), expected);
        }
    }

    #[test]
    fn nan_is_rejected_as_non_finite() {
        let config = EngineConfig {
            fuel_energy: f64::NAN,
            ..EngineConfig::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("must be finite"));
    }
}
