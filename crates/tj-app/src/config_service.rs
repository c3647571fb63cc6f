//! Config loading, saving, validation and preset lookup.

use std::path::{Path, PathBuf};

use tj_project::{EngineConfig, presets};

use crate::error::{AppError, AppResult};

/// Where a run's configuration comes from.
#[derive(Debug, Clone)]
pub enum ConfigSource {
    /// A `.json`, `.yaml` or `.yml` file
    Path(PathBuf),
    /// One of the named presets
    Preset(String),
    Inline(EngineConfig),
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Path(p) => Some(p),
            _ => None,
        }
    }
}

/// Summary of a preset for listing.
#[derive(Debug, Clone)]
pub struct PresetSummary {
    pub name: String,
    pub altitude_m: f64,
    pub flight_speed_mps: f64,
    pub compression_ratio: f64,
    pub afterburner: bool,
}

pub fn load_config(path: &Path) -> AppResult<EngineConfig> {
    Ok(tj_project::load_path(path)?)
}

pub fn save_config(path: &Path, config: &EngineConfig) -> AppResult<()> {
    Ok(tj_project::save_path(path, config)?)
}

pub fn validate_config(config: &EngineConfig) -> AppResult<()> {
    Ok(tj_project::validate_config(config)?)
}

/// Resolve a source to a configuration. Inline configs are validated here;
/// files are validated on load.
pub fn resolve_config(source: &ConfigSource) -> AppResult<EngineConfig> {
    match source {
        ConfigSource::Path(path) => load_config(path),
        ConfigSource::Preset(name) => Ok(presets::get_preset(name)?),
        ConfigSource::Inline(config) => {
            validate_config(config)?;
            Ok(config.clone())
        }
    }
}

/// Write a starter config, from a preset or the reference engine. Never
/// overwrites an existing file.
pub fn init_config(path: &Path, preset: Option<&str>) -> AppResult<EngineConfig> {
    if path.exists() {
        return Err(AppError::InvalidInput(format!(
            "{} already exists",
            path.display()
        )));
    }

    let config = match preset {
        Some(name) => presets::get_preset(name)?,
        None => EngineConfig::default(),
    };

    tj_project::save_path(path, &config).map_err(|e| match e {
        tj_project::ProjectError::Io(source) => AppError::ConfigFileWrite {
            path: path.to_path_buf(),
            source,
        },
        other => other.into(),
    })?;

    Ok(config)
}

pub fn list_presets() -> Vec<PresetSummary> {
    presets::PRESET_NAMES
        .iter()
        .filter_map(|name| presets::get_preset(name).ok())
        .map(|config| PresetSummary {
            altitude_m: config.altitude,
            flight_speed_mps: config.flight_speed,
            compression_ratio: config.compression_ratio,
            afterburner: config.use_afterburner,
            name: config.name,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_source_resolves() {
        let config = resolve_config(&ConfigSource::Preset("regional_jet".to_string())).unwrap();
        assert_eq!(config.altitude, 25_000.0);
    }

    #[test]
    fn unknown_preset_is_config_error() {
        let err = resolve_config(&ConfigSource::Preset("zeppelin".to_string())).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("Available"));
    }

    #[test]
    fn invalid_inline_is_validation_error() {
        let config = EngineConfig {
            eta_comp: 1.5,
            ..EngineConfig::default()
        };
        let err = resolve_config(&ConfigSource::Inline(config)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn presets_are_listed_in_order() {
        let names: Vec<String> = list_presets().into_iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec![
                "civil_airliner",
                "military_fighter",
                "supersonic_transport",
                "regional_jet"
            ]
        );
    }
}
