//! tj-project: engine configuration file format, validation and presets.

pub mod presets;
pub mod schema;
pub mod validate;

use std::path::Path;

pub use presets::{get_preset, list_presets};
pub use schema::EngineConfig;
pub use validate::{ValidationError, validate_config};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unknown preset '{name}'. Available: {available}")]
    UnknownPreset { name: String, available: String },

    #[error("Unsupported file extension: {path}")]
    UnsupportedFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &Path) -> ProjectResult<EngineConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: EngineConfig = serde_yaml::from_str(&content)?;
    validate_config(&config)?;
    Ok(config)
}

pub fn save_yaml(path: &Path, config: &EngineConfig) -> ProjectResult<()> {
    validate_config(config)?;
    let content = serde_yaml::to_string(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<EngineConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: EngineConfig = serde_json::from_str(&content)?;
    validate_config(&config)?;
    Ok(config)
}

pub fn save_json(path: &Path, config: &EngineConfig) -> ProjectResult<()> {
    validate_config(config)?;
    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

enum Format {
    Json,
    Yaml,
}

fn format_of(path: &Path) -> ProjectResult<Format> {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("json") => Ok(Format::Json),
        Some("yaml") | Some("yml") => Ok(Format::Yaml),
        _ => Err(ProjectError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}

/// Load a `.json`, `.yaml` or `.yml` configuration.
pub fn load_path(path: &Path) -> ProjectResult<EngineConfig> {
    match format_of(path)? {
        Format::Json => load_json(path),
        Format::Yaml => load_yaml(path),
    }
}

pub fn save_path(path: &Path, config: &EngineConfig) -> ProjectResult<()> {
    match format_of(path)? {
        Format::Json => save_json(path, config),
        Format::Yaml => save_yaml(path, config),
    }
}
