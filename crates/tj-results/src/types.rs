//! Stored run records.

use serde::{Deserialize, Serialize};
use tj_cycle::SimulationResult;
use tj_project::EngineConfig;

pub type RunId = String;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunManifest {
    pub run_id: RunId,
    pub config_name: String,
    /// UTC, RFC 3339
    pub timestamp: String,
    pub model_version: String,
    pub config: EngineConfig,
}

impl RunManifest {
    /// Manifest stamped with the current UTC time.
    pub fn new(run_id: RunId, config: &EngineConfig, model_version: &str) -> Self {
        Self {
            run_id,
            config_name: config.name.clone(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            model_version: model_version.to_string(),
            config: config.clone(),
        }
    }
}

/// Headline numbers of a stored run, for listings.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub run_id: RunId,
    pub config_name: String,
    pub timestamp: String,
    pub net_thrust_n: f64,
    pub tsfc: f64,
    pub afterburner: bool,
}

impl RunSummary {
    pub fn new(manifest: &RunManifest, result: &SimulationResult) -> Self {
        Self {
            run_id: manifest.run_id.clone(),
            config_name: manifest.config_name.clone(),
            timestamp: manifest.timestamp.clone(),
            net_thrust_n: result.net_thrust,
            tsfc: result.tsfc,
            afterburner: manifest.config.use_afterburner,
        }
    }
}
