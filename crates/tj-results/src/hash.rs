//! Content-based hashing for run IDs.

use sha2::{Digest, Sha256};
use tj_project::EngineConfig;

/// SHA-256 over the config JSON and the model version, as lowercase hex.
pub fn compute_run_id(config: &EngineConfig, model_version: &str) -> String {
    let mut hasher = Sha256::new();

    let config_json = serde_json::to_string(config).unwrap_or_default();
    hasher.update(config_json.as_bytes());

    hasher.update(model_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}
