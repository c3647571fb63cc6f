//! Run storage API.
//!
//! One directory per run id under the store root, holding `manifest.json`
//! and `result.json`.

use crate::types::{RunManifest, RunSummary};
use crate::{ResultsError, ResultsResult};
use std::fs;
use std::path::{Path, PathBuf};
use tj_cycle::SimulationResult;

const MANIFEST_FILE: &str = "manifest.json";
const RESULT_FILE: &str = "result.json";

#[derive(Debug, Clone)]
pub struct RunStore {
    root_dir: PathBuf,
}

impl RunStore {
    pub fn new(root_dir: PathBuf) -> ResultsResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    /// Store next to a configuration file, in `.turbojet/runs`.
    pub fn for_config(config_path: &Path) -> ResultsResult<Self> {
        let config_dir = config_path
            .parent()
            .ok_or_else(|| ResultsError::InvalidPath {
                message: "config path has no parent directory".to_string(),
            })?;
        Self::new(config_dir.join(".turbojet").join("runs"))
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    fn run_dir(&self, run_id: &str) -> PathBuf {
        self.root_dir.join(run_id)
    }

    pub fn has_run(&self, run_id: &str) -> bool {
        let dir = self.run_dir(run_id);
        dir.join(MANIFEST_FILE).exists() && dir.join(RESULT_FILE).exists()
    }

    pub fn save_run(&self, manifest: &RunManifest, result: &SimulationResult) -> ResultsResult<()> {
        let run_dir = self.run_dir(&manifest.run_id);
        fs::create_dir_all(&run_dir)?;

        let manifest_json = serde_json::to_string_pretty(manifest)?;
        fs::write(run_dir.join(MANIFEST_FILE), manifest_json)?;

        let result_json = serde_json::to_string_pretty(result)?;
        fs::write(run_dir.join(RESULT_FILE), result_json)?;

        Ok(())
    }

    pub fn load_manifest(&self, run_id: &str) -> ResultsResult<RunManifest> {
        let manifest_path = self.run_dir(run_id).join(MANIFEST_FILE);

        if !manifest_path.exists() {
            return Err(ResultsError::RunNotFound {
                run_id: run_id.to_string(),
            });
        }

        let content = fs::read_to_string(manifest_path)?;
        let manifest = serde_json::from_str(&content)?;
        Ok(manifest)
    }

    pub fn load_result(&self, run_id: &str) -> ResultsResult<SimulationResult> {
        let result_path = self.run_dir(run_id).join(RESULT_FILE);

        if !result_path.exists() {
            return Err(ResultsError::RunNotFound {
                run_id: run_id.to_string(),
            });
        }

        let content = fs::read_to_string(result_path)?;
        let result = serde_json::from_str(&content)?;
        Ok(result)
    }

    /// Manifests of every readable run, newest first.
    pub fn list_runs(&self) -> ResultsResult<Vec<RunManifest>> {
        let mut runs = Vec::new();

        if !self.root_dir.exists() {
            return Ok(runs);
        }

        for entry in fs::read_dir(&self.root_dir)? {
            let entry = entry?;
            if entry.path().is_dir() {
                let run_id = entry.file_name().to_string_lossy().to_string();
                if let Ok(manifest) = self.load_manifest(&run_id) {
                    runs.push(manifest);
                }
            }
        }

        runs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(runs)
    }

    /// Listing rows for runs whose result is also readable.
    pub fn summaries(&self) -> ResultsResult<Vec<RunSummary>> {
        let mut rows = Vec::new();
        for manifest in self.list_runs()? {
            if let Ok(result) = self.load_result(&manifest.run_id) {
                rows.push(RunSummary::new(&manifest, &result));
            }
        }
        Ok(rows)
    }

    pub fn delete_run(&self, run_id: &str) -> ResultsResult<()> {
        let run_dir = self.run_dir(run_id);
        if run_dir.exists() {
            fs::remove_dir_all(run_dir)?;
        }
        Ok(())
    }
}
