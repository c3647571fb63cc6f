//! Shared application service layer for the turbojet simulator.
//!
//! Front-ends (the CLI and the benchmark runner) go through this crate for
//! config resolution, run execution and storage, parameter sweeps,
//! optimization and result formatting.

pub mod config_service;
pub mod error;
pub mod optimize;
pub mod parameters;
pub mod progress;
pub mod report;
pub mod run_service;
pub mod sweep;

// Re-export key types for convenience
pub use config_service::{ConfigSource, PresetSummary, init_config, list_presets, load_config};
pub use error::{AppError, AppResult};
pub use optimize::{Objective, OptimizationOutcome, OptimizerSettings, optimize};
pub use parameters::{ConfigOverrides, build_parameters};
pub use progress::{RunProgressEvent, RunStage};
pub use run_service::{
    PresetComparison, RunOptions, RunRequest, RunResponse, compare_presets, ensure_run,
    list_runs, load_run,
};
pub use sweep::{SweepDefinition, SweepParameter, SweepResult, SweepType, execute_sweep};
