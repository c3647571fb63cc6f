//! Run execution and result store service.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tj_core::timing::{PerfStats, cycle_timing};
use tj_cycle::{EngineCycle, MODEL_VERSION, SimulationResult};
use tj_project::{EngineConfig, presets};
use tj_results::{RunManifest, RunStore};
use tracing::{debug, info};

use crate::config_service::{self, ConfigSource};
use crate::error::{AppError, AppResult};
use crate::parameters::{ConfigOverrides, build_parameters};
use crate::progress::{RunProgressEvent, RunStage};

/// Options for running simulations.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Save the result and reuse an identical stored run when present
    pub persist: bool,
    /// Store root; defaults to `.turbojet/runs` next to a config file, or
    /// in the working directory otherwise
    pub store_dir: Option<PathBuf>,
}

/// Request to execute a run.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub source: ConfigSource,
    pub overrides: ConfigOverrides,
    pub options: RunOptions,
}

impl RunRequest {
    pub fn new(source: ConfigSource) -> Self {
        Self {
            source,
            overrides: ConfigOverrides::default(),
            options: RunOptions::default(),
        }
    }
}

/// Response from a run execution.
#[derive(Debug, Clone)]
pub struct RunResponse {
    pub run_id: String,
    /// Configuration after overrides
    pub config: EngineConfig,
    pub result: SimulationResult,
    pub flight_mach: f64,
    pub loaded_from_store: bool,
    pub timing: PerfStats,
}

fn emit_progress(
    progress_cb: &mut Option<&mut dyn FnMut(RunProgressEvent)>,
    stage: RunStage,
    started: Instant,
    message: &str,
) {
    if let Some(cb) = progress_cb.as_deref_mut() {
        cb(RunProgressEvent::stage(
            stage,
            started.elapsed().as_secs_f64(),
            Some(message.to_string()),
        ));
    }
}

/// Store root used when none is given.
pub fn default_store_dir() -> PathBuf {
    PathBuf::from(".turbojet").join("runs")
}

fn open_store(request: &RunRequest) -> AppResult<RunStore> {
    let store = match (&request.options.store_dir, request.source.path()) {
        (Some(dir), _) => RunStore::new(dir.clone())?,
        (None, Some(path)) => RunStore::for_config(path)?,
        (None, None) => RunStore::new(default_store_dir())?,
    };
    Ok(store)
}

/// Reject results carrying NaN or infinities outside the degenerate state.
///
/// Range validation cannot catch every combination: a compressor demand
/// larger than the combustor delivers leaves T4 below ambient.
pub fn ensure_physical(config: &EngineConfig, result: &SimulationResult) -> AppResult<()> {
    if result.is_physical() {
        return Ok(());
    }
    let s = &result.stations;
    let reason = if s.nozzle_inlet() < s.t0 {
        format!(
            "nozzle inlet temperature {:.1} K is below ambient {:.1} K",
            s.nozzle_inlet(),
            s.t0
        )
    } else {
        "cycle produced non-finite values".to_string()
    };
    Err(AppError::NonPhysical {
        config: config.name.clone(),
        reason,
    })
}

/// Validate, build and simulate one configuration.
pub fn simulate_config(config: &EngineConfig) -> AppResult<SimulationResult> {
    config_service::validate_config(config)?;
    let started = Instant::now();
    let result = EngineCycle::new(build_parameters(config)).simulate();
    cycle_timing::SIMULATE_CALLS.record(started.elapsed().as_secs_f64());
    ensure_physical(config, &result)?;
    Ok(result)
}

/// Execute or load a run based on request.
pub fn ensure_run(request: &RunRequest) -> AppResult<RunResponse> {
    ensure_run_with_progress(request, None)
}

/// Execute or load a run and report each stage.
pub fn ensure_run_with_progress(
    request: &RunRequest,
    mut progress_cb: Option<&mut dyn FnMut(RunProgressEvent)>,
) -> AppResult<RunResponse> {
    let started = Instant::now();
    let mut timing = PerfStats::default();

    emit_progress(
        &mut progress_cb,
        RunStage::ResolvingConfig,
        started,
        "Resolving configuration",
    );

    let load_started = Instant::now();
    let mut config = config_service::resolve_config(&request.source)?;
    request.overrides.apply(&mut config);
    timing.load_time_s = load_started.elapsed().as_secs_f64();

    let validate_started = Instant::now();
    config_service::validate_config(&config)?;
    timing.validate_time_s = validate_started.elapsed().as_secs_f64();

    let run_id = tj_results::compute_run_id(&config, MODEL_VERSION);
    let cycle = EngineCycle::new(build_parameters(&config));
    let flight_mach = cycle.flight_mach();

    let store = if request.options.persist {
        Some(open_store(request)?)
    } else {
        None
    };

    if let Some(store) = &store {
        emit_progress(
            &mut progress_cb,
            RunStage::CheckingStore,
            started,
            "Checking run store",
        );

        if store.has_run(&run_id) {
            emit_progress(
                &mut progress_cb,
                RunStage::LoadingStoredResult,
                started,
                "Loading stored run",
            );

            let load_started = Instant::now();
            let result = store.load_result(&run_id)?;
            timing.load_time_s += load_started.elapsed().as_secs_f64();

            info!(run_id = %run_id, config = %config.name, "loaded stored run");
            emit_progress(
                &mut progress_cb,
                RunStage::Completed,
                started,
                "Loaded stored run",
            );

            return Ok(RunResponse {
                run_id,
                config,
                result,
                flight_mach,
                loaded_from_store: true,
                timing,
            });
        }
    }

    emit_progress(&mut progress_cb, RunStage::Simulating, started, "Simulating cycle");
    let simulate_started = Instant::now();
    let result = cycle.simulate();
    timing.simulate_time_s = simulate_started.elapsed().as_secs_f64();
    cycle_timing::SIMULATE_CALLS.record(timing.simulate_time_s);
    ensure_physical(&config, &result)?;

    debug!(
        net_thrust_n = result.net_thrust,
        tsfc = result.tsfc,
        degenerate = result.is_degenerate(),
        "cycle simulated"
    );

    if let Some(store) = &store {
        emit_progress(
            &mut progress_cb,
            RunStage::SavingResults,
            started,
            "Saving run output",
        );
        let save_started = Instant::now();
        let manifest = RunManifest::new(run_id.clone(), &config, MODEL_VERSION);
        store.save_run(&manifest, &result)?;
        timing.save_time_s = save_started.elapsed().as_secs_f64();
    }

    info!(
        run_id = %run_id,
        config = %config.name,
        persisted = store.is_some(),
        "run completed"
    );
    emit_progress(&mut progress_cb, RunStage::Completed, started, "Run completed");

    Ok(RunResponse {
        run_id,
        config,
        result,
        flight_mach,
        loaded_from_store: false,
        timing,
    })
}

/// List stored runs, most recent first.
pub fn list_runs(store_dir: &Path) -> AppResult<Vec<RunManifest>> {
    let store = RunStore::new(store_dir.to_path_buf())?;
    Ok(store.list_runs()?)
}

/// Load a specific run.
pub fn load_run(store_dir: &Path, run_id: &str) -> AppResult<(RunManifest, SimulationResult)> {
    let store = RunStore::new(store_dir.to_path_buf())?;

    let manifest = store.load_manifest(run_id)?;
    let result = store.load_result(run_id)?;

    Ok((manifest, result))
}

pub fn delete_run(store_dir: &Path, run_id: &str) -> AppResult<()> {
    let store = RunStore::new(store_dir.to_path_buf())?;
    Ok(store.delete_run(run_id)?)
}

/// One row of the preset comparison table.
#[derive(Debug, Clone)]
pub struct PresetComparison {
    pub name: String,
    pub config: EngineConfig,
    pub result: SimulationResult,
}

/// Simulate every preset, in listing order.
pub fn compare_presets() -> AppResult<Vec<PresetComparison>> {
    presets::list_presets()
        .into_iter()
        .map(|name| -> AppResult<PresetComparison> {
            let config = presets::get_preset(name)?;
            let result = simulate_config(&config)?;
            Ok(PresetComparison {
                name: name.to_string(),
                config,
                result,
            })
        })
        .collect()
}
