//! Benchmark framework for the turbojet simulator.
//!
//! Two scenario kinds: a tight loop over `EngineCycle::simulate` for one
//! preset, and a parameter sweep timed sequentially and in parallel.

use serde::{Deserialize, Serialize};
use std::hint::black_box;
use std::time::Instant;

use tj_app::sweep::{
    SweepDefinition, SweepError, SweepParameter, SweepType, execute_sweep,
    execute_sweep_sequential,
};
use tj_app::{AppError, build_parameters};
use tj_core::timing::cycle_timing;
use tj_cycle::EngineCycle;
use tj_project::presets;

#[derive(thiserror::Error, Debug)]
pub enum BenchError {
    #[error(transparent)]
    App(#[from] AppError),

    #[error(transparent)]
    Sweep(#[from] SweepError),

    #[error("Config error: {0}")]
    Project(#[from] tj_project::ProjectError),

    #[error("Invalid scenario '{id}': {reason}")]
    InvalidScenario { id: String, reason: String },
}

/// A benchmark scenario definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkScenario {
    /// Unique identifier for this benchmark.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    pub kind: BenchmarkKind,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum BenchmarkKind {
    /// Repeated `simulate` calls on one constructed cycle
    SingleSimulation { preset: String, iterations: usize },
    /// One sweep, timed on the calling thread and on the rayon pool
    Sweep {
        preset: String,
        parameter: String,
        start: f64,
        end: f64,
        points: usize,
    },
}

/// Per-call timing statistics, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimingStats {
    pub count: usize,
    pub mean_ms: f64,
    pub median_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
    pub std_ms: f64,
    pub total_s: f64,
    pub per_second: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepThroughput {
    pub points: usize,
    pub sequential_s: f64,
    pub parallel_s: f64,
    pub speedup: f64,
    pub sequential_per_second: f64,
    pub parallel_per_second: f64,
    /// Point evaluations seen by the sweep accumulator, both passes
    pub timed_points: u64,
    /// Mean wall time inside one point evaluation
    pub mean_point_s: f64,
}

/// Complete benchmark result for a scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub scenario: BenchmarkScenario,
    pub timing: Option<TimingStats>,
    pub sweep: Option<SweepThroughput>,
}

/// Collection of benchmark results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkSuite {
    pub timestamp: String,
    pub model_version: String,
    pub results: Vec<BenchmarkResult>,
}

impl BenchmarkSuite {
    /// Stamp a set of results with the current UTC time and model version.
    pub fn new(results: Vec<BenchmarkResult>) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            model_version: tj_cycle::MODEL_VERSION.to_string(),
            results,
        }
    }
}

/// Summary statistics of per-call durations given in seconds.
pub fn timing_stats(samples_s: &[f64]) -> TimingStats {
    if samples_s.is_empty() {
        return TimingStats {
            count: 0,
            mean_ms: 0.0,
            median_ms: 0.0,
            min_ms: 0.0,
            max_ms: 0.0,
            std_ms: 0.0,
            total_s: 0.0,
            per_second: 0.0,
        };
    }

    let mut sorted: Vec<f64> = samples_s.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let count = sorted.len();
    let total_s: f64 = sorted.iter().sum();
    let mean = total_s / count as f64;
    let median = if count % 2 == 0 {
        0.5 * (sorted[count / 2 - 1] + sorted[count / 2])
    } else {
        sorted[count / 2]
    };
    let variance = sorted.iter().map(|t| (t - mean).powi(2)).sum::<f64>() / count as f64;

    TimingStats {
        count,
        mean_ms: mean * 1e3,
        median_ms: median * 1e3,
        min_ms: sorted[0] * 1e3,
        max_ms: sorted[count - 1] * 1e3,
        std_ms: variance.sqrt() * 1e3,
        total_s,
        per_second: if mean > 0.0 { 1.0 / mean } else { 0.0 },
    }
}

fn bench_single(preset: &str, iterations: usize) -> Result<TimingStats, BenchError> {
    let config = presets::get_preset(preset)?;
    let cycle = EngineCycle::new(build_parameters(&config));

    let mut samples = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        let start = Instant::now();
        black_box(cycle.simulate());
        samples.push(start.elapsed().as_secs_f64());
    }

    Ok(timing_stats(&samples))
}

fn bench_sweep(
    preset: &str,
    parameter: &str,
    start: f64,
    end: f64,
    points: usize,
) -> Result<SweepThroughput, BenchError> {
    let config = presets::get_preset(preset)?;
    let parameter: SweepParameter = parameter.parse()?;
    let def = SweepDefinition::new(parameter, start, end, points, SweepType::Linear)?;
    cycle_timing::reset_all();

    let seq_start = Instant::now();
    black_box(execute_sweep_sequential(&config, &def)?);
    let sequential_s = seq_start.elapsed().as_secs_f64();

    let par_start = Instant::now();
    black_box(execute_sweep(&config, &def)?);
    let parallel_s = par_start.elapsed().as_secs_f64();

    let rate = |t: f64| if t > 0.0 { points as f64 / t } else { 0.0 };
    Ok(SweepThroughput {
        points,
        sequential_s,
        parallel_s,
        speedup: if parallel_s > 0.0 {
            sequential_s / parallel_s
        } else {
            0.0
        },
        sequential_per_second: rate(sequential_s),
        parallel_per_second: rate(parallel_s),
        timed_points: cycle_timing::SWEEP_POINTS.count(),
        mean_point_s: cycle_timing::SWEEP_POINTS.average_seconds(),
    })
}

/// Run a single benchmark scenario.
pub fn run_scenario(scenario: &BenchmarkScenario) -> Result<BenchmarkResult, BenchError> {
    match &scenario.kind {
        BenchmarkKind::SingleSimulation { preset, iterations } => {
            if *iterations == 0 {
                return Err(BenchError::InvalidScenario {
                    id: scenario.id.clone(),
                    reason: "iterations must be at least 1".to_string(),
                });
            }
            Ok(BenchmarkResult {
                scenario: scenario.clone(),
                timing: Some(bench_single(preset, *iterations)?),
                sweep: None,
            })
        }
        BenchmarkKind::Sweep {
            preset,
            parameter,
            start,
            end,
            points,
        } => Ok(BenchmarkResult {
            scenario: scenario.clone(),
            timing: None,
            sweep: Some(bench_sweep(preset, parameter, *start, *end, *points)?),
        }),
    }
}

pub fn default_benchmarks() -> Vec<BenchmarkScenario> {
    let mut scenarios: Vec<BenchmarkScenario> = presets::PRESET_NAMES
        .iter()
        .map(|preset| BenchmarkScenario {
            id: format!("{preset}_single"),
            name: format!("Single simulation ({preset})"),
            kind: BenchmarkKind::SingleSimulation {
                preset: preset.to_string(),
                iterations: 10_000,
            },
            notes: None,
        })
        .collect();

    scenarios.push(BenchmarkScenario {
        id: "civil_airliner_cr_sweep".to_string(),
        name: "Compression ratio sweep (civil_airliner)".to_string(),
        kind: BenchmarkKind::Sweep {
            preset: "civil_airliner".to_string(),
            parameter: "compression_ratio".to_string(),
            start: 5.0,
            end: 40.0,
            points: 10_000,
        },
        notes: Some("Sequential vs rayon parallel".to_string()),
    });

    scenarios.push(BenchmarkScenario {
        id: "military_fighter_altitude_sweep".to_string(),
        name: "Altitude sweep (military_fighter)".to_string(),
        kind: BenchmarkKind::Sweep {
            preset: "military_fighter".to_string(),
            parameter: "altitude".to_string(),
            start: 0.0,
            end: 20_000.0,
            points: 10_000,
        },
        notes: None,
    });

    scenarios
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_benchmarks_are_defined() {
        let benchmarks = default_benchmarks();
        assert!(!benchmarks.is_empty());
        assert!(benchmarks.iter().all(|b| !b.id.is_empty()));
        assert!(benchmarks.iter().all(|b| !b.name.is_empty()));
    }

    #[test]
    fn every_preset_has_a_loop_benchmark() {
        let benchmarks = default_benchmarks();
        for preset in presets::PRESET_NAMES {
            assert!(benchmarks.iter().any(|b| matches!(
                &b.kind,
                BenchmarkKind::SingleSimulation { preset: p, .. } if p == preset
            )));
        }
    }

    #[test]
    fn timing_stats_of_known_samples() {
        let stats = timing_stats(&[0.004, 0.001, 0.003, 0.002]);
        assert_eq!(stats.count, 4);
        assert!((stats.mean_ms - 2.5).abs() < 1e-9);
        assert!((stats.median_ms - 2.5).abs() < 1e-9);
        assert!((stats.min_ms - 1.0).abs() < 1e-9);
        assert!((stats.max_ms - 4.0).abs() < 1e-9);
        assert!((stats.std_ms - 1.25f64.sqrt()).abs() < 1e-9);
        assert!((stats.per_second - 400.0).abs() < 1e-6);
    }

    #[test]
    fn small_scenarios_run() {
        let single = BenchmarkScenario {
            id: "t_single".to_string(),
            name: "tiny loop".to_string(),
            kind: BenchmarkKind::SingleSimulation {
                preset: "regional_jet".to_string(),
                iterations: 10,
            },
            notes: None,
        };
        let result = run_scenario(&single).unwrap();
        assert_eq!(result.timing.unwrap().count, 10);

        let sweep = BenchmarkScenario {
            id: "t_sweep".to_string(),
            name: "tiny sweep".to_string(),
            kind: BenchmarkKind::Sweep {
                preset: "civil_airliner".to_string(),
                parameter: "cr".to_string(),
                start: 5.0,
                end: 40.0,
                points: 16,
            },
            notes: None,
        };
        let throughput = run_scenario(&sweep).unwrap().sweep.unwrap();
        assert_eq!(throughput.points, 16);
        assert_eq!(throughput.timed_points, 32);
        assert!(throughput.mean_point_s >= 0.0);
    }

    #[test]
    fn zero_iterations_rejected() {
        let scenario = BenchmarkScenario {
            id: "bad".to_string(),
            name: "bad".to_string(),
            kind: BenchmarkKind::SingleSimulation {
                preset: "regional_jet".to_string(),
                iterations: 0,
            },
            notes: None,
        };
        assert!(matches!(
            run_scenario(&scenario),
            Err(BenchError::InvalidScenario { .. })
        ));
    }

    #[test]
    fn suite_timestamp_is_rfc3339() {
        let suite = BenchmarkSuite::new(Vec::new());
        assert!(chrono::DateTime::parse_from_rfc3339(&suite.timestamp).is_ok());
        assert_eq!(suite.model_version, tj_cycle::MODEL_VERSION);
    }

    #[test]
    fn benchmark_scenario_serializes() {
        let json = serde_json::to_string(&default_benchmarks()[0]).unwrap();
        assert!(json.contains("\"type\":\"SingleSimulation\""));
        let back: BenchmarkScenario = serde_json::from_str(&json).unwrap();
        assert_eq!(back.kind, default_benchmarks()[0].kind);
    }
}
