//! Design-point optimization over compression ratio, fuel-air ratio and
//! component efficiencies.
//!
//! # Algorithm
//!
//! Cyclic coordinate search. Each pass runs a bounded golden section line
//! search on one design variable at a time, holding the others fixed, and
//! keeps a move only when it improves the objective. Passes repeat until the
//! objective changes by less than the relative tolerance or the pass limit
//! is reached.
//!
//! Candidates that fail configuration validation or produce no net thrust
//! score [`PENALTY`] and never become the incumbent.

use std::fmt;
use std::str::FromStr;

use tj_cycle::{EngineCycle, SimulationResult};
use tj_project::{EngineConfig, validate_config};
use tracing::{debug, info, warn};

use crate::parameters::build_parameters;

/// Score assigned to infeasible candidates.
pub const PENALTY: f64 = 1e6;

/// The inverse golden ratio: 1/φ
const INV_PHI: f64 = 0.618_033_988_749_895;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum OptimizeError {
    #[error("Starting configuration is invalid: {0}")]
    InvalidBaseline(String),

    #[error("Invalid optimizer settings: {0}")]
    InvalidSettings(String),

    #[error("Unknown objective '{0}'. Available: fuel_efficiency, thrust, overall_efficiency")]
    UnknownObjective(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Objective {
    /// Minimise TSFC
    FuelEfficiency,
    /// Maximise net thrust
    Thrust,
    /// Maximise overall efficiency
    OverallEfficiency,
}

impl Objective {
    pub const ALL: [Objective; 3] = [
        Objective::FuelEfficiency,
        Objective::Thrust,
        Objective::OverallEfficiency,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::FuelEfficiency => "fuel_efficiency",
            Self::Thrust => "thrust",
            Self::OverallEfficiency => "overall_efficiency",
        }
    }

    /// Value to minimise; maximised quantities are negated.
    pub fn score(&self, result: &SimulationResult) -> f64 {
        if result.is_degenerate() || !result.is_physical() {
            return PENALTY;
        }
        match self {
            Self::FuelEfficiency => result.tsfc,
            Self::Thrust => -result.net_thrust,
            Self::OverallEfficiency => -result.overall_efficiency,
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Objective {
    type Err = OptimizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "fuel_efficiency" | "tsfc" => Ok(Self::FuelEfficiency),
            "thrust" => Ok(Self::Thrust),
            "overall_efficiency" | "efficiency" => Ok(Self::OverallEfficiency),
            _ => Err(OptimizeError::UnknownObjective(s.to_string())),
        }
    }
}

/// Configuration values the optimizer may move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesignVariable {
    CompressionRatio,
    FuelAirRatio,
    CompressorEfficiency,
    TurbineEfficiency,
}

impl DesignVariable {
    pub const ALL: [DesignVariable; 4] = [
        DesignVariable::CompressionRatio,
        DesignVariable::FuelAirRatio,
        DesignVariable::CompressorEfficiency,
        DesignVariable::TurbineEfficiency,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::CompressionRatio => "compression_ratio",
            Self::FuelAirRatio => "fuel_air_ratio",
            Self::CompressorEfficiency => "eta_comp",
            Self::TurbineEfficiency => "eta_turb",
        }
    }

    /// Search interval `[min, max]`.
    pub fn bounds(&self) -> [f64; 2] {
        match self {
            Self::CompressionRatio => [5.0, 40.0],
            Self::FuelAirRatio => [0.02, 0.07],
            Self::CompressorEfficiency | Self::TurbineEfficiency => [0.70, 0.95],
        }
    }

    pub fn get(&self, config: &EngineConfig) -> f64 {
        match self {
            Self::CompressionRatio => config.compression_ratio,
            Self::FuelAirRatio => config.fuel_air_ratio,
            Self::CompressorEfficiency => config.eta_comp,
            Self::TurbineEfficiency => config.eta_turb,
        }
    }

    pub fn set(&self, config: &mut EngineConfig, value: f64) {
        match self {
            Self::CompressionRatio => config.compression_ratio = value,
            Self::FuelAirRatio => config.fuel_air_ratio = value,
            Self::CompressorEfficiency => config.eta_comp = value,
            Self::TurbineEfficiency => config.eta_turb = value,
        }
    }
}

/// Optimizer settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimizerSettings {
    /// Upper limit on coordinate passes
    pub max_passes: usize,
    /// Upper limit on bracket shrinks per line search
    pub line_search_iters: usize,
    /// Stop when a pass improves the score by less than this fraction
    pub rel_tol: f64,
    /// Line search stops when the bracket is this fraction of the bounds
    pub x_rel_tol: f64,
}

impl Default for OptimizerSettings {
    fn default() -> Self {
        Self {
            max_passes: 20,
            line_search_iters: 40,
            rel_tol: 1e-6,
            x_rel_tol: 1e-4,
        }
    }
}

impl OptimizerSettings {
    fn check(&self) -> Result<(), OptimizeError> {
        if self.max_passes == 0 {
            return Err(OptimizeError::InvalidSettings(
                "max_passes must be at least 1".to_string(),
            ));
        }
        if !self.rel_tol.is_finite() || self.rel_tol < 0.0 {
            return Err(OptimizeError::InvalidSettings(
                "rel_tol must be finite and non-negative".to_string(),
            ));
        }
        if !self.x_rel_tol.is_finite() || self.x_rel_tol < 0.0 {
            return Err(OptimizeError::InvalidSettings(
                "x_rel_tol must be finite and non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// One objective evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub evaluation: usize,
    pub pass: usize,
    pub variable: DesignVariable,
    /// Design variables in [`DesignVariable::ALL`] order
    pub design: [f64; 4],
    pub score: f64,
    pub feasible: bool,
}

#[derive(Debug, Clone)]
pub struct OptimizationOutcome {
    pub objective: Objective,
    /// Starting point after clamping into the search bounds
    pub initial: EngineConfig,
    pub optimal: EngineConfig,
    pub initial_result: SimulationResult,
    pub optimal_result: SimulationResult,
    pub initial_score: f64,
    pub optimal_score: f64,
    pub evaluations: usize,
    pub passes: usize,
    pub converged: bool,
    pub history: Vec<HistoryEntry>,
    /// Objective improvement relative to the start; `None` when the start
    /// was infeasible
    pub improvement_percent: Option<f64>,
}

impl OptimizationOutcome {
    /// Percent change of headline metrics from start to optimum, signed so
    /// that positive is better (lower TSFC, higher everything else).
    pub fn metric_improvements(&self) -> Vec<(&'static str, Option<f64>)> {
        let a = &self.initial_result;
        let b = &self.optimal_result;
        let better_up = |x: f64, y: f64| (x != 0.0).then(|| (y - x) / x.abs() * 100.0);
        let tsfc = if a.tsfc.is_finite() && b.tsfc.is_finite() && a.tsfc != 0.0 {
            Some((a.tsfc - b.tsfc) / a.tsfc * 100.0)
        } else {
            None
        };
        vec![
            ("net_thrust", better_up(a.net_thrust, b.net_thrust)),
            ("tsfc", tsfc),
            (
                "overall_efficiency",
                better_up(a.overall_efficiency, b.overall_efficiency),
            ),
            (
                "thermal_efficiency",
                better_up(a.thermal_efficiency, b.thermal_efficiency),
            ),
        ]
    }
}

struct Evaluator<'a> {
    objective: Objective,
    history: &'a mut Vec<HistoryEntry>,
    pass: usize,
}

impl Evaluator<'_> {
    fn evaluate(&mut self, config: &EngineConfig, variable: DesignVariable) -> f64 {
        let (score, feasible) = match validate_config(config) {
            Ok(()) => {
                let result = EngineCycle::new(build_parameters(config)).simulate();
                let score = self.objective.score(&result);
                (score, score < PENALTY)
            }
            Err(e) => {
                warn!(variable = variable.name(), error = %e, "optimizer candidate rejected");
                (PENALTY, false)
            }
        };

        self.history.push(HistoryEntry {
            evaluation: self.history.len() + 1,
            pass: self.pass,
            variable,
            design: DesignVariable::ALL.map(|v| v.get(config)),
            score,
            feasible,
        });
        score
    }
}

/// Bounded golden section search on `f`, also probing both bounds.
/// Returns the best `(x, f(x))` seen.
fn golden_section(
    mut f: impl FnMut(f64) -> f64,
    [lo, hi]: [f64; 2],
    max_iters: usize,
    x_rel_tol: f64,
) -> (f64, f64) {
    let mut best = (lo, f(lo));
    let f_hi = f(hi);
    if f_hi < best.1 {
        best = (hi, f_hi);
    }

    let (mut a, mut b) = (lo, hi);
    let mut c = b - INV_PHI * (b - a);
    let mut d = a + INV_PHI * (b - a);
    let mut fc = f(c);
    let mut fd = f(d);

    for _ in 0..max_iters {
        if fc < best.1 {
            best = (c, fc);
        }
        if fd < best.1 {
            best = (d, fd);
        }
        if (b - a) <= x_rel_tol * (hi - lo) {
            break;
        }

        if fc <= fd {
            b = d;
            d = c;
            fd = fc;
            c = b - INV_PHI * (b - a);
            fc = f(c);
        } else {
            a = c;
            c = d;
            fc = fd;
            d = a + INV_PHI * (b - a);
            fd = f(d);
        }
    }

    if fc < best.1 {
        best = (c, fc);
    }
    if fd < best.1 {
        best = (d, fd);
    }
    best
}

/// Optimize the design variables of `base` for `objective`.
///
/// Operating conditions (altitude, speed, afterburner) stay as in `base`.
/// Design variables outside their bounds are clamped before the search.
pub fn optimize(
    base: &EngineConfig,
    objective: Objective,
    settings: &OptimizerSettings,
) -> Result<OptimizationOutcome, OptimizeError> {
    settings.check()?;

    let mut initial = base.clone();
    for variable in DesignVariable::ALL {
        let [lo, hi] = variable.bounds();
        let value = variable.get(&initial).clamp(lo, hi);
        variable.set(&mut initial, value);
    }
    validate_config(&initial).map_err(|e| OptimizeError::InvalidBaseline(e.to_string()))?;

    let initial_result = EngineCycle::new(build_parameters(&initial)).simulate();
    let initial_score = objective.score(&initial_result);

    info!(
        objective = objective.name(),
        compression_ratio = initial.compression_ratio,
        fuel_air_ratio = initial.fuel_air_ratio,
        eta_comp = initial.eta_comp,
        eta_turb = initial.eta_turb,
        "optimization started"
    );

    let mut history = Vec::new();
    let mut current = initial.clone();
    let mut current_score = initial_score;
    let mut passes = 0;
    let mut converged = false;

    while passes < settings.max_passes {
        passes += 1;
        let pass_start_score = current_score;

        for variable in DesignVariable::ALL {
            let mut evaluator = Evaluator {
                objective,
                history: &mut history,
                pass: passes,
            };
            let mut candidate = current.clone();
            let (x, score) = golden_section(
                |x| {
                    variable.set(&mut candidate, x);
                    evaluator.evaluate(&candidate, variable)
                },
                variable.bounds(),
                settings.line_search_iters,
                settings.x_rel_tol,
            );

            if score < current_score {
                variable.set(&mut current, x);
                current_score = score;
            }
        }

        debug!(pass = passes, score = current_score, "coordinate pass finished");

        let change = (pass_start_score - current_score).abs();
        if change <= settings.rel_tol * pass_start_score.abs() {
            converged = true;
            break;
        }
    }

    let optimal_result = EngineCycle::new(build_parameters(&current)).simulate();
    let improvement_percent = (initial_score < PENALTY && initial_score != 0.0)
        .then(|| (initial_score - current_score) / initial_score.abs() * 100.0);

    info!(
        objective = objective.name(),
        evaluations = history.len(),
        passes,
        converged,
        score = current_score,
        "optimization finished"
    );

    Ok(OptimizationOutcome {
        objective,
        initial,
        optimal: current,
        initial_result,
        optimal_result,
        initial_score,
        optimal_score: current_score,
        evaluations: history.len(),
        passes,
        converged,
        history,
        improvement_percent,
    })
}
