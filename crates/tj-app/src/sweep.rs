//! One-parameter sweeps over an engine configuration.
//!
//! Every point is an independent cycle evaluation, so points run in
//! parallel. Output order always matches the generated point order.

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use rayon::prelude::*;
use tj_core::timing::cycle_timing;
use tj_cycle::{EngineCycle, SimulationResult};
use tj_project::{EngineConfig, validate_config};
use tracing::info;

use crate::parameters::build_parameters;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SweepError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Unknown sweep parameter '{name}'. Available: {available}")]
    UnknownParameter { name: String, available: String },

    #[error("Every sweep point failed ({failed} points): {first_reason}")]
    AllPointsFailed { failed: usize, first_reason: String },
}

/// Configuration value a sweep varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepParameter {
    Altitude,
    CompressionRatio,
    FlightSpeed,
    FuelAirRatio,
    AfterburnerFuelFraction,
    CompressorEfficiency,
    TurbineEfficiency,
    NozzleEfficiency,
}

impl SweepParameter {
    pub const ALL: [SweepParameter; 8] = [
        SweepParameter::Altitude,
        SweepParameter::CompressionRatio,
        SweepParameter::FlightSpeed,
        SweepParameter::FuelAirRatio,
        SweepParameter::AfterburnerFuelFraction,
        SweepParameter::CompressorEfficiency,
        SweepParameter::TurbineEfficiency,
        SweepParameter::NozzleEfficiency,
    ];

    /// Config field name, also the CSV column header.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Altitude => "altitude",
            Self::CompressionRatio => "compression_ratio",
            Self::FlightSpeed => "flight_speed",
            Self::FuelAirRatio => "fuel_air_ratio",
            Self::AfterburnerFuelFraction => "afterburner_fuel_fraction",
            Self::CompressorEfficiency => "eta_comp",
            Self::TurbineEfficiency => "eta_turb",
            Self::NozzleEfficiency => "nozzle_eff",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Self::Altitude => "m",
            Self::FlightSpeed => "m/s",
            _ => "-",
        }
    }

    /// Write `value` into `config`. Sweeping the reheat fraction also lights
    /// the afterburner.
    pub fn apply(&self, config: &mut EngineConfig, value: f64) {
        match self {
            Self::Altitude => config.altitude = value,
            Self::CompressionRatio => config.compression_ratio = value,
            Self::FlightSpeed => config.flight_speed = value,
            Self::FuelAirRatio => config.fuel_air_ratio = value,
            Self::AfterburnerFuelFraction => {
                config.use_afterburner = true;
                config.afterburner_fuel_fraction = value;
            }
            Self::CompressorEfficiency => config.eta_comp = value,
            Self::TurbineEfficiency => config.eta_turb = value,
            Self::NozzleEfficiency => config.nozzle_eff = value,
        }
    }
}

impl fmt::Display for SweepParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SweepParameter {
    type Err = SweepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        let parameter = match key.as_str() {
            "altitude" | "alt" => Self::Altitude,
            "compression_ratio" | "cr" | "opr" => Self::CompressionRatio,
            "flight_speed" | "speed" | "v0" => Self::FlightSpeed,
            "fuel_air_ratio" | "far" => Self::FuelAirRatio,
            "afterburner_fuel_fraction" | "ab" | "afterburner" => Self::AfterburnerFuelFraction,
            "eta_comp" | "compressor_efficiency" => Self::CompressorEfficiency,
            "eta_turb" | "turbine_efficiency" => Self::TurbineEfficiency,
            "nozzle_eff" | "nozzle_efficiency" => Self::NozzleEfficiency,
            _ => {
                return Err(SweepError::UnknownParameter {
                    name: s.to_string(),
                    available: Self::ALL
                        .iter()
                        .map(|p| p.name())
                        .collect::<Vec<_>>()
                        .join(", "),
                });
            }
        };
        Ok(parameter)
    }
}

/// Type of sweep progression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SweepType {
    /// Uniformly spaced points
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

impl fmt::Display for SweepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

/// Definition of a single parameter sweep.
#[derive(Debug, Clone)]
pub struct SweepDefinition {
    pub parameter: SweepParameter,
    pub start: f64,
    pub end: f64,
    pub num_points: usize,
    pub sweep_type: SweepType,
}

impl SweepDefinition {
    pub fn new(
        parameter: SweepParameter,
        start: f64,
        end: f64,
        num_points: usize,
        sweep_type: SweepType,
    ) -> Result<Self, SweepError> {
        if num_points < 2 {
            return Err(SweepError::InvalidConfiguration(
                "Sweep must have at least 2 points".to_string(),
            ));
        }

        if !start.is_finite() || !end.is_finite() {
            return Err(SweepError::InvalidConfiguration(
                "Sweep bounds must be finite".to_string(),
            ));
        }

        if (start - end).abs() < 1e-12 {
            return Err(SweepError::InvalidConfiguration(
                "Start and end values must be different".to_string(),
            ));
        }

        Ok(Self {
            parameter,
            start,
            end,
            num_points,
            sweep_type,
        })
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<f64> {
        match self.sweep_type {
            SweepType::Linear => self.generate_linear(),
            SweepType::Logarithmic => self.generate_logarithmic(),
        }
    }

    fn generate_linear(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        let delta = (self.end - self.start) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| self.start + i as f64 * delta)
            .collect();

        // Ensure exact endpoint
        points[self.num_points - 1] = self.end;
        points
    }

    fn generate_logarithmic(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        if self.start <= 0.0 || self.end <= 0.0 {
            return self.generate_linear();
        }

        let log_start = self.start.ln();
        let log_delta = (self.end.ln() - log_start) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| (log_start + i as f64 * log_delta).exp())
            .collect();

        points[self.num_points - 1] = self.end;
        points
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep {} from {} to {} {} ({} points, {})",
            self.parameter,
            self.start,
            self.end,
            self.parameter.unit(),
            self.num_points,
            self.sweep_type
        )
    }
}

/// Outcome of a sweep, one slot per generated point.
#[derive(Debug, Clone)]
pub struct SweepResult {
    pub parameter: SweepParameter,
    /// Configuration the sweep started from
    pub base: EngineConfig,
    /// Swept values in generation order
    pub values: Vec<f64>,
    /// `None` where the point's configuration failed validation
    pub results: Vec<Option<SimulationResult>>,
    /// Rejection reason per failed point, by index
    pub failures: Vec<(usize, String)>,
    pub num_successful: usize,
    pub num_failed: usize,
}

impl SweepResult {
    fn column(&self, f: impl Fn(&SimulationResult) -> f64) -> Vec<f64> {
        self.results
            .iter()
            .filter_map(|r| r.as_ref().map(&f))
            .collect()
    }

    /// Swept values of the successful points.
    pub fn successful_values(&self) -> Vec<f64> {
        self.values
            .iter()
            .zip(&self.results)
            .filter_map(|(v, r)| r.as_ref().map(|_| *v))
            .collect()
    }

    pub fn net_thrust_n(&self) -> Vec<f64> {
        self.column(|r| r.net_thrust)
    }

    pub fn tsfc(&self) -> Vec<f64> {
        self.column(|r| r.tsfc)
    }

    pub fn thermal_efficiency(&self) -> Vec<f64> {
        self.column(|r| r.thermal_efficiency)
    }

    pub fn propulsive_efficiency(&self) -> Vec<f64> {
        self.column(|r| r.propulsive_efficiency)
    }

    pub fn overall_efficiency(&self) -> Vec<f64> {
        self.column(|r| r.overall_efficiency)
    }

    pub fn exhaust_velocity_mps(&self) -> Vec<f64> {
        self.column(|r| r.exhaust_velocity)
    }

    /// Percent change of thrust and TSFC against `baseline`, per successful
    /// point. TSFC change is `None` when either side is infinite.
    pub fn sensitivity(&self, baseline: &SimulationResult) -> Vec<SensitivityRow> {
        self.values
            .iter()
            .zip(&self.results)
            .filter_map(|(value, r)| {
                r.as_ref().map(|r| SensitivityRow {
                    value: *value,
                    thrust_change_pct: percent_change(baseline.net_thrust, r.net_thrust),
                    tsfc_change_pct: if baseline.tsfc.is_finite() && r.tsfc.is_finite() {
                        percent_change(baseline.tsfc, r.tsfc)
                    } else {
                        None
                    },
                })
            })
            .collect()
    }

    /// Comma-separated table with one row per point. Failed points keep
    /// their value and carry the rejection reason in the last column.
    pub fn to_csv(&self) -> String {
        let mut out = format!(
            "{},net_thrust_n,tsfc_kg_per_n_s,thermal_efficiency,propulsive_efficiency,\
             overall_efficiency,exhaust_velocity_mps,specific_impulse_s,t2_k,t3_k,\
             turbine_exit_k,fuel_flow_kg_s,status\n",
            self.parameter.name()
        );

        for (idx, (value, result)) in self.values.iter().zip(&self.results).enumerate() {
            match result {
                Some(r) => {
                    let tsfc = if r.tsfc.is_finite() {
                        r.tsfc.to_string()
                    } else {
                        "inf".to_string()
                    };
                    let status = if r.is_degenerate() { "degenerate" } else { "ok" };
                    out.push_str(&format!(
                        "{},{},{},{},{},{},{},{},{},{},{},{},{}\n",
                        value,
                        r.net_thrust,
                        tsfc,
                        r.thermal_efficiency,
                        r.propulsive_efficiency,
                        r.overall_efficiency,
                        r.exhaust_velocity,
                        r.specific_impulse,
                        r.compressor_temp,
                        r.combustor_temp,
                        r.turbine_exit_temp,
                        r.fuel_flow_rate,
                        status
                    ));
                }
                None => {
                    let reason = self
                        .failures
                        .iter()
                        .find(|(i, _)| *i == idx)
                        .map(|(_, reason)| reason.replace(',', ";"))
                        .unwrap_or_default();
                    out.push_str(&format!("{value},,,,,,,,,,,,failed: {reason}\n"));
                }
            }
        }

        out
    }
}

/// Relative change against a baseline for one sweep point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensitivityRow {
    pub value: f64,
    pub thrust_change_pct: Option<f64>,
    pub tsfc_change_pct: Option<f64>,
}

fn percent_change(baseline: f64, value: f64) -> Option<f64> {
    if baseline == 0.0 {
        None
    } else {
        Some((value - baseline) / baseline * 100.0)
    }
}

fn evaluate_point(
    base: &EngineConfig,
    parameter: SweepParameter,
    value: f64,
) -> Result<SimulationResult, String> {
    let mut config = base.clone();
    parameter.apply(&mut config, value);
    validate_config(&config).map_err(|e| e.to_string())?;

    let started = Instant::now();
    let result = EngineCycle::new(build_parameters(&config)).simulate();
    cycle_timing::SWEEP_POINTS.record(started.elapsed().as_secs_f64());
    if !result.is_physical() {
        return Err("cycle produced non-finite values".to_string());
    }
    Ok(result)
}

fn collect(
    base: &EngineConfig,
    def: &SweepDefinition,
    values: Vec<f64>,
    outcomes: Vec<Result<SimulationResult, String>>,
) -> Result<SweepResult, SweepError> {
    let mut results = Vec::with_capacity(outcomes.len());
    let mut failures = Vec::new();

    for (idx, outcome) in outcomes.into_iter().enumerate() {
        match outcome {
            Ok(r) => results.push(Some(r)),
            Err(reason) => {
                failures.push((idx, reason));
                results.push(None);
            }
        }
    }

    let num_failed = failures.len();
    let num_successful = results.len() - num_failed;

    if num_successful == 0 {
        return Err(SweepError::AllPointsFailed {
            failed: num_failed,
            first_reason: failures
                .first()
                .map(|(_, r)| r.clone())
                .unwrap_or_default(),
        });
    }

    info!(
        parameter = def.parameter.name(),
        points = values.len(),
        num_successful,
        num_failed,
        "sweep finished"
    );

    Ok(SweepResult {
        parameter: def.parameter,
        base: base.clone(),
        values,
        results,
        failures,
        num_successful,
        num_failed,
    })
}

/// Evaluate every point of `def` on top of `base`, in parallel.
///
/// Points whose configuration fails validation are recorded as `None`.
/// Fails only when no point succeeds.
pub fn execute_sweep(base: &EngineConfig, def: &SweepDefinition) -> Result<SweepResult, SweepError> {
    let values = def.generate_points();
    let outcomes: Vec<_> = values
        .par_iter()
        .map(|&v| evaluate_point(base, def.parameter, v))
        .collect();
    collect(base, def, values, outcomes)
}

/// Same as [`execute_sweep`] on the calling thread.
pub fn execute_sweep_sequential(
    base: &EngineConfig,
    def: &SweepDefinition,
) -> Result<SweepResult, SweepError> {
    let values = def.generate_points();
    let outcomes: Vec<_> = values
        .iter()
        .map(|&v| evaluate_point(base, def.parameter, v))
        .collect();
    collect(base, def, values, outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(start: f64, end: f64, n: usize, sweep_type: SweepType) -> SweepDefinition {
        SweepDefinition::new(SweepParameter::CompressionRatio, start, end, n, sweep_type).unwrap()
    }

    #[test]
    fn linear_sweep_generation() {
        let points = def(5.0, 25.0, 5, SweepType::Linear).generate_points();
        assert_eq!(points.len(), 5);
        assert!((points[0] - 5.0).abs() < 1e-9);
        assert!((points[2] - 15.0).abs() < 1e-9);
        assert_eq!(points[4], 25.0);
    }

    #[test]
    fn logarithmic_sweep_generation() {
        let points = def(1e3, 1e4, 3, SweepType::Logarithmic).generate_points();
        assert_eq!(points.len(), 3);
        assert!((points[0] - 1e3).abs() < 1e-9);
        assert_eq!(points[2], 1e4);
        let expected_mid = (1e3_f64 * 1e4_f64).sqrt();
        assert!((points[1] - expected_mid).abs() / expected_mid < 1e-9);
    }

    #[test]
    fn logarithmic_falls_back_to_linear() {
        let log = SweepDefinition::new(
            SweepParameter::Altitude,
            -500.0,
            1_500.0,
            5,
            SweepType::Logarithmic,
        )
        .unwrap();
        assert_eq!(log.generate_points(), vec![-500.0, 0.0, 500.0, 1_000.0, 1_500.0]);
    }

    #[test]
    fn bad_definitions_rejected() {
        let p = SweepParameter::FlightSpeed;
        assert!(SweepDefinition::new(p, 0.0, 1.0, 1, SweepType::Linear).is_err());
        assert!(SweepDefinition::new(p, 1.0, 1.0, 5, SweepType::Linear).is_err());
        assert!(SweepDefinition::new(p, 0.0, f64::NAN, 5, SweepType::Linear).is_err());
    }

    #[test]
    fn parameter_names_parse_back() {
        for p in SweepParameter::ALL {
            assert_eq!(p.name().parse::<SweepParameter>().unwrap(), p);
        }
        assert_eq!("CR".parse::<SweepParameter>().unwrap(), SweepParameter::CompressionRatio);
        assert_eq!(
            "flight-speed".parse::<SweepParameter>().unwrap(),
            SweepParameter::FlightSpeed
        );
        let err = "wingspan".parse::<SweepParameter>().unwrap_err();
        assert!(err.to_string().contains("eta_comp"));
    }

    #[test]
    fn afterburner_sweep_lights_reheat() {
        let mut config = EngineConfig::default();
        SweepParameter::AfterburnerFuelFraction.apply(&mut config, 0.05);
        assert!(config.use_afterburner);
        assert_eq!(config.afterburner_fuel_fraction, 0.05);
    }
}
