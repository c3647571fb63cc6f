use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tj_app::report::{Summary, render_text};
use tj_app::run_service::{self, default_store_dir};
use tj_app::{
    AppError, AppResult, ConfigOverrides, ConfigSource, Objective, OptimizerSettings, RunOptions,
    RunProgressEvent, RunRequest, SweepDefinition, SweepParameter, SweepType, config_service,
    execute_sweep, optimize,
};
use tj_core::timing::cycle_timing;
use tj_cycle::{EngineCycle, SimulationResult};
use tj_project::EngineConfig;
use tracing::info;

#[derive(Parser)]
#[command(name = "tj-cli")]
#[command(about = "Turbojet CLI - ideal-cycle turbojet performance tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where the engine configuration comes from. Defaults to the reference engine.
#[derive(Args, Debug, Clone)]
struct SourceArgs {
    /// Path to a YAML or JSON config file
    #[arg(long, short, conflicts_with = "preset")]
    config: Option<PathBuf>,
    /// Name of a built-in preset
    #[arg(long, short)]
    preset: Option<String>,
}

impl SourceArgs {
    fn source(&self) -> ConfigSource {
        match (&self.config, &self.preset) {
            (Some(path), _) => ConfigSource::Path(path.clone()),
            (None, Some(name)) => ConfigSource::Preset(name.clone()),
            (None, None) => ConfigSource::Inline(EngineConfig::default()),
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
struct OverrideArgs {
    /// Flight altitude in m
    #[arg(long)]
    altitude: Option<f64>,
    /// Compressor pressure ratio
    #[arg(long = "cr")]
    compression_ratio: Option<f64>,
    /// Flight speed in m/s
    #[arg(long)]
    speed: Option<f64>,
    /// Fuel-air mass ratio
    #[arg(long)]
    fuel_air_ratio: Option<f64>,
    #[arg(long)]
    eta_comp: Option<f64>,
    #[arg(long)]
    eta_turb: Option<f64>,
    #[arg(long)]
    mechanical_eff: Option<f64>,
    #[arg(long)]
    nozzle_eff: Option<f64>,
    /// Light the afterburner
    #[arg(long, conflicts_with = "no_afterburner")]
    afterburner: bool,
    /// Force the afterburner off
    #[arg(long)]
    no_afterburner: bool,
    /// Extra fuel burnt in the afterburner, per unit air
    #[arg(long)]
    ab_fraction: Option<f64>,
}

impl OverrideArgs {
    fn overrides(&self) -> ConfigOverrides {
        let afterburner = match (self.afterburner, self.no_afterburner) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        ConfigOverrides {
            altitude: self.altitude,
            compression_ratio: self.compression_ratio,
            flight_speed: self.speed,
            fuel_air_ratio: self.fuel_air_ratio,
            eta_comp: self.eta_comp,
            eta_turb: self.eta_turb,
            mechanical_eff: self.mechanical_eff,
            nozzle_eff: self.nozzle_eff,
            afterburner,
            afterburner_fuel_fraction: self.ab_fraction,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one operating point
    Simulate {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        overrides: OverrideArgs,
        /// Save the run to the store, or reuse an identical stored run
        #[arg(long)]
        persist: bool,
        /// Run store directory
        #[arg(long)]
        store_dir: Option<PathBuf>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        /// Print a timing breakdown
        #[arg(long)]
        timing: bool,
    },
    /// List built-in presets
    Presets,
    /// Simulate every preset and print a comparison table
    Compare,
    /// Validate a config file
    Validate {
        /// Path to the YAML or JSON config file
        config_path: PathBuf,
    },
    /// Write a starter config file
    Init {
        /// Destination path (.yaml, .yml or .json)
        path: PathBuf,
        /// Preset to start from
        #[arg(long, short)]
        preset: Option<String>,
    },
    /// Sweep one parameter and report performance at each point
    Sweep {
        /// Parameter to sweep (e.g. altitude, compression_ratio, flight_speed)
        parameter: String,
        start: f64,
        end: f64,
        /// Number of points
        #[arg(long, short = 'n', default_value_t = 11)]
        points: usize,
        /// Logarithmic spacing
        #[arg(long)]
        log: bool,
        #[command(flatten)]
        source: SourceArgs,
        /// Write the table as CSV
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Show percent change against the base configuration
        #[arg(long)]
        sensitivity: bool,
        /// Print time spent per sweep point
        #[arg(long)]
        timing: bool,
    },
    /// Optimize compression ratio, fuel-air ratio and component efficiencies
    Optimize {
        /// fuel_efficiency, thrust or overall_efficiency
        #[arg(long, short, default_value = "fuel_efficiency")]
        objective: String,
        #[command(flatten)]
        source: SourceArgs,
        /// Upper limit on coordinate passes
        #[arg(long, default_value_t = 20)]
        max_passes: usize,
    },
    /// List stored runs
    Runs {
        /// Run store directory
        #[arg(long)]
        store_dir: Option<PathBuf>,
    },
    /// Show a stored run
    ShowRun {
        run_id: String,
        /// Run store directory
        #[arg(long)]
        store_dir: Option<PathBuf>,
    },
    /// Delete a stored run
    DeleteRun {
        run_id: String,
        /// Run store directory
        #[arg(long)]
        store_dir: Option<PathBuf>,
    },
    /// Reference engine with and without afterburner
    Demo,
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            source,
            overrides,
            persist,
            store_dir,
            json,
            timing,
        } => cmd_simulate(&source, &overrides, persist, store_dir, json, timing),
        Commands::Presets => cmd_presets(),
        Commands::Compare => cmd_compare(),
        Commands::Validate { config_path } => cmd_validate(&config_path),
        Commands::Init { path, preset } => cmd_init(&path, preset.as_deref()),
        Commands::Sweep {
            parameter,
            start,
            end,
            points,
            log,
            source,
            output,
            sensitivity,
            timing,
        } => cmd_sweep(
            &parameter,
            start,
            end,
            points,
            log,
            &source,
            output.as_deref(),
            sensitivity,
            timing,
        ),
        Commands::Optimize {
            objective,
            source,
            max_passes,
        } => cmd_optimize(&objective, &source, max_passes),
        Commands::Runs { store_dir } => cmd_runs(&store_path(store_dir)),
        Commands::ShowRun { run_id, store_dir } => cmd_show_run(&store_path(store_dir), &run_id),
        Commands::DeleteRun { run_id, store_dir } => {
            run_service::delete_run(&store_path(store_dir), &run_id)?;
            println!("✓ Deleted run {}", run_id);
            Ok(())
        }
        Commands::Demo => cmd_demo(),
    }
}

fn store_path(store_dir: Option<PathBuf>) -> PathBuf {
    store_dir.unwrap_or_else(default_store_dir)
}

fn to_json(value: &serde_json::Value) -> AppResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::Results(e.to_string()))
}

fn cmd_simulate(
    source: &SourceArgs,
    overrides: &OverrideArgs,
    persist: bool,
    store_dir: Option<PathBuf>,
    json: bool,
    timing: bool,
) -> AppResult<()> {
    if timing {
        tj_core::timing::enable_timing();
    }

    let request = RunRequest {
        source: source.source(),
        overrides: overrides.overrides(),
        options: RunOptions { persist, store_dir },
    };

    let mut last_emit = Instant::now();
    let show_progress = !json;
    let response = run_service::ensure_run_with_progress(
        &request,
        Some(&mut |event| {
            if show_progress && last_emit.elapsed().as_millis() >= 50 {
                render_cli_progress(&event);
                last_emit = Instant::now();
            }
        }),
    )?;
    if show_progress {
        clear_progress_line();
    }

    if json {
        let body = serde_json::json!({
            "run_id": response.run_id,
            "flight_mach": response.flight_mach,
            "config": response.config,
            "result": response.result,
        });
        println!("{}", to_json(&body)?);
        return Ok(());
    }

    if persist {
        if response.loaded_from_store {
            println!("✓ Loaded from store: {}", response.run_id);
        } else {
            println!("✓ Saved run: {}", response.run_id);
        }
    }
    println!(
        "Config: {} (altitude {:.0} m, {:.1} m/s, Mach {:.3})",
        response.config.name,
        response.config.altitude,
        response.config.flight_speed,
        response.flight_mach
    );
    print!("{}", render_text("Results", &response.result));
    print_degenerate_note(&response.result);

    if let Some(summary) = response.timing.summary() {
        println!("\n{}", summary);
    }
    print_cycle_timing();
    Ok(())
}

fn print_cycle_timing() {
    if tj_core::timing::is_enabled() {
        print!("\nCycle evaluations:\n{}", cycle_timing::summary());
    }
}

fn clear_progress_line() {
    print!("\r{}\r", " ".repeat(80));
    let _ = io::stdout().flush();
}

fn render_cli_progress(event: &RunProgressEvent) {
    let spinner = ['|', '/', '-', '\\'];
    let spin_idx = ((event.elapsed_wall_s * 10.0) as usize) % spinner.len();
    let mut line = format!(
        "\r{} {}  elapsed={:.3}s",
        spinner[spin_idx],
        event.stage.label(),
        event.elapsed_wall_s
    );
    if let Some(msg) = &event.message {
        line.push_str(&format!("  {}", msg));
    }
    print!("{}", line);
    let _ = io::stdout().flush();
}

fn print_degenerate_note(result: &SimulationResult) {
    if result.is_degenerate() {
        println!("Note: drag exceeds gross thrust at this point; thrust clamped to zero.");
    }
}

fn cmd_presets() -> AppResult<()> {
    println!("Available presets:");
    for p in config_service::list_presets() {
        println!(
            "  {:<22} altitude {:>6.0} m  speed {:>5.0} m/s  CR {:>4.1}  afterburner {}",
            p.name,
            p.altitude_m,
            p.flight_speed_mps,
            p.compression_ratio,
            if p.afterburner { "on" } else { "off" }
        );
    }
    Ok(())
}

fn cmd_compare() -> AppResult<()> {
    let rows = run_service::compare_presets()?;

    println!(
        "{:<22} {:>12} {:>16} {:>10} {:>10}",
        "preset", "thrust [kN]", "TSFC [mg/N·s]", "eta_th %", "eta_o %"
    );
    for row in &rows {
        let s = Summary::from_result(&row.result);
        println!(
            "{:<22} {:>12.2} {:>16} {:>10.2} {:>10.2}",
            row.name,
            s.net_thrust_kn,
            s.tsfc_display(),
            s.thermal_efficiency_pct,
            s.overall_efficiency_pct
        );
    }
    Ok(())
}

fn cmd_validate(config_path: &Path) -> AppResult<()> {
    println!("Validating config: {}", config_path.display());
    let config = config_service::load_config(config_path)?;
    config_service::validate_config(&config)?;
    println!("✓ Config '{}' is valid", config.name);
    Ok(())
}

fn cmd_init(path: &Path, preset: Option<&str>) -> AppResult<()> {
    let config = config_service::init_config(path, preset)?;
    println!("✓ Wrote '{}' to {}", config.name, path.display());
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_sweep(
    parameter: &str,
    start: f64,
    end: f64,
    points: usize,
    log: bool,
    source: &SourceArgs,
    output: Option<&Path>,
    sensitivity: bool,
    timing: bool,
) -> AppResult<()> {
    if timing {
        tj_core::timing::enable_timing();
    }
    let parameter: SweepParameter = parameter.parse()?;
    let sweep_type = if log {
        SweepType::Logarithmic
    } else {
        SweepType::Linear
    };
    let def = SweepDefinition::new(parameter, start, end, points, sweep_type)?;
    let base = config_service::resolve_config(&source.source())?;

    let result = execute_sweep(&base, &def)?;
    println!(
        "Sweep of {} over {} points: {} ok, {} failed",
        parameter,
        result.values.len(),
        result.num_successful,
        result.num_failed
    );

    println!(
        "{:>14} {:>12} {:>16} {:>10} {:>10}",
        format!("{} [{}]", parameter.name(), parameter.unit()),
        "thrust [kN]",
        "TSFC [mg/N·s]",
        "eta_th %",
        "eta_o %"
    );
    for (value, r) in result.values.iter().zip(&result.results) {
        match r {
            Some(r) => {
                let s = Summary::from_result(r);
                println!(
                    "{:>14.4} {:>12.2} {:>16} {:>10.2} {:>10.2}",
                    value,
                    s.net_thrust_kn,
                    s.tsfc_display(),
                    s.thermal_efficiency_pct,
                    s.overall_efficiency_pct
                );
            }
            None => println!("{:>14.4} {:>12}", value, "failed"),
        }
    }
    for (idx, reason) in &result.failures {
        println!("  point {}: {}", idx, reason);
    }

    if sensitivity {
        config_service::validate_config(&base)?;
        let baseline = EngineCycle::new(tj_app::build_parameters(&base)).simulate();
        let fmt = |v: Option<f64>| v.map_or_else(|| "n/a".to_string(), |v| format!("{v:+.2}"));
        println!("\nChange against base configuration:");
        for row in result.sensitivity(&baseline) {
            println!(
                "{:>14.4}  thrust {:>9} %  TSFC {:>9} %",
                row.value,
                fmt(row.thrust_change_pct),
                fmt(row.tsfc_change_pct)
            );
        }
    }

    if let Some(path) = output {
        std::fs::write(path, result.to_csv())?;
        info!(path = %path.display(), "sweep written");
        println!("✓ Wrote {} rows to {}", result.values.len(), path.display());
    }
    print_cycle_timing();
    Ok(())
}

fn cmd_optimize(objective: &str, source: &SourceArgs, max_passes: usize) -> AppResult<()> {
    let objective: Objective = objective.parse()?;
    let base = config_service::resolve_config(&source.source())?;
    let settings = OptimizerSettings {
        max_passes,
        ..OptimizerSettings::default()
    };

    let outcome = optimize(&base, objective, &settings)?;
    println!(
        "Optimizing '{}' for {}: {} evaluations, {} passes, {}",
        base.name,
        objective,
        outcome.evaluations,
        outcome.passes,
        if outcome.converged {
            "converged"
        } else {
            "pass limit reached"
        }
    );

    println!("\n{:<20} {:>12} {:>12}", "variable", "initial", "optimal");
    let rows = [
        (
            "compression_ratio",
            outcome.initial.compression_ratio,
            outcome.optimal.compression_ratio,
        ),
        (
            "fuel_air_ratio",
            outcome.initial.fuel_air_ratio,
            outcome.optimal.fuel_air_ratio,
        ),
        ("eta_comp", outcome.initial.eta_comp, outcome.optimal.eta_comp),
        ("eta_turb", outcome.initial.eta_turb, outcome.optimal.eta_turb),
    ];
    for (name, a, b) in rows {
        println!("{:<20} {:>12.4} {:>12.4}", name, a, b);
    }

    println!();
    print!("{}", render_text("Initial", &outcome.initial_result));
    println!();
    print!("{}", render_text("Optimal", &outcome.optimal_result));

    println!("\nImprovement:");
    for (metric, change) in outcome.metric_improvements() {
        match change {
            Some(pct) => println!("  {:<20} {:+.2} %", metric, pct),
            None => println!("  {:<20} n/a", metric),
        }
    }
    Ok(())
}

fn cmd_runs(store_dir: &Path) -> AppResult<()> {
    let runs = run_service::list_runs(store_dir)?;

    if runs.is_empty() {
        println!("No stored runs in {}", store_dir.display());
    } else {
        println!("Stored runs in {}:", store_dir.display());
        for manifest in runs {
            println!(
                "  {} {} ({})",
                manifest.run_id, manifest.config_name, manifest.timestamp
            );
        }
    }
    Ok(())
}

fn cmd_show_run(store_dir: &Path, run_id: &str) -> AppResult<()> {
    println!("Loading run: {}", run_id);

    let (manifest, result) = run_service::load_run(store_dir, run_id)?;
    println!("  Config:        {}", manifest.config_name);
    println!("  Timestamp:     {}", manifest.timestamp);
    println!("  Model version: {}", manifest.model_version);
    println!();
    print!("{}", render_text(&manifest.config_name, &result));
    print_degenerate_note(&result);
    Ok(())
}

fn cmd_demo() -> AppResult<()> {
    let dry = EngineConfig::default().named("reference");
    let mut reheat = dry.clone();
    reheat.use_afterburner = true;
    reheat.afterburner_fuel_fraction = 0.03;

    for (title, config) in [("Without Afterburner", dry), ("With Afterburner", reheat)] {
        let result = run_service::simulate_config(&config)?;
        print!("{}", render_text(title, &result));
        print_degenerate_note(&result);
        println!();
    }
    Ok(())
}
