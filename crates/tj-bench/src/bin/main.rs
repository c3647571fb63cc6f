//! Standalone benchmark runner for the turbojet simulator.

use std::fs;
use std::path::PathBuf;
use tj_bench::{BenchmarkSuite, default_benchmarks, run_scenario};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let crate_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let repo_root = crate_path
        .parent()
        .and_then(|p| p.parent())
        .ok_or("Could not determine repo root")?
        .to_path_buf();

    println!("Turbojet Benchmark Suite");
    println!("========================\n");

    let benchmarks = default_benchmarks();
    println!("Running {} benchmarks...\n", benchmarks.len());

    let mut results = Vec::new();

    for (idx, scenario) in benchmarks.iter().enumerate() {
        print!("[{}/{}] {} ... ", idx + 1, benchmarks.len(), scenario.name);
        std::io::Write::flush(&mut std::io::stdout())?;

        match run_scenario(scenario) {
            Ok(result) => {
                println!("OK");
                results.push(result);
            }
            Err(e) => {
                println!("FAILED");
                eprintln!("  Error: {}", e);
            }
        }
    }

    println!("\n========================");
    println!("Benchmark Results Summary");
    println!("========================\n");

    for result in &results {
        println!("{}", result.scenario.name);

        if let Some(t) = &result.timing {
            println!("  Iterations:  {}", t.count);
            println!(
                "  Per call:    {:.6} ms (mean), {:.6} ms (median), std {:.6} ms",
                t.mean_ms, t.median_ms, t.std_ms
            );
            println!("  Range:       {:.6} .. {:.6} ms", t.min_ms, t.max_ms);
            println!("  Throughput:  {:.0} simulations/s", t.per_second);
        }

        if let Some(s) = &result.sweep {
            println!("  Points:      {}", s.points);
            println!(
                "  Sequential:  {:.4}s ({:.0} points/s)",
                s.sequential_s, s.sequential_per_second
            );
            println!(
                "  Parallel:    {:.4}s ({:.0} points/s)",
                s.parallel_s, s.parallel_per_second
            );
            println!("  Speedup:     {:.2}x", s.speedup);
            println!(
                "  Per point:   {:.3e}s over {} evaluations",
                s.mean_point_s, s.timed_points
            );
        }

        println!();
    }

    let baseline_json = serde_json::to_string_pretty(&BenchmarkSuite::new(results))?;

    let baseline_dir = repo_root.join("benchmarks");
    fs::create_dir_all(&baseline_dir)?;
    let baseline_path = baseline_dir.join("baseline.json");
    fs::write(&baseline_path, baseline_json)?;

    println!("Baseline saved to: {}", baseline_path.display());

    Ok(())
}
