//! Lightweight performance timing utilities.
//!
//! Process-wide accumulators for cycle evaluations and a per-run phase
//! breakdown. Summaries are shown when `TJ_TIMING` is set or after
//! [`enable_timing`].

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

static ENABLED: AtomicBool = AtomicBool::new(false);

/// Enable performance timing globally.
pub fn enable_timing() {
    ENABLED.store(true, Ordering::Relaxed);
}

/// Check if timing is enabled.
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed) || std::env::var("TJ_TIMING").is_ok()
}

/// Accumulating timer for tracking total time across multiple calls.
pub struct AccumulatingTimer {
    total_ns: AtomicU64,
    count: AtomicU64,
}

impl Default for AccumulatingTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl AccumulatingTimer {
    /// Create a new accumulating timer.
    pub const fn new() -> Self {
        Self {
            total_ns: AtomicU64::new(0),
            count: AtomicU64::new(0),
        }
    }

    /// Record a timing measurement.
    pub fn record(&self, duration_s: f64) {
        let nanos = (duration_s * 1e9) as u64;
        self.total_ns.fetch_add(nanos, Ordering::Relaxed);
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total time spent (in seconds).
    pub fn total_seconds(&self) -> f64 {
        self.total_ns.load(Ordering::Relaxed) as f64 / 1e9
    }

    /// Get number of calls.
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    /// Get average time per call (in seconds).
    pub fn average_seconds(&self) -> f64 {
        let count = self.count();
        if count > 0 {
            self.total_seconds() / count as f64
        } else {
            0.0
        }
    }

    /// Reset the timer.
    pub fn reset(&self) {
        self.total_ns.store(0, Ordering::Relaxed);
        self.count.store(0, Ordering::Relaxed);
    }
}

/// Process-wide counters for cycle evaluations.
pub mod cycle_timing {
    use super::AccumulatingTimer;

    /// Time spent in `EngineCycle::simulate` calls made through the run service
    pub static SIMULATE_CALLS: AccumulatingTimer = AccumulatingTimer::new();
    /// Time spent evaluating sweep points
    pub static SWEEP_POINTS: AccumulatingTimer = AccumulatingTimer::new();

    /// Reset all cycle timers.
    pub fn reset_all() {
        SIMULATE_CALLS.reset();
        SWEEP_POINTS.reset();
    }

    /// One line per accumulator that has recorded anything.
    pub fn summary() -> String {
        [("simulate calls", &SIMULATE_CALLS), ("sweep points", &SWEEP_POINTS)]
            .into_iter()
            .filter(|(_, timer)| timer.count() > 0)
            .map(|(label, timer)| {
                format!(
                    "{:<15} {:>8} x {:.3e}s = {:.6}s\n",
                    label,
                    timer.count(),
                    timer.average_seconds(),
                    timer.total_seconds()
                )
            })
            .collect()
    }
}

/// Performance statistics collector for a single run.
#[derive(Debug, Clone, Default)]
pub struct PerfStats {
    pub load_time_s: f64,
    pub validate_time_s: f64,
    pub simulate_time_s: f64,
    pub save_time_s: f64,
}

impl PerfStats {
    pub fn total_s(&self) -> f64 {
        self.load_time_s + self.validate_time_s + self.simulate_time_s + self.save_time_s
    }

    /// Render a formatted summary, or None when timing is disabled.
    pub fn summary(&self) -> Option<String> {
        if !is_enabled() {
            return None;
        }

        let mut out = String::from("=== Performance Summary ===\n");
        out.push_str(&format!("Load time:      {:.6}s\n", self.load_time_s));
        out.push_str(&format!("Validate time:  {:.6}s\n", self.validate_time_s));
        out.push_str(&format!("Simulate time:  {:.6}s\n", self.simulate_time_s));
        if self.save_time_s > 0.0 {
            out.push_str(&format!("Save time:      {:.6}s\n", self.save_time_s));
        }
        out.push_str(&format!("Total:          {:.6}s\n", self.total_s()));
        out.push_str("===========================");
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulating_timer_averages() {
        let timer = AccumulatingTimer::new();
        assert_eq!(timer.average_seconds(), 0.0);
        timer.record(0.002);
        timer.record(0.004);
        assert_eq!(timer.count(), 2);
        assert!((timer.total_seconds() - 0.006).abs() < 1e-9);
        assert!((timer.average_seconds() - 0.003).abs() < 1e-9);
        timer.reset();
        assert_eq!(timer.count(), 0);
    }

    #[test]
    fn cycle_summary_lists_recorded_timers() {
        cycle_timing::SWEEP_POINTS.record(0.001);
        let text = cycle_timing::summary();
        assert!(text.contains("sweep points"));
    }

    #[test]
    fn perf_stats_total_sums_phases() {
        let stats = PerfStats {
            load_time_s: 0.5,
            validate_time_s: 0.25,
            simulate_time_s: 0.125,
            save_time_s: 0.125,
        };
        assert!((stats.total_s() - 1.0).abs() < 1e-12);
    }
}
