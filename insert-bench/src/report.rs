//! Report module: prints human-readable timings for each insert strategy.

use std::time::Duration;

/// Strategy every other one is compared against.
pub const BASELINE_STRATEGY: &str = "single/no_prepare";

/// Timings collected for one strategy.
#[derive(Debug, Clone)]
pub struct StrategyResult {
    pub strategy_name: String,
    /// Rows each successful iteration writes.
    pub rows_per_iteration: usize,
    pub durations: Vec<Duration>,
    /// Timed iterations that ended in a storage error.
    pub storage_errors: usize,
}

impl StrategyResult {
    pub fn new(strategy_name: &str, rows_per_iteration: usize) -> Self {
        Self {
            strategy_name: strategy_name.to_string(),
            rows_per_iteration,
            durations: Vec::new(),
            storage_errors: 0,
        }
    }

    pub fn add_sample(&mut self, elapsed: Duration, inserted: bool) {
        self.durations.push(elapsed);
        if !inserted {
            self.storage_errors += 1;
        }
    }

    pub fn mean_us(&self) -> f64 {
        if self.durations.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.durations.iter().map(|d| d.as_secs_f64() * 1e6).sum();
        sum / self.durations.len() as f64
    }

    pub fn percentile_us(&self, pct: f64) -> f64 {
        if self.durations.is_empty() {
            return 0.0;
        }
        let mut sorted: Vec<f64> = self
            .durations
            .iter()
            .map(|d| d.as_secs_f64() * 1e6)
            .collect();
        sorted.sort_by(f64::total_cmp);
        let idx = ((pct / 100.0) * (sorted.len() - 1) as f64).round() as usize;
        sorted[idx.min(sorted.len() - 1)]
    }

    /// Throughput over the mean iteration, fixture setup and validation
    /// included.
    pub fn rows_per_sec(&self) -> f64 {
        let mean = self.mean_us();
        if mean <= 0.0 {
            return 0.0;
        }
        self.rows_per_iteration as f64 * 1_000_000.0 / mean
    }
}

/// Print per-strategy statistics and a comparison against the baseline.
pub fn print_report(results: &[StrategyResult]) {
    println!("\n{}", "=".repeat(80));
    println!("  SQLite Insert Strategy Report");
    println!("{}", "=".repeat(80));

    for result in results {
        let mean = result.mean_us();
        println!("\n  Strategy: {}", result.strategy_name);
        println!("  {}", "-".repeat(60));
        println!("  Samples:         {:>10}", result.durations.len());
        println!("  Rows/iteration:  {:>10}", result.rows_per_iteration);
        println!(
            "  Mean:            {:>10.0}µs  ({:.2}ms)",
            mean,
            mean / 1000.0
        );
        println!("  p50:             {:>10.0}µs", result.percentile_us(50.0));
        println!("  p95:             {:>10.0}µs", result.percentile_us(95.0));
        println!("  p99:             {:>10.0}µs", result.percentile_us(99.0));
        println!("  Throughput:      {:>10.0} rows/s", result.rows_per_sec());
        if result.storage_errors > 0 {
            println!("  Storage errors:  {:>10}", result.storage_errors);
        }
    }

    println!("\n{}", "=".repeat(80));

    let baseline = results
        .iter()
        .find(|r| r.strategy_name == BASELINE_STRATEGY)
        .map(StrategyResult::mean_us)
        .filter(|mean| *mean > 0.0);

    if results.len() >= 2 {
        println!("\n  Comparison Summary:");
        println!(
            "  {:20} {:>12} {:>12} {:>14} {:>10}",
            "Strategy", "Mean (µs)", "p95 (µs)", "Rows/s", "Speedup"
        );
        println!("  {}", "-".repeat(72));
        for r in results {
            let speedup = match baseline {
                Some(base) if r.mean_us() > 0.0 => format!("{:.2}x", base / r.mean_us()),
                _ => "-".to_string(),
            };
            println!(
                "  {:20} {:>12.0} {:>12.0} {:>14.0} {:>10}",
                r.strategy_name,
                r.mean_us(),
                r.percentile_us(95.0),
                r.rows_per_sec(),
                speedup
            );
        }
    }

    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(us: &[u64]) -> StrategyResult {
        let mut r = StrategyResult::new("multi/prepared_8", 1024);
        for &d in us {
            r.add_sample(Duration::from_micros(d), true);
        }
        r
    }

    #[test]
    fn empty_result_is_all_zero() {
        let r = StrategyResult::new("single/prepared", 1024);
        assert_eq!(r.mean_us(), 0.0);
        assert_eq!(r.percentile_us(95.0), 0.0);
        assert_eq!(r.rows_per_sec(), 0.0);
    }

    #[test]
    fn mean_and_percentiles() {
        let r = result_with(&[400, 100, 300, 200, 500]);
        assert!((r.mean_us() - 300.0).abs() < 1e-6);
        assert!((r.percentile_us(0.0) - 100.0).abs() < 1e-6);
        assert!((r.percentile_us(50.0) - 300.0).abs() < 1e-6);
        assert!((r.percentile_us(100.0) - 500.0).abs() < 1e-6);
    }

    #[test]
    fn throughput_uses_mean() {
        let r = result_with(&[1024, 1024]);
        assert!((r.rows_per_sec() - 1_000_000.0).abs() < 1e-3);
    }

    #[test]
    fn storage_errors_counted() {
        let mut r = result_with(&[10]);
        r.add_sample(Duration::from_micros(10), false);
        assert_eq!(r.storage_errors, 1);
        assert_eq!(r.durations.len(), 2);
    }
}
