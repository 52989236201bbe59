//! Standalone benchmark runner that prints the formatted report.
//!
//! Settings come from the environment (see [`insert_bench::config`]).
//!
//! Usage:
//!   cargo run --release
//!   INSERT_BENCH_SAMPLES=200 INSERT_BENCH_LOG_LEVEL=debug cargo run --release

use insert_bench::config::RunConfig;
use insert_bench::dataset::generate;
use insert_bench::iteration::run_benchmark;
use insert_bench::report::print_report;
use insert_bench::strategy::all_strategies;
use std::process;

fn main() {
    let config = RunConfig::from_env();

    bench_core::initialize_logger(config.log_level, config.log_file.as_deref()).unwrap_or_else(
        |e| {
            eprintln!("Failed to initialize logger: {e:#}. Exiting.");
            process::exit(1);
        },
    );

    println!("Running SQLite insert strategy benchmark...");
    println!("  Rows:          {}", config.dataset.rows);
    println!("  Seed:          {}", config.dataset.seed);
    println!("  Warmup iters:  {}", config.warmup_iterations);
    println!("  Sample iters:  {}", config.sample_iterations);

    let rows = generate(&config.dataset);

    let mut results = Vec::new();
    for strategy in all_strategies() {
        let dropped = rows.len() - strategy.expected_rows(rows.len());
        if dropped > 0 {
            log::warn!(
                "{} skips the last {dropped} rows ({} is not a multiple of {})",
                strategy.name(),
                rows.len(),
                strategy.batch_width()
            );
        }

        eprint!("  Benchmarking {}...", strategy.name());
        match run_benchmark(
            strategy.as_ref(),
            &rows,
            config.warmup_iterations,
            config.sample_iterations,
        ) {
            Ok(result) => {
                eprintln!(" done ({:.2}ms mean)", result.mean_us() / 1000.0);
                results.push(result);
            }
            Err(e) => {
                eprintln!(" failed");
                log::error!("{}: benchmark setup failed: {e:#}", strategy.name());
                process::exit(1);
            }
        }
    }

    print_report(&results);
}
