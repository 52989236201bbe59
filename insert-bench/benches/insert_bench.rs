//! Criterion benchmark harness: measures one full iteration (open, create
//! table, insert the dataset in one transaction, validate, delete the file)
//! for every insert strategy.
//!
//! Dataset size and seed follow `INSERT_BENCH_ROWS` / `INSERT_BENCH_SEED`.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use insert_bench::config::RunConfig;
use insert_bench::dataset::generate;
use insert_bench::fixture::BenchDir;
use insert_bench::iteration::run_iteration;
use insert_bench::strategy::all_strategies;
use std::time::Duration;

fn bench_insert(c: &mut Criterion) {
    let config = RunConfig::from_env();
    // Storage errors inside iterations are only visible through the logger.
    let _ = bench_core::initialize_logger(config.log_level, config.log_file.as_deref());

    let rows = generate(&config.dataset);

    let mut group = c.benchmark_group("insert");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(50);

    for strategy in all_strategies() {
        let dir = BenchDir::new().expect("Failed to create benchmark directory");
        group.throughput(Throughput::Elements(
            strategy.expected_rows(rows.len()) as u64,
        ));
        group.bench_with_input(
            BenchmarkId::from_parameter(strategy.name()),
            &rows,
            |b, rows| {
                b.iter(|| run_iteration(&dir, strategy.as_ref(), rows).assert_valid());
            },
        );
        dir.close().expect("Failed to remove benchmark directory");
    }
    group.finish();
}

criterion_group!(benches, bench_insert);
criterion_main!(benches);
