//! Runner settings resolved from the environment.
//!
//! | Variable                 | Default |
//! |--------------------------|---------|
//! | `INSERT_BENCH_ROWS`      | 1024    |
//! | `INSERT_BENCH_SEED`      | 831     |
//! | `INSERT_BENCH_WARMUP`    | 3       |
//! | `INSERT_BENCH_SAMPLES`   | 50      |
//! | `INSERT_BENCH_LOG_LEVEL` | info    |
//! | `INSERT_BENCH_LOG_FILE`  | none    |

use crate::dataset::{DatasetParams, DEFAULT_ROWS, DEFAULT_SEED};
use bench_core::env::{resolve_log_file, resolve_log_level, resolve_parsed};
use log::LevelFilter;

pub const DEFAULT_WARMUP_ITERATIONS: u32 = 3;
pub const DEFAULT_SAMPLE_ITERATIONS: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub dataset: DatasetParams,
    pub warmup_iterations: u32,
    pub sample_iterations: u32,
    pub log_level: LevelFilter,
    pub log_file: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            dataset: DatasetParams::default(),
            warmup_iterations: DEFAULT_WARMUP_ITERATIONS,
            sample_iterations: DEFAULT_SAMPLE_ITERATIONS,
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl RunConfig {
    pub fn from_env() -> Self {
        Self {
            dataset: DatasetParams::new(
                resolve_parsed("INSERT_BENCH_ROWS", DEFAULT_ROWS),
                resolve_parsed("INSERT_BENCH_SEED", DEFAULT_SEED),
            ),
            warmup_iterations: resolve_parsed("INSERT_BENCH_WARMUP", DEFAULT_WARMUP_ITERATIONS),
            sample_iterations: resolve_parsed("INSERT_BENCH_SAMPLES", DEFAULT_SAMPLE_ITERATIONS),
            log_level: resolve_log_level("INSERT_BENCH_LOG_LEVEL", LevelFilter::Info),
            log_file: resolve_log_file("INSERT_BENCH_LOG_FILE", None),
        }
    }
}
