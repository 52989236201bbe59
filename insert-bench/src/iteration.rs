//! One benchmark iteration: create, insert, validate, clean up.

use crate::dataset::Row;
use crate::fixture::{BenchDir, IterationDb};
use crate::report::StrategyResult;
use crate::schema::{count_rows, create_table};
use crate::strategy::{InsertStats, InsertStrategy};
use anyhow::Result;
use std::time::Instant;

/// How an iteration ended.
#[derive(Debug)]
pub enum IterationOutcome {
    /// Transaction committed and the row count matched.
    Inserted { stats: InsertStats },
    /// SQLite reported an error while writing; nothing was committed.
    /// `rows_visible` is what validation found afterwards (`None` if the
    /// table could not be read at all).
    StorageError {
        error: rusqlite::Error,
        rows_visible: Option<usize>,
    },
    /// Transaction committed but the table holds the wrong number of rows.
    Mismatch { expected: usize, actual: usize },
}

impl IterationOutcome {
    pub fn is_inserted(&self) -> bool {
        matches!(self, IterationOutcome::Inserted { .. })
    }

    /// Panic if the row count did not match.
    ///
    /// Storage errors are reported and tolerated, a mismatch means the insert
    /// logic itself is broken.
    pub fn assert_valid(&self) {
        if let IterationOutcome::Mismatch { expected, actual } = self {
            panic!("row count mismatch: expected {expected}, found {actual}");
        }
    }
}

/// Result of re-reading the row count after the transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validation {
    pub expected: usize,
    pub actual: usize,
}

impl Validation {
    pub fn is_match(&self) -> bool {
        self.expected == self.actual
    }
}

/// Re-open the database read-only and compare its row count to `expected`.
pub fn validate(db: &IterationDb<'_>, expected: usize) -> rusqlite::Result<Validation> {
    let conn = db.open_read_only()?;
    let actual = count_rows(&conn)?;
    Ok(Validation { expected, actual })
}

fn insert_all(
    db: &IterationDb<'_>,
    strategy: &dyn InsertStrategy,
    rows: &[Row],
) -> rusqlite::Result<InsertStats> {
    let mut conn = db.open_read_write()?;
    let tx = conn.transaction()?;
    create_table(&tx)?;
    let stats = strategy.insert(&tx, rows)?;
    tx.commit()?;
    Ok(stats)
}

/// Run one iteration of `strategy` in `dir`.
///
/// Storage errors are logged and returned as an outcome instead of aborting.
/// Validation runs whatever happened, and the database file is removed before
/// this returns.
pub fn run_iteration(
    dir: &BenchDir,
    strategy: &dyn InsertStrategy,
    rows: &[Row],
) -> IterationOutcome {
    let db = dir.iteration();
    let expected = strategy.expected_rows(rows.len());

    match insert_all(&db, strategy, rows) {
        Ok(stats) => match validate(&db, expected) {
            Ok(v) if v.is_match() => IterationOutcome::Inserted { stats },
            Ok(v) => IterationOutcome::Mismatch {
                expected: v.expected,
                actual: v.actual,
            },
            Err(error) => {
                log::error!("{}: validation failed: {error}", strategy.name());
                IterationOutcome::StorageError {
                    error,
                    rows_visible: None,
                }
            }
        },
        Err(error) => {
            log::error!("{}: error occurred: {error}", strategy.name());
            let rows_visible = validate(&db, expected).ok().map(|v| v.actual);
            IterationOutcome::StorageError {
                error,
                rows_visible,
            }
        }
    }
}

/// Time `samples` iterations of `strategy` after `warmup` untimed ones.
///
/// The dataset is shared read-only by every iteration. The benchmark
/// directory is created up front and removed at the end; failures doing
/// either are returned as errors.
///
/// # Panics
/// If any iteration ends in [`IterationOutcome::Mismatch`].
pub fn run_benchmark(
    strategy: &dyn InsertStrategy,
    rows: &[Row],
    warmup: u32,
    samples: u32,
) -> Result<StrategyResult> {
    let dir = BenchDir::new()?;
    let mut result = StrategyResult::new(strategy.name(), strategy.expected_rows(rows.len()));

    for _ in 0..warmup {
        run_iteration(&dir, strategy, rows).assert_valid();
    }

    for _ in 0..samples {
        let start = Instant::now();
        let outcome = run_iteration(&dir, strategy, rows);
        let elapsed = start.elapsed();
        outcome.assert_valid();
        result.add_sample(elapsed, outcome.is_inserted());
    }

    dir.close()?;
    Ok(result)
}
