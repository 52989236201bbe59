//! The insert strategies under comparison.
//!
//! All strategies write the same rows in the same order; they differ only in
//! whether the insert statement is prepared once or per execution, and in how
//! many rows one execution carries.

use crate::dataset::Row;
use crate::schema::{bind_row, insert_sql};
use rusqlite::Transaction;

/// Batch widths of the prepared multi-row strategies.
pub const PREPARED_BATCH_WIDTHS: [usize; 3] = [8, 16, 32];

/// Batch width of the multi-row strategy that re-prepares per batch.
pub const UNPREPARED_BATCH_WIDTH: usize = 8;

/// What one call to [`InsertStrategy::insert`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertStats {
    pub rows_inserted: usize,
    pub statements_executed: usize,
    /// Trailing rows that did not fill a whole batch and were not written.
    pub rows_dropped: usize,
}

/// Rows a strategy with the given batch width writes out of `len` rows.
///
/// Batched strategies skip a trailing partial batch, so this is `len` rounded
/// down to a multiple of `batch_width`.
pub fn expected_rows(len: usize, batch_width: usize) -> usize {
    len - len % batch_width
}

/// Implemented by each insert variant.
///
/// `insert` runs inside a transaction owned by the caller and must write
/// rows in dataset order.
pub trait InsertStrategy {
    /// Human-readable name for reports and benchmark ids.
    fn name(&self) -> &str;

    /// Rows carried by one executed statement.
    fn batch_width(&self) -> usize;

    /// Whether the statement is prepared once and reused.
    fn prepares_once(&self) -> bool;

    fn insert(&self, tx: &Transaction<'_>, rows: &[Row]) -> rusqlite::Result<InsertStats>;

    fn expected_rows(&self, len: usize) -> usize {
        expected_rows(len, self.batch_width())
    }
}

/// One row per executed statement.
#[derive(Debug, Clone)]
pub struct SingleRowInsert {
    name: String,
    prepared: bool,
}

impl SingleRowInsert {
    pub fn new(prepared: bool) -> Self {
        let name = if prepared {
            "single/prepared"
        } else {
            "single/no_prepare"
        };
        Self {
            name: name.to_string(),
            prepared,
        }
    }
}

impl InsertStrategy for SingleRowInsert {
    fn name(&self) -> &str {
        &self.name
    }

    fn batch_width(&self) -> usize {
        1
    }

    fn prepares_once(&self) -> bool {
        self.prepared
    }

    fn insert(&self, tx: &Transaction<'_>, rows: &[Row]) -> rusqlite::Result<InsertStats> {
        let sql = insert_sql(1);
        let mut stats = InsertStats::default();

        if self.prepared {
            let mut stmt = tx.prepare(&sql)?;
            for row in rows {
                bind_row(&mut stmt, 0, row)?;
                stats.rows_inserted += stmt.raw_execute()?;
                stats.statements_executed += 1;
            }
        } else {
            for row in rows {
                let mut stmt = tx.prepare(&sql)?;
                bind_row(&mut stmt, 0, row)?;
                stats.rows_inserted += stmt.raw_execute()?;
                stats.statements_executed += 1;
            }
        }

        Ok(stats)
    }
}

/// `width` rows per executed statement.
#[derive(Debug, Clone)]
pub struct MultiRowInsert {
    name: String,
    width: usize,
    prepared: bool,
}

impl MultiRowInsert {
    /// # Panics
    /// If `width` is zero.
    pub fn new(width: usize, prepared: bool) -> Self {
        assert!(width > 0, "batch width must be > 0");
        let name = if prepared {
            format!("multi/prepared_{width}")
        } else {
            format!("multi/no_prepare_{width}")
        };
        Self {
            name,
            width,
            prepared,
        }
    }
}

impl InsertStrategy for MultiRowInsert {
    fn name(&self) -> &str {
        &self.name
    }

    fn batch_width(&self) -> usize {
        self.width
    }

    fn prepares_once(&self) -> bool {
        self.prepared
    }

    fn insert(&self, tx: &Transaction<'_>, rows: &[Row]) -> rusqlite::Result<InsertStats> {
        let sql = insert_sql(self.width);
        let batches = rows.chunks_exact(self.width);
        let mut stats = InsertStats {
            rows_dropped: batches.remainder().len(),
            ..InsertStats::default()
        };
        if stats.rows_dropped > 0 {
            log::debug!(
                "{}: dropping {} trailing rows that do not fill a batch",
                self.name,
                stats.rows_dropped
            );
        }

        let mut reused = if self.prepared {
            Some(tx.prepare(&sql)?)
        } else {
            None
        };

        for batch in batches {
            let mut fresh;
            let stmt = match reused.as_mut() {
                Some(stmt) => stmt,
                None => {
                    fresh = tx.prepare(&sql)?;
                    &mut fresh
                }
            };
            for (slot, row) in batch.iter().enumerate() {
                bind_row(stmt, slot, row)?;
            }
            stats.rows_inserted += stmt.raw_execute()?;
            stats.statements_executed += 1;
        }

        Ok(stats)
    }
}

/// Every benchmarked strategy, baseline first.
pub fn all_strategies() -> Vec<Box<dyn InsertStrategy>> {
    let mut strategies: Vec<Box<dyn InsertStrategy>> = vec![
        Box::new(SingleRowInsert::new(false)),
        Box::new(SingleRowInsert::new(true)),
        Box::new(MultiRowInsert::new(UNPREPARED_BATCH_WIDTH, false)),
    ];
    for width in PREPARED_BATCH_WIDTHS {
        strategies.push(Box::new(MultiRowInsert::new(width, true)));
    }
    strategies
}
