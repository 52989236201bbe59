//! Table definition, connection settings and the SQL shared by all insert
//! strategies.

use crate::dataset::Row;
use rusqlite::{Connection, Statement};

pub const TABLE_NAME: &str = "test_table";

/// File name of the per-iteration database inside the benchmark directory.
pub const DB_FILE_NAME: &str = "test.db";

/// Bound parameters per row: `path`, `x`, `y`, `z`.
pub const COLUMNS_PER_ROW: usize = 4;

const CREATE_TABLE: &str = "create table if not exists test_table (
    path text not null,
    x int,
    y real,
    z real
) strict";

/// Configure a connection for insert measurements.
///
/// Turns off `fsync` (`synchronous = OFF`). This trades durability for
/// repeatable timings and is only acceptable because every database written
/// here is thrown away after one iteration. Never use it for real data.
pub fn configure_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA synchronous = OFF;")
}

/// Create `test_table` unless it already exists.
pub fn create_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(CREATE_TABLE)
}

/// `insert into test_table values (?, ?, ?, ?)` with `rows` value groups.
pub fn insert_sql(rows: usize) -> String {
    let group = "(?, ?, ?, ?)";
    let mut sql = String::with_capacity(32 + rows * (group.len() + 2));
    sql.push_str("insert into ");
    sql.push_str(TABLE_NAME);
    sql.push_str(" values ");
    for i in 0..rows {
        if i > 0 {
            sql.push_str(", ");
        }
        sql.push_str(group);
    }
    sql
}

/// Bind `row` to the value group at `slot` (zero based) of an insert
/// statement, i.e. parameters `slot * 4 + 1 ..= slot * 4 + 4`.
pub fn bind_row(stmt: &mut Statement<'_>, slot: usize, row: &Row) -> rusqlite::Result<()> {
    let base = slot * COLUMNS_PER_ROW;
    stmt.raw_bind_parameter(base + 1, row.path.as_str())?;
    stmt.raw_bind_parameter(base + 2, row.x)?;
    stmt.raw_bind_parameter(base + 3, row.y)?;
    stmt.raw_bind_parameter(base + 4, row.z)?;
    Ok(())
}

pub fn count_rows(conn: &Connection) -> rusqlite::Result<usize> {
    let count: i64 = conn.query_row("select count(*) from test_table", [], |r| r.get(0))?;
    Ok(count as usize)
}

/// All rows in insertion order.
pub fn read_rows(conn: &Connection) -> rusqlite::Result<Vec<Row>> {
    let mut stmt = conn.prepare("select path, x, y, z from test_table order by rowid")?;
    let rows = stmt
        .query_map([], |r| {
            Ok(Row {
                path: r.get(0)?,
                x: r.get(1)?,
                y: r.get(2)?,
                z: r.get(3)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}
