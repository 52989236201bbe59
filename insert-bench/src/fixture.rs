//! Scoped on-disk databases: one temporary directory per benchmark, one
//! database file per iteration.

use crate::schema::{configure_connection, DB_FILE_NAME};
use anyhow::{Context, Result};
use rusqlite::{Connection, OpenFlags};
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Files SQLite may leave next to the database.
const SIDECAR_SUFFIXES: [&str; 3] = ["-journal", "-wal", "-shm"];

/// Uniquely named temporary directory that lives for a whole benchmark.
///
/// The directory and anything left inside it are removed on drop, or
/// explicitly with [`BenchDir::close`] when the caller wants teardown errors.
#[derive(Debug)]
pub struct BenchDir {
    dir: TempDir,
}

impl BenchDir {
    pub fn new() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("insert-bench-")
            .tempdir()
            .context("creating benchmark directory")?;
        log::debug!("Benchmark directory {}", dir.path().display());
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the per-iteration database file.
    pub fn db_path(&self) -> PathBuf {
        self.dir.path().join(DB_FILE_NAME)
    }

    /// Start an iteration. The database file is deleted when the returned
    /// guard goes out of scope.
    pub fn iteration(&self) -> IterationDb<'_> {
        IterationDb {
            path: self.db_path(),
            _dir: PhantomData,
        }
    }

    pub fn close(self) -> Result<()> {
        let path = self.dir.path().to_path_buf();
        self.dir
            .close()
            .with_context(|| format!("removing benchmark directory {}", path.display()))
    }
}

/// The database file of one iteration.
#[derive(Debug)]
pub struct IterationDb<'a> {
    path: PathBuf,
    _dir: PhantomData<&'a BenchDir>,
}

impl IterationDb<'_> {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open (creating if needed) for writing, with benchmark pragmas applied.
    pub fn open_read_write(&self) -> rusqlite::Result<Connection> {
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_CREATE | OpenFlags::SQLITE_OPEN_READ_WRITE,
        )?;
        configure_connection(&conn)?;
        Ok(conn)
    }

    pub fn open_read_only(&self) -> rusqlite::Result<Connection> {
        Connection::open_with_flags(&self.path, OpenFlags::SQLITE_OPEN_READ_ONLY)
    }

    fn remove_files(&self) -> io::Result<()> {
        remove_if_exists(&self.path)?;
        for suffix in SIDECAR_SUFFIXES {
            let mut sidecar = self.path.clone().into_os_string();
            sidecar.push(suffix);
            remove_if_exists(Path::new(&sidecar))?;
        }
        Ok(())
    }
}

impl Drop for IterationDb<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.remove_files() {
            log::warn!("Failed to remove {}: {e}", self.path.display());
        }
    }
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match std::fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iteration_file_removed_on_drop() {
        let dir = BenchDir::new().unwrap();
        {
            let db = dir.iteration();
            let conn = db.open_read_write().unwrap();
            conn.execute_batch("create table t (a int)").unwrap();
            drop(conn);
            assert!(db.path().exists());
        }
        assert!(!dir.db_path().exists());
        assert!(dir.path().exists());
    }

    #[test]
    fn dropping_unused_iteration_is_fine() {
        let dir = BenchDir::new().unwrap();
        drop(dir.iteration());
        assert!(!dir.db_path().exists());
    }

    #[test]
    fn close_removes_directory() {
        let dir = BenchDir::new().unwrap();
        let path = dir.path().to_path_buf();
        assert!(path.is_dir());
        dir.close().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn read_only_open_of_missing_file_fails() {
        let dir = BenchDir::new().unwrap();
        let db = dir.iteration();
        assert!(db.open_read_only().is_err());
    }

    #[test]
    fn synchronous_is_off() {
        let dir = BenchDir::new().unwrap();
        let db = dir.iteration();
        let conn = db.open_read_write().unwrap();
        let sync: i64 = conn
            .query_row("PRAGMA synchronous", [], |r| r.get(0))
            .unwrap();
        assert_eq!(sync, 0);
    }
}
