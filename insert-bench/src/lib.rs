//! SQLite Insert Strategy Benchmark
//!
//! Measures how statement preparation and multi-row batching affect insert
//! throughput into a file-backed SQLite database. Every strategy replays the
//! same seeded dataset into a fresh database file inside one transaction, and
//! the row count is validated afterwards.
//!
//! Strategies compared:
//! - **single/no_prepare**: one statement prepared per row
//! - **single/prepared**: one statement prepared once, rebound per row
//! - **multi/no_prepare_8**: an 8-row statement prepared per batch
//! - **multi/prepared_{8,16,32}**: an N-row statement prepared once
//!
//! Run benchmarks: `cargo bench`
//! Run the standalone report: `cargo run --release`
//! Run tests: `cargo test`

pub mod config;
pub mod dataset;
pub mod fixture;
pub mod iteration;
pub mod report;
pub mod schema;
pub mod strategy;
