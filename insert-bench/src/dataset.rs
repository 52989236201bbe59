//! Deterministic synthetic rows replayed by every insert strategy.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of rows inserted per iteration unless overridden.
pub const DEFAULT_ROWS: usize = 1024;

/// Seed of the reference dataset.
pub const DEFAULT_SEED: u64 = 831;

/// Value of the `path` column for every generated row.
pub const ROW_PATH: &str = "/Users/family/Devel/vcpkg/scripts/buildsystems";

/// One record of `test_table`.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub path: String,
    pub x: i32,
    pub y: f64,
    pub z: f32,
}

/// Size and seed of a generated dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetParams {
    pub rows: usize,
    pub seed: u64,
}

impl DatasetParams {
    pub fn new(rows: usize, seed: u64) -> Self {
        Self { rows, seed }
    }
}

impl Default for DatasetParams {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_SEED)
    }
}

/// Generate `params.rows` rows from a generator seeded with `params.seed`.
///
/// Fields are drawn per row in column order from the standard distribution of
/// their type: `x` covers the whole `i32` range, `y` and `z` are uniform in
/// `[0, 1)`.
pub fn generate(params: &DatasetParams) -> Vec<Row> {
    let mut rng = StdRng::seed_from_u64(params.seed);

    (0..params.rows)
        .map(|_| Row {
            path: ROW_PATH.to_string(),
            x: rng.gen::<i32>(),
            y: rng.gen::<f64>(),
            z: rng.gen::<f32>(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_rows() {
        let params = DatasetParams::default();
        assert_eq!(generate(&params), generate(&params));
    }

    #[test]
    fn different_seed_different_rows() {
        let a = generate(&DatasetParams::new(16, 831));
        let b = generate(&DatasetParams::new(16, 832));
        assert_ne!(a, b);
    }

    #[test]
    fn shorter_dataset_is_a_prefix() {
        let long = generate(&DatasetParams::new(1024, DEFAULT_SEED));
        let short = generate(&DatasetParams::new(1000, DEFAULT_SEED));
        assert_eq!(short.len(), 1000);
        assert_eq!(&long[..1000], &short[..]);
    }

    #[test]
    fn floats_stay_in_unit_interval() {
        for row in generate(&DatasetParams::default()) {
            assert_eq!(row.path, ROW_PATH);
            assert!((0.0..1.0).contains(&row.y));
            assert!((0.0..1.0).contains(&row.z));
        }
    }

    #[test]
    fn zero_rows() {
        assert!(generate(&DatasetParams::new(0, DEFAULT_SEED)).is_empty());
    }
}
