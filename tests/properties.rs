use itertools::Itertools;
use memory_match::{DimensionError, GameError, Grid};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use statrs::distribution::{ChiSquared, ContinuousCDF};
use std::collections::HashMap;

proptest! {
    #[test]
    fn generate_pairs_every_value(rows in 1i32..16, half_cols in 1i32..8, seed in any::<u64>()) {
        let cols = half_cols * 2;
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = Grid::generate_with_rng(rows, cols, &mut rng).unwrap();

        prop_assert_eq!(grid.dimensions(), (rows as usize, cols as usize));
        let counts = grid.values().iter().copied().counts();
        let pairs = (rows * cols / 2) as u32;
        prop_assert_eq!(counts.len(), pairs as usize);
        for value in 1..=pairs {
            prop_assert_eq!(counts.get(&value), Some(&2));
        }
    }

    #[test]
    fn generate_rejects_odd_totals(half_rows in 0i32..10, half_cols in 0i32..10) {
        let (rows, cols) = (half_rows * 2 + 1, half_cols * 2 + 1);
        prop_assert_eq!(
            Grid::generate(rows, cols),
            Err(GameError::InvalidDimensions(DimensionError::OddTotal { rows, cols }))
        );
    }

    #[test]
    fn generate_rejects_non_positive(rows in -20i32..=0, cols in -20i32..20) {
        prop_assert_eq!(
            Grid::generate(rows, cols),
            Err(GameError::InvalidDimensions(DimensionError::NonPositive { rows, cols }))
        );
        prop_assert_eq!(
            Grid::generate(cols.abs() + 1, rows),
            Err(GameError::InvalidDimensions(DimensionError::NonPositive {
                rows: cols.abs() + 1,
                cols: rows
            }))
        );
    }
}

#[test]
fn test_shuffle_is_roughly_uniform() {
    // A 2x2 grid has 4!/(2!2!) = 6 distinct layouts
    const TRIALS: usize = 12_000;
    let mut rng = StdRng::seed_from_u64(2024);
    let mut layouts: HashMap<Vec<Vec<u32>>, usize> = HashMap::new();

    for _ in 0..TRIALS {
        let grid = Grid::generate_with_rng(2, 2, &mut rng).unwrap();
        *layouts.entry(grid.to_rows()).or_default() += 1;
    }

    assert_eq!(layouts.len(), 6);
    let expected = TRIALS as f64 / 6.0;
    let statistic: f64 = layouts
        .values()
        .map(|&observed| (observed as f64 - expected).powi(2) / expected)
        .sum();
    let critical = ChiSquared::new(5.0).unwrap().inverse_cdf(0.9999);
    assert!(
        statistic < critical,
        "chi-square {} exceeds {}",
        statistic,
        critical
    );
}
