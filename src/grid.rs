use crate::config::check_dimensions;
use crate::{DimensionError, GameError, Position};
use itertools::Itertools;
use ndarray::Array2;
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    values: Array2<u32>,
}

impl Grid {
    pub fn generate(rows: i32, cols: i32) -> Result<Self, GameError> {
        Self::generate_with_rng(rows, cols, &mut rand::thread_rng())
    }

    pub fn generate_with_rng<R: Rng + ?Sized>(
        rows: i32,
        cols: i32,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        check_dimensions(rows, cols)?;
        let (rows, cols) = (rows as usize, cols as usize);
        let pairs = (rows * cols / 2) as u32;

        let mut cards: Vec<u32> = (1..=pairs).chain(1..=pairs).collect();
        // Fisher-Yates
        cards.shuffle(rng);

        Ok(Self {
            values: Array2::from_shape_fn((rows, cols), |(r, c)| cards[r * cols + c]),
        })
    }

    /// Every value must be positive and appear exactly twice.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, GameError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some((row, cells)) = rows.iter().find_position(|cells| cells.len() != width) {
            return Err(DimensionError::Ragged {
                row,
                len: cells.len(),
                expected: width,
            }
            .into());
        }
        check_dimensions(height as i32, width as i32)?;

        let unpaired = rows
            .iter()
            .flatten()
            .copied()
            .counts()
            .into_iter()
            .filter(|&(value, count)| value == 0 || count != 2)
            .map(|(value, _)| value)
            .min();
        if let Some(value) = unpaired {
            return Err(GameError::UnpairedValue(value));
        }

        let flat: Vec<u32> = rows.into_iter().flatten().collect();
        Ok(Self {
            values: Array2::from_shape_fn((height, width), |(r, c)| flat[r * width + c]),
        })
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.to_index()
            .is_some_and(|(r, c)| r < self.values.nrows() && c < self.values.ncols())
    }

    pub fn value_at(&self, pos: Position) -> Result<u32, GameError> {
        pos.to_index()
            .and_then(|index| self.values.get(index).copied())
            .ok_or(GameError::OutOfBounds(pos))
    }

    /// Returns `(rows, cols)`.
    pub fn dimensions(&self) -> (usize, usize) {
        self.values.dim()
    }

    pub fn pair_count(&self) -> usize {
        self.values.len() / 2
    }

    pub fn values(&self) -> &Array2<u32> {
        &self.values
    }

    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.values.rows().into_iter().map(|row| row.to_vec()).collect()
    }
}
