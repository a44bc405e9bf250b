use crate::Position;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionError {
    #[error("rows ({rows}) and cols ({cols}) must both be positive")]
    NonPositive { rows: i32, cols: i32 },
    #[error("a {rows}x{cols} grid holds an odd number of cards")]
    OddTotal { rows: i32, cols: i32 },
    #[error("row {row} has {len} cards, expected {expected}")]
    Ragged { row: usize, len: usize, expected: usize },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid grid dimensions: {0}")]
    InvalidDimensions(#[from] DimensionError),
    #[error("Position {0:?} is out of bounds")]
    OutOfBounds(Position),
    #[error("Value {0} does not appear exactly twice")]
    UnpairedValue(u32),
}
