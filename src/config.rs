use crate::{DimensionError, GameError};
use std::time::Duration;

pub const DEFAULT_ROWS: i32 = 4;
pub const DEFAULT_COLS: i32 = 4;
pub const DEFAULT_MISMATCH_DELAY: Duration = Duration::from_millis(500);

/// Game configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: i32,
    pub cols: i32,
    pub mismatch_delay: Duration,
}

impl GameConfig {
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay = delay;
        self
    }

    pub fn validate(&self) -> Result<(), GameError> {
        check_dimensions(self.rows, self.cols)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            mismatch_delay: DEFAULT_MISMATCH_DELAY,
        }
    }
}

pub(crate) fn check_dimensions(rows: i32, cols: i32) -> Result<(), GameError> {
    if rows <= 0 || cols <= 0 {
        return Err(DimensionError::NonPositive { rows, cols }.into());
    }
    // i64 so large dimensions can't overflow the parity check
    if (rows as i64 * cols as i64) % 2 != 0 {
        return Err(DimensionError::OddTotal { rows, cols }.into());
    }
    Ok(())
}
