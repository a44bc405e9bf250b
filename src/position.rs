#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Converts to an `ndarray` index, or `None` if either coordinate is negative.
    pub fn to_index(self) -> Option<(usize, usize)> {
        let row = usize::try_from(self.row).ok()?;
        let col = usize::try_from(self.col).ok()?;
        Some((row, col))
    }

    pub(crate) fn from_index((row, col): (usize, usize)) -> Self {
        Self::new(row as i32, col as i32)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_creation() {
        let pos = Position::new(5, 10);
        assert_eq!(pos.row, 5);
        assert_eq!(pos.col, 10);
        assert_eq!(Position::from((5, 10)), pos);
    }

    #[test]
    fn test_to_index() {
        assert_eq!(Position::new(2, 3).to_index(), Some((2, 3)));
        assert_eq!(Position::new(-1, 3).to_index(), None);
        assert_eq!(Position::new(0, -4).to_index(), None);
        assert_eq!(Position::from_index((1, 2)), Position::new(1, 2));
    }
}
