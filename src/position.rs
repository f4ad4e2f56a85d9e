use itertools::iproduct;

/// A 0-indexed cell coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    pub fn from_index(index: usize, width: usize) -> Self {
        Self::new(index / width, index % width)
    }

    pub fn index(&self, width: usize) -> usize {
        self.row * width + self.column
    }

    /// Positions in the 3x3 neighborhood, clamped to a `height` x `width` board.
    pub fn neighbors(&self, height: usize, width: usize) -> impl Iterator<Item = Position> {
        let center = *self;
        let rows = self.row.saturating_sub(1)..=(self.row + 1).min(height.saturating_sub(1));
        let columns =
            self.column.saturating_sub(1)..=(self.column + 1).min(width.saturating_sub(1));
        iproduct!(rows, columns)
            .map(|(row, column)| Position::new(row, column))
            .filter(move |pos| *pos != center)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}
