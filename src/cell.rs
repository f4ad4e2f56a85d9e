use crate::Position;
use std::fmt;

/// What a cell shows to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Empty,
    Count(u8),
    Detonated,
    Flag,
    Hidden,
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Empty => f.write_str("/"),
            Symbol::Count(n) => write!(f, "{}", n),
            Symbol::Detonated => f.write_str("X"),
            Symbol::Flag => f.write_str("*"),
            Symbol::Hidden => f.write_str("."),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    position: Position,
    index: usize,
    pub(crate) is_mine: bool,
    pub(crate) adjacent_mines: u8,
    pub(crate) is_revealed: bool,
    pub(crate) is_flagged: bool,
    pub(crate) neighbors: Vec<usize>,
}

impl Cell {
    pub(crate) fn new(position: Position, index: usize) -> Self {
        Self {
            position,
            index,
            is_mine: false,
            adjacent_mines: 0,
            is_revealed: false,
            is_flagged: false,
            neighbors: Vec::new(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    pub fn is_revealed(&self) -> bool {
        self.is_revealed
    }

    pub fn is_flagged(&self) -> bool {
        self.is_flagged
    }

    /// Indices of adjacent cells. Empty until mines are placed, and always empty for mines.
    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }

    pub fn symbol(&self) -> Symbol {
        match (self.is_revealed, self.is_mine, self.is_flagged) {
            (true, false, _) if self.adjacent_mines == 0 => Symbol::Empty,
            (true, false, _) => Symbol::Count(self.adjacent_mines),
            (true, true, _) => Symbol::Detonated,
            (false, _, true) => Symbol::Flag,
            (false, _, false) => Symbol::Hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell() -> Cell {
        Cell::new(Position::new(0, 0), 0)
    }

    #[test]
    fn test_default_cell_is_hidden_and_safe() {
        let c = cell();
        assert!(!c.is_mine());
        assert!(!c.is_revealed());
        assert!(!c.is_flagged());
        assert!(c.neighbors().is_empty());
        assert_eq!(c.symbol(), Symbol::Hidden);
    }

    #[test]
    fn test_symbols() {
        let mut c = cell();
        c.is_flagged = true;
        assert_eq!(c.symbol(), Symbol::Flag);

        c.is_flagged = false;
        c.is_revealed = true;
        assert_eq!(c.symbol(), Symbol::Empty);

        c.adjacent_mines = 3;
        assert_eq!(c.symbol(), Symbol::Count(3));

        c.is_mine = true;
        assert_eq!(c.symbol(), Symbol::Detonated);
    }

    #[test]
    fn test_hidden_mine_looks_like_any_hidden_cell() {
        let mut c = cell();
        c.is_mine = true;
        assert_eq!(c.symbol(), Symbol::Hidden);
        c.is_flagged = true;
        assert_eq!(c.symbol(), Symbol::Flag);
    }

    #[test]
    fn test_symbol_display() {
        let rendered: String = [
            Symbol::Empty,
            Symbol::Count(2),
            Symbol::Detonated,
            Symbol::Flag,
            Symbol::Hidden,
        ]
        .iter()
        .map(ToString::to_string)
        .collect();
        assert_eq!(rendered, "/2X*.");
    }
}
