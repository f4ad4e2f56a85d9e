use crate::{Board, GameError, Result};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Unfinished,
    Win,
    Lose,
}

impl Status {
    pub fn is_finished(self) -> bool {
        !matches!(self, Status::Unfinished)
    }

    pub fn message(self) -> &'static str {
        match self {
            Status::Win => "Congratulations! You found all the mines!",
            Status::Lose => "You stepped on a mine and failed!",
            Status::Unfinished => "Unfinished",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Reveal,
    ToggleFlag,
}

impl FromStr for Action {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "reveal" | "free" | "r" => Ok(Action::Reveal),
            "toggle-flag" | "flag" | "mine" | "f" => Ok(Action::ToggleFlag),
            _ => Err(GameError::InvalidAction(s.to_string())),
        }
    }
}

/// A single accepted move, with 1-indexed coordinates as submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub row: usize,
    pub column: usize,
    pub action: Action,
}

impl Move {
    pub fn new(row: usize, column: usize, action: Action) -> Self {
        Self {
            row,
            column,
            action,
        }
    }
}

/// Driver-facing wrapper that takes raw action words.
#[derive(Debug)]
pub struct Game {
    name: String,
    board: Board,
}

impl Game {
    pub fn new(board: Board) -> Self {
        Self {
            name: "Minesweeper".to_string(),
            board,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> Status {
        self.board.status()
    }

    pub fn make_move(&mut self, row: usize, column: usize, command: &str) -> Result<()> {
        let action = command.parse::<Action>()?;
        self.board.submit_move(row, column, action)
    }

    pub fn render(&self) -> String {
        self.board.to_string()
    }
}
