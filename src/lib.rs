pub mod board;
pub mod cell;
pub mod display;
pub mod error;
pub mod game;
pub mod generator;
pub mod position;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use board::{Board, Lifecycle};
pub use cell::{Cell, Symbol};
pub use error::{GameError, Result};
pub use game::{Action, Game, Move, Status};
pub use generator::{FixedPlacer, MinePlacer, RandomPlacer};
pub use position::Position;
