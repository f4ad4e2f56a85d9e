use crate::Position;
use rand::prelude::*;
use rand::seq::index;
use std::fmt;

/// Chooses where mines go once the first move is known.
pub trait MinePlacer: fmt::Debug {
    /// Returns `count` distinct positions on a `height` x `width` board, none equal to `exclude`.
    fn place(&mut self, height: usize, width: usize, count: usize, exclude: Position)
        -> Vec<Position>;
}

/// Uniform placement over every cell except the excluded one.
#[derive(Debug, Clone)]
pub struct RandomPlacer {
    rng: StdRng,
}

impl RandomPlacer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPlacer {
    fn default() -> Self {
        Self::new()
    }
}

impl MinePlacer for RandomPlacer {
    fn place(
        &mut self,
        height: usize,
        width: usize,
        count: usize,
        exclude: Position,
    ) -> Vec<Position> {
        let total = height * width;
        let excluded = exclude.index(width);
        if total == 0 || excluded >= total {
            return Vec::new();
        }

        // Draw from the board with the excluded cell cut out, then shift past the gap.
        let candidates = total - 1;
        index::sample(&mut self.rng, candidates, count.min(candidates))
            .into_iter()
            .map(|i| if i >= excluded { i + 1 } else { i })
            .map(|i| Position::from_index(i, width))
            .collect()
    }
}

/// A predetermined layout, handed out verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedPlacer {
    mines: Vec<Position>,
}

impl FixedPlacer {
    pub fn new(mines: impl IntoIterator<Item = Position>) -> Self {
        Self {
            mines: mines.into_iter().collect(),
        }
    }

    pub fn mines(&self) -> &[Position] {
        &self.mines
    }
}

impl MinePlacer for FixedPlacer {
    fn place(&mut self, _: usize, _: usize, _: usize, _: Position) -> Vec<Position> {
        self.mines.clone()
    }
}
