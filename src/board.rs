use crate::display;
use crate::generator::{MinePlacer, RandomPlacer};
use crate::{Action, Cell, GameError, Move, Position, Result, Status, Symbol};
use ndarray::Array2;
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, info, trace, warn};

/// Whether mines have been placed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Unseeded,
    Active,
}

#[derive(Debug)]
pub struct Board {
    height: usize,
    width: usize,
    mine_count: usize,
    cells: Array2<Cell>,
    placer: Box<dyn MinePlacer>,
    lifecycle: Lifecycle,
    safe_cells: HashSet<Position>,
    mine_cells: HashSet<Position>,
    flagged_cells: HashSet<Position>,
    revealed_cells: HashSet<Position>,
    moves: Vec<Move>,
    mine_triggered: bool,
}

impl Board {
    pub fn new(height: usize, width: usize, mine_count: usize) -> Result<Self> {
        Self::with_placer(height, width, mine_count, RandomPlacer::new())
    }

    pub fn with_seed(height: usize, width: usize, mine_count: usize, seed: u64) -> Result<Self> {
        Self::with_placer(height, width, mine_count, RandomPlacer::with_seed(seed))
    }

    pub fn with_placer(
        height: usize,
        width: usize,
        mine_count: usize,
        placer: impl MinePlacer + 'static,
    ) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(GameError::InvalidConfiguration(format!(
                "board must be at least 1x1, got {}x{}",
                height, width
            )));
        }
        let total = height.checked_mul(width).ok_or_else(|| {
            GameError::InvalidConfiguration(format!("board {}x{} is too large", height, width))
        })?;
        if mine_count >= total {
            return Err(GameError::InvalidConfiguration(format!(
                "{} mines do not fit a {}x{} board, at most {} allowed",
                mine_count,
                height,
                width,
                total - 1
            )));
        }

        let cells = Array2::from_shape_fn((height, width), |(row, column)| {
            let position = Position::new(row, column);
            Cell::new(position, position.index(width))
        });

        Ok(Self {
            height,
            width,
            mine_count,
            cells,
            placer: Box::new(placer),
            lifecycle: Lifecycle::Unseeded,
            safe_cells: HashSet::new(),
            mine_cells: HashSet::new(),
            flagged_cells: HashSet::new(),
            revealed_cells: HashSet::new(),
            moves: Vec::new(),
            mine_triggered: false,
        })
    }

    /// Applies a move at a 1-indexed `row` and `column`.
    ///
    /// The first move seeds the mines, never on the targeted cell. A failed move leaves the
    /// board untouched.
    pub fn submit_move(&mut self, row: usize, column: usize, action: Action) -> Result<()> {
        let pos = self.to_position(row, column)?;

        if self.lifecycle == Lifecycle::Unseeded {
            let layout = self.draw_layout(pos)?;
            self.seed(&layout);
        }

        let before = self.status();
        match action {
            Action::Reveal => self.reveal(pos),
            Action::ToggleFlag => self.toggle_flag(pos),
        }
        self.moves.push(Move::new(row, column, action));

        let after = self.status();
        if after != before {
            info!(?before, ?after, moves = self.moves.len(), "status changed");
        }
        Ok(())
    }

    pub fn status(&self) -> Status {
        if self.lifecycle == Lifecycle::Unseeded {
            return Status::Unfinished;
        }
        if self.flagged_cells == self.mine_cells || self.revealed_cells == self.safe_cells {
            Status::Win
        } else if self.mine_triggered {
            Status::Lose
        } else {
            Status::Unfinished
        }
    }

    /// Rows of display symbols, top to bottom.
    pub fn snapshot(&self) -> Vec<Vec<Symbol>> {
        self.cells
            .outer_iter()
            .map(|row| row.iter().map(Cell::symbol).collect())
            .collect()
    }

    fn to_position(&self, row: usize, column: usize) -> Result<Position> {
        if (1..=self.height).contains(&row) && (1..=self.width).contains(&column) {
            Ok(Position::new(row - 1, column - 1))
        } else {
            Err(GameError::OutOfBounds { row, column })
        }
    }

    fn draw_layout(&mut self, first: Position) -> Result<Vec<Position>> {
        let layout = self
            .placer
            .place(self.height, self.width, self.mine_count, first);

        let unique: HashSet<Position> = layout.iter().copied().collect();
        let problem = if layout.len() != self.mine_count {
            Some(format!(
                "placer returned {} mines, expected {}",
                layout.len(),
                self.mine_count
            ))
        } else if unique.len() != layout.len() {
            Some("placer returned duplicate mines".to_string())
        } else if let Some(pos) = layout
            .iter()
            .find(|p| p.row >= self.height || p.column >= self.width)
        {
            Some(format!("placer returned off-board mine {:?}", pos))
        } else if unique.contains(&first) {
            Some(format!("placer put a mine under the first move {:?}", first))
        } else {
            None
        };

        match problem {
            Some(reason) => {
                warn!(%reason, "rejecting mine layout");
                Err(GameError::InvalidConfiguration(reason))
            }
            None => Ok(layout),
        }
    }

    fn seed(&mut self, layout: &[Position]) {
        for &pos in layout {
            self.cells[[pos.row, pos.column]].is_mine = true;
            self.mine_cells.insert(pos);
        }
        self.safe_cells = self
            .cells
            .iter()
            .filter(|cell| !cell.is_mine)
            .map(Cell::position)
            .collect();

        self.compute_adjacency();
        self.lifecycle = Lifecycle::Active;
        debug!(
            height = self.height,
            width = self.width,
            mines = self.mine_count,
            "mines seeded"
        );
    }

    fn compute_adjacency(&mut self) {
        let (height, width) = (self.height, self.width);
        for &pos in &self.safe_cells {
            let neighbors: Vec<Position> = pos.neighbors(height, width).collect();
            let mines = neighbors
                .iter()
                .filter(|n| self.mine_cells.contains(*n))
                .count() as u8;

            let cell = &mut self.cells[[pos.row, pos.column]];
            cell.neighbors = neighbors.iter().map(|n| n.index(width)).collect();
            cell.adjacent_mines = mines;
        }
    }

    fn reveal(&mut self, pos: Position) {
        if self.cells[[pos.row, pos.column]].is_mine {
            self.trigger_mine();
        } else {
            self.flood_reveal(pos);
        }
    }

    fn trigger_mine(&mut self) {
        self.mine_triggered = true;
        for &pos in &self.mine_cells {
            let cell = &mut self.cells[[pos.row, pos.column]];
            cell.is_revealed = true;
            cell.is_flagged = false;
            self.flagged_cells.remove(&pos);
        }
    }

    fn flood_reveal(&mut self, start: Position) {
        let width = self.width;
        let mut stack = vec![start];
        let mut revealed = 0usize;

        while let Some(pos) = stack.pop() {
            if self.revealed_cells.contains(&pos) {
                continue;
            }

            let cell = &mut self.cells[[pos.row, pos.column]];
            cell.is_revealed = true;
            cell.is_flagged = false;
            let cascade = cell.adjacent_mines == 0;
            self.flagged_cells.remove(&pos);
            self.revealed_cells.insert(pos);
            revealed += 1;

            if cascade {
                for &i in &self.cells[[pos.row, pos.column]].neighbors {
                    let neighbor = Position::from_index(i, width);
                    if !self.revealed_cells.contains(&neighbor) {
                        stack.push(neighbor);
                    }
                }
            }
        }

        trace!(?start, revealed, "flood reveal");
    }

    fn toggle_flag(&mut self, pos: Position) {
        let cell = &mut self.cells[[pos.row, pos.column]];
        if cell.is_flagged {
            cell.is_flagged = false;
            self.flagged_cells.remove(&pos);
        } else if !cell.is_revealed {
            cell.is_flagged = true;
            self.flagged_cells.insert(pos);
        }
    }
}

impl Board {
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn mine_triggered(&self) -> bool {
        self.mine_triggered
    }

    /// Cell at a 0-indexed position.
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.cells.get((pos.row, pos.column))
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn safe_cells(&self) -> &HashSet<Position> {
        &self.safe_cells
    }

    pub fn mine_cells(&self) -> &HashSet<Position> {
        &self.mine_cells
    }

    pub fn flagged_cells(&self) -> &HashSet<Position> {
        &self.flagged_cells
    }

    pub fn revealed_cells(&self) -> &HashSet<Position> {
        &self.revealed_cells
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Mines left to flag; negative when the player has over-flagged.
    pub fn mines_remaining(&self) -> isize {
        self.mine_count as isize - self.flagged_cells.len() as isize
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&display::render(&self.snapshot()))
    }
}
