use crate::generator::FixedPlacer;
use crate::{Board, GameError, Position, Result};

/// Builds an unseeded board whose mines are drawn from a picture, `*` for a mine and `.`
/// for a safe cell, one line per row. Surrounding whitespace on each line is ignored.
pub fn board_from_layout(layout: &str) -> Result<Board> {
    let rows: Vec<&str> = layout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let height = rows.len();
    let width = rows.first().map_or(0, |row| row.chars().count());
    let mut mines = Vec::new();

    for (row, line) in rows.iter().enumerate() {
        if line.chars().count() != width {
            return Err(GameError::InvalidConfiguration(format!(
                "layout row {} has {} cells, expected {}",
                row + 1,
                line.chars().count(),
                width
            )));
        }
        for (column, c) in line.chars().enumerate() {
            match c {
                '*' => mines.push(Position::new(row, column)),
                '.' => {}
                other => {
                    return Err(GameError::InvalidConfiguration(format!(
                        "unexpected '{}' in layout",
                        other
                    )))
                }
            }
        }
    }

    Board::with_placer(height, width, mines.len(), FixedPlacer::new(mines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, Lifecycle};

    #[test]
    fn test_layout_parsing() {
        let mut board = board_from_layout(
            "
            *..
            ...
            ..*
            ",
        )
        .unwrap();
        assert_eq!(board.dimensions(), (3, 3));
        assert_eq!(board.mine_count(), 2);
        assert_eq!(board.lifecycle(), Lifecycle::Unseeded);

        board.submit_move(2, 2, Action::Reveal).unwrap();
        assert!(board.mine_cells().contains(&Position::new(0, 0)));
        assert!(board.mine_cells().contains(&Position::new(2, 2)));
    }

    #[test]
    fn test_layout_errors() {
        assert!(board_from_layout("..\n...").is_err());
        assert!(board_from_layout(".x.").is_err());
        assert!(board_from_layout("").is_err());
        assert!(board_from_layout("**\n**").is_err());
    }
}
