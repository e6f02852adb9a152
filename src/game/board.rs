use crate::error::InvalidMove;

use super::player::Player;

pub const COLS: usize = 7;
pub const ROWS: usize = 6;

/// Occupant of a board position, as seen through [`Board::cell_at`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Yellow,
    Red,
}

/// A board position. Row 0 is the bottom of a column, row 5 the top.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Coord {
    pub col: usize,
    pub row: usize,
}

impl Coord {
    pub fn new(col: usize, row: usize) -> Self {
        Coord { col, row }
    }
}

/// Seven column stacks filling bottom-up. A column's length is its fill
/// height; there are no explicit empty-cell markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: [Vec<Player>; COLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            columns: Default::default(),
        }
    }

    /// True iff `col` is in range and not yet full.
    pub fn can_accept(&self, col: usize) -> bool {
        col < COLS && self.columns[col].len() < ROWS
    }

    /// Number of tokens currently in `col`. Out-of-range columns read as full.
    pub fn height(&self, col: usize) -> usize {
        if col >= COLS {
            return ROWS;
        }
        self.columns[col].len()
    }

    /// Drop a token into a column, returning the row where it landed.
    pub fn place(&mut self, col: usize, player: Player) -> Result<usize, InvalidMove> {
        if col >= COLS {
            return Err(InvalidMove::OutOfRange { column: col });
        }

        let column = &mut self.columns[col];
        if column.len() >= ROWS {
            return Err(InvalidMove::ColumnFull { column: col });
        }

        let row = column.len();
        column.push(player);
        Ok(row)
    }

    /// Get the occupant at a position. Positions above a column's fill height
    /// or outside the board read as [`Cell::Empty`].
    pub fn cell_at(&self, col: usize, row: usize) -> Cell {
        if col >= COLS || row >= ROWS {
            return Cell::Empty;
        }
        match self.columns[col].get(row) {
            Some(player) => player.to_cell(),
            None => Cell::Empty,
        }
    }

    /// Occupant at a position, as a `Player`, if any token sits there.
    pub(crate) fn occupant(&self, col: usize, row: usize) -> Option<Player> {
        if col >= COLS {
            return None;
        }
        self.columns[col].get(row).copied()
    }

    /// Total number of tokens placed.
    pub fn token_count(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    /// Check if all 42 cells are filled.
    pub fn is_full(&self) -> bool {
        self.columns.iter().all(|c| c.len() == ROWS)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
