use super::board::Cell;

/// One of the two seats. Yellow moves on even turn counts, Red on odd.
///
/// The discriminants (1, 2) match the on-board encoding where 0 means an
/// empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[repr(u8)]
pub enum Player {
    Yellow = 1,
    Red = 2,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Yellow => Player::Red,
            Player::Red => Player::Yellow,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Yellow => Cell::Yellow,
            Player::Red => Cell::Red,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Yellow => "Yellow",
            Player::Red => "Red",
        }
    }
}
