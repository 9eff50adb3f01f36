use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    A,
    B,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::A => Cell::PlayerA,
            Player::B => Cell::PlayerB,
        }
    }

    /// Owner of a cell, if it holds a piece
    pub fn from_cell(cell: Cell) -> Option<Player> {
        match cell {
            Cell::PlayerA => Some(Player::A),
            Cell::PlayerB => Some(Player::B),
            Cell::Empty | Cell::OutOfRange => None,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::A => "Player A",
            Player::B => "Player B",
        }
    }
}
