use super::{Cell, Player};

/// Result of [`Board::game_state`](super::Board::game_state) as a typed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Winner(Player),
    Tie,
}

impl GameOutcome {
    pub fn from_cell(cell: Cell) -> Self {
        match cell {
            Cell::OutOfRange => GameOutcome::InProgress,
            Cell::Empty => GameOutcome::Tie,
            Cell::PlayerA => GameOutcome::Winner(Player::A),
            Cell::PlayerB => GameOutcome::Winner(Player::B),
        }
    }

    /// Check if game is over
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }
}

/// Result of [`Board::drop_piece`](super::Board::drop_piece) as a typed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropResult {
    Placed(Player),
    ColumnFull,
    InvalidColumn,
}

impl DropResult {
    pub fn from_cell(cell: Cell) -> Self {
        match cell {
            Cell::OutOfRange => DropResult::InvalidColumn,
            Cell::Empty => DropResult::ColumnFull,
            Cell::PlayerA => DropResult::Placed(Player::A),
            Cell::PlayerB => DropResult::Placed(Player::B),
        }
    }
}
