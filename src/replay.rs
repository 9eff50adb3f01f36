use std::fmt;

use crate::game::{Board, DropResult, GameOutcome, Player};

/// One drop of a replayed move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayStep {
    pub column: i32,
    /// Player whose turn the drop used, whether or not it landed
    pub player: Player,
    pub result: DropResult,
}

/// Transcript of a move list applied to a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replay {
    pub steps: Vec<ReplayStep>,
    pub board: Board,
    pub outcome: GameOutcome,
}

impl Replay {
    /// Apply `moves` to `board` in order and record every drop.
    pub fn run(board: &mut Board, moves: &[i32]) -> Replay {
        let steps = moves
            .iter()
            .map(|&column| {
                let player = board.current_turn();
                let result = DropResult::from_cell(board.drop_piece(column));
                ReplayStep {
                    column,
                    player,
                    result,
                }
            })
            .collect();

        Replay {
            steps,
            board: *board,
            outcome: board.outcome(),
        }
    }
}

impl fmt::Display for Replay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            let result = match step.result {
                DropResult::Placed(_) => "placed",
                DropResult::ColumnFull => "column full, turn lost",
                DropResult::InvalidColumn => "invalid column, turn lost",
            };
            writeln!(
                f,
                "{:>3}. {} -> column {}: {}",
                i + 1,
                step.player.name(),
                step.column,
                result
            )?;
        }

        writeln!(f)?;
        write!(f, "{}", self.board)?;
        writeln!(f)?;
        match self.outcome {
            GameOutcome::InProgress => writeln!(f, "Game in progress"),
            GameOutcome::Winner(player) => writeln!(f, "{} wins", player.name()),
            GameOutcome::Tie => writeln!(f, "Tie"),
        }
    }
}
