//! Core Piezas game logic: the drop board, player types, and typed views of
//! drop and evaluation results.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, COLS, ROWS};
pub use player::Player;
pub use state::{DropResult, GameOutcome};
