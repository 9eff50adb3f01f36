use std::fmt;

use super::player::Player;
use super::state::GameOutcome;

pub const ROWS: usize = 3;
pub const COLS: usize = 4;

/// Contents of a board slot.
///
/// `OutOfRange` is never stored on the board. Queries return it for invalid
/// coordinates, and `Board::game_state` returns it while the game is still
/// in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerA,
    PlayerB,
    OutOfRange,
}

/// Vertical drop board. Row 0 is the bottom row; pieces settle on the lowest
/// empty row of their column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    current_turn: Player,
}

impl Board {
    /// Create a new empty board with Player A to move
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
            current_turn: Player::A,
        }
    }

    /// Clear every cell and give the turn back to Player A
    pub fn reset(&mut self) {
        *self = Board::new();
    }

    /// Player whose piece the next drop places
    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    /// Drop the current player's piece into `column`.
    ///
    /// The turn passes to the other player on every call, including drops
    /// into an invalid or full column. Returns the placed piece, `Empty` if
    /// the column is full, or `OutOfRange` if the column does not exist.
    pub fn drop_piece(&mut self, column: i32) -> Cell {
        let placing = self.current_turn;
        self.current_turn = placing.other();

        let Some(col) = index(column, COLS) else {
            log::debug!("{} dropped into missing column {}", placing.name(), column);
            return Cell::OutOfRange;
        };

        match (0..ROWS).find(|&row| self.cells[row][col] == Cell::Empty) {
            Some(row) => {
                self.cells[row][col] = placing.to_cell();
                log::trace!("{} placed at [{}, {}]", placing.name(), row, col);
                placing.to_cell()
            }
            None => {
                log::debug!("{} dropped into full column {}", placing.name(), col);
                Cell::Empty
            }
        }
    }

    /// Piece at `[row, column]`, or `OutOfRange` outside the board
    pub fn piece_at(&self, row: i32, column: i32) -> Cell {
        match (index(row, ROWS), index(column, COLS)) {
            (Some(r), Some(c)) => self.cells[r][c],
            _ => Cell::OutOfRange,
        }
    }

    /// Evaluate the board.
    ///
    /// Returns `OutOfRange` while any cell is empty. On a full board the
    /// owner of the longest horizontal or vertical line wins; when the
    /// longest lines belong to different players the result is `Empty`.
    ///
    /// Ties are resolved during a single scan from `[0, 0]` in row-major
    /// order: a run matching the current maximum but owned by someone else
    /// marks a tie, and only a strictly longer run clears it.
    pub fn game_state(&self) -> Cell {
        let mut max_len = 1;
        let mut owner = Cell::Empty;

        for row in 0..ROWS {
            for col in 0..COLS {
                let piece = self.cells[row][col];
                if piece == Cell::Empty {
                    return Cell::OutOfRange;
                }

                let len = self.run_right(row, col).max(self.run_up(row, col));
                if len > max_len {
                    max_len = len;
                    owner = piece;
                } else if len == max_len && owner != piece {
                    owner = Cell::Empty;
                }
            }
        }

        owner
    }

    /// Typed view of [`Board::game_state`]
    pub fn outcome(&self) -> GameOutcome {
        GameOutcome::from_cell(self.game_state())
    }

    /// Check if a column has no empty row left
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[ROWS - 1][col] != Cell::Empty
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Length of the run starting at (row, col) towards higher columns
    fn run_right(&self, row: usize, col: usize) -> usize {
        let piece = self.cells[row][col];
        1 + (col + 1..COLS)
            .take_while(|&c| self.cells[row][c] == piece)
            .count()
    }

    /// Length of the run starting at (row, col) towards higher rows
    fn run_up(&self, row: usize, col: usize) -> usize {
        let piece = self.cells[row][col];
        1 + (row + 1..ROWS)
            .take_while(|&r| self.cells[r][col] == piece)
            .count()
    }
}

/// Convert a signed coordinate into an index below `len`
fn index(value: i32, len: usize) -> Option<usize> {
    usize::try_from(value).ok().filter(|&v| v < len)
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Top row first, one character per cell
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            for col in 0..COLS {
                let symbol = match self.cells[row][col] {
                    Cell::PlayerA => 'A',
                    Cell::PlayerB => 'B',
                    Cell::Empty | Cell::OutOfRange => '.',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROWS_I: i32 = ROWS as i32;
    const COLS_I: i32 = COLS as i32;

    fn play(board: &mut Board, columns: &[i32]) {
        for &col in columns {
            board.drop_piece(col);
        }
    }

    fn assert_all_empty(board: &Board) {
        for row in 0..ROWS_I {
            for col in 0..COLS_I {
                assert_eq!(board.piece_at(row, col), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_all_empty(&board);
        assert_eq!(board.current_turn(), Player::A);
        assert_eq!(board.game_state(), Cell::OutOfRange);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut board = Board::new();
        play(&mut board, &[0, 1, 2, 3, 0]);

        board.reset();

        assert_all_empty(&board);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_piece_at_out_of_bounds() {
        let board = Board::new();
        assert_eq!(board.piece_at(-1, 0), Cell::OutOfRange);
        assert_eq!(board.piece_at(0, -1), Cell::OutOfRange);
        assert_eq!(board.piece_at(ROWS_I, 0), Cell::OutOfRange);
        assert_eq!(board.piece_at(0, COLS_I), Cell::OutOfRange);
    }

    #[test]
    fn test_drop_piece_falls_to_bottom() {
        let mut board = Board::new();
        assert_eq!(board.drop_piece(0), Cell::PlayerA);
        assert_eq!(board.piece_at(0, 0), Cell::PlayerA);
        assert_eq!(board.piece_at(1, 0), Cell::Empty);
    }

    #[test]
    fn test_drop_piece_alternates_turns() {
        let mut board = Board::new();
        assert_eq!(board.drop_piece(0), Cell::PlayerA);
        assert_eq!(board.drop_piece(1), Cell::PlayerB);
        assert_eq!(board.drop_piece(1), Cell::PlayerA);
    }

    #[test]
    fn test_drop_piece_stacks() {
        let mut board = Board::new();
        assert_eq!(board.drop_piece(0), Cell::PlayerA);
        assert_eq!(board.drop_piece(0), Cell::PlayerB);

        assert_eq!(board.piece_at(0, 0), Cell::PlayerA);
        assert_eq!(board.piece_at(1, 0), Cell::PlayerB);
        assert_eq!(board.piece_at(2, 0), Cell::Empty);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(board.drop_piece(-1), Cell::OutOfRange);
        assert_eq!(board.drop_piece(COLS_I), Cell::OutOfRange);
        assert_all_empty(&board);
    }

    #[test]
    fn test_invalid_column_loses_turn() {
        let mut board = Board::new();
        assert_eq!(board.drop_piece(-1), Cell::OutOfRange);
        assert_eq!(board.current_turn(), Player::B);
        assert_eq!(board.drop_piece(0), Cell::PlayerB);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();
        play(&mut board, &[0; ROWS]);
        let before = board.cells;

        assert!(board.is_column_full(0));
        // A, B, A filled the column, so B's drop fails and A moves next
        assert_eq!(board.drop_piece(0), Cell::Empty);
        assert_eq!(board.cells, before);
        assert_eq!(board.drop_piece(1), Cell::PlayerA);
    }

    #[test]
    fn test_drop_then_piece_at_agree() {
        let mut board = Board::new();
        let mut heights = [0; COLS];
        for col in [3, 1, 3, 0, 2, 3, 1] {
            let placed = board.drop_piece(col);
            let row = heights[col as usize];
            heights[col as usize] += 1;
            assert_eq!(board.piece_at(row, col), placed);
        }
    }

    #[test]
    fn test_game_state_in_progress() {
        let mut board = Board::new();
        board.drop_piece(0);
        assert_eq!(board.game_state(), Cell::OutOfRange);

        play(&mut board, &[0, 0, 1, 1, 1, 2, 2, 2, 3, 3]);
        assert!(!board.is_full());
        assert_eq!(board.game_state(), Cell::OutOfRange);
    }

    #[test]
    fn test_checker_tie() {
        let mut board = Board::new();
        for col in 0..COLS_I {
            play(&mut board, &[col; ROWS]);
        }
        assert!(board.is_full());
        assert_eq!(board.game_state(), Cell::Empty);
    }

    #[test]
    fn test_vertical_tie() {
        let mut board = Board::new();
        // Columns 0 and 1 hold A, B, A and B, A, B
        for col in 0..2 {
            play(&mut board, &[col; ROWS]);
        }
        for col in 2..COLS_I {
            play(&mut board, &[col; ROWS]);
        }
        assert_eq!(board.piece_at(2, 0), Cell::PlayerA);
        assert_eq!(board.piece_at(2, 1), Cell::PlayerB);
        assert_eq!(board.game_state(), Cell::Empty);
    }

    #[test]
    fn test_horizontal_tie() {
        let mut board = Board::new();
        // A and B each get a horizontal line of three
        play(&mut board, &[1, 1, 2, 2, 3, 3]);
        play(&mut board, &[3, 2, 1, 0, 0, 0]);
        assert_eq!(board.game_state(), Cell::Empty);
    }

    #[test]
    fn test_player_a_vertical_win() {
        let mut board = Board::new();
        play(&mut board, &[0, 1, 2, 3, 2, 0, 1, 3, 3, 1, 2, 0]);
        assert_eq!(board.piece_at(0, 2), Cell::PlayerA);
        assert_eq!(board.piece_at(1, 2), Cell::PlayerA);
        assert_eq!(board.piece_at(2, 2), Cell::PlayerA);
        assert_eq!(board.game_state(), Cell::PlayerA);
    }

    #[test]
    fn test_player_a_horizontal_win() {
        let mut board = Board::new();
        play(&mut board, &[0, 0, 1, 1, 2, 0, 3]);
        play(&mut board, &[2, 3, 1, 2, 3]);
        for col in 0..COLS_I {
            assert_eq!(board.piece_at(0, col), Cell::PlayerA);
        }
        assert_eq!(board.game_state(), Cell::PlayerA);
    }

    #[test]
    fn test_player_b_win() {
        let mut board = Board::new();
        play(&mut board, &[0, 1, 0, 1, 2, 0, 2, 1, 3, 3, 3, 2]);
        assert_eq!(board.game_state(), Cell::PlayerB);
        assert_eq!(board.outcome(), GameOutcome::Winner(Player::B));
    }

    #[test]
    fn test_longer_run_clears_earlier_tie() {
        let mut board = Board::new();
        // Row 0 is A A B B and ties at length 2; row 1 is B A A A.
        // B forfeits one turn so that A gets the extra piece.
        play(&mut board, &[0, 2, 1, 3, 1, 0, 2, 1, 3, 3, 0, -1, 2]);
        assert!(board.is_full());
        assert_eq!(board.piece_at(0, 2), Cell::PlayerB);
        assert_eq!(board.piece_at(1, 0), Cell::PlayerB);
        assert_eq!(board.game_state(), Cell::PlayerA);
    }

    #[test]
    fn test_display_renders_top_row_first() {
        let mut board = Board::new();
        play(&mut board, &[0, 0, 3]);
        assert_eq!(board.to_string(), "....\nB...\nA..A\n");
    }
}
