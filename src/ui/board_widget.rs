use crate::config::DisplayConfig;
use crate::game::{Board, Cell, COLS, ROWS};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// Styled span for a single cell
pub fn cell_span(cell: Cell, display: &DisplayConfig) -> Span<'static> {
    let (symbol, color) = match cell {
        Cell::PlayerA => (display.player_a_symbol, Color::Red),
        Cell::PlayerB => (display.player_b_symbol, Color::Yellow),
        Cell::Empty | Cell::OutOfRange => (display.empty_symbol, Color::DarkGray),
    };
    Span::styled(format!(" {symbol} "), Style::default().fg(color))
}

/// Board rows as styled lines, top row first.
pub fn board_lines(board: &Board, display: &DisplayConfig) -> Vec<Line<'static>> {
    (0..ROWS as i32)
        .rev()
        .map(|row| {
            let spans: Vec<Span> = (0..COLS as i32)
                .map(|col| cell_span(board.piece_at(row, col), display))
                .collect();
            Line::from(spans)
        })
        .collect()
}
