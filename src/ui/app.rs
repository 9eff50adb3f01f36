use crate::config::DisplayConfig;
use crate::game::{Board, DropResult, GameOutcome, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    board: Board,
    display: DisplayConfig,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(display: DisplayConfig) -> Self {
        App {
            board: Board::new(),
            selected_column: display.start_column.min(COLS - 1),
            display,
            should_quit: false,
            message: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal.draw(|f| self.render(f)).map_err(Into::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.board.reset();
                self.selected_column = self.display.start_column.min(COLS - 1);
                self.message = Some("New game started!".to_string());
                log::info!("board reset");
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        if self.board.outcome().is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        let player = self.board.current_turn();
        // selected_column is always < COLS
        let result = DropResult::from_cell(self.board.drop_piece(self.selected_column as i32));
        self.message = match result {
            DropResult::Placed(_) => match self.board.outcome() {
                GameOutcome::InProgress => None,
                GameOutcome::Winner(winner) => {
                    log::info!("{} wins", winner.name());
                    Some(format!("{} wins!", winner.name()))
                }
                GameOutcome::Tie => {
                    log::info!("game tied");
                    Some("It's a tie!".to_string())
                }
            },
            DropResult::ColumnFull => Some(format!(
                "Column is full! {} loses the turn.",
                player.name()
            )),
            DropResult::InvalidColumn => Some(format!(
                "Invalid column! {} loses the turn.",
                player.name()
            )),
        };
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.board,
            &self.display,
            self.selected_column,
            &self.message,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(DisplayConfig::default())
    }
}
