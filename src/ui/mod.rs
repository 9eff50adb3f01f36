//! Terminal UI for playing Piezas on one keyboard.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
