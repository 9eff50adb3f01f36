//! # Piezas
//!
//! A vertical drop-piece board game in the spirit of Connect Four, on a
//! 3 × 4 board. Once the board is full, the player with the longest
//! horizontal or vertical line wins.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, player, typed results
//! - [`replay`]: Headless replay of a move list
//! - [`ui`]: Terminal UI built with Ratatui
//! - [`config`]: TOML configuration loading and validation
//! - [`logging`]: flexi_logger setup
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod replay;
pub mod ui;
