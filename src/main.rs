use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use piezas::config::{AppConfig, DisplayConfig};
use piezas::game::Board;
use piezas::logging::setup_logging;
use piezas::replay::Replay;
use piezas::ui::App;

/// Play Piezas in the terminal, or replay a list of drops.
#[derive(Parser)]
#[command(name = "piezas", about = "Play Piezas, a vertical drop-piece board game")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "piezas.toml")]
    config: PathBuf,

    /// Comma-separated columns to drop into; prints the result instead of
    /// starting the UI
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    moves: Option<Vec<i32>>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let loaded = AppConfig::load_if_present(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    let found = loaded.is_some();
    let config = loaded.unwrap_or_default();

    let headless = cli.moves.is_some();
    let _logger = setup_logging(&config.logging, headless).context("starting logger")?;
    if found {
        log::info!("loaded config from {}", cli.config.display());
    } else {
        log::warn!("config file '{}' not found, using defaults", cli.config.display());
    }

    match cli.moves {
        Some(moves) => {
            let mut board = Board::new();
            print!("{}", Replay::run(&mut board, &moves));
            Ok(())
        }
        None => run_tui(config.display).context("running terminal UI"),
    }
}

fn run_tui(display: DisplayConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(display);
    let res = app.run(&mut terminal);

    // Restore terminal even when the app returned an error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
