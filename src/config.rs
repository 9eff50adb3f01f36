use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::game::COLS;

/// Largest log file size before rotation, 1 TiB
pub const MAX_ROTATE_SIZE_MB: u64 = 1024 * 1024;

/// How the terminal UI draws the board.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub player_a_symbol: char,
    pub player_b_symbol: char,
    pub empty_symbol: char,
    /// Column the selector starts on
    pub start_column: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            player_a_symbol: '\u{25cf}',
            player_b_symbol: '\u{25cf}',
            empty_symbol: '.',
            start_column: 1,
        }
    }
}

/// Logger settings. Without a directory the TUI runs with logging disabled.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// flexi_logger specification, e.g. `info` or `piezas=trace`
    pub level: String,
    pub directory: Option<PathBuf>,
    pub rotate_size_mb: u64,
    pub keep_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            directory: None,
            rotate_size_mb: 10,
            keep_files: 3,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::load_if_present(path)?.ok_or_else(|| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        })
    }

    /// Load configuration from a TOML file, returning `None` if the file does
    /// not exist.
    pub fn load_if_present(path: &Path) -> Result<Option<Self>, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ConfigError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        };
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(Some(config))
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        Ok(Self::load_if_present(path)?.unwrap_or_default())
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let display = &self.display;
        if display.start_column >= COLS {
            return Err(ConfigError::Validation(format!(
                "display.start_column must be < {COLS}"
            )));
        }
        if display.empty_symbol == display.player_a_symbol
            || display.empty_symbol == display.player_b_symbol
        {
            return Err(ConfigError::Validation(
                "display.empty_symbol must differ from the player symbols".into(),
            ));
        }

        let logging = &self.logging;
        if let Err(e) = flexi_logger::LogSpecification::parse(&logging.level) {
            return Err(ConfigError::Validation(format!(
                "logging.level is not a valid log specification: {e}"
            )));
        }
        if logging.rotate_size_mb == 0 || logging.rotate_size_mb > MAX_ROTATE_SIZE_MB {
            return Err(ConfigError::Validation(format!(
                "logging.rotate_size_mb must be in [1, {MAX_ROTATE_SIZE_MB}]"
            )));
        }
        if logging.keep_files == 0 {
            return Err(ConfigError::Validation(
                "logging.keep_files must be >= 1".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
