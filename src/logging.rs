use flexi_logger::{opt_format, Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming};

use crate::config::LoggingConfig;

/// Start the global logger.
///
/// Logs go to rotating files when a directory is configured. Otherwise they
/// go to stderr, unless `allow_stderr` is false (the TUI owns the terminal),
/// in which case no logger is started. Keep the returned handle alive for
/// the lifetime of the program.
pub fn setup_logging(
    config: &LoggingConfig,
    allow_stderr: bool,
) -> Result<Option<LoggerHandle>, FlexiLoggerError> {
    let logger = Logger::try_with_env_or_str(&config.level)?.format(opt_format);

    match &config.directory {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir).basename("piezas"))
            .rotate(
                Criterion::Size(config.rotate_size_mb.saturating_mul(1024 * 1024)),
                Naming::Numbers,
                Cleanup::KeepLogFiles(config.keep_files),
            )
            .start()
            .map(Some),
        None if allow_stderr => logger.log_to_stderr().start().map(Some),
        None => Ok(None),
    }
}
