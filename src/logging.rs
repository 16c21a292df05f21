use flexi_logger::{
    detailed_format, Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming,
};

use crate::config::LoggingConfig;

const LOG_BASENAME: &str = "connect_four";
const ROTATE_BYTES: u64 = 1024 * 1024;
const KEEP_FILES: usize = 3;

/// Start file logging. The terminal belongs to the UI, so nothing is written
/// to stderr. Returns `None` when logging is disabled; the handle must be kept
/// alive for as long as logs should be flushed.
pub fn setup_logging(config: &LoggingConfig) -> Result<Option<LoggerHandle>, FlexiLoggerError> {
    if !config.enabled {
        return Ok(None);
    }

    let handle = Logger::try_with_env_or_str(&config.level)?
        .log_to_file(
            FileSpec::default()
                .directory(&config.directory)
                .basename(LOG_BASENAME),
        )
        .format(detailed_format)
        .rotate(
            Criterion::Size(ROTATE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_FILES),
        )
        .start()?;
    Ok(Some(handle))
}
