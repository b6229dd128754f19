// src/logging.rs

use crate::config::Config;
use crate::errors::{SidekickError, SidekickResult};
use flexi_logger::{FileSpec, Logger};

/// Initializes file-backed logging. The TUI owns stdout, so everything
/// goes to `sidekick.log` in the working directory.
pub fn init_logging(config: &Config) -> SidekickResult<()> {
    Logger::try_with_str(&config.log_level)
        .map_err(|e| SidekickError::config_error(format!("Invalid log level: {}", e)))?
        .log_to_file(FileSpec::default().basename("sidekick").suppress_timestamp())
        .start()
        .map_err(|e| SidekickError::config_error(format!("Failed to start logging: {}", e)))?;

    Ok(())
}
