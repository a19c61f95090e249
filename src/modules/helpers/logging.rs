use std::fs;
use std::path::{Path, PathBuf};

use fern::Dispatch;
use log::LevelFilter;
use snafu::ResultExt;

use crate::errors::{CreateLogDirectorySnafu, CustomResult, LoggingSnafu};

/// name of the log file for a run started now, `f1_drivers_YYYYmmdd_HHMMSS.log`
pub fn log_file_name() -> String {
    format!("f1_drivers_{}.log", chrono::Local::now().format("%Y%m%d_%H%M%S"))
}

fn format_line(out: fern::FormatCallback, message: &std::fmt::Arguments, record: &log::Record) {
    out.finish(format_args!(
        "{} [{}][{}] {}",
        chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
        record.target(),
        record.level(),
        message
    ))
}

/// # Set up logging
/// logs to a timestamped file in `log_directory` and to stderr. the directory is
/// created when it does not exist yet.
///
/// ## Returns
/// * `PathBuf` - the log file of this run
pub fn setup_logging(log_directory: &Path, verbosity: LevelFilter) -> CustomResult<PathBuf> {
    fs::create_dir_all(log_directory).context(CreateLogDirectorySnafu { path: log_directory })?;
    let log_file = log_directory.join(log_file_name());

    let file_logger_config = Dispatch::new()
        .format(format_line)
        .chain(fern::log_file(&log_file).map_err(fern::InitError::from).context(LoggingSnafu)?);

    let stderr_logger_config = Dispatch::new().format(format_line).chain(std::io::stderr());

    Dispatch::new()
        .level(verbosity)
        .chain(file_logger_config)
        .chain(stderr_logger_config)
        .apply()
        .map_err(fern::InitError::from)
        .context(LoggingSnafu)?;

    Ok(log_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_is_timestamped() {
        let name = log_file_name();
        assert!(name.starts_with("f1_drivers_"));
        assert!(name.ends_with(".log"));
        // f1_drivers_ + YYYYmmdd_HHMMSS + .log
        assert_eq!(name.len(), "f1_drivers_".len() + 15 + ".log".len());
    }
}
