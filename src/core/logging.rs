//! Logging initialisation built on flexi_logger
//!
//! One compact text format; verbosity comes from the log-level flag, output
//! optionally goes to a file as well as stderr.

use flexi_logger::{FileSpec, LoggerHandle};
use std::path::Path;

// Keeps the logger alive for the lifetime of the process.
static LOGGER_HANDLE: std::sync::OnceLock<std::sync::Mutex<LoggerHandle>> =
    std::sync::OnceLock::new();

pub fn init_logging(
    log_level: Option<&str>,
    log_file: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    use flexi_logger::Logger;

    let level_str = log_level.unwrap_or("info");
    let mut logger = Logger::try_with_str(level_str)?.format(simple_format);

    if let Some(file_path) = log_file {
        logger = logger.log_to_file(FileSpec::try_from(file_path)?);
    }

    let handle = logger.start()?;
    let _ = LOGGER_HANDLE.set(std::sync::Mutex::new(handle));

    Ok(())
}

// Simple text format: "YYYY-MM-DD HH:mm:ss.fff INF message"
fn simple_format(
    w: &mut dyn std::io::Write,
    now: &mut flexi_logger::DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    let level_abbr = match record.level() {
        log::Level::Error => "ERR",
        log::Level::Warn => "WRN",
        log::Level::Info => "INF",
        log::Level::Debug => "DBG",
        log::Level::Trace => "TRC",
    };

    write!(
        w,
        "{} {} {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        level_abbr,
        record.args()
    )
}
