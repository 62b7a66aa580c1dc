//! Log setup
//!
//! Standard output carries escape sequences for the terminal, so logs go to
//! a daily-rotated file under `$TMPDIR` (or `/tmp`). Error-level events are
//! also echoed to stderr. The file writer is synchronous: a background
//! writer thread would not survive the watchdog's fork.

use crate::context::Environment;
use crate::error::{Error, Result};
use crate::platform::Platform;
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Log file name (prefix of the dated files)
pub const LOG_FILE_NAME: &str = "ssh_colouriser.log";

/// Number of daily log files kept
pub const MAX_LOG_FILES: usize = 3;

/// Directory the log files are written to
pub fn log_dir(env: &Environment) -> PathBuf {
    Platform::paths().log_dir(env)
}

fn file_appender(env: &Environment) -> Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_NAME)
        .max_log_files(MAX_LOG_FILES)
        .build(log_dir(env))
        .map_err(|e| Error::Other(format!("Could not open log file: {}", e)))
}

/// Install the global subscriber
///
/// `RUST_LOG` sets the file filter (default `info`). If the log file cannot
/// be opened, only the stderr layer is installed and the error is returned
/// for the caller to report.
pub fn init(env: &Environment) -> Result<()> {
    let filter = EnvFilter::try_new(env.get("RUST_LOG").unwrap_or("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(LevelFilter::ERROR);

    let (file_layer, result) = match file_appender(env) {
        Ok(appender) => {
            let layer = fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(false)
                .with_filter(filter);
            (Some(layer), Ok(()))
        }
        Err(e) => (None, Err(e)),
    };

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| Error::Other(e.to_string()))?;
    result
}
