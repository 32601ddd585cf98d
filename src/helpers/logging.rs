//! Logging Setup
//!
//! stderr output filtered by `RUST_LOG` plus a daily-rolling file in the data
//! directory.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::helpers::{get_or_create_data_dir, is_development};

/// Log file name prefix inside the data directory
pub const LOG_FILE_NAME: &str = "miso-dash.log";

/// Install the global subscriber
///
/// The returned guard flushes the file writer on drop and must be held for the
/// lifetime of the process. Returns `None` when no data directory is available,
/// in which case only stderr logging is installed.
pub fn init_logging() -> Option<WorkerGuard> {
    let default_level = if is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let stderr_layer = fmt::layer().with_writer(std::io::stderr);

    match get_or_create_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .init();
            tracing::debug!(dir = %dir.display(), "File logging enabled");
            Some(guard)
        }
        Err(e) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .init();
            tracing::warn!(error = %e, "No data directory, logging to stderr only");
            None
        }
    }
}
