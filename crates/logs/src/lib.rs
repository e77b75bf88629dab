#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]
//! Append timestamped lines to per-layer log files.
//!
//! Each layer writes to `<directory>/<layer>.log` and every line
//! has the form `[YYYY-MM-DD HH:MM:SS] <message>`.
//!
//! Writing is best effort; failures are handed to an
//! [ErrorReporter] and never returned from [Appender::log_message].
//! Use [Appender::try_log_message] to observe the error instead.
//!
//! ```no_run
//! layer_logs::set_log_directory("target/logs");
//! layer_logs::log_message("user signed in", "auth");
//! ```
mod appender;
mod config;
mod error;
mod layer;
mod line;
mod reporter;

pub use appender::{Appender, LogFileStatus};
pub use config::{LogConfig, DEFAULT_LOG_DIR, LOG_DIR_ENV};
pub use error::Error;
pub use layer::{LayerNames, LOG_FILE_EXT};
pub use line::{format_line, parse_line, timestamp, TIMESTAMP_FORMAT};
pub use reporter::{ErrorReporter, TracingReporter};

/// Result type for the library.
pub(crate) type Result<T> = std::result::Result<T, Error>;

use std::{path::PathBuf, sync::OnceLock};

static DEFAULT_APPENDER: OnceLock<Appender> = OnceLock::new();

/// Process-wide appender used by [set_log_directory] and [log_message].
///
/// Created on first access from [LogConfig::from_env].
pub fn default_appender() -> &'static Appender {
    DEFAULT_APPENDER.get_or_init(|| Appender::new(LogConfig::from_env()))
}

/// Change the directory of the process-wide appender.
pub fn set_log_directory(path: impl Into<PathBuf>) {
    default_appender().set_directory(path);
}

/// Append a message to the layer's log file using the
/// process-wide appender.
pub fn log_message(message: &str, layer: &str) {
    default_appender().log_message(message, layer);
}
