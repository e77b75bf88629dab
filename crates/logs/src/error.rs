use std::path::PathBuf;
use thiserror::Error;

/// Errors generated by the library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when the log directory could not be created.
    #[error("failed to create log directory {}: {}", .0.display(), .1)]
    CreateDirectory(PathBuf, #[source] std::io::Error),

    /// Error generated when the log directory could not be inspected.
    #[error("failed to stat log directory {}: {}", .0.display(), .1)]
    StatDirectory(PathBuf, #[source] std::io::Error),

    /// Error generated when the log directory path exists
    /// but is not a directory.
    #[error("log directory {} is not a directory", .0.display())]
    NotDirectory(PathBuf),

    /// Error generated when the log directory could not be listed.
    #[error("failed to read log directory {}: {}", .0.display(), .1)]
    ReadDirectory(PathBuf, #[source] std::io::Error),

    /// Error generated when a log file could not be opened.
    #[error("failed to open log file {}: {}", .0.display(), .1)]
    OpenFile(PathBuf, #[source] std::io::Error),

    /// Error generated when a line could not be written to a log file.
    #[error("failed to write to log file {}: {}", .0.display(), .1)]
    WriteFile(PathBuf, #[source] std::io::Error),

    /// Error generated when a log file could not be read.
    #[error("failed to read log file {}: {}", .0.display(), .1)]
    ReadFile(PathBuf, #[source] std::io::Error),

    /// Error generated when a layer name is not usable as a file name.
    #[error("invalid layer name {0:?}")]
    InvalidLayer(String),

    /// Error generated by the time library format description.
    #[error(transparent)]
    InvalidFormatDescription(
        #[from] time::error::InvalidFormatDescription,
    ),

    /// Error generated formatting a timestamp.
    #[error(transparent)]
    Format(#[from] time::error::Format),

    /// Error generated by the io module.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
