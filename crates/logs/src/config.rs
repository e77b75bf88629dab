//! Configuration for an appender.
use crate::LayerNames;
use std::path::PathBuf;

/// Directory used when none is configured.
pub const DEFAULT_LOG_DIR: &str = "logs/logfiles/";

/// Environment variable that overrides the log directory.
pub const LOG_DIR_ENV: &str = "LAYER_LOGS_DIR";

/// Settings used to create an [Appender](crate::Appender).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Directory that contains the log files.
    pub directory: PathBuf,
    /// How layer names are mapped to file names.
    pub layer_names: LayerNames,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_LOG_DIR),
            layer_names: Default::default(),
        }
    }
}

impl LogConfig {
    /// Default configuration with the directory taken from
    /// the `LAYER_LOGS_DIR` environment variable when set.
    pub fn from_env() -> Self {
        Self::default().with_env_directory(std::env::var_os(LOG_DIR_ENV))
    }

    /// Set the log directory.
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    /// Set the layer naming policy.
    pub fn with_layer_names(mut self, layer_names: LayerNames) -> Self {
        self.layer_names = layer_names;
        self
    }

    fn with_env_directory(self, value: Option<std::ffi::OsString>) -> Self {
        match value {
            Some(value) if !value.is_empty() => self.with_directory(value),
            _ => self,
        }
    }
}
