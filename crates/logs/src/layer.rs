//! Mapping from layer names to log file names.
use crate::{Error, Result};

/// Extension for log files.
pub const LOG_FILE_EXT: &str = "log";

/// Policy for turning a layer name into a file name.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LayerNames {
    /// Strip path separators, control characters and reserved
    /// names from the layer.
    ///
    /// A layer with nothing left after sanitizing is rejected.
    #[default]
    Sanitize,
    /// Use the layer exactly as given.
    ///
    /// The caller is trusted; a layer containing separators
    /// may write outside of the log directory.
    Verbatim,
}

impl LayerNames {
    /// File name for a layer, eg: `auth.log`.
    pub fn file_name(&self, layer: &str) -> Result<String> {
        let base = match self {
            Self::Sanitize => {
                let name = sanitize_filename::sanitize(layer);
                if name.is_empty() {
                    return Err(Error::InvalidLayer(layer.to_owned()));
                }
                name
            }
            Self::Verbatim => layer.to_owned(),
        };
        Ok(format!("{}.{}", base, LOG_FILE_EXT))
    }
}
