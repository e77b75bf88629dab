//! Append lines to per-layer log files.
use crate::{
    format_line, timestamp, Error, ErrorReporter, LayerNames, LogConfig,
    Result, TracingReporter, LOG_FILE_EXT,
};
use parking_lot::{Mutex, RwLock};
use rev_buf_reader::RevBufReader;
use std::{
    fs::{self, DirBuilder, File, OpenOptions},
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

#[cfg(unix)]
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt};

/// Log file information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFileStatus {
    /// Layer name derived from the file stem.
    pub layer: String,
    /// Path to the log file.
    pub path: PathBuf,
    /// Size of the file in bytes.
    pub size: u64,
}

/// Writes timestamped lines to `<directory>/<layer>.log`.
///
/// All writes made through an appender are serialized by a single
/// lock regardless of the target layer so lines are never torn
/// and the order of writes is total across layers.
pub struct Appender {
    directory: RwLock<PathBuf>,
    layer_names: LayerNames,
    lock: Mutex<()>,
    reporter: Box<dyn ErrorReporter>,
}

impl Default for Appender {
    fn default() -> Self {
        Self::new(Default::default())
    }
}

impl std::fmt::Debug for Appender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Appender")
            .field("directory", &*self.directory.read())
            .field("layer_names", &self.layer_names)
            .finish()
    }
}

impl Appender {
    /// Create an appender that reports errors via `tracing`.
    pub fn new(config: LogConfig) -> Self {
        Self::with_reporter(config, TracingReporter)
    }

    /// Create an appender with a custom error reporter.
    pub fn with_reporter(
        config: LogConfig,
        reporter: impl ErrorReporter + 'static,
    ) -> Self {
        Self {
            directory: RwLock::new(config.directory),
            layer_names: config.layer_names,
            lock: Mutex::new(()),
            reporter: Box::new(reporter),
        }
    }

    /// Directory for log files.
    pub fn directory(&self) -> PathBuf {
        self.directory.read().clone()
    }

    /// Change the directory for log files.
    ///
    /// The path is not validated; it takes effect on the next write
    /// and existing files are left where they are.
    pub fn set_directory(&self, path: impl Into<PathBuf>) {
        *self.directory.write() = path.into();
    }

    /// Layer naming policy.
    pub fn layer_names(&self) -> LayerNames {
        self.layer_names
    }

    /// Path to the log file for a layer.
    pub fn file_path(&self, layer: &str) -> Result<PathBuf> {
        Ok(self.directory().join(self.layer_names.file_name(layer)?))
    }

    /// Append a message to the log file for a layer.
    ///
    /// Errors are sent to the reporter and never returned so a
    /// failure means the message is dropped.
    pub fn log_message(&self, message: &str, layer: &str) {
        if let Err(e) = self.try_log_message(message, layer) {
            self.reporter.report(&e);
        }
    }

    /// Append a message to the log file for a layer and
    /// return the path that was written to.
    pub fn try_log_message(
        &self,
        message: &str,
        layer: &str,
    ) -> Result<PathBuf> {
        let directory = self.directory();
        let path = directory.join(self.layer_names.file_name(layer)?);
        ensure_directory(&directory)?;
        let line = format_line(&timestamp()?, message);

        let _guard = self.lock.lock();
        append_line(&path, &line)?;
        Ok(path)
    }

    /// List the log files in the directory sorted by layer.
    ///
    /// When the directory does not exist the list is empty.
    pub fn status(&self) -> Result<Vec<LogFileStatus>> {
        let directory = self.directory();
        let _guard = self.lock.lock();

        let entries = match fs::read_dir(&directory) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(Vec::new())
            }
            Err(e) => return Err(Error::ReadDirectory(directory, e)),
        };

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(LOG_FILE_EXT)
            {
                continue;
            }
            let meta = entry.metadata()?;
            if !meta.is_file() {
                continue;
            }
            let layer = path
                .file_stem()
                .unwrap_or_default()
                .to_string_lossy()
                .into_owned();
            files.push(LogFileStatus {
                layer,
                path,
                size: meta.len(),
            });
        }
        files.sort_by(|a, b| a.layer.cmp(&b.layer));
        Ok(files)
    }

    /// Read the last `count` lines for a layer in file order.
    ///
    /// When the file does not exist the list is empty.
    pub fn tail(&self, layer: &str, count: usize) -> Result<Vec<String>> {
        let path = self.file_path(layer)?;
        let _guard = self.lock.lock();

        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(Vec::new())
            }
            Err(e) => return Err(Error::OpenFile(path, e)),
        };

        let reader = RevBufReader::new(file);
        let mut lines = Vec::new();
        for line in reader.lines() {
            if lines.len() == count {
                break;
            }
            let line = line.map_err(|e| Error::ReadFile(path.clone(), e))?;
            // Every written line has a timestamp so an empty
            // line is the trailing newline
            if !line.is_empty() {
                lines.push(line);
            }
        }
        lines.reverse();
        Ok(lines)
    }
}

/// Create the directory and any missing parents.
fn ensure_directory(directory: &Path) -> Result<()> {
    match fs::metadata(directory) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(Error::NotDirectory(directory.to_owned())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            let mut builder = DirBuilder::new();
            builder.recursive(true);
            #[cfg(unix)]
            builder.mode(0o755);
            builder
                .create(directory)
                .map_err(|e| Error::CreateDirectory(directory.to_owned(), e))?;
            tracing::debug!(
                directory = %directory.display(),
                "layer_logs::create_directory"
            );
            Ok(())
        }
        Err(e) => Err(Error::StatDirectory(directory.to_owned(), e)),
    }
}

/// Append a line to a file, the file handle is closed on return.
fn append_line(path: &Path, line: &str) -> Result<()> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    options.mode(0o644);
    let mut file = options
        .open(path)
        .map_err(|e| Error::OpenFile(path.to_owned(), e))?;
    file.write_all(line.as_bytes())
        .map_err(|e| Error::WriteFile(path.to_owned(), e))?;
    Ok(())
}
