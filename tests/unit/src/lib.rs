//! Helpers shared by the unit tests.
use std::{fs, path::Path};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a subscriber so dropped messages are visible
/// when running with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "layer_logs=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

/// Read a log file into lines without the trailing newlines.
pub fn read_lines(path: impl AsRef<Path>) -> anyhow::Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(contents.lines().map(|l| l.to_owned()).collect())
}
