//! Destinations for errors that are not returned to the caller.
use crate::Error;

/// Receives errors swallowed by [Appender::log_message](crate::Appender::log_message).
///
/// Closures accepting an `&Error` are reporters too.
pub trait ErrorReporter: Send + Sync {
    /// Report an error.
    fn report(&self, error: &Error);
}

/// Reporter that emits a warning event via `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, error: &Error) {
        tracing::warn!(error = %error, "layer_logs::dropped_message");
    }
}

impl<F> ErrorReporter for F
where
    F: Fn(&Error) + Send + Sync,
{
    fn report(&self, error: &Error) {
        (self)(error)
    }
}
