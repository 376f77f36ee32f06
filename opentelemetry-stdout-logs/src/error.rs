//! Errors returned by the stdout log exporter.
use thiserror::Error;

/// Result of an export, flush or shutdown call.
pub type ExportResult = Result<(), ExportError>;

/// Errors surfaced by [`LogExporter`](crate::export::LogExporter) operations.
///
/// A shut-down or unconfigured exporter never returns these; it discards
/// records silently.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ExportError {
    /// The caller's context was cancelled or its deadline had passed before
    /// the batch started.
    #[error(transparent)]
    Context(#[from] ContextError),

    /// A record could not be represented as JSON.
    #[error("failed to encode log record: {0}")]
    Encode(#[from] serde_json::Error),

    /// Writing to the sink failed. Records written before the failure stay
    /// written.
    #[error("failed to write log record: {0}")]
    Io(#[from] std::io::Error),

    /// Failed due to an internal error, such as a poisoned sink lock.
    /// The message is intended for logging purposes only.
    #[error("Reason: {0}")]
    InternalFailure(String),
}

/// Reason an [`ExportContext`](crate::context::ExportContext) refuses new work.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextError {
    /// The context was cancelled.
    #[error("context canceled")]
    Canceled,
    /// The context's deadline has passed.
    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

#[derive(Error, Debug)]
/// Errors that can occur while building an exporter.
// Non-exhaustive to allow for validation to be added without breaking changes.
// The current builder has no failing configuration.
#[non_exhaustive]
pub enum ExporterBuildError {
    /// Invalid configuration.
    #[error("{name}: {reason}")]
    InvalidConfig {
        /// The configuration name.
        name: String,
        /// The reason the configuration is invalid.
        reason: String,
    },
}
