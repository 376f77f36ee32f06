//! Log exporters
use crate::context::ExportContext;
use crate::error::ExportResult;
use crate::record::LogRecord;
use std::fmt::Debug;
use std::sync::Arc;

/// `LogExporter` defines the interface that log exporters should implement.
///
/// Implementations are shared between threads, so every method takes `&self`
/// and must be safe to call concurrently with any other.
pub trait LogExporter: Send + Sync + Debug {
    /// Exports a batch of log records.
    ///
    /// Records must reach the destination in the order given. A returned
    /// error means the batch was not completely exported; records before the
    /// failure may already have been delivered.
    fn export(&self, ctx: &ExportContext, batch: &[LogRecord]) -> ExportResult;

    /// Delivers anything the exporter is still holding.
    fn force_flush(&self, _ctx: &ExportContext) -> ExportResult {
        Ok(())
    }

    /// Shuts down the exporter. Later calls to `export` must not deliver
    /// anything. Calling this more than once is allowed.
    fn shutdown(&self, _ctx: &ExportContext) -> ExportResult {
        Ok(())
    }
}

impl<T: LogExporter + ?Sized> LogExporter for Arc<T> {
    fn export(&self, ctx: &ExportContext, batch: &[LogRecord]) -> ExportResult {
        (**self).export(ctx, batch)
    }

    fn force_flush(&self, ctx: &ExportContext) -> ExportResult {
        (**self).force_flush(ctx)
    }

    fn shutdown(&self, ctx: &ExportContext) -> ExportResult {
        (**self).shutdown(ctx)
    }
}

impl<T: LogExporter + ?Sized> LogExporter for Box<T> {
    fn export(&self, ctx: &ExportContext, batch: &[LogRecord]) -> ExportResult {
        (**self).export(ctx, batch)
    }

    fn force_flush(&self, ctx: &ExportContext) -> ExportResult {
        (**self).force_flush(ctx)
    }

    fn shutdown(&self, ctx: &ExportContext) -> ExportResult {
        (**self).shutdown(ctx)
    }
}
