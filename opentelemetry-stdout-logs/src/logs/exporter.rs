use core::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use super::encoder::Encoder;
use super::transform::WireRecord;
use crate::context::ExportContext;
use crate::error::{ExportError, ExportResult, ExporterBuildError};
use crate::macros::{otel_debug, otel_warn};
use crate::record::LogRecord;

/// An OpenTelemetry exporter that writes log records to stdout, or another
/// configured [`Write`], as newline-delimited JSON.
///
/// `LogExporter::default()` is an unconfigured exporter: every call succeeds
/// and nothing is written. Use [`LogExporter::builder`] to get one that
/// writes.
#[derive(Default)]
pub struct LogExporter {
    state: ExporterState,
}

#[derive(Default)]
enum ExporterState {
    #[default]
    Unconfigured,
    Active(Active),
}

struct Active {
    writer: Mutex<Box<dyn Write + Send>>,
    encoder: Encoder,
    without_timestamps: bool,
    is_shutdown: AtomicBool,
}

impl LogExporter {
    /// Create a builder to configure this exporter.
    pub fn builder() -> LogExporterBuilder {
        LogExporterBuilder::default()
    }

    /// Whether [`shutdown`](crate::export::LogExporter::shutdown) has been
    /// called. An unconfigured exporter reports `false`.
    pub fn is_shutdown(&self) -> bool {
        match &self.state {
            ExporterState::Unconfigured => false,
            ExporterState::Active(active) => active.is_shutdown.load(Ordering::SeqCst),
        }
    }
}

impl fmt::Debug for LogExporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            ExporterState::Unconfigured => f.write_str("LogExporter(Unconfigured)"),
            ExporterState::Active(active) => f
                .debug_struct("LogExporter")
                .field("encoder", &active.encoder)
                .field("without_timestamps", &active.without_timestamps)
                .field("is_shutdown", &active.is_shutdown.load(Ordering::SeqCst))
                .finish_non_exhaustive(),
        }
    }
}

impl Active {
    fn write_batch(&self, batch: &[LogRecord]) -> ExportResult {
        let mut writer = self.writer.lock().map_err(|_| {
            otel_debug!(name: "LogExporter.Export.MutexPoisoning");
            ExportError::InternalFailure("LogExporter writer mutex poisoned".into())
        })?;

        let mut buf = Vec::with_capacity(512);
        for record in batch {
            buf.clear();
            self.encoder
                .encode(&WireRecord::new(record, self.without_timestamps), &mut buf)?;
            writer.write_all(&buf)?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl crate::export::LogExporter for LogExporter {
    /// Write each record of `batch` to the sink, in order, as one contiguous
    /// block.
    ///
    /// Cancellation is only observed before the first record is written.
    fn export(&self, ctx: &ExportContext, batch: &[LogRecord]) -> ExportResult {
        let active = match &self.state {
            ExporterState::Unconfigured => return Ok(()),
            ExporterState::Active(active) => active,
        };
        if active.is_shutdown.load(Ordering::SeqCst) {
            otel_debug!(
                name: "LogExporter.Export.AfterShutdown",
                dropped_records = batch.len()
            );
            return Ok(());
        }
        ctx.check()?;
        if batch.is_empty() {
            return Ok(());
        }

        let result = active.write_batch(batch);
        if let Err(err) = &result {
            otel_warn!(
                name: "LogExporter.Export.Failed",
                error = format!("{err}")
            );
        }
        result
    }

    fn force_flush(&self, _ctx: &ExportContext) -> ExportResult {
        // writes are flushed at the end of every batch, nothing is buffered here
        Ok(())
    }

    fn shutdown(&self, _ctx: &ExportContext) -> ExportResult {
        if let ExporterState::Active(active) = &self.state {
            if active
                .is_shutdown
                .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                otel_debug!(name: "LogExporter.Shutdown");
            }
        }
        Ok(())
    }
}

/// Configuration for the stdout log exporter.
///
/// Options apply in call order; when two calls set the same field the last
/// one wins.
pub struct LogExporterBuilder {
    writer: Box<dyn Write + Send>,
    pretty_print: bool,
    without_timestamps: bool,
}

impl Default for LogExporterBuilder {
    fn default() -> Self {
        LogExporterBuilder {
            writer: Box::new(io::stdout()),
            pretty_print: false,
            without_timestamps: false,
        }
    }
}

impl LogExporterBuilder {
    /// Set the writer that the exporter will write to, replacing stdout.
    ///
    /// The exporter owns the writer until it is dropped; shutting the
    /// exporter down does not close it.
    ///
    /// # Examples
    ///
    /// ```
    /// use opentelemetry_stdout_logs::LogExporter;
    ///
    /// let buffer = Vec::new(); // Any type that implements `Write`
    /// let exporter = LogExporter::builder().with_writer(buffer).build();
    /// ```
    pub fn with_writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.writer = Box::new(writer);
        self
    }

    /// Write each record as tab-indented, multi-line JSON.
    pub fn with_pretty_print(mut self) -> Self {
        self.pretty_print = true;
        self
    }

    /// Write the zero instant in place of both record timestamps, which is
    /// useful for reproducible output.
    pub fn without_timestamps(mut self) -> Self {
        self.without_timestamps = true;
        self
    }

    /// Create a log exporter with the current configuration.
    pub fn build(self) -> Result<LogExporter, ExporterBuildError> {
        otel_debug!(
            name: "LogExporter.Build",
            pretty_print = self.pretty_print,
            without_timestamps = self.without_timestamps
        );
        Ok(LogExporter {
            state: ExporterState::Active(Active {
                writer: Mutex::new(self.writer),
                encoder: Encoder::new(self.pretty_print),
                without_timestamps: self.without_timestamps,
                is_shutdown: AtomicBool::new(false),
            }),
        })
    }
}

impl fmt::Debug for LogExporterBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogExporterBuilder")
            .field("pretty_print", &self.pretty_print)
            .field("without_timestamps", &self.without_timestamps)
            .finish_non_exhaustive()
    }
}
