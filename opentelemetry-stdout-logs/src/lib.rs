//! Export log records to stdout as newline-delimited JSON.
//!
//! # Examples
//!
//! ```no_run
//! use opentelemetry::logs::{AnyValue, Severity};
//! use opentelemetry_stdout_logs::export::LogExporter as _;
//! use opentelemetry_stdout_logs::{ExportContext, LogExporter, LogRecord};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let exporter = LogExporter::builder().with_pretty_print().build()?;
//!
//! let mut record = LogRecord::default();
//! record.set_severity_number(Severity::Info);
//! record.set_severity_text("INFO");
//! record.set_body(AnyValue::from("hello from the stdout exporter"));
//!
//! let ctx = ExportContext::background();
//! exporter.export(&ctx, &[record])?;
//! exporter.shutdown(&ctx)?;
//!
//! // {
//! // 	"Timestamp": "0001-01-01T00:00:00Z",
//! // 	"ObservedTimestamp": "0001-01-01T00:00:00Z",
//! // 	"Severity": 9,
//! // ...
//! # Ok(())
//! # }
//! ```
#![warn(missing_debug_implementations, missing_docs)]

mod macros;

pub(crate) mod common;
pub mod context;
pub mod error;
pub mod export;
mod logs;
pub mod record;

pub use context::{CancelHandle, ExportContext};
pub use error::{ContextError, ExportError, ExportResult, ExporterBuildError};
pub use logs::*;
pub use record::{LogRecord, Resource, TraceContext};
