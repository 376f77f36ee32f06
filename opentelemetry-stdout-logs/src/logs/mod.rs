//! # Stdout Log Exporter
//!
//! The stdout [`LogExporter`] writes each [`LogRecord`] as one line of JSON to
//! its configured [`Write`] instance. By default it will write to [`Stdout`].
//!
//! Every record becomes an object with these fields, in this order:
//!
//! ```text
//! Timestamp, ObservedTimestamp, Severity, SeverityText, Body, Attributes,
//! TraceID, SpanID, TraceFlags, Resource, Scope,
//! AttributeValueLengthLimit, AttributeCountLimit
//! ```
//!
//! Record content is not interpreted: the body and every attribute value are
//! written as `{}`. Timestamps are RFC 3339 in UTC with trailing zeros of the
//! fraction dropped; unset timestamps are written as `0001-01-01T00:00:00Z`.
//!
//! [`LogRecord`]: crate::LogRecord
//! [`Write`]: std::io::Write
//! [`Stdout`]: std::io::Stdout
mod encoder;
mod exporter;
mod transform;

pub use exporter::{LogExporter, LogExporterBuilder};
