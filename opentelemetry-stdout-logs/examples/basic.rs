//! run with `$ cargo run --example basic`
//!
//! Records go to stdout. The exporter's own diagnostics go to stderr through
//! the `tracing` subscriber installed below.

use std::sync::Arc;
use std::time::SystemTime;

use opentelemetry::logs::{AnyValue, Severity};
use opentelemetry::trace::{SpanId, TraceFlags, TraceId};
use opentelemetry::{InstrumentationScope, KeyValue};
use opentelemetry_stdout_logs::export::LogExporter as _;
use opentelemetry_stdout_logs::{ExportContext, LogExporter, LogRecord, Resource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let exporter = LogExporter::builder().with_pretty_print().build()?;

    let resource = Arc::new(Resource::new([KeyValue::new(
        "service.name",
        "basic-example",
    )]));
    let scope = InstrumentationScope::builder("basic-example")
        .with_version(env!("CARGO_PKG_VERSION"))
        .build();

    let mut record = LogRecord::default();
    record.set_timestamp(SystemTime::now());
    record.set_observed_timestamp(SystemTime::now());
    record.set_severity_number(Severity::Info);
    record.set_severity_text("INFO");
    record.set_body(AnyValue::from("hello from the stdout log exporter"));
    record.set_attributes([
        ("user_name", AnyValue::from("otel")),
        ("attempt", AnyValue::from(3)),
    ]);
    record.set_trace_context(
        TraceId::from_hex("4bf92f3577b34da6a3ce929d0e0e4736")?,
        SpanId::from_hex("00f067aa0ba902b7")?,
        Some(TraceFlags::SAMPLED),
    );
    record.set_resource(resource);
    record.set_instrumentation_scope(scope);

    let ctx = ExportContext::background();
    exporter.export(&ctx, &[record.clone()])?;
    exporter.force_flush(&ctx)?;
    exporter.shutdown(&ctx)?;

    // dropped silently
    exporter.export(&ctx, &[record])?;
    Ok(())
}
