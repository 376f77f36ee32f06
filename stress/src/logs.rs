/*
    Stress test results:
    Run with `cargo run --release --bin logs`.
    Every worker thread exports a single-record batch to a shared exporter
    writing into `io::sink()`, so the numbers reflect encoding plus the cost
    of contending on the writer lock. Failed exports are reported separately
    and do not count towards throughput.
*/

use std::io;
use std::sync::{Arc, OnceLock};
use std::time::SystemTime;

use opentelemetry::logs::{AnyValue, Severity};
use opentelemetry::trace::{SpanId, TraceFlags, TraceId};
use opentelemetry::KeyValue;
use opentelemetry_stdout_logs::export::LogExporter as _;
use opentelemetry_stdout_logs::{ExportContext, LogExporter, LogRecord, Resource};

mod throughput;

static EXPORTER: OnceLock<LogExporter> = OnceLock::new();
static RECORD: OnceLock<LogRecord> = OnceLock::new();

fn main() {
    let exporter = LogExporter::builder()
        .with_writer(io::sink())
        .build()
        .expect("exporter");
    let _ = EXPORTER.set(exporter);

    let mut record = LogRecord::default();
    record.set_timestamp(SystemTime::now());
    record.set_observed_timestamp(SystemTime::now());
    record.set_severity_number(Severity::Error);
    record.set_severity_text("ERROR");
    record.set_body(AnyValue::from("Unable to process checkout."));
    record.set_attributes([
        ("event_id", AnyValue::from(20)),
        ("user_name", AnyValue::from("otel")),
        ("user_email", AnyValue::from("otel@opentelemetry.io")),
    ]);
    record.set_trace_context(
        TraceId::from_bytes(0x0102030405060708090a0b0c0d0e0f10u128.to_be_bytes()),
        SpanId::from_bytes(0x0102030405060708u64.to_be_bytes()),
        Some(TraceFlags::SAMPLED),
    );
    record.set_resource(Arc::new(Resource::new([KeyValue::new(
        "service.name",
        "stress",
    )])));
    let _ = RECORD.set(record);

    throughput::test_throughput(test_export);
}

fn test_export() -> bool {
    let (Some(exporter), Some(record)) = (EXPORTER.get(), RECORD.get()) else {
        return false;
    };
    exporter
        .export(&ExportContext::background(), std::slice::from_ref(record))
        .is_ok()
}
