//! Cost of encoding and writing records, with the sink itself discarding
//! everything.
//!
//! Run this benchmark with:
//! cargo bench --bench exporter

use std::io;
use std::time::SystemTime;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use opentelemetry::logs::{AnyValue, Severity};
use opentelemetry::trace::{SpanId, TraceFlags, TraceId};
use opentelemetry_stdout_logs::export::LogExporter as _;
use opentelemetry_stdout_logs::{ExportContext, LogExporter, LogExporterBuilder, LogRecord};

fn record() -> LogRecord {
    let mut record = LogRecord::default();
    record.set_timestamp(SystemTime::now());
    record.set_observed_timestamp(SystemTime::now());
    record.set_severity_number(Severity::Info);
    record.set_severity_text("INFO");
    record.set_body(AnyValue::from("Unable to process checkout."));
    record.set_attributes([
        ("event_id", AnyValue::from(20)),
        ("user_name", AnyValue::from("otel")),
        ("user_email", AnyValue::from("otel@opentelemetry.io")),
        ("retry", AnyValue::from(false)),
    ]);
    record.set_trace_context(
        TraceId::from_bytes(0x0102030405060708090a0b0c0d0e0f10u128.to_be_bytes()),
        SpanId::from_bytes(0x0102030405060708u64.to_be_bytes()),
        Some(TraceFlags::SAMPLED),
    );
    record
}

fn compact(builder: LogExporterBuilder) -> LogExporterBuilder {
    builder
}

fn pretty(builder: LogExporterBuilder) -> LogExporterBuilder {
    builder.with_pretty_print()
}

fn without_timestamps(builder: LogExporterBuilder) -> LogExporterBuilder {
    builder.without_timestamps()
}

fn build_exporter(configure: fn(LogExporterBuilder) -> LogExporterBuilder) -> LogExporter {
    configure(LogExporter::builder().with_writer(io::sink()))
        .build()
        .expect("exporter")
}

fn criterion_benchmark(c: &mut Criterion) {
    let ctx = ExportContext::background();
    let mut group = c.benchmark_group("LogExporter");

    let configs: [(&str, fn(LogExporterBuilder) -> LogExporterBuilder); 3] = [
        ("compact", compact),
        ("pretty", pretty),
        ("without_timestamps", without_timestamps),
    ];
    for (name, configure) in configs {
        let exporter = build_exporter(configure);
        let single = [record()];
        group.bench_function(format!("{name}/1"), |b| {
            b.iter(|| exporter.export(&ctx, &single))
        });
        group.bench_function(format!("{name}/512"), |b| {
            b.iter_batched_ref(
                || vec![record(); 512],
                |batch| exporter.export(&ctx, batch),
                BatchSize::LargeInput,
            )
        });
    }

    group.bench_function("after_shutdown", |b| {
        let exporter = build_exporter(compact);
        exporter.shutdown(&ctx).expect("shutdown");
        let batch = vec![record(); 512];
        b.iter(|| exporter.export(&ctx, &batch))
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
