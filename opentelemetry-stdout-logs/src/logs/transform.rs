use std::time::SystemTime;

use opentelemetry::trace::{SpanId, TraceFlags, TraceId};
use serde::Serialize;

use crate::common::{as_rfc3339, KeyValueRef, OpaqueValue, ResourceRef, Scope};
use crate::record::LogRecord;

/// Flattened view of a [`LogRecord`] in the exact field order written to the
/// sink. Borrows from the record and lives for a single export call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct WireRecord<'a> {
    #[serde(serialize_with = "as_rfc3339")]
    timestamp: Option<SystemTime>,
    #[serde(serialize_with = "as_rfc3339")]
    observed_timestamp: Option<SystemTime>,
    severity: i32,
    severity_text: &'a str,
    body: OpaqueValue,
    attributes: Vec<KeyValueRef<'a>>,
    #[serde(rename = "TraceID")]
    trace_id: String,
    #[serde(rename = "SpanID")]
    span_id: String,
    trace_flags: String,
    resource: ResourceRef<'a>,
    scope: Scope<'a>,
    attribute_value_length_limit: i64,
    attribute_count_limit: i64,
}

impl<'a> WireRecord<'a> {
    /// Project `record`. With `without_timestamps` both timestamps are
    /// written as the zero time.
    pub(crate) fn new(record: &'a LogRecord, without_timestamps: bool) -> Self {
        let (timestamp, observed_timestamp) = if without_timestamps {
            (None, None)
        } else {
            (record.timestamp(), record.observed_timestamp())
        };

        let (trace_id, span_id, trace_flags) = match record.trace_context() {
            Some(cx) => (
                cx.trace_id,
                cx.span_id,
                cx.trace_flags.unwrap_or_default(),
            ),
            None => (TraceId::INVALID, SpanId::INVALID, TraceFlags::default()),
        };

        WireRecord {
            timestamp,
            observed_timestamp,
            severity: record.severity_number().map_or(0, |s| s as i32),
            severity_text: record.severity_text().unwrap_or_default(),
            body: OpaqueValue,
            attributes: record.attributes_iter().map(KeyValueRef::from).collect(),
            trace_id: format!("{:032x}", u128::from_be_bytes(trace_id.to_bytes())),
            span_id: format!("{:016x}", u64::from_be_bytes(span_id.to_bytes())),
            trace_flags: format!("{:02x}", trace_flags.to_u8()),
            resource: ResourceRef::from(record.resource()),
            scope: Scope::from(record.instrumentation_scope()),
            attribute_value_length_limit: record.attribute_value_length_limit(),
            attribute_count_limit: record.attribute_count_limit(),
        }
    }
}
