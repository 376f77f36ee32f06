//! The log record handed to the exporter by the surrounding pipeline.
//!
//! The exporter only reads these values; it never interprets or validates
//! their content.
use opentelemetry::{
    logs::{AnyValue, Severity},
    trace::{SpanId, TraceFlags, TraceId},
    InstrumentationScope, Key, KeyValue,
};
use std::{borrow::Cow, sync::Arc, time::SystemTime};

/// LogRecord represents all data carried by a log record, and is provided to
/// the [`LogExporter`](crate::export::LogExporter) as input.
#[derive(Debug, Clone)]
pub struct LogRecord {
    timestamp: Option<SystemTime>,
    observed_timestamp: Option<SystemTime>,
    severity_number: Option<Severity>,
    severity_text: Option<Cow<'static, str>>,
    body: Option<AnyValue>,
    attributes: Vec<(Key, AnyValue)>,
    trace_context: Option<TraceContext>,
    resource: Arc<Resource>,
    scope: InstrumentationScope,
    attribute_value_length_limit: i64,
    attribute_count_limit: i64,
}

impl Default for LogRecord {
    fn default() -> Self {
        LogRecord {
            timestamp: None,
            observed_timestamp: None,
            severity_number: None,
            severity_text: None,
            body: None,
            attributes: Vec::new(),
            trace_context: None,
            resource: Arc::new(Resource::default()),
            scope: InstrumentationScope::builder("").build(),
            attribute_value_length_limit: 0,
            attribute_count_limit: 0,
        }
    }
}

impl LogRecord {
    /// Sets the time the event occurred.
    pub fn set_timestamp(&mut self, timestamp: SystemTime) {
        self.timestamp = Some(timestamp);
    }

    /// Sets the time the event was observed by the pipeline.
    pub fn set_observed_timestamp(&mut self, timestamp: SystemTime) {
        self.observed_timestamp = Some(timestamp);
    }

    /// Sets the normalized severity.
    pub fn set_severity_number(&mut self, severity: Severity) {
        self.severity_number = Some(severity);
    }

    /// Sets the original severity text from the source.
    pub fn set_severity_text(&mut self, text: impl Into<Cow<'static, str>>) {
        self.severity_text = Some(text.into());
    }

    /// Sets the message body.
    pub fn set_body(&mut self, body: AnyValue) {
        self.body = Some(body);
    }

    /// Replaces all attributes. Order is kept and keys need not be unique.
    pub fn set_attributes<I, K, V>(&mut self, attributes: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<AnyValue>,
    {
        self.attributes = attributes
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
    }

    /// Appends a single attribute.
    pub fn add_attribute<K, V>(&mut self, key: K, value: V)
    where
        K: Into<Key>,
        V: Into<AnyValue>,
    {
        self.attributes.push((key.into(), value.into()));
    }

    /// Correlates the record with a span.
    pub fn set_trace_context(
        &mut self,
        trace_id: TraceId,
        span_id: SpanId,
        trace_flags: Option<TraceFlags>,
    ) {
        self.trace_context = Some(TraceContext {
            trace_id,
            span_id,
            trace_flags,
        });
    }

    /// Sets the resource the record was produced by.
    pub fn set_resource(&mut self, resource: Arc<Resource>) {
        self.resource = resource;
    }

    /// Sets the instrumentation scope the record was emitted through.
    pub fn set_instrumentation_scope(&mut self, scope: InstrumentationScope) {
        self.scope = scope;
    }

    /// Records the attribute value length limit applied upstream.
    pub fn set_attribute_value_length_limit(&mut self, limit: i64) {
        self.attribute_value_length_limit = limit;
    }

    /// Records the attribute count limit applied upstream.
    pub fn set_attribute_count_limit(&mut self, limit: i64) {
        self.attribute_count_limit = limit;
    }

    /// Time the event occurred, if set.
    pub fn timestamp(&self) -> Option<SystemTime> {
        self.timestamp
    }

    /// Time the event was observed, if set.
    pub fn observed_timestamp(&self) -> Option<SystemTime> {
        self.observed_timestamp
    }

    /// Normalized severity, if set.
    pub fn severity_number(&self) -> Option<Severity> {
        self.severity_number
    }

    /// Original severity text, if set.
    pub fn severity_text(&self) -> Option<&str> {
        self.severity_text.as_deref()
    }

    /// Message body, if set.
    pub fn body(&self) -> Option<&AnyValue> {
        self.body.as_ref()
    }

    /// Attributes in insertion order.
    pub fn attributes_iter(&self) -> impl Iterator<Item = &(Key, AnyValue)> {
        self.attributes.iter()
    }

    /// Number of attributes.
    pub fn attributes_len(&self) -> usize {
        self.attributes.len()
    }

    /// Trace correlation, if the record was emitted inside a span.
    pub fn trace_context(&self) -> Option<&TraceContext> {
        self.trace_context.as_ref()
    }

    /// Producing resource.
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// Emitting instrumentation scope.
    pub fn instrumentation_scope(&self) -> &InstrumentationScope {
        &self.scope
    }

    /// Attribute value length limit applied upstream. Negative means unlimited.
    pub fn attribute_value_length_limit(&self) -> i64 {
        self.attribute_value_length_limit
    }

    /// Attribute count limit applied upstream. Negative means unlimited.
    pub fn attribute_count_limit(&self) -> i64 {
        self.attribute_count_limit
    }
}

/// TraceContext stores the trace data for logs that have an associated
/// span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceContext {
    /// Trace id
    pub trace_id: TraceId,
    /// Span Id
    pub span_id: SpanId,
    /// Trace flags
    pub trace_flags: Option<TraceFlags>,
}

/// Describes the entity that produced a set of records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resource {
    attributes: Vec<KeyValue>,
    schema_url: Option<Cow<'static, str>>,
}

impl Resource {
    /// Create a resource from its attributes.
    pub fn new<T: IntoIterator<Item = KeyValue>>(attributes: T) -> Self {
        Resource {
            attributes: attributes.into_iter().collect(),
            schema_url: None,
        }
    }

    /// Create a resource from its attributes and the schema URL they follow.
    pub fn from_schema_url<T, S>(attributes: T, schema_url: S) -> Self
    where
        T: IntoIterator<Item = KeyValue>,
        S: Into<Cow<'static, str>>,
    {
        let schema_url = schema_url.into();
        Resource {
            attributes: attributes.into_iter().collect(),
            schema_url: (!schema_url.is_empty()).then_some(schema_url),
        }
    }

    /// Attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &KeyValue> {
        self.attributes.iter()
    }

    /// Schema URL, if any.
    pub fn schema_url(&self) -> Option<&str> {
        self.schema_url.as_deref()
    }

    /// True when the resource carries neither attributes nor a schema URL.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.schema_url.is_none()
    }
}
