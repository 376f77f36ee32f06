use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{TimeZone, Utc};
use opentelemetry::{logs::AnyValue, InstrumentationScope, Key, KeyValue};
use serde::{ser::Error as _, ser::SerializeMap, Serialize, Serializer};

use crate::record::Resource;

/// Written in place of unset or suppressed timestamps.
pub(crate) const ZERO_TIME: &str = "0001-01-01T00:00:00Z";

/// Bodies and attribute values. Their content is not interpreted, every
/// value is written as `{}`.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct OpaqueValue;

impl Serialize for OpaqueValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_map(Some(0))?.end()
    }
}

/// A single `{"Key": .., "Value": {}}` pair.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct KeyValueRef<'a> {
    key: &'a str,
    value: OpaqueValue,
}

impl<'a> KeyValueRef<'a> {
    pub(crate) fn new(key: &'a Key) -> Self {
        KeyValueRef {
            key: key.as_str(),
            value: OpaqueValue,
        }
    }
}

impl<'a> From<&'a (Key, AnyValue)> for KeyValueRef<'a> {
    fn from((key, _): &'a (Key, AnyValue)) -> Self {
        KeyValueRef::new(key)
    }
}

impl<'a> From<&'a KeyValue> for KeyValueRef<'a> {
    fn from(kv: &'a KeyValue) -> Self {
        KeyValueRef::new(&kv.key)
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct Scope<'a> {
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Version")]
    version: &'a str,
    #[serde(rename = "SchemaURL")]
    schema_url: &'a str,
}

impl<'a> From<&'a InstrumentationScope> for Scope<'a> {
    fn from(scope: &'a InstrumentationScope) -> Self {
        Scope {
            name: scope.name(),
            version: scope.version().unwrap_or_default(),
            schema_url: scope.schema_url().unwrap_or_default(),
        }
    }
}

/// Written as `{}` for an empty resource.
#[derive(Debug, Serialize)]
pub(crate) struct ResourceRef<'a> {
    #[serde(rename = "Attributes", skip_serializing_if = "Vec::is_empty")]
    attributes: Vec<KeyValueRef<'a>>,
    #[serde(rename = "SchemaURL", skip_serializing_if = "str::is_empty")]
    schema_url: &'a str,
}

impl<'a> From<&'a Resource> for ResourceRef<'a> {
    fn from(resource: &'a Resource) -> Self {
        ResourceRef {
            attributes: resource.iter().map(KeyValueRef::from).collect(),
            schema_url: resource.schema_url().unwrap_or_default(),
        }
    }
}

/// RFC 3339 in UTC with trailing zeros of the fraction dropped, or
/// [`ZERO_TIME`] when there is no time.
pub(crate) fn as_rfc3339<S>(time: &Option<SystemTime>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let Some(time) = time else {
        return serializer.serialize_str(ZERO_TIME);
    };
    let (secs, nanos) = match time.duration_since(UNIX_EPOCH) {
        Ok(since) => (i64::try_from(since.as_secs()).ok(), since.subsec_nanos()),
        Err(err) => {
            let before = err.duration();
            let secs = i64::try_from(before.as_secs()).ok().map(|s| -s);
            match before.subsec_nanos() {
                0 => (secs, 0),
                n => (secs.and_then(|s| s.checked_sub(1)), 1_000_000_000 - n),
            }
        }
    };

    let Some(datetime) = secs.and_then(|secs| Utc.timestamp_opt(secs, nanos).single()) else {
        return Err(S::Error::custom("Invalid Timestamp."));
    };
    let mut formatted = datetime.format("%Y-%m-%dT%H:%M:%S").to_string();
    if nanos > 0 {
        let fraction = format!("{nanos:09}");
        formatted.push('.');
        formatted.push_str(fraction.trim_end_matches('0'));
    }
    formatted.push('Z');
    serializer.serialize_str(&formatted)
}
