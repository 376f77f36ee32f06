use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::transform::WireRecord;
use crate::error::ExportError;

/// Turns one [`WireRecord`] into a newline-terminated JSON document.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Encoder {
    pretty_print: bool,
}

impl Encoder {
    pub(crate) fn new(pretty_print: bool) -> Self {
        Encoder { pretty_print }
    }

    /// Appends the encoded record to `buf`. On error `buf` may hold a partial
    /// document and must be discarded by the caller.
    pub(crate) fn encode(&self, record: &WireRecord<'_>, buf: &mut Vec<u8>) -> Result<(), ExportError> {
        if self.pretty_print {
            let mut serializer =
                serde_json::Serializer::with_formatter(&mut *buf, PrettyFormatter::with_indent(b"\t"));
            record.serialize(&mut serializer)?;
        } else {
            serde_json::to_writer(&mut *buf, record)?;
        }
        buf.push(b'\n');
        Ok(())
    }
}
