//! JSON serializer for structured logging
//!
//! Each entry becomes a single-line JSON object (JSONL friendly):
//!
//! ```text
//! {"level":"error","message":"message","timestamp":"2009-02-13T23:31:30Z","callcontext":{...},"properties":{...}}
//! ```

use crate::core::{CallContext, Entry, Level, LoggerError, Properties, Result, Serializer, TimestampFormat};
use serde::Serialize;

#[derive(Serialize)]
struct Record<'a> {
    level: Level,
    message: &'a str,
    timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    callcontext: Option<&'a CallContext>,
    #[serde(skip_serializing_if = "is_empty")]
    properties: &'a Properties,
}

fn is_empty(properties: &&Properties) -> bool {
    properties.is_empty()
}

/// Serializes entries as JSON objects
///
/// Nested property maps become nested objects. Non-finite floats cannot be
/// represented and make serialization fail.
#[derive(Debug, Clone, Default)]
pub struct SerializerJson {
    pub timestamp_format: TimestampFormat,
}

impl SerializerJson {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }
}

impl Serializer for SerializerJson {
    fn serialize(&self, entry: &Entry) -> Result<Vec<u8>> {
        let level = entry.level.ok_or(LoggerError::InvalidEntry)?;
        let timestamp = entry.timestamp.ok_or(LoggerError::InvalidEntry)?;

        let record = Record {
            level,
            message: &entry.message,
            timestamp: self.timestamp_format.format(&timestamp)?,
            callcontext: entry.call_context.as_ref(),
            properties: &entry.properties,
        };
        Ok(serde_json::to_vec(&record)?)
    }
}
