//! Timestamp formatting utilities
//!
//! Wall clock formats shared by the JSON serializer and the text serializer's
//! full timestamp mode. All formats render UTC.

use super::error::{LoggerError, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Standardized timestamp format options
///
/// # Examples
///
/// ```
/// use leveled_logger::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.timestamp_opt(1234567890, 0).unwrap();
/// assert_eq!(TimestampFormat::Rfc3339.format(&at).unwrap(), "2009-02-13T23:31:30Z");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// RFC 3339 with second precision: `2009-02-13T23:31:30Z`
    ///
    /// The default. Round-trips through any RFC 3339 parser.
    #[default]
    Rfc3339,

    /// ISO 8601 with milliseconds: `2009-02-13T23:31:30.123Z`
    Iso8601,

    /// ISO 8601 with microseconds: `2009-02-13T23:31:30.123456Z`
    Iso8601Micros,

    /// Unix timestamp in seconds: `1234567890`
    Unix,

    /// Unix timestamp in milliseconds: `1234567890123`
    UnixMillis,

    /// Unix timestamp in microseconds: `1234567890123456`
    UnixMicros,

    /// Custom strftime format
    ///
    /// An empty pattern means "unset" and renders like [`TimestampFormat::Rfc3339`].
    ///
    /// ```
    /// use leveled_logger::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Format a `DateTime<Utc>` according to this format
    ///
    /// Fails only for custom patterns chrono cannot render.
    pub fn format(&self, datetime: &DateTime<Utc>) -> Result<String> {
        let formatted = match self.normalized() {
            TimestampFormat::Rfc3339 => datetime.to_rfc3339_opts(SecondsFormat::Secs, true),
            TimestampFormat::Iso8601 => datetime.to_rfc3339_opts(SecondsFormat::Millis, true),
            TimestampFormat::Iso8601Micros => {
                datetime.to_rfc3339_opts(SecondsFormat::Micros, true)
            }
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::UnixMicros => datetime.timestamp_micros().to_string(),
            TimestampFormat::Custom(pattern) => {
                let mut out = String::new();
                write!(out, "{}", datetime.format(pattern)).map_err(|_| {
                    LoggerError::other(format!("invalid timestamp format '{}'", pattern))
                })?;
                out
            }
        };
        Ok(formatted)
    }

    /// The format actually used, with an empty custom pattern replaced by the default
    #[must_use]
    pub fn normalized(&self) -> &TimestampFormat {
        const DEFAULT: &TimestampFormat = &TimestampFormat::Rfc3339;
        match self {
            TimestampFormat::Custom(pattern) if pattern.is_empty() => DEFAULT,
            other => other,
        }
    }
}
