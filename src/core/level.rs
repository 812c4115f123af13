//! Severity levels, ordered like syslog priorities

use super::error::LoggerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Severity of a log entry
///
/// Lower value means higher importance. Valid levels form the contiguous range
/// [`Level::EMERGENCY`]..=[`Level::DEBUG`]; any other raw value is representable
/// through [`Level::from_raw`] but reported as invalid and printed as `unknown`.
///
/// # Examples
///
/// ```
/// use leveled_logger::Level;
///
/// assert!(Level::ERROR < Level::INFO);
/// assert_eq!("warning".parse::<Level>().unwrap(), Level::WARNING);
/// assert_eq!(Level::NOTICE.to_string(), "notice");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u8);

impl Level {
    pub const EMERGENCY: Level = Level(0);
    pub const ALERT: Level = Level(1);
    pub const CRITICAL: Level = Level(2);
    pub const ERROR: Level = Level(3);
    pub const WARNING: Level = Level(4);
    pub const NOTICE: Level = Level(5);
    pub const INFO: Level = Level(6);
    pub const DEBUG: Level = Level(7);

    /// All valid levels, most severe first
    pub const ALL: [Level; 8] = [
        Level::EMERGENCY,
        Level::ALERT,
        Level::CRITICAL,
        Level::ERROR,
        Level::WARNING,
        Level::NOTICE,
        Level::INFO,
        Level::DEBUG,
    ];

    /// Wrap a raw severity value without validating it
    #[inline]
    pub const fn from_raw(value: u8) -> Self {
        Level(value)
    }

    #[inline]
    pub const fn as_raw(self) -> u8 {
        self.0
    }

    /// True iff the level is within `[EMERGENCY, DEBUG]`
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 <= Level::DEBUG.0
    }

    pub fn to_str(self) -> &'static str {
        match self.0 {
            0 => "emergency",
            1 => "alert",
            2 => "critical",
            3 => "error",
            4 => "warning",
            5 => "notice",
            6 => "info",
            7 => "debug",
            _ => "unknown",
        }
    }

    /// Three letter uppercase tag used by the text serializer, e.g. `ERR`
    pub fn abbreviation(self) -> &'static str {
        match self.0 {
            0 => "EME",
            1 => "ALE",
            2 => "CRI",
            3 => "ERR",
            4 => "WAR",
            5 => "NOT",
            6 => "INF",
            7 => "DEB",
            _ => "UNK",
        }
    }

    /// Foreground color of the level tag, `None` for levels rendered only in bold
    pub fn color_code(self) -> Option<colored::Color> {
        use colored::Color::*;
        match self.0 {
            0 => Some(Red),
            1 => Some(Cyan),
            2 => Some(Magenta),
            3 => Some(Red),
            4 => Some(Yellow),
            5 => Some(Blue),
            6 => Some(Green),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .iter()
            .copied()
            .find(|level| level.to_str() == s)
            .ok_or(LoggerError::InvalidLogLevel)
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_str())
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
