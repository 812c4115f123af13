//! Human oriented single-line text serializer
//!
//! Output layout, each segment optional:
//!
//! ```text
//! [660.000000] [ERR] [main.rs:42] message {age:37;name:Alice;}
//! ```

use crate::core::{CallContext, Entry, Level, LoggerError, Properties, Result, Serializer, TimestampFormat};
use chrono::{DateTime, Utc};
use colored::Color;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};
use std::io::Write;
use std::str::FromStr;

const BOLD: &str = "\x1b[1m";
const INVERT: &str = "\x1b[7m";
const OFF: &str = "\x1b[0m";

/// How the entry timestamp is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimestampMode {
    /// No timestamp segment
    None,
    /// Seconds elapsed since the serializer was created or reset
    #[default]
    Diff,
    /// Wall clock time in UTC, formatted with `time_format`
    Full,
}

/// Which values are wrapped in quotes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuoteMode {
    None,
    /// Values with characters outside `[a-zA-Z0-9-._/@^+]`
    Special,
    /// Like `Special`, plus empty values
    #[default]
    SpecialAndEmpty,
    All,
}

/// Layout of the call context segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CallContextMode {
    None,
    /// `file:line`
    #[default]
    Compact,
    /// `file:Type.function:line`
    Function,
    /// `path/file:line`
    File,
    /// `package:Type.function:line`
    Package,
}

impl FromStr for TimestampMode {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(TimestampMode::None),
            "diff" => Ok(TimestampMode::Diff),
            "full" => Ok(TimestampMode::Full),
            _ => Err(LoggerError::other(format!("invalid timestamp mode '{}'", s))),
        }
    }
}

impl FromStr for QuoteMode {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(QuoteMode::None),
            "special" => Ok(QuoteMode::Special),
            "special-and-empty" => Ok(QuoteMode::SpecialAndEmpty),
            "all" => Ok(QuoteMode::All),
            _ => Err(LoggerError::other(format!("invalid quote mode '{}'", s))),
        }
    }
}

impl FromStr for CallContextMode {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(CallContextMode::None),
            "compact" => Ok(CallContextMode::Compact),
            "function" => Ok(CallContextMode::Function),
            "file" => Ok(CallContextMode::File),
            "package" => Ok(CallContextMode::Package),
            _ => Err(LoggerError::other(format!("invalid call context mode '{}'", s))),
        }
    }
}

fn ansi(color: Color) -> String {
    format!("\x1b[{}m", color.to_fg_str())
}

/// Escape sequence styling the level tag
fn level_style(level: Level) -> String {
    if !level.is_valid() {
        return String::new();
    }
    let mut style = level.color_code().map(ansi).unwrap_or_default();
    style.push_str(BOLD);
    if level <= Level::CRITICAL {
        style.push_str(INVERT);
    }
    style
}

fn is_plain(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '-' | '.' | '_' | '/' | '@' | '^' | '+')
}

/// Escape sequences of the colored tokens; all empty when colors are off
struct Palette {
    propkey: String,
    path: String,
    function: String,
    line: String,
    off: &'static str,
}

impl Palette {
    fn new(use_colors: bool) -> Self {
        if !use_colors {
            return Self {
                propkey: String::new(),
                path: String::new(),
                function: String::new(),
                line: String::new(),
                off: "",
            };
        }
        Self {
            propkey: ansi(Color::Cyan),
            path: ansi(Color::Blue) + BOLD,
            function: ansi(Color::Green),
            line: ansi(Color::Yellow),
            off: OFF,
        }
    }
}

/// Value printed either verbatim or quoted with escapes
struct Quoted<'a> {
    value: &'a str,
    quote: bool,
}

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.quote {
            return f.write_str(self.value);
        }
        f.write_char('"')?;
        for ch in self.value.chars() {
            match ch {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\x07' => f.write_str("\\a")?,
                '\x08' => f.write_str("\\b")?,
                '\x0c' => f.write_str("\\f")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                '\x0b' => f.write_str("\\v")?,
                c if c.is_ascii_control() => write!(f, "\\x{:02x}", c as u32)?,
                c if c.is_control() => write!(f, "\\u{:04x}", c as u32)?,
                c => f.write_char(c)?,
            }
        }
        f.write_char('"')
    }
}

/// Renders entries as one human readable line
///
/// A serializer created with [`Default`] has colors off and starts its diff
/// clock on first use; otherwise it behaves like one from [`SerializerText::new`].
///
/// ```
/// use leveled_logger::{CallContextMode, QuoteMode, SerializerText, TimestampMode};
///
/// let mut serializer = SerializerText::new();
/// serializer.timestamp_mode = TimestampMode::Full;
/// serializer.quote_mode = QuoteMode::All;
/// serializer.call_context_mode = CallContextMode::Package;
/// ```
#[derive(Debug, Clone, Default)]
pub struct SerializerText {
    /// Wall clock format, used only with [`TimestampMode::Full`]
    pub time_format: TimestampFormat,
    pub timestamp_mode: TimestampMode,
    pub quote_mode: QuoteMode,
    pub call_context_mode: CallContextMode,
    pub use_colors: bool,
    base_time: OnceCell<DateTime<Utc>>,
}

impl SerializerText {
    /// Serializer with default modes, colors on and the diff clock started now
    pub fn new() -> Self {
        Self {
            use_colors: true,
            base_time: OnceCell::with_value(Utc::now()),
            ..Self::default()
        }
    }

    /// Measure diff timestamps from `base` instead
    #[must_use]
    pub fn with_base_time(mut self, base: DateTime<Utc>) -> Self {
        self.base_time = OnceCell::with_value(base);
        self
    }

    /// Restart the diff clock at the current time
    pub fn reset_base_time(&mut self) {
        self.base_time = OnceCell::with_value(Utc::now());
    }

    /// Time diff timestamps are measured from
    pub fn base_time(&self) -> DateTime<Utc> {
        *self.base_time.get_or_init(Utc::now)
    }

    fn needs_quotes(&self, value: &str) -> bool {
        match self.quote_mode {
            QuoteMode::None => false,
            QuoteMode::All => true,
            QuoteMode::SpecialAndEmpty if value.is_empty() => true,
            QuoteMode::Special | QuoteMode::SpecialAndEmpty => !value.chars().all(is_plain),
        }
    }

    fn quoted<'a>(&self, value: &'a str) -> Quoted<'a> {
        Quoted {
            value,
            quote: self.needs_quotes(value),
        }
    }

    fn write_timestamp<W: Write>(&self, out: &mut W, entry: &Entry) -> Result<()> {
        if self.timestamp_mode == TimestampMode::None {
            return Ok(());
        }
        let timestamp = entry.timestamp.ok_or(LoggerError::InvalidEntry)?;
        match self.timestamp_mode {
            TimestampMode::Diff => {
                let elapsed = timestamp.signed_duration_since(self.base_time());
                let seconds = match elapsed.num_nanoseconds() {
                    Some(nanos) => nanos as f64 / 1e9,
                    None => elapsed.num_milliseconds() as f64 / 1e3,
                };
                write!(out, "[{:.6}] ", seconds)?;
            }
            TimestampMode::Full => {
                write!(out, "[{}] ", self.time_format.format(&timestamp)?)?;
            }
            TimestampMode::None => {}
        }
        Ok(())
    }

    fn write_level<W: Write>(&self, out: &mut W, level: Level) -> Result<()> {
        if self.use_colors {
            write!(out, "[{}{}{}] ", level_style(level), level.abbreviation(), OFF)?;
        } else {
            write!(out, "[{}] ", level.abbreviation())?;
        }
        Ok(())
    }

    fn write_call_context<W: Write>(
        &self,
        out: &mut W,
        ctx: Option<&CallContext>,
        palette: &Palette,
    ) -> Result<()> {
        let Some(ctx) = ctx else {
            return Ok(());
        };
        let (head, with_function) = match self.call_context_mode {
            CallContextMode::None => return Ok(()),
            CallContextMode::Compact => (ctx.file.clone(), false),
            CallContextMode::Function => (ctx.file.clone(), true),
            CallContextMode::File => (format!("{}{}", ctx.path, ctx.file), false),
            CallContextMode::Package => (ctx.package.clone(), true),
        };

        write!(out, "[{}{}", palette.path, head)?;
        if with_function {
            write!(out, "{}:{}", palette.off, palette.function)?;
            match &ctx.type_name {
                Some(ty) => write!(out, "{}.{}", ty, ctx.function)?,
                None => write!(out, "{}", ctx.function)?,
            }
        }
        write!(out, "{}:{}{}{}] ", palette.off, palette.line, ctx.line, palette.off)?;
        Ok(())
    }

    fn write_message<W: Write>(&self, out: &mut W, message: &str) -> Result<()> {
        write!(out, "{} ", self.quoted(message))?;
        Ok(())
    }

    fn write_properties<W: Write>(
        &self,
        out: &mut W,
        properties: &Properties,
        palette: &Palette,
    ) -> Result<()> {
        if properties.is_empty() {
            return Ok(());
        }
        out.write_all(b"{")?;
        for (key, value) in properties {
            let value = value.to_string();
            write!(
                out,
                "{}{}{}:{};",
                palette.propkey,
                self.quoted(key),
                palette.off,
                self.quoted(&value)
            )?;
        }
        out.write_all(b"}")?;
        Ok(())
    }

    /// Write the line for `entry` into `out`, stopping at the first failed write
    pub fn serialize_into<W: Write>(&self, entry: &Entry, out: &mut W) -> Result<()> {
        let level = entry.level.ok_or(LoggerError::InvalidEntry)?;
        let palette = Palette::new(self.use_colors);

        self.write_timestamp(out, entry)?;
        self.write_level(out, level)?;
        self.write_call_context(out, entry.call_context.as_ref(), &palette)?;
        self.write_message(out, &entry.message)?;
        self.write_properties(out, &entry.properties, &palette)
    }
}

impl Serializer for SerializerText {
    fn serialize(&self, entry: &Entry) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(128);
        self.serialize_into(entry, &mut buf)?;
        Ok(buf)
    }
}
