//! A single log occurrence and its builder-style API

use super::{
    call_context::CallContext,
    level::Level,
    logger::Logger,
    properties::{Properties, Value, ERROR_PROPERTY},
};
use chrono::{DateTime, Utc};
use std::fmt;

/// One log event
///
/// Entries are obtained from a [`Logger`] through `with_property`,
/// `with_properties`, `with_error` or `inc_depth`, and logged with one of the
/// leveled methods. `level`, `message`, `timestamp` and `call_context` are
/// filled in when the entry is processed; an entry suppressed by the logger
/// threshold keeps them unset.
///
/// ```
/// use leveled_logger::Logger;
///
/// let logger = Logger::new();
/// logger
///     .with_property("user", "alice")
///     .with_property("attempt", 3)
///     .warning("login failed");
/// ```
#[derive(Debug)]
pub struct Entry {
    logger: Logger,
    depth: usize,
    pub level: Option<Level>,
    pub message: String,
    pub properties: Properties,
    pub timestamp: Option<DateTime<Utc>>,
    pub call_context: Option<CallContext>,
}

impl Entry {
    /// Create an empty entry bound to `logger`
    pub fn new(logger: &Logger) -> Self {
        Self {
            logger: logger.clone(),
            depth: 0,
            level: None,
            message: String::new(),
            properties: Properties::new(),
            timestamp: None,
            call_context: None,
        }
    }

    /// Logger this entry is dispatched through
    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Extra frames skipped when the call context is captured
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_property<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.properties.insert(key, value);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_properties<I, K, V>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.properties.extend(properties);
        self
    }

    /// Store the error's message under [`ERROR_PROPERTY`]
    #[must_use = "builder methods return a new value"]
    pub fn with_error<E>(self, err: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        self.with_property(ERROR_PROPERTY, err.to_string())
    }

    /// Skip `depth` more frames when capturing the call context
    ///
    /// Logging helpers call this once per wrapper layer so the recorded call
    /// site is the helper's caller.
    ///
    /// ```
    /// use leveled_logger::Logger;
    ///
    /// fn audit(logger: &Logger, what: &str) {
    ///     // attributed to the caller of `audit`
    ///     logger.inc_depth(1).notice(what);
    /// }
    /// # audit(&Logger::new(), "started");
    /// ```
    #[must_use = "builder methods return a new value"]
    pub fn inc_depth(mut self, depth: usize) -> Self {
        self.depth += depth;
        self
    }

    pub fn log(&mut self, level: Level, message: impl fmt::Display) {
        self.process(level, &message, 1);
    }

    pub fn logf(&mut self, level: Level, args: fmt::Arguments<'_>) {
        self.process(level, &args, 1);
    }

    pub fn emergency(&mut self, message: impl fmt::Display) {
        self.process(Level::EMERGENCY, &message, 1);
    }

    pub fn alert(&mut self, message: impl fmt::Display) {
        self.process(Level::ALERT, &message, 1);
    }

    pub fn critical(&mut self, message: impl fmt::Display) {
        self.process(Level::CRITICAL, &message, 1);
    }

    pub fn error(&mut self, message: impl fmt::Display) {
        self.process(Level::ERROR, &message, 1);
    }

    pub fn warning(&mut self, message: impl fmt::Display) {
        self.process(Level::WARNING, &message, 1);
    }

    pub fn notice(&mut self, message: impl fmt::Display) {
        self.process(Level::NOTICE, &message, 1);
    }

    pub fn info(&mut self, message: impl fmt::Display) {
        self.process(Level::INFO, &message, 1);
    }

    pub fn debug(&mut self, message: impl fmt::Display) {
        self.process(Level::DEBUG, &message, 1);
    }

    pub fn emergencyf(&mut self, args: fmt::Arguments<'_>) {
        self.process(Level::EMERGENCY, &args, 1);
    }

    pub fn alertf(&mut self, args: fmt::Arguments<'_>) {
        self.process(Level::ALERT, &args, 1);
    }

    pub fn criticalf(&mut self, args: fmt::Arguments<'_>) {
        self.process(Level::CRITICAL, &args, 1);
    }

    pub fn errorf(&mut self, args: fmt::Arguments<'_>) {
        self.process(Level::ERROR, &args, 1);
    }

    pub fn warningf(&mut self, args: fmt::Arguments<'_>) {
        self.process(Level::WARNING, &args, 1);
    }

    pub fn noticef(&mut self, args: fmt::Arguments<'_>) {
        self.process(Level::NOTICE, &args, 1);
    }

    pub fn infof(&mut self, args: fmt::Arguments<'_>) {
        self.process(Level::INFO, &args, 1);
    }

    pub fn debugf(&mut self, args: fmt::Arguments<'_>) {
        self.process(Level::DEBUG, &args, 1);
    }

    /// Complete the entry and hand it to the logger's backends
    ///
    /// `frames` is the number of crate functions between this one and the
    /// user's call site.
    #[inline(never)]
    pub(crate) fn process(&mut self, level: Level, message: &dyn fmt::Display, frames: usize) {
        if !self.logger.pass_threshold(level) {
            self.logger.metrics().record_suppressed();
            return;
        }

        self.level = Some(level);
        self.message = message.to_string();
        self.timestamp = Some(Utc::now());
        self.call_context = CallContext::capture(self.depth + frames + 1);

        self.logger.dispatch(self);
    }
}
