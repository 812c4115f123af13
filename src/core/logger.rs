//! Main logger implementation

use super::{
    backend::Backend,
    entry::Entry,
    error::{LoggerError, Result},
    level::Level,
    metrics::LoggerMetrics,
    properties::Value,
};
use parking_lot::Mutex;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Threshold of a newly created logger
pub const DEFAULT_THRESHOLD: Level = Level::INFO;

/// Receives per-backend processing failures together with the backend name
pub type ErrorHandler = Arc<dyn Fn(&str, &LoggerError) + Send + Sync>;

type BackendMap = HashMap<String, Arc<Backend>>;

struct State {
    threshold: Level,
    /// Copy-on-write so dispatch can iterate a snapshot without holding the lock
    backends: Arc<BackendMap>,
    error_handler: ErrorHandler,
}

pub(crate) struct Shared {
    state: Mutex<State>,
    metrics: LoggerMetrics,
}

/// Thread-safe entry point turning log calls into processed entries
///
/// A `Logger` is a cheap handle; clones share threshold, backends and metrics.
///
/// ```
/// use leveled_logger::{Backend, FilterPassAll, Level, Logger, SerializerText, WriterStderr};
///
/// let logger = Logger::new();
/// logger.set_threshold(Level::DEBUG).unwrap();
/// logger.add_backend(
///     "stderr",
///     Backend::new(FilterPassAll, SerializerText::new(), WriterStderr::new()),
/// );
///
/// logger.info("service started");
/// logger.with_property("port", 8080).debugf(format_args!("listening on {}", 8080));
/// ```
#[derive(Clone)]
pub struct Logger {
    shared: Arc<Shared>,
}

fn default_error_handler() -> ErrorHandler {
    Arc::new(|backend: &str, err: &LoggerError| {
        eprintln!(
            "[LOGGER ERROR] Error <{}> printing log message to <{}> backend.",
            err, backend
        );
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

impl Logger {
    /// Create a logger with the default threshold and no backends
    #[must_use]
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State {
                    threshold: DEFAULT_THRESHOLD,
                    backends: Arc::new(HashMap::new()),
                    error_handler: default_error_handler(),
                }),
                metrics: LoggerMetrics::new(),
            }),
        }
    }

    /// Create a builder for configuring a logger
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub(crate) fn from_shared(shared: Arc<Shared>) -> Self {
        Self { shared }
    }

    /// True if both handles refer to the same logger
    pub fn ptr_eq(&self, other: &Logger) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }

    /// Set the least severe level that is still processed
    ///
    /// Fails with [`LoggerError::InvalidLogLevel`] for levels outside the valid range.
    pub fn set_threshold(&self, level: Level) -> Result<()> {
        if !level.is_valid() {
            return Err(LoggerError::InvalidLogLevel);
        }
        self.shared.state.lock().threshold = level;
        Ok(())
    }

    pub fn threshold(&self) -> Level {
        self.shared.state.lock().threshold
    }

    /// True if entries at `level` are at least as severe as the threshold
    pub fn pass_threshold(&self, level: Level) -> bool {
        level <= self.threshold()
    }

    /// Register `backend` under `name`, replacing any backend with that name
    pub fn add_backend(&self, name: impl Into<String>, mut backend: Backend) {
        backend.attach(&self.shared);
        let mut state = self.shared.state.lock();
        Arc::make_mut(&mut state.backends).insert(name.into(), Arc::new(backend));
    }

    /// Fails with [`LoggerError::InvalidBackendName`] if no backend has that name
    pub fn remove_backend(&self, name: &str) -> Result<()> {
        let mut state = self.shared.state.lock();
        if !state.backends.contains_key(name) {
            return Err(LoggerError::invalid_backend(name));
        }
        Arc::make_mut(&mut state.backends).remove(name);
        Ok(())
    }

    pub fn remove_all_backends(&self) {
        self.shared.state.lock().backends = Arc::new(HashMap::new());
    }

    pub fn backend(&self, name: &str) -> Option<Backend> {
        self.shared
            .state
            .lock()
            .backends
            .get(name)
            .map(|backend| Backend::clone(backend))
    }

    /// Names of the registered backends in ascending order
    pub fn backend_names(&self) -> Vec<String> {
        let backends = Arc::clone(&self.shared.state.lock().backends);
        let mut names: Vec<String> = backends.keys().cloned().collect();
        names.sort();
        names
    }

    /// Replace the handler receiving backend failures
    ///
    /// The default handler prints them to stderr.
    pub fn set_error_handler<F>(&self, handler: F)
    where
        F: Fn(&str, &LoggerError) + Send + Sync + 'static,
    {
        self.shared.state.lock().error_handler = Arc::new(handler);
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.shared.metrics
    }

    fn new_entry(&self) -> Entry {
        Entry::new(self)
    }

    pub fn with_property<K, V>(&self, key: K, value: V) -> Entry
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.new_entry().with_property(key, value)
    }

    pub fn with_properties<I, K, V>(&self, properties: I) -> Entry
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.new_entry().with_properties(properties)
    }

    pub fn with_error<E>(&self, err: &E) -> Entry
    where
        E: std::error::Error + ?Sized,
    {
        self.new_entry().with_error(err)
    }

    pub fn inc_depth(&self, depth: usize) -> Entry {
        self.new_entry().inc_depth(depth)
    }

    pub fn log(&self, level: Level, message: impl fmt::Display) {
        self.emit(level, &message, 1);
    }

    pub fn logf(&self, level: Level, args: fmt::Arguments<'_>) {
        self.emit(level, &args, 1);
    }

    pub fn emergency(&self, message: impl fmt::Display) {
        self.emit(Level::EMERGENCY, &message, 1);
    }

    pub fn alert(&self, message: impl fmt::Display) {
        self.emit(Level::ALERT, &message, 1);
    }

    pub fn critical(&self, message: impl fmt::Display) {
        self.emit(Level::CRITICAL, &message, 1);
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.emit(Level::ERROR, &message, 1);
    }

    pub fn warning(&self, message: impl fmt::Display) {
        self.emit(Level::WARNING, &message, 1);
    }

    pub fn notice(&self, message: impl fmt::Display) {
        self.emit(Level::NOTICE, &message, 1);
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.emit(Level::INFO, &message, 1);
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.emit(Level::DEBUG, &message, 1);
    }

    pub fn emergencyf(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::EMERGENCY, &args, 1);
    }

    pub fn alertf(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::ALERT, &args, 1);
    }

    pub fn criticalf(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::CRITICAL, &args, 1);
    }

    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::ERROR, &args, 1);
    }

    pub fn warningf(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::WARNING, &args, 1);
    }

    pub fn noticef(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::NOTICE, &args, 1);
    }

    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::INFO, &args, 1);
    }

    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::DEBUG, &args, 1);
    }

    /// Log through a fresh entry; `frames` counts the crate functions above this one
    #[inline(never)]
    pub(crate) fn emit(&self, level: Level, message: &dyn fmt::Display, frames: usize) {
        self.new_entry().process(level, message, frames + 1);
    }

    /// Hand a processed entry to every backend
    ///
    /// Backends run on a snapshot of the backend set taken under the lock, so
    /// a slow writer never blocks configuration changes or other threads.
    /// **Per-Backend Panic Isolation**: each backend runs inside
    /// `catch_unwind`; errors and panics go to the error handler and the
    /// remaining backends still run.
    pub(crate) fn dispatch(&self, entry: &Entry) {
        let (backends, error_handler) = {
            let state = self.shared.state.lock();
            (Arc::clone(&state.backends), Arc::clone(&state.error_handler))
        };
        self.shared.metrics.record_dispatched();

        for (name, backend) in backends.iter() {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| backend.process(entry)));
            let err = match outcome {
                Ok(Ok(())) => continue,
                Ok(Err(err)) => err,
                Err(payload) => LoggerError::backend_panicked(panic_message(&*payload)),
            };
            self.shared.metrics.record_backend_failure();
            error_handler(name, &err);
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold())
            .field("backends", &self.backend_names())
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use leveled_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .threshold(Level::DEBUG)
///     .backend("stderr", Backend::new(FilterPassAll, SerializerText::new(), WriterStderr::new()))
///     .error_handler(|backend, err| eprintln!("{}: {}", backend, err))
///     .build()
///     .unwrap();
/// assert_eq!(logger.backend_names(), ["stderr"]);
/// ```
pub struct LoggerBuilder {
    threshold: Level,
    backends: Vec<(String, Backend)>,
    error_handler: Option<ErrorHandler>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            backends: Vec::new(),
            error_handler: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn threshold(mut self, level: Level) -> Self {
        self.threshold = level;
        self
    }

    /// Add a named backend; later backends replace earlier ones with the same name
    #[must_use = "builder methods return a new value"]
    pub fn backend(mut self, name: impl Into<String>, backend: Backend) -> Self {
        self.backends.push((name.into(), backend));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn error_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str, &LoggerError) + Send + Sync + 'static,
    {
        self.error_handler = Some(Arc::new(handler));
        self
    }

    /// Build the logger, rejecting an invalid threshold
    pub fn build(self) -> Result<Logger> {
        let logger = Logger::new();
        logger.set_threshold(self.threshold)?;
        if let Some(handler) = self.error_handler {
            logger.shared.state.lock().error_handler = handler;
        }
        for (name, backend) in self.backends {
            logger.add_backend(name, backend);
        }
        Ok(logger)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
