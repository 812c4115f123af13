//! Process-wide default logger
//!
//! The default logger starts with one backend named `"default"` (pass-all
//! filter, text serializer, stderr writer) and the default threshold. It can
//! be replaced at any time with [`set_default`]; every function here works on
//! whichever logger is current when it is called.
//!
//! ```
//! leveled_logger::info("service started");
//! leveled_logger::with_property("port", 8080).notice("listening");
//! ```

use crate::core::{Backend, Entry, FilterPassAll, Level, Logger, Result, Value};
use crate::serializers::SerializerText;
use crate::writers::WriterStderr;
use arc_swap::ArcSwap;
use once_cell::sync::Lazy;
use std::fmt;

/// Name of the backend installed in the initial default logger
pub const DEFAULT_BACKEND: &str = "default";

static DEFAULT_LOGGER: Lazy<ArcSwap<Logger>> =
    Lazy::new(|| ArcSwap::from_pointee(new_default_logger()));

fn new_default_logger() -> Logger {
    let logger = Logger::new();
    logger.add_backend(
        DEFAULT_BACKEND,
        Backend::new(FilterPassAll, SerializerText::new(), WriterStderr::new()),
    );
    logger
}

/// Replace the process-wide default logger
pub fn set_default(logger: Logger) {
    DEFAULT_LOGGER.store(logger.into());
}

/// Handle to the current default logger
pub fn default_logger() -> Logger {
    Logger::clone(&DEFAULT_LOGGER.load())
}

pub fn set_threshold(level: Level) -> Result<()> {
    DEFAULT_LOGGER.load().set_threshold(level)
}

pub fn threshold() -> Level {
    DEFAULT_LOGGER.load().threshold()
}

pub fn pass_threshold(level: Level) -> bool {
    DEFAULT_LOGGER.load().pass_threshold(level)
}

pub fn add_backend(name: impl Into<String>, backend: Backend) {
    DEFAULT_LOGGER.load().add_backend(name, backend);
}

pub fn remove_backend(name: &str) -> Result<()> {
    DEFAULT_LOGGER.load().remove_backend(name)
}

pub fn remove_all_backends() {
    DEFAULT_LOGGER.load().remove_all_backends();
}

pub fn with_property<K, V>(key: K, value: V) -> Entry
where
    K: Into<String>,
    V: Into<Value>,
{
    DEFAULT_LOGGER.load().with_property(key, value)
}

pub fn with_properties<I, K, V>(properties: I) -> Entry
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    DEFAULT_LOGGER.load().with_properties(properties)
}

pub fn with_error<E>(err: &E) -> Entry
where
    E: std::error::Error + ?Sized,
{
    DEFAULT_LOGGER.load().with_error(err)
}

pub fn inc_depth(depth: usize) -> Entry {
    DEFAULT_LOGGER.load().inc_depth(depth)
}

pub fn log(level: Level, message: impl fmt::Display) {
    DEFAULT_LOGGER.load().emit(level, &message, 1);
}

pub fn logf(level: Level, args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.load().emit(level, &args, 1);
}

pub fn emergency(message: impl fmt::Display) {
    DEFAULT_LOGGER.load().emit(Level::EMERGENCY, &message, 1);
}

pub fn alert(message: impl fmt::Display) {
    DEFAULT_LOGGER.load().emit(Level::ALERT, &message, 1);
}

pub fn critical(message: impl fmt::Display) {
    DEFAULT_LOGGER.load().emit(Level::CRITICAL, &message, 1);
}

pub fn error(message: impl fmt::Display) {
    DEFAULT_LOGGER.load().emit(Level::ERROR, &message, 1);
}

pub fn warning(message: impl fmt::Display) {
    DEFAULT_LOGGER.load().emit(Level::WARNING, &message, 1);
}

pub fn notice(message: impl fmt::Display) {
    DEFAULT_LOGGER.load().emit(Level::NOTICE, &message, 1);
}

pub fn info(message: impl fmt::Display) {
    DEFAULT_LOGGER.load().emit(Level::INFO, &message, 1);
}

pub fn debug(message: impl fmt::Display) {
    DEFAULT_LOGGER.load().emit(Level::DEBUG, &message, 1);
}

pub fn emergencyf(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.load().emit(Level::EMERGENCY, &args, 1);
}

pub fn alertf(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.load().emit(Level::ALERT, &args, 1);
}

pub fn criticalf(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.load().emit(Level::CRITICAL, &args, 1);
}

pub fn errorf(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.load().emit(Level::ERROR, &args, 1);
}

pub fn warningf(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.load().emit(Level::WARNING, &args, 1);
}

pub fn noticef(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.load().emit(Level::NOTICE, &args, 1);
}

pub fn infof(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.load().emit(Level::INFO, &args, 1);
}

pub fn debugf(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.load().emit(Level::DEBUG, &args, 1);
}
