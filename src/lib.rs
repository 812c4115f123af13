//! # Leveled Logger
//!
//! Structured, leveled logging with composable backends.
//!
//! ## Features
//!
//! - **Syslog Levels**: Eight severities from `EMERGENCY` to `DEBUG` with a per-logger threshold
//! - **Composable Backends**: Each backend binds a filter, a serializer and a writer
//! - **Call Site Context**: File, line, module, type and function of every log call
//! - **Structured Properties**: Key/value annotations rendered as JSON or colorized text
//! - **Thread Safe**: Loggers are shared handles; failing backends never affect others
//!
//! ## Example
//!
//! ```
//! use leveled_logger::prelude::*;
//!
//! let logger = Logger::new();
//! logger.add_backend(
//!     "stderr",
//!     Backend::new(FilterPassAll, SerializerText::new(), WriterStderr::new()),
//! );
//!
//! logger.info("service started");
//! logger
//!     .with_property("user", "alice")
//!     .with_property("attempt", 3)
//!     .warning("login failed");
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod serializers;
pub mod writers;

pub mod prelude {
    pub use crate::core::{
        Backend, CallContext, Entry, Filter, FilterPassAll, Level, Logger, LoggerBuilder,
        LoggerError, Properties, Result, Serializer, TimestampFormat, Value, Writer,
    };
    pub use crate::serializers::{
        CallContextMode, QuoteMode, SerializerJson, SerializerText, TimestampMode,
    };
    pub use crate::writers::{WriterFile, WriterStderr, WriterSyslog};
}

pub use crate::core::{
    Backend, CallContext, Entry, ErrorHandler, Filter, FilterPassAll, Level, Logger,
    LoggerBuilder, LoggerError, LoggerMetrics, Properties, Result, Serializer, TimestampFormat,
    Value, Writer, DEFAULT_THRESHOLD, ERROR_PROPERTY,
};
pub use global::{
    add_backend, alert, alertf, critical, criticalf, debug, debugf, default_logger, emergency,
    emergencyf, error, errorf, inc_depth, info, infof, log, logf, notice, noticef,
    pass_threshold, remove_all_backends, remove_backend, set_default, set_threshold, threshold,
    warning, warningf, with_error, with_properties, with_property, DEFAULT_BACKEND,
};
pub use serializers::{CallContextMode, QuoteMode, SerializerJson, SerializerText, TimestampMode};
pub use writers::{Facility, WriterFile, WriterStderr, WriterSyslog};
