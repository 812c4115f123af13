//! Core logger types and traits

pub mod backend;
pub mod call_context;
pub mod entry;
pub mod error;
pub mod filter;
pub mod level;
pub mod logger;
pub mod metrics;
pub mod properties;
pub mod serializer;
pub mod timestamp;
pub mod writer;

#[cfg(test)]
pub(crate) mod mock;

pub use backend::Backend;
pub use call_context::CallContext;
pub use entry::Entry;
pub use error::{LoggerError, Result};
pub use filter::{Filter, FilterPassAll};
pub use level::Level;
pub use logger::{ErrorHandler, Logger, LoggerBuilder, DEFAULT_THRESHOLD};
pub use metrics::LoggerMetrics;
pub use properties::{Properties, Value, ERROR_PROPERTY};
pub use serializer::Serializer;
pub use timestamp::TimestampFormat;
pub use writer::Writer;
