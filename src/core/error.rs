//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Level outside of the `[EMERGENCY, DEBUG]` range, or an unknown level name
    #[error("invalid log level")]
    InvalidLogLevel,

    /// Removal of a backend that is not registered
    #[error("invalid backend name: '{name}'")]
    InvalidBackendName { name: String },

    /// Entry that has not been processed (no level or timestamp stamped on it)
    #[error("invalid entry")]
    InvalidEntry,

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Syslog client error
    #[error("syslog error: {message}")]
    Syslog { message: String },

    /// Error reported by a user supplied filter
    #[error("filter error: {message}")]
    Filter { message: String },

    /// Backend panicked while processing an entry
    #[error("backend panicked: {message}")]
    BackendPanicked { message: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid backend name error
    pub fn invalid_backend(name: impl Into<String>) -> Self {
        LoggerError::InvalidBackendName { name: name.into() }
    }

    /// Create a syslog error
    pub fn syslog(message: impl Into<String>) -> Self {
        LoggerError::Syslog {
            message: message.into(),
        }
    }

    /// Create a filter error
    pub fn filter(message: impl Into<String>) -> Self {
        LoggerError::Filter {
            message: message.into(),
        }
    }

    /// Create a backend panic error
    pub fn backend_panicked(message: impl Into<String>) -> Self {
        LoggerError::BackendPanicked {
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
