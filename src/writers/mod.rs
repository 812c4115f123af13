//! Writer implementations

pub mod file;
pub mod stderr;
pub mod syslog;

pub use file::WriterFile;
pub use stderr::WriterStderr;
pub use self::syslog::{Facility, WriterSyslog};

// Re-export trait for convenience
pub use crate::core::Writer;
