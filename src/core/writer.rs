//! Writer capability: delivers serialized bytes to a destination

use super::{error::Result, level::Level};

/// Byte sink aware of the entry level, since some destinations route by severity
///
/// Returns the number of bytes written. Writers are shared between threads and
/// serialize access to their destination themselves.
pub trait Writer: Send + Sync {
    fn write(&self, level: Level, bytes: &[u8]) -> Result<usize>;
}
