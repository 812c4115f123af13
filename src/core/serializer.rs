//! Serializer capability: renders an entry to bytes

use super::{entry::Entry, error::Result};

/// Renders a processed [`Entry`] into the bytes handed to a [`Writer`](super::Writer)
///
/// Implementations are shared between threads and must not mutate the entry.
pub trait Serializer: Send + Sync {
    fn serialize(&self, entry: &Entry) -> Result<Vec<u8>>;
}
