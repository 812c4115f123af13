//! Serializer implementations

pub mod json;
pub mod text;

pub use json::SerializerJson;
pub use text::{CallContextMode, QuoteMode, SerializerText, TimestampMode};

// Re-export trait for convenience
pub use crate::core::Serializer;
