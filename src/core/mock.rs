//! Test doubles for the filter, serializer and writer capabilities

use super::{
    backend::Backend, entry::Entry, error::LoggerError, error::Result, filter::Filter,
    filter::FilterPassAll, level::Level, serializer::Serializer, writer::Writer,
};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Filter returning a fixed verdict and counting calls
#[derive(Clone)]
pub(crate) struct CountingFilter {
    verdict: Option<bool>,
    calls: Arc<AtomicUsize>,
}

impl CountingFilter {
    pub(crate) fn accepting(accept: bool) -> Self {
        Self {
            verdict: Some(accept),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            verdict: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Filter for CountingFilter {
    fn verify(&self, _entry: &Entry) -> Result<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.verdict
            .ok_or_else(|| LoggerError::filter("filter failure"))
    }
}

/// Serializer rendering `ABR message`, optionally failing, counting calls
#[derive(Clone, Default)]
pub(crate) struct LineSerializer {
    fail: bool,
    calls: Arc<AtomicUsize>,
}

impl LineSerializer {
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            calls: Arc::default(),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Serializer for LineSerializer {
    fn serialize(&self, entry: &Entry) -> Result<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(LoggerError::other("serializer failure"));
        }
        let level = entry.level.ok_or(LoggerError::InvalidEntry)?;
        Ok(format!("{} {}", level.abbreviation(), entry.message).into_bytes())
    }
}

/// Writer keeping every written buffer in memory
#[derive(Clone, Default)]
pub(crate) struct RecordingWriter {
    records: Arc<Mutex<Vec<(Level, Vec<u8>)>>>,
}

impl RecordingWriter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn count(&self) -> usize {
        self.records.lock().len()
    }

    pub(crate) fn lines(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .map(|(_, bytes)| String::from_utf8_lossy(bytes).into_owned())
            .collect()
    }
}

impl Writer for RecordingWriter {
    fn write(&self, level: Level, bytes: &[u8]) -> Result<usize> {
        self.records.lock().push((level, bytes.to_vec()));
        Ok(bytes.len())
    }
}

/// Writer that always fails or always panics
#[derive(Clone, Copy)]
pub(crate) enum BrokenWriter {
    Failing,
    Panicking,
}

impl Writer for BrokenWriter {
    fn write(&self, _level: Level, _bytes: &[u8]) -> Result<usize> {
        match self {
            BrokenWriter::Failing => Err(LoggerError::other("writer failure")),
            BrokenWriter::Panicking => panic!("writer exploded"),
        }
    }
}

pub(crate) struct TestBackend;

impl TestBackend {
    /// Pass-all backend writing `ABR message` lines into `writer`
    pub(crate) fn recording(writer: &RecordingWriter) -> Backend {
        Backend::new(FilterPassAll, LineSerializer::default(), writer.clone())
    }

    pub(crate) fn broken(writer: BrokenWriter) -> Backend {
        Backend::new(FilterPassAll, LineSerializer::default(), writer)
    }
}
