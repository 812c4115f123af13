//! Backend: one filter, serializer and writer bound into a processing unit

use super::{
    entry::Entry,
    error::{LoggerError, Result},
    filter::Filter,
    logger::{Logger, Shared},
    serializer::Serializer,
    writer::Writer,
};
use std::fmt;
use std::sync::{Arc, Weak};

/// Filter, serializer and writer registered under a name in a [`Logger`]
///
/// The components are reference counted, so a backend is cheap to clone and
/// the same writer can be shared by several backends.
///
/// ```
/// use leveled_logger::{Backend, FilterPassAll, Logger, SerializerJson, WriterStderr};
///
/// let logger = Logger::new();
/// logger.add_backend(
///     "json",
///     Backend::new(FilterPassAll, SerializerJson::new(), WriterStderr::new()),
/// );
/// ```
#[derive(Clone)]
pub struct Backend {
    pub filter: Arc<dyn Filter>,
    pub serializer: Arc<dyn Serializer>,
    pub writer: Arc<dyn Writer>,
    logger: Weak<Shared>,
}

impl Backend {
    pub fn new<F, S, W>(filter: F, serializer: S, writer: W) -> Self
    where
        F: Filter + 'static,
        S: Serializer + 'static,
        W: Writer + 'static,
    {
        Self::from_shared(Arc::new(filter), Arc::new(serializer), Arc::new(writer))
    }

    /// Build a backend from components already shared elsewhere
    pub fn from_shared(
        filter: Arc<dyn Filter>,
        serializer: Arc<dyn Serializer>,
        writer: Arc<dyn Writer>,
    ) -> Self {
        Self {
            filter,
            serializer,
            writer,
            logger: Weak::new(),
        }
    }

    /// Logger the backend was last added to, if it is still alive
    pub fn logger(&self) -> Option<Logger> {
        self.logger.upgrade().map(Logger::from_shared)
    }

    pub(crate) fn attach(&mut self, shared: &Arc<Shared>) {
        self.logger = Arc::downgrade(shared);
    }

    /// Run the entry through filter, serializer and writer
    ///
    /// Stops at the first failing stage and returns its error. A rejected
    /// entry is not an error.
    pub fn process(&self, entry: &Entry) -> Result<()> {
        if !self.filter.verify(entry)? {
            return Ok(());
        }
        let bytes = self.serializer.serialize(entry)?;
        let level = entry.level.ok_or(LoggerError::InvalidEntry)?;
        self.writer.write(level, &bytes)?;
        Ok(())
    }
}

impl fmt::Debug for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Backend")
            .field("attached", &(self.logger.strong_count() > 0))
            .finish_non_exhaustive()
    }
}
