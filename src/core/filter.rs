//! Filter capability: decides whether a backend processes an entry

use super::{entry::Entry, error::Result};

/// Decides whether an [`Entry`] is handed to a backend's serializer and writer
///
/// `Ok(false)` skips the backend silently. An error is reported through the
/// logger's error handler and also skips the backend.
///
/// Any `Fn(&Entry) -> Result<bool>` closure is a filter:
///
/// ```
/// use leveled_logger::{Entry, Filter, Level, Result};
///
/// let only_errors =
///     |entry: &Entry| -> Result<bool> { Ok(entry.level.is_some_and(|l| l <= Level::ERROR)) };
/// # fn assert_filter<F: Filter>(_: &F) {}
/// # assert_filter(&only_errors);
/// ```
pub trait Filter: Send + Sync {
    fn verify(&self, entry: &Entry) -> Result<bool>;
}

impl<F> Filter for F
where
    F: Fn(&Entry) -> Result<bool> + Send + Sync,
{
    fn verify(&self, entry: &Entry) -> Result<bool> {
        self(entry)
    }
}

/// Filter accepting every entry
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterPassAll;

impl FilterPassAll {
    pub fn new() -> Self {
        Self
    }
}

impl Filter for FilterPassAll {
    #[inline]
    fn verify(&self, _entry: &Entry) -> Result<bool> {
        Ok(true)
    }
}
