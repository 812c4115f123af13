//! File writer

use crate::core::{Level, LoggerError, Result, Writer};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends each serialized entry as one line to a file
///
/// The file is opened in append mode and created with `mode` permissions
/// (Unix only) if missing. Concurrent writes are serialized.
#[derive(Debug)]
pub struct WriterFile {
    path: PathBuf,
    file: Mutex<File>,
}

impl WriterFile {
    /// Open `path` for appending
    ///
    /// ```no_run
    /// use leveled_logger::WriterFile;
    ///
    /// let writer = WriterFile::open("/var/log/app.log", 0o644).unwrap();
    /// ```
    pub fn open(path: impl AsRef<Path>, mode: u32) -> Result<Self> {
        let path = path.as_ref();
        let mut options = OpenOptions::new();
        options.create(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(mode);
        }
        #[cfg(not(unix))]
        let _ = mode;

        let file = options.open(path).map_err(|source| {
            LoggerError::io_operation("opening log file", path.display().to_string(), source)
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            file: Mutex::new(file),
        })
    }

    /// Like [`WriterFile::open`], for startup code that cannot go on without its log file
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>, mode: u32) -> Self {
        match Self::open(path, mode) {
            Ok(writer) => writer,
            Err(err) => panic!("cannot create file writer: {}", err),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Writer for WriterFile {
    fn write(&self, _level: Level, bytes: &[u8]) -> Result<usize> {
        let mut line = Vec::with_capacity(bytes.len() + 1);
        line.extend_from_slice(bytes);
        line.push(b'\n');

        let mut file = self.file.lock();
        file.write_all(&line)?;
        Ok(line.len())
    }
}
