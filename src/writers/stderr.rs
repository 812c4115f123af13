//! Standard error writer

use crate::core::{Level, Result, Writer};
use parking_lot::Mutex;
use std::io::{self, Write};

/// Writes each serialized entry as one line on the process's standard error
#[derive(Debug)]
pub struct WriterStderr {
    stream: Mutex<io::Stderr>,
}

impl WriterStderr {
    pub fn new() -> Self {
        Self {
            stream: Mutex::new(io::stderr()),
        }
    }
}

impl Default for WriterStderr {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer for WriterStderr {
    fn write(&self, _level: Level, bytes: &[u8]) -> Result<usize> {
        let mut line = Vec::with_capacity(bytes.len() + 1);
        line.extend_from_slice(bytes);
        line.push(b'\n');

        let mut stream = self.stream.lock();
        stream.write_all(&line)?;
        Ok(line.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_write_counts_newline() {
        let writer = WriterStderr::new();
        assert_eq!(writer.write(Level::INFO, b"stderr writer test").unwrap(), 19);
        assert_eq!(writer.write(Level::DEBUG, b"").unwrap(), 1);
    }

    #[test]
    fn test_concurrent_writes() {
        let writer = Arc::new(WriterStderr::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let writer = Arc::clone(&writer);
                thread::spawn(move || {
                    for _ in 0..10 {
                        let line = format!("thread {}", i);
                        assert_eq!(
                            writer.write(Level::INFO, line.as_bytes()).unwrap(),
                            line.len() + 1
                        );
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
