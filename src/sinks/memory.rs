//! In-memory capture sink

use super::shared::SharedSink;
use std::io::{self, Write};

/// A sink that captures everything written to it.
///
/// Clones share the same buffer, so the host hands one clone to a logger
/// and reads captured output through another.
///
/// # Example
///
/// ```
/// use templog::{Level, Logger, MemorySink};
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder().sink(sink.clone()).build();
/// logger.warn("hello");
/// assert!(sink.contents_string().starts_with("[wrn] hello"));
/// ```
#[derive(Clone, Default)]
pub struct MemorySink {
    buf: SharedSink<Vec<u8>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            buf: SharedSink::new(Vec::new()),
        }
    }

    /// A copy of the captured bytes.
    pub fn contents(&self) -> Vec<u8> {
        self.buf.with(|b| b.clone())
    }

    /// The captured bytes as text (lossy on invalid UTF-8).
    pub fn contents_string(&self) -> String {
        String::from_utf8_lossy(&self.contents()).into_owned()
    }

    /// Discard everything captured so far.
    pub fn clear(&self) {
        self.buf.with(|b| b.clear());
    }

    pub fn len(&self) -> usize {
        self.buf.with(|b| b.len())
    }

    pub fn is_empty(&self) -> bool {
        self.buf.with(|b| b.is_empty())
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.buf.write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.buf.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_and_clear() {
        let sink = MemorySink::new();
        let mut writer = sink.clone();
        writer.write_all(b"captured").unwrap();
        assert_eq!(sink.contents_string(), "captured");
        assert_eq!(sink.len(), 8);
        sink.clear();
        assert!(sink.is_empty());
    }
}
