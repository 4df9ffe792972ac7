//! Clonable handle over a shared writer

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// A clonable sink wrapping any writer.
///
/// One clone goes to the logger via `set_output` (or a `*_to` call); the
/// host keeps another to inspect or reuse the writer. The logger only
/// writes, so the writer outlives any logger that holds a clone.
///
/// # Example
///
/// ```
/// use templog::SharedSink;
/// use std::io::Write;
///
/// let sink = SharedSink::new(Vec::new());
/// let mut clone = sink.clone();
/// clone.write_all(b"line\n").unwrap();
/// assert_eq!(sink.with(|w| w.clone()), b"line\n");
/// ```
pub struct SharedSink<W> {
    inner: Arc<Mutex<W>>,
}

impl<W> SharedSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: Arc::new(Mutex::new(writer)),
        }
    }

    /// Run a closure against the underlying writer.
    pub fn with<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl<W: Default> Default for SharedSink<W> {
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> Clone for SharedSink<W> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<W: Write> Write for SharedSink<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().write(buf)
    }

    // Whole lines land under one lock acquisition.
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.inner.lock().write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.lock().flush()
    }
}
