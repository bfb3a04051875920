//! Byte-buffer streams, for tests and for callers that encode YAML into memory.

use std::io::{self, Cursor, Read, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{InputProvider, OutputTarget};

/// Serves a fixed buffer; every `open` starts again from the first byte.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    id: String,
    data: Arc<[u8]>,
}

impl InMemorySource {
    /// Wrap `data` under the stream id `id`.
    pub fn new(id: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            data: data.into(),
        }
    }

    /// Wrap UTF-8 text, typically a YAML document literal.
    pub fn from_string(id: impl Into<String>, data: impl Into<String>) -> Self {
        Self::new(id, data.into().into_bytes())
    }
}

impl InputProvider for InMemorySource {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(Cursor::new(Arc::clone(&self.data))))
    }
}

/// Collects written documents in a shared buffer. Clones see the same bytes.
#[derive(Debug, Clone)]
pub struct InMemorySink {
    id: String,
    buf: Arc<Mutex<Vec<u8>>>,
}

impl InMemorySink {
    /// An empty sink identified by `id`.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            buf: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buf.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of everything written so far.
    pub fn contents(&self) -> Vec<u8> {
        self.lock().clone()
    }

    /// Snapshot decoded as UTF-8, with invalid sequences replaced.
    pub fn contents_string(&self) -> String {
        String::from_utf8_lossy(&self.contents()).into_owned()
    }

    /// Drop all written bytes.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn handle(&self) -> Box<dyn Write + Send> {
        Box::new(SinkWriter(self.clone()))
    }
}

impl OutputTarget for InMemorySink {
    fn id(&self) -> &str {
        &self.id
    }

    fn open_overwrite(&self) -> io::Result<Box<dyn Write + Send>> {
        self.clear();
        Ok(self.handle())
    }

    fn open_append(&self) -> io::Result<Box<dyn Write + Send>> {
        Ok(self.handle())
    }

    /// A sink "exists" once something has been written to it.
    fn open_create_new(&self) -> io::Result<Box<dyn Write + Send>> {
        if !self.lock().is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("sink '{}' already has content", self.id),
            ));
        }
        Ok(self.handle())
    }
}

/// Appends into the sink's buffer.
struct SinkWriter(InMemorySink);

impl Write for SinkWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
