//! Owned stream handles returned by the resolver.

use std::fmt;
use std::io::{self, Read, Write};

use serde::{Serialize, de::DeserializeOwned};

use crate::error::{Stage, StreamError};
use crate::format;

/// A readable stream bound to a file or to the process's standard input.
///
/// The caller owns the handle. Dropping it closes a file; for stdin the
/// process keeps its descriptor open.
pub struct InputStream {
    id: String,
    is_std: bool,
    reader: Box<dyn Read + Send>,
}

impl InputStream {
    pub fn new(id: impl Into<String>, is_std: bool, reader: Box<dyn Read + Send>) -> Self {
        Self {
            id: id.into(),
            is_std,
            reader,
        }
    }

    /// The path this stream was opened from, "-" for stdin.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether the stream is the process's standard input.
    pub fn is_std(&self) -> bool {
        self.is_std
    }

    /// Read the whole stream and decode it as a single YAML document.
    pub fn decode<T: DeserializeOwned>(&mut self) -> Result<T, StreamError> {
        format::decode(&mut self.reader).map_err(|e| e.with_target(&self.id))
    }

    /// Read the whole stream and decode every YAML document in it.
    pub fn decode_all<T: DeserializeOwned>(&mut self) -> Result<Vec<T>, StreamError> {
        format::decode_all(&mut self.reader).map_err(|e| e.with_target(&self.id))
    }

    pub fn into_inner(self) -> Box<dyn Read + Send> {
        self.reader
    }
}

impl Read for InputStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}

impl fmt::Debug for InputStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputStream")
            .field("id", &self.id)
            .field("is_std", &self.is_std)
            .finish_non_exhaustive()
    }
}

/// A writable stream bound to a file or to the process's standard output.
///
/// Each [`encode`](Self::encode) appends one marker-prefixed document.
pub struct OutputStream {
    id: String,
    is_std: bool,
    writer: Box<dyn Write + Send>,
}

impl OutputStream {
    pub fn new(id: impl Into<String>, is_std: bool, writer: Box<dyn Write + Send>) -> Self {
        Self {
            id: id.into(),
            is_std,
            writer,
        }
    }

    /// The path this stream was opened from, "-" for stdout.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether the stream is the process's standard output.
    pub fn is_std(&self) -> bool {
        self.is_std
    }

    /// Append `value` as one YAML document.
    pub fn encode<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), StreamError> {
        format::encode(&mut self.writer, value).map_err(|e| e.with_target(&self.id))
    }

    /// Append each value as its own YAML document.
    pub fn encode_all<T: Serialize>(&mut self, values: &[T]) -> Result<(), StreamError> {
        format::encode_all(&mut self.writer, values).map_err(|e| e.with_target(&self.id))
    }

    /// Flush and release the handle.
    ///
    /// A file descriptor is closed when the writer drops. Standard output is
    /// only flushed; the process stream stays open for later writers.
    pub fn close(mut self) -> Result<(), StreamError> {
        self.writer
            .flush()
            .map_err(|e| StreamError::new(Stage::Write, e).with_target(&self.id))
    }

    pub fn into_inner(self) -> Box<dyn Write + Send> {
        self.writer
    }
}

impl Write for OutputStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl fmt::Debug for OutputStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputStream")
            .field("id", &self.id)
            .field("is_std", &self.is_std)
            .finish_non_exhaustive()
    }
}
