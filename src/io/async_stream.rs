//! Owned async stream handles.

use std::fmt;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use serde::{Serialize, de::DeserializeOwned};
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, ReadBuf};

use crate::error::{Stage, StreamError};
use crate::format;

/// Async counterpart of [`InputStream`](super::InputStream).
pub struct AsyncInputStream {
    id: String,
    is_std: bool,
    reader: Box<dyn AsyncRead + Unpin + Send>,
}

impl AsyncInputStream {
    pub fn new(
        id: impl Into<String>,
        is_std: bool,
        reader: Box<dyn AsyncRead + Unpin + Send>,
    ) -> Self {
        Self {
            id: id.into(),
            is_std,
            reader,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_std(&self) -> bool {
        self.is_std
    }

    pub async fn decode<T: DeserializeOwned>(&mut self) -> Result<T, StreamError> {
        format::decode_async(&mut self.reader)
            .await
            .map_err(|e| e.with_target(&self.id))
    }

    pub async fn decode_all<T: DeserializeOwned>(&mut self) -> Result<Vec<T>, StreamError> {
        format::decode_all_async(&mut self.reader)
            .await
            .map_err(|e| e.with_target(&self.id))
    }

    pub fn into_inner(self) -> Box<dyn AsyncRead + Unpin + Send> {
        self.reader
    }
}

impl AsyncRead for AsyncInputStream {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        Pin::new(&mut self.reader).poll_read(cx, buf)
    }
}

impl fmt::Debug for AsyncInputStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncInputStream")
            .field("id", &self.id)
            .field("is_std", &self.is_std)
            .finish_non_exhaustive()
    }
}

/// Async counterpart of [`OutputStream`](super::OutputStream).
///
/// Call [`close`](Self::close) when done: tokio file writes may still be
/// pending when the handle is dropped, and drop cannot report their errors.
pub struct AsyncOutputStream {
    id: String,
    is_std: bool,
    writer: Box<dyn AsyncWrite + Unpin + Send>,
}

impl AsyncOutputStream {
    pub fn new(
        id: impl Into<String>,
        is_std: bool,
        writer: Box<dyn AsyncWrite + Unpin + Send>,
    ) -> Self {
        Self {
            id: id.into(),
            is_std,
            writer,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_std(&self) -> bool {
        self.is_std
    }

    pub async fn encode<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), StreamError> {
        format::encode_async(&mut self.writer, value)
            .await
            .map_err(|e| e.with_target(&self.id))
    }

    /// Append each value as its own YAML document, stopping at the first error.
    pub async fn encode_all<T: Serialize>(&mut self, values: &[T]) -> Result<(), StreamError> {
        for value in values {
            self.encode(value).await?;
        }
        Ok(())
    }

    /// Flush and release the handle. Tokio file writes may still be in
    /// flight until this returns.
    pub async fn close(mut self) -> Result<(), StreamError> {
        self.writer
            .flush()
            .await
            .map_err(|e| StreamError::new(Stage::Write, e).with_target(&self.id))
    }

    pub fn into_inner(self) -> Box<dyn AsyncWrite + Unpin + Send> {
        self.writer
    }
}

impl AsyncWrite for AsyncOutputStream {
    fn poll_write(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        Pin::new(&mut self.writer).poll_write(cx, buf)
    }

    fn poll_flush(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(&mut self.writer).poll_flush(cx)
    }

    fn poll_shutdown(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(&mut self.writer).poll_shutdown(cx)
    }
}

impl fmt::Debug for AsyncOutputStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncOutputStream")
            .field("id", &self.id)
            .field("is_std", &self.is_std)
            .finish_non_exhaustive()
    }
}
