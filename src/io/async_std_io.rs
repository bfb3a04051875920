//! Async standard I/O implementations.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs::OpenOptions;
use tokio::io::{AsyncRead, AsyncWrite};

use super::{AsyncInputProvider, AsyncOutputTarget, STD_STREAM};

/// Async input provider for reading from stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsyncStdinInput;

impl AsyncStdinInput {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AsyncInputProvider for AsyncStdinInput {
    fn id(&self) -> &str {
        STD_STREAM
    }

    fn is_std(&self) -> bool {
        true
    }

    async fn open(&self) -> std::io::Result<Box<dyn AsyncRead + Unpin + Send>> {
        Ok(Box::new(tokio::io::stdin()))
    }
}

/// Async input provider for reading from files.
#[derive(Debug, Clone)]
pub struct AsyncFileInput {
    id: String,
    path: PathBuf,
}

impl AsyncFileInput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let id = path.to_string_lossy().into_owned();
        Self { id, path }
    }

    /// Get the file path.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl AsyncInputProvider for AsyncFileInput {
    fn id(&self) -> &str {
        &self.id
    }

    async fn open(&self) -> std::io::Result<Box<dyn AsyncRead + Unpin + Send>> {
        let file = tokio::fs::File::open(&self.path).await?;
        Ok(Box::new(file))
    }
}

/// Async output target for writing to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsyncStdoutOutput;

impl AsyncStdoutOutput {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AsyncOutputTarget for AsyncStdoutOutput {
    fn id(&self) -> &str {
        STD_STREAM
    }

    fn is_std(&self) -> bool {
        true
    }

    async fn open_overwrite(&self) -> std::io::Result<Box<dyn AsyncWrite + Unpin + Send>> {
        Ok(Box::new(tokio::io::stdout()))
    }

    async fn open_append(&self) -> std::io::Result<Box<dyn AsyncWrite + Unpin + Send>> {
        Ok(Box::new(tokio::io::stdout()))
    }

    async fn open_create_new(&self) -> std::io::Result<Box<dyn AsyncWrite + Unpin + Send>> {
        Ok(Box::new(tokio::io::stdout()))
    }
}

/// Async output target for writing to files.
#[derive(Debug, Clone)]
pub struct AsyncFileOutput {
    id: String,
    path: PathBuf,
}

impl AsyncFileOutput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let id = path.to_string_lossy().into_owned();
        Self { id, path }
    }

    /// Get the file path.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl AsyncOutputTarget for AsyncFileOutput {
    fn id(&self) -> &str {
        &self.id
    }

    async fn open_overwrite(&self) -> std::io::Result<Box<dyn AsyncWrite + Unpin + Send>> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(&self.path)
            .await?;
        Ok(Box::new(file))
    }

    async fn open_append(&self) -> std::io::Result<Box<dyn AsyncWrite + Unpin + Send>> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        Ok(Box::new(file))
    }

    async fn open_create_new(&self) -> std::io::Result<Box<dyn AsyncWrite + Unpin + Send>> {
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
            .await?;
        Ok(Box::new(file))
    }
}
