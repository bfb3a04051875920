//! Async input provider trait definition.

use std::fmt::Debug;

use async_trait::async_trait;
use tokio::io::AsyncRead;

/// Trait for asynchronous input providers.
#[async_trait]
pub trait AsyncInputProvider: Send + Sync + Debug {
    /// Returns the identifier of this input source.
    fn id(&self) -> &str;

    /// Whether the stream is owned by the process rather than by the caller.
    fn is_std(&self) -> bool {
        false
    }

    /// Open and return a new async readable stream.
    async fn open(&self) -> std::io::Result<Box<dyn AsyncRead + Unpin + Send>>;
}
