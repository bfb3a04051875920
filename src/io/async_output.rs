//! Async output target trait definition.

use std::fmt::Debug;

use async_trait::async_trait;
use tokio::io::AsyncWrite;

/// Trait for asynchronous output targets.
#[async_trait]
pub trait AsyncOutputTarget: Send + Sync + Debug {
    /// Returns the identifier of this output target.
    fn id(&self) -> &str;

    /// Whether the stream is owned by the process rather than by the caller.
    fn is_std(&self) -> bool {
        false
    }

    /// Open the target for writing, creating it or truncating any existing content.
    async fn open_overwrite(&self) -> std::io::Result<Box<dyn AsyncWrite + Unpin + Send>>;

    /// Open the target for appending to existing content.
    async fn open_append(&self) -> std::io::Result<Box<dyn AsyncWrite + Unpin + Send>>;

    /// Open the target only if it does not exist yet.
    async fn open_create_new(&self) -> std::io::Result<Box<dyn AsyncWrite + Unpin + Send>>;
}
