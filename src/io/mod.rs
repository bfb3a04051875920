//! Stream resolution for path arguments.
//!
//! This module provides:
//! - `open_input` / `open_output`: Map a path to a stream, "-" meaning stdin/stdout
//! - `InputStream` / `OutputStream`: Caller-owned handles
//! - `InputProvider` / `OutputTarget`: Traits for stream sources and destinations
//! - Standard implementations for files, stdin/stdout
//! - In-memory implementations for testing

mod input;
mod memory;
mod output;
mod std_io;
mod stream;

pub use input::InputProvider;
pub use memory::{InMemorySink, InMemorySource};
pub use output::OutputTarget;
pub use std_io::{FileInput, FileOutput, StdinInput, StdoutOutput};
pub use stream::{InputStream, OutputStream};

use crate::config::{FileExistsPolicy, InputSpec, OutputSpec};
use crate::error::StreamError;

/// Path argument that selects the process's standard input or output.
pub const STD_STREAM: &str = "-";

/// Open `path` for reading, or stdin when `path` is "-".
///
/// Opening stdin never fails. A file that is missing or unreadable yields a
/// [`Stage::Open`](crate::Stage::Open) error wrapping the OS error.
pub fn open_input(path: &str) -> Result<InputStream, StreamError> {
    InputSpec::parse(path).open()
}

/// Create or truncate `path` for writing, or bind stdout when `path` is "-".
pub fn open_output(path: &str) -> Result<OutputStream, StreamError> {
    open_output_with(path, FileExistsPolicy::Overwrite)
}

/// Open `path` for writing under the given policy. Stdout ignores the policy.
pub fn open_output_with(path: &str, policy: FileExistsPolicy) -> Result<OutputStream, StreamError> {
    OutputSpec::parse(path)
        .with_file_exists_policy(policy)
        .open()
}

// Async I/O support
#[cfg(feature = "async")]
mod async_input;
#[cfg(feature = "async")]
mod async_output;
#[cfg(feature = "async")]
mod async_std_io;
#[cfg(feature = "async")]
mod async_stream;

#[cfg(feature = "async")]
pub use async_input::AsyncInputProvider;
#[cfg(feature = "async")]
pub use async_output::AsyncOutputTarget;
#[cfg(feature = "async")]
pub use async_std_io::{AsyncFileInput, AsyncFileOutput, AsyncStdinInput, AsyncStdoutOutput};
#[cfg(feature = "async")]
pub use async_stream::{AsyncInputStream, AsyncOutputStream};

/// Async version of [`open_input`].
#[cfg(feature = "async")]
pub async fn open_input_async(path: &str) -> Result<AsyncInputStream, StreamError> {
    crate::config::AsyncInputSpec::parse(path).open().await
}

/// Async version of [`open_output`].
#[cfg(feature = "async")]
pub async fn open_output_async(path: &str) -> Result<AsyncOutputStream, StreamError> {
    open_output_with_async(path, FileExistsPolicy::Overwrite).await
}

/// Async version of [`open_output_with`].
#[cfg(feature = "async")]
pub async fn open_output_with_async(
    path: &str,
    policy: FileExistsPolicy,
) -> Result<AsyncOutputStream, StreamError> {
    crate::config::AsyncOutputSpec::parse(path)
        .with_file_exists_policy(policy)
        .open()
        .await
}
