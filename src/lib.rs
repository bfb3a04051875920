//! # yamlio
//!
//! Stream resolution and multi-document YAML encoding for command-line tools.
//!
//! ## Overview
//!
//! yamlio provides:
//! - **Stream resolution**: Map a path argument to a readable or writable
//!   stream, where `"-"` selects stdin/stdout
//! - **Document codec**: Decode a whole stream into a typed value, and encode
//!   values as `---`-prefixed YAML documents
//! - **Multi-document output**: Each `encode` call appends one document, so a
//!   single stream can carry many
//! - **Sync and Async**: Both blocking and Tokio-based variants
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Deserialize, Serialize)]
//! struct Namespace {
//!     name: String,
//!     labels: Vec<String>,
//! }
//!
//! fn main() -> Result<(), yamlio::StreamError> {
//!     let mut input = yamlio::open_input("namespaces.yaml")?;
//!     let namespaces: Vec<Namespace> = input.decode()?;
//!
//!     let mut output = yamlio::open_output("-")?; // stdout
//!     for ns in &namespaces {
//!         output.encode(ns)?;
//!     }
//!     output.close()
//! }
//! ```
//!
//! ## Handle ownership
//!
//! Handles returned by [`open_input`] and [`open_output`] belong to the
//! caller. Dropping or closing a sync file handle closes the file; a handle
//! bound to stdin/stdout only releases this process's reference, and the
//! standard stream stays usable afterwards.
//!
//! Async output handles must be closed with `AsyncOutputStream::close`:
//! tokio may still hold pending file writes when the handle is dropped.
//!
//! ## Errors
//!
//! Every failure is a [`StreamError`] whose [`Stage`] tells which step
//! failed: opening, reading, parsing, serializing or writing. The library
//! never logs and never retries.
//!
//! ## Features
//!
//! - `async` - Async I/O support with Tokio
//! - `miette` - Pretty error reporting with miette
//! - `cli` - `sarge` argument types and the `yamlio` binary

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod io;

pub use config::{FileExistsPolicy, InputSpec, OutputSpec};
pub use error::{EmptyDocument, Stage, StreamError};
pub use format::{DOCUMENT_MARKER, decode, decode_all, encode, encode_all, to_document};
pub use io::{
    FileInput, FileOutput, InMemorySink, InMemorySource, InputProvider, InputStream,
    OutputStream, OutputTarget, STD_STREAM, StdinInput, StdoutOutput, open_input, open_output,
    open_output_with,
};

// Async re-exports
#[cfg(feature = "async")]
pub use config::{AsyncInputSpec, AsyncOutputSpec};
#[cfg(feature = "async")]
pub use format::{decode_all_async, decode_async, encode_async};
#[cfg(feature = "async")]
pub use io::{
    AsyncFileInput, AsyncFileOutput, AsyncInputProvider, AsyncInputStream, AsyncOutputStream,
    AsyncOutputTarget, AsyncStdinInput, AsyncStdoutOutput, open_input_async, open_output_async,
    open_output_with_async,
};

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::IoDiagnostic;
