//! Error types for stream resolution and document encoding.
//!
//! This module provides:
//! - `Stage`: Indicates which step of an I/O operation failed
//! - `StreamError`: A single failure with its stage, target and cause
//! - `EmptyDocument`: The cause reported when decoding an empty stream

use std::fmt;
use std::io;

use thiserror::Error;

/// The step of an operation where an error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// The stream could not be opened or created
    Open,
    /// An open stream could not be read to exhaustion
    Read,
    /// Bytes read were not valid YAML or did not match the target shape
    Parse,
    /// A value could not be converted to YAML
    Serialize,
    /// Bytes could not be fully written to an open stream
    Write,
}

impl Stage {
    /// Human-readable context prefix used when rendering errors.
    pub fn context(&self) -> &'static str {
        match self {
            Stage::Open => "opening file",
            Stage::Read => "reading",
            Stage::Parse => "parsing",
            Stage::Serialize => "serializing",
            Stage::Write => "writing",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.context())
    }
}

/// A single stream or codec error with context.
#[derive(Debug)]
pub struct StreamError {
    /// Stage where the error occurred
    pub stage: Stage,
    /// Identifier of the stream ("-" for stdin/stdout, a path otherwise).
    /// `None` when the codec was handed a bare reader or writer.
    pub target: Option<String>,
    /// The underlying error
    pub error: Box<dyn std::error::Error + Send + Sync>,
}

impl StreamError {
    pub fn new<E>(stage: Stage, error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self {
            stage,
            target: None,
            error: error.into(),
        }
    }

    pub(crate) fn open(target: &str, error: io::Error) -> Self {
        Self::new(Stage::Open, error).with_target(target)
    }

    /// Attach the stream identifier, keeping an existing one if present.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        if self.target.is_none() {
            self.target = Some(target.into());
        }
        self
    }

    /// Returns true if the wrapped cause is an I/O "not found" error.
    pub fn is_not_found(&self) -> bool {
        self.io_error()
            .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
    }

    /// The wrapped cause as an I/O error, if it is one.
    pub fn io_error(&self) -> Option<&io::Error> {
        self.error.downcast_ref::<io::Error>()
    }
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            Some(target) => write!(f, "{} {}: {}", self.stage, target, self.error),
            None => write!(f, "{}: {}", self.stage, self.error),
        }
    }
}

impl std::error::Error for StreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.error.as_ref())
    }
}

/// Decoding was asked to produce a value from a stream with no content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("empty document")]
pub struct EmptyDocument;

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
