//! Input and output specifications.

use std::sync::Arc;

use crate::error::StreamError;
use crate::io::{
    FileInput, FileOutput, InputProvider, InputStream, OutputStream, OutputTarget, STD_STREAM,
    StdinInput, StdoutOutput,
};

/// Policy for handling existing output files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileExistsPolicy {
    #[default]
    /// Truncate existing files
    Overwrite,
    /// Append to existing files
    Append,
    /// Return an error if file exists
    Error,
}

impl FileExistsPolicy {
    /// Parse a policy from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "overwrite" => Some(FileExistsPolicy::Overwrite),
            "append" => Some(FileExistsPolicy::Append),
            "error" => Some(FileExistsPolicy::Error),
            _ => None,
        }
    }
}

/// Specification for a single input source.
#[derive(Debug, Clone)]
pub struct InputSpec {
    /// Raw path argument
    pub raw: String,
    /// The input provider implementation
    pub provider: Arc<dyn InputProvider>,
}

impl InputSpec {
    /// Create a new input specification.
    pub fn new(raw: impl Into<String>, provider: Arc<dyn InputProvider>) -> Self {
        Self {
            raw: raw.into(),
            provider,
        }
    }

    /// Map a path argument to stdin ("-") or a file.
    pub fn parse(raw: &str) -> Self {
        let provider: Arc<dyn InputProvider> = if raw == STD_STREAM {
            Arc::new(StdinInput::new())
        } else {
            Arc::new(FileInput::new(raw))
        };
        Self::new(raw, provider)
    }

    /// Open the input for reading.
    pub fn open(&self) -> Result<InputStream, StreamError> {
        let reader = self
            .provider
            .open()
            .map_err(|e| StreamError::open(&self.raw, e))?;
        Ok(InputStream::new(
            self.raw.clone(),
            self.provider.is_std(),
            reader,
        ))
    }
}

/// Specification for a single output target.
#[derive(Debug, Clone)]
pub struct OutputSpec {
    /// Raw path argument
    pub raw: String,
    /// The output target implementation
    pub target: Arc<dyn OutputTarget>,
    /// Policy for handling existing files
    pub file_exists_policy: FileExistsPolicy,
}

impl OutputSpec {
    /// Create a new output specification.
    pub fn new(raw: impl Into<String>, target: Arc<dyn OutputTarget>) -> Self {
        Self {
            raw: raw.into(),
            target,
            file_exists_policy: FileExistsPolicy::default(),
        }
    }

    /// Map a path argument to stdout ("-") or a file.
    pub fn parse(raw: &str) -> Self {
        let target: Arc<dyn OutputTarget> = if raw == STD_STREAM {
            Arc::new(StdoutOutput::new())
        } else {
            Arc::new(FileOutput::new(raw))
        };
        Self::new(raw, target)
    }

    /// Set the file exists policy.
    pub fn with_file_exists_policy(mut self, policy: FileExistsPolicy) -> Self {
        self.file_exists_policy = policy;
        self
    }

    /// Open the output according to the file exists policy.
    pub fn open(&self) -> Result<OutputStream, StreamError> {
        let result = match self.file_exists_policy {
            FileExistsPolicy::Overwrite => self.target.open_overwrite(),
            FileExistsPolicy::Append => self.target.open_append(),
            FileExistsPolicy::Error => self.target.open_create_new(),
        };

        let writer = result.map_err(|e| StreamError::open(&self.raw, e))?;
        Ok(OutputStream::new(
            self.raw.clone(),
            self.target.is_std(),
            writer,
        ))
    }
}
