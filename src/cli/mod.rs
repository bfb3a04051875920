//! Command-line helpers for path arguments.
//!
//! Tools built on yamlio usually take `--input` / `--output` flags where "-"
//! selects stdin/stdout. [`StreamArgs`] collects those flags and opens the
//! streams; with the `cli` feature the argument types plug into `sarge`.

use crate::config::{FileExistsPolicy, InputSpec, OutputSpec};
use crate::error::StreamError;
use crate::io::{InputStream, OutputStream, STD_STREAM};

/// Normalize an input token: `-` and `stdin` select stdin, `@path` forces a
/// literal path (so a file named `stdin` stays reachable).
pub fn normalize_input(token: &str) -> String {
    if let Some(path) = token.strip_prefix('@') {
        return path.to_string();
    }
    if token == STD_STREAM || token.eq_ignore_ascii_case("stdin") {
        return STD_STREAM.to_string();
    }
    token.to_string()
}

/// Normalize an output token: `-` and `stdout` select stdout, `@path` forces
/// a literal path.
pub fn normalize_output(token: &str) -> String {
    if let Some(path) = token.strip_prefix('@') {
        return path.to_string();
    }
    if token == STD_STREAM || token.eq_ignore_ascii_case("stdout") {
        return STD_STREAM.to_string();
    }
    token.to_string()
}

/// Input path argument, already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputArg(pub String);

impl Default for InputArg {
    fn default() -> Self {
        Self(STD_STREAM.to_string())
    }
}

/// Output path argument, already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArg(pub String);

impl Default for OutputArg {
    fn default() -> Self {
        Self(STD_STREAM.to_string())
    }
}

/// Input/output selection for a single-input, single-output tool.
#[derive(Debug, Clone, Default)]
pub struct StreamArgs {
    pub input: InputArg,
    pub output: OutputArg,
    /// Append to an existing output file instead of truncating it.
    pub append: bool,
    /// Refuse to touch an existing output file.
    pub no_clobber: bool,
}

impl StreamArgs {
    /// Create arguments reading stdin and writing stdout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input path.
    pub fn with_input(mut self, path: &str) -> Self {
        self.input = InputArg(normalize_input(path));
        self
    }

    /// Set the output path.
    pub fn with_output(mut self, path: &str) -> Self {
        self.output = OutputArg(normalize_output(path));
        self
    }

    /// Enable append mode.
    pub fn with_append(mut self) -> Self {
        self.append = true;
        self
    }

    /// Enable no-clobber mode.
    pub fn with_no_clobber(mut self) -> Self {
        self.no_clobber = true;
        self
    }

    /// Check if reading from stdin.
    pub fn is_stdin(&self) -> bool {
        self.input.0 == STD_STREAM
    }

    /// Check if writing to stdout.
    pub fn is_stdout(&self) -> bool {
        self.output.0 == STD_STREAM
    }

    /// Get the file exists policy based on flags. No-clobber wins over append.
    pub fn file_exists_policy(&self) -> FileExistsPolicy {
        if self.no_clobber {
            FileExistsPolicy::Error
        } else if self.append {
            FileExistsPolicy::Append
        } else {
            FileExistsPolicy::Overwrite
        }
    }

    pub fn open_input(&self) -> Result<InputStream, StreamError> {
        InputSpec::parse(&self.input.0).open()
    }

    pub fn open_output(&self) -> Result<OutputStream, StreamError> {
        OutputSpec::parse(&self.output.0)
            .with_file_exists_policy(self.file_exists_policy())
            .open()
    }
}

#[cfg(feature = "cli")]
mod sarge;
