//! Standard I/O implementations for files and stdin/stdout.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::PathBuf;

use super::{InputProvider, OutputTarget, STD_STREAM};

/// Input provider bound to the process's standard input.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinInput;

impl StdinInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputProvider for StdinInput {
    fn id(&self) -> &str {
        STD_STREAM
    }

    fn is_std(&self) -> bool {
        true
    }

    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(io::stdin()))
    }
}

/// Input provider for reading from files.
#[derive(Debug, Clone)]
pub struct FileInput {
    id: String,
    path: PathBuf,
}

impl FileInput {
    /// Create a new file input provider.
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

impl InputProvider for FileInput {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        let file = File::open(&self.path)?;
        Ok(Box::new(file))
    }
}

/// Output target bound to the process's standard output.
///
/// Every open mode returns the same shared stdout handle; truncation and
/// existence checks do not apply to a process stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutOutput;

impl StdoutOutput {
    pub fn new() -> Self {
        Self
    }
}

impl OutputTarget for StdoutOutput {
    fn id(&self) -> &str {
        STD_STREAM
    }

    fn is_std(&self) -> bool {
        true
    }

    fn open_overwrite(&self) -> io::Result<Box<dyn Write + Send>> {
        Ok(Box::new(io::stdout()))
    }

    fn open_append(&self) -> io::Result<Box<dyn Write + Send>> {
        Ok(Box::new(io::stdout()))
    }

    fn open_create_new(&self) -> io::Result<Box<dyn Write + Send>> {
        Ok(Box::new(io::stdout()))
    }
}

/// Output target for writing to files.
#[derive(Debug, Clone)]
pub struct FileOutput {
    id: String,
    path: PathBuf,
}

impl FileOutput {
    /// Create a new file output target.
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

impl OutputTarget for FileOutput {
    fn id(&self) -> &str {
        &self.id
    }

    fn open_overwrite(&self) -> io::Result<Box<dyn Write + Send>> {
        let file = File::create(&self.path)?;
        Ok(Box::new(file))
    }

    fn open_append(&self) -> io::Result<Box<dyn Write + Send>> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        Ok(Box::new(file))
    }

    fn open_create_new(&self) -> io::Result<Box<dyn Write + Send>> {
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)?;
        Ok(Box::new(file))
    }
}
