//! Input provider trait definition.

use std::fmt::Debug;
use std::io::Read;

/// Trait for synchronous input providers.
///
/// Implementors provide a way to open a readable stream from a file, the
/// process's standard input, or an in-memory buffer.
pub trait InputProvider: Send + Sync + Debug {
    /// Returns the identifier of this input source.
    ///
    /// Convention: "-" for stdin, file path for files.
    fn id(&self) -> &str;

    /// Whether the stream is owned by the process rather than by the caller.
    fn is_std(&self) -> bool {
        false
    }

    /// Open and return a new readable stream.
    fn open(&self) -> std::io::Result<Box<dyn Read + Send>>;
}
