//! Output target trait definition.

use std::fmt::Debug;
use std::io::Write;

/// Trait for synchronous output targets.
///
/// Implementors provide a way to open a writable stream to a file, the
/// process's standard output, or an in-memory buffer.
pub trait OutputTarget: Send + Sync + Debug {
    /// Returns the identifier of this output target.
    ///
    /// Convention: "-" for stdout, file path for files.
    fn id(&self) -> &str;

    /// Whether the stream is owned by the process rather than by the caller.
    fn is_std(&self) -> bool {
        false
    }

    /// Open the target for writing, creating it or truncating any existing content.
    fn open_overwrite(&self) -> std::io::Result<Box<dyn Write + Send>>;

    /// Open the target for appending to existing content.
    fn open_append(&self) -> std::io::Result<Box<dyn Write + Send>>;

    /// Open the target only if it does not exist yet.
    ///
    /// Fails with `ErrorKind::AlreadyExists` otherwise.
    fn open_create_new(&self) -> std::io::Result<Box<dyn Write + Send>>;
}
