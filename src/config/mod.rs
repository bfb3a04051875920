//! Stream specifications.
//!
//! This module provides:
//! - `InputSpec`: A path argument bound to an input provider
//! - `OutputSpec`: A path argument bound to an output target
//! - `FileExistsPolicy`: Policy for handling existing output files

mod spec;

pub use spec::{FileExistsPolicy, InputSpec, OutputSpec};

#[cfg(feature = "async")]
mod async_spec;

#[cfg(feature = "async")]
pub use async_spec::{AsyncInputSpec, AsyncOutputSpec};
