//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{Stage, StreamError};

/// A diagnostic wrapper for stream errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct IoDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

fn help_for(stage: Stage) -> &'static str {
    match stage {
        Stage::Open => "Check that the path exists and is accessible, or pass \"-\" for stdin/stdout",
        Stage::Read => "The input stream failed before it was fully read",
        Stage::Parse => "Check that the input is valid YAML of the expected shape",
        Stage::Serialize => "The value contains data that cannot be represented as YAML",
        Stage::Write => "The output stream rejected the write (closed pipe or full disk?)",
    }
}

impl From<StreamError> for IoDiagnostic {
    fn from(e: StreamError) -> Self {
        let message = match &e.target {
            Some(target) => format!("{} '{}'", e.stage, target),
            None => e.stage.to_string(),
        };
        IoDiagnostic {
            message,
            source: Some(e.error),
            help: Some(help_for(e.stage).into()),
            severity: Severity::Error,
        }
    }
}

impl From<StreamError> for miette::Report {
    fn from(e: StreamError) -> Self {
        miette::Report::new(IoDiagnostic::from(e))
    }
}
