//! Error types for adapter operations.

use std::path::PathBuf;
use thiserror::Error;

use crate::adapter::Operation;
use crate::diagnostics::ErrorChain;
use crate::output::ParseError;

/// Errors surfaced by a lookup or download.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The tool wrote to standard error. Raised whatever its exit code.
    #[error(transparent)]
    Diagnostic(#[from] ErrorChain),

    /// An output line could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The tool could not be launched.
    #[error("Failed to launch {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the tool's output or waiting for it failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A lookup finished without printing anything.
    #[error("{operation} produced no output")]
    EmptyOutput { operation: Operation },

    /// An error chain was requested for zero diagnostic lines.
    #[error("Cannot build an error chain without diagnostic messages")]
    EmptyDiagnostics,

    /// The blocking adapter could not start its runtime.
    #[error("Failed to start runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

impl AdapterError {
    /// Whether the tool reported diagnostics.
    pub fn is_diagnostic(&self) -> bool {
        matches!(self, Self::Diagnostic(_))
    }

    /// The diagnostic chain, if the tool reported any.
    pub fn diagnostics(&self) -> Option<&ErrorChain> {
        match self {
            Self::Diagnostic(chain) => Some(chain),
            _ => None,
        }
    }

    /// Whether the failure consists of warnings only.
    ///
    /// Any diagnostic output fails an operation; callers that tolerate
    /// warnings check this to tell them apart from real errors.
    pub fn is_warning_only(&self) -> bool {
        self.diagnostics().is_some_and(|chain| !chain.has_error())
    }
}
