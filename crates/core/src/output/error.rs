//! Error types for output parsing.

use thiserror::Error;

/// A line did not match the grammar it was parsed against.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Line is not a download progress line.
    #[error("Unable to parse progress line: {line}")]
    Progress { line: String },

    /// Line carries no recognised stage tag.
    #[error("Unable to parse phase line: {line}")]
    Phase { line: String },

    /// Text is not a plain decimal number.
    #[error("Invalid percentage: {value}")]
    Percentage { value: String },
}

impl ParseError {
    pub(crate) fn progress(line: impl Into<String>) -> Self {
        Self::Progress { line: line.into() }
    }

    pub(crate) fn phase(line: impl Into<String>) -> Self {
        Self::Phase { line: line.into() }
    }
}
