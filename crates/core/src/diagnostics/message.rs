//! Severity-tagged diagnostic messages.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const WARNING_PREFIX: &str = "WARNING:";
pub const ERROR_PREFIX: &str = "ERROR:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// One line of diagnostic output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    text: String,
    severity: Severity,
}

impl Message {
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }

    /// Classifies a diagnostic line by its prefix.
    ///
    /// `WARNING:` is checked before `ERROR:`; the matched prefix and the
    /// surrounding whitespace are stripped. Text with neither prefix is kept
    /// verbatim and classified as an error.
    pub fn classify(line: &str) -> Self {
        if let Some(rest) = line.strip_prefix(WARNING_PREFIX) {
            Self::new(rest.trim(), Severity::Warning)
        } else if let Some(rest) = line.strip_prefix(ERROR_PREFIX) {
            Self::new(rest.trim(), Severity::Error)
        } else {
            Self::new(line, Severity::Error)
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl From<&str> for Message {
    fn from(line: &str) -> Self {
        Self::classify(line)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
