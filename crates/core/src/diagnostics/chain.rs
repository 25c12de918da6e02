//! Most-recent-first chain of diagnostic messages.

use std::error::Error;
use std::fmt;

use super::message::Message;
use crate::error::AdapterError;

/// Every diagnostic line of one run, newest at the head.
///
/// Each node owns one [`Message`] and the older remainder of the chain.
/// [`Error::source`] walks towards older messages.
pub struct ErrorChain {
    message: Message,
    cause: Option<Box<ErrorChain>>,
}

impl ErrorChain {
    pub fn new(message: Message) -> Self {
        Self {
            message,
            cause: None,
        }
    }

    pub fn with_cause(message: Message, cause: ErrorChain) -> Self {
        Self {
            message,
            cause: Some(Box::new(cause)),
        }
    }

    /// Folds messages in arrival order: the last one becomes the head and
    /// the first one the innermost tail.
    pub fn build<I>(messages: I) -> Result<Self, AdapterError>
    where
        I: IntoIterator<Item = Message>,
    {
        let mut messages = messages.into_iter();
        let first = messages.next().ok_or(AdapterError::EmptyDiagnostics)?;
        Ok(messages.fold(Self::new(first), |older, current| {
            Self::with_cause(current, older)
        }))
    }

    /// Classifies raw diagnostic lines and folds them.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, AdapterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build(lines.into_iter().map(|line| Message::classify(line.as_ref())))
    }

    /// The most recent message.
    pub fn message(&self) -> &Message {
        &self.message
    }

    /// The next-older part of the chain.
    pub fn cause(&self) -> Option<&ErrorChain> {
        self.cause.as_deref()
    }

    /// Messages from newest to oldest.
    pub fn iter(&self) -> Iter<'_> {
        Iter { next: Some(self) }
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether any message in the chain has error severity.
    pub fn has_error(&self) -> bool {
        self.iter().any(Message::is_error)
    }
}

// Chains can be thousands of nodes long, so nothing below recurses.

impl Clone for ErrorChain {
    fn clone(&self) -> Self {
        let older: Vec<&Message> = self.iter().skip(1).collect();
        let cause = older.into_iter().rev().fold(None, |cause, message| {
            Some(Box::new(ErrorChain {
                message: message.clone(),
                cause,
            }))
        });
        Self {
            message: self.message.clone(),
            cause,
        }
    }
}

impl PartialEq for ErrorChain {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for ErrorChain {}

impl fmt::Debug for ErrorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Drop for ErrorChain {
    fn drop(&mut self) {
        let mut next = self.cause.take();
        while let Some(mut node) = next {
            next = node.cause.take();
        }
    }
}

impl fmt::Display for ErrorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.message, f)
    }
}

impl Error for ErrorChain {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}

/// Iterator over the messages of an [`ErrorChain`], newest first.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    next: Option<&'a ErrorChain>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Message;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.cause.as_deref();
        Some(&node.message)
    }
}

impl<'a> IntoIterator for &'a ErrorChain {
    type Item = &'a Message;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
