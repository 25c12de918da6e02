//! Classification of youtube-dl standard error.
//!
//! Each diagnostic line becomes a [`Message`]; the lines of one run are
//! folded into an [`ErrorChain`], most recent first.

mod chain;
mod message;

pub use chain::{ErrorChain, Iter};
pub use message::{Message, Severity, ERROR_PREFIX, WARNING_PREFIX};
