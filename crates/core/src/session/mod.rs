//! Running youtube-dl and observing its output.
//!
//! A [`DownloadSession`] spawns one process per call, drains standard error
//! concurrently with standard output, and reports what it sees through
//! [`DownloadCallbacks`].

mod callbacks;
mod driver;
mod lines;

pub use callbacks::{DownloadCallbacks, OutputCallback, PhaseCallback, ProgressCallback};
pub use driver::DownloadSession;
