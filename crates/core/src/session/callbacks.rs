//! Optional observers for a download.

use std::fmt;

use crate::output::{Phase, ProgressSample};

pub type PhaseCallback = Box<dyn FnMut(Phase) + Send>;
pub type ProgressCallback = Box<dyn FnMut(ProgressSample) + Send>;
pub type OutputCallback = Box<dyn FnMut(&str) + Send>;

/// Callbacks a caller may register for one download.
///
/// Every field is independent and optional. Callbacks run on the task that
/// reads standard output, in the order their lines were read.
///
/// ```ignore
/// let callbacks = DownloadCallbacks::new()
///     .on_phase_change(|phase| println!("phase: {phase}"))
///     .on_progress(|sample| println!("{}%", sample.percent_complete()));
/// ```
#[derive(Default)]
pub struct DownloadCallbacks {
    pub(crate) phase_change: Option<PhaseCallback>,
    pub(crate) progress: Option<ProgressCallback>,
    pub(crate) output: Option<OutputCallback>,
}

impl DownloadCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called when the phase changes, and once with [`Phase::Complete`] when
    /// standard output ends.
    pub fn on_phase_change(mut self, callback: impl FnMut(Phase) + Send + 'static) -> Self {
        self.phase_change = Some(Box::new(callback));
        self
    }

    /// Called for every progress line, duplicates included.
    pub fn on_progress(mut self, callback: impl FnMut(ProgressSample) + Send + 'static) -> Self {
        self.progress = Some(Box::new(callback));
        self
    }

    /// Called with every non-blank standard output line, verbatim.
    pub fn on_output(mut self, callback: impl FnMut(&str) + Send + 'static) -> Self {
        self.output = Some(Box::new(callback));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.phase_change.is_none() && self.progress.is_none() && self.output.is_none()
    }
}

impl fmt::Debug for DownloadCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DownloadCallbacks")
            .field("phase_change", &self.phase_change.is_some())
            .field("progress", &self.progress.is_some())
            .field("output", &self.output.is_some())
            .finish()
    }
}
