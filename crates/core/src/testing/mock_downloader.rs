//! Mock downloader for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use url::Url;

use crate::adapter::{DownloadMode, MediaDownloader, Operation};
use crate::diagnostics::ErrorChain;
use crate::error::AdapterError;
use crate::output::Phase;
use crate::session::{DownloadCallbacks, DownloadSession};

/// A recorded call for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub operation: Operation,
    pub url: Url,
}

/// Mock implementation of the MediaDownloader trait.
///
/// Downloads replay scripted output lines through the same phase and
/// progress handling a real session uses, then fail if diagnostics were
/// scripted, as youtube-dl writing to standard error would.
///
/// # Example
///
/// ```rust,ignore
/// use ytdl_core::testing::MockDownloader;
///
/// let mut downloader = MockDownloader::new();
/// downloader.set_output(["[youtube] abc: Downloading webpage"]).await;
/// downloader.set_diagnostics(["ERROR: Incomplete YouTube ID abc"]).await;
///
/// let result = downloader.download_video(&url, callbacks).await;
/// assert!(result.unwrap_err().is_diagnostic());
/// ```
#[derive(Debug)]
pub struct MockDownloader {
    /// Recorded calls.
    calls: Arc<RwLock<Vec<RecordedCall>>>,
    /// Title returned by lookups. `None` yields an empty-output error.
    title: Arc<RwLock<Option<String>>>,
    /// Filename returned by lookups.
    filename: Arc<RwLock<Option<String>>>,
    /// Standard output lines replayed by downloads.
    output: Arc<RwLock<Vec<String>>>,
    /// Standard error lines; any of them fails the operation.
    diagnostics: Arc<RwLock<Vec<String>>>,
    /// If set, the next operation will fail with this error.
    next_error: Arc<RwLock<Option<AdapterError>>>,
    session: DownloadSession,
}

impl Default for MockDownloader {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDownloader {
    /// Create a new mock downloader.
    pub fn new() -> Self {
        Self {
            calls: Arc::new(RwLock::new(Vec::new())),
            title: Arc::new(RwLock::new(Some("Mock Title".to_string()))),
            filename: Arc::new(RwLock::new(Some("Mock Title_mock.mp4".to_string()))),
            output: Arc::new(RwLock::new(Vec::new())),
            diagnostics: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
            session: DownloadSession::new(),
        }
    }

    /// Get all recorded calls.
    pub async fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.calls.read().await.clone()
    }

    pub async fn set_title(&self, title: Option<&str>) {
        *self.title.write().await = title.map(str::to_string);
    }

    pub async fn set_filename(&self, filename: Option<&str>) {
        *self.filename.write().await = filename.map(str::to_string);
    }

    /// Set the standard output lines a download replays.
    pub async fn set_output<I, S>(&self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        *self.output.write().await = lines.into_iter().map(Into::into).collect();
    }

    /// Set the standard error lines every operation reports.
    pub async fn set_diagnostics<I, S>(&self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        *self.diagnostics.write().await = lines.into_iter().map(Into::into).collect();
    }

    /// Configure the next operation to fail with the given error.
    pub async fn set_next_error(&self, error: AdapterError) {
        *self.next_error.write().await = Some(error);
    }

    /// Phase reached by the last download.
    pub fn current_phase(&self) -> Phase {
        self.session.current_phase()
    }

    async fn record(&self, operation: Operation, url: &Url) -> Result<(), AdapterError> {
        self.calls.write().await.push(RecordedCall {
            operation,
            url: url.clone(),
        });
        match self.next_error.write().await.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn check_diagnostics(&self) -> Result<(), AdapterError> {
        let diagnostics = self.diagnostics.read().await;
        if diagnostics.is_empty() {
            return Ok(());
        }
        Err(ErrorChain::from_lines(diagnostics.iter())?.into())
    }

    async fn lookup(
        &self,
        operation: Operation,
        url: &Url,
        value: &RwLock<Option<String>>,
    ) -> Result<String, AdapterError> {
        self.record(operation, url).await?;
        self.check_diagnostics().await?;
        value
            .read()
            .await
            .clone()
            .ok_or(AdapterError::EmptyOutput { operation })
    }
}

#[async_trait]
impl MediaDownloader for MockDownloader {
    fn name(&self) -> &str {
        "mock"
    }

    async fn resolve_title(&self, url: &Url) -> Result<String, AdapterError> {
        self.lookup(Operation::Title, url, &self.title).await
    }

    async fn resolve_filename(&self, url: &Url) -> Result<String, AdapterError> {
        self.lookup(Operation::Filename, url, &self.filename).await
    }

    async fn download(
        &mut self,
        url: &Url,
        mode: DownloadMode,
        mut callbacks: DownloadCallbacks,
    ) -> Result<(), AdapterError> {
        self.record(Operation::from(mode), url).await?;

        let output = self.output.read().await.clone();
        for line in &output {
            self.session.observe(line, &mut callbacks)?;
        }
        self.session.finish_output(&mut callbacks);

        self.check_diagnostics().await
    }
}
