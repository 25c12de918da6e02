//! [`MediaDownloader`] backed by a youtube-dl compatible executable.

use async_trait::async_trait;
use tracing::{debug, info};
use url::Url;

use super::command::CommandBuilder;
use super::traits::MediaDownloader;
use super::types::{DownloadMode, Operation};
use crate::config::Config;
use crate::error::AdapterError;
use crate::output::Phase;
use crate::session::{DownloadCallbacks, DownloadSession};

/// Runs youtube-dl (or yt-dlp) for every operation.
#[derive(Debug)]
pub struct YoutubeDlAdapter {
    commands: CommandBuilder,
    session: DownloadSession,
}

impl YoutubeDlAdapter {
    pub fn new(commands: CommandBuilder) -> Self {
        Self {
            commands,
            session: DownloadSession::new(),
        }
    }

    /// Creates an adapter from a validated configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(CommandBuilder::new(config))
    }

    /// Phase reached by the last download.
    pub fn current_phase(&self) -> Phase {
        self.session.current_phase()
    }

    async fn lookup(&self, operation: Operation, url: &Url) -> Result<String, AdapterError> {
        debug!(%operation, %url, "Starting lookup");
        let invocation = self.commands.invocation(operation);
        self.session.lookup(operation, &invocation, url).await
    }
}

#[async_trait]
impl MediaDownloader for YoutubeDlAdapter {
    fn name(&self) -> &str {
        "youtube-dl"
    }

    async fn resolve_title(&self, url: &Url) -> Result<String, AdapterError> {
        self.lookup(Operation::Title, url).await
    }

    async fn resolve_filename(&self, url: &Url) -> Result<String, AdapterError> {
        self.lookup(Operation::Filename, url).await
    }

    async fn download(
        &mut self,
        url: &Url,
        mode: DownloadMode,
        callbacks: DownloadCallbacks,
    ) -> Result<(), AdapterError> {
        let operation = Operation::from(mode);
        info!(%operation, %url, "Starting download");
        let invocation = self.commands.invocation(operation);
        self.session
            .download(operation, &invocation, url, callbacks)
            .await?;
        info!(%operation, "Download finished");
        Ok(())
    }
}
