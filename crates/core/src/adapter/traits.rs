//! Trait definitions for the adapter module.

use async_trait::async_trait;
use url::Url;

use super::types::DownloadMode;
use crate::error::AdapterError;
use crate::session::DownloadCallbacks;

/// Something that can look up and download media by URL.
#[async_trait]
pub trait MediaDownloader: Send + Sync {
    /// Returns the name of this downloader implementation.
    fn name(&self) -> &str;

    /// Returns the media title.
    async fn resolve_title(&self, url: &Url) -> Result<String, AdapterError>;

    /// Returns the filename a download would be written to.
    async fn resolve_filename(&self, url: &Url) -> Result<String, AdapterError>;

    /// Downloads the media, reporting through `callbacks`.
    async fn download(
        &mut self,
        url: &Url,
        mode: DownloadMode,
        callbacks: DownloadCallbacks,
    ) -> Result<(), AdapterError>;

    async fn download_video(
        &mut self,
        url: &Url,
        callbacks: DownloadCallbacks,
    ) -> Result<(), AdapterError> {
        self.download(url, DownloadMode::Video, callbacks).await
    }

    async fn download_audio(
        &mut self,
        url: &Url,
        callbacks: DownloadCallbacks,
    ) -> Result<(), AdapterError> {
        self.download(url, DownloadMode::Audio, callbacks).await
    }
}
