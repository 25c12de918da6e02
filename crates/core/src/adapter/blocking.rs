//! Synchronous front end for callers without a runtime.

use tokio::runtime::{Builder, Runtime};
use url::Url;

use super::traits::MediaDownloader;
use super::types::DownloadMode;
use crate::error::AdapterError;
use crate::session::DownloadCallbacks;

/// Runs a [`MediaDownloader`] on a private current-thread runtime.
///
/// Every call blocks until the subprocess has exited. Must not be used from
/// inside an async context.
#[derive(Debug)]
pub struct BlockingAdapter<D> {
    runtime: Runtime,
    inner: D,
}

impl<D: MediaDownloader> BlockingAdapter<D> {
    pub fn new(inner: D) -> Result<Self, AdapterError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(AdapterError::Runtime)?;
        Ok(Self { runtime, inner })
    }

    pub fn title(&self, url: &Url) -> Result<String, AdapterError> {
        self.runtime.block_on(self.inner.resolve_title(url))
    }

    pub fn filename(&self, url: &Url) -> Result<String, AdapterError> {
        self.runtime.block_on(self.inner.resolve_filename(url))
    }

    pub fn download(
        &mut self,
        url: &Url,
        mode: DownloadMode,
        callbacks: DownloadCallbacks,
    ) -> Result<(), AdapterError> {
        self.runtime
            .block_on(self.inner.download(url, mode, callbacks))
    }

    pub fn download_video(
        &mut self,
        url: &Url,
        callbacks: DownloadCallbacks,
    ) -> Result<(), AdapterError> {
        self.download(url, DownloadMode::Video, callbacks)
    }

    pub fn download_audio(
        &mut self,
        url: &Url,
        callbacks: DownloadCallbacks,
    ) -> Result<(), AdapterError> {
        self.download(url, DownloadMode::Audio, callbacks)
    }

    pub fn get_ref(&self) -> &D {
        &self.inner
    }

    pub fn into_inner(self) -> D {
        self.inner
    }
}
