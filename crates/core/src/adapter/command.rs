//! youtube-dl argument lists for each operation.

use std::path::PathBuf;

use super::types::{Invocation, Operation};
use crate::config::{Config, DownloadConfig};

const NO_PART: &str = "--no-part";
const NO_PLAYLIST: &str = "--no-playlist";

/// Builds the [`Invocation`] for each operation from configuration.
///
/// The URL is not part of the invocation. The session appends it last,
/// after any configured extra arguments.
#[derive(Debug, Clone)]
pub struct CommandBuilder {
    youtube_dl: PathBuf,
    ffmpeg: PathBuf,
    download: DownloadConfig,
}

impl CommandBuilder {
    pub fn new(config: &Config) -> Self {
        Self {
            youtube_dl: config.binaries.youtube_dl.clone(),
            ffmpeg: config.binaries.ffmpeg.clone(),
            download: config.download.clone(),
        }
    }

    pub fn invocation(&self, operation: Operation) -> Invocation {
        let invocation = Invocation::new(&self.youtube_dl);
        let invocation = match operation {
            Operation::Title => invocation.args(["--get-title", "--encoding", "UTF-8"]),
            Operation::Filename => invocation
                .arg("-o")
                .arg(&self.download.output_template)
                .arg("--get-filename")
                .arg("--format")
                .arg(&self.download.video_format),
            Operation::DownloadVideo => invocation
                .arg("-o")
                .arg(self.output_path())
                .arg("--format")
                .arg(&self.download.video_format),
            Operation::DownloadAudio => invocation
                .arg("-o")
                .arg(self.output_path())
                .arg("--format")
                .arg(&self.download.video_format)
                .arg("--extract-audio")
                .arg("--audio-format")
                .arg(&self.download.audio_format)
                .arg("--ffmpeg-location")
                .arg(self.ffmpeg.to_string_lossy()),
        };

        invocation
            .args([NO_PART, NO_PLAYLIST])
            .args(self.download.extra_args.iter().cloned())
    }

    fn output_path(&self) -> String {
        self.download
            .destination_dir
            .join(&self.download.output_template)
            .to_string_lossy()
            .into_owned()
    }
}
