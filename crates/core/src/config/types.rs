use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    pub binaries: BinariesConfig,
    #[serde(default)]
    pub download: DownloadConfig,
}

impl Config {
    pub fn new(binaries: BinariesConfig) -> Self {
        Self {
            binaries,
            download: DownloadConfig::default(),
        }
    }

    pub fn with_download(mut self, download: DownloadConfig) -> Self {
        self.download = download;
        self
    }
}

/// Locations of the external tools.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BinariesConfig {
    /// youtube-dl or yt-dlp executable.
    pub youtube_dl: PathBuf,
    /// ffmpeg executable, passed to youtube-dl for audio extraction.
    pub ffmpeg: PathBuf,
    /// ffprobe executable. Only checked when set.
    #[serde(default)]
    pub ffprobe: Option<PathBuf>,
}

impl BinariesConfig {
    pub fn new(youtube_dl: impl Into<PathBuf>, ffmpeg: impl Into<PathBuf>) -> Self {
        Self {
            youtube_dl: youtube_dl.into(),
            ffmpeg: ffmpeg.into(),
            ffprobe: None,
        }
    }

    pub fn with_ffprobe(mut self, ffprobe: impl Into<PathBuf>) -> Self {
        self.ffprobe = Some(ffprobe.into());
        self
    }
}

/// Where and how downloads are written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DownloadConfig {
    #[serde(default = "default_destination_dir")]
    pub destination_dir: PathBuf,
    #[serde(default = "default_video_format")]
    pub video_format: String,
    #[serde(default = "default_audio_format")]
    pub audio_format: String,
    /// youtube-dl output template, relative to `destination_dir`.
    #[serde(default = "default_output_template")]
    pub output_template: String,
    /// Extra arguments placed just before the URL.
    #[serde(default)]
    pub extra_args: Vec<String>,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            destination_dir: default_destination_dir(),
            video_format: default_video_format(),
            audio_format: default_audio_format(),
            output_template: default_output_template(),
            extra_args: Vec::new(),
        }
    }
}

impl DownloadConfig {
    pub fn with_destination_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.destination_dir = dir.into();
        self
    }

    pub fn with_video_format(mut self, format: impl Into<String>) -> Self {
        self.video_format = format.into();
        self
    }

    pub fn with_audio_format(mut self, format: impl Into<String>) -> Self {
        self.audio_format = format.into();
        self
    }

    pub fn with_output_template(mut self, template: impl Into<String>) -> Self {
        self.output_template = template.into();
        self
    }

    pub fn with_extra_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_args = args.into_iter().map(Into::into).collect();
        self
    }
}

fn default_destination_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_video_format() -> String {
    "mp4".to_string()
}

fn default_audio_format() -> String {
    "mp3".to_string()
}

fn default_output_template() -> String {
    "%(title)s_%(id)s.%(ext)s".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_defaults() {
        let download = DownloadConfig::default();
        assert_eq!(download.destination_dir, PathBuf::from("."));
        assert_eq!(download.video_format, "mp4");
        assert_eq!(download.audio_format, "mp3");
        assert_eq!(download.output_template, "%(title)s_%(id)s.%(ext)s");
        assert!(download.extra_args.is_empty());
    }

    #[test]
    fn test_builders() {
        let config = Config::new(BinariesConfig::new("yt-dlp", "ffmpeg").with_ffprobe("ffprobe"))
            .with_download(
                DownloadConfig::default()
                    .with_destination_dir("/music")
                    .with_audio_format("opus")
                    .with_extra_args(["--rate-limit", "1M"]),
            );

        assert_eq!(config.binaries.ffprobe, Some(PathBuf::from("ffprobe")));
        assert_eq!(config.download.destination_dir, PathBuf::from("/music"));
        assert_eq!(config.download.audio_format, "opus");
        assert_eq!(config.download.video_format, "mp4");
        assert_eq!(config.download.extra_args, vec!["--rate-limit", "1M"]);
    }
}
