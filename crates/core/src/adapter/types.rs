//! Types shared by the adapter and command building.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// What to keep from a download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DownloadMode {
    /// Keep the video file.
    Video,
    /// Extract the audio track with ffmpeg and drop the video.
    Audio,
}

/// One kind of youtube-dl invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Title,
    Filename,
    DownloadVideo,
    DownloadAudio,
}

impl From<DownloadMode> for Operation {
    fn from(mode: DownloadMode) -> Self {
        match mode {
            DownloadMode::Video => Self::DownloadVideo,
            DownloadMode::Audio => Self::DownloadAudio,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Title => "title lookup",
            Self::Filename => "filename lookup",
            Self::DownloadVideo => "video download",
            Self::DownloadAudio => "audio download",
        };
        f.write_str(label)
    }
}

/// A program and its arguments, without the target URL.
///
/// The session appends the URL as the final argument when it spawns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}
