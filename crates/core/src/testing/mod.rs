//! Testing utilities and mock implementations.
//!
//! [`MockDownloader`] stands in for a real youtube-dl adapter, so callers of
//! [`MediaDownloader`](crate::adapter::MediaDownloader) can be tested without
//! spawning processes.

mod mock_downloader;

pub use mock_downloader::{MockDownloader, RecordedCall};

/// Test fixtures: output as printed by youtube-dl.
pub mod fixtures {
    /// Standard output of an audio download, from resolving to conversion.
    pub const AUDIO_DOWNLOAD_OUTPUT: &[&str] = &[
        "[youtube] oHg5SJYRHA0: Downloading webpage",
        "[youtube] oHg5SJYRHA0: Downloading video info webpage",
        "[youtube] oHg5SJYRHA0: Extracting video information",
        "[download] Destination: RickRoll'D_oHg5SJYRHA0.mp4",
        "[download]   0.0% of 9.22MiB at Unknown speed ETA Unknown ETA",
        "[download]  10.8% of 9.22MiB at  5.68MiB/s ETA 00:01",
        "[download]  54.2% of 9.22MiB at  8.01MiB/s ETA 00:00",
        "[download] 100% of 9.22MiB in 00:01",
        "[ffmpeg] Destination: RickRoll'D_oHg5SJYRHA0.mp3",
        "Deleting original file RickRoll'D_oHg5SJYRHA0.mp4 (pass -k to keep)",
    ];

    /// Standard error of a lookup on a truncated video ID.
    pub const INCOMPLETE_ID_DIAGNOSTICS: &[&str] = &[
        "WARNING: Falling back on generic information extractor.",
        "ERROR: Incomplete YouTube ID oHg5SJYRHA. URL https://www.youtube.com/watch?v=oHg5SJYRHA looks truncated.",
    ];
}
