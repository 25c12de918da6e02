//! Adapter over the youtube-dl (or yt-dlp) command-line downloader.
//!
//! Looks up titles and filenames, downloads video or audio, and turns the
//! tool's console output into typed progress, phase, and diagnostic values.

pub mod adapter;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod output;
pub mod session;
pub mod testing;

pub use adapter::{
    BlockingAdapter, CommandBuilder, DownloadMode, Invocation, MediaDownloader, Operation,
    YoutubeDlAdapter,
};
pub use config::{
    load_config, load_config_from_str, validate_config, BinariesConfig, Config, ConfigError,
    DownloadConfig,
};
pub use diagnostics::{ErrorChain, Message, Severity};
pub use error::AdapterError;
pub use output::{ParseError, Percentage, Phase, ProgressSample};
pub use session::{DownloadCallbacks, DownloadSession};
