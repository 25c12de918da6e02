//! Adapter over youtube-dl.
//!
//! [`YoutubeDlAdapter`] turns each operation into an [`Invocation`] with
//! [`CommandBuilder`] and hands it to a [`DownloadSession`](crate::session::DownloadSession).
//! [`BlockingAdapter`] wraps any [`MediaDownloader`] for synchronous callers.
//!
//! # Example
//!
//! ```ignore
//! use ytdl_core::{load_config, validate_config, DownloadCallbacks, MediaDownloader, YoutubeDlAdapter};
//!
//! let config = load_config(Path::new("ytdl.toml"))?;
//! validate_config(&config)?;
//!
//! let mut adapter = YoutubeDlAdapter::from_config(&config);
//! let url = Url::parse("https://www.youtube.com/watch?v=oHg5SJYRHA0")?;
//!
//! println!("{}", adapter.resolve_title(&url).await?);
//!
//! let callbacks = DownloadCallbacks::new()
//!     .on_phase_change(|phase| println!("{phase}"))
//!     .on_progress(|sample| println!("{}%", sample.percent_complete()));
//! adapter.download_audio(&url, callbacks).await?;
//! ```

mod blocking;
mod command;
mod traits;
mod types;
mod youtube_dl;

pub use blocking::BlockingAdapter;
pub use command::CommandBuilder;
pub use traits::MediaDownloader;
pub use types::{DownloadMode, Invocation, Operation};
pub use youtube_dl::YoutubeDlAdapter;
