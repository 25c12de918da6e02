//! Classification of youtube-dl standard output.
//!
//! Every line the downloader prints on standard output is offered to two
//! independent recognisers:
//!
//! - [`Phase`] maps bracketed stage tags (`[youtube]`, `[download]`,
//!   `[ffmpeg]`, ...) onto a coarse lifecycle.
//! - [`ProgressSample`] extracts percentage, size, speed and ETA from
//!   `[download]` progress lines.
//!
//! Both expose an `is_*_line` validity check and a `parse` that accepts
//! exactly the same set of lines, so callers may check first and parse
//! second without the two disagreeing.

mod error;
mod phase;
mod progress;

pub use error::ParseError;
pub use phase::Phase;
pub use progress::{Percentage, ProgressSample};
